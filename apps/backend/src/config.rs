//! Centralized application configuration loaded from environment variables.
//!
//! All variables share the `BINGO_` prefix and are read once at startup.
//! Invalid values fail startup with a `CONFIG_ERROR` instead of being
//! silently replaced.

use std::env;

use crate::error::AppError;

/// Side length boards default to when `BINGO_BOARD_SIZE` is unset.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Centralized application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Game configuration
    pub board_size: usize,

    // Log filter applied when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Server configuration
        let host = env::var("BINGO_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port_str = env::var("BINGO_PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BINGO_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        // Game configuration
        let board_size_str =
            env::var("BINGO_BOARD_SIZE").unwrap_or_else(|_| DEFAULT_BOARD_SIZE.to_string());
        let board_size = board_size_str.parse::<usize>().map_err(|_| {
            AppError::config(format!(
                "BINGO_BOARD_SIZE must be a positive integer, got '{board_size_str}'"
            ))
        })?;
        if board_size == 0 {
            return Err(AppError::config(
                "BINGO_BOARD_SIZE must be a positive integer, got '0'",
            ));
        }

        let log_level = env::var("BINGO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            host,
            port,
            board_size,
            log_level,
        })
    }
}

//! Error handling for the bingo solver backend.

pub mod error_code;


pub use error_code::ErrorCode;

//! Shared bootstrap for unit tests inside this crate.

pub mod logging;

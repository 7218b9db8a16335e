//! Backend test support utilities
//!
//! This crate provides utilities shared by the backend's unit and integration
//! tests: unified logging initialization and ProblemDetails assertion helpers
//! that do not depend on backend types.

pub mod logging;
pub mod problem_details;

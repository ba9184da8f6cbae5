//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type (from shared::error)
//! - logging and time helpers

pub mod logger;
pub mod result;
pub mod time;

pub use result::AppResult;
pub use shared::error::{AppError, ErrorCategory, ErrorCode};

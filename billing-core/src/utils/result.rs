//! Unified Result Types
//!
//! Type aliases for the Result types used across the crate

/// Application-level Result type
///
/// Used by every operation exposed to the counter UI
pub type AppResult<T> = shared::error::AppResult<T>;

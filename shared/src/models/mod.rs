//! Data models
//!
//! Shared between the billing core and any host UI (via serde).
//! Money amounts are `i64` whole currency units.

pub mod earnings;
pub mod menu;
pub mod sale;
pub mod serde_helpers;

// Re-exports
pub use earnings::*;
pub use menu::*;
pub use sale::*;

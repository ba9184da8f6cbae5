//! Shared types for the counter billing workspace
//!
//! Domain models persisted by the ledger and the unified error system used
//! by every crate in the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{BillLine, EarningsSummary, Menu, MenuItem, PaymentMethod, SaleRecord};
pub use serde::{Deserialize, Serialize};

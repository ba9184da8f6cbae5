//! Pricing - bill totals from the current order
//!
//! - [`calculator`] - subtotal, tax, discount, grand total, food cost
//! - [`view`] - display model derived after every change
//! - [`Percent`] - tax/discount percentage input

pub mod calculator;
pub mod money;
mod percent;
pub mod view;

pub use calculator::{BillSummary, calculate_bill};
pub use percent::Percent;
pub use view::BillView;

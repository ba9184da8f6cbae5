//! Earnings Summary Model

use serde::{Deserialize, Serialize};

/// Revenue totals shown on the counter dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Business date the summary was computed for (YYYY-MM-DD)
    pub day: String,
    /// Sum of sale amounts for the day
    pub today: i64,
    /// Sum of sale amounts for the day's calendar month
    pub month: i64,
    /// Number of sales recorded on the day
    pub today_count: usize,
    /// Number of records in the whole ledger
    pub record_count: usize,
}

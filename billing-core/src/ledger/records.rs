//! In-memory view of the sales ledger and its aggregate queries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{EarningsSummary, SaleRecord};

use crate::utils::time::{day_key, month_key};

/// First seven characters of a record date (the whole date if shorter)
fn month_prefix(date: &str) -> &str {
    date.char_indices()
        .nth(7)
        .map_or(date, |(idx, _)| &date[..idx])
}

/// Ordered sale records, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<SaleRecord>,
}

/// One line of the recent-records panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordListing {
    /// "<date> <time> · <method>"
    pub label: String,
    pub amount: i64,
}

impl RecordListing {
    pub fn from_record(record: &SaleRecord) -> Self {
        Self {
            label: format!(
                "{} {} · {}",
                record.date, record.time, record.payment_method
            ),
            amount: record.amount,
        }
    }
}

impl Ledger {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SaleRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Σ amount over records dated `day` (YYYY-MM-DD)
    pub fn daily_total(&self, day: &str) -> i64 {
        self.records
            .iter()
            .filter(|r| r.date == day)
            .map(|r| r.amount)
            .sum()
    }

    /// Σ amount over records whose date starts with `year_month` (YYYY-MM)
    pub fn monthly_total(&self, year_month: &str) -> i64 {
        self.records
            .iter()
            .filter(|r| month_prefix(&r.date) == year_month)
            .map(|r| r.amount)
            .sum()
    }

    /// Last `n` records, most recent first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &SaleRecord> + '_ {
        self.records.iter().rev().take(n)
    }

    /// Display lines for the last `n` records, most recent first
    pub fn listing(&self, n: usize) -> Vec<RecordListing> {
        self.recent(n).map(RecordListing::from_record).collect()
    }

    /// Daily and monthly revenue for `today`
    pub fn earnings(&self, today: NaiveDate) -> EarningsSummary {
        let day = day_key(today);
        let month = month_key(today);
        EarningsSummary {
            today: self.daily_total(&day),
            month: self.monthly_total(&month),
            today_count: self.records.iter().filter(|r| r.date == day).count(),
            record_count: self.records.len(),
            day,
        }
    }
}

impl From<Vec<SaleRecord>> for Ledger {
    fn from(records: Vec<SaleRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PaymentMethod;

    fn sale(date: &str, time: &str, amount: i64, method: PaymentMethod) -> SaleRecord {
        SaleRecord {
            date: date.into(),
            time: time.into(),
            amount,
            items: Vec::new(),
            payment_method: method,
            tax: 0,
            discount: 0,
        }
    }

    fn ledger() -> Ledger {
        Ledger::new(vec![
            sale("2024-02-28", "09:00 pm", 500, PaymentMethod::Card),
            sale("2024-03-01", "10:15 am", 200, PaymentMethod::Cash),
            sale("2024-03-15", "02:30 pm", 150, PaymentMethod::Upi),
        ])
    }

    #[test]
    fn test_daily_and_monthly_totals() {
        let ledger = ledger();
        assert_eq!(ledger.monthly_total("2024-03"), 350);
        assert_eq!(ledger.daily_total("2024-03-01"), 200);
        assert_eq!(ledger.daily_total("2024-03-02"), 0);
        assert_eq!(ledger.monthly_total("2024-02"), 500);
    }

    #[test]
    fn test_month_prefix() {
        assert_eq!(month_prefix("2024-03-15"), "2024-03");
        assert_eq!(month_prefix("2024"), "2024");
        assert_eq!(month_prefix(""), "");
    }

    #[test]
    fn test_recent_most_recent_first() {
        let ledger = ledger();
        let dates: Vec<&str> = ledger.recent(2).map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-15", "2024-03-01"]);
        assert_eq!(ledger.recent(30).count(), 3);
    }

    #[test]
    fn test_listing_labels() {
        let listing = ledger().listing(1);
        assert_eq!(
            listing,
            vec![RecordListing {
                label: "2024-03-15 02:30 pm · UPI".into(),
                amount: 150,
            }]
        );
    }

    #[test]
    fn test_earnings() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let summary = ledger().earnings(today);
        assert_eq!(summary.day, "2024-03-15");
        assert_eq!(summary.today, 150);
        assert_eq!(summary.month, 350);
        assert_eq!(summary.today_count, 1);
        assert_eq!(summary.record_count, 3);
    }
}

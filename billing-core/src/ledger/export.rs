//! CSV export of the sales ledger

use chrono::NaiveDate;

use super::records::Ledger;
use crate::utils::time::day_key;
use crate::utils::{AppError, AppResult};

pub const CSV_HEADER: &str = "Date,Time,Amount,Payment Method";

/// Render the ledger as CSV, one row per record in ledger order
///
/// Rows are newline separated without a trailing newline and fields are not
/// quoted. An empty ledger is reported as `NothingToExport`.
pub fn export_csv(ledger: &Ledger) -> AppResult<String> {
    if ledger.is_empty() {
        return Err(AppError::nothing_to_export());
    }

    let mut rows = Vec::with_capacity(ledger.len() + 1);
    rows.push(CSV_HEADER.to_string());
    rows.extend(ledger.records().iter().map(|r| {
        format!("{},{},{},{}", r.date, r.time, r.amount, r.payment_method)
    }));
    Ok(rows.join("\n"))
}

/// Download name for the export, e.g. `restaurant_records_2024-03-15.csv`
pub fn export_file_name(day: NaiveDate) -> String {
    format!("restaurant_records_{}.csv", day_key(day))
}

impl Ledger {
    /// See [`export_csv`]
    pub fn export_csv(&self) -> AppResult<String> {
        export_csv(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::{PaymentMethod, SaleRecord};

    #[test]
    fn test_export_csv() {
        let ledger = Ledger::new(vec![
            SaleRecord {
                date: "2024-03-01".into(),
                time: "10:15 am".into(),
                amount: 200,
                items: Vec::new(),
                payment_method: PaymentMethod::Cash,
                tax: 0,
                discount: 0,
            },
            SaleRecord {
                date: "2024-03-15".into(),
                time: "02:30 pm".into(),
                amount: 150,
                items: Vec::new(),
                payment_method: PaymentMethod::Upi,
                tax: 7,
                discount: 0,
            },
        ]);

        assert_eq!(
            ledger.export_csv().unwrap(),
            "Date,Time,Amount,Payment Method\n\
             2024-03-01,10:15 am,200,Cash\n\
             2024-03-15,02:30 pm,150,UPI"
        );
    }

    #[test]
    fn test_export_empty_ledger() {
        let err = Ledger::default().export_csv().unwrap_err();
        assert_eq!(err.code, ErrorCode::NothingToExport);
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_export_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(export_file_name(day), "restaurant_records_2024-03-15.csv");
    }
}

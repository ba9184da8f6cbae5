//! Time helpers: the string formats used on records and invoices
//!
//! All stamps use the terminal's local clock.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::{AppError, AppResult};

/// Current local date and time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a day key (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Day key stored on sale records (YYYY-MM-DD)
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Month key used for monthly totals (YYYY-MM)
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// 12-hour clock label, lowercase (e.g. "02:30 pm")
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string().to_lowercase()
}

/// Invoice date label (e.g. "18 Oct 2026")
pub fn invoice_date_label(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(day_key(date), "2024-03-01");
        assert_eq!(month_key(date), "2024-03");
        assert_eq!(parse_date("2024-03-01").unwrap(), date);
        assert!(parse_date("01/03/2024").is_err());
    }

    #[test]
    fn test_clock_label() {
        let afternoon = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(clock_label(afternoon), "02:30 pm");
        let midnight = NaiveTime::from_hms_opt(0, 5, 0).unwrap();
        assert_eq!(clock_label(midnight), "12:05 am");
    }

    #[test]
    fn test_invoice_date_label() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(invoice_date_label(date), "18 Oct 2026");
    }
}

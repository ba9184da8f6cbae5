//! Money arithmetic
//!
//! Amounts are whole currency units (`i64`). Intermediate math runs on
//! `Decimal` and is rounded back with half-away-from-zero.

use std::str::FromStr;

use rust_decimal::prelude::*;

/// Upper bound accepted for an amount typed by the operator
pub const MAX_INPUT_AMOUNT: i64 = 1_000_000_000;

/// Convert an amount to Decimal for calculation
#[inline]
pub fn to_decimal(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Round a Decimal back to a whole amount (half away from zero)
///
/// Values outside the `i64` range saturate.
#[inline]
pub fn to_amount(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// `round(amount × percent / 100)`
pub fn percent_of(amount: i64, percent: Decimal) -> i64 {
    to_decimal(amount)
        .checked_mul(percent)
        .map(|v| to_amount(v / Decimal::ONE_HUNDRED))
        .unwrap_or(i64::MAX)
}

/// Leading numeric value of operator text, if any
///
/// Mirrors what a lenient number field accepts: leading whitespace and an
/// optional sign, then digits with at most one decimal point. Trailing text
/// is ignored ("5%" reads as 5). Returns `None` when no digit is present or
/// the number does not fit a Decimal.
pub fn lenient_decimal(input: &str) -> Option<Decimal> {
    let s = input.trim_start();
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    let digits = body[..end].trim_end_matches('.');
    let normalized = if digits.starts_with('.') {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    let value = Decimal::from_str(&normalized).ok()?;
    Some(if negative { -value } else { value })
}

/// Amount typed by the operator: lenient, rounded, never negative
///
/// Non-numeric input reads as 0; values above [`MAX_INPUT_AMOUNT`] are capped.
pub fn lenient_amount(input: &str) -> i64 {
    lenient_decimal(input)
        .map(to_amount)
        .unwrap_or(0)
        .clamp(0, MAX_INPUT_AMOUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_rounds_half_away_from_zero() {
        assert_eq!(percent_of(100, Decimal::from(5)), 5);
        // 30 × 5% = 1.5 → 2
        assert_eq!(percent_of(30, Decimal::from(5)), 2);
        // 10 × 4% = 0.4 → 0
        assert_eq!(percent_of(10, Decimal::from(4)), 0);
        // 45 × 2.5% = 1.125 → 1
        assert_eq!(percent_of(45, Decimal::new(25, 1)), 1);
        assert_eq!(percent_of(0, Decimal::from(18)), 0);
    }

    #[test]
    fn test_lenient_decimal() {
        assert_eq!(lenient_decimal("5"), Some(Decimal::from(5)));
        assert_eq!(lenient_decimal(" 5%"), Some(Decimal::from(5)));
        assert_eq!(lenient_decimal("12.5abc"), Some(Decimal::new(125, 1)));
        assert_eq!(lenient_decimal(".5"), Some(Decimal::new(5, 1)));
        assert_eq!(lenient_decimal("7."), Some(Decimal::from(7)));
        assert_eq!(lenient_decimal("-3"), Some(Decimal::from(-3)));
        assert_eq!(lenient_decimal("1.2.3"), Some(Decimal::new(12, 1)));
        assert_eq!(lenient_decimal("abc"), None);
        assert_eq!(lenient_decimal(""), None);
        assert_eq!(lenient_decimal("-"), None);
        assert_eq!(lenient_decimal("."), None);
    }

    #[test]
    fn test_lenient_amount() {
        assert_eq!(lenient_amount("100"), 100);
        assert_eq!(lenient_amount("99.5"), 100);
        assert_eq!(lenient_amount("-20"), 0);
        assert_eq!(lenient_amount("cash"), 0);
        assert_eq!(lenient_amount("99999999999999"), MAX_INPUT_AMOUNT);
    }
}

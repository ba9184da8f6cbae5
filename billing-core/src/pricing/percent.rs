//! Percentage inputs (tax %, discount %)

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;

use super::money::lenient_decimal;
use crate::utils::{AppError, ErrorCode};

/// A non-negative percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(Decimal);

impl Percent {
    pub const ZERO: Percent = Percent(Decimal::ZERO);
    pub const HUNDRED: Percent = Percent(Decimal::ONE_HUNDRED);

    /// Negative values become 0
    pub fn new(value: Decimal) -> Self {
        Self(value.max(Decimal::ZERO))
    }

    pub fn from_int(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Lenient parse of operator text
    ///
    /// A numeric prefix is honoured ("5%" → 5). Anything non-numeric or
    /// negative becomes 0.
    pub fn parse_lenient(input: &str) -> Self {
        match lenient_decimal(input) {
            Some(v) if v.is_sign_positive() => Self::new(v),
            _ => Self::ZERO,
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Limit to at most `max`
    pub fn capped(self, max: Percent) -> Self {
        self.min(max)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

/// Strict parse: the whole input must be a non-negative number
/// (a trailing `%` is allowed)
impl FromStr for Percent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let invalid = || {
            AppError::with_message(ErrorCode::InvalidPercent, format!("Invalid percentage: {}", s))
                .with_detail("input", s)
        };
        let value = Decimal::from_str(number).map_err(|_| invalid())?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid());
        }
        Ok(Self::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Percent::parse_lenient("5"), Percent::from_int(5));
        assert_eq!(Percent::parse_lenient("5%"), Percent::from_int(5));
        assert_eq!(Percent::parse_lenient("2.5"), Percent::new(Decimal::new(25, 1)));
        assert_eq!(Percent::parse_lenient(""), Percent::ZERO);
        assert_eq!(Percent::parse_lenient("abc"), Percent::ZERO);
        assert_eq!(Percent::parse_lenient("-10"), Percent::ZERO);
        assert_eq!(Percent::parse_lenient("5000"), Percent::from_int(5000));
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("18".parse::<Percent>().unwrap(), Percent::from_int(18));
        assert_eq!(" 12.5 % ".parse::<Percent>().unwrap(), Percent::new(Decimal::new(125, 1)));

        assert_eq!("2000".parse::<Percent>().unwrap(), Percent::from_int(2000));

        for bad in ["", "abc", "5x", "-1"] {
            let err = bad.parse::<Percent>().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidPercent, "input {:?}", bad);
        }
    }

    #[test]
    fn test_capped_and_display() {
        assert_eq!(Percent::from_int(150).capped(Percent::HUNDRED), Percent::HUNDRED);
        assert_eq!(Percent::from_int(10).capped(Percent::HUNDRED), Percent::from_int(10));
        assert_eq!(Percent::new(Decimal::new(250, 2)).to_string(), "2.5%");
    }
}

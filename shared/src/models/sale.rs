//! Sale Record Model
//!
//! Wire shape of one persisted sale:
//!
//! ```json
//! {
//!   "date": "2024-03-01",
//!   "time": "02:30 pm",
//!   "amount": 95,
//!   "items": [{ "name": "Dosa", "qty": 2, "price": 50, "total": 100 }],
//!   "paymentMethod": "Cash",
//!   "tax": 5,
//!   "discount": 10
//! }
//! ```
//!
//! Missing or `null` fields decode to their defaults so that records written
//! by older builds stay readable.

use super::serde_helpers::null_as_default;
use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One priced line of a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    pub name: String,
    pub qty: u32,
    /// Unit price
    pub price: i64,
    /// qty × price, saturating
    pub total: i64,
}

impl BillLine {
    pub fn new(name: impl Into<String>, qty: u32, price: i64) -> Self {
        Self {
            name: name.into(),
            qty,
            price,
            total: i64::from(qty).saturating_mul(price),
        }
    }
}

/// Payment method recorded with a sale
///
/// Unknown names read from storage are kept verbatim in [`PaymentMethod::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Upi,
    Other(OtherMethod),
}

/// Name of a payment method outside `Cash`, `Card` and `UPI`
///
/// Only built by [`PaymentMethod::named`], so it never spells a known method
/// and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherMethod(String);

impl OtherMethod {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PaymentMethod {
    /// Method for a stored name
    ///
    /// Known names map to their variant and an empty name reads as `Cash`.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.as_str() {
            "" | "Cash" => Self::Cash,
            "Card" => Self::Card,
            "UPI" => Self::Upi,
            _ => Self::Other(OtherMethod(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Upi => "UPI",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        Self::named(value)
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Other(OtherMethod(name)) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Strict parse for operator selection (case-insensitive, known methods only)
impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            other => Err(AppError::with_message(
                ErrorCode::PaymentInvalidMethod,
                format!("Unknown payment method: {}", other),
            )),
        }
    }
}

/// A completed sale, immutable once appended to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Calendar day (YYYY-MM-DD)
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Local clock string, e.g. "02:30 pm"
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    /// Grand total
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<BillLine>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: PaymentMethod,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount: i64,
}

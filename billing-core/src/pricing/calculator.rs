//! Bill Calculator
//!
//! Pure functions from an order and two percentages to bill totals.
//! Uses rust_decimal for the percentage math, amounts stay whole units.

use serde::{Deserialize, Serialize};
use shared::models::{BillLine, PaymentMethod, SaleRecord};

use super::money::percent_of;
use super::percent::Percent;
use crate::order::OrderState;

/// Computed totals for the current order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillSummary {
    pub lines: Vec<BillLine>,
    pub subtotal: i64,
    pub tax: i64,
    pub discount: i64,
    pub grand_total: i64,
    /// Σ qty × cost over items with a known cost
    pub food_cost: i64,
}

impl BillSummary {
    /// Empty bill: nothing selected, all amounts zero
    pub fn is_empty(&self) -> bool {
        self.subtotal <= 0
    }

    /// Gross margin over food cost
    pub fn margin(&self) -> i64 {
        self.grand_total - self.food_cost
    }

    /// Snapshot as a ledger record
    pub fn to_sale_record(
        &self,
        date: impl Into<String>,
        time: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> SaleRecord {
        SaleRecord {
            date: date.into(),
            time: time.into(),
            amount: self.grand_total,
            items: self.lines.clone(),
            payment_method,
            tax: self.tax,
            discount: self.discount,
        }
    }
}

/// Saturating sum of amounts
fn sum_amounts(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0, i64::saturating_add)
}

/// Σ line totals
pub fn subtotal(order: &OrderState) -> i64 {
    sum_amounts(order.current_bill_lines().map(|l| l.total))
}

/// Σ qty × cost, items without a cost contribute 0
pub fn food_cost(order: &OrderState) -> i64 {
    sum_amounts(
        order
            .selected()
            .filter_map(|(item, qty)| item.cost.map(|c| i64::from(qty).saturating_mul(c))),
    )
}

/// `round(subtotal × tax% / 100)`, 0 for a non-positive subtotal
pub fn tax_amount(subtotal: i64, tax: Percent) -> i64 {
    if subtotal <= 0 {
        return 0;
    }
    percent_of(subtotal, tax.value())
}

/// `round(subtotal × discount% / 100)`, discount capped at 100%
pub fn discount_amount(subtotal: i64, discount: Percent) -> i64 {
    if subtotal <= 0 {
        return 0;
    }
    percent_of(subtotal, discount.capped(Percent::HUNDRED).value())
}

/// Calculate the full bill for an order
///
/// grand_total = subtotal + tax - discount
pub fn calculate_bill(order: &OrderState, tax: Percent, discount: Percent) -> BillSummary {
    let lines: Vec<BillLine> = order.current_bill_lines().collect();
    let subtotal = sum_amounts(lines.iter().map(|l| l.total));
    let food_cost = food_cost(order);

    if subtotal <= 0 {
        return BillSummary {
            lines,
            food_cost,
            ..BillSummary::default()
        };
    }

    let tax = tax_amount(subtotal, tax);
    let discount = discount_amount(subtotal, discount);

    BillSummary {
        lines,
        subtotal,
        tax,
        discount,
        grand_total: subtotal.saturating_add(tax) - discount,
        food_cost,
    }
}

//! Display model for the bill panel

use serde::{Deserialize, Serialize};
use shared::models::BillLine;

use super::calculator::{BillSummary, calculate_bill};
use super::percent::Percent;
use crate::order::OrderState;

/// Everything the bill panel shows, derived in one pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillView {
    pub lines: Vec<BillLine>,
    pub subtotal: i64,
    pub food_cost: i64,
    pub tax: i64,
    pub discount: i64,
    pub grand_total: i64,
    /// Amount the customer has to pay (the grand total)
    pub payment_due: i64,
    pub amount_received: i64,
    /// Change to hand back, only when something was received against a
    /// non-empty bill
    pub change: Option<i64>,
    pub is_empty: bool,
}

impl BillView {
    /// Derive the view from the order, percentages and amount received
    pub fn derive(order: &OrderState, tax: Percent, discount: Percent, received: i64) -> Self {
        Self::from_summary(calculate_bill(order, tax, discount), received)
    }

    pub fn from_summary(summary: BillSummary, received: i64) -> Self {
        let due = summary.grand_total;
        let change = (received > 0 && due > 0).then(|| (received - due).max(0));
        let is_empty = summary.is_empty();

        Self {
            lines: summary.lines,
            subtotal: summary.subtotal,
            food_cost: summary.food_cost,
            tax: summary.tax,
            discount: summary.discount,
            grand_total: due,
            payment_due: due,
            amount_received: received,
            change,
            is_empty,
        }
    }

    /// Whether the subtotal row is worth showing next to the grand total
    pub fn shows_adjustments(&self) -> bool {
        self.tax > 0 || self.discount > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Menu;
    use std::sync::Arc;

    fn dosa_order() -> OrderState {
        let mut order = OrderState::new(Arc::new(Menu::counter_default()));
        order.increment("Dosa").unwrap();
        order.increment("Dosa").unwrap();
        order
    }

    #[test]
    fn test_change_calculation() {
        let order = dosa_order();
        let view = BillView::derive(&order, Percent::from_int(5), Percent::from_int(10), 200);
        assert_eq!(view.payment_due, 95);
        assert_eq!(view.change, Some(105));
        assert!(view.shows_adjustments());
    }

    #[test]
    fn test_change_never_negative() {
        let view = BillView::derive(&dosa_order(), Percent::ZERO, Percent::ZERO, 50);
        assert_eq!(view.change, Some(0));
    }

    #[test]
    fn test_change_hidden_without_received_amount() {
        let view = BillView::derive(&dosa_order(), Percent::ZERO, Percent::ZERO, 0);
        assert_eq!(view.change, None);
        assert!(!view.shows_adjustments());
    }

    #[test]
    fn test_empty_order_view() {
        let order = OrderState::new(Arc::new(Menu::counter_default()));
        let view = BillView::derive(&order, Percent::from_int(5), Percent::ZERO, 100);
        assert!(view.is_empty);
        assert_eq!(view.payment_due, 0);
        assert_eq!(view.change, None);
    }
}

//! In-progress order quantities
//!
//! One quantity slot per menu item, stored in menu-definition order.

use std::sync::Arc;

use shared::error::ErrorCode;
use shared::models::{BillLine, MAX_QUANTITY, Menu, MenuItem};
use tracing::debug;

use crate::utils::{AppError, AppResult};

/// Selected quantity per menu item for one bill
///
/// Quantities are never negative: `decrement` at zero is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    menu: Arc<Menu>,
    quantities: Vec<u32>,
}

impl OrderState {
    /// Create an empty order over the given menu
    pub fn new(menu: Arc<Menu>) -> Self {
        let quantities = vec![0; menu.len()];
        Self { menu, quantities }
    }

    pub fn menu(&self) -> &Arc<Menu> {
        &self.menu
    }

    fn slot(&self, item: &str) -> AppResult<usize> {
        self.menu
            .position(item)
            .ok_or_else(|| AppError::menu_item_not_found(item))
    }

    /// Add one unit of `item`, returning the new quantity
    ///
    /// Rejected once the item already holds [`MAX_QUANTITY`] units.
    pub fn increment(&mut self, item: &str) -> AppResult<u32> {
        let idx = self.slot(item)?;
        let qty = &mut self.quantities[idx];
        if *qty >= MAX_QUANTITY {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("Quantity of '{}' cannot exceed {}", item, MAX_QUANTITY),
            )
            .with_detail("item", item)
            .with_detail("max", MAX_QUANTITY));
        }
        *qty += 1;
        debug!(item = %item, qty = *qty, "Quantity incremented");
        Ok(*qty)
    }

    /// Remove one unit of `item`, returning the new quantity
    ///
    /// At zero this does nothing and returns 0.
    pub fn decrement(&mut self, item: &str) -> AppResult<u32> {
        let idx = self.slot(item)?;
        let qty = &mut self.quantities[idx];
        if *qty == 0 {
            return Ok(0);
        }
        *qty -= 1;
        debug!(item = %item, qty = *qty, "Quantity decremented");
        Ok(*qty)
    }

    /// Set every quantity back to zero
    pub fn reset(&mut self) {
        self.quantities.iter_mut().for_each(|q| *q = 0);
    }

    /// Current quantity of `item` (0 for unknown items)
    pub fn quantity(&self, item: &str) -> u32 {
        self.menu
            .position(item)
            .map(|idx| self.quantities[idx])
            .unwrap_or(0)
    }

    /// True when no item has a positive quantity
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|&q| q == 0)
    }

    /// Menu items with a positive quantity, in menu order
    pub fn selected(&self) -> impl Iterator<Item = (&MenuItem, u32)> + '_ {
        self.menu
            .items()
            .iter()
            .zip(self.quantities.iter().copied())
            .filter(|(_, qty)| *qty > 0)
    }

    /// Bill lines for all items with a positive quantity, in menu order
    ///
    /// Each call yields a fresh iterator over the current state.
    pub fn current_bill_lines(&self) -> impl Iterator<Item = BillLine> + '_ {
        self.selected()
            .map(|(item, qty)| BillLine::new(item.name.clone(), qty, item.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MAX_PRICE;

    fn order() -> OrderState {
        OrderState::new(Arc::new(Menu::counter_default()))
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut order = order();
        assert_eq!(order.increment("Dosa").unwrap(), 1);
        assert_eq!(order.increment("Dosa").unwrap(), 2);
        assert_eq!(order.decrement("Dosa").unwrap(), 1);
        assert_eq!(order.quantity("Dosa"), 1);
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut order = order();
        assert_eq!(order.decrement("Omelette").unwrap(), 0);
        assert_eq!(order.quantity("Omelette"), 0);
        assert!(order.is_empty());
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut order = order();
        let err = order.increment("Biryani").unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        let err = order.decrement("Biryani").unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert!(order.is_empty());
    }

    #[test]
    fn test_increment_stops_at_max_quantity() {
        let menu = Menu::new(vec![MenuItem::new("Feast", MAX_PRICE, None)]).unwrap();
        let mut order = OrderState::new(Arc::new(menu));
        for _ in 0..MAX_QUANTITY {
            order.increment("Feast").unwrap();
        }

        let err = order.increment("Feast").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(order.quantity("Feast"), MAX_QUANTITY);

        let lines: Vec<BillLine> = order.current_bill_lines().collect();
        assert_eq!(lines[0].total, i64::from(MAX_QUANTITY) * MAX_PRICE);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut order = order();
        order.increment("Dosa").unwrap();
        order.increment("Poratta").unwrap();

        order.reset();
        let once = order.clone();
        order.reset();

        assert_eq!(order, once);
        assert!(order.is_empty());
    }

    #[test]
    fn test_bill_lines_in_menu_order() {
        let mut order = order();
        order.increment("Chappathi").unwrap();
        order.increment("Dosa").unwrap();
        order.increment("Dosa").unwrap();
        order.increment("Poratta").unwrap();
        order.decrement("Poratta").unwrap();

        let lines: Vec<BillLine> = order.current_bill_lines().collect();
        assert_eq!(
            lines,
            vec![BillLine::new("Dosa", 2, 50), BillLine::new("Chappathi", 1, 35)]
        );

        // Restartable: a second pass yields the same lines
        assert_eq!(order.current_bill_lines().count(), 2);
    }
}

//! Menu Model

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum allowed unit price or cost per menu item
pub const MAX_PRICE: i64 = 1_000_000;
/// Maximum allowed quantity of one item on a bill
pub const MAX_QUANTITY: u32 = 9999;

/// A sellable menu item
///
/// Prices and costs are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique display name, also used as the item identifier
    pub name: String,
    /// Unit selling price
    pub price: i64,
    /// Unit food cost (optional, used for margin insight)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: i64, cost: Option<i64>) -> Self {
        Self {
            name: name.into(),
            price,
            cost,
        }
    }
}

/// Fixed, ordered set of menu items
///
/// Order of definition is the order bill lines are listed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu, rejecting duplicate names and amounts outside `0..=MAX_PRICE`
    pub fn new(items: Vec<MenuItem>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name.trim().is_empty() {
                return Err(AppError::validation("Menu item name must not be empty"));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::MenuItemDuplicate,
                    format!("Menu item '{}' is defined more than once", item.name),
                )
                .with_detail("item", item.name.clone()));
            }
            let in_range = |v: i64| (0..=MAX_PRICE).contains(&v);
            if !in_range(item.price) || item.cost.is_some_and(|c| !in_range(c)) {
                return Err(AppError::with_message(
                    ErrorCode::MenuItemInvalidPrice,
                    format!(
                        "Menu item '{}' price and cost must be within 0..={}",
                        item.name, MAX_PRICE
                    ),
                )
                .with_detail("item", item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse and validate a menu from a JSON array of items
    pub fn from_json(json: &str) -> AppResult<Self> {
        let items: Vec<MenuItem> = serde_json::from_str(json).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid menu JSON: {}", e))
        })?;
        Self::new(items)
    }

    /// The counter's standard menu
    pub fn counter_default() -> Self {
        Self {
            items: vec![
                MenuItem::new("Poratta", 40, Some(15)),
                MenuItem::new("Dosa", 50, Some(18)),
                MenuItem::new("Chicken Rice", 80, Some(35)),
                MenuItem::new("Half Boil", 30, Some(12)),
                MenuItem::new("Omelette", 45, Some(18)),
                MenuItem::new("Chappathi", 35, Some(12)),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of an item in definition order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|m| m.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|m| m.name == name)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::counter_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_valid() {
        let menu = Menu::counter_default();
        assert_eq!(menu.len(), 6);
        assert!(Menu::new(menu.items().to_vec()).is_ok());
        assert_eq!(menu.get("Dosa").map(|m| m.price), Some(50));
        assert_eq!(menu.position("Chappathi"), Some(5));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Menu::new(vec![
            MenuItem::new("Dosa", 50, None),
            MenuItem::new("Dosa", 55, None),
        ])
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemDuplicate);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Menu::new(vec![MenuItem::new("Tea", -1, None)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        let err = Menu::new(vec![MenuItem::new("Tea", 10, Some(-3))]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }

    #[test]
    fn test_price_above_max_rejected() {
        let err = Menu::new(vec![MenuItem::new("Feast", 5_000_000_000_000_000_000, None)])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        let err = Menu::new(vec![MenuItem::new("Feast", 100, Some(MAX_PRICE + 1))]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        assert!(Menu::new(vec![MenuItem::new("Feast", MAX_PRICE, Some(MAX_PRICE))]).is_ok());
    }

    #[test]
    fn test_from_json() {
        let menu = Menu::from_json(r#"[{"name":"Tea","price":10},{"name":"Vada","price":15,"cost":6}]"#)
            .unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.get("Tea").and_then(|m| m.cost), None);
        assert_eq!(menu.get("Vada").and_then(|m| m.cost), Some(6));

        let err = Menu::from_json("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}

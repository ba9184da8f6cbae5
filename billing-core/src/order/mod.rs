//! Order state: the current selection of menu items for one bill

mod state;

pub use state::OrderState;

//! Checkout - the operator's actions on the current bill

mod session;

pub use session::CheckoutSession;

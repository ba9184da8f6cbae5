//! Invoice snapshot and plain-text rendering

mod document;
pub mod text;

pub use document::{DEFAULT_CUSTOMER, INVOICE_TITLE, InvoiceDocument, NO_TABLE, SummaryRow};
pub use text::TextReceiptBuilder;

//! Counter Billing - restaurant counter billing core
//!
//! # Overview
//!
//! - **Order** (`order`): selected quantity per menu item
//! - **Pricing** (`pricing`): subtotal, tax, discount, grand total, food cost
//! - **Ledger** (`ledger`): append-only sales ledger on redb, daily/monthly
//!   totals and CSV export
//! - **Invoice** (`invoice`): finalized bill snapshot and text rendering
//! - **Checkout** (`checkout`): the operator's session tying these together
//!
//! # Module layout
//!
//! ```text
//! billing-core/src/
//! ├── core/       # configuration
//! ├── utils/      # logging, time, result types
//! ├── order/      # order state
//! ├── pricing/    # bill calculator and view
//! ├── ledger/     # sales ledger storage and queries
//! ├── invoice/    # invoice document
//! └── checkout/   # checkout session
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use billing_core::{CheckoutSession, open_ledger, setup_environment};
//! use billing_core::utils::time::now_local;
//!
//! let config = setup_environment()?;
//! let ledger = open_ledger(&config)?;
//! let mut session = CheckoutSession::new(Arc::new(config.load_menu()?));
//!
//! session.increment("Dosa")?;
//! session.set_tax_percent_input("5");
//! session.set_amount_received_input("200");
//! let record = session.complete_payment(&ledger, now_local())?;
//! println!("Recorded {}", record.amount);
//!
//! let ledger_view = ledger.load();
//! for line in ledger_view.listing(config.recent_records_limit) {
//!     println!("{}  {}", line.label, line.amount);
//! }
//!
//! session.increment("Omelette")?;
//! let invoice = session.issue_invoice(&ledger, now_local())?;
//! println!("{}", invoice.render_text(config.receipt_width));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod checkout;
pub mod core;
pub mod invoice;
pub mod ledger;
pub mod order;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use checkout::CheckoutSession;
pub use crate::core::Config;
pub use invoice::InvoiceDocument;
pub use ledger::{Ledger, LedgerStorage, RecordListing, SaleRecorder};
pub use order::OrderState;
pub use pricing::{BillSummary, BillView, Percent};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Prepare the host process
///
/// Loads `.env`, reads [`Config`] from the environment, creates the working
/// directory and starts logging.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_dir();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        log_dir.as_deref().and_then(|p| p.to_str()),
    )?;

    tracing::info!(work_dir = %config.work_dir, "Counter billing environment ready");
    Ok(config)
}

/// Open the ledger database configured in `config`
pub fn open_ledger(config: &Config) -> AppResult<LedgerStorage> {
    let path = config.ledger_db_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::database(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let storage = LedgerStorage::open(&path)?;
    tracing::info!(path = %path.display(), "Sales ledger opened");
    Ok(storage)
}

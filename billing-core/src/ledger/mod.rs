//! Sales Ledger
//!
//! Append-only list of completed sales, persisted as one JSON document in a
//! local redb store.
//!
//! - [`storage`] - redb persistence (`load`, `append`)
//! - [`records`] - aggregate queries over a loaded ledger
//! - [`export`] - CSV export

pub mod export;
pub mod records;
pub mod storage;

pub use export::{CSV_HEADER, export_csv, export_file_name};
pub use records::{Ledger, RecordListing};
pub use storage::{
    DecodedLedger, LedgerStorage, QuarantinedBlob, StorageError, StorageResult, decode_ledger,
};

use shared::models::SaleRecord;

use crate::utils::AppResult;

/// Destination for finalized sales
///
/// Implemented by [`LedgerStorage`]; the checkout session only needs this.
pub trait SaleRecorder {
    /// Persist one sale, returning the new number of records
    fn record_sale(&self, record: &SaleRecord) -> AppResult<usize>;
}

impl SaleRecorder for LedgerStorage {
    fn record_sale(&self, record: &SaleRecord) -> AppResult<usize> {
        Ok(self.append(record)?)
    }
}

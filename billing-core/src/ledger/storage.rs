//! redb-based storage for the sales ledger
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `kv` | `restaurant_billing_sales` | JSON array of `SaleRecord` | The ledger |
//! | `kv_quarantine` | `restaurant_billing_sales@<ts>#<n>` | raw bytes | Unreadable or partly unreadable ledger blobs replaced by an append |
//!
//! # Durability
//!
//! Each append is one write transaction: read, decode, push, encode, write,
//! commit. If anything fails before commit the transaction is dropped and the
//! previous ledger stays in place.

use std::path::Path;
use std::sync::Arc;

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
    WriteTransaction,
};
use shared::models::SaleRecord;
use thiserror::Error;

use super::records::Ledger;
use crate::utils::AppError;

/// Name of the key-value table
pub const KV_TABLE_NAME: &str = "kv";

/// Key-value table, values are JSON documents
const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new(KV_TABLE_NAME);

/// Unreadable ledger blobs, kept for manual recovery
const QUARANTINE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv_quarantine");

/// Storage key of the ledger document
pub const LEDGER_KEY: &str = "restaurant_billing_sales";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serialization(e) => AppError::with_message(
                shared::error::ErrorCode::LedgerCorrupted,
                format!("Ledger data is unreadable: {}", e),
            ),
            other => AppError::database(other.to_string()),
        }
    }
}

/// A ledger blob moved aside by [`LedgerStorage::append`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantinedBlob {
    pub key: String,
    pub bytes: Vec<u8>,
}

/// Result of decoding the persisted ledger document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedLedger {
    pub records: Vec<SaleRecord>,
    /// Array entries that are not valid sale records
    pub skipped: usize,
}

/// Decode the persisted ledger document
///
/// A `null` document is an empty ledger. Only a document that is not a JSON
/// array fails; entries that do not decode as a sale record are skipped and
/// counted, the rest keep their order.
pub fn decode_ledger(bytes: &[u8]) -> Result<DecodedLedger, serde_json::Error> {
    let entries: Option<Vec<serde_json::Value>> = serde_json::from_slice(bytes)?;
    let mut decoded = DecodedLedger::default();
    for (index, entry) in entries.unwrap_or_default().into_iter().enumerate() {
        match serde_json::from_value::<SaleRecord>(entry) {
            Ok(record) => decoded.records.push(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping unreadable sale record");
                decoded.skipped += 1;
            }
        }
    }
    Ok(decoded)
}

/// Encode records as the persisted ledger document
pub fn encode_ledger(records: &[SaleRecord]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(records)
}

/// Copy a ledger blob into the quarantine table, returning its key
fn quarantine(txn: &WriteTransaction, bytes: &[u8]) -> StorageResult<String> {
    let mut table = txn.open_table(QUARANTINE_TABLE)?;
    let key = format!(
        "{}@{}#{}",
        LEDGER_KEY,
        chrono::Utc::now().timestamp_millis(),
        table.len()?
    );
    table.insert(key.as_str(), bytes)?;
    Ok(key)
}

/// Sales ledger backed by redb
#[derive(Clone)]
pub struct LedgerStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for LedgerStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStorage").finish_non_exhaustive()
    }
}

impl LedgerStorage {
    /// Open or create the ledger database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            // Create tables if they don't exist
            let _ = write_txn.open_table(KV_TABLE)?;
            let _ = write_txn.open_table(QUARANTINE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn read_raw(&self) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(LEDGER_KEY)?.map(|guard| guard.value().to_vec()))
    }

    /// Load the ledger, surfacing storage and decode errors
    pub fn try_load(&self) -> StorageResult<Ledger> {
        match self.read_raw()? {
            Some(bytes) => Ok(Ledger::new(decode_ledger(&bytes)?.records)),
            None => Ok(Ledger::default()),
        }
    }

    /// Load the ledger, falling back to an empty one
    ///
    /// Never fails: unreadable storage or a malformed document is logged
    /// and treated as an empty ledger.
    pub fn load(&self) -> Ledger {
        match self.try_load() {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load sales ledger, using empty ledger");
                Ledger::default()
            }
        }
    }

    /// Append one sale, returning the new number of records
    ///
    /// A previous document with unreadable content is copied to the
    /// quarantine table first. Its readable records are kept; a document that
    /// is not an array at all is replaced by a ledger holding only `record`.
    pub fn append(&self, record: &SaleRecord) -> StorageResult<usize> {
        let txn = self.db.begin_write()?;
        let count = {
            let mut table = txn.open_table(KV_TABLE)?;
            let existing = table.get(LEDGER_KEY)?.map(|guard| guard.value().to_vec());

            let mut records = match existing {
                None => Vec::new(),
                Some(bytes) => match decode_ledger(&bytes) {
                    Ok(decoded) if decoded.skipped == 0 => decoded.records,
                    Ok(decoded) => {
                        let key = quarantine(&txn, &bytes)?;
                        tracing::warn!(
                            skipped = decoded.skipped,
                            kept = decoded.records.len(),
                            quarantine_key = %key,
                            "Sales ledger with unreadable records copied to quarantine"
                        );
                        decoded.records
                    }
                    Err(e) => {
                        let key = quarantine(&txn, &bytes)?;
                        tracing::warn!(
                            error = %e,
                            quarantine_key = %key,
                            "Malformed sales ledger moved to quarantine"
                        );
                        Vec::new()
                    }
                },
            };

            records.push(record.clone());
            let encoded = encode_ledger(&records)?;
            table.insert(LEDGER_KEY, encoded.as_slice())?;
            records.len()
        };
        txn.commit()?;

        tracing::debug!(records = count, amount = record.amount, "Sale appended to ledger");
        Ok(count)
    }

    /// Blobs moved aside by earlier appends, oldest first
    pub fn quarantined(&self) -> StorageResult<Vec<QuarantinedBlob>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(QUARANTINE_TABLE)?;
        let mut blobs = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            blobs.push(QuarantinedBlob {
                key: key.value().to_string(),
                bytes: value.value().to_vec(),
            });
        }
        Ok(blobs)
    }

    /// Overwrite the raw ledger document
    #[cfg(test)]
    pub(crate) fn write_raw(&self, bytes: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.insert(LEDGER_KEY, bytes)?;
        }
        txn.commit()?;
        Ok(())
    }
}

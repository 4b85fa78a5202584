//! Asynchronous snapshot loading
//!
//! The initial snapshot load is the one asynchronous boundary in the
//! system: a single suspend point at session start that either resolves
//! with a populated [`Snapshot`] or fails. While it is pending the system
//! presents empty collections, and on failure it degrades to the same
//! empty state (logged, no crash, no retry).
//!
//! The two collections are independent files and are read concurrently.
//! Malformed rows are logged to stderr and skipped; only an unreadable
//! file or a broken stream fails the load as a whole.

use crate::io::csv_format::{
    convert_customer_record, convert_transaction_record, CustomerCsvRecord, TransactionCsvRecord,
};
use crate::types::{Customer, Snapshot, Transaction, ViewerError};
use csv_async::AsyncReaderBuilder;
use futures::stream::StreamExt;
use std::path::{Path, PathBuf};
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Data source collaborator backed by two CSV files
///
/// One `load` call, no arguments, returning the customer and transaction
/// collections or a transport/parse error. The rest of the system treats
/// this as opaque.
#[derive(Debug, Clone)]
pub struct CsvSnapshotSource {
    customers_path: PathBuf,
    transactions_path: PathBuf,
}

impl CsvSnapshotSource {
    /// Create a source over the two snapshot files
    pub fn new(customers_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        CsvSnapshotSource {
            customers_path: customers_path.into(),
            transactions_path: transactions_path.into(),
        }
    }

    /// Load both collections into a snapshot
    ///
    /// The two files are read concurrently. Row-level problems are logged
    /// and skipped; a missing or unreadable file fails the whole load.
    pub async fn load(&self) -> Result<Snapshot, ViewerError> {
        let (customers, transactions) = futures::try_join!(
            read_customers(&self.customers_path),
            read_transactions(&self.transactions_path),
        )?;

        Ok(Snapshot::new(customers, transactions))
    }

    /// Load the snapshot, degrading to empty on failure
    ///
    /// This is the recovery policy for the session: a load failure is
    /// logged to stderr and the session continues with empty collections
    /// rather than propagating a crash to the UI.
    pub async fn load_or_empty(&self) -> Snapshot {
        match self.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Error fetching data: {}", e);
                Snapshot::empty()
            }
        }
    }
}

async fn open_csv(
    path: &Path,
) -> Result<csv_async::AsyncDeserializer<impl futures::io::AsyncRead + Unpin + Send>, ViewerError> {
    let file = tokio::fs::File::open(path).await.map_err(|e| ViewerError::Io {
        message: format!("Failed to open file '{}': {}", path.display(), e),
    })?;

    // Wrap the tokio file in a compatibility layer for csv-async
    let compat_file = TokioAsyncReadCompatExt::compat(file);

    Ok(AsyncReaderBuilder::new()
        .flexible(true)
        .trim(csv_async::Trim::All)
        .create_deserializer(compat_file))
}

async fn read_customers(path: &Path) -> Result<Vec<Customer>, ViewerError> {
    let mut reader = open_csv(path).await?;
    let mut records = reader.deserialize::<CustomerCsvRecord>();
    let mut customers = Vec::new();

    while let Some(result) = records.next().await {
        match result {
            Ok(record) => match convert_customer_record(record) {
                Ok(customer) => customers.push(customer),
                Err(e) => eprintln!("Customer record error: {}", e),
            },
            Err(e) => eprintln!("Customer CSV parse error: {}", e),
        }
    }

    Ok(customers)
}

async fn read_transactions(path: &Path) -> Result<Vec<Transaction>, ViewerError> {
    let mut reader = open_csv(path).await?;
    let mut records = reader.deserialize::<TransactionCsvRecord>();
    let mut transactions = Vec::new();

    while let Some(result) = records.next().await {
        match result {
            Ok(record) => match convert_transaction_record(record) {
                Ok(transaction) => transactions.push(transaction),
                Err(e) => eprintln!("Transaction record error: {}", e),
            },
            Err(e) => eprintln!("Transaction CSV parse error: {}", e),
        }
    }

    Ok(transactions)
}

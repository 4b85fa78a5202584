//! I/O module
//!
//! Handles snapshot loading and CSV output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, table output)
//! - `loader` - asynchronous snapshot loading with degrade-to-empty recovery

pub mod csv_format;
pub mod loader;

pub use csv_format::{
    convert_customer_record, convert_transaction_record, write_transactions_csv,
    CustomerCsvRecord, TransactionCsvRecord,
};
pub use loader::CsvSnapshotSource;

//! Snapshot of the loaded session data
//!
//! The snapshot holds the customer and transaction collections for the
//! lifetime of a session. It is populated once at startup and never
//! mutated afterwards; the filter engine and the series aggregator both
//! read from it independently.

use super::customer::Customer;
use super::transaction::Transaction;

/// The immutable, fully-loaded customer and transaction data for a session
///
/// Fields are private so the snapshot is read-only after construction.
/// A failed load degrades to [`Snapshot::empty`] rather than crashing the
/// session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Create a snapshot from loaded collections
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Snapshot {
            customers,
            transactions,
        }
    }

    /// The empty snapshot presented while no data is loaded
    ///
    /// Also the fallback state when the data source fails (see
    /// `io::loader::CsvSnapshotSource::load_or_empty`).
    pub fn empty() -> Self {
        Snapshot::default()
    }

    /// Read-only access to the customer collection, in load order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Read-only access to the transaction collection, in load order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// True if both collections are empty
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.transactions.is_empty()
    }
}

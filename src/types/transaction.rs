//! Transaction-related types for the transaction browser

use super::customer::CustomerId;
use rust_decimal::Decimal;

/// Transaction identifier
pub type TransactionId = i64;

/// A single transaction from the loaded snapshot
///
/// Immutable for the session. The `customer_id` is a foreign key into the
/// customer collection but is not required to resolve: lookups on a dangling
/// id degrade to a blank display name, never a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: TransactionId,

    /// Foreign key to `Customer.id`; may be dangling
    pub customer_id: CustomerId,

    /// Calendar day in an ISO-like representation
    ///
    /// Kept as a string on purpose: the series aggregator groups by the
    /// literal date value and orders distinct dates by first occurrence in
    /// the collection, not chronologically.
    pub date: String,

    /// Signed transaction amount
    pub amount: Decimal,
}

impl Transaction {
    /// Create a new transaction record
    pub fn new(
        id: TransactionId,
        customer_id: CustomerId,
        date: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Transaction {
            id,
            customer_id,
            date: date.into(),
            amount,
        }
    }
}

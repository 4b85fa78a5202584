//! Customer-related types for the transaction browser
//!
//! This module defines the Customer record and the identifier aliases
//! shared by customers and transactions.

/// Customer identifier
///
/// Signed because filter input is parsed leniently and negative ids,
/// while unusual, are representable in the source data.
pub type CustomerId = i64;

/// A customer record from the loaded snapshot
///
/// Immutable for the session; identity is the `id`. The name is used
/// only for display and for labelling the daily series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Unique, stable customer identifier
    pub id: CustomerId,

    /// Display name
    pub name: String,
}

impl Customer {
    /// Create a new customer record
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }
}

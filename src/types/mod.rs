//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `customer`: Customer record and identifier aliases
//! - `transaction`: Transaction record
//! - `snapshot`: The immutable per-session snapshot
//! - `error`: Error types for the browser plumbing

pub mod customer;
pub mod error;
pub mod snapshot;
pub mod transaction;

pub use customer::{Customer, CustomerId};
pub use error::ViewerError;
pub use snapshot::Snapshot;
pub use transaction::{Transaction, TransactionId};

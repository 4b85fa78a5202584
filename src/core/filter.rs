//! Filter engine
//!
//! Derives a filtered transaction view from a single active criterion
//! applied to the full transaction collection.
//!
//! # Design rule
//!
//! Both operations always filter from the *original full* collection,
//! never from the current filtered view. Filters are single-shot, not
//! cumulative: the most recently invoked filter fully replaces the
//! displayed view. `core::session` encodes this by recomputing from the
//! snapshot on every filter event.
//!
//! # Malformed input
//!
//! Unparsable filter text (including the empty "All" sentinel) returns the
//! full collection unchanged rather than an empty view. See DESIGN.md for
//! the resolution of this edge case.

use crate::core::input::parse_leading_int;
use crate::types::{CustomerId, Transaction};
use rust_decimal::Decimal;

/// Retain transactions whose `customer_id` equals the parsed filter text
///
/// The text is parsed with the lenient rules of [`parse_leading_int`].
/// Unparsable text (the "All" selector value) returns the full collection.
/// The original collection is untouched; the result preserves relative
/// order and the operation is idempotent on its own output.
pub fn filter_by_customer(transactions: &[Transaction], customer_id_text: &str) -> Vec<Transaction> {
    match parse_leading_int(customer_id_text) {
        Some(customer_id) => filter_by_customer_id(transactions, customer_id),
        None => transactions.to_vec(),
    }
}

/// Retain transactions whose `customer_id` equals `customer_id`
pub fn filter_by_customer_id(
    transactions: &[Transaction],
    customer_id: CustomerId,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.customer_id == customer_id)
        .cloned()
        .collect()
}

/// Retain transactions whose `amount` is at least the parsed filter text
///
/// Fractional input is truncated to an integer floor before the comparison
/// ("60.5" filters at 60), matching the lenient parse rules. Unparsable
/// text returns the full collection.
pub fn filter_by_amount_floor(transactions: &[Transaction], amount_text: &str) -> Vec<Transaction> {
    match parse_leading_int(amount_text) {
        Some(floor) => filter_by_amount(transactions, Decimal::from(floor)),
        None => transactions.to_vec(),
    }
}

/// Retain transactions whose `amount >= floor`
pub fn filter_by_amount(transactions: &[Transaction], floor: Decimal) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.amount >= floor)
        .cloned()
        .collect()
}

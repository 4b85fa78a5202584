//! Identity resolution
//!
//! Maps a `customer_id` appearing on a transaction (or entered as text) to
//! a `Customer` record for display purposes. A missing match is an
//! expected condition, not an error: callers render the absent case as a
//! blank or placeholder and aggregation keeps working off the numeric id.

use crate::core::input::parse_leading_int;
use crate::types::{Customer, CustomerId};

/// Resolve a customer id to its record
///
/// Linear lookup by equality on `id`; returns the first match or `None`.
/// Customer ids are unique by invariant, so "first match" is "the match".
pub fn resolve_customer_by_id(customers: &[Customer], id: CustomerId) -> Option<&Customer> {
    customers.iter().find(|customer| customer.id == id)
}

/// Resolve a customer's display name, degrading to blank on a dangling id
///
/// Used by the table writer: a transaction whose `customer_id` has no
/// matching record shows an empty name cell rather than failing.
pub fn customer_name(customers: &[Customer], id: CustomerId) -> &str {
    resolve_customer_by_id(customers, id)
        .map(|customer| customer.name.as_str())
        .unwrap_or("")
}

/// Parse selection text and resolve it to a customer record
///
/// Drives the "selected customer" state behind the series aggregator.
/// Unparsable text (the "None" selector value) or an unmatched id clears
/// the selection by returning `None`; no chart is shown in that case.
pub fn parse_customer_selection<'a>(
    customers: &'a [Customer],
    id_text: &str,
) -> Option<&'a Customer> {
    let id = parse_leading_int(id_text)?;
    resolve_customer_by_id(customers, id)
}

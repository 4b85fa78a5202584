//! Series aggregator
//!
//! Produces a plot-ready daily-summed time series for exactly one customer.
//! The caller resolves identity first (see `core::identity`); this module
//! never receives a raw id.

use crate::types::{Customer, Transaction};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A date-ordered list of summed daily amounts for one customer
///
/// `labels` and `values` are index-aligned. Labels are the distinct dates
/// of the customer's transactions in *first-occurrence order* within the
/// collection, which is not necessarily chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    /// Chart legend text, derived from the customer's name
    pub series_label: String,

    /// Distinct dates, first-occurrence order
    pub labels: Vec<String>,

    /// Summed amount per date, index-aligned with `labels`
    pub values: Vec<Decimal>,
}

impl DailySeries {
    /// True if the customer had no transactions
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the daily-summed series for one customer
///
/// Three steps over the full transaction collection:
/// 1. Selection: retain transactions with `customer_id == customer.id`.
/// 2. Distinct dates: collect distinct `date` values in the order they are
///    first encountered within the selected subsequence.
/// 3. Per-date sum: total the amounts of the selected transactions sharing
///    each date.
///
/// A customer with zero transactions yields empty `labels` and `values`
/// with the usual non-empty `series_label`.
pub fn build_daily_series(transactions: &[Transaction], customer: &Customer) -> DailySeries {
    let mut labels: Vec<String> = Vec::new();
    let mut values: Vec<Decimal> = Vec::new();
    let mut index_by_date: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.customer_id == customer.id)
    {
        match index_by_date.get(transaction.date.as_str()) {
            Some(&index) => values[index] += transaction.amount,
            None => {
                index_by_date.insert(transaction.date.as_str(), labels.len());
                labels.push(transaction.date.clone());
                values.push(transaction.amount);
            }
        }
    }

    DailySeries {
        series_label: format!("Total amount per day for {}", customer.name),
        labels,
        values,
    }
}

//! CSV format handling for snapshot records and table output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserializing the two snapshot collections
//! - Conversion from CSV records to domain types
//! - The filtered-transaction table writer
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::identity::customer_name;
use crate::types::{Customer, CustomerId, Transaction, TransactionId};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record for the customer collection
///
/// Matches the input format with columns: id, name
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CustomerCsvRecord {
    pub id: CustomerId,
    pub name: String,
}

/// CSV record for the transaction collection
///
/// Matches the input format with columns: id, customer_id, date, amount.
/// The amount is read as a string so a malformed value rejects only that
/// row, with a message naming the offending transaction.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionCsvRecord {
    pub id: TransactionId,
    pub customer_id: CustomerId,
    pub date: String,
    pub amount: String,
}

/// Convert a CustomerCsvRecord to a Customer
///
/// Rejects rows with an empty name; ids are taken as-is (uniqueness is a
/// source-data invariant, not enforced here).
pub fn convert_customer_record(record: CustomerCsvRecord) -> Result<Customer, String> {
    if record.name.trim().is_empty() {
        return Err(format!("Customer {} has an empty name", record.id));
    }

    Ok(Customer {
        id: record.id,
        name: record.name,
    })
}

/// Convert a TransactionCsvRecord to a Transaction
///
/// Parses the amount into a Decimal and requires a non-empty date. The
/// `customer_id` is *not* checked against the customer collection: a
/// dangling foreign key is legal and degrades to a blank name at display
/// time.
pub fn convert_transaction_record(record: TransactionCsvRecord) -> Result<Transaction, String> {
    if record.date.trim().is_empty() {
        return Err(format!("Transaction {} has an empty date", record.id));
    }

    let amount = Decimal::from_str(record.amount.trim())
        .map_err(|_| format!("Invalid amount '{}' for transaction {}", record.amount, record.id))?;

    Ok(Transaction {
        id: record.id,
        customer_id: record.customer_id,
        date: record.date,
        amount,
    })
}

/// Write the filtered transaction view as a CSV table
///
/// Columns: customer, date, amount. The customer column is the resolved
/// display name; a dangling `customer_id` produces an empty cell, never an
/// error. Rows keep the order of the filtered view.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    customers: &[Customer],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["customer", "date", "amount"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for transaction in transactions {
        writer
            .write_record(&[
                customer_name(customers, transaction.customer_id).to_string(),
                transaction.date.clone(),
                transaction.amount.to_string(),
            ])
            .map_err(|e| format!("Failed to write transaction record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_convert_customer_record_valid() {
        let record = CustomerCsvRecord {
            id: 1,
            name: "Alice".to_string(),
        };

        let customer = convert_customer_record(record).unwrap();
        assert_eq!(customer, Customer::new(1, "Alice"));
    }

    #[rstest]
    #[case::empty_name("")]
    #[case::whitespace_name("   ")]
    fn test_convert_customer_record_rejects_blank_name(#[case] name: &str) {
        let record = CustomerCsvRecord {
            id: 1,
            name: name.to_string(),
        };

        let result = convert_customer_record(record);
        assert!(result.unwrap_err().contains("empty name"));
    }

    #[rstest]
    #[case::integral("50", Decimal::from(50))]
    #[case::fractional("50.25", Decimal::new(5025, 2))]
    #[case::negative("-12.5", Decimal::new(-125, 1))]
    #[case::whitespace_trimmed("  50  ", Decimal::from(50))]
    fn test_convert_transaction_record_amount_parsing(
        #[case] amount: &str,
        #[case] expected: Decimal,
    ) {
        let record = TransactionCsvRecord {
            id: 10,
            customer_id: 1,
            date: "2024-01-01".to_string(),
            amount: amount.to_string(),
        };

        let transaction = convert_transaction_record(record).unwrap();
        assert_eq!(transaction.amount, expected);
    }

    #[rstest]
    #[case::bad_amount("2024-01-01", "not_a_number", "Invalid amount")]
    #[case::empty_amount("2024-01-01", "", "Invalid amount")]
    #[case::empty_date("", "50", "empty date")]
    fn test_convert_transaction_record_errors(
        #[case] date: &str,
        #[case] amount: &str,
        #[case] expected_error: &str,
    ) {
        let record = TransactionCsvRecord {
            id: 10,
            customer_id: 1,
            date: date.to_string(),
            amount: amount.to_string(),
        };

        let result = convert_transaction_record(record);
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[test]
    fn test_convert_transaction_record_keeps_dangling_customer_id() {
        let record = TransactionCsvRecord {
            id: 10,
            customer_id: 999,
            date: "2024-01-01".to_string(),
            amount: "50".to_string(),
        };

        let transaction = convert_transaction_record(record).unwrap();
        assert_eq!(transaction.customer_id, 999);
    }

    #[test]
    fn test_write_transactions_csv_resolves_names() {
        let customers = vec![Customer::new(1, "Alice"), Customer::new(2, "Bob")];
        let transactions = vec![
            Transaction::new(10, 1, "2024-01-01", Decimal::from(50)),
            Transaction::new(13, 2, "2024-01-01", Decimal::from(100)),
        ];

        let mut output = Vec::new();
        write_transactions_csv(&transactions, &customers, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "customer,date,amount\nAlice,2024-01-01,50\nBob,2024-01-01,100\n"
        );
    }

    #[test]
    fn test_write_transactions_csv_blank_name_for_dangling_fk() {
        let customers = vec![Customer::new(1, "Alice")];
        let transactions = vec![Transaction::new(10, 999, "2024-01-01", Decimal::from(50))];

        let mut output = Vec::new();
        write_transactions_csv(&transactions, &customers, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "customer,date,amount\n,2024-01-01,50\n");
    }

    #[test]
    fn test_write_transactions_csv_empty_view() {
        let mut output = Vec::new();
        write_transactions_csv(&[], &[], &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "customer,date,amount\n");
    }
}

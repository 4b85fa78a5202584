use clap::Parser;
use std::path::PathBuf;

/// Browse customer transactions and chart daily spending
#[derive(Parser, Debug)]
#[command(name = "spendview")]
#[command(
    about = "Browse customer transactions and chart daily spending",
    long_about = None
)]
pub struct CliArgs {
    /// Customer collection CSV file (columns: id, name)
    #[arg(value_name = "CUSTOMERS", help = "Path to the customers CSV file")]
    pub customers_file: PathBuf,

    /// Transaction collection CSV file (columns: id, customer_id, date, amount)
    #[arg(value_name = "TRANSACTIONS", help = "Path to the transactions CSV file")]
    pub transactions_file: PathBuf,

    /// Customer-id filter text (empty or non-numeric means "All")
    ///
    /// Filters are single-shot: only one criterion can be active, so this
    /// conflicts with --min-amount rather than composing with it.
    #[arg(
        long = "filter-customer",
        value_name = "ID",
        conflicts_with = "min_amount",
        help = "Show only transactions for this customer id"
    )]
    pub filter_customer: Option<String>,

    /// Amount-floor filter text (fractions are truncated, e.g. 60.5 -> 60)
    #[arg(
        long = "min-amount",
        value_name = "AMOUNT",
        help = "Show only transactions with at least this amount"
    )]
    pub min_amount: Option<String>,

    /// Customer id to chart (empty or non-numeric means "None")
    #[arg(
        long = "chart-customer",
        value_name = "ID",
        help = "Render the daily spending series for this customer id"
    )]
    pub chart_customer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parses_positional_files() {
        let parsed =
            CliArgs::try_parse_from(["program", "customers.csv", "transactions.csv"]).unwrap();
        assert_eq!(parsed.customers_file, PathBuf::from("customers.csv"));
        assert_eq!(parsed.transactions_file, PathBuf::from("transactions.csv"));
        assert_eq!(parsed.filter_customer, None);
        assert_eq!(parsed.min_amount, None);
        assert_eq!(parsed.chart_customer, None);
    }

    #[rstest]
    #[case::customer_filter(
        &["program", "--filter-customer", "1", "customers.csv", "transactions.csv"],
        Some("1"), None, None
    )]
    #[case::amount_filter(
        &["program", "--min-amount", "60", "customers.csv", "transactions.csv"],
        None, Some("60"), None
    )]
    #[case::chart_only(
        &["program", "--chart-customer", "2", "customers.csv", "transactions.csv"],
        None, None, Some("2")
    )]
    #[case::filter_and_chart(
        &["program", "--min-amount", "60.5", "--chart-customer", "1", "customers.csv", "transactions.csv"],
        None, Some("60.5"), Some("1")
    )]
    fn test_option_parsing(
        #[case] args: &[&str],
        #[case] filter_customer: Option<&str>,
        #[case] min_amount: Option<&str>,
        #[case] chart_customer: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.filter_customer.as_deref(), filter_customer);
        assert_eq!(parsed.min_amount.as_deref(), min_amount);
        assert_eq!(parsed.chart_customer.as_deref(), chart_customer);
    }

    #[rstest]
    #[case::missing_files(&["program"])]
    #[case::one_file(&["program", "customers.csv"])]
    #[case::both_filters(
        &["program", "--filter-customer", "1", "--min-amount", "60", "customers.csv", "transactions.csv"]
    )]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}

//! Customer transaction browser CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run -- customers.csv transactions.csv
//! cargo run -- --filter-customer 1 customers.csv transactions.csv
//! cargo run -- --min-amount 60 customers.csv transactions.csv
//! cargo run -- --chart-customer 1 customers.csv transactions.csv
//! ```
//!
//! The program loads the customer and transaction snapshot from the two
//! CSV files, applies at most one filter criterion, and writes the
//! filtered transaction table to stdout, followed by the daily spending
//! series when a chart customer is selected.
//!
//! # Exit Codes
//!
//! - 0: Success (including a failed snapshot load, which degrades to an
//!   empty view)
//! - 1: Error (runtime construction, output I/O)

use spendview::app;
use spendview::cli;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Run the session; output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = app::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

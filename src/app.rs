//! Pipeline plumbing for the CLI binary
//!
//! Wires the collaborators together for one session: builds the tokio
//! runtime, loads the snapshot (degrading to empty on failure), drives a
//! [`Session`] from the CLI arguments, and writes the filtered table and
//! the chart to the output writer.
//!
//! The CLI maps the three interactive controls onto flags: the two filter
//! flags are mutually exclusive, which makes the single-shot filter
//! contract explicit, and the chart flag selects the series customer.

use crate::cli::CliArgs;
use crate::core::session::{Session, SessionEvent};
use crate::io::csv_format::write_transactions_csv;
use crate::io::loader::CsvSnapshotSource;
use crate::render::{ChartTarget, TextRenderer};
use crate::types::ViewerError;
use std::io::Write;

/// Run one browse session and write the results
///
/// Output is the filtered transaction table as CSV, followed by the daily
/// series when a chart customer is requested. Load failures degrade to an
/// empty snapshot (logged to stderr); only runtime construction and output
/// I/O can fail here.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), ViewerError> {
    // Create tokio runtime for the one async boundary: the snapshot load
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .build()
        .map_err(|e| ViewerError::Io {
            message: format!("Failed to create tokio runtime: {}", e),
        })?;

    let source = CsvSnapshotSource::new(&args.customers_file, &args.transactions_file);
    let snapshot = runtime.block_on(source.load_or_empty());

    let mut session = Session::new(snapshot, ChartTarget("daily-spending".to_string()));
    let mut renderer = TextRenderer::new(Vec::new());

    if let Some(text) = &args.filter_customer {
        session.apply(SessionEvent::FilterByCustomer(text.clone()), &mut renderer)?;
    }
    if let Some(text) = &args.min_amount {
        session.apply(
            SessionEvent::FilterByAmountFloor(text.clone()),
            &mut renderer,
        )?;
    }
    if let Some(text) = &args.chart_customer {
        session.apply(
            SessionEvent::SelectChartCustomer(text.clone()),
            &mut renderer,
        )?;
    }

    write_transactions_csv(
        session.filtered_transactions(),
        session.customers(),
        output,
    )
    .map_err(|message| ViewerError::Io { message })?;

    let chart_output = renderer.into_inner();
    if !chart_output.is_empty() {
        writeln!(output)?;
        output.write_all(&chart_output)?;
    }

    Ok(())
}

//! Session state and the per-interaction update function
//!
//! The original interaction model was a handful of independent mutable UI
//! states (filter text, selected customer, live chart instance). Here that
//! becomes one [`Session`] value plus a single [`Session::apply`] update
//! function taking a [`SessionEvent`], so every interaction flows through
//! the same path:
//!
//! - filter events recompute the visible view from the *full* snapshot
//!   collection (filters replace each other, they never compose);
//! - selection events release the previous chart instance before rendering
//!   a new one, including when the selection is cleared.
//!
//! The snapshot itself is never mutated; the session only derives views
//! from it.

use crate::core::filter::{filter_by_amount_floor, filter_by_customer};
use crate::core::identity::parse_customer_selection;
use crate::core::series::build_daily_series;
use crate::render::{ChartHandle, ChartSpec, ChartTarget, SeriesRenderer};
use crate::types::{Customer, Snapshot, Transaction, ViewerError};

/// One user interaction
///
/// The payloads are the raw text from the input surface; all parsing and
/// its lenient fallbacks live in the core operations, not in the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The customer-filter selector changed ("" means "All")
    FilterByCustomer(String),

    /// The amount-floor input changed
    FilterByAmountFloor(String),

    /// The chart-customer selector changed ("" means "None")
    SelectChartCustomer(String),
}

/// Per-session state over one immutable snapshot
pub struct Session {
    snapshot: Snapshot,
    filtered: Vec<Transaction>,
    selected: Option<Customer>,
    chart: Option<ChartHandle>,
    target: ChartTarget,
}

impl Session {
    /// Start a session over a loaded snapshot
    ///
    /// The initial view is the unfiltered transaction collection and no
    /// customer is selected for the chart.
    pub fn new(snapshot: Snapshot, target: ChartTarget) -> Self {
        let filtered = snapshot.transactions().to_vec();
        Session {
            snapshot,
            filtered,
            selected: None,
            chart: None,
            target,
        }
    }

    /// The currently displayed transaction view
    pub fn filtered_transactions(&self) -> &[Transaction] {
        &self.filtered
    }

    /// The customer collection, for enumerating selectors and resolving names
    pub fn customers(&self) -> &[Customer] {
        self.snapshot.customers()
    }

    /// The customer currently driving the chart, if any
    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selected.as_ref()
    }

    /// True if a chart instance is currently installed
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Apply one interaction to the session
    ///
    /// Filter events always derive from the full snapshot collection, so
    /// the most recent filter fully replaces the view. Selection events
    /// re-resolve the customer, tear down any live chart instance, and
    /// render a fresh one when a customer is selected.
    pub fn apply<R: SeriesRenderer>(
        &mut self,
        event: SessionEvent,
        renderer: &mut R,
    ) -> Result<(), ViewerError> {
        match event {
            SessionEvent::FilterByCustomer(text) => {
                self.filtered = filter_by_customer(self.snapshot.transactions(), &text);
                Ok(())
            }
            SessionEvent::FilterByAmountFloor(text) => {
                self.filtered = filter_by_amount_floor(self.snapshot.transactions(), &text);
                Ok(())
            }
            SessionEvent::SelectChartCustomer(text) => {
                self.selected =
                    parse_customer_selection(self.snapshot.customers(), &text).cloned();

                // Release before re-acquiring, even when the selection was
                // cleared and nothing new will be rendered.
                if let Some(handle) = self.chart.take() {
                    renderer.release(handle);
                }

                if let Some(customer) = &self.selected {
                    let series = build_daily_series(self.snapshot.transactions(), customer);
                    let spec = ChartSpec::line(series);
                    self.chart = Some(renderer.render(&self.target, &spec)?);
                }
                Ok(())
            }
        }
    }
}

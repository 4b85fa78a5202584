//! Customer transaction browser
//! # Overview
//!
//! This library lets an operator browse a fixed set of customer
//! transactions, narrow them by customer identity or minimum amount, and
//! chart one customer's daily spending as a time series. It operates on a
//! single fully-loaded snapshot per session; there is no persistence,
//! pagination, or streaming.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Customer, Transaction, Snapshot, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - The data-transformation logic:
//!   - [`core::filter`] - single-shot filtering from the full collection
//!   - [`core::identity`] - customer identity resolution for display
//!   - [`core::series`] - per-day amount aggregation for charting
//!   - [`core::session`] - session state and the update function
//! - [`io`] - snapshot loading and table output
//! - [`render`] - the rendering-collaborator seam and a text renderer
//! - [`app`] - pipeline plumbing for the binary
//!
//! # Behavioral contracts
//!
//! - Filters are **not cumulative**: each filter derives its view from the
//!   original full collection and replaces any prior view.
//! - Unparsable filter text (the "All" selector) yields the *unfiltered*
//!   collection; unparsable selection text clears the chart.
//! - A dangling `customer_id` on a transaction is legal and degrades to a
//!   blank display name.
//! - The session releases the previous chart instance before rendering a
//!   new one, including on transitions to "no customer selected".

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod render;
pub mod types;

pub use crate::core::{build_daily_series, filter_by_amount_floor, filter_by_customer, DailySeries};
pub use crate::core::{parse_customer_selection, resolve_customer_by_id, Session, SessionEvent};
pub use io::CsvSnapshotSource;
pub use render::{ChartHandle, ChartSpec, ChartTarget, SeriesRenderer, TextRenderer};
pub use types::{Customer, CustomerId, Snapshot, Transaction, TransactionId, ViewerError};

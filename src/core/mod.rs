//! Core data-transformation logic
//!
//! This module contains the only parts of the system with non-trivial
//! semantics:
//! - `input` - lenient numeric parsing shared by filtering and selection
//! - `filter` - the filter engine (single-shot, non-cumulative criteria)
//! - `identity` - customer identity resolution for display and selection
//! - `series` - the daily-sum series aggregator
//! - `session` - per-session state and the single update function
//!
//! Everything here is a pure, synchronous, total function over in-memory
//! data; the session adds the chart-handle resource discipline on top.

pub mod filter;
pub mod identity;
pub mod input;
pub mod series;
pub mod session;

pub use filter::{filter_by_amount_floor, filter_by_customer};
pub use identity::{parse_customer_selection, resolve_customer_by_id};
pub use series::{build_daily_series, DailySeries};
pub use session::{Session, SessionEvent};

//! Rendering collaborator seam
//!
//! The browser core never draws anything itself: it hands a prepared
//! [`ChartSpec`] to a [`SeriesRenderer`] and holds on to the returned
//! [`ChartHandle`]. The session releases the previous handle before
//! installing a new chart (and on transitions to "no customer selected"),
//! so a renderer never carries two live instances for the same target.
//!
//! The bundled [`TextRenderer`] writes the series to any `io::Write`; a
//! real plotting surface would implement the same trait.

use crate::core::series::DailySeries;
use crate::types::ViewerError;
use std::collections::HashSet;
use std::io::Write;

/// Stroke color for the daily-spending line
pub const SERIES_COLOR: &str = "rgb(75, 192, 192)";

/// Interpolation tension for the daily-spending line
pub const SERIES_TENSION: f64 = 0.1;

/// Chart kinds the browser can request
///
/// Only a line chart exists today; the selector is part of the renderer
/// contract so the seam doesn't change when other kinds appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
}

/// Identifies where a renderer should draw
///
/// Opaque to the core; a canvas id for a real plotting surface, a plain
/// heading for the text renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTarget(pub String);

/// A fully prepared chart description
///
/// Carries the series plus the fixed styling: a line with non-filled area,
/// a fixed stroke color, and a fixed interpolation tension.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub series: DailySeries,
    pub fill: bool,
    pub border_color: &'static str,
    pub tension: f64,
}

impl ChartSpec {
    /// Build the standard daily-spending line chart for a series
    pub fn line(series: DailySeries) -> Self {
        ChartSpec {
            kind: ChartKind::Line,
            series,
            fill: false,
            border_color: SERIES_COLOR,
            tension: SERIES_TENSION,
        }
    }
}

/// Handle to a rendered chart instance
///
/// Returned by [`SeriesRenderer::render`] and given back through
/// [`SeriesRenderer::release`]. Deliberately not `Clone`: exactly one
/// owner may release an instance.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    /// Mint a handle for a freshly rendered instance
    ///
    /// Only renderer implementations should create handles; the session
    /// treats them as opaque.
    pub fn new(id: u64) -> Self {
        ChartHandle(id)
    }

    /// Raw instance id, for renderers that key their own state by it
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The rendering collaborator contract
///
/// Implementations must support releasing a previously rendered instance;
/// the session calls `release` before every re-acquisition.
pub trait SeriesRenderer {
    /// Render a chart and return a handle to the live instance
    fn render(&mut self, target: &ChartTarget, spec: &ChartSpec)
        -> Result<ChartHandle, ViewerError>;

    /// Release a previously rendered instance
    fn release(&mut self, handle: ChartHandle);
}

/// Renderer that writes a series as text to any writer
///
/// Output is one heading line with the series label, then one
/// `date,amount` line per data point. Handles are tracked so release is
/// observable in tests even though there is nothing visual to tear down.
pub struct TextRenderer<W: Write> {
    writer: W,
    next_id: u64,
    live: HashSet<u64>,
}

impl<W: Write> TextRenderer<W> {
    /// Create a text renderer over a writer
    pub fn new(writer: W) -> Self {
        TextRenderer {
            writer,
            next_id: 0,
            live: HashSet::new(),
        }
    }

    /// Number of chart instances rendered but not yet released
    pub fn live_instances(&self) -> usize {
        self.live.len()
    }

    /// Consume the renderer and take back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SeriesRenderer for TextRenderer<W> {
    fn render(
        &mut self,
        target: &ChartTarget,
        spec: &ChartSpec,
    ) -> Result<ChartHandle, ViewerError> {
        writeln!(self.writer, "# {} [{}]", spec.series.series_label, target.0)
            .map_err(|e| ViewerError::render(e.to_string()))?;
        for (label, value) in spec.series.labels.iter().zip(&spec.series.values) {
            writeln!(self.writer, "{},{}", label, value)
                .map_err(|e| ViewerError::render(e.to_string()))?;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        Ok(ChartHandle::new(id))
    }

    fn release(&mut self, handle: ChartHandle) {
        self.live.remove(&handle.0);
    }
}

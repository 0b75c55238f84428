//! Renderer trait abstraction.

use thiserror::Error;
use touchline_core::router::GestureRouter;
use touchline_core::segment::{Segment, SegmentColor};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend could not be brought up.
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    /// A frame could not be produced.
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Color used to re-stroke the selected segment unless overridden.
pub const DEFAULT_HIGHLIGHT_COLOR: SegmentColor = SegmentColor::green();

/// Everything a backend needs to paint one frame.
///
/// Paint order is part of the contract: persisted segments first, in
/// list order and with their stored colors; then every in-progress
/// segment in `current_color`; then, if a segment is selected, that
/// segment once more in `highlight_color` so the highlight reads on
/// top of everything else.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Persisted segments in promotion order.
    pub persisted: &'a [Segment],
    /// In-progress segments, one per live contact, order not defined.
    pub in_progress: Vec<&'a Segment>,
    /// Segment to re-stroke, as an index into `persisted`.
    pub selected_index: Option<usize>,
    /// Stroke width shared by every segment.
    pub stroke_width: f64,
    /// Color for in-progress segments.
    pub current_color: SegmentColor,
    /// Color for the selected re-stroke.
    pub highlight_color: SegmentColor,
}

impl<'a> RenderContext<'a> {
    /// Snapshot the paintable state of a router.
    pub fn new(router: &'a GestureRouter) -> Self {
        let ledger = router.ledger();
        Self {
            persisted: ledger.persisted(),
            in_progress: ledger.in_progress_segments().collect(),
            selected_index: ledger.selected_index(),
            stroke_width: router.config().line_thickness,
            current_color: router.config().current_line_color,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        }
    }

    /// Re-stroke the selection in a different color.
    pub fn with_highlight_color(mut self, color: SegmentColor) -> Self {
        self.highlight_color = color;
        self
    }
}

/// A paint backend for the sketch surface.
pub trait LineRenderer {
    /// Paint one frame from `ctx`, honoring its paint order.
    fn render(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()>;
}

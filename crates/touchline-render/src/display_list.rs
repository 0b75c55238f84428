//! Retained display list of stroke commands.

use kurbo::Point;
use peniko::Color;
use touchline_core::segment::Segment;

use crate::renderer::{LineRenderer, RenderContext, RenderResult};

/// One straight stroke for a backend to draw.
#[derive(Debug, Clone, Copy)]
pub struct StrokeCommand {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: f64,
}

/// Records the strokes of each frame in paint order.
///
/// Backends that draw immediately can replay the command list; tests
/// use it to observe exactly what would reach the screen. Each call to
/// [`LineRenderer::render`] replaces the previous frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayListRenderer {
    commands: Vec<StrokeCommand>,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recent frame, in paint order.
    pub fn commands(&self) -> &[StrokeCommand] {
        &self.commands
    }

    fn push(&mut self, segment: &Segment, color: Color, width: f64) {
        self.commands.push(StrokeCommand {
            from: segment.begin,
            to: segment.end,
            color,
            width,
        });
    }
}

impl LineRenderer for DisplayListRenderer {
    fn render(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        self.commands.clear();
        for segment in ctx.persisted {
            self.push(segment, segment.color.into(), ctx.stroke_width);
        }
        for segment in &ctx.in_progress {
            self.push(segment, ctx.current_color.into(), ctx.stroke_width);
        }
        if let Some(index) = ctx.selected_index {
            // An out-of-range index paints no highlight rather than fault.
            if let Some(segment) = ctx.persisted.get(index) {
                self.push(segment, ctx.highlight_color.into(), ctx.stroke_width);
            }
        }
        Ok(())
    }
}

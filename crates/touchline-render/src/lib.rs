//! Touchline Render Library
//!
//! Renderer abstraction for the Touchline sketch surface, plus a
//! retained display-list implementation usable as a test double or as
//! the input to an immediate-mode backend.

mod display_list;
mod renderer;

pub use display_list::{DisplayListRenderer, StrokeCommand};
pub use renderer::{
    DEFAULT_HIGHLIGHT_COLOR, LineRenderer, RenderContext, RenderError, RenderResult,
};

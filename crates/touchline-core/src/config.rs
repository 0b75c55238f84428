//! Live drawing and hit-testing settings.

use serde::{Deserialize, Serialize};

use crate::segment::SegmentColor;

/// Fixed palette offered by the swipe-up color menu.
pub const FINISHED_COLOR_CHOICES: [(&str, SegmentColor); 4] = [
    ("Black", SegmentColor::black()),
    ("Red", SegmentColor::red()),
    ("Green", SegmentColor::green()),
    ("Blue", SegmentColor::blue()),
];

/// Tunable settings the router reads on every dispatch.
///
/// Every field is live: a change applies to the next draw, hit-test or
/// promotion and is never retroactive. Segments already persisted keep
/// the color they were promoted with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SketchConfig {
    /// Color a segment is stamped with at promotion.
    pub finished_line_color: SegmentColor,
    /// Color in-progress segments are drawn with.
    pub current_line_color: SegmentColor,
    /// Stroke width, in the same units as contact coordinates.
    pub line_thickness: f64,
    /// Acceptance radius for hit-testing, same units.
    pub hit_test_tolerance: f64,
    /// Hit-test sampling step over the unit interval of a segment.
    pub hit_test_sample_step: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            finished_line_color: SegmentColor::black(),
            current_line_color: SegmentColor::red(),
            line_thickness: 10.0,
            hit_test_tolerance: 20.0,
            hit_test_sample_step: 0.05,
        }
    }
}

//! Segment and color value types.

use kurbo::{Line, Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// A serializable stroke color (RGBA components as u8).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SegmentColor {
    /// Create a color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black, the default color for promoted segments.
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Opaque red, the default color for in-progress segments.
    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// Opaque green, also the default selection highlight.
    pub const fn green() -> Self {
        Self::new(0, 128, 0, 255)
    }

    /// Opaque blue.
    pub const fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }
}

impl From<Color> for SegmentColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SegmentColor> for Color {
    fn from(color: SegmentColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// A straight stroke between two contact points.
///
/// `begin` is pinned to the point where the contact touched down; `end`
/// follows the contact while it is live and is frozen at promotion. A
/// segment whose contact never moved is zero-length and still valid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Touch-down point of the contact that drew this segment.
    pub begin: Point,
    /// Most recent (or final) point of that contact.
    pub end: Point,
    /// Stroke color, captured from the active settings at promotion.
    pub color: SegmentColor,
}

impl Segment {
    /// Create a segment spanning two points.
    pub fn new(begin: Point, end: Point, color: SegmentColor) -> Self {
        Self { begin, end, color }
    }

    /// Create a zero-length segment at a single contact point.
    pub fn at_point(point: Point, color: SegmentColor) -> Self {
        Self::new(point, point, color)
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.begin.distance(self.end)
    }

    /// Midpoint between the two endpoints.
    pub fn midpoint(&self) -> Point {
        self.begin.midpoint(self.end)
    }

    /// Point at parameter `t` along the segment, where `t = 0.0` is
    /// `begin` and `t = 1.0` is `end`.
    pub fn eval(&self, t: f64) -> Point {
        Point::new(
            self.begin.x + (self.end.x - self.begin.x) * t,
            self.begin.y + (self.end.y - self.begin.y) * t,
        )
    }

    /// Shift both endpoints by `delta`, preserving length and angle.
    pub fn translate(&mut self, delta: Vec2) {
        self.begin += delta;
        self.end += delta;
    }

    /// View the geometry as a kurbo line.
    pub fn as_line(&self) -> Line {
        Line::new(self.begin, self.end)
    }
}

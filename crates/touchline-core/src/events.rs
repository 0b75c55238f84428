//! Event vocabulary crossing the core boundary.
//!
//! Inbound events ([`ContactEvent`], [`GestureEvent`]) arrive from the
//! platform input layer; outbound [`Effect`]s tell the host what to do
//! after a dispatch. Inbound types are serializable so transports can
//! replay or forward raw streams.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::segment::SegmentColor;

/// Identifier the input source assigns to one live contact.
///
/// Sources may recycle an id once the contact it named has ended or
/// been cancelled; an id is only unique among live contacts.
pub type ContactId = u64;

/// Raw lifecycle event for a single contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ContactEvent {
    /// A contact touched down at `point`.
    Began { id: ContactId, point: Point },
    /// A live contact moved to `point`.
    Moved { id: ContactId, point: Point },
    /// A live contact lifted at `point`; its segment is promoted.
    Ended { id: ContactId, point: Point },
    /// The platform aborted the contact; nothing is promoted.
    Cancelled { id: ContactId, point: Point },
}

impl ContactEvent {
    /// The contact this event belongs to.
    pub fn id(&self) -> ContactId {
        match self {
            Self::Began { id, .. }
            | Self::Moved { id, .. }
            | Self::Ended { id, .. }
            | Self::Cancelled { id, .. } => *id,
        }
    }

    /// Location carried by the event.
    pub fn point(&self) -> Point {
        match self {
            Self::Began { point, .. }
            | Self::Moved { point, .. }
            | Self::Ended { point, .. }
            | Self::Cancelled { point, .. } => *point,
        }
    }
}

/// Phase of a long-press gesture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LongPressPhase {
    /// The press has been held long enough to fire.
    Began,
    /// The pressing contact lifted.
    Ended,
}

/// A gesture the platform recognizers have already classified.
///
/// Classification is the recognizers' job: a `Tap` is only delivered
/// once a double-tap has been ruled out, so the router never sees both
/// interpretations of the same physical taps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GestureEvent {
    /// Single tap at `point`.
    Tap { point: Point },
    /// Double tap at `point`.
    DoubleTap { point: Point },
    /// Long-press phase change at `point`.
    LongPress { phase: LongPressPhase, point: Point },
    /// Drag update carrying the translation since the previous update.
    Pan { delta: Vec2 },
    /// Three-finger swipe up at `point`.
    SwipeUp { point: Point },
}

/// Action identifier a menu entry reports back when chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MenuAction {
    /// Delete the currently selected segment.
    DeleteSelected,
    /// Promote subsequent segments with this color.
    SetFinishedColor(SegmentColor),
}

/// One labeled choice in a menu the host presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuEntry {
    pub const fn new(label: &'static str, action: MenuAction) -> Self {
        Self { label, action }
    }
}

/// Side effect the router asks the host to perform.
///
/// Effects only ever appear in the return value of a dispatch; the
/// router holds no callbacks into the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Repaint the surface from current state. Idempotent: the host may
    /// coalesce a burst as long as one repaint reflects the final state.
    Redraw,
    /// Present a menu anchored at `anchor`.
    ShowMenu {
        anchor: Point,
        entries: Vec<MenuEntry>,
    },
    /// Dismiss the menu the router previously asked for.
    HideMenu,
}

impl Effect {
    /// Whether this effect is a repaint request.
    pub fn is_redraw(&self) -> bool {
        matches!(self, Self::Redraw)
    }
}

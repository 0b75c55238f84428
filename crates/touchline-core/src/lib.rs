//! Touchline Core Library
//!
//! Platform-agnostic contact tracking, hit-testing and gesture routing
//! for the Touchline multi-contact sketch surface. Hosts feed raw
//! contact events and classified gestures into a [`GestureRouter`] and
//! carry out the [`Effect`]s it returns; rendering and input
//! recognition stay outside this crate.

pub mod config;
pub mod events;
pub mod hittest;
pub mod ledger;
pub mod router;
pub mod segment;

pub use config::{FINISHED_COLOR_CHOICES, SketchConfig};
pub use events::{
    ContactEvent, ContactId, Effect, GestureEvent, LongPressPhase, MenuAction, MenuEntry,
};
pub use hittest::find_nearest;
pub use ledger::ContactLedger;
pub use router::{GestureRouter, Mode};
pub use segment::{Segment, SegmentColor};

//! Contact-to-segment bookkeeping.

use std::collections::HashMap;

use kurbo::{Point, Vec2};

use crate::events::ContactId;
use crate::segment::{Segment, SegmentColor};

/// Owns every segment on the surface: the in-progress segment of each
/// live contact, the ordered list of persisted segments, and the
/// selection over the persisted list.
///
/// Persisted segments are identified by position, so any operation that
/// removes entries also clears the selection in the same step; a stale
/// index can never be observed. The ledger performs no gesture logic
/// and emits no side effects, callers decide what a mutation means.
#[derive(Debug, Clone, Default)]
pub struct ContactLedger {
    /// In-progress segments keyed by live contact id.
    in_progress: HashMap<ContactId, Segment>,
    /// Promoted segments in promotion order.
    persisted: Vec<Segment>,
    /// Index into `persisted`, if a segment is selected.
    selected: Option<usize>,
}

impl ContactLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a contact with a zero-length segment at `point`.
    ///
    /// A second begin for an id that is already live replaces its
    /// in-progress segment, which keeps the ledger usable when an input
    /// source recycles ids without delivering an end.
    pub fn begin_contact(&mut self, id: ContactId, point: Point, color: SegmentColor) {
        let segment = Segment::at_point(point, color);
        if self.in_progress.insert(id, segment).is_some() {
            log::warn!("contact {id} began while already live; restarting its segment");
        }
    }

    /// Update the floating endpoint of a live contact.
    ///
    /// Returns `false` for unknown ids. Misses are expected traffic:
    /// after a preemption discards the in-progress set, still-live
    /// physical contacts keep reporting moves.
    pub fn move_contact(&mut self, id: ContactId, point: Point) -> bool {
        match self.in_progress.get_mut(&id) {
            Some(segment) => {
                segment.end = point;
                true
            }
            None => false,
        }
    }

    /// Promote a live contact's segment into the persisted list.
    ///
    /// The endpoint is frozen at `point` and the segment is stamped with
    /// `color`, whatever it carried while in progress. Returns `false`
    /// for unknown ids, in which case nothing is promoted.
    pub fn end_contact(&mut self, id: ContactId, point: Point, color: SegmentColor) -> bool {
        match self.in_progress.remove(&id) {
            Some(mut segment) => {
                segment.end = point;
                segment.color = color;
                self.persisted.push(segment);
                true
            }
            None => false,
        }
    }

    /// Discard the in-progress segment of one contact.
    pub fn cancel_contact(&mut self, id: ContactId) -> bool {
        self.in_progress.remove(&id).is_some()
    }

    /// Discard every in-progress segment. Returns `true` if any were live.
    pub fn cancel_all(&mut self) -> bool {
        let had_live = !self.in_progress.is_empty();
        self.in_progress.clear();
        had_live
    }

    /// Drop everything: in-progress, persisted and selection.
    ///
    /// Returns `true` if the ledger held anything to drop.
    pub fn clear_all(&mut self) -> bool {
        let had_content =
            !self.in_progress.is_empty() || !self.persisted.is_empty() || self.selected.is_some();
        self.in_progress.clear();
        self.persisted.clear();
        self.selected = None;
        had_content
    }

    /// Remove the persisted segment at `index`, shifting later indices
    /// down by one. The selection is cleared in the same step. Out of
    /// range indices are a no-op returning `None`.
    pub fn delete_at(&mut self, index: usize) -> Option<Segment> {
        if index >= self.persisted.len() {
            return None;
        }
        self.selected = None;
        Some(self.persisted.remove(index))
    }

    /// Shift both endpoints of the persisted segment at `index` by
    /// `delta`. Out of range indices are a no-op returning `false`.
    pub fn translate_at(&mut self, index: usize, delta: Vec2) -> bool {
        match self.persisted.get_mut(index) {
            Some(segment) => {
                segment.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Select the persisted segment at `index`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.persisted.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Clear the selection. Returns `true` if one was set.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Index of the selected persisted segment, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected segment itself, if any.
    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selected.and_then(|index| self.persisted.get(index))
    }

    /// Persisted segments in promotion order.
    pub fn persisted(&self) -> &[Segment] {
        &self.persisted
    }

    /// In-progress segments, one per live contact, in no defined order.
    pub fn in_progress_segments(&self) -> impl Iterator<Item = &Segment> {
        self.in_progress.values()
    }

    /// Number of live contacts being tracked.
    pub fn live_contacts(&self) -> usize {
        self.in_progress.len()
    }
}

//! Gesture routing over the contact ledger.
//!
//! [`GestureRouter`] is the single entry point hosts drive: raw
//! [`ContactEvent`]s and classified [`GestureEvent`]s go in, ledger
//! mutations happen synchronously, and the returned [`Effect`]s tell
//! the host what to do next. The router never calls back into the host.

use kurbo::Point;

use crate::config::{FINISHED_COLOR_CHOICES, SketchConfig};
use crate::events::{ContactEvent, Effect, GestureEvent, LongPressPhase, MenuAction, MenuEntry};
use crate::hittest::find_nearest;
use crate::ledger::ContactLedger;

/// Interaction mode the surface is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No contacts live, nothing selected.
    Idle,
    /// At least one contact is drawing an in-progress segment.
    Drawing,
    /// A persisted segment is selected, by tap (menu visible) or by a
    /// held long-press (menu hidden).
    Selected,
    /// Pan deltas are being applied to the selected segment.
    Moving,
}

/// Routes contact and gesture streams to ledger mutations and host
/// effects.
///
/// Dispatch guarantees, regardless of event order:
///
/// - At most one [`Effect::Redraw`] per dispatch, always ordered last.
/// - A hidden menu implies a cleared selection. The reverse does not
///   hold: a long-press selection shows no menu.
/// - The selection index always lies inside the persisted list.
/// - Promotion happens only on contact-end; cancels, preemptions and
///   interruptions discard in-progress work without a trace.
#[derive(Debug, Clone)]
pub struct GestureRouter {
    ledger: ContactLedger,
    config: SketchConfig,
    mode: Mode,
    menu_visible: bool,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu offered when a tap selects a segment.
fn delete_entries() -> Vec<MenuEntry> {
    vec![MenuEntry::new("Delete", MenuAction::DeleteSelected)]
}

/// Menu offered by the three-finger swipe up.
fn palette_entries() -> Vec<MenuEntry> {
    FINISHED_COLOR_CHOICES
        .iter()
        .map(|(label, color)| MenuEntry::new(label, MenuAction::SetFinishedColor(*color)))
        .collect()
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::with_config(SketchConfig::default())
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            ledger: ContactLedger::new(),
            config,
            mode: Mode::Idle,
            menu_visible: false,
        }
    }

    /// Dispatch one raw contact event.
    pub fn handle_contact(&mut self, event: ContactEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut dirty = false;
        match event {
            ContactEvent::Began { id, point } => {
                if self.mode == Mode::Moving {
                    // The drag owns the surface; late fingers are dropped.
                    return effects;
                }
                if self.menu_visible {
                    self.close_menu(&mut effects);
                }
                self.ledger
                    .begin_contact(id, point, self.config.finished_line_color);
                self.mode = Mode::Drawing;
                dirty = true;
            }
            ContactEvent::Moved { id, point } => {
                dirty = self.ledger.move_contact(id, point);
            }
            ContactEvent::Ended { id, point } => {
                dirty = self
                    .ledger
                    .end_contact(id, point, self.config.finished_line_color);
                if self.mode == Mode::Drawing && self.ledger.live_contacts() == 0 {
                    self.mode = Mode::Idle;
                }
            }
            ContactEvent::Cancelled { id, .. } => {
                dirty = self.ledger.cancel_contact(id);
                if self.mode == Mode::Drawing && self.ledger.live_contacts() == 0 {
                    self.mode = Mode::Idle;
                }
            }
        }
        if dirty {
            effects.push(Effect::Redraw);
        }
        effects
    }

    /// Dispatch one classified gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut dirty = false;
        match event {
            GestureEvent::Tap { point } => {
                if self.has_press_selection() {
                    // A held long-press owns the selection until release.
                    return effects;
                }
                match self.hit_test(point) {
                    Some(index) => {
                        self.close_menu(&mut effects);
                        self.ledger.select(index);
                        self.menu_visible = true;
                        effects.push(Effect::ShowMenu {
                            anchor: point,
                            entries: delete_entries(),
                        });
                        self.mode = Mode::Selected;
                        dirty = true;
                    }
                    None => {
                        dirty = self.close_menu(&mut effects);
                        self.mode = self.fallback_mode();
                    }
                }
            }
            GestureEvent::DoubleTap { .. } => {
                if self.menu_visible {
                    self.menu_visible = false;
                    effects.push(Effect::HideMenu);
                }
                dirty = self.ledger.clear_all();
                self.mode = Mode::Idle;
            }
            GestureEvent::LongPress {
                phase: LongPressPhase::Began,
                point,
            } => {
                if let Some(index) = self.hit_test(point) {
                    let discarded = self.ledger.live_contacts();
                    if discarded > 0 {
                        log::debug!("long press preempted {discarded} in-progress segment(s)");
                    }
                    self.close_menu(&mut effects);
                    self.ledger.cancel_all();
                    self.ledger.select(index);
                    self.mode = Mode::Selected;
                    dirty = true;
                }
            }
            GestureEvent::LongPress {
                phase: LongPressPhase::Ended,
                ..
            } => {
                // Sole exit from a long-press selection. A menu-backed
                // selection is not touched.
                if !self.menu_visible && self.ledger.clear_selection() {
                    self.mode = self.fallback_mode();
                    dirty = true;
                }
            }
            GestureEvent::Pan { delta } => {
                if !self.menu_visible {
                    if let Some(index) = self.ledger.selected_index() {
                        if self.ledger.translate_at(index, delta) {
                            self.mode = Mode::Moving;
                            dirty = true;
                        }
                    }
                }
            }
            GestureEvent::SwipeUp { point } => {
                dirty = self.ledger.cancel_all();
                dirty |= self.close_menu(&mut effects);
                self.menu_visible = true;
                effects.push(Effect::ShowMenu {
                    anchor: point,
                    entries: palette_entries(),
                });
                self.mode = Mode::Idle;
            }
        }
        if dirty {
            effects.push(Effect::Redraw);
        }
        effects
    }

    /// Apply a menu choice. Choosing an entry also closes the menu, so
    /// hosts whose menus report dismissal separately may still call
    /// [`GestureRouter::menu_dismissed`] afterwards without harm.
    pub fn menu_action(&mut self, action: MenuAction) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut dirty = false;
        match action {
            MenuAction::DeleteSelected => match self.ledger.selected_index() {
                Some(index) => {
                    // delete_at drops the selection in the same step
                    self.ledger.delete_at(index);
                    self.mode = self.fallback_mode();
                    dirty = true;
                }
                None => log::warn!("delete requested with nothing selected"),
            },
            MenuAction::SetFinishedColor(color) => {
                // Live setting; segments already persisted keep their color.
                self.config.finished_line_color = color;
            }
        }
        if self.menu_visible {
            self.menu_visible = false;
            effects.push(Effect::HideMenu);
            dirty |= self.ledger.clear_selection();
            self.mode = self.fallback_mode();
        }
        if dirty {
            effects.push(Effect::Redraw);
        }
        effects
    }

    /// Host notification that the menu went away without a choice.
    ///
    /// No [`Effect::HideMenu`] is emitted, the host already hid it.
    pub fn menu_dismissed(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.menu_visible {
            return effects;
        }
        self.menu_visible = false;
        if self.ledger.clear_selection() {
            effects.push(Effect::Redraw);
        }
        self.mode = self.fallback_mode();
        effects
    }

    /// The input source dropped every contact at once, e.g. a system
    /// interruption. In-progress segments are discarded unpromoted.
    pub fn interruption(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.ledger.cancel_all() {
            effects.push(Effect::Redraw);
        }
        if self.mode == Mode::Drawing {
            self.mode = Mode::Idle;
        }
        effects
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Read access to the surface state, for hosts and renderers.
    pub fn ledger(&self) -> &ContactLedger {
        &self.ledger
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Mutable settings access. Changes apply from the next dispatch.
    pub fn config_mut(&mut self) -> &mut SketchConfig {
        &mut self.config
    }

    fn hit_test(&self, point: Point) -> Option<usize> {
        find_nearest(
            self.ledger.persisted(),
            point,
            self.config.hit_test_tolerance,
            self.config.hit_test_sample_step,
        )
    }

    /// Whether a long-press selection is in flight (selected, no menu).
    fn has_press_selection(&self) -> bool {
        self.ledger.selected_index().is_some() && !self.menu_visible
    }

    /// Hide a visible menu and drop the selection bound to it. Returns
    /// `true` if a selection was cleared.
    fn close_menu(&mut self, effects: &mut Vec<Effect>) -> bool {
        if self.menu_visible {
            self.menu_visible = false;
            effects.push(Effect::HideMenu);
        }
        self.ledger.clear_selection()
    }

    /// Mode to settle into once a selection or menu interaction ends.
    fn fallback_mode(&self) -> Mode {
        if self.ledger.live_contacts() > 0 {
            Mode::Drawing
        } else {
            Mode::Idle
        }
    }
}

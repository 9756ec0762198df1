//! Delayed hover tooltip for tiles.
//!
//! `HoverTooltip` keeps at most one timer armed. Every hover transition
//! cancels the outstanding timer before arming its own, so a stale show can
//! never race a fresh hide. Timers are polled by the owner through `tick`.

use log::debug;
use std::time::Duration;

use crate::model::tile::Tile;
use crate::service::timer::{Timer, TimerHandle};

pub const HOVER_DELAY: Duration = Duration::from_millis(100);

/// Vertical gap between the popup and the hovered tile.
pub const POPUP_LIFT: f32 = 3.0;

/// Screen position of the hovered tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPosition {
    pub left: f32,
    pub top: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub x: f32,
    pub y: f32,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    PendingShow,
    Shown,
    PendingHide,
}

#[derive(Debug, Clone, PartialEq)]
enum PendingAction {
    Show(Popup),
    Hide,
}

pub struct HoverTooltip<T: Timer> {
    timer: T,
    delay: Duration,
    state: HoverState,
    pending: Option<(TimerHandle, PendingAction)>,
    popup: Option<Popup>,
}

impl<T: Timer> HoverTooltip<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            delay: HOVER_DELAY,
            state: HoverState::Idle,
            pending: None,
            popup: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn hover_enter(&mut self, tile: &Tile, position: HoverPosition) {
        let popup = Popup {
            x: position.left,
            y: position.top - POPUP_LIFT,
            content: tile.label.clone(),
        };
        self.replace_pending(PendingAction::Show(popup));
        self.state = HoverState::PendingShow;
    }

    pub fn hover_leave(&mut self) {
        self.replace_pending(PendingAction::Hide);
        self.state = HoverState::PendingHide;
    }

    /// Applies the pending action if `handle` is the timer currently armed.
    /// Returns whether anything changed.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.pending.take() {
            Some((pending, action)) if pending == handle => {
                match action {
                    PendingAction::Show(popup) => {
                        debug!("Tooltip shown: {}", popup.content);
                        self.popup = Some(popup);
                        self.state = HoverState::Shown;
                    }
                    PendingAction::Hide => {
                        debug!("Tooltip hidden");
                        self.popup = None;
                        self.state = HoverState::Idle;
                    }
                }
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Fires every expired timer. Returns whether the popup may have changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for handle in self.timer.take_expired() {
            changed |= self.fire(handle);
        }
        changed
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn current_popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn replace_pending(&mut self, action: PendingAction) {
        if let Some((previous, _)) = self.pending.take() {
            debug!("Canceling tooltip timer {}", previous.raw());
            self.timer.cancel(previous);
        }
        let handle = self.timer.arm(self.delay);
        debug!("Armed tooltip timer {} for {:?}", handle.raw(), self.delay);
        self.pending = Some((handle, action));
    }
}

//! Tap vs. long-press discrimination.
//!
//! `Released -> Pressed -> Dragging -> Released`. A press arms a hold timer
//! owned by the host; the host reports the timer back with the token it was
//! given so a timer from an earlier press cannot promote a later one.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    Mouse,
    Touch,
}

/// Identifies one armed hold timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoldToken(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressState {
    Released,
    Pressed {
        token: HoldToken,
        kind: PressKind,
        since: Duration,
    },
    Dragging {
        kind: PressKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Released before the threshold.
    Click,
    /// A drag gesture finished.
    DragEnded,
    /// Held past the threshold but released before the timer callback ran.
    HoldLapsed,
    /// Nothing was pressed.
    Idle,
}

#[derive(Debug)]
pub struct LongPress {
    hold: Duration,
    state: PressState,
    next_token: u32,
}

impl LongPress {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            state: PressState::Released,
            next_token: 0,
        }
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn hold_duration(&self) -> Duration {
        self.hold
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PressState::Dragging { .. })
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, PressState::Pressed { .. })
    }

    /// Start a press. Returns the token for the hold timer to arm, or `None`
    /// while a drag is already in progress (extra fingers are ignored).
    /// A press during `Pressed` supersedes the earlier one.
    pub fn press(&mut self, kind: PressKind, now: Duration) -> Option<HoldToken> {
        if self.is_dragging() {
            return None;
        }
        self.next_token = self.next_token.wrapping_add(1);
        let token = HoldToken(self.next_token);
        self.state = PressState::Pressed {
            token,
            kind,
            since: now,
        };
        Some(token)
    }

    /// The hold timer for `token` fired. Returns the press kind when this
    /// starts a drag.
    pub fn hold_elapsed(&mut self, token: HoldToken) -> Option<PressKind> {
        match self.state {
            PressState::Pressed { token: t, kind, .. } if t == token => {
                self.state = PressState::Dragging { kind };
                Some(kind)
            }
            _ => None,
        }
    }

    pub fn release(&mut self, now: Duration) -> ReleaseOutcome {
        let outcome = match self.state {
            PressState::Released => ReleaseOutcome::Idle,
            PressState::Dragging { .. } => ReleaseOutcome::DragEnded,
            PressState::Pressed { since, .. } => {
                if now.saturating_sub(since) < self.hold {
                    ReleaseOutcome::Click
                } else {
                    ReleaseOutcome::HoldLapsed
                }
            }
        };
        self.state = PressState::Released;
        outcome
    }

    /// Abort the gesture without a click (pointer cancel, context menu).
    /// Returns true when a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = PressState::Released;
        was_dragging
    }
}

//! Time based debouncer for a single button.
//!
//! A raw level is accepted as the new stable state only after it has been read continuously for
//! at least the debounce interval. Any flicker to the other level restarts the window.
use serde::{Deserialize, Serialize};

use crate::clock::elapsed_ms;

/// The debounced state of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Not polled yet.
    #[default]
    Unknown,
    Released,
    Pressed,
}

impl ButtonState {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed { Self::Pressed } else { Self::Released }
    }

    pub fn is_pressed(&self) -> bool {
        *self == Self::Pressed
    }

    pub fn is_released(&self) -> bool {
        *self == Self::Released
    }
}

/// Outcome of feeding one raw sample to the [`Debouncer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// The stable state changed on this sample.
    Debounced,
    /// The raw level differs from the stable state but hasn't held long enough yet.
    InProgress,
    /// The raw level equals the stable state.
    Ignored,
}

/// A raw level that differs from the stable state, and when it was first seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    pressed: bool,
    since: u32,
}

/// Debounce state machine, independent of any pin or clock.
#[derive(Clone, Debug)]
pub struct Debouncer {
    interval_ms: u32,
    /// Last raw level and the time it started. `None` until the first sample.
    candidate: Option<Candidate>,
    state: ButtonState,
    previous_state: ButtonState,
    changed: bool,
    last_change: u32,
}

impl Debouncer {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            candidate: None,
            state: ButtonState::Unknown,
            previous_state: ButtonState::Unknown,
            changed: false,
            last_change: 0,
        }
    }

    /// Feed one raw sample taken at `now`.
    pub fn update(&mut self, raw_pressed: bool, now: u32) -> DebounceState {
        // The first sample settles the button in its rest state. A press present at that moment
        // still has to pass the debounce window like any other.
        if self.state == ButtonState::Unknown {
            self.state = ButtonState::Released;
            self.previous_state = ButtonState::Released;
            self.last_change = now;
        }

        let candidate = match self.candidate {
            Some(c) if c.pressed == raw_pressed => c,
            _ => {
                let c = Candidate {
                    pressed: raw_pressed,
                    since: now,
                };
                self.candidate = Some(c);
                c
            }
        };

        self.previous_state = self.state;

        if self.state.is_pressed() == raw_pressed {
            self.changed = false;
            return DebounceState::Ignored;
        }

        if elapsed_ms(now, candidate.since) >= self.interval_ms {
            self.state = ButtonState::from_pressed(candidate.pressed);
            self.changed = true;
            self.last_change = now;
            DebounceState::Debounced
        } else {
            self.changed = false;
            DebounceState::InProgress
        }
    }

    /// Record a poll with no usable sample. The stable state is kept and no edge is reported.
    pub fn skip(&mut self) {
        self.previous_state = self.state;
        self.changed = false;
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn previous_state(&self) -> ButtonState {
        self.previous_state
    }

    /// Whether the last update changed the stable state
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Timestamp of the last accepted transition, or of the first sample.
    pub fn last_change(&self) -> u32 {
        self.last_change
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time spent in the current stable state as of `now`.
    pub fn elapsed_in_state(&self, now: u32) -> u32 {
        elapsed_ms(now, self.last_change)
    }
}

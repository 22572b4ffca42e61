use embedded_hal::digital::InputPin;

use crate::button::DebouncedInput;
use crate::clock::Clock;
use crate::config::ToggleConfig;
use crate::pin::InputBinding;

/// A push-on, push-off button.
///
/// The toggle state flips once on every press edge of the underlying [`DebouncedInput`], no
/// matter how long the button is held. Releasing never flips it.
pub struct ToggleInput<P> {
    input: DebouncedInput<P>,
    toggle_state: bool,
    changed: bool,
}

impl<P: InputPin> ToggleInput<P> {
    pub fn new(pin: P, config: ToggleConfig) -> Self {
        Self {
            input: DebouncedInput::new(pin, config.button),
            toggle_state: config.initial_state,
            changed: false,
        }
    }

    /// Create a toggle button starting off, with 25ms debounce, pull-up enabled and active low.
    pub fn with_defaults(pin: P) -> Self {
        Self::new(pin, ToggleConfig::default())
    }

    /// Poll the button and return the toggle state.
    pub fn poll<C: Clock>(&mut self, clock: &C) -> bool {
        self.poll_at(clock.now_ms())
    }

    pub fn poll_at(&mut self, now: u32) -> bool {
        self.input.poll_at(now);
        if self.input.was_pressed() {
            self.toggle_state = !self.toggle_state;
            self.changed = true;
            debug!("Toggle state: {}", self.toggle_state);
        } else {
            self.changed = false;
        }
        self.toggle_state
    }

    /// True if the last poll flipped the toggle state.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn toggle_state(&self) -> bool {
        self.toggle_state
    }

    /// Overwrite the toggle state. This is not reported by [`changed`](Self::changed).
    pub fn set_toggle_state(&mut self, state: bool) {
        self.toggle_state = state;
    }

    /// The underlying button, for press/release and timing queries.
    pub fn input(&self) -> &DebouncedInput<P> {
        &self.input
    }

    pub fn into_inner(self) -> P {
        self.input.into_inner()
    }
}

impl<P: InputBinding> ToggleInput<P> {
    /// Configure the pin. Must be called once before the first poll.
    pub fn initialize(&mut self) -> Result<(), P::Error> {
        self.input.initialize()
    }
}

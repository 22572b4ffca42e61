use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::ButtonConfig;
use crate::debounce::{ButtonState, DebounceState, Debouncer};
use crate::pin::InputBinding;

/// A push button on a single input pin, debounced in software.
///
/// Call [`poll`](Self::poll) frequently, at least several times per debounce interval. Sampling
/// slower than that delays or misses transitions, which can't be detected here.
///
/// All queries report the state as of the last poll and never read the pin. Before the first poll
/// the state is [`ButtonState::Unknown`]: both `is_pressed` and `is_released` return false.
pub struct DebouncedInput<P> {
    pin: P,
    config: ButtonConfig,
    debouncer: Debouncer,
}

impl<P: InputPin> DebouncedInput<P> {
    /// Create a button from a pin. The pin is not touched until [`initialize`](Self::initialize).
    pub fn new(pin: P, config: ButtonConfig) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(config.debounce_ms),
            config,
        }
    }

    /// Create a button with 50ms debounce, pull-up enabled and active low.
    pub fn with_defaults(pin: P) -> Self {
        Self::new(pin, ButtonConfig::default())
    }

    /// Read the pin and update the debounced state. Returns true if the button is pressed.
    pub fn poll<C: Clock>(&mut self, clock: &C) -> bool {
        self.poll_at(clock.now_ms())
    }

    /// Same as [`poll`](Self::poll), with a timestamp the caller has already read.
    pub fn poll_at(&mut self, now: u32) -> bool {
        match self.pin.is_high() {
            Ok(high) => {
                let raw_pressed = high != self.config.active_low;
                if let DebounceState::Debounced = self.debouncer.update(raw_pressed, now) {
                    debug!(
                        "Button {} at {}ms",
                        if raw_pressed { "pressed" } else { "released" },
                        now
                    );
                }
            }
            Err(_) => {
                warn!("Failed to read button pin, sample skipped");
                self.debouncer.skip();
            }
        }
        self.is_pressed()
    }

    pub fn state(&self) -> ButtonState {
        self.debouncer.state()
    }

    pub fn is_pressed(&self) -> bool {
        self.debouncer.state().is_pressed()
    }

    pub fn is_released(&self) -> bool {
        self.debouncer.state().is_released()
    }

    /// True if the last poll turned the button from released to pressed.
    pub fn was_pressed(&self) -> bool {
        self.debouncer.changed() && self.is_pressed()
    }

    /// True if the last poll turned the button from pressed to released.
    pub fn was_released(&self) -> bool {
        self.debouncer.changed() && self.is_released()
    }

    /// True if the button is pressed and has been for at least `ms` milliseconds.
    pub fn pressed_for<C: Clock>(&self, clock: &C, ms: u32) -> bool {
        self.pressed_for_at(clock.now_ms(), ms)
    }

    pub fn pressed_for_at(&self, now: u32, ms: u32) -> bool {
        self.is_pressed() && self.debouncer.elapsed_in_state(now) >= ms
    }

    /// True if the button is released and has been for at least `ms` milliseconds.
    pub fn released_for<C: Clock>(&self, clock: &C, ms: u32) -> bool {
        self.released_for_at(clock.now_ms(), ms)
    }

    pub fn released_for_at(&self, now: u32, ms: u32) -> bool {
        self.is_released() && self.debouncer.elapsed_in_state(now) >= ms
    }

    /// Time of the last state change in milliseconds, as read from the clock given to `poll`.
    pub fn last_change(&self) -> u32 {
        self.debouncer.last_change()
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputBinding> DebouncedInput<P> {
    /// Configure the pin as an input, with the pull-up if enabled in the config.
    ///
    /// Must be called once before the first poll.
    pub fn initialize(&mut self) -> Result<(), P::Error> {
        match self.pin.bind_input(self.config.pull_up) {
            Ok(()) => {
                info!(
                    "Button bound, pull-up: {}, active low: {}, debounce: {}ms",
                    self.config.pull_up,
                    self.config.active_low,
                    self.config.debounce_ms
                );
                Ok(())
            }
            Err(e) => {
                error!("Failed to bind button pin");
                Err(e)
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Default debounce time of a [`DebouncedInput`](crate::DebouncedInput), in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Default debounce time of a [`ToggleInput`](crate::ToggleInput), in milliseconds
pub const DEFAULT_TOGGLE_DEBOUNCE_MS: u32 = 25;

/// Config for a debounced button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Time a raw level must hold, without interruption, before it's accepted.
    pub debounce_ms: u32,
    /// Enable the internal pull-up resistor when the pin is bound
    pub pull_up: bool,
    /// If true, a low level means pressed. Otherwise a high level means pressed.
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            pull_up: true,
            active_low: true,
        }
    }
}

impl ButtonConfig {
    pub const fn new(debounce_ms: u32, pull_up: bool, active_low: bool) -> Self {
        Self {
            debounce_ms,
            pull_up,
            active_low,
        }
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_pull_up(mut self, pull_up: bool) -> Self {
        self.pull_up = pull_up;
        self
    }

    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }
}

/// Config for a push-on, push-off button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleConfig {
    /// The toggle state before the first press
    pub initial_state: bool,
    pub button: ButtonConfig,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            initial_state: false,
            button: ButtonConfig::default().with_debounce_ms(DEFAULT_TOGGLE_DEBOUNCE_MS),
        }
    }
}

impl ToggleConfig {
    pub const fn new(initial_state: bool, button: ButtonConfig) -> Self {
        Self { initial_state, button }
    }
}

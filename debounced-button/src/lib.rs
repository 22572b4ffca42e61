//! # debounced-button
//!
//! Debounced push button tracking for a single `embedded-hal` input pin.
//!
//! - [`DebouncedInput`] turns a bouncing raw level into a clean pressed/released state, and
//!   answers edge and duration queries about it.
//! - [`ToggleInput`] wraps a [`DebouncedInput`] and flips a latched bit on every press edge.
//!
//! Everything is poll driven: call `poll` once per loop iteration, noticeably more often than the
//! debounce interval, and query the result in between. Time comes from a [`Clock`] passed into
//! `poll`, so tests can drive a fake clock.
//!
//! ```ignore
//! let mut button = DebouncedInput::new(Preconfigured::new(pin), ButtonConfig::default());
//! button.initialize()?;
//! loop {
//!     button.poll(&EmbassyClock);
//!     if button.was_pressed() {
//!         info!("pressed");
//!     }
//! }
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod button;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod pin;
pub mod toggle;

pub use button::DebouncedInput;
pub use clock::{Clock, EmbassyClock};
pub use config::{ButtonConfig, ToggleConfig};
pub use debounce::{ButtonState, DebounceState, Debouncer};
pub use pin::{InputBinding, Preconfigured};
pub use toggle::ToggleInput;

use embedded_hal::digital::{ErrorType, InputPin};

/// An input pin that can be configured for button input.
///
/// `embedded-hal` has no trait for pull resistors, so HAL-specific pins implement this to set
/// the direction and pull-up when [`DebouncedInput::initialize`](crate::DebouncedInput::initialize)
/// is called. Pins that are already configured can be wrapped in [`Preconfigured`].
pub trait InputBinding: InputPin {
    /// Configure the pin as an input, enabling the internal pull-up if `pull_up` is true.
    fn bind_input(&mut self, pull_up: bool) -> Result<(), Self::Error>;
}

/// Wrapper for a pin whose direction and pull resistor were already set by the HAL.
///
/// Binding it is a no-op.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preconfigured<P> {
    pin: P,
}

impl<P: InputPin> Preconfigured<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ErrorType for Preconfigured<P> {
    type Error = P::Error;
}

impl<P: InputPin> InputPin for Preconfigured<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

impl<P: InputPin> InputBinding for Preconfigured<P> {
    fn bind_input(&mut self, _pull_up: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}

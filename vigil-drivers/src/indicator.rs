//! Indicator LED output
//!
//! Drives one LED via a GPIO pin, directly or through a transistor stage.
//! The commanded state is a pure function of the current cycle's values;
//! nothing here depends on what the LED showed before.

use vigil_hal::OutputPin;

/// GPIO-driven indicator LED
///
/// The pin can be wired active-high (default) or active-low.
pub struct Indicator<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = LED on)
    on: bool,
}

impl<P: OutputPin> Indicator<P> {
    /// Create an indicator
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut indicator = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure the LED starts off
        indicator.set_on(false);
        indicator
    }

    /// Create an indicator with an active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an indicator with an active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Drive the LED to the given logical state
    pub fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    /// Current logical state
    pub fn is_on(&self) -> bool {
        self.on
    }
}

//! GPIO adapters over embassy-rp pins
//!
//! Newtype wrappers around `embassy_rp::gpio::{Output, Input}` carrying the
//! shared vigil-hal pin traits (both the trait and the embassy types are
//! foreign here, so the impls need a local type).

use embassy_rp::gpio::{Input, Output};

/// Output line adapter for the display bus and indicator LEDs
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl vigil_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input line adapter for the PIR sensor
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Wrap a configured embassy input pin
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl vigil_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

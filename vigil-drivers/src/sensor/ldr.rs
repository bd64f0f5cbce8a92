//! Ambient light sensor
//!
//! A photoresistor divider on one ADC channel. Higher raw samples mean a
//! darker room; vigil-core's inverted percentage conversion turns that into
//! the 0-100 light figure the panel shows.

use embedded_hal::delay::DelayNs;
use vigil_core::light;
use vigil_hal::{AdcConverter, AdcError};

use super::Adc10;

/// Light sensor on a fixed ADC channel
pub struct LdrSensor<C, DELAY> {
    adc: Adc10<C, DELAY>,
    channel: u8,
}

impl<C: AdcConverter, DELAY: DelayNs> LdrSensor<C, DELAY> {
    /// Create a sensor reading the given converter channel
    pub fn new(adc: Adc10<C, DELAY>, channel: u8) -> Self {
        Self { adc, channel }
    }

    /// Read the raw 10-bit sample (0-1023)
    pub fn read_raw(&mut self) -> Result<u16, AdcError> {
        self.adc.read(self.channel)
    }

    /// Read the ambient light percentage (0-100)
    pub fn read_percent(&mut self) -> Result<u8, AdcError> {
        Ok(light::light_percentage(self.read_raw()?))
    }
}

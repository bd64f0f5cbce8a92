//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! vigil-core and vigil-hal for the panel's peripherals:
//!
//! - HD44780-class character display (bit-banged 4-bit bus)
//! - 10-bit ADC read sequencing
//! - Ambient light sensor (LDR on an ADC channel)
//! - PIR motion sensor
//! - Indicator LEDs
//!
//! Everything is generic over the vigil-hal pin/converter traits plus
//! `embedded_hal::delay::DelayNs`, so the same drivers run against real
//! GPIO on the target and against recording fakes in the host tests.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod sensor;

pub use display::Hd44780;
pub use indicator::Indicator;
pub use sensor::{Adc10, LdrSensor, PirSensor};

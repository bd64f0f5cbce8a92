//! RP2040-specific HAL for the light & motion firmware
//!
//! Implements the shared `vigil-hal` traits over embassy-rp:
//!
//! - GPIO output/input adapters for the display bus, LEDs and PIR line
//! - Blocking ADC adapter exposing the polled converter contract

#![no_std]

pub mod adc;
pub mod gpio;

pub use adc::RpAdc;
pub use gpio::{RpInput, RpOutput};

//! ADC converter implementation over the RP2040 ADC
//!
//! The RP2040 conversion is run synchronously inside `start_conversion`
//! and the sample latched for `result()`, so `is_busy` reports completion
//! immediately. A failed conversion leaves the converter reporting busy,
//! which the driver layer's bounded wait turns into a timeout for that
//! cycle.

use embassy_rp::adc::{Adc, Blocking, Channel};
use vigil_hal::AdcConverter;

/// Blocking RP2040 ADC with up to `N` configured channels
///
/// Construction owns the reference/pad configuration (the embassy `Channel`
/// constructor puts the pin into analog mode), which covers the one-time
/// converter initialization.
pub struct RpAdc<'d, const N: usize> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; N],
    selected: usize,
    sample: u16,
    failed: bool,
}

impl<'d, const N: usize> RpAdc<'d, N> {
    /// Compile-time guard: a converter with no channels is a wiring bug
    const HAS_CHANNELS: () = assert!(N > 0);

    /// Create a converter over a blocking ADC and its channels
    pub fn new(adc: Adc<'d, Blocking>, channels: [Channel<'d>; N]) -> Self {
        let () = Self::HAS_CHANNELS;
        Self {
            adc,
            channels,
            selected: 0,
            sample: 0,
            failed: false,
        }
    }
}

impl<const N: usize> AdcConverter for RpAdc<'_, N> {
    fn select_channel(&mut self, channel: u8) {
        debug_assert!((channel as usize) < N, "ADC channel out of range");
        // Out-of-range selection sticks to the last valid channel
        self.selected = (channel as usize).min(N - 1);
    }

    fn start_conversion(&mut self) {
        match self.adc.blocking_read(&mut self.channels[self.selected]) {
            Ok(raw) => {
                // RP2040 converts at 12 bits; scale to the 10-bit domain
                self.sample = raw >> 2;
                self.failed = false;
            }
            Err(_) => {
                self.failed = true;
            }
        }
    }

    fn is_busy(&self) -> bool {
        self.failed
    }

    fn result(&self) -> u16 {
        self.sample
    }
}

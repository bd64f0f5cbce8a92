//! 10-bit ADC read sequencing
//!
//! Drives a [`vigil_hal::AdcConverter`] through one full conversion: select
//! the channel, let the input settle, trigger, poll for completion with a
//! bounded busy-wait, and mask the result to the 10-bit sample domain.
//! Keeping the sequencing here leaves the chip HAL with nothing but the
//! register phases, which a host fake can script deterministically.

use embedded_hal::delay::DelayNs;
use vigil_hal::{AdcConverter, AdcError};

/// Acquisition delay between channel select and conversion start
pub const ACQUISITION_DELAY_MS: u32 = 2;

/// Busy-wait poll budget before a conversion is declared timed out
///
/// A healthy converter finishes in a handful of polls; the bound only
/// exists so a wedged converter surfaces as [`AdcError::Timeout`] instead
/// of hanging the loop forever.
pub const CONVERSION_POLL_BUDGET: u32 = 10_000;

/// Mask for the 10-bit sample domain (0-1023)
const SAMPLE_MASK: u16 = 0x03FF;

/// Conversion sequencer for a polled 10-bit ADC
pub struct Adc10<C, DELAY> {
    converter: C,
    delay: DELAY,
}

impl<C: AdcConverter, DELAY: DelayNs> Adc10<C, DELAY> {
    /// Create a sequencer over a configured converter
    ///
    /// Reference selection and pin direction are the converter
    /// constructor's concern; this driver only runs conversions.
    pub fn new(converter: C, delay: DELAY) -> Self {
        Self { converter, delay }
    }

    /// Run one conversion on the given channel
    ///
    /// Returns the raw sample in 0-1023. A conversion that does not
    /// complete within the poll budget fails with [`AdcError::Timeout`];
    /// the caller skips the cycle and retries on the next one.
    pub fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
        self.converter.select_channel(channel);
        self.delay.delay_ms(ACQUISITION_DELAY_MS);
        self.converter.start_conversion();

        let mut budget = CONVERSION_POLL_BUDGET;
        while self.converter.is_busy() {
            budget -= 1;
            if budget == 0 {
                return Err(AdcError::Timeout);
            }
        }

        Ok(self.converter.result() & SAMPLE_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Delay provider that completes immediately
    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Scripted converter: stays busy for a fixed number of polls
    struct ScriptedConverter {
        selected: Option<u8>,
        started: bool,
        busy_polls: Cell<u32>,
        raw: u16,
    }

    impl ScriptedConverter {
        fn new(busy_polls: u32, raw: u16) -> Self {
            Self {
                selected: None,
                started: false,
                busy_polls: Cell::new(busy_polls),
                raw,
            }
        }
    }

    impl AdcConverter for ScriptedConverter {
        fn select_channel(&mut self, channel: u8) {
            self.selected = Some(channel);
        }

        fn start_conversion(&mut self) {
            assert!(self.selected.is_some(), "start before channel select");
            self.started = true;
        }

        fn is_busy(&self) -> bool {
            let remaining = self.busy_polls.get();
            if remaining == 0 {
                false
            } else {
                self.busy_polls.set(remaining - 1);
                true
            }
        }

        fn result(&self) -> u16 {
            assert!(self.started, "result read before conversion");
            self.raw
        }
    }

    #[test]
    fn test_read_selects_channel_and_returns_sample() {
        let mut adc = Adc10::new(ScriptedConverter::new(3, 512), NoopDelay);

        let sample = adc.read(0).unwrap();
        assert_eq!(sample, 512);
        assert_eq!(adc.converter.selected, Some(0));
    }

    #[test]
    fn test_immediate_completion() {
        let mut adc = Adc10::new(ScriptedConverter::new(0, 1023), NoopDelay);
        assert_eq!(adc.read(2), Ok(1023));
        assert_eq!(adc.converter.selected, Some(2));
    }

    #[test]
    fn test_result_masked_to_ten_bits() {
        // A converter handing back stray high bits still yields 0-1023
        let mut adc = Adc10::new(ScriptedConverter::new(1, 0xF3FF), NoopDelay);
        assert_eq!(adc.read(0), Ok(0x03FF));
    }

    #[test]
    fn test_wedged_converter_times_out() {
        let mut adc = Adc10::new(ScriptedConverter::new(u32::MAX, 0), NoopDelay);
        assert_eq!(adc.read(0), Err(AdcError::Timeout));
    }

    #[test]
    fn test_completion_just_inside_budget() {
        let mut adc = Adc10::new(
            ScriptedConverter::new(CONVERSION_POLL_BUDGET - 1, 7),
            NoopDelay,
        );
        assert_eq!(adc.read(0), Ok(7));
    }
}

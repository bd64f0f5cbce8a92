//! Analog-to-digital converter abstraction
//!
//! Models a polled successive-approximation converter: select a channel,
//! trigger a conversion, poll for completion, read the combined result.
//! Chip HALs map these phases onto their conversion registers; host fakes
//! script them for deterministic tests.

/// Errors that can occur during a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete within the bounded busy-wait
    Timeout,
}

/// Register-level contract for a polled ADC
///
/// Implementations are not required to debounce or settle the input;
/// acquisition delays are the responsibility of the driver layer sitting
/// on top of this trait.
pub trait AdcConverter {
    /// Route the multiplexer to the given channel
    fn select_channel(&mut self, channel: u8);

    /// Trigger a conversion on the selected channel
    fn start_conversion(&mut self);

    /// Check whether a conversion is still in progress
    fn is_busy(&self) -> bool;

    /// Read the combined high/low conversion result
    ///
    /// Only valid once [`is_busy`](Self::is_busy) returns false. The raw
    /// register width is chip-specific; callers mask to their sample domain.
    fn result(&self) -> u16;
}

//! HD44780 bus timing constants
//!
//! All device timing margins in one table so they stay auditable and
//! adjustable without touching the protocol logic. Values are the ones the
//! reference panel was brought up with; they are comfortably above the
//! datasheet minima.

/// Wait after power-up before the first command
pub const POWER_ON_MS: u32 = 100;

/// Minimum width of the enable/latch pulse
pub const ENABLE_PULSE_US: u32 = 10;

/// Settle time after the high nibble of a command
pub const COMMAND_SETTLE_MS: u32 = 2;

/// Hold time after the low nibble of a command
pub const COMMAND_HOLD_MS: u32 = 10;

/// Settle time after either nibble of a character write
pub const DATA_SETTLE_MS: u32 = 2;

/// Extra wait after the clear command (the device is slow to blank DDRAM)
pub const CLEAR_EXTRA_MS: u32 = 10;

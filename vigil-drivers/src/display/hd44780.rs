//! HD44780-class character display over a bit-banged 4-bit bus
//!
//! The panel is wired with one register-select line, one enable/latch line
//! and four data lines. Every byte crosses the bus as two nibble transfers:
//! present the nibble on D4-D7, pulse enable, wait for the device to settle.
//! Bit packing is kept separate from the phase sequencing so the two are
//! independently testable.

use embedded_hal::delay::DelayNs;
use vigil_core::traits::display::{CharDisplay, DisplayError, COLUMNS, ROWS};
use vigil_hal::OutputPin;

use super::timing;

/// Clear display, return cursor home
const CMD_CLEAR: u8 = 0x01;
/// Switch the interface to 4-bit mode
const CMD_FUNCTION_4BIT: u8 = 0x02;
/// 4-bit interface, 2 display lines, 5x7 font
const CMD_FUNCTION_2LINE_5X7: u8 = 0x28;
/// Display on, cursor off, no blink
const CMD_DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
/// Auto-increment cursor after each character
const CMD_ENTRY_INCREMENT: u8 = 0x06;
/// DDRAM address bases for the two rows
const ROW_BASE: [u8; 2] = [0x80, 0xC0];

/// Which device register a transfer targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegisterTarget {
    /// RS low: instruction register
    Command,
    /// RS high: character data register
    Data,
}

/// The two halves of a 4-bit transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NibblePhase {
    High,
    Low,
}

/// Bit-banged HD44780 driver
///
/// Generic over the six output pins and a blocking delay provider, so the
/// same protocol logic drives real GPIO on the target and recording fakes
/// in the host tests.
pub struct Hd44780<RS, EN, D4, D5, D6, D7, DELAY> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DELAY,
}

impl<RS, EN, D4, D5, D6, D7, DELAY> Hd44780<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver from the six bus pins and a delay provider
    ///
    /// The device is not touched until [`init`](Self::init) runs.
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: DELAY) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Run the canonical 4-bit bring-up sequence
    ///
    /// Drives all bus lines low, waits out the power-on stabilization, then
    /// configures 4-bit mode, 2 lines / 5x7 font, display on with cursor
    /// off, auto-increment entry mode, and clears the screen.
    pub fn init(&mut self) {
        self.rs.set_low();
        self.en.set_low();
        self.present_nibble(0);

        self.delay.delay_ms(timing::POWER_ON_MS);

        self.command(CMD_FUNCTION_4BIT);
        self.command(CMD_FUNCTION_2LINE_5X7);
        self.command(CMD_DISPLAY_ON_CURSOR_OFF);
        self.command(CMD_ENTRY_INCREMENT);
        self.command(CMD_CLEAR);
        self.delay.delay_ms(timing::CLEAR_EXTRA_MS);
    }

    /// Send an instruction byte
    pub fn command(&mut self, code: u8) {
        self.transfer(RegisterTarget::Command, code);
    }

    /// Send a character byte; the device advances the cursor itself
    pub fn write_byte(&mut self, byte: u8) {
        self.transfer(RegisterTarget::Data, byte);
    }

    /// Two-phase transfer: high nibble, then low nibble
    fn transfer(&mut self, target: RegisterTarget, byte: u8) {
        self.rs.set_state(target == RegisterTarget::Data);

        for phase in [NibblePhase::High, NibblePhase::Low] {
            let nibble = match phase {
                NibblePhase::High => byte >> 4,
                NibblePhase::Low => byte & 0x0F,
            };
            self.present_nibble(nibble);
            self.latch();
            self.settle(target, phase);
        }
    }

    /// Put the low 4 bits of `nibble` on D4-D7
    fn present_nibble(&mut self, nibble: u8) {
        self.d4.set_state(nibble & 0x01 != 0);
        self.d5.set_state(nibble & 0x02 != 0);
        self.d6.set_state(nibble & 0x04 != 0);
        self.d7.set_state(nibble & 0x08 != 0);
    }

    /// Pulse the enable line to latch the presented nibble
    fn latch(&mut self) {
        self.en.set_high();
        self.delay.delay_us(timing::ENABLE_PULSE_US);
        self.en.set_low();
    }

    /// Wait out the settle time for a transfer phase
    ///
    /// Commands get a longer hold after the low nibble; character writes
    /// settle on the short window for both phases.
    fn settle(&mut self, target: RegisterTarget, phase: NibblePhase) {
        let ms = match (target, phase) {
            (RegisterTarget::Command, NibblePhase::High) => timing::COMMAND_SETTLE_MS,
            (RegisterTarget::Command, NibblePhase::Low) => timing::COMMAND_HOLD_MS,
            (RegisterTarget::Data, _) => timing::DATA_SETTLE_MS,
        };
        self.delay.delay_ms(ms);
    }
}

impl<RS, EN, D4, D5, D6, D7, DELAY> CharDisplay for Hd44780<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR);
        self.delay.delay_ms(timing::CLEAR_EXTRA_MS);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if !(1..=ROWS).contains(&row) || !(1..=COLUMNS).contains(&col) {
            return Err(DisplayError::InvalidCursorPosition);
        }
        self.command(ROW_BASE[(row - 1) as usize] + (col - 1));
        Ok(())
    }

    fn write_char(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte);
        Ok(())
    }
}

//! Character display trait for the 2x16 status panel

use crate::format;

/// Number of character rows on the panel
pub const ROWS: u8 = 2;

/// Number of character columns per row
pub const COLUMNS: u8 = 16;

/// Errors that can occur when driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Cursor position outside rows 1-2 / columns 1-16
    InvalidCursorPosition,
}

/// Trait for a two-line alphanumeric character display
///
/// Rows and columns are 1-based, matching the panel silkscreen: row 1 or 2,
/// column 1 through 16. The device auto-advances the cursor after each
/// character write; callers position the cursor explicitly and pre-truncate
/// text to 16 columns (the driver does not wrap).
///
/// Bus writes themselves cannot fail (the device offers no readback); the
/// only error surface is cursor validation.
pub trait CharDisplay {
    /// Clear the entire screen and return the cursor home
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to (row, col)
    ///
    /// Rejects positions outside rows 1-2 / columns 1-16 rather than
    /// computing a wrong device address.
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write a single character code at the cursor position
    fn write_char(&mut self, byte: u8) -> Result<(), DisplayError>;

    /// Write a string, one character at a time
    ///
    /// The sequence may be empty. ASCII only; the device character ROM does
    /// not cover anything wider.
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for &byte in text.as_bytes() {
            self.write_char(byte)?;
        }
        Ok(())
    }

    /// Blank a full line by overwriting it with spaces
    ///
    /// The device has no partial-clear primitive, so stale content is erased
    /// by rewriting all 16 columns.
    fn clear_line(&mut self, row: u8) -> Result<(), DisplayError> {
        self.set_cursor(row, 1)?;
        self.write_str("                ")
    }
}

/// Helper trait for writing formatted values
pub trait DisplayExt: CharDisplay {
    /// Write an unsigned number in decimal at the cursor position
    ///
    /// Digits are emitted most-significant-first, no padding, no sign.
    fn write_number(&mut self, n: u16) -> Result<(), DisplayError> {
        let mut buf = [0u8; format::MAX_DIGITS];
        for &digit in format::decimal(n, &mut buf) {
            self.write_char(digit)?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> DisplayExt for T {}

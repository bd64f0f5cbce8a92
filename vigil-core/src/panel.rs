//! Status panel update policy
//!
//! Display writes are slow (every character costs millisecond-scale settle
//! delays on the 4-bit bus), so each line is rewritten only when a value it
//! shows has changed since the last committed write. The previous cycle's
//! values are kept as shadow copies inside [`StatusPanel`] rather than as
//! free-floating globals.

use crate::light;
use crate::traits::display::{CharDisplay, DisplayError, DisplayExt};

/// One cycle's sensor readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Ambient light percentage (0-100)
    pub light_pct: u8,
    /// Motion currently detected
    pub motion: bool,
}

/// Indicator states derived from one cycle's readings
///
/// Derived purely from the current readings, never from prior LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indications {
    /// Light indicator: on below 50% ambient light
    pub light_led: bool,
    /// Motion indicator: on while motion is detected
    pub motion_led: bool,
}

impl Indications {
    /// Derive indicator states from readings
    pub fn from_readings(readings: Readings) -> Self {
        Self {
            light_led: light::light_led_on(readings.light_pct),
            motion_led: readings.motion,
        }
    }
}

/// Change-gated status panel
///
/// Line 1 shows the sensor readings (`L:<pct>% M:<YES|NO >`), line 2 the
/// indicator states (`LT:<ON |OFF> MT:<ON|OFF>`). Each line has its own
/// gate: it is rewritten iff one of its values differs from the shadow
/// copies committed by the last successful write of that line.
pub struct StatusPanel {
    prev_light_pct: u8,
    prev_motion: bool,
    prev_light_led: bool,
    prev_motion_led: bool,
}

impl StatusPanel {
    /// Create a panel with all shadow values in their zero state
    ///
    /// The first refresh after construction always rewrites line 1 unless
    /// the readings happen to match the zero state exactly.
    pub fn new() -> Self {
        Self {
            prev_light_pct: 0,
            prev_motion: false,
            prev_light_led: false,
            prev_motion_led: false,
        }
    }

    /// Return all shadow values to their zero state
    ///
    /// Called before entering the polling loop so stale splash-phase state
    /// cannot suppress the first real update.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Run one update cycle against the display
    ///
    /// Returns the indicator states the caller should drive onto the LED
    /// lines. Shadow values are committed only after the display writes for
    /// their line complete, so a failed write is retried on the next cycle.
    pub fn refresh<D: CharDisplay>(
        &mut self,
        display: &mut D,
        readings: Readings,
    ) -> Result<Indications, DisplayError> {
        let indications = Indications::from_readings(readings);

        if readings.light_pct != self.prev_light_pct || readings.motion != self.prev_motion {
            self.write_sensor_line(display, readings)?;
            self.prev_light_pct = readings.light_pct;
            self.prev_motion = readings.motion;
        }

        if indications.light_led != self.prev_light_led
            || indications.motion_led != self.prev_motion_led
        {
            self.write_indicator_line(display, indications)?;
            self.prev_light_led = indications.light_led;
            self.prev_motion_led = indications.motion_led;
        }

        Ok(indications)
    }

    /// Line 1: `L:<pct>% M:<YES|NO >`
    ///
    /// Motion is a fixed 3-character field ("NO " keeps a trailing space)
    /// so a shorter value fully overwrites the previous one.
    fn write_sensor_line<D: CharDisplay>(
        &self,
        display: &mut D,
        readings: Readings,
    ) -> Result<(), DisplayError> {
        display.clear_line(1)?;
        display.set_cursor(1, 1)?;
        display.write_str("L:")?;
        display.write_number(readings.light_pct as u16)?;
        display.write_str("% M:")?;
        display.write_str(if readings.motion { "YES" } else { "NO " })
    }

    /// Line 2: `LT:<ON |OFF> MT:<ON|OFF>`
    ///
    /// The motion field renders "ON" unpadded while the light field renders
    /// "ON " padded; this matches the reference panel output exactly.
    fn write_indicator_line<D: CharDisplay>(
        &self,
        display: &mut D,
        indications: Indications,
    ) -> Result<(), DisplayError> {
        display.clear_line(2)?;
        display.set_cursor(2, 1)?;
        display.write_str("LT:")?;
        display.write_str(if indications.light_led { "ON " } else { "OFF" })?;
        display.write_str(" MT:")?;
        display.write_str(if indications.motion_led { "ON" } else { "OFF" })
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

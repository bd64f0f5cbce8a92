//! PIR motion sensor
//!
//! The sensor module holds its output line high while motion is present,
//! so the driver is a direct line read. Retriggering and hold time are
//! handled inside the sensor module itself.

use vigil_hal::InputPin;

/// Motion sensor on a digital input line
pub struct PirSensor<P> {
    pin: P,
}

impl<P: InputPin> PirSensor<P> {
    /// Create a sensor over its input line
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Whether motion is currently detected
    pub fn motion_detected(&self) -> bool {
        self.pin.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin {
        high: bool,
    }

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_line_levels_map_directly() {
        assert!(PirSensor::new(FixedPin { high: true }).motion_detected());
        assert!(!PirSensor::new(FixedPin { high: false }).motion_detected());
    }
}

//! Ambient light conversion
//!
//! The photoresistor divider reads *darker = higher sample*, so the
//! percentage scale is inverted: full-scale sample = 0% light, zero
//! sample = 100% light.

/// Full-scale raw sample for a 10-bit converter
pub const FULL_SCALE: u16 = 1023;

/// Light percentages below this turn the light indicator on
pub const LIGHT_ON_BELOW_PCT: u8 = 50;

/// Convert a raw 10-bit sample to a light percentage (0-100)
///
/// Integer arithmetic, truncating toward zero: `100 - sample * 100 / 1023`.
/// Samples beyond full scale saturate to full scale.
pub fn light_percentage(sample: u16) -> u8 {
    let sample = sample.min(FULL_SCALE);
    (100 - (sample as u32 * 100 / FULL_SCALE as u32)) as u8
}

/// Whether the light indicator should be on for a given percentage
///
/// Boundary: exactly 50% leaves the indicator off.
pub fn light_led_on(percentage: u8) -> bool {
    percentage < LIGHT_ON_BELOW_PCT
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        // Full-scale sample (darkest divider reading) is 0% light
        assert_eq!(light_percentage(1023), 0);
        // Zero sample is 100% light
        assert_eq!(light_percentage(0), 100);
    }

    #[test]
    fn test_truncation() {
        // 512 * 100 / 1023 = 50 (50.05 truncated)
        assert_eq!(light_percentage(512), 50);
        assert_eq!(light_percentage(511), 51);
    }

    #[test]
    fn test_saturation_above_full_scale() {
        assert_eq!(light_percentage(0x3FF), 0);
        assert_eq!(light_percentage(u16::MAX), 0);
    }

    #[test]
    fn test_led_threshold_boundary() {
        assert!(light_led_on(0));
        assert!(light_led_on(49));
        // Exactly 50 leaves the LED off
        assert!(!light_led_on(50));
        assert!(!light_led_on(100));
    }

    proptest! {
        #[test]
        fn percentage_matches_reference_formula(sample in 0u16..=1023) {
            let expected = 100 - (sample as u32 * 100 / 1023);
            prop_assert_eq!(light_percentage(sample) as u32, expected);
        }

        #[test]
        fn percentage_always_in_range(sample in 0u16..=1023) {
            prop_assert!(light_percentage(sample) <= 100);
        }

        #[test]
        fn percentage_monotonically_decreasing(sample in 0u16..1023) {
            // Higher raw sample (darker divider) never reads brighter
            prop_assert!(light_percentage(sample + 1) <= light_percentage(sample));
        }
    }
}

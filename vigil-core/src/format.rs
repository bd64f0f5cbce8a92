//! Decimal formatting for display output
//!
//! Integer-only, no_std, no allocation: digits are packed into a small
//! fixed buffer least-significant-first, then handed back in reading order.

/// Maximum decimal digits for a u16 (65535)
pub const MAX_DIGITS: usize = 5;

/// Render `n` as decimal digits, most-significant-first
///
/// Returns the slice of `buf` holding the ASCII digits. Zero renders as a
/// single `'0'`; there is no sign handling and no fixed width.
pub fn decimal(mut n: u16, buf: &mut [u8; MAX_DIGITS]) -> &[u8] {
    if n == 0 {
        buf[0] = b'0';
        return &buf[..1];
    }

    // Pack digits in reverse order
    let mut i = 0;
    while n > 0 {
        buf[i] = (n % 10) as u8 + b'0';
        n /= 10;
        i += 1;
    }
    buf[..i].reverse();
    &buf[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(n: u16) -> heapless::String<MAX_DIGITS> {
        let mut buf = [0u8; MAX_DIGITS];
        let digits = decimal(n, &mut buf);
        let mut s = heapless::String::new();
        s.push_str(core::str::from_utf8(digits).unwrap()).unwrap();
        s
    }

    #[test]
    fn test_zero() {
        assert_eq!(fmt(0), "0");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(fmt(7), "7");
        assert_eq!(fmt(42), "42");
        assert_eq!(fmt(100), "100");
    }

    #[test]
    fn test_sensor_domain() {
        // Full 10-bit ADC range
        assert_eq!(fmt(1023), "1023");
    }

    #[test]
    fn test_max() {
        assert_eq!(fmt(u16::MAX), "65535");
    }

    #[test]
    fn test_digit_order_is_most_significant_first() {
        assert_eq!(fmt(1203), "1203");
    }
}

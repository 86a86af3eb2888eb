//! Common time/unit helpers for pace_core.

/// Number of nanoseconds in one millisecond.
pub const NANOS_PER_MS: i64 = 1_000_000;
/// Number of nanoseconds in one second.
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;
/// Number of milliseconds in one second.
pub const MILLIS_PER_SEC: f64 = 1_000.0;

/// Convert a sensor timestamp in nanoseconds to milliseconds (truncating).
#[inline]
pub fn ns_to_ms(ts_ns: i64) -> i64 {
    ts_ns / NANOS_PER_MS
}

#[cfg(test)]
mod tests {
    use super::ns_to_ms;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(ns_to_ms(0), 0);
        assert_eq!(ns_to_ms(1_999_999), 1);
        assert_eq!(ns_to_ms(2_000_000), 2);
        assert_eq!(ns_to_ms(-1_999_999), -1);
    }
}

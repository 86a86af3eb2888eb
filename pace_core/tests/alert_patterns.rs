use pace_core::AlertDebouncer;
use rstest::rstest;

#[rstest]
#[case(2.0, [0, 200, 700, 200, 700, 200])]
#[case(1.0, [0, 200, 1200, 200, 1200, 200])]
#[case(4.0, [0, 200, 450, 200, 450, 200])]
// step period truncates to whole milliseconds: 1000/3 -> 333
#[case(3.0, [0, 200, 533, 200, 533, 200])]
fn buzz_pattern_tracks_min_pace(#[case] min_pace: f32, #[case] expected: [u64; 6]) {
    assert_eq!(AlertDebouncer::buzz_pattern(min_pace), expected);
}

#[rstest]
#[case(2.0, 30_000)]
#[case(1.0, 60_000)]
#[case(3.0, 19_980)]
#[case(0.5, 120_000)]
fn cooldown_is_ten_buzz_cycles(#[case] min_pace: f32, #[case] expected_ms: i64) {
    assert_eq!(AlertDebouncer::cooldown_ms(min_pace), expected_ms);
}

// A stored minimum like "1e-20" parses as a finite positive float, so
// the debouncer must survive step periods beyond the i64 range.
#[rstest]
#[case(1e-20)]
#[case(f32::MIN_POSITIVE)]
fn near_zero_min_pace_saturates_cooldown(#[case] min_pace: f32) {
    assert_eq!(AlertDebouncer::cooldown_ms(min_pace), i64::MAX);
    // A cooldown that long never elapses from any realistic wall time.
    let d = AlertDebouncer::new();
    assert!(!d.should_alert(1_700_000_000_000, min_pace));
}

#[rstest]
fn huge_min_pace_collapses_cooldown_to_zero() {
    assert_eq!(AlertDebouncer::cooldown_ms(f32::MAX), 0);
    let mut d = AlertDebouncer::new();
    d.record_fired(5_000);
    assert!(d.should_alert(5_000, f32::MAX));
    assert_eq!(
        AlertDebouncer::buzz_pattern(f32::MAX),
        [0, 200, 200, 200, 200, 200]
    );
}

#[rstest]
fn fresh_debouncer_allows_immediate_alert_at_device_time() {
    // last_fired starts at 0; any realistic wall clock is far past the
    // cooldown, so the very first qualifying sample may alert.
    let d = AlertDebouncer::new();
    assert!(d.should_alert(1_700_000_000_000, 2.0));
}

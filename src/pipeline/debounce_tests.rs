//! Tests for the debounce state machine

use super::*;
use proptest::prelude::*;

const DEBOUNCE: Duration = Duration::from_millis(500);

fn state() -> DebounceState {
    DebounceState::new(DEBOUNCE, 2)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_nothing_pending_initially() {
    let mut s = state();
    assert!(!s.has_pending());
    assert_eq!(s.deadline(), None);
    assert_eq!(s.poll(Instant::now()), None);
}

#[test]
fn test_value_released_after_quiet_period() {
    let mut s = state();
    let t0 = Instant::now();
    s.push("abc".to_string(), t0);

    assert_eq!(s.deadline(), Some(t0 + DEBOUNCE));
    assert_eq!(s.poll(t0 + ms(499)), None);
    assert!(s.has_pending());
    assert_eq!(s.poll(t0 + ms(500)), Some("abc".to_string()));
    assert!(!s.has_pending());
}

#[test]
fn test_later_push_supersedes_pending_value() {
    let mut s = state();
    let t0 = Instant::now();
    s.push("ab".to_string(), t0);
    s.push("abc".to_string(), t0 + ms(100));

    // Old deadline passes without releasing anything
    assert_eq!(s.poll(t0 + ms(500)), None);
    assert_eq!(s.poll(t0 + ms(600)), Some("abc".to_string()));
}

#[test]
fn test_single_character_is_dropped() {
    let mut s = state();
    let t0 = Instant::now();
    s.push("a".to_string(), t0);

    assert_eq!(s.poll(t0 + DEBOUNCE), None);
    assert!(!s.has_pending());
    assert_eq!(s.last_forwarded(), None);
}

#[test]
fn test_empty_push_cancels_pending_value() {
    let mut s = state();
    let t0 = Instant::now();
    s.push("octocat".to_string(), t0);
    s.push(String::new(), t0 + ms(100));

    assert_eq!(s.poll(t0 + ms(1000)), None);
    assert_eq!(s.last_forwarded(), None);
}

#[test]
fn test_repeated_value_is_deduped() {
    let mut s = state();
    let t0 = Instant::now();
    s.push("abc".to_string(), t0);
    assert_eq!(s.poll(t0 + ms(600)), Some("abc".to_string()));

    s.push("abc".to_string(), t0 + ms(600));
    assert_eq!(s.poll(t0 + ms(1200)), None);
    assert_eq!(s.last_forwarded(), Some("abc"));
}

#[test]
fn test_dedupe_ignores_values_that_never_reached_fetch() {
    let mut s = state();
    let t0 = Instant::now();
    s.push("abc".to_string(), t0);
    assert_eq!(s.poll(t0 + ms(600)), Some("abc".to_string()));

    // "x" is filtered, so "abc" is still the last forwarded value
    s.push("x".to_string(), t0 + ms(600));
    assert_eq!(s.poll(t0 + ms(1200)), None);
    s.push("abc".to_string(), t0 + ms(1200));
    assert_eq!(s.poll(t0 + ms(1800)), None);

    s.push("abd".to_string(), t0 + ms(1800));
    assert_eq!(s.poll(t0 + ms(2400)), Some("abd".to_string()));
    s.push("abc".to_string(), t0 + ms(2400));
    assert_eq!(s.poll(t0 + ms(3000)), Some("abc".to_string()));
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let mut s = state();
    let t0 = Instant::now();
    // One character, two bytes
    s.push("é".to_string(), t0);
    assert_eq!(s.poll(t0 + DEBOUNCE), None);

    s.push("éé".to_string(), t0 + DEBOUNCE);
    assert_eq!(s.poll(t0 + DEBOUNCE * 2), Some("éé".to_string()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_short_values_never_released(value in "\\PC?") {
        let mut s = state();
        let t0 = Instant::now();
        s.push(value, t0);
        prop_assert_eq!(s.poll(t0 + DEBOUNCE), None);
    }

    #[test]
    fn prop_burst_releases_only_last_value(
        burst in prop::collection::vec("[a-z]{2,8}", 1..10),
        gap in 0u64..499,
    ) {
        let mut s = state();
        let t0 = Instant::now();
        let mut now = t0;
        let mut released = Vec::new();

        for value in &burst {
            if let Some(v) = s.poll(now) {
                released.push(v);
            }
            s.push(value.clone(), now);
            now += ms(gap);
        }
        if let Some(v) = s.poll(now + DEBOUNCE) {
            released.push(v);
        }

        prop_assert_eq!(released, vec![burst.last().unwrap().clone()]);
    }
}

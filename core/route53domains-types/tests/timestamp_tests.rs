use route53domains_types::{Error, Timestamp};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_epoch_millis_roundtrip() {
    let ts = Timestamp::from_epoch_millis(1_700_000_000_123).unwrap();
    assert_eq!(ts.epoch_millis(), 1_700_000_000_123);
}

#[test]
fn from_epoch_seconds_keeps_milliseconds() {
    let ts = Timestamp::from_epoch_seconds(1_700_000_000.5).unwrap();
    assert_eq!(ts.epoch_millis(), 1_700_000_000_500);
    assert!((ts.epoch_seconds() - 1_700_000_000.5).abs() < f64::EPSILON * 1e10);
}

#[test]
fn from_epoch_seconds_rejects_nan() {
    assert!(matches!(
        Timestamp::from_epoch_seconds(f64::NAN),
        Err(Error::InvalidTimestamp(_))
    ));
    assert!(Timestamp::from_epoch_seconds(f64::INFINITY).is_err());
}

#[test]
fn parse_rfc3339() {
    let ts = Timestamp::parse_rfc3339("2024-05-01T12:00:00Z").unwrap();
    assert_eq!(ts.epoch_millis(), 1_714_564_800_000);
}

#[test]
fn parse_rfc3339_with_offset() {
    let a = Timestamp::parse_rfc3339("2024-05-01T14:00:00+02:00").unwrap();
    let b = Timestamp::parse_rfc3339("2024-05-01T12:00:00Z").unwrap();
    assert_eq!(a, b);
}

#[test]
fn parse_rfc3339_invalid() {
    assert!(Timestamp::parse_rfc3339("yesterday").is_err());
}

#[test]
fn now_is_millisecond_precise() {
    let ts = Timestamp::now();
    let again = Timestamp::from_epoch_millis(ts.epoch_millis()).unwrap();
    assert_eq!(ts, again);
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_is_rfc3339_utc() {
    let ts = Timestamp::from_epoch_millis(1_714_564_800_000).unwrap();
    assert_eq!(ts.to_string(), "2024-05-01T12:00:00Z");
}

#[test]
fn display_shows_fraction_when_present() {
    let ts = Timestamp::from_epoch_millis(1_714_564_800_250).unwrap();
    assert_eq!(ts.to_string(), "2024-05-01T12:00:00.250Z");
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_follows_time() {
    let a = Timestamp::from_epoch_millis(1).unwrap();
    let b = Timestamp::from_epoch_millis(2).unwrap();
    assert!(a < b);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn whole_seconds_serialize_as_integer() {
    let ts = Timestamp::from_epoch_millis(1_714_564_800_000).unwrap();
    assert_eq!(serde_json::to_string(&ts).unwrap(), "1714564800");
}

#[test]
fn fractional_seconds_serialize_as_float() {
    let ts = Timestamp::from_epoch_millis(1_714_564_800_500).unwrap();
    assert_eq!(serde_json::to_string(&ts).unwrap(), "1714564800.5");
}

#[test]
fn deserialize_accepts_integer_float_and_string() {
    let a: Timestamp = serde_json::from_str("1714564800").unwrap();
    let b: Timestamp = serde_json::from_str("1714564800.0").unwrap();
    let c: Timestamp = serde_json::from_str("\"2024-05-01T12:00:00Z\"").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn deserialize_rejects_garbage() {
    assert!(serde_json::from_str::<Timestamp>("true").is_err());
    assert!(serde_json::from_str::<Timestamp>("\"soon\"").is_err());
}

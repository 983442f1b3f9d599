//! Tests for instant input conversion.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ago::{FormatError, InstantInput};
use chrono::{DateTime, TimeZone, Utc};

// === Accepted Forms ===

#[test]
fn epoch_ms_passes_through() {
    let input = InstantInput::from(1_698_400_800_000_i64);
    assert_eq!(input.epoch_ms().unwrap(), 1_698_400_800_000);

    let negative = InstantInput::from(-1_000_i64);
    assert_eq!(negative.epoch_ms().unwrap(), -1_000);
}

#[test]
fn chrono_datetimes_convert() {
    let utc: DateTime<Utc> = Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap();
    assert_eq!(
        InstantInput::from(utc).epoch_ms().unwrap(),
        1_698_400_800_000
    );

    let fixed = DateTime::parse_from_rfc3339("2023-10-27T12:00:00+02:00").unwrap();
    assert_eq!(
        InstantInput::from(fixed).epoch_ms().unwrap(),
        1_698_400_800_000
    );
}

#[test]
fn system_time_converts() {
    let st = UNIX_EPOCH + Duration::from_millis(42_000);
    assert_eq!(InstantInput::from(st).epoch_ms().unwrap(), 42_000);
}

#[test]
fn pre_epoch_system_time_is_negative() {
    let st = UNIX_EPOCH - Duration::from_millis(1_500);
    assert_eq!(InstantInput::from(st).epoch_ms().unwrap(), -1_500);
}

#[test]
fn rfc3339_strings_parse() {
    let input = InstantInput::from("2023-10-27T10:00:00.000Z");
    assert_eq!(input.epoch_ms().unwrap(), 1_698_400_800_000);

    // Offsets are honored.
    let offset = InstantInput::from("2023-10-27T17:00:00+07:00".to_string());
    assert_eq!(offset.epoch_ms().unwrap(), 1_698_400_800_000);
}

// === Invalid Inputs ===

#[test]
fn unparseable_text_errors_with_input() {
    let err = InstantInput::from("five days ago").epoch_ms().unwrap_err();
    assert!(matches!(err, FormatError::UnparseableInstant { .. }));
    assert!(err.to_string().contains("five days ago"));
}

#[test]
fn far_future_system_time_is_out_of_range() {
    let st = SystemTime::now() + Duration::from_secs(u64::MAX / 4);
    let err = InstantInput::from(st).epoch_ms().unwrap_err();
    assert!(matches!(err, FormatError::OutOfRange));
}

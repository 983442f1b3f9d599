//! Instant inputs and their conversion to epoch milliseconds.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::FormatError;

/// An instant input in any accepted form.
///
/// The formatter takes `impl Into<InstantInput>`, so callers can pass epoch
/// milliseconds, chrono date-times, `SystemTime` values, or RFC 3339 strings
/// interchangeably. Conversion to milliseconds happens inside the formatter
/// and is the only fallible step: unparseable strings and out-of-range
/// instants produce a [`FormatError`] rather than a garbage result.
///
/// # Example
///
/// ```
/// use ago::InstantInput;
///
/// let from_ms: InstantInput = 1_698_400_800_000_i64.into();
/// assert_eq!(from_ms.epoch_ms().unwrap(), 1_698_400_800_000);
///
/// let from_text: InstantInput = "2023-10-27T10:00:00Z".into();
/// assert_eq!(from_text.epoch_ms().unwrap(), 1_698_400_800_000);
/// ```
#[derive(Debug, Clone)]
pub enum InstantInput {
    /// Milliseconds since the Unix epoch.
    EpochMs(i64),

    /// A UTC date-time.
    Utc(DateTime<Utc>),

    /// A date-time with a fixed offset, as produced by RFC 3339 parsing.
    Fixed(DateTime<FixedOffset>),

    /// A system clock reading. Pre-epoch values map to negative milliseconds.
    System(SystemTime),

    /// An RFC 3339 date string, parsed lazily.
    Text(String),
}

impl InstantInput {
    /// Convert to signed milliseconds since the Unix epoch.
    pub fn epoch_ms(&self) -> Result<i64, FormatError> {
        match self {
            InstantInput::EpochMs(ms) => Ok(*ms),
            InstantInput::Utc(dt) => Ok(dt.timestamp_millis()),
            InstantInput::Fixed(dt) => Ok(dt.timestamp_millis()),
            InstantInput::System(st) => system_time_ms(*st),
            InstantInput::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.timestamp_millis())
                .map_err(|source| FormatError::UnparseableInstant {
                    input: text.clone(),
                    source,
                }),
        }
    }
}

fn system_time_ms(st: SystemTime) -> Result<i64, FormatError> {
    match st.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_millis()).map_err(|_| FormatError::OutOfRange),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .map_err(|_| FormatError::OutOfRange),
    }
}

impl From<i64> for InstantInput {
    fn from(ms: i64) -> Self {
        InstantInput::EpochMs(ms)
    }
}

impl From<DateTime<Utc>> for InstantInput {
    fn from(dt: DateTime<Utc>) -> Self {
        InstantInput::Utc(dt)
    }
}

impl From<DateTime<FixedOffset>> for InstantInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        InstantInput::Fixed(dt)
    }
}

impl From<SystemTime> for InstantInput {
    fn from(st: SystemTime) -> Self {
        InstantInput::System(st)
    }
}

impl From<&str> for InstantInput {
    fn from(text: &str) -> Self {
        InstantInput::Text(text.to_string())
    }
}

impl From<String> for InstantInput {
    fn from(text: String) -> Self {
        InstantInput::Text(text)
    }
}

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::types::LanguagePack;

/// The outcome of a relative-time formatting call.
///
/// A plain value with no identity beyond its fields. `unit` is the lowercase
/// unit name ("day", "minute", ...) for unit-based phrases, or the literal
/// [`TimeDiff::JUST_NOW_UNIT`] when the difference fell inside the just-now
/// window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeDiff {
    /// The rendered phrase ("3 days ago", "In 1 hour", "Just now").
    pub text: String,
    /// The unit the phrase is expressed in.
    pub unit: String,
    /// Signed difference in milliseconds; positive means the target is in
    /// the past relative to the reference.
    pub raw_diff_ms: i64,
    /// Absolute value of `raw_diff_ms`.
    pub diff_ms: i64,
    /// Whether the target lies after the reference.
    pub is_future: bool,
}

impl TimeDiff {
    /// The `unit` value used for just-now results. Deliberately not a unit
    /// name: the just-now band has no unit.
    pub const JUST_NOW_UNIT: &'static str = "Just now";

    /// Build a just-now result from a pack's just-now phrase.
    pub(crate) fn just_now(pack: &LanguagePack, raw_diff_ms: i64) -> Self {
        TimeDiff {
            text: pack.just_now.clone(),
            unit: Self::JUST_NOW_UNIT.to_string(),
            raw_diff_ms,
            diff_ms: raw_diff_ms.saturating_abs(),
            is_future: raw_diff_ms < 0,
        }
    }
}

impl Display for TimeDiff {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl From<TimeDiff> for String {
    fn from(diff: TimeDiff) -> Self {
        diff.text
    }
}

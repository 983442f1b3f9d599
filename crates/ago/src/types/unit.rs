use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unrecognized unit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized unit name: '{0}'")]
pub struct ParseUnitError(String);

/// A relative-time unit.
///
/// Units form a closed, ordered set. Each unit carries a fixed millisecond
/// threshold: the smallest absolute difference that qualifies for that unit.
/// Thresholds use fixed conversion constants (365-day year, 30-day month,
/// 7-day week) rather than calendar arithmetic, so a "month" is always
/// exactly 30 days of milliseconds.
///
/// # Example
///
/// ```
/// use ago::Unit;
///
/// // Two days and change resolves to "day" with a count of 2.
/// let (unit, count) = Unit::resolve(2 * 86_400_000 + 5_000).unwrap();
/// assert_eq!(unit, Unit::Day);
/// assert_eq!(count, 2);
///
/// // Below one second there is no matching unit.
/// assert_eq!(Unit::resolve(999), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every unit, in descending threshold order.
    ///
    /// The order matters: resolution scans this list front to back, so the
    /// coarsest qualifying unit always wins (two years is "year", never
    /// "month").
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// The minimum absolute millisecond difference that qualifies for this unit.
    pub const fn threshold_ms(self) -> i64 {
        match self {
            Unit::Year => 31_536_000_000,
            Unit::Month => 2_592_000_000,
            Unit::Week => 604_800_000,
            Unit::Day => 86_400_000,
            Unit::Hour => 3_600_000,
            Unit::Minute => 60_000,
            Unit::Second => 1_000,
        }
    }

    /// The lowercase unit name, as reported in formatting results.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Position of this unit in [`Unit::ALL`], used for template storage.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Resolve the coarsest unit whose threshold is met by an absolute
    /// millisecond difference, along with the whole-unit count.
    ///
    /// Returns `None` when the difference is below the smallest threshold
    /// (1000 ms); callers are expected to have handled the just-now band
    /// before asking for a unit.
    pub fn resolve(abs_diff_ms: i64) -> Option<(Unit, i64)> {
        Unit::ALL
            .into_iter()
            .find(|unit| abs_diff_ms >= unit.threshold_ms())
            .map(|unit| (unit, abs_diff_ms.div_euclid(unit.threshold_ms())))
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    /// Parse a lowercase unit name, the inverse of [`Unit::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

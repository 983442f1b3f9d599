//! The difference formatter: turns two instants into a localized phrase.

use bon::Builder;
use chrono::Utc;

use crate::defaults::{FALLBACK_KEY, english_pack};
use crate::error::FormatError;
use crate::instant::InstantInput;
use crate::registry::LocaleRegistry;
use crate::types::{LanguagePack, PartialPack, TimeDiff, Unit};

/// Differences at or below this many milliseconds (in either direction)
/// render as the just-now phrase instead of a unit-based one. A fixed grace
/// window, deliberately not configurable.
pub const JUST_NOW_WINDOW_MS: i64 = 5_000;

/// Locale selection for a single formatting call.
///
/// Resolved at the call boundary: a named locale reads the registry (with
/// English fallback for unknown keys); an inline pack merges over the
/// English defaults for that one call without touching the registry.
#[derive(Debug, Clone)]
pub enum Locale {
    /// A registry key ("en", "vi", ...).
    Named(String),
    /// A partial pack applied over the English defaults for this call only.
    Inline(PartialPack),
}

impl From<&str> for Locale {
    fn from(key: &str) -> Self {
        Locale::Named(key.to_string())
    }
}

impl From<String> for Locale {
    fn from(key: String) -> Self {
        Locale::Named(key)
    }
}

impl From<PartialPack> for Locale {
    fn from(partial: PartialPack) -> Self {
        Locale::Inline(partial)
    }
}

impl From<LanguagePack> for Locale {
    fn from(pack: LanguagePack) -> Self {
        Locale::Inline(pack.into())
    }
}

/// Options for [`LocaleRegistry::format`].
///
/// # Example
///
/// ```
/// use ago::{FormatOptions, LocaleRegistry};
///
/// let registry = LocaleRegistry::new();
/// let options = FormatOptions::builder()
///     .locale("vi")
///     .reference("2023-10-27T10:00:00Z")
///     .build();
/// let diff = registry.format("2023-10-27T09:00:00Z", options).unwrap();
/// assert_eq!(diff.text, "1 giờ trước");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct FormatOptions {
    /// Locale selection; the English pack when absent.
    #[builder(into)]
    pub locale: Option<Locale>,

    /// Reference instant, in any accepted input form; the wall-clock now at
    /// call time when absent.
    #[builder(into)]
    pub reference: Option<InstantInput>,
}

impl LocaleRegistry {
    /// Format the difference between `target` and the reference instant as a
    /// localized relative-time phrase.
    ///
    /// The signed difference is `reference - target`: positive means the
    /// target is in the past. Differences within [`JUST_NOW_WINDOW_MS`]
    /// render as the pack's just-now phrase; anything larger resolves to the
    /// coarsest qualifying [`Unit`], picking the singular template exactly
    /// when the count is 1 and substituting the decimal count for the
    /// `{c}` token.
    ///
    /// Pure apart from reading this registry and, when no reference is
    /// given, the system clock. Errors only on inputs that cannot be
    /// converted to an instant.
    ///
    /// # Example
    ///
    /// ```
    /// use ago::{FormatOptions, LocaleRegistry};
    ///
    /// let registry = LocaleRegistry::new();
    /// let options = FormatOptions::builder()
    ///     .reference("2023-10-27T10:00:00Z")
    ///     .build();
    /// let diff = registry.format("2023-10-24T10:00:00Z", options).unwrap();
    /// assert_eq!(diff.text, "3 days ago");
    /// assert_eq!(diff.unit, "day");
    /// assert!(!diff.is_future);
    /// ```
    pub fn format(
        &self,
        target: impl Into<InstantInput>,
        options: FormatOptions,
    ) -> Result<TimeDiff, FormatError> {
        let target_ms = target.into().epoch_ms()?;
        let reference_ms = match &options.reference {
            Some(reference) => reference.epoch_ms()?,
            None => Utc::now().timestamp_millis(),
        };

        let inline_pack;
        let pack: &LanguagePack = match &options.locale {
            None => self.get(FALLBACK_KEY),
            Some(Locale::Named(key)) => self.get(key),
            Some(Locale::Inline(partial)) => {
                inline_pack = english_pack().merged(partial);
                &inline_pack
            }
        };

        let raw_diff_ms = reference_ms.saturating_sub(target_ms);
        let is_future = raw_diff_ms < 0;
        let diff_ms = raw_diff_ms.saturating_abs();

        if diff_ms <= JUST_NOW_WINDOW_MS {
            return Ok(TimeDiff::just_now(pack, raw_diff_ms));
        }

        match Unit::resolve(diff_ms) {
            Some((unit, count)) => {
                let templates = if is_future { &pack.future } else { &pack.past };
                Ok(TimeDiff {
                    text: templates.get(unit).render(count),
                    unit: unit.name().to_string(),
                    raw_diff_ms,
                    diff_ms,
                    is_future,
                })
            }
            // Unreachable while the smallest threshold sits below the
            // just-now window, but the band between them must not panic.
            None => Ok(TimeDiff::just_now(pack, raw_diff_ms)),
        }
    }
}

//! Localized relative-time formatting.
//!
//! Given a target instant and a reference instant, `ago` picks the coarsest
//! qualifying time unit and renders a localized phrase like "3 days ago" or
//! "In 1 hour". Differences within five seconds render as a just-now phrase.
//! English and Vietnamese packs are built in; other locales are added by
//! merging partial packs over the English defaults.
//!
//! ```
//! use ago::{FormatOptions, LocaleRegistry};
//!
//! let registry = LocaleRegistry::new();
//! let options = FormatOptions::builder()
//!     .reference("2023-10-27T10:00:00Z")
//!     .build();
//! let diff = registry.format("2023-10-27T09:55:00Z", options).unwrap();
//! assert_eq!(diff.text, "5 minutes ago");
//! assert_eq!(diff.unit, "minute");
//! ```

pub mod defaults;
pub mod global;
pub mod types;

mod error;
mod formatter;
mod instant;
mod registry;

pub use error::FormatError;
pub use formatter::{FormatOptions, JUST_NOW_WINDOW_MS, Locale};
pub use instant::InstantInput;
pub use registry::LocaleRegistry;
pub use types::{
    COUNT_TOKEN, LanguagePack, ParseUnitError, PartialPack, PartialTemplates, TemplatePair,
    TimeDiff, Unit, UnitTemplates,
};

/// Creates a [`PartialTemplates`] from unit => (singular, plural) pairs.
///
/// # Example
///
/// ```
/// use ago::{Unit, templates};
///
/// let past = templates! {
///     Minute => ("{c} min ago", "{c} mins ago"),
///     Hour => ("{c} hr ago", "{c} hrs ago"),
/// };
/// assert_eq!(past.get(Unit::Minute).unwrap().plural, "{c} mins ago");
/// assert!(past.get(Unit::Day).is_none());
/// ```
#[macro_export]
macro_rules! templates {
    {} => {
        $crate::PartialTemplates::default()
    };
    { $($unit:ident => ($singular:expr, $plural:expr)),+ $(,)? } => {
        {
            let mut partial = $crate::PartialTemplates::default();
            $(
                partial.set(
                    $crate::Unit::$unit,
                    $crate::TemplatePair::new($singular, $plural),
                );
            )+
            partial
        }
    };
}

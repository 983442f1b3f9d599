//! Locale registry: named language packs with English fallback.

use std::collections::HashMap;

use crate::defaults::{FALLBACK_KEY, english_pack, vietnamese_pack};
use crate::types::{LanguagePack, PartialPack};

/// A registry of language packs keyed by locale string ("en", "vi", ...).
///
/// The registry is an explicit owned object rather than hidden process
/// state; pass it by reference (or wrap it for sharing) wherever formatting
/// happens. A process-wide default instance is available through the
/// [`global`](crate::global) module for convenience.
///
/// Lookup never fails: unknown keys fall back to the English pack, which is
/// always present and never removed.
///
/// # Example
///
/// ```
/// use ago::{LocaleRegistry, PartialPack};
///
/// let mut registry = LocaleRegistry::new();
/// registry.register("fr", PartialPack::builder().just_now("à l'instant").build());
///
/// assert_eq!(registry.get("fr").just_now, "à l'instant");
/// // Units not customized by the partial pack keep the English templates.
/// assert_eq!(registry.get("fr").past.get(ago::Unit::Day).plural, "{c} days ago");
/// ```
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    packs: HashMap<String, LanguagePack>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        let mut packs = HashMap::new();
        packs.insert(FALLBACK_KEY.to_string(), english_pack());
        packs.insert("vi".to_string(), vietnamese_pack());
        Self { packs }
    }
}

impl LocaleRegistry {
    /// Create a registry pre-populated with the built-in packs ("en", "vi").
    pub fn new() -> Self {
        Self::default()
    }

    /// The pack registered under `key`, or the English pack for unknown keys.
    pub fn get(&self, key: &str) -> &LanguagePack {
        match self.packs.get(key) {
            Some(pack) => pack,
            None => self
                .packs
                .get(FALLBACK_KEY)
                .expect("fallback pack is always registered"),
        }
    }

    /// Merge a partial pack into the pack at `key`.
    ///
    /// The base is the existing pack at `key`, or a copy of the English pack
    /// when `key` is new. Merging is per field and, within the template
    /// sets, per unit: repeated partial registrations accumulate, and units
    /// untouched by the new partial keep any earlier customization. After
    /// this call `get(key)` returns a fully populated pack.
    pub fn register(&mut self, key: impl Into<String>, partial: PartialPack) {
        let key = key.into();
        let base = self.get(&key).clone();
        self.packs.insert(key, base.merged(&partial));
    }

    /// Replace the pack at `key` wholesale with a complete pack.
    pub fn insert(&mut self, key: impl Into<String>, pack: LanguagePack) {
        self.packs.insert(key.into(), pack);
    }

    /// Whether a pack is registered under `key` (fallback not counted).
    pub fn contains(&self, key: &str) -> bool {
        self.packs.contains_key(key)
    }

    /// Registered locale keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.packs.keys().map(String::as_str)
    }
}

//! Process-wide default registry.
//!
//! Provides thread-safe access to a shared [`LocaleRegistry`] instance, so
//! callers that don't manage their own registry can format and register
//! locales through free functions. Individual operations are protected by a
//! lock; no ordering is guaranteed between concurrent registrations and
//! formatting calls.

use std::sync::{LazyLock, RwLock};

use crate::error::FormatError;
use crate::formatter::FormatOptions;
use crate::instant::InstantInput;
use crate::registry::LocaleRegistry;
use crate::types::{PartialPack, TimeDiff};

static GLOBAL_REGISTRY: LazyLock<RwLock<LocaleRegistry>> =
    LazyLock::new(|| RwLock::new(LocaleRegistry::new()));

/// Provides read access to the global registry.
pub fn with_registry<T>(f: impl FnOnce(&LocaleRegistry) -> T) -> T {
    let guard = GLOBAL_REGISTRY.read().expect("global registry lock poisoned");
    f(&guard)
}

/// Provides write access to the global registry.
pub fn with_registry_mut<T>(f: impl FnOnce(&mut LocaleRegistry) -> T) -> T {
    let mut guard = GLOBAL_REGISTRY
        .write()
        .expect("global registry lock poisoned");
    f(&mut guard)
}

/// Format against the global registry.
///
/// See [`LocaleRegistry::format`].
pub fn format(
    target: impl Into<InstantInput>,
    options: FormatOptions,
) -> Result<TimeDiff, FormatError> {
    with_registry(|registry| registry.format(target, options))
}

/// Merge a partial pack into the global registry.
///
/// See [`LocaleRegistry::register`].
pub fn register_locale(key: impl Into<String>, partial: PartialPack) {
    with_registry_mut(|registry| registry.register(key, partial));
}

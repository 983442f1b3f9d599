//! CLI command implementations.

mod diff;
mod locales;
mod units;

pub use diff::{run_diff, DiffArgs};
pub use locales::{run_locales, LocalesArgs};
pub use units::{run_units, UnitsArgs};

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use ago::{LocaleRegistry, PartialPack};

/// Build a registry, optionally extended with packs from a JSON file.
///
/// The file maps locale keys to partial packs; each entry is merged over the
/// existing pack for that key (or the English defaults for new keys).
pub(crate) fn build_registry(packs_path: Option<&Path>) -> miette::Result<LocaleRegistry> {
    let mut registry = LocaleRegistry::new();

    if let Some(path) = packs_path {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("Cannot read packs file {}: {}", path.display(), e))?;
        let packs: BTreeMap<String, PartialPack> = serde_json::from_str(&content)
            .map_err(|e| miette::miette!("Invalid packs file {}: {}", path.display(), e))?;
        for (key, partial) in packs {
            registry.register(key, partial);
        }
    }

    Ok(registry)
}

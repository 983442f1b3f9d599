//! Tests for the locale registry and the global default instance.

use ago::defaults::{english_pack, vietnamese_pack};
use ago::{FormatOptions, LocaleRegistry, PartialPack, Unit, global, templates};

// === Built-In Packs ===

#[test]
fn new_registry_has_builtin_locales() {
    let registry = LocaleRegistry::new();
    assert!(registry.contains("en"));
    assert!(registry.contains("vi"));
    assert_eq!(registry.get("en"), &english_pack());
    assert_eq!(registry.get("vi"), &vietnamese_pack());
}

#[test]
fn unknown_key_falls_back_to_english() {
    let registry = LocaleRegistry::new();
    assert_eq!(registry.get("zz"), &english_pack());
    assert!(!registry.contains("zz"));
}

// === Registration ===

#[test]
fn register_new_key_bases_on_english() {
    let mut registry = LocaleRegistry::new();
    registry.register("de", PartialPack::builder().just_now("gerade eben").build());

    let pack = registry.get("de");
    assert_eq!(pack.just_now, "gerade eben");
    // Everything the partial pack did not touch is English.
    assert_eq!(pack.past.get(Unit::Day).plural, "{c} days ago");
    assert!(registry.contains("de"));
}

#[test]
fn register_existing_key_merges_into_current_pack() {
    let mut registry = LocaleRegistry::new();
    registry.register(
        "vi",
        PartialPack::builder().just_now("mới đây").build(),
    );

    let pack = registry.get("vi");
    assert_eq!(pack.just_now, "mới đây");
    // Vietnamese templates survive; the base was not reset to English.
    assert_eq!(pack.past.get(Unit::Minute).plural, "{c} phút trước");
}

#[test]
fn repeated_registrations_preserve_earlier_customizations() {
    let mut registry = LocaleRegistry::new();
    registry.register(
        "xx",
        PartialPack::builder()
            .past(templates! { Hour => ("{c} h ago", "{c} h ago") })
            .build(),
    );
    registry.register(
        "xx",
        PartialPack::builder()
            .past(templates! { Minute => ("{c} m ago", "{c} m ago") })
            .build(),
    );

    let pack = registry.get("xx");
    assert_eq!(pack.past.get(Unit::Hour).plural, "{c} h ago");
    assert_eq!(pack.past.get(Unit::Minute).plural, "{c} m ago");
}

#[test]
fn insert_replaces_wholesale_and_round_trips() {
    let mut registry = LocaleRegistry::new();
    let pack = vietnamese_pack();
    registry.insert("vi2", pack.clone());
    assert_eq!(registry.get("vi2"), &pack);
}

#[test]
fn keys_lists_registered_locales() {
    let mut registry = LocaleRegistry::new();
    registry.register("fr", PartialPack::default());

    let mut keys: Vec<&str> = registry.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["en", "fr", "vi"]);
}

// === Global Registry ===

#[test]
fn global_register_locale_is_visible_to_global_format() {
    // Key is unique to this test; the global registry is shared state.
    global::register_locale(
        "test-global",
        PartialPack::builder().just_now("this instant").build(),
    );

    let options = FormatOptions::builder()
        .locale("test-global")
        .reference(10_000_i64)
        .build();
    let diff = global::format(9_000_i64, options).unwrap();
    assert_eq!(diff.text, "this instant");
}

#[test]
fn global_with_registry_reads_builtins() {
    let has_vi = global::with_registry(|registry| registry.contains("vi"));
    assert!(has_vi);
}

//! Built-in language packs.
//!
//! English is the universal fallback: registry lookups for unknown keys
//! return it, and partial packs are backfilled from it at merge time.

use crate::types::{LanguagePack, TemplatePair, UnitTemplates};

/// Registry key of the fallback pack.
pub const FALLBACK_KEY: &str = "en";

/// The complete English pack.
pub fn english_pack() -> LanguagePack {
    LanguagePack {
        just_now: "Just now".to_string(),
        past: UnitTemplates::from_pairs([
            TemplatePair::new("{c} year ago", "{c} years ago"),
            TemplatePair::new("{c} month ago", "{c} months ago"),
            TemplatePair::new("{c} week ago", "{c} weeks ago"),
            TemplatePair::new("{c} day ago", "{c} days ago"),
            TemplatePair::new("{c} hour ago", "{c} hours ago"),
            TemplatePair::new("{c} minute ago", "{c} minutes ago"),
            TemplatePair::new("{c} second ago", "{c} seconds ago"),
        ]),
        future: UnitTemplates::from_pairs([
            TemplatePair::new("In {c} year", "In {c} years"),
            TemplatePair::new("In {c} month", "In {c} months"),
            TemplatePair::new("In {c} week", "In {c} weeks"),
            TemplatePair::new("In {c} day", "In {c} days"),
            TemplatePair::new("In {c} hour", "In {c} hours"),
            TemplatePair::new("In {c} minute", "In {c} minutes"),
            TemplatePair::new("In {c} second", "In {c} seconds"),
        ]),
    }
}

/// The complete Vietnamese pack.
///
/// Vietnamese has no grammatical plural, so singular and plural templates
/// are identical for every unit.
pub fn vietnamese_pack() -> LanguagePack {
    LanguagePack {
        just_now: "vừa xong".to_string(),
        past: UnitTemplates::from_pairs([
            TemplatePair::new("{c} năm trước", "{c} năm trước"),
            TemplatePair::new("{c} tháng trước", "{c} tháng trước"),
            TemplatePair::new("{c} tuần trước", "{c} tuần trước"),
            TemplatePair::new("{c} ngày trước", "{c} ngày trước"),
            TemplatePair::new("{c} giờ trước", "{c} giờ trước"),
            TemplatePair::new("{c} phút trước", "{c} phút trước"),
            TemplatePair::new("{c} giây trước", "{c} giây trước"),
        ]),
        future: UnitTemplates::from_pairs([
            TemplatePair::new("Sau {c} năm", "Sau {c} năm"),
            TemplatePair::new("Sau {c} tháng", "Sau {c} tháng"),
            TemplatePair::new("Sau {c} tuần", "Sau {c} tuần"),
            TemplatePair::new("Sau {c} ngày", "Sau {c} ngày"),
            TemplatePair::new("Sau {c} giờ", "Sau {c} giờ"),
            TemplatePair::new("Sau {c} phút", "Sau {c} phút"),
            TemplatePair::new("Sau {c} giây", "Sau {c} giây"),
        ]),
    }
}

use std::array;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Unit;

/// The literal placeholder replaced with the decimal count when a template
/// is rendered. Replacement applies to the first occurrence only; templates
/// are expected to contain the token exactly once.
pub const COUNT_TOKEN: &str = "{c}";

/// Singular and plural template strings for one unit.
///
/// # Example
///
/// ```
/// use ago::TemplatePair;
///
/// let pair = TemplatePair::new("{c} day ago", "{c} days ago");
/// assert_eq!(pair.singular, "{c} day ago");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePair {
    /// Template used when the count is exactly 1.
    pub singular: String,
    /// Template used for every other count, including 0 and large counts.
    pub plural: String,
}

impl TemplatePair {
    /// Create a pair from any string-like values.
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Render the template for `count`, substituting the count token.
    pub(crate) fn render(&self, count: i64) -> String {
        let template = if count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        template.replacen(COUNT_TOKEN, &count.to_string(), 1)
    }
}

/// Complete per-unit template storage: one [`TemplatePair`] per unit,
/// indexed by [`Unit`].
///
/// Storage is a fixed array, so lookup is exhaustive by construction - a
/// complete pack can never be missing a unit's templates. Serialization
/// uses one field per unit name, like [`PartialTemplates`] but with every
/// unit required; deserializing an incomplete set is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UnitTemplatesRepr", into = "UnitTemplatesRepr")]
pub struct UnitTemplates([TemplatePair; 7]);

/// Wire form of [`UnitTemplates`]: named per-unit fields, all required.
#[derive(Serialize, Deserialize)]
struct UnitTemplatesRepr {
    year: TemplatePair,
    month: TemplatePair,
    week: TemplatePair,
    day: TemplatePair,
    hour: TemplatePair,
    minute: TemplatePair,
    second: TemplatePair,
}

impl From<UnitTemplates> for UnitTemplatesRepr {
    fn from(templates: UnitTemplates) -> Self {
        let [year, month, week, day, hour, minute, second] = templates.0;
        Self {
            year,
            month,
            week,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl From<UnitTemplatesRepr> for UnitTemplates {
    fn from(repr: UnitTemplatesRepr) -> Self {
        Self([
            repr.year,
            repr.month,
            repr.week,
            repr.day,
            repr.hour,
            repr.minute,
            repr.second,
        ])
    }
}

impl UnitTemplates {
    /// Build from one pair per unit, in [`Unit::ALL`] order
    /// (year, month, week, day, hour, minute, second).
    pub fn from_pairs(pairs: [TemplatePair; 7]) -> Self {
        Self(pairs)
    }

    /// Build by invoking `f` once per unit, in [`Unit::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Unit) -> TemplatePair) -> Self {
        Self(array::from_fn(|i| f(Unit::ALL[i])))
    }

    /// The template pair for a unit.
    pub fn get(&self, unit: Unit) -> &TemplatePair {
        &self.0[unit.index()]
    }

    /// Replace the template pair for a unit.
    pub fn set(&mut self, unit: Unit, pair: TemplatePair) {
        self.0[unit.index()] = pair;
    }

    /// Merge a partial template set into this one, unit by unit.
    ///
    /// Units absent from `partial` keep their current templates.
    pub fn merge(&mut self, partial: &PartialTemplates) {
        for unit in Unit::ALL {
            if let Some(pair) = partial.get(unit) {
                self.0[unit.index()] = pair.clone();
            }
        }
    }
}

/// A sparse per-unit template set, used when registering or overriding
/// locales. Units left as `None` fall back to the base pack at merge time.
///
/// Serialization uses one optional field per unit name, so a JSON partial
/// pack only lists the units it customizes; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTemplates {
    pub year: Option<TemplatePair>,
    pub month: Option<TemplatePair>,
    pub week: Option<TemplatePair>,
    pub day: Option<TemplatePair>,
    pub hour: Option<TemplatePair>,
    pub minute: Option<TemplatePair>,
    pub second: Option<TemplatePair>,
}

impl PartialTemplates {
    /// The customization for a unit, if present.
    pub fn get(&self, unit: Unit) -> Option<&TemplatePair> {
        match unit {
            Unit::Year => self.year.as_ref(),
            Unit::Month => self.month.as_ref(),
            Unit::Week => self.week.as_ref(),
            Unit::Day => self.day.as_ref(),
            Unit::Hour => self.hour.as_ref(),
            Unit::Minute => self.minute.as_ref(),
            Unit::Second => self.second.as_ref(),
        }
    }

    /// Set the customization for a unit.
    pub fn set(&mut self, unit: Unit, pair: TemplatePair) {
        let slot = match unit {
            Unit::Year => &mut self.year,
            Unit::Month => &mut self.month,
            Unit::Week => &mut self.week,
            Unit::Day => &mut self.day,
            Unit::Hour => &mut self.hour,
            Unit::Minute => &mut self.minute,
            Unit::Second => &mut self.second,
        };
        *slot = Some(pair);
    }
}

/// A complete set of phrases for one language: the just-now phrase plus
/// past and future templates for every unit.
///
/// Complete packs are always fully populated. Sparse customization goes
/// through [`PartialPack`] and [`LanguagePack::merge`], which backfills
/// missing fields from the base pack rather than leaving gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    /// Phrase used when the difference is within the just-now window.
    pub just_now: String,
    /// Templates for instants in the past ("3 days ago").
    pub past: UnitTemplates,
    /// Templates for instants in the future ("In 3 days").
    pub future: UnitTemplates,
}

impl LanguagePack {
    /// Merge a partial pack into this one, field by field.
    ///
    /// The past and future template sets merge independently, unit by unit;
    /// a partial pack that customizes only `past.minute` leaves every other
    /// template untouched.
    pub fn merge(&mut self, partial: &PartialPack) {
        if let Some(just_now) = &partial.just_now {
            self.just_now = just_now.clone();
        }
        if let Some(past) = &partial.past {
            self.past.merge(past);
        }
        if let Some(future) = &partial.future {
            self.future.merge(future);
        }
    }

    /// Consuming form of [`merge`](Self::merge).
    pub fn merged(mut self, partial: &PartialPack) -> Self {
        self.merge(partial);
        self
    }
}

/// A sparse language pack for registration and inline overrides.
///
/// # Example
///
/// ```
/// use ago::{PartialPack, PartialTemplates, TemplatePair, Unit};
///
/// let mut past = PartialTemplates::default();
/// past.set(Unit::Minute, TemplatePair::new("{c} min ago", "{c} mins ago"));
///
/// let partial = PartialPack::builder()
///     .just_now("now")
///     .past(past)
///     .build();
/// assert_eq!(partial.just_now.as_deref(), Some("now"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(default)]
pub struct PartialPack {
    /// Override for the just-now phrase.
    pub just_now: Option<String>,
    /// Unit-level overrides for past templates.
    pub past: Option<PartialTemplates>,
    /// Unit-level overrides for future templates.
    pub future: Option<PartialTemplates>,
}

impl From<LanguagePack> for PartialPack {
    /// A complete pack viewed as a partial pack that overrides everything.
    fn from(pack: LanguagePack) -> Self {
        let to_partial = |templates: &UnitTemplates| {
            let mut partial = PartialTemplates::default();
            for unit in Unit::ALL {
                partial.set(unit, templates.get(unit).clone());
            }
            partial
        };
        PartialPack {
            just_now: Some(pack.just_now),
            past: Some(to_partial(&pack.past)),
            future: Some(to_partial(&pack.future)),
        }
    }
}

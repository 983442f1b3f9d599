mod pack;
mod result;
mod unit;

pub use pack::{
    COUNT_TOKEN, LanguagePack, PartialPack, PartialTemplates, TemplatePair, UnitTemplates,
};
pub use result::TimeDiff;
pub use unit::{ParseUnitError, Unit};

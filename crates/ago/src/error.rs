//! Error types for instant conversion.

use thiserror::Error;

/// An error converting an input into an absolute instant.
///
/// Invalid instants fail fast: formatting never produces a result built from
/// a difference that could not be computed. Unknown locale keys and
/// incomplete partial packs are not errors; they fall back to the English
/// defaults instead.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A date string could not be parsed as RFC 3339.
    #[error("cannot parse '{input}' as an instant: {source}")]
    UnparseableInstant {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// An instant is too far from the epoch to represent as milliseconds.
    #[error("instant out of representable millisecond range")]
    OutOfRange,
}

//! Errors raised while turning command line words into a picked name.
//!
//! Every variant is a problem with the user's input. Messages carry the
//! offending text or value so the invocation can be corrected.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickError {
    /// A `-` prefixed word that is neither `-q` nor `-q<number>`
    #[error("Unexpected option: {0}")]
    UnexpectedOption(String),

    /// A standalone `-q` was the last word
    #[error("Expected a number after -q")]
    MissingQualityValue,

    #[error("Expected a number after -q, got \"{0}\"")]
    InvalidQualityFormat(String),

    /// Parsed, but infinite, NaN or negative
    #[error("Quality must be a valid nonnegative number, got \"{0}\"")]
    InvalidQualityRange(String),

    /// Two qualities with no name between them
    #[error("Quality is already specified ({held}), cannot override with {new}")]
    DuplicateQuality { held: f64, new: f64 },

    #[error("No name after quality ({0})")]
    OrphanedQuality(f64),

    #[error("No entries to select")]
    NoEntries,

    #[error("Sum of all qualities must be greater than 0")]
    ZeroTotalWeight,

    /// Finite qualities whose sum is no longer finite
    #[error("Sum of all qualities is too large to draw from")]
    WeightOverflow,
}

pub type Result<T> = std::result::Result<T, PickError>;

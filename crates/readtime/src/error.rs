use thiserror::Error;

/// Errors surfaced to callers of the crate.
///
/// Per-field problems never show up here; they are [`ConversionFailure`]s and
/// are absorbed by the aggregator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Words per minute must be greater than zero.")]
    InvalidConfiguration,

    #[error("Unsupported read time input: {0}.")]
    InvalidInputKind(String),

    #[error("Unable to decode content: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reason a single field could not be turned into countable text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionFailure {
    #[error("field type '{0}' has no text representation")]
    Unsupported(String),

    #[error("repeater fields cannot be converted to text")]
    NotText,
}

pub type Result<T> = std::result::Result<T, Error>;

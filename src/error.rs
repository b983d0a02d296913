//! Crate-level error type for everything beyond the plain validation verdict.

use thiserror::Error;

use crate::validate::Failure;

#[derive(Debug, Error)]
pub enum Error {
    /// The value did not conform to its descriptor.
    #[error("value does not conform: {0}")]
    Invalid(#[from] Failure),

    /// The value conformed but could not be viewed as the target type.
    #[error("cannot deserialize conforming value at `{path}`: {source}")]
    Deserialize {
        path: String,
        source: serde_json::Error,
    },

    /// A stock pattern check was given a regex that does not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

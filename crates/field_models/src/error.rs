//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! a model used without a field, upstream source count mismatches, invalid configuration,
//! and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("no field configured; call set_field() before evaluating")]
    MissingField,

    #[error("field expects {expected} source(s) but {found} were given")]
    SourceCount { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn source_count_message_names_both_counts() {
        let err = Error::SourceCount {
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "field expects 2 source(s) but 3 were given"
        );
    }
}

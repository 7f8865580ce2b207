// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout jsonguard.
//!
//! This module provides the foundational types for the library:
//! - [`DecodeError`] - Structured, path-annotated failure
//! - [`JsonType`] - Closed classification of untyped input
//! - [`Segment`] - Path segments for nested lookups
//! - [`Dialect`] - Selects the public name-set a decoder reports under

pub mod error;
pub mod path;
pub mod result;
pub mod value;

pub use error::{DecodeError, Error, Fault, Result};
pub use path::Segment;
pub use value::{IntoJson, JsonType, Object, Unknown};

use serde_json::Value;

/// The public name-set a failure is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Failures produced by the `decoder` family
    Decoder,
    /// Failures produced by the `validator` family
    Validator,
}

/// Error returned when parsing an `ErrorKind` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseErrorKindError {
    _private: (),
}

impl std::fmt::Display for ParseErrorKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid error kind, expected 'DecodeError' or 'ValidationError'"
        )
    }
}

impl std::error::Error for ParseErrorKindError {}

impl std::str::FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "DecodeError" => Ok(ErrorKind::Decoder),
            "ValidationError" => Ok(ErrorKind::Validator),
            _ => Err(ParseErrorKindError { _private: () }),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Discriminant tag stored in the `kind` field of a failure.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Decoder => "DecodeError",
            ErrorKind::Validator => "ValidationError",
        }
    }

    /// Plural noun used in aggregated alternation messages.
    pub fn plural_noun(&self) -> &'static str {
        match self {
            ErrorKind::Decoder => "decoders",
            ErrorKind::Validator => "validators",
        }
    }

    /// Structural check for the failure shape tagged with this kind.
    ///
    /// Only the serialized shape is inspected, so values that went through
    /// a serialization boundary are still recognized.
    pub fn matches(&self, value: &Value) -> bool {
        let Some(obj) = value.as_object() else {
            return false;
        };
        obj.get("kind").and_then(Value::as_str) == Some(self.as_str())
            && obj.get("at").is_some_and(Value::is_string)
            && obj.get("message").is_some_and(Value::is_string)
    }
}

/// Type-level selector for one public name-set.
///
/// Both dialects drive the same engine; they differ only in the tag
/// written into failures and in the vocabulary of alternation messages.
pub trait Dialect: Send + Sync + 'static {
    /// Kind reported by decoders of this dialect.
    const KIND: ErrorKind;
}

/// Dialect of the `decoder` name-set.
#[derive(Debug, Clone, Copy)]
pub enum Decoding {}

impl Dialect for Decoding {
    const KIND: ErrorKind = ErrorKind::Decoder;
}

/// Dialect of the `validator` name-set.
#[derive(Debug, Clone, Copy)]
pub enum Validating {}

impl Dialect for Validating {
    const KIND: ErrorKind = ErrorKind::Validator;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_kind_from_str() {
        assert_eq!("DecodeError".parse::<ErrorKind>(), Ok(ErrorKind::Decoder));
        assert_eq!(
            "ValidationError".parse::<ErrorKind>(),
            Ok(ErrorKind::Validator)
        );
        assert!("decodeerror".parse::<ErrorKind>().is_err());
    }

    #[test]
    fn test_error_kind_display_round_trip() {
        for kind in [ErrorKind::Decoder, ErrorKind::Validator] {
            assert_eq!(kind.to_string().parse::<ErrorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_matches_requires_tag_and_fields() {
        let value = json!({"kind": "DecodeError", "at": "input", "message": "boom"});
        assert!(ErrorKind::Decoder.matches(&value));
        assert!(!ErrorKind::Validator.matches(&value));

        assert!(!ErrorKind::Decoder.matches(&json!({"kind": "DecodeError"})));
        assert!(!ErrorKind::Decoder.matches(&json!("DecodeError")));
        assert!(!ErrorKind::Decoder.matches(&json!({
            "kind": "DecodeError",
            "at": 3,
            "message": "boom"
        })));
    }

    #[test]
    fn test_dialect_vocabulary() {
        assert_eq!(Decoding::KIND.plural_noun(), "decoders");
        assert_eq!(Validating::KIND.plural_noun(), "validators");
    }
}

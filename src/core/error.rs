// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for jsonguard.
//!
//! Provides:
//! - [`DecodeError`] - the structured failure returned by every execution mode
//! - [`Fault`] - the engine-internal failure, relative to the decoder that produced it
//! - [`Error`] - failures of the text entry point (parse or decode)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::path::Segment;

/// Root marker every failure path starts with.
pub const ROOT: &str = "input";

/// A rejected input, located by path.
///
/// This is the persisted shape of a failure:
/// `{ kind, input, at, message }`. `input` is the value originally
/// passed to the decoder (omitted when it was undefined), `at` is the
/// path from the root marker `input` to the failing node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} at {at}")]
pub struct DecodeError {
    /// Discriminant tag, `"DecodeError"` or `"ValidationError"`
    pub kind: String,
    /// Root value the decoder was run against
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub input: Option<Value>,
    /// Path to the failing node, e.g. `input.a[1].b`
    pub at: String,
    /// Human-readable reason
    pub message: String,
}

/// A present `input` key is always defined, even when it holds `null`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl DecodeError {
    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("kind", self.kind.clone()),
            ("at", self.at.clone()),
            ("message", self.message.clone()),
        ]
    }

    /// Convert into the persisted JSON shape.
    pub fn to_value(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("kind".to_string(), Value::String(self.kind.clone()));
        if let Some(input) = &self.input {
            obj.insert("input".to_string(), input.clone());
        }
        obj.insert("at".to_string(), Value::String(self.at.clone()));
        obj.insert("message".to_string(), Value::String(self.message.clone()));
        Value::Object(obj)
    }
}

impl From<DecodeError> for Value {
    fn from(err: DecodeError) -> Self {
        err.to_value()
    }
}

/// Failure inside the engine, before the root marker and tag are attached.
///
/// `at` is the suffix below the decoder that reported it (empty when the
/// decoder rejected its own input). Each structural parent prepends its
/// own segment on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// Path suffix relative to the reporting decoder
    pub at: String,
    /// Reason
    pub message: String,
}

impl Fault {
    /// Create a fault at the current path.
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            at: String::new(),
            message: message.into(),
        }
    }

    /// Create a fault for a value of the wrong kind.
    pub fn expected(what: &str, got: &str) -> Self {
        Fault::new(format!("expected {what}, got {got}"))
    }

    /// Move this fault one level down, below `segment`.
    pub fn within(mut self, segment: &Segment) -> Self {
        self.at = format!("{segment}{}", self.at);
        self
    }

    /// Move this fault below a whole path prefix.
    pub fn within_path(mut self, segments: &[Segment]) -> Self {
        self.at = format!("{}{}", super::path::render(segments), self.at);
        self
    }

    /// Render as a child of an alternation, re-rooted at `error`.
    pub fn render_alternative(&self) -> String {
        format!("\"at error{}: {}\"", self.at, self.message)
    }

    /// Attach the root marker, tag and root input.
    pub fn into_error(self, kind: &str, input: Option<&Value>) -> DecodeError {
        DecodeError {
            kind: kind.to_string(),
            input: input.cloned(),
            at: format!("{ROOT}{}", self.at),
            message: self.message,
        }
    }
}

/// Errors from running a decoder against JSON text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text was not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The parsed value was rejected
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type for decoder runs.
pub type Result<T> = std::result::Result<T, DecodeError>;

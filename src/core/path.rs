// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Path segments for locating values inside an input tree.

use std::fmt;

use serde_json::Value;

/// One step into an input tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object field, rendered as `.name`
    Key(String),
    /// Array position, rendered as `[index]`. Negative indices never exist.
    Index(i64),
}

impl Segment {
    /// Step from `value` into this segment, if it exists there.
    pub fn lookup<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match (self, value) {
            (Segment::Key(key), Value::Object(obj)) => obj.get(key),
            (Segment::Index(index), Value::Array(arr)) => {
                usize::try_from(*index).ok().and_then(|i| arr.get(i))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, ".{key}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(index.into())
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// Concatenate segments left to right.
pub fn render(segments: &[Segment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}

/// Build a path of mixed keys and indices.
///
/// ```
/// use jsonguard::{path, Segment};
///
/// let p: Vec<Segment> = path!["a", 1, "b"];
/// assert_eq!(jsonguard::core::path::render(&p), ".a[1].b");
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::Segment::from($segment)),*]
    };
}

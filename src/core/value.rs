// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Input classification and output conversion.
//!
//! Every primitive check and every mismatch message goes through
//! [`JsonType::of`], so the phrasing of `got ...` is the same
//! everywhere. Decoded values go back into JSON through [`IntoJson`]
//! when they become fields of a decoded object.

use indexmap::IndexMap;
use serde_json::{Number, Value};

/// Decoded object, in input key order.
pub type Object = serde_json::Map<String, Value>;

/// Closed classification of an untyped input.
///
/// `Undefined` stands for an absent value (a missing key, an index past
/// the end, or an explicit `None` run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Array,
    Object,
}

impl JsonType {
    /// Classify an input value.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => JsonType::Undefined,
            Some(Value::String(_)) => JsonType::String,
            Some(Value::Number(_)) => JsonType::Number,
            Some(Value::Bool(_)) => JsonType::Boolean,
            Some(Value::Null) => JsonType::Null,
            Some(Value::Array(_)) => JsonType::Array,
            Some(Value::Object(_)) => JsonType::Object,
        }
    }

    /// English phrase used after `got` in mismatch messages.
    pub fn describe(&self) -> &'static str {
        match self {
            JsonType::String => "a string",
            JsonType::Number => "a number",
            JsonType::Boolean => "a boolean",
            JsonType::Null => "null",
            JsonType::Undefined => "undefined",
            JsonType::Array => "an array",
            JsonType::Object => "an object",
        }
    }
}

/// Render a value for literal comparisons (`expected 42, got true`).
///
/// Integral floats print as integers, so `1.0` renders as `1`.
pub fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(value) => normalize_numbers(value).to_string(),
    }
}

fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => n.as_f64().map_or(Value::Null, number_to_json),
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(key, item)| (key.clone(), normalize_numbers(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Deep equality where numbers compare by numeric value.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, x)| y.get(key).is_some_and(|y| same_value(x, y)))
        }
        _ => a == b,
    }
}

/// Value returned by `t_unknown`: accepted without inspection.
///
/// The wrapper keeps the value opaque until the caller decides to look
/// inside with [`Unknown::into_inner`] or [`Unknown::as_value`]. `None`
/// is an undefined input.
#[derive(Debug, Clone, PartialEq)]
pub struct Unknown(pub Option<Value>);

impl Unknown {
    /// Borrow the underlying value, if defined.
    pub fn as_value(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    /// Take the underlying value, if defined.
    pub fn into_inner(self) -> Option<Value> {
        self.0
    }

    /// Whether the input was undefined.
    pub fn is_undefined(&self) -> bool {
        self.0.is_none()
    }
}

/// Conversion of a decoded value back into JSON.
///
/// `None` means undefined: a field whose decoder produced it is left out
/// of the decoded object.
pub trait IntoJson {
    /// Convert into JSON, or `None` for undefined.
    fn into_json(self) -> Option<Value>;
}

impl IntoJson for Value {
    fn into_json(self) -> Option<Value> {
        Some(self)
    }
}

impl IntoJson for Unknown {
    fn into_json(self) -> Option<Value> {
        self.0
    }
}

impl IntoJson for String {
    fn into_json(self) -> Option<Value> {
        Some(Value::String(self))
    }
}

impl IntoJson for bool {
    fn into_json(self) -> Option<Value> {
        Some(Value::Bool(self))
    }
}

impl IntoJson for f64 {
    fn into_json(self) -> Option<Value> {
        Some(number_to_json(self))
    }
}

impl IntoJson for i64 {
    fn into_json(self) -> Option<Value> {
        Some(Value::Number(self.into()))
    }
}

impl IntoJson for () {
    fn into_json(self) -> Option<Value> {
        Some(Value::Null)
    }
}

impl IntoJson for Object {
    fn into_json(self) -> Option<Value> {
        Some(Value::Object(self))
    }
}

impl<T: IntoJson> IntoJson for Option<T> {
    fn into_json(self) -> Option<Value> {
        self.and_then(IntoJson::into_json)
    }
}

impl<T: IntoJson> IntoJson for Vec<T> {
    fn into_json(self) -> Option<Value> {
        Some(Value::Array(
            self.into_iter()
                .map(|item| item.into_json().unwrap_or(Value::Null))
                .collect(),
        ))
    }
}

impl<T: IntoJson> IntoJson for IndexMap<String, T> {
    fn into_json(self) -> Option<Value> {
        Some(Value::Object(
            self.into_iter()
                .filter_map(|(key, item)| item.into_json().map(|item| (key, item)))
                .collect(),
        ))
    }
}

/// Integral numbers go back out as JSON integers; non-finite ones as null.
fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

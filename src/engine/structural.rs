// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Object, array, tuple and dictionary decoders.
//!
//! All of them stop at the first failing child, in declaration order
//! for objects and index order for arrays and tuples, and prefix the
//! child's failure with the segment they descended into.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::Decoder;
use crate::core::{Dialect, Fault, IntoJson, JsonType, Object, Segment};

/// Declared fields of an object, each with its own decoder.
///
/// ```
/// use jsonguard::{optional, t_number, t_object, t_string, Shape};
/// use serde_json::json;
///
/// let user = t_object(
///     Shape::new()
///         .field("id", t_number())
///         .field("name", optional(t_string())),
/// );
/// let decoded = user.run(&json!({"id": 1, "extra": true})).unwrap();
/// assert_eq!(serde_json::Value::Object(decoded), json!({"id": 1}));
/// ```
pub struct Shape<D> {
    fields: Vec<(String, Decoder<Option<Value>, D>)>,
}

impl<D> Clone for Shape<D> {
    fn clone(&self) -> Self {
        Shape {
            fields: self.fields.clone(),
        }
    }
}

impl<D: Dialect> Default for Shape<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> Shape<D> {
    /// Create a shape with no fields.
    pub fn new() -> Self {
        Shape { fields: Vec::new() }
    }

    /// Declare a field. Fields are checked in declaration order.
    pub fn field<T>(mut self, name: impl Into<String>, decoder: Decoder<T, D>) -> Self
    where
        T: IntoJson + 'static,
    {
        self.fields
            .push((name.into(), decoder.map(IntoJson::into_json)));
        self
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }

    fn decode_fields(&self, obj: &Object) -> Result<Object, Fault> {
        let mut decoded = Object::new();
        for (name, decoder) in &self.fields {
            let value = match obj.get(name) {
                Some(value) => decoder
                    .decode(Some(value))
                    .map_err(|fault| fault.within(&Segment::from(name.as_str())))?,
                None if decoder.accepts_missing() => decoder
                    .decode(None)
                    .map_err(|_| required(name))?,
                None => return Err(required(name)),
            };
            if let Some(value) = value {
                decoded.insert(name.clone(), value);
            }
        }
        Ok(decoded)
    }
}

fn required(name: &str) -> Fault {
    Fault::new(format!("the key '{name}' is required but was not present"))
}

fn expect_object(input: Option<&Value>) -> Result<&Object, Fault> {
    match input {
        Some(Value::Object(obj)) => Ok(obj),
        other => Err(Fault::expected("an object", JsonType::of(other).describe())),
    }
}

fn expect_array(input: Option<&Value>) -> Result<&Vec<Value>, Fault> {
    match input {
        Some(Value::Array(arr)) => Ok(arr),
        other => Err(Fault::expected("an array", JsonType::of(other).describe())),
    }
}

/// Accepts any object and returns it unchanged.
pub fn t_object_any<D: Dialect>() -> Decoder<Object, D> {
    Decoder::from_fn(|input| expect_object(input).cloned())
}

/// Accepts an object matching `shape`; undeclared keys are ignored and
/// left out of the result.
pub fn t_object<D: Dialect>(shape: Shape<D>) -> Decoder<Object, D> {
    Decoder::from_fn(move |input| shape.decode_fields(expect_object(input)?))
}

/// Accepts any object and returns it unchanged.
pub fn t_object_strict_any<D: Dialect>() -> Decoder<Object, D> {
    t_object_any()
}

/// Like [`t_object`], but also rejects keys the shape does not declare.
///
/// Declared fields are checked first; the first undeclared key in input
/// order is reported once they all pass.
pub fn t_object_strict<D: Dialect>(shape: Shape<D>) -> Decoder<Object, D> {
    Decoder::from_fn(move |input| {
        let obj = expect_object(input)?;
        let decoded = shape.decode_fields(obj)?;
        if let Some(extra) = obj.keys().find(|key| !shape.declares(key)) {
            return Err(Fault::new(format!(
                "an undefined key '{extra}' is present in the object"
            )));
        }
        Ok(decoded)
    })
}

/// Accepts any array and returns its elements unchecked.
pub fn t_array_any<D: Dialect>() -> Decoder<Vec<Value>, D> {
    Decoder::from_fn(|input| expect_array(input).cloned())
}

/// Accepts an array whose every element passes `item`.
pub fn t_array<T: 'static, D: Dialect>(item: Decoder<T, D>) -> Decoder<Vec<T>, D> {
    Decoder::from_fn(move |input| {
        expect_array(input)?
            .iter()
            .enumerate()
            .map(|(index, element)| {
                item.decode(Some(element))
                    .map_err(|fault| fault.within(&Segment::from(index)))
            })
            .collect()
    })
}

/// Accepts an array of exactly `decoders.len()` elements, each passing
/// the decoder at its position.
pub fn tuple<T: 'static, D: Dialect>(decoders: Vec<Decoder<T, D>>) -> Decoder<Vec<T>, D> {
    let decoders: Arc<[Decoder<T, D>]> = decoders.into();
    Decoder::from_fn(move |input| {
        let expected = format!("a tuple of length {}", decoders.len());
        let arr = match input {
            Some(Value::Array(arr)) => arr,
            other => return Err(Fault::expected(&expected, JsonType::of(other).describe())),
        };
        if arr.len() != decoders.len() {
            return Err(Fault::expected(
                &expected,
                &format!("one of length {}", arr.len()),
            ));
        }
        decoders
            .iter()
            .zip(arr)
            .enumerate()
            .map(|(index, (decoder, element))| {
                decoder
                    .decode(Some(element))
                    .map_err(|fault| fault.within(&Segment::from(index)))
            })
            .collect()
    })
}

/// Accepts an object whose every value passes `value`, keeping the keys
/// in input order.
pub fn t_dict<T: 'static, D: Dialect>(value: Decoder<T, D>) -> Decoder<IndexMap<String, T>, D> {
    Decoder::from_fn(move |input| {
        expect_object(input)?
            .iter()
            .map(|(key, element)| {
                value
                    .decode(Some(element))
                    .map(|decoded| (key.clone(), decoded))
                    .map_err(|fault| fault.within(&Segment::from(key.as_str())))
            })
            .collect()
    })
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoders built from other decoders.

use std::marker::PhantomData;

use serde_json::Value;

use super::{Decode, Decoder};
use crate::core::{Dialect, Fault, JsonType, Object, Segment};

const PATH_MISSING: &str = "path does not exist";

/// Accepts undefined as `None`; anything else must pass `decoder`.
///
/// An object field or a `value_at` path end with an optional decoder
/// may be absent.
pub fn optional<T: 'static, D: Dialect>(decoder: Decoder<T, D>) -> Decoder<Option<T>, D> {
    Decoder::from_fn_accepting_missing(move |input| match input {
        None => Ok(None),
        Some(_) => decoder.decode(input).map(Some),
    })
}

struct OneOf<T, D> {
    alternatives: Vec<Decoder<T, D>>,
}

impl<T: 'static, D: Dialect> Decode<T> for OneOf<T, D> {
    fn decode(&self, input: Option<&Value>) -> Result<T, Fault> {
        let mut faults = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.decode(input) {
                Ok(value) => return Ok(value),
                Err(fault) => faults.push(fault.render_alternative()),
            }
        }
        tracing::trace!(alternatives = faults.len(), "no alternative matched");
        Err(Fault::new(format!(
            "expected a value matching one of the {}, got the errors [{}]",
            D::KIND.plural_noun(),
            faults.join(", ")
        )))
    }

    fn accepts_missing(&self) -> bool {
        self.alternatives.iter().any(Decoder::accepts_missing)
    }
}

/// Tries each decoder in order on the same input; the first success wins.
///
/// When all fail, the failure is reported at the current path and lists
/// every alternative's failure, each re-rooted at `error`.
pub fn one_of<T: 'static, D: Dialect>(
    alternatives: impl IntoIterator<Item = Decoder<T, D>>,
) -> Decoder<T, D> {
    Decoder::new(OneOf {
        alternatives: alternatives.into_iter().collect(),
    })
}

/// [`one_of`] over two alternatives.
pub fn union<T: 'static, D: Dialect>(first: Decoder<T, D>, second: Decoder<T, D>) -> Decoder<T, D> {
    one_of([first, second])
}

/// Requires every decoder to accept the input, then merges their
/// objects left to right. On overlapping keys the later decoder wins.
pub fn intersection<D: Dialect>(
    decoders: impl IntoIterator<Item = Decoder<Object, D>>,
) -> Decoder<Object, D> {
    let decoders: Vec<_> = decoders.into_iter().collect();
    Decoder::from_fn(move |input| {
        let mut merged = Object::new();
        for decoder in &decoders {
            merged.extend(decoder.decode(input)?);
        }
        Ok(merged)
    })
}

/// Runs `decoder`, substituting `default` for any failure.
pub fn with_default<T, D>(default: T, decoder: Decoder<T, D>) -> Decoder<T, D>
where
    T: Clone + Send + Sync + 'static,
    D: Dialect,
{
    Decoder::from_fn_accepting_missing(move |input| {
        Ok(decoder.decode(input).unwrap_or_else(|_| default.clone()))
    })
}

struct ValueAt<T, D> {
    path: Vec<Segment>,
    decoder: Decoder<T, D>,
}

impl<T: 'static, D: Dialect> Decode<T> for ValueAt<T, D> {
    fn decode(&self, input: Option<&Value>) -> Result<T, Fault> {
        let mut current = input;
        for (depth, segment) in self.path.iter().enumerate() {
            let walked = &self.path[..=depth];
            let Some(value) = current else {
                return Err(Fault::new(PATH_MISSING).within_path(walked));
            };
            let container = match segment {
                Segment::Key(_) => ("an object", value.is_object()),
                Segment::Index(_) => ("an array", value.is_array()),
            };
            if let (expected, false) = container {
                let got = JsonType::of(Some(value)).describe();
                return Err(Fault::expected(expected, got).within_path(walked));
            }
            current = segment.lookup(value);
        }
        if current.is_none() && !self.path.is_empty() && !self.decoder.accepts_missing() {
            return Err(Fault::new(PATH_MISSING).within_path(&self.path));
        }
        self.decoder
            .decode(current)
            .map_err(|fault| fault.within_path(&self.path))
    }

    fn accepts_missing(&self) -> bool {
        self.path.is_empty() && self.decoder.accepts_missing()
    }
}

/// Walks `path` into the input and decodes what is found there.
///
/// A missing intermediate step always fails with `path does not exist`;
/// a missing last step fails the same way unless `decoder` accepts
/// missing values (e.g. [`optional`]).
pub fn value_at<T: 'static, D: Dialect>(
    path: impl IntoIterator<Item = Segment>,
    decoder: Decoder<T, D>,
) -> Decoder<T, D> {
    Decoder::new(ValueAt {
        path: path.into_iter().collect(),
        decoder,
    })
}

struct Lazy<F, D> {
    thunk: F,
    dialect: PhantomData<fn() -> D>,
}

impl<T: 'static, D: Dialect, F> Decode<T> for Lazy<F, D>
where
    F: Fn() -> Decoder<T, D> + Send + Sync,
{
    fn decode(&self, input: Option<&Value>) -> Result<T, Fault> {
        tracing::trace!("resolving deferred decoder");
        (self.thunk)().decode(input)
    }

    fn accepts_missing(&self) -> bool {
        (self.thunk)().accepts_missing()
    }
}

/// Defers building the decoder until it runs.
///
/// `thunk` is called on every run, never at construction, so a decoder
/// may refer to itself through it:
///
/// ```
/// use jsonguard::{lazy, t_array, t_object, t_string, Decoder, Object, Shape};
/// use serde_json::json;
///
/// fn comment() -> Decoder<Object> {
///     t_object(
///         Shape::new()
///             .field("msg", t_string())
///             .field("replies", lazy(|| t_array(comment()))),
///     )
/// }
///
/// let tree = json!({"msg": "hey", "replies": [{"msg": "hi", "replies": []}]});
/// assert!(comment().run(&tree).is_ok());
/// ```
pub fn lazy<T: 'static, D: Dialect, F>(thunk: F) -> Decoder<T, D>
where
    F: Fn() -> Decoder<T, D> + Send + Sync + 'static,
{
    Decoder::new(Lazy {
        thunk,
        dialect: PhantomData,
    })
}

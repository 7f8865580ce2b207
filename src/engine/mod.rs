// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The decoding engine shared by both public name-sets.
//!
//! A [`Decoder`] is an immutable, cheaply cloneable handle around a
//! [`Decode`] implementation. Constructors in [`primitive`],
//! [`structural`] and [`combinator`] build decoders; the instance
//! methods here run them and derive new ones.
//!
//! ## Architecture
//!
//! - **Core trait** ([`Decode`]) - one step from an optional input to a value or a [`Fault`]
//! - **Handle** ([`Decoder`]) - shares a trait object, tagged with a [`Dialect`]
//! - **Execution modes** - [`Decoder::run`], [`Decoder::run_promise`],
//!   [`Decoder::run_with_exception`] translate a [`Fault`] into a [`DecodeError`]

pub mod combinator;
pub mod primitive;
pub mod structural;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::Ready;
use serde_json::Value;

use crate::core::{result, DecodeError, Decoding, Dialect, Error, Fault, Result};

/// One decoding step.
///
/// `input` is `None` when the value is undefined. Implementations never
/// panic on unexpected input; they return a [`Fault`] relative to
/// themselves and leave path prefixing to their parents.
pub trait Decode<T>: Send + Sync {
    /// Decode `input`.
    fn decode(&self, input: Option<&Value>) -> std::result::Result<T, Fault>;

    /// Whether an absent field or path end may be decoded from `None`
    /// instead of being reported as missing.
    fn accepts_missing(&self) -> bool {
        false
    }
}

/// Decoder backed by a closure.
pub(crate) struct FromFn<F> {
    f: F,
    accepts_missing: bool,
}

impl<T, F> Decode<T> for FromFn<F>
where
    F: Fn(Option<&Value>) -> std::result::Result<T, Fault> + Send + Sync,
{
    fn decode(&self, input: Option<&Value>) -> std::result::Result<T, Fault> {
        (self.f)(input)
    }

    fn accepts_missing(&self) -> bool {
        self.accepts_missing
    }
}

/// Composable conversion from untyped JSON to `T`.
///
/// `D` selects the name-set failures are reported under; the
/// `decoder` and `validator` modules fix it.
pub struct Decoder<T, D = Decoding> {
    inner: Arc<dyn Decode<T>>,
    dialect: PhantomData<fn() -> D>,
}

impl<T, D> Clone for Decoder<T, D> {
    fn clone(&self) -> Self {
        Decoder {
            inner: Arc::clone(&self.inner),
            dialect: PhantomData,
        }
    }
}

impl<T, D: Dialect> fmt::Debug for Decoder<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("kind", &D::KIND)
            .field("accepts_missing", &self.inner.accepts_missing())
            .finish()
    }
}

impl<T: 'static, D: Dialect> Decoder<T, D> {
    /// Wrap a [`Decode`] implementation.
    pub fn new(inner: impl Decode<T> + 'static) -> Self {
        Decoder {
            inner: Arc::new(inner),
            dialect: PhantomData,
        }
    }

    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> std::result::Result<T, Fault> + Send + Sync + 'static,
    {
        Self::new(FromFn {
            f,
            accepts_missing: false,
        })
    }

    pub(crate) fn from_fn_accepting_missing<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> std::result::Result<T, Fault> + Send + Sync + 'static,
    {
        Self::new(FromFn {
            f,
            accepts_missing: true,
        })
    }

    /// Run one step without attaching the root marker.
    pub fn decode(&self, input: Option<&Value>) -> std::result::Result<T, Fault> {
        self.inner.decode(input)
    }

    /// Whether this decoder may be run on an absent value.
    pub fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }

    /// Run against `input`. Never panics; inspect the result.
    pub fn run(&self, input: &Value) -> Result<T> {
        self.run_opt(Some(input))
    }

    /// Run against a possibly undefined input.
    pub fn run_opt(&self, input: Option<&Value>) -> Result<T> {
        self.decode(input).map_err(|fault| {
            let err = fault.into_error(D::KIND.as_str(), input);
            tracing::debug!(
                kind = D::KIND.as_str(),
                at = %err.at,
                message = %err.message,
                "input rejected"
            );
            err
        })
    }

    /// Run, completing a future with the value or the [`DecodeError`].
    ///
    /// Decoding itself is synchronous; the returned future is already
    /// complete.
    pub fn run_promise(&self, input: &Value) -> Ready<Result<T>> {
        result::as_promise(self.run(input))
    }

    /// Run, returning the value.
    ///
    /// # Panics
    ///
    /// Panics with the [`DecodeError`] as payload when the input is
    /// rejected, so a `catch_unwind` site can downcast and inspect it.
    pub fn run_with_exception(&self, input: &Value) -> T {
        result::with_exception(self.run(input))
    }

    /// Parse JSON text and run against the parsed value.
    pub fn run_str(&self, text: &str) -> std::result::Result<T, Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.run(&value)?)
    }

    /// Transform the success value. Failures pass through untouched.
    pub fn map<U: 'static, F>(self, f: F) -> Decoder<U, D>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Decoder::new(Map { source: self, f })
    }

    /// Pick the next decoder from the success value and run it on the
    /// same input.
    pub fn and_then<U: 'static, F>(self, f: F) -> Decoder<U, D>
    where
        F: Fn(T) -> Decoder<U, D> + Send + Sync + 'static,
    {
        Decoder::new(AndThen { source: self, f })
    }

    /// Reject success values failing `predicate` with `message`, at the
    /// current path.
    pub fn refine<P>(self, predicate: P, message: impl Into<String>) -> Decoder<T, D>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Decoder::new(Refine {
            source: self,
            predicate,
            message: message.into(),
        })
    }
}

struct Map<T, D, F> {
    source: Decoder<T, D>,
    f: F,
}

impl<T: 'static, U, D: Dialect, F> Decode<U> for Map<T, D, F>
where
    F: Fn(T) -> U + Send + Sync,
{
    fn decode(&self, input: Option<&Value>) -> std::result::Result<U, Fault> {
        self.source.decode(input).map(&self.f)
    }

    fn accepts_missing(&self) -> bool {
        self.source.accepts_missing()
    }
}

struct AndThen<T, D, F> {
    source: Decoder<T, D>,
    f: F,
}

impl<T: 'static, U: 'static, D: Dialect, F> Decode<U> for AndThen<T, D, F>
where
    F: Fn(T) -> Decoder<U, D> + Send + Sync,
{
    fn decode(&self, input: Option<&Value>) -> std::result::Result<U, Fault> {
        let value = self.source.decode(input)?;
        (self.f)(value).decode(input)
    }

    fn accepts_missing(&self) -> bool {
        self.source.accepts_missing()
    }
}

struct Refine<T, D, P> {
    source: Decoder<T, D>,
    predicate: P,
    message: String,
}

impl<T: 'static, D: Dialect, P> Decode<T> for Refine<T, D, P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    fn decode(&self, input: Option<&Value>) -> std::result::Result<T, Fault> {
        let value = self.source.decode(input)?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err(Fault::new(self.message.clone()))
        }
    }

    fn accepts_missing(&self) -> bool {
        self.source.accepts_missing()
    }
}

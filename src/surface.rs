// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Generates one public name-set over the generic engine.
//!
//! Each generated function fixes the dialect and forwards to the engine;
//! no decoding logic lives here.

macro_rules! dialect_surface {
    (
        dialect = $dialect:ty,
        decoder = $decoder:ident,
        error = $error:ident,
        predicate = $predicate:ident $(,)?
    ) => {
        use indexmap::IndexMap;
        use serde_json::Value;

        use $crate::engine::{combinator, primitive, structural};

        pub use $crate::core::result;
        pub use $crate::core::{Object, Segment, Unknown};

        /// Decoder of this name-set.
        pub type $decoder<T> = $crate::engine::Decoder<T, $dialect>;

        /// Failure reported by this name-set.
        pub type $error = $crate::core::DecodeError;

        /// Object field declarations for this name-set.
        pub type Shape = structural::Shape<$dialect>;

        /// Whether `value` has the failure shape of this name-set.
        pub fn $predicate(value: &Value) -> bool {
            <$dialect as $crate::core::Dialect>::KIND.matches(value)
        }

        /// Accepts a string.
        pub fn t_string() -> $decoder<String> {
            primitive::t_string()
        }

        /// Accepts a number.
        pub fn t_number() -> $decoder<f64> {
            primitive::t_number()
        }

        /// Accepts a boolean.
        pub fn t_boolean() -> $decoder<bool> {
            primitive::t_boolean()
        }

        /// Accepts anything, unchecked; `None` when undefined.
        pub fn t_any() -> $decoder<Option<Value>> {
            primitive::t_any()
        }

        /// Accepts anything, as an opaque value.
        pub fn t_unknown() -> $decoder<Unknown> {
            primitive::t_unknown()
        }

        /// Accepts only values deep-equal to `expected`.
        pub fn constant(expected: impl Into<Value>) -> $decoder<Value> {
            primitive::constant(expected)
        }

        /// Always produces `value`.
        pub fn succeed<T>(value: T) -> $decoder<T>
        where
            T: Clone + Send + Sync + 'static,
        {
            primitive::succeed(value)
        }

        /// Always fails with `message`.
        pub fn fail<T: 'static>(message: impl Into<String>) -> $decoder<T> {
            primitive::fail(message)
        }

        /// Accepts an object matching `shape`.
        pub fn t_object(shape: Shape) -> $decoder<Object> {
            structural::t_object(shape)
        }

        /// Accepts any object, unchanged.
        pub fn t_object_any() -> $decoder<Object> {
            structural::t_object_any()
        }

        /// Accepts an object matching `shape` with no undeclared keys.
        pub fn t_object_strict(shape: Shape) -> $decoder<Object> {
            structural::t_object_strict(shape)
        }

        /// Accepts any object, unchanged.
        pub fn t_object_strict_any() -> $decoder<Object> {
            structural::t_object_strict_any()
        }

        /// Accepts an array of `item`s.
        pub fn t_array<T: 'static>(item: $decoder<T>) -> $decoder<Vec<T>> {
            structural::t_array(item)
        }

        /// Accepts any array, elements unchecked.
        pub fn t_array_any() -> $decoder<Vec<Value>> {
            structural::t_array_any()
        }

        /// Accepts a fixed-length array, one decoder per position.
        pub fn tuple<T: 'static>(decoders: Vec<$decoder<T>>) -> $decoder<Vec<T>> {
            structural::tuple(decoders)
        }

        /// Accepts an object of `value`s under arbitrary keys.
        pub fn t_dict<T: 'static>(value: $decoder<T>) -> $decoder<IndexMap<String, T>> {
            structural::t_dict(value)
        }

        /// Accepts undefined as `None`.
        pub fn optional<T: 'static>(decoder: $decoder<T>) -> $decoder<Option<T>> {
            combinator::optional(decoder)
        }

        /// First success among `alternatives`.
        pub fn one_of<T: 'static>(
            alternatives: impl IntoIterator<Item = $decoder<T>>,
        ) -> $decoder<T> {
            combinator::one_of(alternatives)
        }

        /// First success among two alternatives.
        pub fn union<T: 'static>(first: $decoder<T>, second: $decoder<T>) -> $decoder<T> {
            combinator::union(first, second)
        }

        /// Merge of every decoder's object; all must succeed.
        pub fn intersection(
            decoders: impl IntoIterator<Item = $decoder<Object>>,
        ) -> $decoder<Object> {
            combinator::intersection(decoders)
        }

        /// `decoder`, or `default` on any failure.
        pub fn with_default<T>(default: T, decoder: $decoder<T>) -> $decoder<T>
        where
            T: Clone + Send + Sync + 'static,
        {
            combinator::with_default(default, decoder)
        }

        /// Decodes the value found at `path`.
        pub fn value_at<T: 'static>(
            path: impl IntoIterator<Item = Segment>,
            decoder: $decoder<T>,
        ) -> $decoder<T> {
            combinator::value_at(path, decoder)
        }

        /// Builds the decoder on each run; enables recursive shapes.
        pub fn lazy<T: 'static, F>(thunk: F) -> $decoder<T>
        where
            F: Fn() -> $decoder<T> + Send + Sync + 'static,
        {
            combinator::lazy(thunk)
        }
    };
}

pub(crate) use dialect_surface;

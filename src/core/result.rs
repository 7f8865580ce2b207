// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Helpers over decoder outcomes.
//!
//! A run produces a plain [`std::result::Result`]; mapping over the
//! success value is `Result::map`. These cover the rest.

use futures::future::{ready, Ready};

/// Success value, or `default` when the outcome is a failure.
pub fn with_default<T, E>(default: T, result: Result<T, E>) -> T {
    result.unwrap_or(default)
}

/// Unwrapped values of every success, in order. Failures are dropped.
pub fn successes<T, E>(results: impl IntoIterator<Item = Result<T, E>>) -> Vec<T> {
    results.into_iter().filter_map(Result::ok).collect()
}

/// Combine two successes; the first failure wins.
pub fn map2<A, B, C, E>(
    f: impl FnOnce(A, B) -> C,
    a: Result<A, E>,
    b: Result<B, E>,
) -> Result<C, E> {
    Ok(f(a?, b?))
}

/// Completed future resolving to the outcome.
pub fn as_promise<T, E>(result: Result<T, E>) -> Ready<Result<T, E>> {
    ready(result)
}

/// Success value, or a panic carrying the failure itself as payload.
///
/// # Panics
///
/// Panics with `E` (retrievable through `downcast_ref::<E>()`) when the
/// outcome is a failure.
pub fn with_exception<T, E: Send + 'static>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => std::panic::panic_any(err),
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use jsonguard::core::DecodeError;
use serde_json::Value;

// ============================================================================
// Assertions
// ============================================================================

/// Assert that a run failed at `at` with exactly `message`.
pub fn assert_fails<T: std::fmt::Debug>(
    result: Result<T, DecodeError>,
    at: &str,
    message: &str,
) -> DecodeError {
    let err = result.expect_err("expected the input to be rejected");
    assert_eq!(err.at, at, "wrong failure path for '{}'", err.message);
    assert_eq!(err.message, message, "wrong failure message at '{}'", err.at);
    err
}

/// Assert that a run failed with exactly `message`, wherever it failed.
pub fn assert_fails_with<T: std::fmt::Debug>(result: Result<T, DecodeError>, message: &str) {
    let err = result.expect_err("expected the input to be rejected");
    assert_eq!(err.message, message);
}

// ============================================================================
// Fixtures
// ============================================================================

/// Unwrap a JSON object literal.
pub fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(obj) => obj,
        other => panic!("fixture is not an object: {other}"),
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The `decoder` name-set.
//!
//! Failures are tagged `"DecodeError"` and alternation messages speak
//! of "decoders".
//!
//! ## Example
//!
//! ```
//! use jsonguard::decoder::{t_number, t_object, t_string, Shape};
//! use serde_json::json;
//!
//! let point = t_object(Shape::new().field("x", t_number()).field("label", t_string()));
//!
//! let err = point.run(&json!({"x": 1, "label": 2})).unwrap_err();
//! assert_eq!(err.kind, "DecodeError");
//! assert_eq!(err.at, "input.label");
//! assert_eq!(err.message, "expected a string, got a number");
//! ```

crate::surface::dialect_surface! {
    dialect = crate::core::Decoding,
    decoder = Decoder,
    error = DecodeError,
    predicate = is_decoder_error,
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # jsonguard
//!
//! Composable decoders that turn untrusted JSON values into typed data,
//! reporting *where* and *why* an input was rejected.
//!
//! ## Architecture
//!
//! - `core/` - Failure model, input classification, paths, result helpers
//! - `engine/` - The generic [`engine::Decoder`] with primitive, structural
//!   and combinator constructors
//! - [`decoder`] / [`validator`] - Two public name-sets over the same engine,
//!   differing only in the failure tag and message vocabulary
//!
//! The crate root re-exports the [`decoder`] name-set.
//!
//! ## Example
//!
//! ```
//! use jsonguard::{one_of, path, t_array, t_number, t_string, value_at};
//! use serde_json::json;
//!
//! let lengths = t_array(one_of([t_string().map(|s| s.len() as f64), t_number()]));
//! assert_eq!(lengths.run(&json!(["hey", 10])).unwrap(), vec![3.0, 10.0]);
//!
//! let title = value_at(path!["data", 0, "title"], t_string());
//! let err = title.run(&json!({"data": [{"title": 7}]})).unwrap_err();
//! assert_eq!(err.at, "input.data[0].title");
//! assert_eq!(err.message, "expected a string, got a number");
//! ```

// Core types
pub mod core;

// Generic engine
pub mod engine;

// Public name-sets
mod surface;

pub mod decoder;
pub mod validator;

pub use crate::core::{Decoding, Dialect, Error, ErrorKind, IntoJson, JsonType, Validating};
pub use decoder::*;

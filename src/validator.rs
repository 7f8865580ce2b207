// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The `validator` name-set.
//!
//! Same engine and semantics as [`decoder`](crate::decoder); failures are
//! tagged `"ValidationError"` and alternation messages speak of
//! "validators".

crate::surface::dialect_surface! {
    dialect = crate::core::Validating,
    decoder = Validator,
    error = ValidationError,
    predicate = is_validator_error,
}

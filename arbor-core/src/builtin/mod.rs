/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types like `Vector2`, `GString` and `Variant`.
//!
//! # Background on the design of vector algebra types
//!
//! The basic vector algebra types like `Vector2` and `Vector3` are re-implemented here, with an
//! API similar to that in the Arbor engine itself. There are other approaches, but they all have
//! their disadvantages:
//!
//! - We could invoke API methods from the engine. The implementations could be generated, but it
//!   is slower and prevents inlining.
//!
//! - We could re-export types from an existing vector algebra crate, like `glam`. This removes the
//!   duplication, but it would create a strong dependency on a volatile API outside our control,
//!   and the API would not match Arbor's own, which would make porting from scripts harder.
//!   Instead, `glam` backs the implementations as an internal detail.

// Re-export macros.
pub use crate::real;

pub use crate::sys::VariantType;

#[doc(hidden)]
pub mod __prelude_reexport {
    use super::*;

    pub use callable::*;
    pub use color::*;
    pub use real_inner::*;
    pub use rect2::*;
    pub use string::{GString, StringName};
    pub use variant::*;
    pub use vectors::*;

    pub use super::VariantType;
    pub use crate::real;
}

pub use __prelude_reexport::*;

/// Math-related functions and traits like [`ApproxEq`][math::ApproxEq].
pub mod math;

mod callable;
mod color;
mod rect2;
mod string;
mod variant;
mod vectors;

// Rename imports because we re-export a subset of types under same module names.
#[path = "real.rs"]
mod real_inner;

#[cfg(all(test, feature = "serde"))]
pub(crate) mod test_utils {
    use serde::{Deserialize, Serialize};

    pub(crate) fn roundtrip<T>(value: &T, expected_json: &str)
    where
        T: for<'a> Deserialize<'a> + Serialize + PartialEq + std::fmt::Debug,
    {
        let json: String = serde_json::to_string(value).unwrap();
        let back: T = serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(back, *value, "serde round-trip changes value");
        assert_eq!(
            json, expected_json,
            "value does not conform to expected JSON"
        );
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use real_mod::*;

#[cfg(not(feature = "double-precision"))]
mod real_mod {
    /// Floating-point type used by vectors and other geometric builtins.
    ///
    /// Arbor hosts can be compiled with either 32-bit or 64-bit floats inside their
    /// geometric types. This alias follows the `double-precision` cargo feature, which
    /// must match the host build the extension is loaded into.
    #[allow(non_camel_case_types)]
    pub type real = f32;

    impl super::RealConv for real {
        #[inline]
        fn as_f32(self) -> f32 {
            self
        }

        #[inline]
        fn as_f64(self) -> f64 {
            self as f64
        }

        #[inline]
        fn from_f32(f: f32) -> Self {
            f
        }

        #[inline]
        fn from_f64(f: f64) -> Self {
            f as f32
        }
    }

    /// Mathematical constants for the [`real`] type; re-exports [`std::f32::consts`].
    pub mod real_consts {
        pub use std::f32::consts::*;
    }

    pub(crate) type RVec2 = glam::Vec2;
    pub(crate) type RVec3 = glam::Vec3;
}

#[cfg(feature = "double-precision")]
mod real_mod {
    /// Floating-point type used by vectors and other geometric builtins.
    ///
    /// Arbor hosts can be compiled with either 32-bit or 64-bit floats inside their
    /// geometric types. This alias follows the `double-precision` cargo feature, which
    /// must match the host build the extension is loaded into.
    #[allow(non_camel_case_types)]
    pub type real = f64;

    impl super::RealConv for real {
        #[inline]
        fn as_f32(self) -> f32 {
            self as f32
        }

        #[inline]
        fn as_f64(self) -> f64 {
            self
        }

        #[inline]
        fn from_f32(f: f32) -> Self {
            f as f64
        }

        #[inline]
        fn from_f64(f: f64) -> Self {
            f
        }
    }

    /// Mathematical constants for the [`real`] type; re-exports [`std::f64::consts`].
    pub mod real_consts {
        pub use std::f64::consts::*;
    }

    pub(crate) type RVec2 = glam::DVec2;
    pub(crate) type RVec3 = glam::DVec3;
}

/// Conversions between [`real`] and `f32`/`f64` that compile under both precision settings.
///
/// Code written against `real` cannot use `as` casts, since the target width depends on the
/// `double-precision` feature. Use this trait where an explicit width is required.
pub trait RealConv {
    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;
    fn from_f32(f: f32) -> Self;
    fn from_f64(f: f64) -> Self;
}

/// Coerces a float literal to the [`real`][type@real] type.
///
/// A plain literal like `1.5` is inferred as `f64` in many positions; this macro pins it
/// to whichever width `real` currently has.
#[macro_export]
macro_rules! real {
    ($f:literal) => {{
        let f: $crate::builtin::real = $f;
        f
    }};
}

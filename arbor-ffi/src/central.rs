/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Central tables that must stay in sync with the engine build: opaque byte sizes of the
//! engine-side value types, and the Rust-side mirror of the variant type ordinals.

/// Byte-size aliases for engine-side values stored opaquely on the Rust side.
///
/// The engine constructs and destroys these through AXI calls; Rust only reserves correctly
/// sized and aligned storage for them.
pub mod types {
    pub type OpaqueString = crate::opaque::Opaque<8usize>;
    pub type OpaqueStringName = crate::opaque::Opaque<8usize>;
    pub type OpaqueCallable = crate::opaque::Opaque<16usize>;

    // The variant payload holds the largest inline builtin, which grows with `real` in
    // double-precision builds.
    #[cfg(not(feature = "double-precision"))]
    pub type OpaqueVariant = crate::opaque::Opaque<24usize>;
    #[cfg(feature = "double-precision")]
    pub type OpaqueVariant = crate::opaque::Opaque<32usize>;
}

/// Rust-side mirror of the `AXI_VARIANT_TYPE_*` ordinals.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(i32)]
pub enum VariantType {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Vector2 = 5,
    Vector2i = 6,
    Rect2 = 7,
    Vector3 = 8,
    Color = 9,
    StringName = 10,
    Object = 11,
    Callable = 12,
}

impl VariantType {
    #[doc(hidden)]
    pub fn from_sys(enumerator: crate::AxiVariantType) -> Self {
        match enumerator {
            0 => Self::Nil,
            1 => Self::Bool,
            2 => Self::Int,
            3 => Self::Float,
            4 => Self::String,
            5 => Self::Vector2,
            6 => Self::Vector2i,
            7 => Self::Rect2,
            8 => Self::Vector3,
            9 => Self::Color,
            10 => Self::StringName,
            11 => Self::Object,
            12 => Self::Callable,
            _ => unreachable!("invalid variant type {}", enumerator),
        }
    }

    #[doc(hidden)]
    pub fn sys(self) -> crate::AxiVariantType {
        self as i32 as crate::AxiVariantType
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use arbor_ffi as sys;
use sys::{ffi_methods, ArborFfi};

use crate::builtin::math::{GlamConv, GlamType, IVec2};
use crate::builtin::{real, Vector2};

/// Vector used for 2D math using integer coordinates.
///
/// 2-element structure that can be used to represent discrete positions or extents in 2D space,
/// as well as any other pair of numeric values.
///
/// It uses integer coordinates and is therefore preferable to [`Vector2`] when exact precision is
/// required. Note that the values are limited to 32 bits, and unlike [`Vector2`] this cannot be
/// configured with a host build option. Use `i64` if 64-bit values are needed.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2i {
    /// The vector's X component.
    pub x: i32,

    /// The vector's Y component.
    pub y: i32,
}

impl Vector2i {
    /// Vector with all components set to `0`.
    pub const ZERO: Self = Self::splat(0);

    /// Vector with all components set to `1`.
    pub const ONE: Self = Self::splat(1);

    /// Unit vector in -X direction (left in 2D coordinate system).
    pub const LEFT: Self = Self::new(-1, 0);

    /// Unit vector in +X direction (right in 2D coordinate system).
    pub const RIGHT: Self = Self::new(1, 0);

    /// Unit vector in -Y direction (up in 2D coordinate system).
    pub const UP: Self = Self::new(0, -1);

    /// Unit vector in +Y direction (down in 2D coordinate system).
    pub const DOWN: Self = Self::new(0, 1);

    /// Constructs a new `Vector2i` from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Constructs a new `Vector2i` with both components set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// Constructs a new `Vector2i` from a [`Vector2`]. The floating point coordinates will be
    /// truncated.
    pub const fn from_vector2(v: Vector2) -> Self {
        Self {
            x: v.x as i32,
            y: v.y as i32,
        }
    }

    /// Converts the corresponding `glam` type to `Self`.
    fn from_glam(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Converts `self` to the corresponding `glam` type.
    fn to_glam(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Returns the length (magnitude) of this vector.
    pub fn length(self) -> real {
        let length_sq = self.length_squared();
        (length_sq as real).sqrt()
    }

    /// Returns the squared length of this vector. Prefer this over `length()` when comparing
    /// lengths, since it avoids the square root.
    pub fn length_squared(self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }
}

/// Formats the vector like Arbor: `(x, y)`.
impl fmt::Display for Vector2i {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl_common_vector_fns!(Vector2i, i32);
impl_vector_operators!(Vector2i, i32, (x, y));

// SAFETY:
// This type is represented as `Self` in Arbor, so `*mut Self` is sound.
unsafe impl ArborFfi for Vector2i {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector2i
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
}

crate::meta::impl_arbor_as_self!(Vector2i);

impl GlamConv for Vector2i {
    type Glam = IVec2;
}

impl GlamType for IVec2 {
    type Mapped = Vector2i;

    fn to_front(&self) -> Self::Mapped {
        Vector2i::new(self.x, self.y)
    }

    fn from_front(mapped: &Self::Mapped) -> Self {
        IVec2::new(mapped.x, mapped.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coord_min_max() {
        let a = Vector2i::new(1, 3);
        let b = Vector2i::new(0, 5);

        assert_eq!(a.coord_min(b), Vector2i::new(0, 3));
        assert_eq!(a.coord_max(b), Vector2i::new(1, 5));
    }

    #[test]
    fn length_does_not_overflow_i32() {
        let v = Vector2i::new(i32::MAX, i32::MAX);
        assert!(v.length_squared() > 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let vector = Vector2i::default();
        let expected_json = "{\"x\":0,\"y\":0}";

        crate::builtin::test_utils::roundtrip(&vector, expected_json);
    }
}

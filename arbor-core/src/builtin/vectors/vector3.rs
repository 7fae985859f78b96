/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use arbor_ffi as sys;
use sys::{ffi_methods, ArborFfi};

use crate::builtin::math::{ApproxEq, FloatExt, GlamConv, GlamType};
use crate::builtin::{real, RVec3};

/// Vector used for 3D math using floating point coordinates.
///
/// 3-element structure that can be used to represent positions in 3D space or any other triple of
/// numeric values.
///
/// It uses floating-point coordinates of 32-bit precision, unlike the engine's `float` type which
/// is always 64-bit. Arbor hosts can be compiled with the option `precision=double` to use 64-bit
/// vectors; use the library with the `double-precision` feature in that case.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// The vector's X component.
    pub x: real,

    /// The vector's Y component.
    pub y: real,

    /// The vector's Z component.
    pub z: real,
}

impl Vector3 {
    /// Vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);

    /// Vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);

    /// Unit vector in -X direction.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Unit vector in +X direction.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector in +Y direction.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector in -Y direction.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Unit vector in -Z direction (facing forward).
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);

    /// Unit vector in +Z direction (facing backward).
    pub const BACK: Self = Self::new(0.0, 0.0, 1.0);

    /// Constructs a new `Vector3` from the given `x`, `y` and `z`.
    pub const fn new(x: real, y: real, z: real) -> Self {
        Self { x, y, z }
    }

    /// Constructs a new `Vector3` with all components set to `v`.
    pub const fn splat(v: real) -> Self {
        Self::new(v, v, v)
    }

    /// Converts the corresponding `glam` type to `Self`.
    fn from_glam(v: RVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Converts `self` to the corresponding `glam` type.
    fn to_glam(self) -> RVec3 {
        RVec3::new(self.x, self.y, self.z)
    }

    /// Returns the cross product of this vector and `with`.
    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }

    /// Returns the normalized vector pointing from this vector to `to`.
    pub fn direction_to(self, to: Self) -> Self {
        (to - self).normalized()
    }

    /// Returns the squared distance from `self` to `to`. Prefer this over `distance_to` when
    /// comparing distances.
    pub fn distance_squared_to(self, to: Self) -> real {
        (to - self).length_squared()
    }

    /// Returns the distance from `self` to `to`.
    pub fn distance_to(self, to: Self) -> real {
        (to - self).length()
    }

    /// Returns the dot product of this vector and `with`.
    pub fn dot(self, with: Self) -> real {
        self.to_glam().dot(with.to_glam())
    }

    /// Returns `true` if all components are approximately zero.
    pub fn is_zero_approx(self) -> bool {
        self.x.is_zero_approx() && self.y.is_zero_approx() && self.z.is_zero_approx()
    }

    /// Returns a vector with each component snapped to `-1.0`, `0.0` or `1.0`, depending on its
    /// sign. NaN components are kept.
    pub fn sign(self) -> Self {
        Self::new(self.x.sign(), self.y.sign(), self.z.sign())
    }
}

/// Formats the vector like Arbor: `(x, y, z)`.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl_common_vector_fns!(Vector3, real);
impl_float_vector_glam_fns!(Vector3, real);
impl_float_vector_component_fns!(Vector3, real, (x, y, z));
impl_vector_operators!(Vector3, real, (x, y, z));

// SAFETY:
// This type is represented as `Self` in Arbor, so `*mut Self` is sound.
unsafe impl ArborFfi for Vector3 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector3
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
}

crate::meta::impl_arbor_as_self!(Vector3);

impl GlamConv for Vector3 {
    type Glam = RVec3;
}

impl GlamType for RVec3 {
    type Mapped = Vector3;

    fn to_front(&self) -> Self::Mapped {
        Vector3::new(self.x, self.y, self.z)
    }

    fn from_front(mapped: &Self::Mapped) -> Self {
        RVec3::new(mapped.x, mapped.y, mapped.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_eq_approx;

    #[test]
    fn cross_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-3.0, 0.0, 4.0);

        assert_eq_approx!(a.cross(b), Vector3::new(8.0, -13.0, 6.0));
        assert_eq_approx!(b.cross(a), Vector3::new(-8.0, 13.0, -6.0));

        assert_eq_approx!(Vector3::UP.cross(Vector3::BACK), Vector3::RIGHT);
    }

    #[test]
    fn dot_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);

        assert_eq_approx!(a.dot(b), 12.0);
        assert_eq_approx!(Vector3::UP.dot(Vector3::RIGHT), 0.0);
    }

    #[test]
    fn coord_min_max() {
        let a = Vector3::new(1.2, 3.4, 5.6);
        let b = Vector3::new(0.1, 5.6, 2.3);

        assert_eq_approx!(a.coord_min(b), Vector3::new(0.1, 3.4, 2.3));
        assert_eq_approx!(a.coord_max(b), Vector3::new(1.2, 5.6, 5.6));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let vector = Vector3::default();
        let expected_json = "{\"x\":0.0,\"y\":0.0,\"z\":0.0}";

        crate::builtin::test_utils::roundtrip(&vector, expected_json);
    }
}

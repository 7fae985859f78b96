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
use crate::builtin::{real, RVec2, Vector2i};

/// Vector used for 2D math using floating point coordinates.
///
/// 2-element structure that can be used to represent positions in 2D space or any other pair of
/// numeric values.
///
/// It uses floating-point coordinates of 32-bit precision, unlike the engine's `float` type which
/// is always 64-bit. Arbor hosts can be compiled with the option `precision=double` to use 64-bit
/// vectors; use the library with the `double-precision` feature in that case.
///
/// See [`Vector2i`] for its integer counterpart.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// The vector's X component.
    pub x: real,

    /// The vector's Y component.
    pub y: real,
}

impl Vector2 {
    /// Vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);

    /// Vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);

    /// Unit vector in -X direction (left in 2D coordinate system).
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// Unit vector in +X direction (right in 2D coordinate system).
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Unit vector in -Y direction (up in 2D coordinate system).
    pub const UP: Self = Self::new(0.0, -1.0);

    /// Unit vector in +Y direction (down in 2D coordinate system).
    pub const DOWN: Self = Self::new(0.0, 1.0);

    /// Constructs a new `Vector2` from the given `x` and `y`.
    pub const fn new(x: real, y: real) -> Self {
        Self { x, y }
    }

    /// Constructs a new `Vector2` with both components set to `v`.
    pub const fn splat(v: real) -> Self {
        Self::new(v, v)
    }

    /// Constructs a new `Vector2` from a [`Vector2i`].
    pub const fn from_vector2i(v: Vector2i) -> Self {
        Self {
            x: v.x as real,
            y: v.y as real,
        }
    }

    /// Converts the corresponding `glam` type to `Self`.
    fn from_glam(v: RVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Converts `self` to the corresponding `glam` type.
    fn to_glam(self) -> RVec2 {
        RVec2::new(self.x, self.y)
    }

    /// Returns this vector's angle with respect to the positive X axis, in radians.
    ///
    /// Equivalent to the result of `y.atan2(x)`.
    pub fn angle(self) -> real {
        self.y.atan2(self.x)
    }

    /// Creates a unit vector rotated to the given `angle` in radians. This is equivalent to
    /// `Vector2::new(angle.cos(), angle.sin())` or `Vector2::RIGHT.rotated(angle)`.
    pub fn from_angle(angle: real) -> Self {
        Self::from_glam(RVec2::from_angle(angle))
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

    /// Returns the dot product of this vector and `other`.
    pub fn dot(self, other: Self) -> real {
        self.to_glam().dot(other.to_glam())
    }

    /// Returns `true` if all components are approximately zero.
    pub fn is_zero_approx(self) -> bool {
        self.x.is_zero_approx() && self.y.is_zero_approx()
    }

    /// Moves toward `to` by the fixed `delta` amount. Will not go past the final value.
    pub fn move_toward(self, to: Self, delta: real) -> Self {
        let vd = to - self;
        let len = vd.length();
        if len <= delta || len < real::CMP_EPSILON {
            to
        } else {
            self + vd / len * delta
        }
    }

    /// Returns a perpendicular vector rotated 90 degrees counter-clockwise compared to the
    /// original, with the same length.
    pub fn orthogonal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns a vector with each component snapped to `-1.0`, `0.0` or `1.0`, depending on its
    /// sign. NaN components are kept.
    pub fn sign(self) -> Self {
        Self::new(self.x.sign(), self.y.sign())
    }
}

/// Formats the vector like Arbor: `(x, y)`.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl_common_vector_fns!(Vector2, real);
impl_float_vector_glam_fns!(Vector2, real);
impl_float_vector_component_fns!(Vector2, real, (x, y));
impl_vector_operators!(Vector2, real, (x, y));

// SAFETY:
// This type is represented as `Self` in Arbor, so `*mut Self` is sound.
unsafe impl ArborFfi for Vector2 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector2
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
}

crate::meta::impl_arbor_as_self!(Vector2);

impl GlamConv for Vector2 {
    type Glam = RVec2;
}

impl GlamType for RVec2 {
    type Mapped = Vector2;

    fn to_front(&self) -> Self::Mapped {
        Vector2::new(self.x, self.y)
    }

    fn from_front(mapped: &Self::Mapped) -> Self {
        RVec2::new(mapped.x, mapped.y)
    }
}

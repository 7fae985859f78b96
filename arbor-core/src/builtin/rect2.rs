/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arbor_ffi as sys;
use sys::{ffi_methods, ArborFfi};

use crate::builtin::math::ApproxEq;
use crate::builtin::{real, Vector2};

/// 2D axis-aligned bounding box.
///
/// `Rect2` consists of a position, a size, and several utility functions. It is typically used for
/// fast overlap tests.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    /// Creates a new `Rect2` from a position and a size.
    #[inline]
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    /// Creates a new `Rect2` from four reals representing position `(x, y)` and size
    /// `(width, height)`.
    #[inline]
    pub const fn from_components(x: real, y: real, width: real, height: real) -> Self {
        Self {
            position: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Creates a new `Rect2` with the first corner at `position` and the opposite corner at
    /// `end`.
    #[inline]
    pub fn from_corners(position: Vector2, end: Vector2) -> Self {
        Self {
            position,
            size: end - position,
        }
    }

    /// The end of the `Rect2` calculated as `position + size`.
    #[inline]
    pub fn end(self) -> Vector2 {
        self.position + self.size
    }

    /// Sets the size based on the desired end-point.
    #[inline]
    pub fn set_end(&mut self, end: Vector2) {
        self.size = end - self.position
    }

    /// Returns the center of the `Rect2`, which is equal to `position + (size / 2)`.
    #[inline]
    pub fn center(self) -> Vector2 {
        self.position + (self.size / 2.0)
    }

    /// Returns `true` if the `Rect2` contains a point. By convention, the right and bottom edges
    /// of the `Rect2` are considered exclusive, so points on these edges are not included.
    #[inline]
    pub fn has_point(self, point: Vector2) -> bool {
        let end = self.end();

        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < end.x
            && point.y < end.y
    }

    /// Returns `true` if the two `Rect2`s are approximately equal, by calling `is_equal_approx`
    /// on `position` and `size`.
    #[inline]
    pub fn is_equal_approx(&self, other: &Self) -> bool {
        self.position.is_equal_approx(other.position) && self.size.is_equal_approx(other.size)
    }
}

impl ApproxEq for Rect2 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.is_equal_approx(other)
    }
}

// SAFETY:
// This type is represented as `Self` in Arbor, so `*mut Self` is sound.
unsafe impl ArborFfi for Rect2 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Rect2
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
}

crate::meta::impl_arbor_as_self!(Rect2);

impl std::fmt::Display for Rect2 {
    /// Formats `Rect2` to match the host's string representation.
    ///
    /// Example:
    /// ```
    /// use arbor::prelude::*;
    /// let rect = Rect2::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    /// assert_eq!(format!("{}", rect), "[P: (0, 0), S: (1, 1)]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[P: {}, S: {}]", self.position, self.size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_containment() {
        let rect = Rect2::from_components(1.0, 1.0, 4.0, 2.0);

        assert!(rect.has_point(Vector2::new(1.0, 1.0)));
        assert!(rect.has_point(Vector2::new(3.0, 2.0)));

        // End edges are exclusive.
        assert!(!rect.has_point(rect.end()));
        assert!(!rect.has_point(Vector2::new(5.0, 1.5)));
        assert!(!rect.has_point(Vector2::new(0.5, 1.5)));
    }

    #[test]
    fn corners_and_center() {
        let rect = Rect2::from_corners(Vector2::new(1.0, 2.0), Vector2::new(5.0, 6.0));

        assert_eq!(rect.size, Vector2::new(4.0, 4.0));
        assert_eq!(rect.center(), Vector2::new(3.0, 4.0));

        let mut moved = rect;
        moved.set_end(Vector2::new(3.0, 4.0));
        assert_eq!(moved.size, Vector2::new(2.0, 2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let rect = Rect2::default();
        let expected_json = "{\"position\":{\"x\":0.0,\"y\":0.0},\"size\":{\"x\":0.0,\"y\":0.0}}";

        crate::builtin::test_utils::roundtrip(&rect, expected_json);
    }
}

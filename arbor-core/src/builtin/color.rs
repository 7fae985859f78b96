/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arbor_ffi as sys;
use sys::{ffi_methods, ArborFfi};

use crate::builtin::math::{ApproxEq, FloatExt};

/// Color built-in type, in floating-point RGBA format.
///
/// Channel values are _typically_ in the range of 0 to 1, but this is not a requirement, and
/// values outside this range are explicitly allowed for e.g. High Dynamic Range (HDR).
#[repr(C)]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The color's red component.
    pub r: f32,

    /// The color's green component.
    pub g: f32,

    /// The color's blue component.
    pub b: f32,

    /// The color's alpha component. A value of 0 means that the color is fully transparent. A
    /// value of 1 means that the color is fully opaque.
    pub a: f32,
}

impl Color {
    /// White color. This is the neutral modulate value for canvas items.
    pub const WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);

    /// Black color. This is the [default](Color::default) value.
    pub const BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 1.0);

    pub const RED: Color = Color::from_rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::from_rgba(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::from_rgba(0.0, 0.0, 1.0, 1.0);

    /// Transparent black.
    pub const TRANSPARENT_BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);

    /// Constructs a new `Color` with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a new `Color` with the given color components, and the alpha channel set to 1.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Constructs a new `Color` with the given components as bytes. 0 is mapped to 0.0, 255 is
    /// mapped to 1.0.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(from_u8(r), from_u8(g), from_u8(b), from_u8(a))
    }

    /// Returns a copy of this color with the given alpha channel.
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Returns the linear interpolation with `to` by the factor `weight`, channel-wise.
    ///
    /// `weight` should be in the range of 0 to 1, but values outside this range are allowed and
    /// extrapolate the color.
    pub fn lerp(self, to: Color, weight: f32) -> Self {
        Self::from_rgba(
            self.r.lerp(to.r, weight),
            self.g.lerp(to.g, weight),
            self.b.lerp(to.b, weight),
            self.a.lerp(to.a, weight),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl ApproxEq for Color {
    fn approx_eq(&self, other: &Self) -> bool {
        self.r.approx_eq(&other.r)
            && self.g.approx_eq(&other.g)
            && self.b.approx_eq(&other.b)
            && self.a.approx_eq(&other.a)
    }
}

// SAFETY:
// This type is represented as `Self` in Arbor, so `*mut Self` is sound.
unsafe impl ArborFfi for Color {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Color
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
}

crate::meta::impl_arbor_as_self!(Color);

impl std::fmt::Display for Color {
    /// Formats `Color` to match the host's string representation.
    ///
    /// # Example
    /// ```
    /// use arbor::prelude::*;
    /// let color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);
    /// assert_eq!(format!("{}", color), "(1, 1, 1, 1)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn from_u8(byte: u8) -> f32 {
    byte as f32 / 255.0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_eq_approx;

    #[test]
    fn from_rgba8_endpoints() {
        assert_eq!(Color::from_rgba8(255, 255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgba8(0, 0, 0, 0), Color::TRANSPARENT_BLACK);
    }

    #[test]
    fn lerp_channels() {
        let mix = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq_approx!(mix, Color::from_rgba(0.5, 0.5, 0.5, 1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let color = Color::WHITE;
        let expected_json = "{\"r\":1.0,\"g\":1.0,\"b\":1.0,\"a\":1.0}";

        crate::builtin::test_utils::roundtrip(&color, expected_json);
    }
}

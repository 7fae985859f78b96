/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{real, RealConv, Vector2};

use super::ApproxEq;

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

pub trait FloatExt: private::Sealed + Copy {
    const CMP_EPSILON: Self;

    /// Linearly interpolates from `self` to `to` by `weight`.
    ///
    /// `weight` should be in the range `0.0 ..= 1.0`, but values outside this are allowed and will perform
    /// linear extrapolation.
    fn lerp(self, to: Self, weight: Self) -> Self;

    /// Check if two angles are approximately equal, by comparing the distance
    /// between the points on the unit circle with 0.
    fn is_angle_equal_approx(self, other: Self) -> bool;

    /// Check if `self` is within [`Self::CMP_EPSILON`] of `0.0`.
    fn is_zero_approx(self) -> bool;

    /// Arbor's `sign` function, returns `0.0` when self is `0.0`.
    ///
    /// See also [`signum`](f32::signum), which always returns `-1.0` or `1.0` (or `NaN`).
    fn sign(self) -> Self;
}

macro_rules! impl_float_ext {
    ($Ty:ty, $to_real:ident) => {
        impl FloatExt for $Ty {
            const CMP_EPSILON: Self = 0.00001;

            fn lerp(self, to: Self, t: Self) -> Self {
                self + ((to - self) * t)
            }

            fn is_angle_equal_approx(self, other: Self) -> bool {
                let (x1, y1) = self.sin_cos();
                let (x2, y2) = other.sin_cos();

                let point_1 = Vector2::new(real::$to_real(x1), real::$to_real(y1));
                let point_2 = Vector2::new(real::$to_real(x2), real::$to_real(y2));

                point_1.distance_to(point_2).is_zero_approx()
            }

            fn is_zero_approx(self) -> bool {
                self.abs() < Self::CMP_EPSILON
            }

            fn sign(self) -> Self {
                use std::cmp::Ordering;

                match self.partial_cmp(&0.0) {
                    Some(Ordering::Equal) => 0.0,
                    Some(Ordering::Greater) => 1.0,
                    Some(Ordering::Less) => -1.0,
                    // `self` is `NaN`
                    None => Self::NAN,
                }
            }
        }

        impl ApproxEq for $Ty {
            fn approx_eq(&self, other: &Self) -> bool {
                if self == other {
                    return true;
                }
                let mut tolerance = Self::CMP_EPSILON * self.abs();
                if tolerance < Self::CMP_EPSILON {
                    tolerance = Self::CMP_EPSILON;
                }
                (self - other).abs() < tolerance
            }
        }
    };
}

impl_float_ext!(f32, from_f32);
impl_float_ext!(f64, from_f64);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_eq_approx, assert_ne_approx};

    // Create functions that take references for use in `assert_eq/ne_approx`.
    fn is_angle_equal_approx_f32(a: &f32, b: &f32) -> bool {
        a.is_angle_equal_approx(*b)
    }

    fn is_angle_equal_approx_f64(a: &f64, b: &f64) -> bool {
        a.is_angle_equal_approx(*b)
    }

    #[test]
    fn angle_equal_approx_f32() {
        use std::f32::consts::{PI, TAU};

        assert_eq_approx!(1.0_f32, 1.000001, fn = is_angle_equal_approx_f32);
        assert_eq_approx!(0.0_f32, TAU, fn = is_angle_equal_approx_f32);
        assert_eq_approx!(PI, -PI, fn = is_angle_equal_approx_f32);
        assert_eq_approx!(4.45783, -(TAU - 4.45783), fn = is_angle_equal_approx_f32);
        assert_ne_approx!(1.0_f32, 2.0, fn = is_angle_equal_approx_f32);
    }

    #[test]
    fn angle_equal_approx_f64() {
        use std::f64::consts::{PI, TAU};

        assert_eq_approx!(1.0_f64, 1.000001, fn = is_angle_equal_approx_f64);
        assert_eq_approx!(0.0_f64, TAU, fn = is_angle_equal_approx_f64);
        assert_eq_approx!(PI, -PI, fn = is_angle_equal_approx_f64);
        assert_ne_approx!(1.0_f64, 2.0, fn = is_angle_equal_approx_f64);
    }

    #[test]
    fn lerp_and_sign() {
        assert_eq!(0.5_f64.lerp(1.5, 0.5), 1.0);
        assert_eq!((-3.0_f32).sign(), -1.0);
        assert_eq!(0.0_f32.sign(), 0.0);
        assert!(0.000001_f32.is_zero_approx());
        assert!(!0.1_f32.is_zero_approx());
    }
}

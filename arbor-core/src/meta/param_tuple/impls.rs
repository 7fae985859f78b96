/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::Variant;
use crate::meta::{
    ArborConvert, ArborType, ArborFfiVariant, FromArbor, InParamTuple, OutParamTuple, ParamTuple,
    ToArbor,
};
use crate::sys;

macro_rules! count_idents {
    () => { 0 };
    ($id:ident $($rest:ident)*) => { 1 + count_idents!($($rest)*)};
}

macro_rules! impl_param_tuple {
    ($(($p:ident, $n:tt): $P:ident),*) => {
        impl<$($P),*> ParamTuple for ($($P,)*) where $($P: ArborConvert + fmt::Debug),* {
            const LEN: usize = count_idents!($($P)*);

            fn format_args(&self) -> String {
                format!(
                    // This repeat expression is basically just `"{$n:?}"`, the rest is only needed so that
                    // the repetition separator can be `", "` instead of `,`.
                    concat!("" $(, "{", $n, ":?}",)", "*),
                    $(self.$n),*
                )
            }
        }

        impl<$($P),*> InParamTuple for ($($P,)*) where $($P: FromArbor + fmt::Debug),* {
            fn from_variant_array(array: &[&Variant]) -> Self {
                assert_array_length::<Self>(array);
                let mut iter = array.iter();
                (
                    $(
                        {
                            let variant = iter.next().unwrap_or_else(
                                || panic!("ParamTuple: {} access out-of-bounds (len {})", stringify!($p), array.len()));

                            param_from_variant::<$P>(variant, stringify!($p))
                        },
                    )*
                )
            }
        }

        impl<$($P),*> OutParamTuple for ($($P,)*) where $($P: ToArbor + fmt::Debug),* {
            fn with_variants<F, R>(self, f: F) -> R
            where
                F: FnOnce(&[Variant]) -> R,
            {
                let ffi_args = (
                    $(
                        ArborType::into_ffi(ToArbor::to_arbor(&self.$n)),
                    )*
                );

                let variant_args = [
                    $(
                        ArborFfiVariant::ffi_to_variant(&ffi_args.$n),
                    )*
                ];

                f(&variant_args)
            }

            fn with_type_pointers<F, R>(self, f: F) -> R
            where
                F: FnOnce(&[sys::AxiConstTypePtr]) -> R,
            {
                // The ffi tuple owns the converted values; it must stay alive while `f` runs.
                let ffi_args = (
                    $(
                        ArborType::into_ffi(ToArbor::to_arbor(&self.$n)),
                    )*
                );

                let ptr_args = [
                    $(
                        sys::ArborFfi::as_arg_ptr(&ffi_args.$n),
                    )*
                ];

                f(&ptr_args)
            }

            fn to_variant_array(&self) -> Vec<Variant> {
                let ($($p,)*) = self;

                vec![
                    $( $p.to_variant(), )*
                ]
            }
        }
    };
}

#[allow(unused_variables, unused_mut, clippy::unused_unit)]
mod unit_impl {
    use super::*;
    impl_param_tuple!();
}
impl_param_tuple!((p0, 0): P0);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3, (p4, 4): P4);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3, (p4, 4): P4, (p5, 5): P5);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3, (p4, 4): P4, (p5, 5): P5, (p6, 6): P6);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3, (p4, 4): P4, (p5, 5): P5, (p6, 6): P6, (p7, 7): P7);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3, (p4, 4): P4, (p5, 5): P5, (p6, 6): P6, (p7, 7): P7, (p8, 8): P8);
impl_param_tuple!((p0, 0): P0, (p1, 1): P1, (p2, 2): P2, (p3, 3): P3, (p4, 4): P4, (p5, 5): P5, (p6, 6): P6, (p7, 7): P7, (p8, 8): P8, (p9, 9): P9);

/// Converts `variant` into a value of type `P`, panicking with context on failure.
fn param_from_variant<P: FromArbor>(variant: &Variant, param_name: &str) -> P {
    P::try_from_variant(variant).unwrap_or_else(|err| {
        panic!("ParamTuple: failed to convert parameter {param_name}: {err}")
    })
}

fn assert_array_length<P: ParamTuple>(array: &[&Variant]) {
    assert_eq!(
        array.len(),
        P::LEN,
        "array {array:?} has wrong length, expected {} got {}",
        P::LEN,
        array.len()
    );
}

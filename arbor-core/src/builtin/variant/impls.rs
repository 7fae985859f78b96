/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arbor_ffi as sys;
use sys::{ArborFfi, VariantType};

use super::Variant;
use crate::builtin::*;
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::{ArborFfiVariant, ArborType};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macro definitions

// Conversions in both directions use the constructor tables fetched at init time. The
// to-type constructors write into an uninitialized destination, so from_sys_init() is
// the correct receiving primitive on the Rust side.
macro_rules! impl_ffi_variant {
    ($T:ty) => {
        impl ArborFfiVariant for $T {
            fn ffi_to_variant(&self) -> Variant {
                unsafe {
                    Variant::from_var_sys_init(|variant_ptr| {
                        let converter =
                            sys::variant_conv_api().from_type_constructor(Self::variant_type());
                        converter(variant_ptr, self.sys());
                    })
                }
            }

            fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                // Type check -- at the moment, a strict match is required.
                if variant.get_type() != Self::variant_type() {
                    return Err(FromVariantError::BadType {
                        expected: Self::variant_type(),
                        actual: variant.get_type(),
                    }
                    .into_error(variant.clone()));
                }

                let result = unsafe {
                    Self::from_sys_init(|self_ptr| {
                        let converter =
                            sys::variant_conv_api().to_type_constructor(Self::variant_type());
                        converter(self_ptr, variant.var_sys());
                    })
                };

                Ok(result)
            }
        }

        impl ArborType for $T {
            type Ffi = Self;

            fn to_ffi(&self) -> Self::Ffi {
                self.clone()
            }

            fn into_ffi(self) -> Self::Ffi {
                self
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Ok(ffi)
            }
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// General impls

#[rustfmt::skip]
mod impls {
    use super::*;

    impl_ffi_variant!(bool);
    impl_ffi_variant!(i64);
    impl_ffi_variant!(f64);
    impl_ffi_variant!(Vector2);
    impl_ffi_variant!(Vector2i);
    impl_ffi_variant!(Vector3);
    impl_ffi_variant!(Rect2);
    impl_ffi_variant!(Color);
    impl_ffi_variant!(GString);
    impl_ffi_variant!(StringName);
    impl_ffi_variant!(Callable);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Explicit impls

// Unit
impl ArborFfiVariant for () {
    fn ffi_to_variant(&self) -> Variant {
        Variant::nil()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        if variant.is_nil() {
            return Ok(());
        }

        Err(FromVariantError::BadType {
            expected: VariantType::Nil,
            actual: variant.get_type(),
        }
        .into_error(variant.clone()))
    }
}

impl ArborType for () {
    type Ffi = Self;

    fn to_ffi(&self) -> Self::Ffi {}

    fn into_ffi(self) -> Self::Ffi {}

    fn try_from_ffi(_: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(())
    }
}

impl ArborFfiVariant for Variant {
    fn ffi_to_variant(&self) -> Variant {
        self.clone()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        Ok(variant.clone())
    }
}

impl ArborType for Variant {
    type Ffi = Variant;

    fn to_ffi(&self) -> Self::Ffi {
        self.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi)
    }
}

crate::meta::impl_arbor_as_self!(Variant);

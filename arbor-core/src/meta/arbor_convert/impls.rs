/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta;
use crate::meta::error::{ConvertError, FromFfiError};
use crate::meta::{ArborConvert, ArborType, ClassName, FromArbor, ToArbor};
use crate::sys::ArborNullableFfi;

// ToArbor/FromArbor/ArborConvert impls for engine enums are generated alongside their
// definitions in `crate::classes` and `crate::global`.

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Option<T>

impl<T> ArborType for Option<T>
where
    T: ArborType,
    T::Ffi: ArborNullableFfi,
{
    type Ffi = T::Ffi;

    fn to_ffi(&self) -> Self::Ffi {
        ArborNullableFfi::flatten_option(self.as_ref().map(|t| t.to_ffi()))
    }

    fn into_ffi(self) -> Self::Ffi {
        ArborNullableFfi::flatten_option(self.map(|t| t.into_ffi()))
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        if ffi.is_null() {
            return Ok(None);
        }

        ArborType::try_from_ffi(ffi).map(Some)
    }

    fn from_ffi(ffi: Self::Ffi) -> Self {
        if ffi.is_null() {
            return None;
        }

        Some(ArborType::from_ffi(ffi))
    }

    fn class_name() -> ClassName {
        T::class_name()
    }
}

impl<T> ArborConvert for Option<T>
where
    T: ArborConvert,
    Option<T::Via>: ArborType,
{
    type Via = Option<T::Via>;
}

impl<T: ToArbor> ToArbor for Option<T>
where
    Option<T::Via>: ArborType,
{
    fn to_arbor(&self) -> Self::Via {
        self.as_ref().map(ToArbor::to_arbor)
    }

    fn to_variant(&self) -> Variant {
        match self {
            Some(inner) => inner.to_variant(),
            None => Variant::nil(),
        }
    }
}

impl<T: FromArbor> FromArbor for Option<T>
where
    Option<T::Via>: ArborType,
{
    fn try_from_arbor(via: Self::Via) -> Result<Self, ConvertError> {
        match via {
            Some(via) => T::try_from_arbor(via).map(Some),
            None => Ok(None),
        }
    }

    fn from_arbor(via: Self::Via) -> Self {
        via.map(T::from_arbor)
    }

    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        if variant.is_nil() {
            return Ok(None);
        }

        let value = T::try_from_variant(variant)?;
        Ok(Some(value))
    }

    fn from_variant(variant: &Variant) -> Self {
        if variant.is_nil() {
            return None;
        }

        Some(T::from_variant(variant))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalars

macro_rules! impl_arbor_scalar {
    ($T:ty as $Via:ty, $err:path) => {
        impl ArborType for $T {
            type Ffi = $Via;

            fn to_ffi(&self) -> Self::Ffi {
                (*self).into()
            }

            fn into_ffi(self) -> Self::Ffi {
                self.into()
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Self::try_from(ffi).map_err(|_rust_err| {
                    // rust_err is something like "out of range integral type conversion attempted",
                    // not adding extra information.
                    $err.into_error(ffi)
                })
            }
        }

        impl_arbor_scalar!(@shared_traits; $T);
    };

    ($T:ty as $Via:ty; lossy) => {
        impl ArborType for $T {
            type Ffi = $Via;

            fn to_ffi(&self) -> Self::Ffi {
                *self as $Via
            }

            fn into_ffi(self) -> Self::Ffi {
                self as $Via
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Ok(ffi as $T)
            }
        }

        impl_arbor_scalar!(@shared_traits; $T);
    };

    (@shared_traits; $T:ty) => {
        impl ArborConvert for $T {
            type Via = $T;
        }

        impl ToArbor for $T {
            fn to_arbor(&self) -> Self::Via {
                *self
            }
        }

        impl FromArbor for $T {
            fn try_from_arbor(via: Self::Via) -> Result<Self, ConvertError> {
                Ok(via)
            }
        }
    };
}

// `ArborType` for these is implemented in `arbor-core/src/builtin/variant/impls.rs`.
meta::impl_arbor_as_self!(bool);
meta::impl_arbor_as_self!(i64);
meta::impl_arbor_as_self!(f64);
meta::impl_arbor_as_self!(());

impl_arbor_scalar!(i8 as i64, FromFfiError::I8);
impl_arbor_scalar!(u8 as i64, FromFfiError::U8);
impl_arbor_scalar!(i16 as i64, FromFfiError::I16);
impl_arbor_scalar!(u16 as i64, FromFfiError::U16);
impl_arbor_scalar!(i32 as i64, FromFfiError::I32);
impl_arbor_scalar!(u32 as i64, FromFfiError::U32);
impl_arbor_scalar!(f32 as f64; lossy);

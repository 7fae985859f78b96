/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::{sealed, ArborConvert, ClassName, FromArbor, ToArbor};
use crate::sys;

// Re-export sys traits in this module, so all are in one place.
pub use sys::{ArborFfi, ArborNullableFfi};

/// Conversion of [`ArborFfi`] types to/from [`Variant`].
#[doc(hidden)]
pub trait ArborFfiVariant: Sized + ArborFfi {
    fn ffi_to_variant(&self) -> Variant;
    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError>;
}

/// Type that is directly representable in the engine.
///
/// This trait cannot be implemented for custom user types; for those, [`ArborConvert`] exists instead.
/// A type implements `ArborType` when the engine has a direct, native representation for it. For instance:
/// - [`i64`] implements `ArborType`, since it can be directly represented by Arbor's `int` type.
/// - But [`VariantType`][crate::builtin::VariantType] does not implement `ArborType`. While it is an enum the engine uses,
///   there is no native way to indicate to Arbor that a value should be one of its variants.
//
// Unlike `ArborFfi`, types implementing this trait don't need to fully represent their corresponding engine
// type. For instance [`i32`] does not implement `ArborFfi` because it cannot represent all values of
// Arbor's `int` type, however it does implement `ArborType` because the conversion layer can widen and
// range-check on the way through.
pub trait ArborType:
    ArborConvert<Via = Self> + ToArbor + FromArbor + sealed::Sealed + 'static
// 'static is not technically required, but it simplifies a few things.
{
    #[doc(hidden)]
    type Ffi: ArborFfiVariant;

    #[doc(hidden)]
    fn to_ffi(&self) -> Self::Ffi;

    #[doc(hidden)]
    fn into_ffi(self) -> Self::Ffi;

    #[doc(hidden)]
    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError>;

    #[doc(hidden)]
    fn from_ffi(ffi: Self::Ffi) -> Self {
        Self::try_from_ffi(ffi).unwrap()
    }

    #[doc(hidden)]
    fn class_name() -> ClassName {
        // If we use `ClassName::of::<()>()` then this type shows up as `(no base)` in documentation.
        ClassName::none()
    }
}

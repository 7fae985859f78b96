/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod impls;

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::traits::ArborFfiVariant;
use crate::meta::ArborType;

/// Indicates that a type can be passed to/from the engine, either directly or through an intermediate "via" type.
///
/// The associated type `Via` specifies _how_ this type is passed across the FFI boundary to/from Arbor.
/// Generally [`ToArbor`] needs to be implemented to pass a type to the engine, and [`FromArbor`] to receive
/// this type from the engine.
///
/// [`ArborType`] is a stronger bound than [`ArborConvert`], since it expresses that a type is _directly_
/// representable in the engine (without intermediate "via"). Every `ArborType` also implements `ArborConvert`
/// with `Via = Self`.
#[doc(alias = "via", alias = "transparent")]
pub trait ArborConvert {
    /// The type through which `Self` is represented in the engine.
    type Via: ArborType;
}

/// Defines the canonical conversion to Arbor for a type.
///
/// It is assumed that all the methods return equal values given equal inputs. Additionally, it is assumed
/// that if [`FromArbor`] is implemented, converting to Arbor and back again will return a value equal to the
/// starting value.
///
/// Violating these assumptions is safe but will give unexpected results.
pub trait ToArbor: Sized + ArborConvert {
    /// Converts this type to the engine type by reference, usually by cloning.
    fn to_arbor(&self) -> Self::Via;

    /// Converts this type to a [Variant].
    fn to_variant(&self) -> Variant {
        self.to_arbor().into_ffi().ffi_to_variant()
    }
}

/// Defines the canonical conversion from Arbor for a type.
///
/// It is assumed that all the methods return equal values given equal inputs. Additionally, it is assumed
/// that if [`ToArbor`] is implemented, converting to Arbor and back again will return a value equal to the
/// starting value.
///
/// Violating these assumptions is safe but will give unexpected results.
pub trait FromArbor: Sized + ArborConvert {
    /// Converts the engine representation to this type, returning `Err` on failure.
    fn try_from_arbor(via: Self::Via) -> Result<Self, ConvertError>;

    /// ⚠️ Converts the engine representation to this type.
    ///
    /// # Panics
    /// If the conversion fails.
    fn from_arbor(via: Self::Via) -> Self {
        Self::try_from_arbor(via)
            .unwrap_or_else(|err| panic!("FromArbor::from_arbor() failed: {err}"))
    }

    /// Performs the conversion from a [`Variant`], returning `Err` on failure.
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let ffi = <Self::Via as ArborType>::Ffi::ffi_from_variant(variant)?;

        let via = Self::Via::try_from_ffi(ffi)?;
        Self::try_from_arbor(via)
    }

    /// ⚠️ Performs the conversion from a [`Variant`].
    ///
    /// # Panics
    /// If the conversion fails.
    fn from_variant(variant: &Variant) -> Self {
        Self::try_from_variant(variant).unwrap_or_else(|err| {
            panic!("FromArbor::from_variant() failed -- {err}");
        })
    }
}

#[macro_export]
macro_rules! impl_arbor_as_self {
    ($T:ty) => {
        impl $crate::meta::ArborConvert for $T {
            type Via = $T;
        }

        impl $crate::meta::ToArbor for $T {
            #[inline]
            fn to_arbor(&self) -> Self::Via {
                self.clone()
            }
        }

        impl $crate::meta::FromArbor for $T {
            #[inline]
            fn try_from_arbor(via: Self::Via) -> Result<Self, $crate::meta::error::ConvertError> {
                Ok(via)
            }
        }
    };
}

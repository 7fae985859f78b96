/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use arbor_ffi as sys;
use sys::types::OpaqueVariant;
use sys::{ffi_methods, interface_fn, ArborFfi, VariantType};

use crate::builtin::GString;
use crate::meta::error::ConvertError;
use crate::meta::{FromArbor, ToArbor};

mod impls;

/// Arbor's most general value type, able to hold any builtin or object reference.
///
/// `Variant` is the wire format of the dynamic call path: every value that crosses the
/// extension boundary in a varcall does so boxed in a variant. The Rust side treats it as an
/// opaque engine value and converts at the edges, using [`to_variant`][ToArbor::to_variant]
/// and [`try_to`][Self::try_to].
///
/// # Conversions
///
/// `Variant` deliberately does not implement [`PartialEq`]; the engine's notion of variant
/// equality (which can compare across types) is not replicated here. Convert to a concrete
/// type first and compare that.
#[repr(C, align(8))]
pub struct Variant {
    opaque: OpaqueVariant,
}

impl Variant {
    /// Create an empty variant (`null` value in the host's scripting languages).
    pub fn nil() -> Self {
        unsafe {
            Self::from_var_sys_init(|variant_ptr| {
                interface_fn!(variant_new_nil)(variant_ptr);
            })
        }
    }

    /// Create a variant holding a non-nil value.
    ///
    /// Equivalent to `value.to_variant()`.
    pub fn from<T: ToArbor>(value: T) -> Self {
        value.to_variant()
    }

    /// Convert to type `T`, panicking on failure.
    ///
    /// Equivalent to `T::from_variant(&self)`.
    ///
    /// # Panics
    /// When this variant holds a different type.
    pub fn to<T: FromArbor>(&self) -> T {
        T::from_variant(self)
    }

    /// Convert to type `T`, returning `Err` on failure.
    ///
    /// Equivalent to `T::try_from_variant(&self)`.
    pub fn try_to<T: FromArbor>(&self) -> Result<T, ConvertError> {
        T::try_from_variant(self)
    }

    /// Checks whether the variant is empty (`null` value in the host's scripting languages).
    pub fn is_nil(&self) -> bool {
        // Use get_type() rather than sys_type(), to also cover nullptr OBJECT as NIL
        self.get_type() == VariantType::Nil
    }

    /// Returns the type that is currently held by this variant.
    pub fn get_type(&self) -> VariantType {
        let sys_type = unsafe { interface_fn!(variant_get_type)(self.var_sys()) };
        VariantType::from_sys(sys_type)
    }

    /// Returns the stringified representation, as the engine would print it.
    pub fn stringify(&self) -> GString {
        let result = GString::new();
        unsafe {
            interface_fn!(variant_stringify)(self.var_sys(), result.string_sys());
        }
        result
    }

    fn from_opaque(opaque: OpaqueVariant) -> Self {
        Self { opaque }
    }

    /// Creates a variant by letting `init_fn` initialize the destination, with fallible setup.
    ///
    /// If `init_fn` returns `Err`, the half-built variant is abandoned without running a
    /// destructor. This is sound for the varcall protocol: the host always writes a value to
    /// the return slot, and writes nil on error, which needs no cleanup.
    pub(crate) unsafe fn new_with_var_uninit_result<E>(
        init_fn: impl FnOnce(sys::AxiUninitializedVariantPtr) -> Result<(), E>,
    ) -> Result<Self, E> {
        // Relies on the ffi_methods! expansion of from_var_sys_init() having this implementation.
        let mut raw = std::mem::MaybeUninit::<OpaqueVariant>::uninit();
        init_fn(raw.as_mut_ptr() as sys::AxiUninitializedVariantPtr)
            .map(|_success| Self::from_opaque(raw.assume_init()))
    }

    // Conversions from/to engine `Variant*` pointers.
    ffi_methods! {
        type sys::AxiVariantPtr = *mut Opaque;

        fn from_var_sys = from_sys;
        fn from_var_sys_init = from_sys_init;
        fn var_sys = sys;
        fn move_var_ptr = move_return_ptr;
    }
}

// SAFETY:
// Variants are passed as `Variant*` in ptrcalls; ownership transfers bitwise like other opaques.
unsafe impl ArborFfi for Variant {
    fn variant_type() -> VariantType {
        // We need a concrete type for the trait; a variant is not a nil, but this is the
        // closest mapping. Not used in type-directed conversions, since Variant bypasses them.
        VariantType::Nil
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Opaque; .. }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        unsafe {
            Self::from_var_sys_init(|variant_ptr| {
                interface_fn!(variant_new_copy)(variant_ptr, self.var_sys());
            })
        }
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(variant_destroy)(self.var_sys());
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stringify();
        write!(f, "{s}")
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.get_type();
        let s = self.stringify();
        write!(f, "Variant(ty={ty:?}, val={s})")
    }
}

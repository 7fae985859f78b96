/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::convert::Infallible;
use std::ffi::c_char;
use std::fmt;
use std::str::FromStr;

use arbor_ffi as sys;
use sys::types::OpaqueStringName;
use sys::{ffi_methods, interface_fn, ArborFfi};

use super::GString;

/// A string optimized for unique names.
///
/// `StringName`s are immutable strings interned by the Arbor engine: only one backing instance
/// exists per distinct name, which makes equality checks O(1). The engine identifies classes,
/// methods and signals by this type.
///
/// # Ordering
///
/// Interned names are **not** ordered lexicographically, and their relative order is **not** stable across
/// multiple runs of your application. Therefore, this type does not implement `PartialOrd` and `Ord`, as it
/// would be very easy to introduce bugs by accidentally relying on lexicographical ordering. Convert to
/// [`GString`] or `String` when an order is needed.
#[repr(transparent)]
pub struct StringName {
    opaque: OpaqueStringName,
}

impl StringName {
    fn from_opaque(opaque: OpaqueStringName) -> Self {
        Self { opaque }
    }

    /// Returns the number of bytes in the name's UTF-8 encoding.
    ///
    /// Converts to [`GString`] internally; cache the result rather than calling this in a loop.
    pub fn len(&self) -> usize {
        GString::from(self).len()
    }

    /// Returns `true` if this is the empty name.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ffi_methods! {
        type sys::AxiStringNamePtr = *mut Opaque;

        fn from_string_sys = from_sys;
        fn from_string_sys_init = from_sys_init;
        fn string_sys = sys;
    }
}

// SAFETY:
// - `move_return_ptr`
//   Nothing special needs to be done beyond a `std::mem::swap` when returning a StringName.
//   So we can just use `ffi_methods`.
//
// - `from_arg_ptr`
//   StringNames are properly initialized through a `from_sys` call, but the ref-count should be
//   incremented as that is the callee's responsibility. Which we do by calling
//   `std::mem::forget(string_name.clone())`.
unsafe impl ArborFfi for StringName {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::StringName
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Opaque;
        fn from_sys;
        fn sys;
        fn from_sys_init;
        fn move_return_ptr;
    }

    unsafe fn from_arg_ptr(ptr: sys::AxiTypePtr) -> Self {
        let string_name = Self::from_sys(ptr);
        std::mem::forget(string_name.clone());
        string_name
    }

    unsafe fn from_sys_init_default(init_fn: impl FnOnce(sys::AxiTypePtr)) -> Self {
        let mut result = Self::default();
        init_fn(result.sys_mut());
        result
    }
}

crate::meta::impl_arbor_as_self!(StringName);

impl Default for StringName {
    fn default() -> Self {
        // AXI has no default-construct entry point for string names; the empty name fills in.
        StringName::from("")
    }
}

impl Clone for StringName {
    fn clone(&self) -> Self {
        unsafe {
            Self::from_string_sys_init(|string_ptr| {
                interface_fn!(string_name_new_copy)(string_ptr, self.string_sys());
            })
        }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(string_name_destroy)(self.string_sys());
        }
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        // O(1) on interned names; the host resolves this to exact string equality.
        unsafe { interface_fn!(string_name_equal)(self.string_sys(), other.string_sys()) != 0 }
    }
}

impl Eq for StringName {}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = GString::from(self);
        <GString as fmt::Display>::fmt(&s, f)
    }
}

/// Uses the interned-string literal syntax of the engine's script language: `&"string_name"`.
impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = GString::from(self);
        write!(f, "&\"{string}\"")
    }
}

// SAFETY: StringName is immutable once constructed. Shared references can thus not undergo mutation.
unsafe impl Sync for StringName {}

// SAFETY: StringName is immutable once constructed. Also, its inc-ref/dec-ref operations are mutex-protected in Arbor.
// That is, it's safe to construct a StringName on thread A and destroy it on thread B.
unsafe impl Send for StringName {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from/into other string types

impl From<&str> for StringName {
    fn from(string: &str) -> Self {
        let utf8 = string.as_bytes();

        // SAFETY: Rust guarantees validity and range of string.
        unsafe {
            Self::from_string_sys_init(|string_ptr| {
                interface_fn!(string_name_new_with_utf8_chars_and_len)(
                    string_ptr,
                    utf8.as_ptr() as *const c_char,
                    utf8.len() as sys::AxiInt,
                );
            })
        }
    }
}

impl From<String> for StringName {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&String> for StringName {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<&GString> for StringName {
    fn from(string: &GString) -> Self {
        // AXI interns names from UTF-8 only; route through the Rust projection.
        Self::from(String::from(string).as_str())
    }
}

impl From<GString> for StringName {
    /// Converts this `GString` to a `StringName`.
    ///
    /// This is identical to `StringName::from(&string)`, and as such there is no performance benefit.
    fn from(string: GString) -> Self {
        Self::from(&string)
    }
}

impl From<&StringName> for String {
    fn from(name: &StringName) -> Self {
        let intermediate = GString::from(name);
        Self::from(&intermediate)
    }
}

impl From<StringName> for String {
    fn from(name: StringName) -> Self {
        Self::from(&name)
    }
}

impl FromStr for StringName {
    type Err = Infallible;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(string))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// serde support

#[cfg(feature = "serde")]
mod serialize {
    use super::*;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt::Formatter;

    impl Serialize for StringName {
        #[inline]
        fn serialize<S>(
            &self,
            serializer: S,
        ) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for StringName {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct StringNameVisitor;
            impl<'de> Visitor<'de> for StringNameVisitor {
                type Value = StringName;

                fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                    formatter.write_str("a StringName")
                }

                fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    Ok(StringName::from(s))
                }
            }

            deserializer.deserialize_str(StringNameVisitor)
        }
    }
}

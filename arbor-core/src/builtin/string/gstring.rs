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
use sys::types::OpaqueString;
use sys::{ffi_methods, interface_fn, ArborFfi};

use super::StringName;

/// The host engine's reference counted string type.
///
/// This is the Rust binding of the native string class used within the Arbor engine, and as such
/// has different memory layout and characteristics than `std::string::String`.
///
/// `GString` uses copy-on-write semantics and is cheap to clone. Modifying a string may trigger
/// a copy, if that instance shares its backing storage with other strings.
///
/// Most string processing is easiest in Rust's `String`; convert with [`From`] in either
/// direction and pass `GString` only across the extension boundary.
#[repr(transparent)]
pub struct GString {
    opaque: OpaqueString,
}

impl GString {
    /// Construct a new empty GString.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_opaque(opaque: OpaqueString) -> Self {
        Self { opaque }
    }

    /// Number of bytes in the UTF-8 encoding of this string.
    ///
    /// This is not the number of characters; use a Rust `String` if character indexing is
    /// needed.
    pub fn len(&self) -> usize {
        let len = unsafe {
            interface_fn!(string_to_utf8_chars)(self.string_sys(), std::ptr::null_mut(), 0)
        };

        len.try_into().expect("negative string length")
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ffi_methods! {
        type sys::AxiStringPtr = *mut Opaque;

        fn from_string_sys = from_sys;
        fn from_string_sys_init = from_sys_init;
        fn string_sys = sys;
    }

    /// Move `self` into a system pointer. This transfers ownership and thus does not call the
    /// destructor.
    ///
    /// # Safety
    /// `dst` must be a pointer to a live `GString` slot which is suitable for ffi with Arbor.
    pub(crate) unsafe fn move_string_ptr(self, dst: sys::AxiStringPtr) {
        self.move_return_ptr(dst as sys::AxiTypePtr);
    }
}

// SAFETY:
// - `move_return_ptr`
//   Nothing special needs to be done beyond a `std::mem::swap` when returning a String.
//   So we can just use `ffi_methods`.
//
// - `from_arg_ptr`
//   Strings are properly initialized through a `from_sys` call, but the ref-count should be
//   incremented as that is the callee's responsibility. Which we do by calling
//   `std::mem::forget(string.clone())`.
unsafe impl ArborFfi for GString {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::String
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Opaque;
        fn from_sys;
        fn sys;
        fn from_sys_init;
        fn move_return_ptr;
    }

    unsafe fn from_arg_ptr(ptr: sys::AxiTypePtr) -> Self {
        let string = Self::from_sys(ptr);
        std::mem::forget(string.clone());
        string
    }

    unsafe fn from_sys_init_default(init_fn: impl FnOnce(sys::AxiTypePtr)) -> Self {
        let mut result = Self::default();
        init_fn(result.sys_mut());
        result
    }
}

crate::meta::impl_arbor_as_self!(GString);

impl Default for GString {
    fn default() -> Self {
        // AXI has no default-construct entry point for strings; an empty UTF-8 slice fills in.
        GString::from("")
    }
}

impl Clone for GString {
    fn clone(&self) -> Self {
        unsafe {
            Self::from_string_sys_init(|string_ptr| {
                interface_fn!(string_new_copy)(string_ptr, self.string_sys());
            })
        }
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(string_destroy)(self.string_sys());
        }
    }
}

impl PartialEq for GString {
    fn eq(&self, other: &Self) -> bool {
        // No equality entry point for plain strings in AXI; compare the Rust projections.
        String::from(self) == String::from(other)
    }
}

impl Eq for GString {}

impl std::hash::Hash for GString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        String::from(self).hash(state)
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from(self);
        f.write_str(s.as_str())
    }
}

/// Uses literal syntax from the host's scripting languages: `"string"`
impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from(self);
        write!(f, "\"{s}\"")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from/into Rust string-types

impl<S> From<S> for GString
where
    S: AsRef<str>,
{
    fn from(s: S) -> Self {
        let bytes = s.as_ref().as_bytes();

        unsafe {
            Self::from_string_sys_init(|string_ptr| {
                let ctor = interface_fn!(string_new_with_utf8_chars_and_len);
                ctor(
                    string_ptr,
                    bytes.as_ptr() as *const c_char,
                    bytes.len() as sys::AxiInt,
                );
            })
        }
    }
}

impl From<&GString> for String {
    fn from(string: &GString) -> Self {
        unsafe {
            let len =
                interface_fn!(string_to_utf8_chars)(string.string_sys(), std::ptr::null_mut(), 0);

            assert!(len >= 0);
            let mut buf = vec![0u8; len as usize];

            interface_fn!(string_to_utf8_chars)(
                string.string_sys(),
                buf.as_mut_ptr() as *mut c_char,
                len,
            );

            // Note: could use from_utf8_unchecked() but for now prefer safety
            String::from_utf8(buf).expect("String::from_utf8")
        }
    }
}

impl From<GString> for String {
    /// Converts this `GString` to a `String`.
    ///
    /// This is identical to `String::from(&string)`, and as such there is no performance benefit.
    fn from(string: GString) -> Self {
        Self::from(&string)
    }
}

impl FromStr for GString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from other engine string-types

impl From<&StringName> for GString {
    fn from(string_name: &StringName) -> Self {
        unsafe {
            Self::from_string_sys_init(|string_ptr| {
                interface_fn!(string_name_to_string)(string_name.string_sys(), string_ptr);
            })
        }
    }
}

impl From<StringName> for GString {
    /// Converts this `StringName` to a `GString`.
    ///
    /// This is identical to `GString::from(&string_name)`, and as such there is no performance
    /// benefit.
    fn from(string_name: StringName) -> Self {
        Self::from(&string_name)
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

    impl Serialize for GString {
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

    impl<'de> Deserialize<'de> for GString {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct GStringVisitor;
            impl<'de> Visitor<'de> for GStringVisitor {
                type Value = GString;

                fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                    formatter.write_str("a GString")
                }

                fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    Ok(GString::from(s))
                }
            }

            deserializer.deserialize_str(GStringVisitor)
        }
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;
use std::cell::OnceCell;
use std::ffi::CStr;
use std::fmt;
use std::hash::Hash;

use crate::builtin::{GString, StringName};
use crate::sys::Global;

// First element (index 0) is always the empty string name, which is used for "no class".
static CLASS_NAMES: Global<Vec<ClassNameEntry>> = Global::new(|| vec![ClassNameEntry::none()]);

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// # Safety
/// Must not use any `ClassName` APIs after this call.
pub(crate) unsafe fn cleanup() {
    CLASS_NAMES.lock().clear();
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Entry in the class name cache.
///
/// The `StringName` needs to be lazy-initialized because the Arbor binding may not be initialized yet.
struct ClassNameEntry {
    ascii: &'static CStr,
    engine_str: OnceCell<StringName>,
}

impl ClassNameEntry {
    fn new(ascii: &'static CStr) -> Self {
        Self {
            ascii,
            engine_str: OnceCell::new(),
        }
    }

    fn none() -> Self {
        Self::new(c"")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Name of a class known to the Arbor engine.
///
/// This struct is very cheap to copy. The actual names are cached globally.
///
/// # Ordering
///
/// `ClassName`s are **not** ordered lexicographically, and the ordering relation is **not** stable across multiple runs of your
/// application. When lexicographical order is needed, it's possible to convert this type to [`GString`] or [`String`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ClassName {
    global_index: u16,
}

impl ClassName {
    #[doc(hidden)]
    pub fn none() -> Self {
        // First element is always the empty string name.
        Self { global_index: 0 }
    }

    #[doc(hidden)]
    pub fn alloc_next_ascii(class_name_cstr: &'static CStr) -> Self {
        let utf8 = class_name_cstr
            .to_str()
            .expect("class name is invalid UTF-8");

        assert!(
            utf8.is_ascii(),
            "ClassName::alloc_next_ascii() with non-ASCII string '{utf8}'"
        );

        let global_index = insert_class(class_name_cstr);

        Self { global_index }
    }

    #[doc(hidden)]
    pub fn is_none(&self) -> bool {
        self.global_index == 0
    }

    /// Converts the class name to a `GString`.
    pub fn to_gstring(&self) -> GString {
        self.with_string_name(|s| s.into())
    }

    /// Converts the class name to a `StringName`.
    pub fn to_string_name(&self) -> StringName {
        self.with_string_name(|s| s.clone())
    }

    /// Returns the borrowed `str`.
    pub fn to_cow_str(&self) -> Cow<'static, str> {
        let cached_names = CLASS_NAMES.lock();
        let entry = &cached_names[self.global_index as usize];

        Cow::Borrowed(ascii_cstr_to_str(entry.ascii))
    }

    // Takes a closure because the mutex guard protects the reference; so the &StringName cannot leave the scope.
    pub(crate) fn with_string_name<R>(&self, func: impl FnOnce(&StringName) -> R) -> R {
        let cached_names = CLASS_NAMES.lock();
        let entry = &cached_names[self.global_index as usize];

        let string_name = entry
            .engine_str
            .get_or_init(|| StringName::from(ascii_cstr_to_str(entry.ascii)));

        func(string_name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cow = self.to_cow_str();
        write!(f, "{cow}")
    }
}

/// Adds a new class name to the cache, returning its index.
fn insert_class(name: &'static CStr) -> u16 {
    let mut names = CLASS_NAMES.lock();
    let index = names
        .len()
        .try_into()
        .expect("Currently limited to 65536 class names");

    names.push(ClassNameEntry::new(name));
    index
}

fn ascii_cstr_to_str(cstr: &CStr) -> &str {
    cstr.to_str().expect("should be validated ASCII")
}

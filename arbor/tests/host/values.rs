/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Value representations backing the mock engine's opaque types.
//!
//! The binding only sees opaque byte blobs of the sizes declared in `arbor_ffi::central`; what
//! lives inside them is entirely the engine's business. The mock uses:
//!
//! - `String`: an owned `*mut String` box in the first 8 bytes.
//! - `StringName`: an interned `*const String`, never freed; equality is pointer equality.
//! - `Callable`: a refcounted [`HostCallable`] box in the first 8 of 16 bytes.
//! - `Variant`: the [`VariantValue`] enum, which must fit the declared 24 bytes.

use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use arbor::sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Strings

pub unsafe fn string_slot(ptr: *const c_void) -> *mut String {
    *(ptr as *const *mut String)
}

/// Writes a freshly allocated engine string into an uninitialized string slot.
pub unsafe fn write_string(dest: *mut c_void, contents: String) {
    *(dest as *mut *mut String) = Box::into_raw(Box::new(contents));
}

pub unsafe fn read_string(ptr: *const c_void) -> String {
    (*string_slot(ptr)).clone()
}

pub unsafe fn drop_string(ptr: *mut c_void) {
    drop(Box::from_raw(string_slot(ptr)));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// String names

fn interner() -> &'static Mutex<HashMap<String, usize>> {
    static INTERNER: OnceLock<Mutex<HashMap<String, usize>>> = OnceLock::new();
    INTERNER.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Interns a name, returning its canonical pointer. Interned strings are leaked; a name pointer
/// stays valid for the rest of the process.
pub fn intern(name: &str) -> *const String {
    let mut table = interner().lock().unwrap();
    let entry = table.entry(name.to_string()).or_insert_with(|| {
        let leaked: &'static String = Box::leak(Box::new(name.to_string()));
        leaked as *const String as usize
    });
    *entry as *const String
}

pub unsafe fn name_slot(ptr: *const c_void) -> *const String {
    *(ptr as *const *const String)
}

pub unsafe fn read_name(ptr: *const c_void) -> &'static String {
    &*name_slot(ptr)
}

pub unsafe fn write_name(dest: *mut c_void, canonical: *const String) {
    *(dest as *mut *const String) = canonical;
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Callables

/// Engine-side callable value: a refcounted box around the custom-callable descriptor the binding
/// handed in. `free_func` runs when the last reference dies.
pub struct HostCallable {
    refcount: AtomicUsize,
    pub info: sys::AxiCallableCustomInfo,
}

pub unsafe fn callable_slot(ptr: *const c_void) -> *mut HostCallable {
    *(ptr as *const *mut HostCallable)
}

pub unsafe fn write_callable(dest: *mut c_void, callable: *mut HostCallable) {
    let words = dest as *mut [usize; 2];
    (*words)[0] = callable as usize;
    (*words)[1] = 0;
}

pub unsafe fn callable_create(info: &sys::AxiCallableCustomInfo) -> *mut HostCallable {
    Box::into_raw(Box::new(HostCallable {
        refcount: AtomicUsize::new(1),
        info: *info,
    }))
}

pub unsafe fn callable_inc(callable: *mut HostCallable) {
    (*callable).refcount.fetch_add(1, Ordering::Relaxed);
}

/// Decrements; on the last reference, runs the binding's `free_func` and drops the box.
///
/// Must not be called while the engine lock is held: `free_func` drops the captured Rust closure,
/// whose captures may re-enter the engine (e.g. a captured `Gd` running its refcount bookkeeping).
pub unsafe fn callable_dec(callable: *mut HostCallable) {
    if (*callable).refcount.fetch_sub(1, Ordering::AcqRel) == 1 {
        let boxed = Box::from_raw(callable);
        if let Some(free_func) = boxed.info.free_func {
            free_func(boxed.info.callable_userdata);
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variants

/// In-memory representation of an engine variant.
///
/// `repr(C, u32)` pins the layout: a 4-byte tag, padding, then the largest 16-byte payload, for 24
/// bytes total. The binding moves variants around as raw bytes, so the size must not exceed the
/// opaque size declared in `arbor_ffi::central`.
#[repr(C, u32)]
#[derive(Clone)]
pub enum VariantValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(*mut String),
    Vector2([f32; 2]),
    Vector2i([i32; 2]),
    Rect2([f32; 4]),
    Vector3([f32; 3]),
    Color([f32; 4]),
    StringName(*const String),
    Object { ptr: usize, id: u64 },
    Callable(*mut HostCallable),
}

const _: () = assert!(std::mem::size_of::<VariantValue>() <= 24);
const _: () = assert!(std::mem::align_of::<VariantValue>() <= 8);

impl VariantValue {
    pub fn type_ord(&self) -> sys::AxiVariantType {
        match self {
            Self::Nil => sys::AXI_VARIANT_TYPE_NIL,
            Self::Bool(_) => sys::AXI_VARIANT_TYPE_BOOL,
            Self::Int(_) => sys::AXI_VARIANT_TYPE_INT,
            Self::Float(_) => sys::AXI_VARIANT_TYPE_FLOAT,
            Self::String(_) => sys::AXI_VARIANT_TYPE_STRING,
            Self::Vector2(_) => sys::AXI_VARIANT_TYPE_VECTOR2,
            Self::Vector2i(_) => sys::AXI_VARIANT_TYPE_VECTOR2I,
            Self::Rect2(_) => sys::AXI_VARIANT_TYPE_RECT2,
            Self::Vector3(_) => sys::AXI_VARIANT_TYPE_VECTOR3,
            Self::Color(_) => sys::AXI_VARIANT_TYPE_COLOR,
            Self::StringName(_) => sys::AXI_VARIANT_TYPE_STRING_NAME,
            Self::Object { .. } => sys::AXI_VARIANT_TYPE_OBJECT,
            Self::Callable(_) => sys::AXI_VARIANT_TYPE_CALLABLE,
        }
    }

    pub fn stringify(&self) -> String {
        // SAFETY: string/name pointers inside a live variant are valid.
        unsafe {
            match self {
                Self::Nil => "<null>".to_string(),
                Self::Bool(b) => b.to_string(),
                Self::Int(i) => i.to_string(),
                Self::Float(f) => format!("{f:?}"),
                Self::String(s) => (**s).clone(),
                Self::Vector2([x, y]) => format!("({x:?}, {y:?})"),
                Self::Vector2i([x, y]) => format!("({x}, {y})"),
                Self::Rect2([x, y, w, h]) => format!("[P: ({x:?}, {y:?}), S: ({w:?}, {h:?})]"),
                Self::Vector3([x, y, z]) => format!("({x:?}, {y:?}, {z:?})"),
                Self::Color([r, g, b, a]) => format!("({r:?}, {g:?}, {b:?}, {a:?})"),
                Self::StringName(s) => (**s).clone(),
                Self::Object { id, .. } => format!("<Object#{id}>"),
                Self::Callable(_) => "Callable".to_string(),
            }
        }
    }
}

/// Writes a variant into an uninitialized variant slot. The old bytes are not dropped.
pub unsafe fn write_variant(dest: *mut c_void, value: VariantValue) {
    (dest as *mut VariantValue).write(value);
}

pub unsafe fn variant_ref<'a>(ptr: *const c_void) -> &'a VariantValue {
    &*(ptr as *const VariantValue)
}

/// Moves the variant out of its slot, leaving the bytes dead. The caller owns the payload and is
/// responsible for releasing string boxes, callable and object references.
pub unsafe fn take_variant(ptr: *mut c_void) -> VariantValue {
    (ptr as *mut VariantValue).read()
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cached engine entry points: lazily resolved class method binds, and the eagerly loaded
//! variant conversion constructors.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{ClassMethodBind, StringCache, VariantType};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Lazy method table key types
// Could reuse them in load functions, but less code when passing separate parameters -> faster parsing.

pub mod lazy_keys {
    #[derive(Clone, Eq, PartialEq, Hash)]
    pub struct ClassMethodKey {
        pub class_name: &'static str,
        pub method_name: &'static str,
        pub hash: i64,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class method tables

struct InnerTable {
    // 'static because at this point, the interface is globally available.
    string_cache: StringCache<'static>,
    function_pointers: HashMap<lazy_keys::ClassMethodKey, ClassMethodBind>,
}

/// Lazily populated method-bind cache for the classes of one init level.
///
/// Method binds are resolved on first call through `classdb_get_method_bind` and memoized by
/// (class name, method name, hash).
// Note: get_method_bind could potentially be stored as a field in the table, to avoid interface_fn!.
pub struct ClassMethodTable {
    inner: Mutex<InnerTable>,
}

impl ClassMethodTable {
    /// # Safety
    ///
    /// The interface must be initialized, so a `'static` reference to it can be taken.
    pub unsafe fn load() -> Self {
        let interface = unsafe { crate::get_interface() };

        Self {
            inner: Mutex::new(InnerTable {
                string_cache: StringCache::new(interface),
                function_pointers: HashMap::new(),
            }),
        }
    }

    #[inline(always)]
    pub fn fptr_by_key(&self, key: lazy_keys::ClassMethodKey) -> ClassMethodBind {
        let mut guard = self.inner.lock().unwrap();
        let inner = &mut *guard;
        *inner
            .function_pointers
            .entry(key.clone())
            .or_insert_with(|| {
                let get_method_bind = crate::interface_fn!(classdb_get_method_bind);
                let class_sname_ptr = inner.string_cache.fetch(key.class_name);
                crate::load_class_method(
                    get_method_bind,
                    &mut inner.string_cache,
                    class_sname_ptr,
                    key.class_name,
                    key.method_name,
                    key.hash,
                )
            })
    }
}

// SAFETY: the Mutex serializes all access to the inner cache; the cached string names and method
// binds are engine handles that remain valid for the process lifetime and may be used from any
// thread per the AXI threading contract.
unsafe impl Send for ClassMethodTable {}
// SAFETY: see `Send`.
unsafe impl Sync for ClassMethodTable {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variant conversion table

type VariantFromTypeFn = unsafe extern "C" fn(crate::AxiUninitializedVariantPtr, crate::AxiTypePtr);
type TypeFromVariantFn = unsafe extern "C" fn(crate::AxiUninitializedTypePtr, crate::AxiVariantPtr);

/// Conversion constructors between variants and type-pointer payloads, one pair per variant type.
///
/// Loaded eagerly at binding initialization; `Nil` has no constructors and keeps empty slots.
pub struct VariantConversionTable {
    from_type: [Option<VariantFromTypeFn>; crate::AXI_VARIANT_TYPE_MAX as usize],
    to_type: [Option<TypeFromVariantFn>; crate::AXI_VARIANT_TYPE_MAX as usize],
}

impl VariantConversionTable {
    #[allow(clippy::missing_safety_doc)]
    pub unsafe fn load(interface: &crate::AxiInterface) -> Self {
        let get_from_type = interface
            .get_variant_from_type_constructor
            .expect("get_variant_from_type_constructor absent");
        let get_to_type = interface
            .get_variant_to_type_constructor
            .expect("get_variant_to_type_constructor absent");

        let mut table = Self {
            from_type: [None; crate::AXI_VARIANT_TYPE_MAX as usize],
            to_type: [None; crate::AXI_VARIANT_TYPE_MAX as usize],
        };

        for ordinal in 1..crate::AXI_VARIANT_TYPE_MAX {
            let from = get_from_type(ordinal);
            let to = get_to_type(ordinal);

            assert!(
                from.is_some() && to.is_some(),
                "engine provides no conversion constructors for variant type {ordinal}"
            );

            table.from_type[ordinal as usize] = from;
            table.to_type[ordinal as usize] = to;
        }

        table
    }

    #[inline(always)]
    pub fn from_type_constructor(&self, ty: VariantType) -> VariantFromTypeFn {
        debug_assert!(ty != VariantType::Nil, "Nil has no from-type constructor");

        // SAFETY: all non-Nil slots are populated in load().
        unsafe { self.from_type[ty.sys() as usize].unwrap_unchecked() }
    }

    #[inline(always)]
    pub fn to_type_constructor(&self, ty: VariantType) -> TypeFromVariantFn {
        debug_assert!(ty != VariantType::Nil, "Nil has no to-type constructor");

        // SAFETY: all non-Nil slots are populated in load().
        unsafe { self.to_type[ty.sys() as usize].unwrap_unchecked() }
    }
}

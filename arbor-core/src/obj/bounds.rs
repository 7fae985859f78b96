/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Different ways how bounds of an `ArborClass` can be checked.
//!
//! This module contains two traits that can be used to check the characteristics of an `ArborClass` type:
//!
//! 1. [`Memory`] is used to check the memory strategy of the **static** type.
//!
//!    This is useful when you operate on associated functions of `Gd<T>` or `T`, e.g. for construction.
//!    - [`MemRefCounted`] is used for `RefCounted` classes and derived.
//!    - [`MemManual`] is used for `Object` and all inherited classes, which are not `RefCounted` (e.g. `Node`).<br><br>
//!
//! 2. [`DynMemory`] is used to check the memory strategy of the **dynamic** type.
//!
//!    When you operate on methods of `T` or `Gd<T>` and are interested in instances, you can use this.
//!    Most of the time, this is not what you want -- just use `Memory` if you want to know if a type is manually managed or ref-counted.
//!    - [`MemRefCounted`] is used for `RefCounted` classes and derived. These are **always** reference-counted.
//!    - [`MemManual`] is used for instances inheriting `Object`, which are not `RefCounted` (e.g. `Node`). Excludes `Object` itself. These are
//!      **always** manually managed.
//!    - [`MemDynamic`] is used for `Object` instances. `Gd<Object>` can point to objects of any possible class, so whether we are dealing with
//!      a ref-counted or manually-managed object is determined only at runtime.
//!
//!
//! # Example
//!
//! Declare a custom smart pointer which wraps `Gd<T>` pointers, but only accepts `T` objects that are manually managed.
//! ```
//! use arbor::prelude::*;
//! use arbor::obj::{bounds, ArborClass, Bounds};
//!
//! struct MyGd<T>
//! where T: ArborClass + Bounds<Memory = bounds::MemManual>
//! {
//!    inner: Gd<T>,
//! }
//! ```
//!
//! Note that depending on if you want to exclude `Object`, you should use `DynMemory` instead of `Memory`.

use crate::obj::{ArborClass, RawGd};
use crate::out;
use private::Sealed;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Sealed trait

pub(super) mod private {
    use super::{DynMemory, Memory};

    // Bounds trait declared here for code locality; re-exported in crate::obj.

    /// Library-implemented trait to check bounds on `ArborClass` types.
    ///
    /// See also [`bounds`](crate::obj::bounds) module documentation.
    ///
    /// # Safety
    ///
    /// Internal.
    /// You **must not** implement this trait yourself; the library does so for every engine class it binds.
    pub unsafe trait Bounds {
        /// Defines the memory strategy of the static type.
        type Memory: Memory;

        /// Defines the memory strategy of the instance (at runtime).
        type DynMemory: DynMemory;
    }

    pub trait Sealed {}
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Memory bounds

/// Specifies the memory strategy of the static type.
pub trait Memory: Sealed {}

/// Specifies that the memory strategy of the static type may be manual management.
///
/// Satisfied by `Object` itself (dynamically possibly ref-counted) and every manually managed class.
pub trait PossiblyManual: Sealed {}

/// Specifies the memory strategy of the dynamic type.
///
/// For `Gd<Object>`, it is determined at runtime whether the instance is manually managed or ref-counted.
pub trait DynMemory: Sealed {
    /// Initialize reference counter.
    #[doc(hidden)]
    fn maybe_init_ref<T: ArborClass>(obj: &RawGd<T>);

    /// If ref-counted, then increment count.
    #[doc(hidden)]
    fn maybe_inc_ref<T: ArborClass>(obj: &RawGd<T>);

    /// If ref-counted, then decrement count. Returns `true` if the count hit 0 and the object can be
    /// safely freed.
    ///
    /// # Safety
    ///
    /// If this method is used on a [`Gd`][crate::obj::Gd] that inherits from
    /// [`RefCounted`](crate::classes::RefCounted), then the reference count must either be
    /// incremented before it hits 0, or some `Gd` referencing this object must be forgotten.
    #[doc(hidden)]
    unsafe fn maybe_dec_ref<T: ArborClass>(obj: &RawGd<T>) -> bool;

    /// Check if ref-counted, return `None` if information is not available (dynamic and obj dead).
    #[doc(hidden)]
    fn is_ref_counted<T: ArborClass>(obj: &RawGd<T>) -> Option<bool>;
}

/// Memory managed through the Arbor reference counter (always present).
/// This is used for `RefCounted` classes and derived.
pub struct MemRefCounted {}
impl Sealed for MemRefCounted {}
impl Memory for MemRefCounted {}
impl DynMemory for MemRefCounted {
    fn maybe_init_ref<T: ArborClass>(obj: &RawGd<T>) {
        out!("  Stat::init  <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return;
        }
        obj.with_ref_counted(|refc| {
            let success = refc.init_ref();
            assert!(success, "init_ref() failed");
        });
    }

    fn maybe_inc_ref<T: ArborClass>(obj: &RawGd<T>) {
        out!("  Stat::inc   <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return;
        }
        obj.with_ref_counted(|refc| {
            let success = refc.reference();
            assert!(success, "reference() failed");
        });
    }

    unsafe fn maybe_dec_ref<T: ArborClass>(obj: &RawGd<T>) -> bool {
        out!("  Stat::dec   <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return false;
        }
        obj.with_ref_counted(|refc| {
            let is_last = refc.unreference();
            out!("  +-- was last={is_last}");
            is_last
        })
    }

    fn is_ref_counted<T: ArborClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(true)
    }
}

/// Memory managed through the Arbor reference counter, if present; otherwise manual.
/// This is used only for `Object` classes.
pub struct MemDynamic {}
impl Sealed for MemDynamic {}
impl PossiblyManual for MemDynamic {}
impl DynMemory for MemDynamic {
    fn maybe_init_ref<T: ArborClass>(obj: &RawGd<T>) {
        out!("  Dyn::init  <{}>", std::any::type_name::<T>());
        if obj
            .instance_id_unchecked()
            .map(|id| id.is_ref_counted())
            .unwrap_or(false)
        {
            // Will call `RefCounted::init_ref()` which checks for liveness.
            MemRefCounted::maybe_init_ref(obj)
        }
    }

    fn maybe_inc_ref<T: ArborClass>(obj: &RawGd<T>) {
        out!("  Dyn::inc   <{}>", std::any::type_name::<T>());
        if obj
            .instance_id_unchecked()
            .map(|id| id.is_ref_counted())
            .unwrap_or(false)
        {
            // Will call `RefCounted::reference()` which checks for liveness.
            MemRefCounted::maybe_inc_ref(obj)
        }
    }

    unsafe fn maybe_dec_ref<T: ArborClass>(obj: &RawGd<T>) -> bool {
        out!("  Dyn::dec   <{}>", std::any::type_name::<T>());
        if obj
            .instance_id_unchecked()
            .map(|id| id.is_ref_counted())
            .unwrap_or(false)
        {
            // Will call `RefCounted::unreference()` which checks for liveness.
            MemRefCounted::maybe_dec_ref(obj)
        } else {
            false
        }
    }

    fn is_ref_counted<T: ArborClass>(obj: &RawGd<T>) -> Option<bool> {
        // Return `None` if obj is dead.
        obj.instance_id_unchecked().map(|id| id.is_ref_counted())
    }
}

/// No memory management, user responsible for not leaking.
/// This is used for all `Object` derivates, which are not `RefCounted`. `Object` itself is also excluded.
pub struct MemManual {}
impl Sealed for MemManual {}
impl Memory for MemManual {}
impl PossiblyManual for MemManual {}
impl DynMemory for MemManual {
    fn maybe_init_ref<T: ArborClass>(_obj: &RawGd<T>) {}
    fn maybe_inc_ref<T: ArborClass>(_obj: &RawGd<T>) {}
    unsafe fn maybe_dec_ref<T: ArborClass>(_obj: &RawGd<T>) -> bool {
        false
    }
    fn is_ref_counted<T: ArborClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(false)
    }
}

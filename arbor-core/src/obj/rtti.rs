/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::obj::{ArborClass, InstanceId};

// This is private; despite `pub` here it is re-exported in `crate::private` module.

/// Object runtime type information, obtained at creation time.
///
/// Stores how an Arbor-managed object has been created, for debug info and runtime checks.
/// This is persisted independently of the static type system (e.g. `T` in `Gd<T>`) and can be used to perform sanity checks at runtime.
#[derive(Clone, Debug)]
pub struct ObjectRtti {
    /// Cached instance ID. May point to dead objects.
    instance_id: InstanceId,

    /// Only in Debug mode: dynamic class.
    #[cfg(debug_assertions)]
    class_name: crate::meta::ClassName,
    //
    // The stored class is not always the most-derived one; ObjectRtti is sometimes constructed
    // from a base class, via RawGd::from_obj_sys_weak() (after upcast, or when receiving a base
    // pointer from Arbor). Precise checks need the engine's dynamic class lookup.
}

impl ObjectRtti {
    /// Creates a new instance of `ObjectRtti`.
    #[inline]
    pub fn of<T: ArborClass>(instance_id: InstanceId) -> Self {
        Self {
            instance_id,

            #[cfg(debug_assertions)]
            class_name: T::class_name(),
        }
    }

    /// Validates that the object's stored type matches or inherits from `T`.
    ///
    /// Only checks the cached type from RTTI construction time.
    /// This may not reflect runtime type changes (which shouldn't happen).
    ///
    /// # Panics (Debug mode)
    /// If the stored type does not inherit from `T`.
    #[cfg(debug_assertions)]
    #[inline]
    pub fn check_type<T: ArborClass>(&self) {
        crate::classes::ensure_object_inherits(self.class_name, T::class_name(), self.instance_id);
    }

    #[inline]
    pub fn instance_id(&self) -> InstanceId {
        // Do not add logic or validations here, this is passed in every FFI call.
        self.instance_id
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`RefCounted`][crate::classes::RefCounted].

use arbor_ffi as sys;

use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `RefCounted`.
    ///
    /// Inherits [`Object`][crate::classes::Object].
    ///
    /// Base class for all types that are memory-managed via reference counting. `Gd<T>` pointers
    /// to such types share ownership; the last one to be dropped destroys the instance.
    #[derive(Debug)]
    #[repr(C)]
    pub struct RefCounted {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl RefCounted {
        pub fn init_ref(&mut self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RefCounted",
                    method_name: "init_ref",
                    hash: 2240911060,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RefCounted",
                    "init_ref",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn reference(&mut self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RefCounted",
                    method_name: "reference",
                    hash: 2240911654,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RefCounted",
                    "reference",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn unreference(&mut self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RefCounted",
                    method_name: "unreference",
                    hash: 2240913787,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RefCounted",
                    "unreference",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_reference_count(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RefCounted",
                    method_name: "get_reference_count",
                    hash: 3036558113,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RefCounted",
                    "get_reference_count",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for RefCounted {
        type Base = crate::classes::Object;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"RefCounted"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Core;
    }

    unsafe impl crate::obj::Bounds for RefCounted {
        type Memory = crate::obj::bounds::MemRefCounted;
        type DynMemory = crate::obj::bounds::MemRefCounted;
    }

    impl crate::obj::EngineClass for RefCounted {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for RefCounted {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Object> for RefCounted {}

    impl std::ops::Deref for RefCounted {
        type Target = crate::classes::Object;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for RefCounted {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::RefCounted;
    use crate::classes::object::SignalsOfObject;

    impl WithSignals for RefCounted {
        type SignalCollection<C: WithSignals> = SignalsOfObject<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

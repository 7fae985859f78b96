/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Resource`][crate::classes::Resource].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Resource`.
    ///
    /// Inherits [`RefCounted`][crate::classes::RefCounted].
    ///
    /// Related symbols:
    ///
    /// * [`resource`][crate::classes::resource]: sidecar module with related signal types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Resource {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Resource {
        pub fn set_name(&mut self, name: GString) {
            type CallRet = ();
            type CallParams = (GString,);

            let args = (name,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Resource",
                    method_name: "set_name",
                    hash: 3089850668,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Resource",
                    "set_name",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_name(&self) -> GString {
            type CallRet = GString;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Resource",
                    method_name: "get_name",
                    hash: 201670096,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Resource",
                    "get_name",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn emit_changed(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Resource",
                    method_name: "emit_changed",
                    hash: 3218959716,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Resource",
                    "emit_changed",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Resource {
        type Base = crate::classes::RefCounted;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Resource"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Resource {
        type Memory = crate::obj::bounds::MemRefCounted;
        type DynMemory = crate::obj::bounds::MemRefCounted;
    }

    impl crate::obj::EngineClass for Resource {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Resource {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::RefCounted> for Resource {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Resource {}

    impl std::ops::Deref for Resource {
        type Target = crate::classes::RefCounted;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Resource {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Resource;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`Resource`][crate::classes::Resource] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfResource<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfResource<C> {
        /// Signature: `()`
        pub fn changed(&mut self) -> SigChanged<C> {
            SigChanged {
                typed: TypedSignal::extract(&mut self.__internal_obj, "changed"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfResource<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<Resource as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = Resource;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfResource<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = Resource;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigChanged<C> = TypedSignal<C, ()>;

    pub struct SigChanged<C: WithSignals> {
        typed: TypedSigChanged<C>,
    }

    impl<C: WithSignals> SigChanged<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigChanged<C> {
        type Target = TypedSigChanged<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigChanged<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for Resource {
        type SignalCollection<C: WithSignals> = SignalsOfResource<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Node3D`][crate::classes::Node3D].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Node3D`.
    ///
    /// Inherits [`Node`][crate::classes::Node].
    #[derive(Debug)]
    #[repr(C)]
    pub struct Node3D {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Node3D {
        pub fn set_position(&mut self, position: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3,);

            let args = (position,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node3D",
                    method_name: "set_position",
                    hash: 3460891852,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node3D",
                    "set_position",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_position(&self) -> Vector3 {
            type CallRet = Vector3;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node3D",
                    method_name: "get_position",
                    hash: 3360562783,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node3D",
                    "get_position",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_scale(&mut self, scale: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3,);

            let args = (scale,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node3D",
                    method_name: "set_scale",
                    hash: 3460891853,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node3D",
                    "set_scale",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_scale(&self) -> Vector3 {
            type CallRet = Vector3;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node3D",
                    method_name: "get_scale",
                    hash: 3360562784,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node3D",
                    "get_scale",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Node3D {
        type Base = crate::classes::Node;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Node3D"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Node3D {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Node3D {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Node3D {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Node> for Node3D {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Node3D {}

    impl std::ops::Deref for Node3D {
        type Target = crate::classes::Node;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Node3D {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Node3D;
    use crate::classes::object::SignalsOfObject;

    impl WithSignals for Node3D {
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

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`PhysicsBody3D`][crate::classes::PhysicsBody3D].

use arbor_ffi as sys;

use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `PhysicsBody3D`.
    ///
    /// Inherits [`Node3D`][crate::classes::Node3D].
    ///
    /// Abstract base class for 3D physics bodies; cannot be constructed.
    #[derive(Debug)]
    #[repr(C)]
    pub struct PhysicsBody3D {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl PhysicsBody3D {
        pub fn set_collision_layer(&mut self, layer: u32) {
            type CallRet = ();
            type CallParams = (u32,);

            let args = (layer,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PhysicsBody3D",
                    method_name: "set_collision_layer",
                    hash: 1286410257,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PhysicsBody3D",
                    "set_collision_layer",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_collision_layer(&self) -> u32 {
            type CallRet = u32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PhysicsBody3D",
                    method_name: "get_collision_layer",
                    hash: 3905245792,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PhysicsBody3D",
                    "get_collision_layer",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_collision_mask(&mut self, mask: u32) {
            type CallRet = ();
            type CallParams = (u32,);

            let args = (mask,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PhysicsBody3D",
                    method_name: "set_collision_mask",
                    hash: 1286410258,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PhysicsBody3D",
                    "set_collision_mask",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_collision_mask(&self) -> u32 {
            type CallRet = u32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PhysicsBody3D",
                    method_name: "get_collision_mask",
                    hash: 3905245793,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PhysicsBody3D",
                    "get_collision_mask",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_collision_layer_value(&mut self, layer_number: i32, value: bool) {
            type CallRet = ();
            type CallParams = (i32, bool);

            let args = (layer_number, value);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PhysicsBody3D",
                    method_name: "set_collision_layer_value",
                    hash: 3023605689,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PhysicsBody3D",
                    "set_collision_layer_value",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_collision_layer_value(&self, layer_number: i32) -> bool {
            type CallRet = bool;
            type CallParams = (i32,);

            let args = (layer_number,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PhysicsBody3D",
                    method_name: "get_collision_layer_value",
                    hash: 1100442929,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PhysicsBody3D",
                    "get_collision_layer_value",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for PhysicsBody3D {
        type Base = crate::classes::Node3D;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"PhysicsBody3D"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for PhysicsBody3D {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for PhysicsBody3D {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Node3D> for PhysicsBody3D {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for PhysicsBody3D {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for PhysicsBody3D {}

    impl std::ops::Deref for PhysicsBody3D {
        type Target = crate::classes::Node3D;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for PhysicsBody3D {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::PhysicsBody3D;
    use crate::classes::object::SignalsOfObject;

    impl WithSignals for PhysicsBody3D {
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

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Node2D`][crate::classes::Node2D].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Node2D`.
    ///
    /// Inherits [`CanvasItem`][crate::classes::CanvasItem].
    #[derive(Debug)]
    #[repr(C)]
    pub struct Node2D {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Node2D {
        pub fn set_position(&mut self, position: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (position,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "set_position",
                    hash: 743155724,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "set_position",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_position(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "get_position",
                    hash: 3341600327,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "get_position",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_rotation(&mut self, radians: f32) {
            type CallRet = ();
            type CallParams = (f32,);

            let args = (radians,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "set_rotation",
                    hash: 373806690,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "set_rotation",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_rotation(&self) -> f32 {
            type CallRet = f32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "get_rotation",
                    hash: 1740695151,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "get_rotation",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_scale(&mut self, scale: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (scale,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "set_scale",
                    hash: 743155725,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "set_scale",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_scale(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "get_scale",
                    hash: 3341600328,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "get_scale",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn translate(&mut self, offset: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (offset,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node2D",
                    method_name: "translate",
                    hash: 743155726,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node2D",
                    "translate",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Node2D {
        type Base = crate::classes::CanvasItem;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Node2D"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Node2D {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Node2D {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Node2D {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for Node2D {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for Node2D {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Node2D {}

    impl std::ops::Deref for Node2D {
        type Target = crate::classes::CanvasItem;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Node2D {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Node2D;
    use crate::classes::canvas_item::SignalsOfCanvasItem;

    impl WithSignals for Node2D {
        type SignalCollection<C: WithSignals> = SignalsOfCanvasItem<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

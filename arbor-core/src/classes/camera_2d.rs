/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Camera2D`][crate::classes::Camera2D].
//!
//! Defines related flag and enum types.

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Camera2D`.
    ///
    /// Inherits [`Node2D`][crate::classes::Node2D].
    ///
    /// Related symbols:
    ///
    /// * [`camera_2d`][crate::classes::camera_2d]: sidecar module with related enum/flag types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Camera2D {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Camera2D {
        pub fn set_offset(&mut self, offset: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (offset,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "set_offset",
                    hash: 743155727,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "set_offset",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_offset(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "get_offset",
                    hash: 3341600329,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "get_offset",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_zoom(&mut self, zoom: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (zoom,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "set_zoom",
                    hash: 743155728,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "set_zoom",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_zoom(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "get_zoom",
                    hash: 3341600330,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "get_zoom",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_anchor_mode(&mut self, anchor_mode: AnchorMode) {
            type CallRet = ();
            type CallParams = (AnchorMode,);

            let args = (anchor_mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "set_anchor_mode",
                    hash: 2302511274,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "set_anchor_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_anchor_mode(&self) -> AnchorMode {
            type CallRet = AnchorMode;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "get_anchor_mode",
                    hash: 3362217310,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "get_anchor_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_limit(&mut self, margin: crate::global::Side, limit: i32) {
            type CallRet = ();
            type CallParams = (crate::global::Side, i32);

            let args = (margin, limit);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "set_limit",
                    hash: 2324196778,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "set_limit",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_limit(&self, margin: crate::global::Side) -> i32 {
            type CallRet = i32;
            type CallParams = (crate::global::Side,);

            let args = (margin,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "get_limit",
                    hash: 3979511119,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "get_limit",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn make_current(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "make_current",
                    hash: 3218959719,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "make_current",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_current(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "is_current",
                    hash: 36873699,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "is_current",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_enabled(&mut self, enabled: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (enabled,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "set_enabled",
                    hash: 2586408643,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "set_enabled",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_enabled(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "is_enabled",
                    hash: 36873700,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "is_enabled",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_process_callback(&mut self, mode: Camera2DProcessCallback) {
            type CallRet = ();
            type CallParams = (Camera2DProcessCallback,);

            let args = (mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "set_process_callback",
                    hash: 2302511275,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "set_process_callback",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_process_callback(&self) -> Camera2DProcessCallback {
            type CallRet = Camera2DProcessCallback;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Camera2D",
                    method_name: "get_process_callback",
                    hash: 3362217311,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Camera2D",
                    "get_process_callback",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Camera2D {
        type Base = crate::classes::Node2D;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Camera2D"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Camera2D {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Camera2D {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Camera2D {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Node2D> for Camera2D {}

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for Camera2D {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for Camera2D {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Camera2D {}

    impl std::ops::Deref for Camera2D {
        type Target = crate::classes::Node2D;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Camera2D {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Camera2D;
    use crate::classes::canvas_item::SignalsOfCanvasItem;

    impl WithSignals for Camera2D {
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

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct AnchorMode {
    ord: i32,
}

impl AnchorMode {
    pub const FIXED_TOP_LEFT: AnchorMode = AnchorMode { ord: 0 };

    pub const DRAG_CENTER: AnchorMode = AnchorMode { ord: 1 };
}

impl std::fmt::Debug for AnchorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::FIXED_TOP_LEFT => "FIXED_TOP_LEFT",
            Self::DRAG_CENTER => "DRAG_CENTER",
            _ => {
                f.debug_struct("AnchorMode").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for AnchorMode {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::FIXED_TOP_LEFT => "FIXED_TOP_LEFT",
            Self::DRAG_CENTER => "DRAG_CENTER",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for AnchorMode {
    type Via = i32;
}

impl crate::meta::ToArbor for AnchorMode {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for AnchorMode {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Camera2DProcessCallback {
    ord: i32,
}

impl Camera2DProcessCallback {
    pub const PHYSICS: Camera2DProcessCallback = Camera2DProcessCallback { ord: 0 };

    pub const IDLE: Camera2DProcessCallback = Camera2DProcessCallback { ord: 1 };
}

impl std::fmt::Debug for Camera2DProcessCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::PHYSICS => "PHYSICS",
            Self::IDLE => "IDLE",
            _ => {
                f.debug_struct("Camera2DProcessCallback")
                    .field("ord", &self.ord)
                    .finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for Camera2DProcessCallback {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::PHYSICS => "PHYSICS",
            Self::IDLE => "IDLE",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for Camera2DProcessCallback {
    type Via = i32;
}

impl crate::meta::ToArbor for Camera2DProcessCallback {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for Camera2DProcessCallback {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

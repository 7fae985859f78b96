/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`FontFile`][crate::classes::FontFile].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `FontFile`.
    ///
    /// Inherits [`Font`][crate::classes::Font].
    #[derive(Debug)]
    #[repr(C)]
    pub struct FontFile {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl FontFile {
        pub fn load_bitmap_font(&mut self, path: GString) -> crate::global::Error {
            type CallRet = crate::global::Error;
            type CallParams = (GString,);

            let args = (path,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "load_bitmap_font",
                    hash: 166001499,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "load_bitmap_font",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn load_dynamic_font(&mut self, path: GString) -> crate::global::Error {
            type CallRet = crate::global::Error;
            type CallParams = (GString,);

            let args = (path,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "load_dynamic_font",
                    hash: 166003217,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "load_dynamic_font",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_font_name(&mut self, name: GString) {
            type CallRet = ();
            type CallParams = (GString,);

            let args = (name,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "set_font_name",
                    hash: 827529717,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "set_font_name",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_antialiasing(&mut self, antialiasing: crate::global::FontAntialiasing) {
            type CallRet = ();
            type CallParams = (crate::global::FontAntialiasing,);

            let args = (antialiasing,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "set_antialiasing",
                    hash: 1669900,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "set_antialiasing",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_antialiasing(&self) -> crate::global::FontAntialiasing {
            type CallRet = crate::global::FontAntialiasing;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "get_antialiasing",
                    hash: 4262718924,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "get_antialiasing",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_fixed_size(&mut self, fixed_size: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (fixed_size,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "set_fixed_size",
                    hash: 1286410249,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "set_fixed_size",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_fixed_size(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "get_fixed_size",
                    hash: 3905245786,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "get_fixed_size",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_cache_count(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "get_cache_count",
                    hash: 3905245787,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "get_cache_count",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn clear_cache(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "clear_cache",
                    hash: 3218959716,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "clear_cache",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn remove_cache(&mut self, cache_index: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (cache_index,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "remove_cache",
                    hash: 1286410250,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "remove_cache",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_oversampling(&mut self, oversampling: f32) {
            type CallRet = ();
            type CallParams = (f32,);

            let args = (oversampling,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "set_oversampling",
                    hash: 373806689,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "set_oversampling",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_oversampling(&self) -> f32 {
            type CallRet = f32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "FontFile",
                    method_name: "get_oversampling",
                    hash: 1740695150,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "FontFile",
                    "get_oversampling",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for FontFile {
        type Base = crate::classes::Font;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"FontFile"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for FontFile {
        type Memory = crate::obj::bounds::MemRefCounted;
        type DynMemory = crate::obj::bounds::MemRefCounted;
    }

    impl crate::obj::EngineClass for FontFile {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for FontFile {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Font> for FontFile {}

    unsafe impl crate::obj::Inherits<crate::classes::Resource> for FontFile {}

    unsafe impl crate::obj::Inherits<crate::classes::RefCounted> for FontFile {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for FontFile {}

    impl std::ops::Deref for FontFile {
        type Target = crate::classes::Font;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for FontFile {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::FontFile;
    use crate::classes::resource::SignalsOfResource;

    impl WithSignals for FontFile {
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

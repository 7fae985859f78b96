/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Font`][crate::classes::Font].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Font`.
    ///
    /// Inherits [`Resource`][crate::classes::Resource].
    ///
    /// Abstract base class for fonts; cannot be constructed. See [`FontFile`][crate::classes::FontFile]
    /// for a concrete implementation.
    ///
    /// Related symbols:
    ///
    /// * [`font`][crate::classes::font]: sidecar module with related builder types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Font {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Font {
        #[inline]
        pub fn get_height(&self) -> f32 {
            self.get_height_ex().done()
        }

        #[inline]
        pub fn get_height_ex(&self) -> ExGetHeight<'_> {
            ExGetHeight::new(self)
        }

        pub(crate) fn get_height_full(&self, font_size: i64) -> f32 {
            type CallRet = f32;
            type CallParams = (i64,);

            let args = (font_size,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Font",
                    method_name: "get_height",
                    hash: 640077664,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Font",
                    "get_height",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_font_name(&self) -> GString {
            type CallRet = GString;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Font",
                    method_name: "get_font_name",
                    hash: 3118259104,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Font",
                    "get_font_name",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Font {
        type Base = crate::classes::Resource;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Font"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Font {
        type Memory = crate::obj::bounds::MemRefCounted;
        type DynMemory = crate::obj::bounds::MemRefCounted;
    }

    impl crate::obj::EngineClass for Font {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Resource> for Font {}

    unsafe impl crate::obj::Inherits<crate::classes::RefCounted> for Font {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Font {}

    impl std::ops::Deref for Font {
        type Target = crate::classes::Resource;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Font {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

/// Default-param extender for [`Font::get_height_ex`][super::Font::get_height_ex].
#[must_use]
pub struct ExGetHeight<'a> {
    surround_object: &'a re_export::Font,
    font_size: i64,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExGetHeight<'a> {
    fn new(surround_object: &'a re_export::Font) -> Self {
        Self {
            surround_object,
            font_size: 16i64,
        }
    }

    #[inline]
    pub fn font_size(self, value: i64) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            font_size: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) -> f32 {
        re_export::Font::get_height_full(self.surround_object, self.font_size)
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Font;
    use crate::classes::resource::SignalsOfResource;

    impl WithSignals for Font {
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

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`TreeItem`][crate::classes::TreeItem].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};
use crate::obj::Gd;

pub(super) mod re_export {
    use super::*;

    /// Arbor class `TreeItem`.
    ///
    /// Inherits [`Object`][crate::classes::Object].
    ///
    /// Items are created through [`Tree::create_item()`][crate::classes::Tree::create_item] or
    /// [`create_child()`][Self::create_child]; they are owned and freed by their `Tree`.
    ///
    /// Related symbols:
    ///
    /// * [`tree_item`][crate::classes::tree_item]: sidecar module with related builder types
    #[derive(Debug)]
    #[repr(C)]
    pub struct TreeItem {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl TreeItem {
        pub fn set_text(&mut self, column: i32, text: GString) {
            type CallRet = ();
            type CallParams = (i32, GString);

            let args = (column, text);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "set_text",
                    hash: 2285447958,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "set_text",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_text(&self, column: i32) -> GString {
            type CallRet = GString;
            type CallParams = (i32,);

            let args = (column,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "get_text",
                    hash: 3929349209,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "get_text",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn select(&mut self, column: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (column,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "select",
                    hash: 1286410253,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "select",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn deselect(&mut self, column: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (column,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "deselect",
                    hash: 1286410254,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "deselect",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_selected(&self, column: i32) -> bool {
            type CallRet = bool;
            type CallParams = (i32,);

            let args = (column,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "is_selected",
                    hash: 1100442927,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "is_selected",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_parent(&self) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "get_parent",
                    hash: 1514277249,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "get_parent",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_next(&self) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "get_next",
                    hash: 1514277250,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "get_next",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_first_child(&self) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "get_first_child",
                    hash: 1514277251,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "get_first_child",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn create_child(&mut self) -> Option<Gd<TreeItem>> {
            self.create_child_ex().done()
        }

        #[inline]
        pub fn create_child_ex(&mut self) -> ExCreateChild<'_> {
            ExCreateChild::new(self)
        }

        pub(crate) fn create_child_full(&mut self, index: i32) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = (i32,);

            let args = (index,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "create_child",
                    hash: 528467047,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "create_child",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn set_custom_bg_color(&mut self, column: i32, color: Color) {
            self.set_custom_bg_color_ex(column, color).done()
        }

        #[inline]
        pub fn set_custom_bg_color_ex(&mut self, column: i32, color: Color) -> ExSetCustomBgColor<'_> {
            ExSetCustomBgColor::new(self, column, color)
        }

        pub(crate) fn set_custom_bg_color_full(
            &mut self,
            column: i32,
            color: Color,
            just_outline: bool,
        ) {
            type CallRet = ();
            type CallParams = (i32, Color, bool);

            let args = (column, color, just_outline);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "set_custom_bg_color",
                    hash: 894174025,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "set_custom_bg_color",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_custom_bg_color(&self, column: i32) -> Color {
            type CallRet = Color;
            type CallParams = (i32,);

            let args = (column,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "TreeItem",
                    method_name: "get_custom_bg_color",
                    hash: 3843376101,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "TreeItem",
                    "get_custom_bg_color",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for TreeItem {
        type Base = crate::classes::Object;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"TreeItem"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for TreeItem {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for TreeItem {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for TreeItem {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Object> for TreeItem {}

    impl std::ops::Deref for TreeItem {
        type Target = crate::classes::Object;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for TreeItem {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

/// Default-param extender for [`TreeItem::create_child_ex`][super::TreeItem::create_child_ex].
#[must_use]
pub struct ExCreateChild<'a> {
    surround_object: &'a mut re_export::TreeItem,
    index: i32,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExCreateChild<'a> {
    fn new(surround_object: &'a mut re_export::TreeItem) -> Self {
        Self {
            surround_object,
            index: -1i32,
        }
    }

    #[inline]
    pub fn index(self, value: i32) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            index: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) -> Option<Gd<re_export::TreeItem>> {
        re_export::TreeItem::create_child_full(self.surround_object, self.index)
    }
}

/// Default-param extender for [`TreeItem::set_custom_bg_color_ex`][super::TreeItem::set_custom_bg_color_ex].
#[must_use]
pub struct ExSetCustomBgColor<'a> {
    surround_object: &'a mut re_export::TreeItem,
    column: i32,
    color: Color,
    just_outline: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExSetCustomBgColor<'a> {
    fn new(surround_object: &'a mut re_export::TreeItem, column: i32, color: Color) -> Self {
        Self {
            surround_object,
            column,
            color,
            just_outline: false,
        }
    }

    #[inline]
    pub fn just_outline(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            just_outline: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::TreeItem::set_custom_bg_color_full(
            self.surround_object,
            self.column,
            self.color,
            self.just_outline,
        )
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::TreeItem;
    use crate::classes::object::SignalsOfObject;

    impl WithSignals for TreeItem {
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

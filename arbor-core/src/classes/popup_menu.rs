/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`PopupMenu`][crate::classes::PopupMenu].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `PopupMenu`.
    ///
    /// Inherits [`Popup`][crate::classes::Popup].
    ///
    /// Related symbols:
    ///
    /// * [`popup_menu`][crate::classes::popup_menu]: sidecar module with related builder types
    #[derive(Debug)]
    #[repr(C)]
    pub struct PopupMenu {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl PopupMenu {
        #[inline]
        pub fn add_item(&mut self, label: GString) {
            self.add_item_ex(label).done()
        }

        #[inline]
        pub fn add_item_ex(&mut self, label: GString) -> ExAddItem<'_> {
            ExAddItem::new(self, label)
        }

        pub(crate) fn add_item_full(&mut self, label: GString, id: i32, accel: crate::global::Key) {
            type CallRet = ();
            type CallParams = (GString, i32, crate::global::Key);

            let args = (label, id, accel);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "add_item",
                    hash: 3674230041,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "add_item",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn add_check_item(&mut self, label: GString) {
            self.add_check_item_ex(label).done()
        }

        #[inline]
        pub fn add_check_item_ex(&mut self, label: GString) -> ExAddCheckItem<'_> {
            ExAddCheckItem::new(self, label)
        }

        pub(crate) fn add_check_item_full(
            &mut self,
            label: GString,
            id: i32,
            accel: crate::global::Key,
        ) {
            type CallRet = ();
            type CallParams = (GString, i32, crate::global::Key);

            let args = (label, id, accel);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "add_check_item",
                    hash: 3674230042,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "add_check_item",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn add_separator(&mut self) {
            self.add_separator_ex().done()
        }

        #[inline]
        pub fn add_separator_ex(&mut self) -> ExAddSeparator<'_> {
            ExAddSeparator::new(self)
        }

        pub(crate) fn add_separator_full(&mut self, label: GString, id: i32) {
            type CallRet = ();
            type CallParams = (GString, i32);

            let args = (label, id);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "add_separator",
                    hash: 2266703459,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "add_separator",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_item_text(&mut self, index: i32, text: GString) {
            type CallRet = ();
            type CallParams = (i32, GString);

            let args = (index, text);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "set_item_text",
                    hash: 2285447959,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "set_item_text",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_item_text(&self, index: i32) -> GString {
            type CallRet = GString;
            type CallParams = (i32,);

            let args = (index,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "get_item_text",
                    hash: 3929349210,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "get_item_text",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_item_checked(&mut self, index: i32, checked: bool) {
            type CallRet = ();
            type CallParams = (i32, bool);

            let args = (index, checked);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "set_item_checked",
                    hash: 3023605688,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "set_item_checked",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_item_checked(&self, index: i32) -> bool {
            type CallRet = bool;
            type CallParams = (i32,);

            let args = (index,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "is_item_checked",
                    hash: 1100442928,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "is_item_checked",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_item_count(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "get_item_count",
                    hash: 3905245791,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "get_item_count",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_item_count(&mut self, count: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (count,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "set_item_count",
                    hash: 1286410255,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "set_item_count",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn remove_item(&mut self, index: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (index,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "remove_item",
                    hash: 1286410256,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "remove_item",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn clear(&mut self) {
            self.clear_ex().done()
        }

        #[inline]
        pub fn clear_ex(&mut self) -> ExClear<'_> {
            ExClear::new(self)
        }

        pub(crate) fn clear_full(&mut self, free_submenus: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (free_submenus,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "clear",
                    hash: 3218959723,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "clear",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_item_id(&self, index: i32) -> i32 {
            type CallRet = i32;
            type CallParams = (i32,);

            let args = (index,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "get_item_id",
                    hash: 3744713108,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "get_item_id",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_item_index(&self, id: i32) -> i32 {
            type CallRet = i32;
            type CallParams = (i32,);

            let args = (id,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "PopupMenu",
                    method_name: "get_item_index",
                    hash: 3744713109,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "PopupMenu",
                    "get_item_index",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for PopupMenu {
        type Base = crate::classes::Popup;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"PopupMenu"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for PopupMenu {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for PopupMenu {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for PopupMenu {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Popup> for PopupMenu {}

    unsafe impl crate::obj::Inherits<crate::classes::Control> for PopupMenu {}

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for PopupMenu {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for PopupMenu {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for PopupMenu {}

    impl std::ops::Deref for PopupMenu {
        type Target = crate::classes::Popup;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for PopupMenu {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

/// Default-param extender for [`PopupMenu::add_item_ex`][super::PopupMenu::add_item_ex].
#[must_use]
pub struct ExAddItem<'a> {
    surround_object: &'a mut re_export::PopupMenu,
    label: GString,
    id: i32,
    accel: crate::global::Key,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExAddItem<'a> {
    fn new(surround_object: &'a mut re_export::PopupMenu, label: GString) -> Self {
        Self {
            surround_object,
            label,
            id: -1i32,
            accel: crate::global::Key::NONE,
        }
    }

    #[inline]
    pub fn id(self, value: i32) -> Self {
        // Currently not testing whether the parameter was already set
        Self { id: value, ..self }
    }

    #[inline]
    pub fn accel(self, value: crate::global::Key) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            accel: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::PopupMenu::add_item_full(self.surround_object, self.label, self.id, self.accel)
    }
}

/// Default-param extender for [`PopupMenu::add_check_item_ex`][super::PopupMenu::add_check_item_ex].
#[must_use]
pub struct ExAddCheckItem<'a> {
    surround_object: &'a mut re_export::PopupMenu,
    label: GString,
    id: i32,
    accel: crate::global::Key,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExAddCheckItem<'a> {
    fn new(surround_object: &'a mut re_export::PopupMenu, label: GString) -> Self {
        Self {
            surround_object,
            label,
            id: -1i32,
            accel: crate::global::Key::NONE,
        }
    }

    #[inline]
    pub fn id(self, value: i32) -> Self {
        // Currently not testing whether the parameter was already set
        Self { id: value, ..self }
    }

    #[inline]
    pub fn accel(self, value: crate::global::Key) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            accel: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::PopupMenu::add_check_item_full(
            self.surround_object,
            self.label,
            self.id,
            self.accel,
        )
    }
}

/// Default-param extender for [`PopupMenu::add_separator_ex`][super::PopupMenu::add_separator_ex].
#[must_use]
pub struct ExAddSeparator<'a> {
    surround_object: &'a mut re_export::PopupMenu,
    label: GString,
    id: i32,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExAddSeparator<'a> {
    fn new(surround_object: &'a mut re_export::PopupMenu) -> Self {
        Self {
            surround_object,
            label: GString::new(),
            id: -1i32,
        }
    }

    #[inline]
    pub fn label(self, value: GString) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            label: value,
            ..self
        }
    }

    #[inline]
    pub fn id(self, value: i32) -> Self {
        // Currently not testing whether the parameter was already set
        Self { id: value, ..self }
    }

    #[inline]
    pub fn done(self) {
        re_export::PopupMenu::add_separator_full(self.surround_object, self.label, self.id)
    }
}

/// Default-param extender for [`PopupMenu::clear_ex`][super::PopupMenu::clear_ex].
#[must_use]
pub struct ExClear<'a> {
    surround_object: &'a mut re_export::PopupMenu,
    free_submenus: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExClear<'a> {
    fn new(surround_object: &'a mut re_export::PopupMenu) -> Self {
        Self {
            surround_object,
            free_submenus: false,
        }
    }

    #[inline]
    pub fn free_submenus(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            free_submenus: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::PopupMenu::clear_full(self.surround_object, self.free_submenus)
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::PopupMenu;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`PopupMenu`][crate::classes::PopupMenu] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfPopupMenu<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfPopupMenu<C> {
        /// Signature: `(id: i64)`
        pub fn id_pressed(&mut self) -> SigIdPressed<C> {
            SigIdPressed {
                typed: TypedSignal::extract(&mut self.__internal_obj, "id_pressed"),
            }
        }

        /// Signature: `(index: i64)`
        pub fn index_pressed(&mut self) -> SigIndexPressed<C> {
            SigIndexPressed {
                typed: TypedSignal::extract(&mut self.__internal_obj, "index_pressed"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfPopupMenu<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<PopupMenu as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = PopupMenu;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfPopupMenu<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = PopupMenu;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigIdPressed<C> = TypedSignal<C, (i64,)>;

    pub struct SigIdPressed<C: WithSignals> {
        typed: TypedSigIdPressed<C>,
    }

    impl<C: WithSignals> SigIdPressed<C> {
        pub fn emit(&mut self, id: i64) {
            self.typed.emit_tuple((id,));
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigIdPressed<C> {
        type Target = TypedSigIdPressed<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigIdPressed<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigIndexPressed<C> = TypedSignal<C, (i64,)>;

    pub struct SigIndexPressed<C: WithSignals> {
        typed: TypedSigIndexPressed<C>,
    }

    impl<C: WithSignals> SigIndexPressed<C> {
        pub fn emit(&mut self, index: i64) {
            self.typed.emit_tuple((index,));
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigIndexPressed<C> {
        type Target = TypedSigIndexPressed<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigIndexPressed<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for PopupMenu {
        type SignalCollection<C: WithSignals> = SignalsOfPopupMenu<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Tree`][crate::classes::Tree].
//!
//! Defines related flag and enum types.

use arbor_ffi as sys;

use crate::builtin::*;
use crate::classes::TreeItem;
use crate::meta::{ClassName, Signature};
use crate::obj::Gd;

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Tree`.
    ///
    /// Inherits [`Control`][crate::classes::Control].
    ///
    /// Related symbols:
    ///
    /// * [`tree`][crate::classes::tree]: sidecar module with related enum/flag types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Tree {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Tree {
        pub fn set_columns(&mut self, amount: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (amount,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "set_columns",
                    hash: 1286410252,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "set_columns",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_columns(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_columns",
                    hash: 3905245789,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_columns",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_select_mode(&mut self, mode: SelectMode) {
            type CallRet = ();
            type CallParams = (SelectMode,);

            let args = (mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "set_select_mode",
                    hash: 2302511278,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "set_select_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_select_mode(&self) -> SelectMode {
            type CallRet = SelectMode;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_select_mode",
                    hash: 3362217314,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_select_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn create_item(&mut self) -> Option<Gd<TreeItem>> {
            self.create_item_ex().done()
        }

        #[inline]
        pub fn create_item_ex(&mut self) -> ExCreateItem<'_> {
            ExCreateItem::new(self)
        }

        pub(crate) fn create_item_full(
            &mut self,
            parent: Option<Gd<TreeItem>>,
            index: i32,
        ) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = (Option<Gd<TreeItem>>, i32);

            let args = (parent, index);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "create_item",
                    hash: 528467046,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "create_item",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_root(&self) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_root",
                    hash: 1514277247,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_root",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_selected(&self) -> Option<Gd<TreeItem>> {
            type CallRet = Option<Gd<TreeItem>>;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_selected",
                    hash: 1514277248,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_selected",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_selected_column(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_selected_column",
                    hash: 3905245790,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_selected_column",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn clear(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "clear",
                    hash: 3218959722,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "clear",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_column_title(&mut self, column: i32, title: GString) {
            type CallRet = ();
            type CallParams = (i32, GString);

            let args = (column, title);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "set_column_title",
                    hash: 2285447957,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "set_column_title",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_column_title(&self, column: i32) -> GString {
            type CallRet = GString;
            type CallParams = (i32,);

            let args = (column,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_column_title",
                    hash: 3929349208,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_column_title",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn get_item_area_rect(&self, item: Gd<TreeItem>) -> Rect2 {
            self.get_item_area_rect_ex(item).done()
        }

        #[inline]
        pub fn get_item_area_rect_ex(&self, item: Gd<TreeItem>) -> ExGetItemAreaRect<'_> {
            ExGetItemAreaRect::new(self, item)
        }

        pub(crate) fn get_item_area_rect_full(
            &self,
            item: Gd<TreeItem>,
            column: i32,
            button_index: i32,
        ) -> Rect2 {
            type CallRet = Rect2;
            type CallParams = (Gd<TreeItem>, i32, i32);

            let args = (item, column, button_index);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Tree",
                    method_name: "get_item_area_rect",
                    hash: 47544404,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Tree",
                    "get_item_area_rect",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Tree {
        type Base = crate::classes::Control;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Tree"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Tree {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Tree {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Tree {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Control> for Tree {}

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for Tree {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for Tree {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Tree {}

    impl std::ops::Deref for Tree {
        type Target = crate::classes::Control;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Tree {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

/// Default-param extender for [`Tree::create_item_ex`][super::Tree::create_item_ex].
#[must_use]
pub struct ExCreateItem<'a> {
    surround_object: &'a mut re_export::Tree,
    parent: Option<Gd<TreeItem>>,
    index: i32,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExCreateItem<'a> {
    fn new(surround_object: &'a mut re_export::Tree) -> Self {
        Self {
            surround_object,
            parent: None,
            index: -1i32,
        }
    }

    #[inline]
    pub fn parent(self, value: Gd<TreeItem>) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            parent: Some(value),
            ..self
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
    pub fn done(self) -> Option<Gd<TreeItem>> {
        re_export::Tree::create_item_full(self.surround_object, self.parent, self.index)
    }
}

/// Default-param extender for [`Tree::get_item_area_rect_ex`][super::Tree::get_item_area_rect_ex].
#[must_use]
pub struct ExGetItemAreaRect<'a> {
    surround_object: &'a re_export::Tree,
    item: Gd<TreeItem>,
    column: i32,
    button_index: i32,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExGetItemAreaRect<'a> {
    fn new(surround_object: &'a re_export::Tree, item: Gd<TreeItem>) -> Self {
        Self {
            surround_object,
            item,
            column: -1i32,
            button_index: -1i32,
        }
    }

    #[inline]
    pub fn column(self, value: i32) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            column: value,
            ..self
        }
    }

    #[inline]
    pub fn button_index(self, value: i32) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            button_index: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) -> Rect2 {
        re_export::Tree::get_item_area_rect_full(
            self.surround_object,
            self.item,
            self.column,
            self.button_index,
        )
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SelectMode {
    ord: i32,
}

impl SelectMode {
    pub const SINGLE: SelectMode = SelectMode { ord: 0 };

    pub const ROW: SelectMode = SelectMode { ord: 1 };

    pub const MULTI: SelectMode = SelectMode { ord: 2 };
}

impl std::fmt::Debug for SelectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::SINGLE => "SINGLE",
            Self::ROW => "ROW",
            Self::MULTI => "MULTI",
            _ => {
                f.debug_struct("SelectMode").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for SelectMode {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1 | 2) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::SINGLE => "SINGLE",
            Self::ROW => "ROW",
            Self::MULTI => "MULTI",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for SelectMode {
    type Via = i32;
}

impl crate::meta::ToArbor for SelectMode {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for SelectMode {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

pub use signals::*;

mod signals {
    use crate::builtin::Vector2;
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Tree;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`Tree`][crate::classes::Tree] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfTree<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfTree<C> {
        /// Signature: `()`
        pub fn item_selected(&mut self) -> SigItemSelected<C> {
            SigItemSelected {
                typed: TypedSignal::extract(&mut self.__internal_obj, "item_selected"),
            }
        }

        /// Signature: `()`
        pub fn item_activated(&mut self) -> SigItemActivated<C> {
            SigItemActivated {
                typed: TypedSignal::extract(&mut self.__internal_obj, "item_activated"),
            }
        }

        /// Signature: `()`
        pub fn cell_selected(&mut self) -> SigCellSelected<C> {
            SigCellSelected {
                typed: TypedSignal::extract(&mut self.__internal_obj, "cell_selected"),
            }
        }

        /// Signature: `(column: i64, mouse_button_index: i64)`
        pub fn column_title_clicked(&mut self) -> SigColumnTitleClicked<C> {
            SigColumnTitleClicked {
                typed: TypedSignal::extract(&mut self.__internal_obj, "column_title_clicked"),
            }
        }

        /// Signature: `(mouse_position: Vector2, mouse_button_index: i64)`
        pub fn item_mouse_selected(&mut self) -> SigItemMouseSelected<C> {
            SigItemMouseSelected {
                typed: TypedSignal::extract(&mut self.__internal_obj, "item_mouse_selected"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfTree<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<Tree as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = Tree;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfTree<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = Tree;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigItemSelected<C> = TypedSignal<C, ()>;

    pub struct SigItemSelected<C: WithSignals> {
        typed: TypedSigItemSelected<C>,
    }

    impl<C: WithSignals> SigItemSelected<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigItemSelected<C> {
        type Target = TypedSigItemSelected<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigItemSelected<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigItemActivated<C> = TypedSignal<C, ()>;

    pub struct SigItemActivated<C: WithSignals> {
        typed: TypedSigItemActivated<C>,
    }

    impl<C: WithSignals> SigItemActivated<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigItemActivated<C> {
        type Target = TypedSigItemActivated<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigItemActivated<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigCellSelected<C> = TypedSignal<C, ()>;

    pub struct SigCellSelected<C: WithSignals> {
        typed: TypedSigCellSelected<C>,
    }

    impl<C: WithSignals> SigCellSelected<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigCellSelected<C> {
        type Target = TypedSigCellSelected<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigCellSelected<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigColumnTitleClicked<C> = TypedSignal<C, (i64, i64)>;

    pub struct SigColumnTitleClicked<C: WithSignals> {
        typed: TypedSigColumnTitleClicked<C>,
    }

    impl<C: WithSignals> SigColumnTitleClicked<C> {
        pub fn emit(&mut self, column: i64, mouse_button_index: i64) {
            self.typed.emit_tuple((column, mouse_button_index));
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigColumnTitleClicked<C> {
        type Target = TypedSigColumnTitleClicked<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigColumnTitleClicked<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigItemMouseSelected<C> = TypedSignal<C, (Vector2, i64)>;

    pub struct SigItemMouseSelected<C: WithSignals> {
        typed: TypedSigItemMouseSelected<C>,
    }

    impl<C: WithSignals> SigItemMouseSelected<C> {
        pub fn emit(&mut self, mouse_position: Vector2, mouse_button_index: i64) {
            self.typed.emit_tuple((mouse_position, mouse_button_index));
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigItemMouseSelected<C> {
        type Target = TypedSigItemMouseSelected<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigItemMouseSelected<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for Tree {
        type SignalCollection<C: WithSignals> = SignalsOfTree<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

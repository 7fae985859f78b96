/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Node`][crate::classes::Node].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};
use crate::obj::Gd;

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Node`.
    ///
    /// Inherits [`Object`][crate::classes::Object].
    ///
    /// Base class for everything that lives in the scene tree. Nodes are manually managed; use
    /// [`queue_free()`][Self::queue_free] or [`Gd::free()`][crate::obj::Gd::free] to destroy them.
    ///
    /// Related symbols:
    ///
    /// * [`node`][crate::classes::node]: sidecar module with related builder types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Node {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Node {
        #[inline]
        pub fn add_child(&mut self, node: Gd<Node>) {
            self.add_child_ex(node).done()
        }

        #[inline]
        pub fn add_child_ex(&mut self, node: Gd<Node>) -> ExAddChild<'_> {
            ExAddChild::new(self, node)
        }

        pub(crate) fn add_child_full(&mut self, node: Gd<Node>, force_readable_name: bool) {
            type CallRet = ();
            type CallParams = (Gd<Node>, bool);

            let args = (node, force_readable_name);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "add_child",
                    hash: 3863233950,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "add_child",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn remove_child(&mut self, node: Gd<Node>) {
            type CallRet = ();
            type CallParams = (Gd<Node>,);

            let args = (node,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "remove_child",
                    hash: 1078189570,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "remove_child",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn get_child_count(&self) -> i32 {
            self.get_child_count_ex().done()
        }

        #[inline]
        pub fn get_child_count_ex(&self) -> ExGetChildCount<'_> {
            ExGetChildCount::new(self)
        }

        pub(crate) fn get_child_count_full(&self, include_internal: bool) -> i32 {
            type CallRet = i32;
            type CallParams = (bool,);

            let args = (include_internal,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "get_child_count",
                    hash: 894402041,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "get_child_count",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn get_child(&self, idx: i32) -> Option<Gd<Node>> {
            self.get_child_ex(idx).done()
        }

        #[inline]
        pub fn get_child_ex(&self, idx: i32) -> ExGetChild<'_> {
            ExGetChild::new(self, idx)
        }

        pub(crate) fn get_child_full(&self, idx: i32, include_internal: bool) -> Option<Gd<Node>> {
            type CallRet = Option<Gd<Node>>;
            type CallParams = (i32, bool);

            let args = (idx, include_internal);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "get_child",
                    hash: 541365242,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "get_child",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_name(&mut self, name: GString) {
            type CallRet = ();
            type CallParams = (GString,);

            let args = (name,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "set_name",
                    hash: 827249177,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "set_name",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_name(&self) -> StringName {
            type CallRet = StringName;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "get_name",
                    hash: 2002593661,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "get_name",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn queue_free(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "queue_free",
                    hash: 3218959716,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "queue_free",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_parent(&self) -> Option<Gd<Node>> {
            type CallRet = Option<Gd<Node>>;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "get_parent",
                    hash: 3160264692,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "get_parent",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_inside_tree(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Node",
                    method_name: "is_inside_tree",
                    hash: 36873697,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Node",
                    "is_inside_tree",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Node {
        type Base = crate::classes::Object;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Node"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Node {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Node {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Node {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Node {}

    impl std::ops::Deref for Node {
        type Target = crate::classes::Object;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Node {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Node;
    use crate::classes::object::SignalsOfObject;

    impl WithSignals for Node {
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

/// Default-param extender for [`Node::add_child_ex`][super::Node::add_child_ex].
#[must_use]
pub struct ExAddChild<'a> {
    surround_object: &'a mut re_export::Node,
    node: Gd<re_export::Node>,
    force_readable_name: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExAddChild<'a> {
    fn new(surround_object: &'a mut re_export::Node, node: Gd<re_export::Node>) -> Self {
        Self {
            surround_object,
            node,
            force_readable_name: false,
        }
    }

    #[inline]
    pub fn force_readable_name(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            force_readable_name: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::Node::add_child_full(self.surround_object, self.node, self.force_readable_name)
    }
}

/// Default-param extender for [`Node::get_child_count_ex`][super::Node::get_child_count_ex].
#[must_use]
pub struct ExGetChildCount<'a> {
    surround_object: &'a re_export::Node,
    include_internal: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExGetChildCount<'a> {
    fn new(surround_object: &'a re_export::Node) -> Self {
        Self {
            surround_object,
            include_internal: false,
        }
    }

    #[inline]
    pub fn include_internal(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            include_internal: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) -> i32 {
        re_export::Node::get_child_count_full(self.surround_object, self.include_internal)
    }
}

/// Default-param extender for [`Node::get_child_ex`][super::Node::get_child_ex].
#[must_use]
pub struct ExGetChild<'a> {
    surround_object: &'a re_export::Node,
    idx: i32,
    include_internal: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExGetChild<'a> {
    fn new(surround_object: &'a re_export::Node, idx: i32) -> Self {
        Self {
            surround_object,
            idx,
            include_internal: false,
        }
    }

    #[inline]
    pub fn include_internal(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            include_internal: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) -> Option<Gd<re_export::Node>> {
        re_export::Node::get_child_full(self.surround_object, self.idx, self.include_internal)
    }
}

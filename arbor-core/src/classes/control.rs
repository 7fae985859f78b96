/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Control`][crate::classes::Control].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Control`.
    ///
    /// Inherits [`CanvasItem`][crate::classes::CanvasItem].
    ///
    /// Related symbols:
    ///
    /// * [`control`][crate::classes::control]: sidecar module with related builder types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Control {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Control {
        #[inline]
        pub fn set_size(&mut self, size: Vector2) {
            self.set_size_ex(size).done()
        }

        #[inline]
        pub fn set_size_ex(&mut self, size: Vector2) -> ExSetSize<'_> {
            ExSetSize::new(self, size)
        }

        pub(crate) fn set_size_full(&mut self, size: Vector2, keep_offsets: bool) {
            type CallRet = ();
            type CallParams = (Vector2, bool);

            let args = (size, keep_offsets);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Control",
                    method_name: "set_size",
                    hash: 4155559372,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Control",
                    "set_size",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_size(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Control",
                    method_name: "get_size",
                    hash: 3341600333,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Control",
                    "get_size",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn set_position(&mut self, position: Vector2) {
            self.set_position_ex(position).done()
        }

        #[inline]
        pub fn set_position_ex(&mut self, position: Vector2) -> ExSetPosition<'_> {
            ExSetPosition::new(self, position)
        }

        pub(crate) fn set_position_full(&mut self, position: Vector2, keep_offsets: bool) {
            type CallRet = ();
            type CallParams = (Vector2, bool);

            let args = (position, keep_offsets);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Control",
                    method_name: "set_position",
                    hash: 4155559373,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Control",
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
                    class_name: "Control",
                    method_name: "get_position",
                    hash: 3341600334,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Control",
                    "get_position",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn grab_focus(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Control",
                    method_name: "grab_focus",
                    hash: 3218959721,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Control",
                    "grab_focus",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn has_focus(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Control",
                    method_name: "has_focus",
                    hash: 36873703,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Control",
                    "has_focus",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Control {
        type Base = crate::classes::CanvasItem;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Control"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Control {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Control {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Control {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for Control {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for Control {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Control {}

    impl std::ops::Deref for Control {
        type Target = crate::classes::CanvasItem;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Control {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Control;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`Control`][crate::classes::Control] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfControl<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfControl<C> {
        /// Signature: `()`
        pub fn resized(&mut self) -> SigResized<C> {
            SigResized {
                typed: TypedSignal::extract(&mut self.__internal_obj, "resized"),
            }
        }

        /// Signature: `()`
        pub fn focus_entered(&mut self) -> SigFocusEntered<C> {
            SigFocusEntered {
                typed: TypedSignal::extract(&mut self.__internal_obj, "focus_entered"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfControl<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<Control as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = Control;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfControl<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = Control;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigResized<C> = TypedSignal<C, ()>;

    pub struct SigResized<C: WithSignals> {
        typed: TypedSigResized<C>,
    }

    impl<C: WithSignals> SigResized<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigResized<C> {
        type Target = TypedSigResized<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigResized<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigFocusEntered<C> = TypedSignal<C, ()>;

    pub struct SigFocusEntered<C: WithSignals> {
        typed: TypedSigFocusEntered<C>,
    }

    impl<C: WithSignals> SigFocusEntered<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigFocusEntered<C> {
        type Target = TypedSigFocusEntered<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigFocusEntered<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for Control {
        type SignalCollection<C: WithSignals> = SignalsOfControl<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

/// Default-param extender for [`Control::set_size_ex`][super::Control::set_size_ex].
#[must_use]
pub struct ExSetSize<'a> {
    surround_object: &'a mut re_export::Control,
    size: Vector2,
    keep_offsets: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExSetSize<'a> {
    fn new(surround_object: &'a mut re_export::Control, size: Vector2) -> Self {
        Self {
            surround_object,
            size,
            keep_offsets: false,
        }
    }

    #[inline]
    pub fn keep_offsets(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            keep_offsets: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::Control::set_size_full(self.surround_object, self.size, self.keep_offsets)
    }
}

/// Default-param extender for [`Control::set_position_ex`][super::Control::set_position_ex].
#[must_use]
pub struct ExSetPosition<'a> {
    surround_object: &'a mut re_export::Control,
    position: Vector2,
    keep_offsets: bool,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExSetPosition<'a> {
    fn new(surround_object: &'a mut re_export::Control, position: Vector2) -> Self {
        Self {
            surround_object,
            position,
            keep_offsets: false,
        }
    }

    #[inline]
    pub fn keep_offsets(self, value: bool) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            keep_offsets: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::Control::set_position_full(
            self.surround_object,
            self.position,
            self.keep_offsets,
        )
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`CanvasItem`][crate::classes::CanvasItem].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `CanvasItem`.
    ///
    /// Inherits [`Node`][crate::classes::Node].
    ///
    /// Abstract base class for everything that draws in 2D; cannot be constructed.
    ///
    /// Related symbols:
    ///
    /// * [`canvas_item`][crate::classes::canvas_item]: sidecar module with related signal types
    #[derive(Debug)]
    #[repr(C)]
    pub struct CanvasItem {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl CanvasItem {
        pub fn set_visible(&mut self, visible: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (visible,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CanvasItem",
                    method_name: "set_visible",
                    hash: 2586408642,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CanvasItem",
                    "set_visible",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_visible(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CanvasItem",
                    method_name: "is_visible",
                    hash: 36873698,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CanvasItem",
                    "is_visible",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn show(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CanvasItem",
                    method_name: "show",
                    hash: 3218959717,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CanvasItem",
                    "show",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn hide(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CanvasItem",
                    method_name: "hide",
                    hash: 3218959718,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CanvasItem",
                    "hide",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_modulate(&mut self, modulate: Color) {
            type CallRet = ();
            type CallParams = (Color,);

            let args = (modulate,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CanvasItem",
                    method_name: "set_modulate",
                    hash: 2920490490,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CanvasItem",
                    "set_modulate",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_modulate(&self) -> Color {
            type CallRet = Color;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CanvasItem",
                    method_name: "get_modulate",
                    hash: 3444240500,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CanvasItem",
                    "get_modulate",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for CanvasItem {
        type Base = crate::classes::Node;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"CanvasItem"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for CanvasItem {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for CanvasItem {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Node> for CanvasItem {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for CanvasItem {}

    impl std::ops::Deref for CanvasItem {
        type Target = crate::classes::Node;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for CanvasItem {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::CanvasItem;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`CanvasItem`][crate::classes::CanvasItem] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfCanvasItem<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfCanvasItem<C> {
        /// Signature: `()`
        pub fn visibility_changed(&mut self) -> SigVisibilityChanged<C> {
            SigVisibilityChanged {
                typed: TypedSignal::extract(&mut self.__internal_obj, "visibility_changed"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfCanvasItem<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<CanvasItem as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = CanvasItem;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfCanvasItem<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = CanvasItem;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigVisibilityChanged<C> = TypedSignal<C, ()>;

    pub struct SigVisibilityChanged<C: WithSignals> {
        typed: TypedSigVisibilityChanged<C>,
    }

    impl<C: WithSignals> SigVisibilityChanged<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigVisibilityChanged<C> {
        type Target = TypedSigVisibilityChanged<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigVisibilityChanged<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for CanvasItem {
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

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Popup`][crate::classes::Popup].

use arbor_ffi as sys;

use crate::meta::ClassName;

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Popup`.
    ///
    /// Inherits [`Control`][crate::classes::Control].
    #[derive(Debug)]
    #[repr(C)]
    pub struct Popup {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl crate::obj::ArborClass for Popup {
        type Base = crate::classes::Control;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Popup"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for Popup {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for Popup {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Popup {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Control> for Popup {}

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for Popup {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for Popup {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for Popup {}

    impl std::ops::Deref for Popup {
        type Target = crate::classes::Control;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for Popup {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Popup;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`Popup`][crate::classes::Popup] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfPopup<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfPopup<C> {
        /// Signature: `()`
        pub fn popup_hide(&mut self) -> SigPopupHide<C> {
            SigPopupHide {
                typed: TypedSignal::extract(&mut self.__internal_obj, "popup_hide"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfPopup<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<Popup as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = Popup;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfPopup<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = Popup;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigPopupHide<C> = TypedSignal<C, ()>;

    pub struct SigPopupHide<C: WithSignals> {
        typed: TypedSigPopupHide<C>,
    }

    impl<C: WithSignals> SigPopupHide<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigPopupHide<C> {
        type Target = TypedSigPopupHide<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigPopupHide<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for Popup {
        type SignalCollection<C: WithSignals> = SignalsOfPopup<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

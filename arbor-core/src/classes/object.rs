/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`Object`][crate::classes::Object].

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::error::CallError;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `Object`.
    ///
    /// This is the base class for all other classes at the root of the hierarchy. Every instance
    /// of `Object` can be stored in a [`Gd`][crate::obj::Gd] smart pointer.
    ///
    /// Related symbols:
    ///
    /// * [`object`][crate::classes::object]: sidecar module with related builder types
    #[derive(Debug)]
    #[repr(C)]
    pub struct Object {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl Object {
        #[inline]
        pub fn connect(&mut self, signal: StringName, callable: Callable) -> crate::global::Error {
            self.connect_ex(signal, callable).done()
        }

        #[inline]
        pub fn connect_ex(&mut self, signal: StringName, callable: Callable) -> ExConnect<'_> {
            ExConnect::new(self, signal, callable)
        }

        pub(crate) fn connect_full(
            &mut self,
            signal: StringName,
            callable: Callable,
            flags: u32,
        ) -> crate::global::Error {
            type CallRet = crate::global::Error;
            type CallParams = (StringName, Callable, u32);

            let args = (signal, callable, flags);

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Object",
                    method_name: "connect",
                    hash: 1424978103,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Object",
                    "connect",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn disconnect(&mut self, signal: StringName, callable: Callable) {
            type CallRet = ();
            type CallParams = (StringName, Callable);

            let args = (signal, callable);

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Object",
                    method_name: "disconnect",
                    hash: 1444855246,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Object",
                    "disconnect",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_connected(&self, signal: StringName, callable: Callable) -> bool {
            type CallRet = bool;
            type CallParams = (StringName, Callable);

            let args = (signal, callable);

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Object",
                    method_name: "is_connected",
                    hash: 768266505,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Object",
                    "is_connected",
                    self.object_ptr,
                    args,
                )
            }
        }

        /// # Panics
        /// This is a _varcall_ method, meaning parameters and return values are passed as `Variant`.
        /// It can detect call failures and will panic in such a case.
        pub fn emit_signal(
            &mut self,
            signal: StringName,
            varargs: &[Variant],
        ) -> crate::global::Error {
            Self::try_emit_signal(self, signal, varargs).unwrap_or_else(|e| panic!("{e}"))
        }

        /// # Return type
        /// This is a _varcall_ method, meaning parameters and return values are passed as `Variant`.
        /// It can detect call failures and will return `Err` in such a case.
        pub fn try_emit_signal(
            &mut self,
            signal: StringName,
            varargs: &[Variant],
        ) -> Result<crate::global::Error, CallError> {
            type CallRet = crate::global::Error;
            type CallParams = (StringName,);

            let args = (signal,);

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Object",
                    method_name: "emit_signal",
                    hash: 4047014013,
                });

                Signature::<CallParams, CallRet>::out_class_varcall(
                    method_bind,
                    "Object",
                    "emit_signal",
                    self.object_ptr,
                    args,
                    varargs,
                )
            }
        }

        pub fn get_class(&self) -> GString {
            type CallRet = GString;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_core_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "Object",
                    method_name: "get_class",
                    hash: 3271202440,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "Object",
                    "get_class",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for Object {
        type Base = crate::obj::NoBase;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"Object"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Core;
    }

    unsafe impl crate::obj::Bounds for Object {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemDynamic;
    }

    impl crate::obj::EngineClass for Object {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for Object {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::Object;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`Object`][crate::classes::Object] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfObject<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfObject<C> {
        /// Signature: `()`
        pub fn property_list_changed(&mut self) -> SigPropertyListChanged<C> {
            SigPropertyListChanged {
                typed: TypedSignal::extract(&mut self.__internal_obj, "property_list_changed"),
            }
        }
    }

    type TypedSigPropertyListChanged<C> = TypedSignal<C, ()>;

    pub struct SigPropertyListChanged<C: WithSignals> {
        typed: TypedSigPropertyListChanged<C>,
    }

    impl<C: WithSignals> SigPropertyListChanged<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigPropertyListChanged<C> {
        type Target = TypedSigPropertyListChanged<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigPropertyListChanged<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for Object {
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

/// Default-param extender for [`Object::connect_ex`][super::Object::connect_ex].
#[must_use]
pub struct ExConnect<'a> {
    surround_object: &'a mut re_export::Object,
    signal: StringName,
    callable: Callable,
    flags: u32,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExConnect<'a> {
    fn new(
        surround_object: &'a mut re_export::Object,
        signal: StringName,
        callable: Callable,
    ) -> Self {
        Self {
            surround_object,
            signal,
            callable,
            flags: 0u32,
        }
    }

    #[inline]
    pub fn flags(self, value: u32) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            flags: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) -> crate::global::Error {
        re_export::Object::connect_full(
            self.surround_object,
            self.signal,
            self.callable,
            self.flags,
        )
    }
}

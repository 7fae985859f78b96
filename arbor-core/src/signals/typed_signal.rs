/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::builtin::{Callable, GString, StringName, Variant};
use crate::classes::Object;
use crate::meta;
use crate::meta::InParamTuple;
use crate::obj::{ArborClass, Gd, WithSignals};
use crate::signals::signal_receiver::{IndirectSignalReceiver, SignalReceiver};
use crate::signals::ConnectHandle;

/// Type-safe version of an Arbor signal.
///
/// The generic argument `Ps` represents the parameters of the signal, thus ensuring the type safety.
///
/// # Listing signals of a class
/// The [`WithSignals::SignalCollection`] struct stores multiple signals with distinct, code-generated types, but they all implement
/// `Deref` and `DerefMut` to `TypedSignal`. This allows you to either use the concrete APIs of the generated types, or the more
/// generic ones of `TypedSignal`.
///
/// You can access the signal collection of a class via [`Gd::signals()`][Gd::signals].
///
/// # Connecting a signal to a receiver
/// Receiver functions are functions that are called when a signal is emitted. You can connect a signal in many different ways:
/// - [`connect()`][Self::connect]: Connect a global/associated function or a closure.
/// - [`connect_self()`][Self::connect_self]: Connect a method or closure that runs on the signal emitter.
/// - [`connect_other()`][Self::connect_other]: Connect a method or closure that runs on a separate object.
///
/// For connection flags such as deferred or one-shot delivery, use [`Object::connect_ex()`][crate::classes::Object::connect_ex]
/// with an untyped [`Callable`].
///
/// # Emitting a signal
/// Code-generated signal types provide a method `emit(...)`, which adopts the names and types of the signal's parameter list.
/// In most cases, that's the method you are looking for.
///
/// For generic use, you can also use [`emit_tuple()`][Self::emit_tuple], which does not provide parameter names.
///
/// # Generic programming and code reuse
/// If you want to build higher-level abstractions that operate on `TypedSignal`, you will need the [`SignalReceiver`] trait.
pub struct TypedSignal<C: WithSignals, Ps> {
    /// In Arbor, valid signals (unlike funcs) are _always_ declared in a class and become part of each instance. So there's always an object.
    owner: Gd<C>,
    name: Cow<'static, str>,
    _signature: PhantomData<Ps>,
}

impl<C: WithSignals, Ps: meta::ParamTuple> TypedSignal<C, Ps> {
    #[doc(hidden)]
    pub fn extract(obj: &mut Option<Gd<C>>, signal_name: &'static str) -> TypedSignal<C, Ps> {
        let obj = obj.take().unwrap_or_else(|| {
            panic!(
                "signals().{signal_name}() call failed; signals() allows only one signal configuration at a time"
            )
        });

        Self::new(obj, signal_name)
    }

    // Currently only invoked from generated signal collections.
    // When making public, make also #[doc(hidden)].
    fn new(owner: Gd<C>, name: &'static str) -> Self {
        Self {
            owner,
            name: Cow::Borrowed(name),
            _signature: PhantomData,
        }
    }

    pub(crate) fn receiver_object(&self) -> Gd<C> {
        self.owner.clone()
    }

    /// Emit the signal with the given parameters.
    ///
    /// This is intended for generic use. Typically, you'll want to use the more specific `emit()` method of the code-generated signal
    /// type, which also has named parameters.
    pub fn emit_tuple(&mut self, args: Ps)
    where
        Ps: meta::OutParamTuple,
    {
        let signal_name = StringName::from(self.name.as_ref());

        self.owner
            .upcast_mut::<Object>()
            .emit_signal(signal_name, &args.to_variant_array());
    }

    /// Directly connect a Rust callable `arbor_fn`, with a name based on `F`.
    ///
    /// This exists as a shorthand for the `connect_*` methods below and avoids duplicating the callable setup in each of them.
    fn inner_connect_arbor_fn<F>(
        &self,
        arbor_fn: impl FnMut(&[&Variant]) -> Result<Variant, ()> + 'static,
    ) -> ConnectHandle {
        let callable_name = make_callable_name::<F>();
        let callable = Callable::from_local_fn(callable_name, arbor_fn);

        let signal_name = StringName::from(self.name.as_ref());
        let mut owner_object = self.owner.clone().upcast::<Object>();
        owner_object.connect(signal_name, callable.clone());

        ConnectHandle::new(owner_object, self.name.clone(), callable)
    }
}

impl<C: WithSignals, Ps: InParamTuple + 'static> TypedSignal<C, Ps> {
    /// Connect a non-member function (global function, associated function or closure).
    ///
    /// Example usages:
    /// ```ignore
    /// sig.connect(Self::static_func);
    /// sig.connect(global_func);
    /// sig.connect(|arg| { /* closure */ });
    /// ```
    ///
    /// To connect to a method on the object that owns this signal, use [`connect_self()`][Self::connect_self].
    pub fn connect<F>(&self, mut function: F) -> ConnectHandle
    where
        for<'c_rcv> F: SignalReceiver<(), Ps> + 'static,
        for<'c_rcv> IndirectSignalReceiver<'c_rcv, (), Ps, F>: From<&'c_rcv mut F>,
    {
        let arbor_fn = make_arbor_fn(move |args| {
            IndirectSignalReceiver::from(&mut function)
                .function()
                .call((), args);
        });

        self.inner_connect_arbor_fn::<F>(arbor_fn)
    }

    /// Connect a method (member function) with `&mut self` as the first parameter.
    ///
    /// To connect to methods on other objects, use [`connect_other()`][Self::connect_other].
    pub fn connect_self<F>(&self, mut function: F) -> ConnectHandle
    where
        for<'c_rcv> F: SignalReceiver<&'c_rcv mut C, Ps> + 'static,
        for<'c_rcv> IndirectSignalReceiver<'c_rcv, &'c_rcv mut C, Ps, F>: From<&'c_rcv mut F>,
    {
        let mut gd = self.receiver_object();
        let arbor_fn = make_arbor_fn(move |args| {
            IndirectSignalReceiver::from(&mut function)
                .function()
                .call(&mut *gd, args);
        });

        self.inner_connect_arbor_fn::<F>(arbor_fn)
    }

    /// Connect a method (member function) with any `&mut OtherC` as the first parameter.
    ///
    /// To connect to methods on the object that owns this signal, use [`connect_self()`][Self::connect_self].
    pub fn connect_other<F, OtherC>(&self, object: &Gd<OtherC>, mut method: F) -> ConnectHandle
    where
        OtherC: ArborClass,
        for<'c_rcv> F: SignalReceiver<&'c_rcv mut OtherC, Ps> + 'static,
        for<'c_rcv> IndirectSignalReceiver<'c_rcv, &'c_rcv mut OtherC, Ps, F>: From<&'c_rcv mut F>,
    {
        let mut gd = object.clone();
        let arbor_fn = make_arbor_fn(move |args| {
            IndirectSignalReceiver::from(&mut method)
                .function()
                .call(&mut *gd, args);
        });

        self.inner_connect_arbor_fn::<F>(arbor_fn)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion of receivers

fn make_arbor_fn<Ps, F>(mut input: F) -> impl FnMut(&[&Variant]) -> Result<Variant, ()>
where
    F: FnMut(Ps),
    Ps: InParamTuple,
{
    move |variant_args: &[&Variant]| -> Result<Variant, ()> {
        let args = Ps::from_variant_array(variant_args);
        input(args);

        Ok(Variant::nil())
    }
}

fn make_callable_name<F>() -> GString {
    // Not a pretty name, but type_name() is the only thing available in stable Rust. Between "{closure}" and the full type name,
    // the latter at least narrows down the location.
    std::any::type_name::<F>().into()
}

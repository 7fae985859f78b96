/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ptr};

use arbor_ffi as sys;
use sys::types::OpaqueCallable;
use sys::{ffi_methods, interface_fn, ArborFfi};

use crate::builtin::{GString, Variant};
use crate::meta::ToArbor;

/// A `Callable` represents a function in the Arbor engine.
///
/// In the engine, a callable usually wraps an object plus a method name. This binding creates
/// callables from Rust closures with [`Callable::from_local_fn`]; that is the form consumed by
/// signal connections.
///
/// # Equality
///
/// AXI exposes no equality operator for callables, so `Callable` implements neither `PartialEq`
/// nor `Eq`. The engine compares callables itself when servicing
/// [`Object::is_connected()`][crate::classes::Object::is_connected].
#[repr(C, align(8))]
pub struct Callable {
    opaque: OpaqueCallable,
}

impl Callable {
    fn from_opaque(opaque: OpaqueCallable) -> Self {
        Self { opaque }
    }

    /// Create a callable from a Rust function or closure.
    ///
    /// `name` is used for the string representation of the closure, which helps debugging.
    ///
    /// The callable is not thread-safe: it must only be invoked on the thread that created it.
    /// Callables created through multiple `from_local_fn()` calls are never equal, even if they
    /// refer to the same function.
    ///
    /// # Example
    /// ```no_run
    /// # use arbor::prelude::*;
    /// let callable = Callable::from_local_fn("sum", |args: &[&Variant]| {
    ///     let sum: i64 = args.iter().map(|arg| arg.to::<i64>()).sum();
    ///     Ok(sum.to_variant())
    /// });
    /// ```
    pub fn from_local_fn<F, S>(name: S, rust_function: F) -> Self
    where
        F: 'static + FnMut(&[&Variant]) -> Result<Variant, ()>,
        S: Into<GString>,
    {
        let userdata = CallableUserdata {
            inner: FnWrapper {
                rust_function,
                name: name.into(),
            },
        };

        let info = sys::AxiCallableCustomInfo {
            callable_userdata: Box::into_raw(Box::new(userdata)) as *mut std::ffi::c_void,
            // SAFETY: the binding is initialized before any callable can be constructed.
            token: unsafe { sys::get_library() },
            object_id: 0,
            call_func: Some(rust_callable_call_fn::<F>),
            free_func: Some(rust_callable_destroy::<FnWrapper<F>>),
            to_string_func: Some(rust_callable_to_string_named::<F>),
        };

        Self::from_custom_info(info)
    }

    fn from_custom_info(info: sys::AxiCallableCustomInfo) -> Callable {
        // SAFETY: callable_custom_create() is a valid way of creating callables.
        unsafe {
            Callable::from_sys_init(|type_ptr| {
                interface_fn!(callable_custom_create)(type_ptr, ptr::addr_of!(info));
            })
        }
    }
}

// SAFETY:
// The `opaque` in `Callable` is just a pair of pointers, and requires no special initialization or cleanup
// beyond what is done in `from_opaque` and `drop`. So using `*mut Opaque` is safe.
unsafe impl ArborFfi for Callable {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Callable
    }

    ffi_methods! { type sys::AxiTypePtr = *mut Opaque; .. }
}

crate::meta::impl_arbor_as_self!(Callable);

impl Clone for Callable {
    fn clone(&self) -> Self {
        unsafe {
            Self::from_sys_init(|type_ptr| {
                interface_fn!(callable_new_copy)(type_ptr, self.sys());
            })
        }
    }
}

impl Drop for Callable {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(callable_destroy)(self.sys());
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({})", self.to_variant())
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_variant())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Callbacks for custom implementations

use custom_callable::*;

mod custom_callable {
    use super::*;

    pub struct CallableUserdata<T> {
        pub inner: T,
    }

    impl<T> CallableUserdata<T> {
        /// # Safety
        /// Returns an unbounded reference. `void_ptr` must be a valid pointer to a `CallableUserdata`.
        unsafe fn inner_from_raw<'a>(void_ptr: *mut std::ffi::c_void) -> &'a mut T {
            let ptr = void_ptr as *mut CallableUserdata<T>;
            &mut (*ptr).inner
        }
    }

    pub(crate) struct FnWrapper<F> {
        pub(crate) rust_function: F,
        pub(crate) name: GString,
    }

    /// # Safety
    /// `p_args` must point to `count` live variants, which outlast the returned slice.
    unsafe fn unbounded_arg_refs<'a>(
        p_args: *const sys::AxiConstVariantPtr,
        count: usize,
    ) -> &'a [&'a Variant] {
        // The engine may pass null for an empty argument list.
        if count == 0 {
            return &[];
        }

        // A variant pointer and a &Variant have the same representation.
        std::slice::from_raw_parts(p_args as *const &Variant, count)
    }

    pub unsafe extern "C" fn rust_callable_call_fn<F>(
        callable_userdata: *mut std::ffi::c_void,
        p_args: *const sys::AxiConstVariantPtr,
        p_argument_count: sys::AxiInt,
        r_return: sys::AxiVariantPtr,
        r_error: *mut sys::AxiCallError,
    ) where
        F: FnMut(&[&Variant]) -> Result<Variant, ()>,
    {
        let arg_refs: &[&Variant] = unbounded_arg_refs(p_args, p_argument_count as usize);

        let w: &mut FnWrapper<F> = CallableUserdata::inner_from_raw(callable_userdata);

        // A panic must not unwind into the engine; it is reported and turned into a call error.
        let name = w.name.clone();
        let ctx = || format!("custom callable '{name}'");
        let result = crate::private::handle_panic(ctx, std::panic::AssertUnwindSafe(|| {
            (w.rust_function)(arg_refs)
        }));

        let result = result.unwrap_or(Err(()));
        crate::meta::varcall_return_checked(result, r_return, r_error);
    }

    pub unsafe extern "C" fn rust_callable_destroy<T>(callable_userdata: *mut std::ffi::c_void) {
        let rust_ptr = callable_userdata as *mut CallableUserdata<T>;
        let _drop = Box::from_raw(rust_ptr);
    }

    pub unsafe extern "C" fn rust_callable_to_string_named<F>(
        callable_userdata: *mut std::ffi::c_void,
        r_is_valid: *mut sys::AxiBool,
        r_out: sys::AxiStringPtr,
    ) {
        let w: &mut FnWrapper<F> = CallableUserdata::inner_from_raw(callable_userdata);

        w.name.clone().move_string_ptr(r_out);
        *r_is_valid = true as sys::AxiBool;
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::builtin::Variant;
use crate::meta::error::{CallError, ConvertError};
use crate::meta::{ArborType, FromArbor, OutParamTuple, ToArbor};
use crate::obj::ArborClass;
use crate::sys;

/// A full signature for a function.
///
/// `Params` will implement [`OutParamTuple`] and `Ret` will implement [`FromArbor`], since the only calls
/// performed through this type are out-calls (from Rust code to the Arbor engine).
#[doc(hidden)]
pub struct Signature<Params, Ret> {
    _p: PhantomData<Params>,
    _r: PhantomData<Ret>,
}

/// Out-calls:
///
/// Calls going from Rust code to the Arbor engine.
#[deny(unsafe_op_in_unsafe_fn)]
impl<Params, Ret> Signature<Params, Ret>
where
    Params: OutParamTuple,
    Ret: FromArbor,
{
    /// Make a varcall to the engine for a class method.
    ///
    /// # Safety
    /// - `method_bind` must expect explicit args `args`, varargs `varargs`, and return a value of type `Ret`.
    /// - `object_ptr` must point to a live object of the method's class.
    #[inline]
    pub unsafe fn out_class_varcall(
        method_bind: sys::ClassMethodBind,
        // Separate parameters to reduce tokens in generated class API.
        class_name: &'static str,
        method_name: &'static str,
        object_ptr: sys::AxiObjectPtr,
        args: Params,
        varargs: &[Variant],
    ) -> Result<Ret, CallError> {
        let call_ctx = CallContext::outbound(class_name, method_name);

        let class_fn = sys::interface_fn!(object_method_bind_call);

        let variant = args.with_variants(|explicit_args| {
            let mut variant_ptrs = Vec::with_capacity(explicit_args.len() + varargs.len());
            variant_ptrs.extend(explicit_args.iter().map(|v| sys::SysPtr::as_const(v.var_sys())));
            variant_ptrs.extend(varargs.iter().map(|v| sys::SysPtr::as_const(v.var_sys())));

            unsafe {
                Variant::new_with_var_uninit_result(|return_ptr| {
                    let mut err = sys::default_call_error();
                    class_fn(
                        method_bind,
                        object_ptr,
                        variant_ptrs.as_ptr(),
                        variant_ptrs.len() as sys::AxiInt,
                        return_ptr,
                        &mut err,
                    );

                    CallError::check_out_varcall(&call_ctx, err, explicit_args, varargs)
                })
            }
        });

        variant.and_then(|v| {
            Ret::try_from_variant(&v)
                .map_err(|e| CallError::failed_return_conversion::<Ret>(&call_ctx, e))
        })
    }

    /// Make a ptrcall to the engine for a class method.
    ///
    /// # Safety
    /// - `method_bind` must expect explicit args `args`, and return a value of type `Ret`.
    /// - `object_ptr` must point to a live object of the method's class.
    #[inline]
    pub unsafe fn out_class_ptrcall(
        method_bind: sys::ClassMethodBind,
        // Separate parameters to reduce tokens in generated class API.
        class_name: &'static str,
        method_name: &'static str,
        object_ptr: sys::AxiObjectPtr,
        args: Params,
    ) -> Ret {
        let call_ctx = CallContext::outbound(class_name, method_name);

        let class_fn = sys::interface_fn!(object_method_bind_ptrcall);

        unsafe {
            Self::raw_ptrcall(args, &call_ctx, |explicit_args, return_ptr| {
                class_fn(
                    method_bind,
                    object_ptr,
                    explicit_args.as_ptr(),
                    return_ptr,
                );
            })
        }
    }

    /// Performs a ptrcall and processes the return value to give nice error output.
    ///
    /// # Safety
    /// This calls [`sys::ArborFfi::from_sys_init`] and passes the ptr as the second argument to `f`; see that
    /// function for safety docs. The engine constructs the return value into the (uninitialized) slot.
    unsafe fn raw_ptrcall(
        args: Params,
        call_ctx: &CallContext,
        f: impl FnOnce(&[sys::AxiConstTypePtr], sys::AxiUninitializedTypePtr),
    ) -> Ret {
        let ffi = args.with_type_pointers(|explicit_args| unsafe {
            <<Ret::Via as ArborType>::Ffi as sys::ArborFfi>::from_sys_init(|return_ptr| {
                f(explicit_args, return_ptr)
            })
        });

        Ret::Via::try_from_ffi(ffi)
            .and_then(Ret::try_from_arbor)
            .unwrap_or_else(|err| return_error::<Ret>(call_ctx, err))
    }
}

/// Moves `ret_val` into `ret`.
///
/// # Safety
/// - `ret` must be a pointer to an initialized `Variant`.
/// - It must be safe to write a `Variant` once to `ret`.
/// - It must be safe to write a `sys::AxiCallError` once to `err`.
unsafe fn varcall_return<R: ToArbor>(
    ret_val: R,
    ret: sys::AxiVariantPtr,
    err: *mut sys::AxiCallError,
) {
    let ret_variant = ret_val.to_variant();
    *(ret as *mut Variant) = ret_variant;
    (*err).error = sys::AXI_CALL_OK;
}

/// Moves `ret_val` into `ret`, if it is `Ok(...)`. Otherwise sets an error.
///
/// # Safety
/// See [`varcall_return`].
pub(crate) unsafe fn varcall_return_checked<R: ToArbor>(
    ret_val: Result<R, ()>,
    ret: sys::AxiVariantPtr,
    err: *mut sys::AxiCallError,
) {
    if let Ok(ret_val) = ret_val {
        varcall_return(ret_val, ret, err);
    } else {
        *err = sys::default_call_error();
        (*err).error = sys::AXI_CALL_ERROR_INVALID_ARGUMENT;
    }
}

fn return_error<R>(call_ctx: &CallContext, err: ConvertError) -> ! {
    let return_ty = std::any::type_name::<R>();
    panic!("in function `{call_ctx}` at return type {return_ty}: {err}");
}

// Lazy Display, so we don't create tens of thousands of extra string literals.
#[derive(Clone)]
#[doc(hidden)]
pub struct CallContext<'a> {
    pub(crate) class_name: Cow<'a, str>,
    pub(crate) function_name: &'a str,
}

impl<'a> CallContext<'a> {
    /// Call from the engine into a custom Callable.
    pub const fn custom_callable(function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed("<Callable>"),
            function_name,
        }
    }

    /// Outbound call from Rust into the engine, class APIs.
    pub const fn outbound(class_name: &'a str, function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed(class_name),
            function_name,
        }
    }

    /// Outbound call from Rust into the engine, via Gd methods.
    pub fn gd<T: ArborClass>(function_name: &'a str) -> Self {
        Self {
            class_name: T::class_name().to_cow_str(),
            function_name,
        }
    }
}

impl fmt::Display for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class_name, self.function_name)
    }
}

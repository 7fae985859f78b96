/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some Arbor type.
///
/// Adds methods to convert from and to Arbor FFI pointers.
/// See [crate::ffi_methods] for ergonomic implementation.
///
/// # Safety
///
/// [`from_arg_ptr`](ArborFfi::from_arg_ptr) and [`move_return_ptr`](ArborFfi::move_return_ptr)
/// must properly initialize and clean up values, following the ptrcall encoding of `Self`.
#[doc(hidden)] // shows up in implementors otherwise
pub unsafe trait ArborFfi {
    fn variant_type() -> sys::VariantType;

    /// Construct from Arbor opaque pointer.
    ///
    /// # Safety
    /// `ptr` must be a valid _type ptr_: it must follow Arbor's convention to encode `Self`,
    /// which is different depending on the type.
    /// The type in `ptr` must not require any special consideration upon referencing, such as
    /// incrementing a refcount.
    unsafe fn from_sys(ptr: sys::AxiTypePtr) -> Self;

    /// Construct uninitialized opaque data, then initialize it with `init_fn` function.
    ///
    /// # Safety
    /// `init_fn` must be a function that correctly handles a (possibly-uninitialized) _type ptr_.
    unsafe fn from_sys_init(init_fn: impl FnOnce(sys::AxiUninitializedTypePtr)) -> Self;

    /// Like [`Self::from_sys_init`], but pre-initializes the sys pointer to a `Default::default()` instance
    /// before calling `init_fn`.
    ///
    /// Return slots of ptrcalls expect a pre-existing instance at the destination pointer that the engine
    /// assigns over; this matters for engine-refcounted builtins like `GString` and `StringName`.
    ///
    /// If not overridden, this just calls [`Self::from_sys_init`].
    ///
    /// # Safety
    /// `init_fn` must be a function that correctly handles a (possibly-uninitialized) _type ptr_.
    unsafe fn from_sys_init_default(init_fn: impl FnOnce(sys::AxiTypePtr)) -> Self
    where
        Self: Sized,
    {
        // SAFETY: this default implementation is potentially incorrect.
        // By implementing the ArborFfi trait, you acknowledge that these may need to be overridden.
        Self::from_sys_init(|ptr| init_fn(sys::SysPtr::force_init(ptr)))
    }

    /// Return Arbor opaque pointer, for an immutable operation.
    ///
    /// Note that this is a `*mut` pointer despite taking `&self` by shared-ref.
    /// This is because most of Arbor's C API is not const-correct. This can still
    /// enhance user code (calling `sys_mut` ensures no aliasing at the time of the call).
    fn sys(&self) -> sys::AxiTypePtr;

    /// Return Arbor opaque pointer, for a mutable operation.
    ///
    /// Should usually not be overridden; behaves like `sys()` but ensures no aliasing
    /// at the time of the call (not necessarily during any subsequent modifications though).
    fn sys_mut(&mut self) -> sys::AxiTypePtr {
        self.sys()
    }

    fn sys_const(&self) -> sys::AxiConstTypePtr {
        self.sys()
    }

    fn as_arg_ptr(&self) -> sys::AxiConstTypePtr {
        self.sys_const()
    }

    /// Construct from a pointer to an argument in a call.
    ///
    /// # Safety
    /// `ptr` must be a valid _type ptr_: it must follow Arbor's convention to encode `Self` in
    /// argument position, which is different depending on the type.
    unsafe fn from_arg_ptr(ptr: sys::AxiTypePtr) -> Self;

    /// Move self into the pointer `dst`, dropping what is already in `dst`.
    ///
    /// # Safety
    /// `dst` must be a valid _type ptr_: it must follow Arbor's convention to encode `Self` in
    /// return position, and it must be able to accept a value of type `Self`.
    unsafe fn move_return_ptr(self, dst: sys::AxiTypePtr);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Types that can represent null-values.
///
/// Used to blanket implement various conversions over `Option<T>`.
///
/// This is currently only implemented for `RawGd`.
pub trait ArborNullableFfi: Sized + ArborFfi {
    fn flatten_option(opt: Option<Self>) -> Self;
    fn is_null(&self) -> bool;
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros to choose a certain implementation of `ArborFfi` trait for AxiTypePtr;
// or a free-standing `impl` for concrete sys pointers such as AxiObjectPtr.
// See doc comment of `ffi_methods!` for information

#[macro_export]
#[doc(hidden)]
macro_rules! ffi_methods_one {
    // type $Ptr = *mut Opaque
    (OpaquePtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $from_sys:ident = from_sys) => {
        $( #[$attr] )? $vis
        unsafe fn $from_sys(ptr: $Ptr) -> Self {
            let opaque = std::ptr::read(ptr as *mut _);
            Self::from_opaque(opaque)
        }
    };
    (OpaquePtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $from_sys_init:ident = from_sys_init) => {
        $( #[$attr] )? $vis
        unsafe fn $from_sys_init(init: impl FnOnce(<$Ptr as $crate::SysPtr>::Uninit)) -> Self {
            let mut raw = std::mem::MaybeUninit::uninit();
            init(raw.as_mut_ptr() as <$Ptr as $crate::SysPtr>::Uninit);

            Self::from_opaque(raw.assume_init())
        }
    };
    (OpaquePtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $sys:ident = sys) => {
        $( #[$attr] )? $vis
        fn $sys(&self) -> $Ptr {
            &self.opaque as *const _ as $Ptr
        }
    };
    (OpaquePtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $from_arg_ptr:ident = from_arg_ptr) => {
        $( #[$attr] )? $vis
        unsafe fn $from_arg_ptr(ptr: $Ptr) -> Self {
            Self::from_sys(ptr as *mut _)
        }
    };
    (OpaquePtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $move_return_ptr:ident = move_return_ptr) => {
        $( #[$attr] )? $vis
        unsafe fn $move_return_ptr(mut self, dst: $Ptr) {
            std::ptr::swap(dst as *mut _, std::ptr::addr_of_mut!(self.opaque))
        }
    };

    // type $Ptr = *mut Self
    (SelfPtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $from_sys:ident = from_sys) => {
        $( #[$attr] )? $vis
        unsafe fn $from_sys(ptr: $Ptr) -> Self {
            *(ptr as *mut Self)
        }
    };
    (SelfPtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $from_sys_init:ident = from_sys_init) => {
        $( #[$attr] )? $vis
        unsafe fn $from_sys_init(init: impl FnOnce(<$Ptr as $crate::SysPtr>::Uninit)) -> Self {
            let mut raw = std::mem::MaybeUninit::<Self>::uninit();
            init(raw.as_mut_ptr() as <$Ptr as $crate::SysPtr>::Uninit);

            raw.assume_init()
        }
    };
    (SelfPtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $sys:ident = sys) => {
        $( #[$attr] )? $vis
        fn $sys(&self) -> $Ptr {
            self as *const Self as $Ptr
        }
    };
    (SelfPtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $from_arg_ptr:ident = from_arg_ptr) => {
        $( #[$attr] )? $vis
        unsafe fn $from_arg_ptr(ptr: $Ptr) -> Self {
            *(ptr as *mut Self)
        }
    };
    (SelfPtr $Ptr:ty; $( #[$attr:meta] )? $vis:vis $move_return_ptr:ident = move_return_ptr) => {
        $( #[$attr] )? $vis
        unsafe fn $move_return_ptr(self, dst: $Ptr) {
            *(dst as *mut Self) = self
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! ffi_methods_rest {
    ( // impl T: each method has a custom name and is annotated with 'pub'
        $Impl:ident $Ptr:ty; $( fn $user_fn:ident = $sys_fn:ident; )*
    ) => {
        $( $crate::ffi_methods_one!($Impl $Ptr; #[doc(hidden)] pub $user_fn = $sys_fn); )*
    };

    ( // impl ArborFfi for T: methods have given names, no 'pub' needed
        $Impl:ident $Ptr:ty; $( fn $sys_fn:ident; )*
    ) => {
        $( $crate::ffi_methods_one!($Impl $Ptr; $sys_fn = $sys_fn); )*
    };

    ( // impl ArborFfi for T (default all 5)
        $Impl:ident $Ptr:ty; ..
    ) => {
        $crate::ffi_methods_one!($Impl $Ptr; from_sys = from_sys);
        $crate::ffi_methods_one!($Impl $Ptr; from_sys_init = from_sys_init);
        $crate::ffi_methods_one!($Impl $Ptr; sys = sys);
        $crate::ffi_methods_one!($Impl $Ptr; from_arg_ptr = from_arg_ptr);
        $crate::ffi_methods_one!($Impl $Ptr; move_return_ptr = move_return_ptr);
    };
}

/// Provides "sys" style methods for FFI and ptrcall integration with Arbor.
/// The generated implementations follow one of two patterns:
///
/// * `*mut Opaque`<br>
///   Implements FFI methods for a type with `Opaque` data that stores a value type (e.g. `StringName`).
///   The **address of** the `Opaque` field is used as the sys pointer.
///   Expects a `from_opaque()` constructor and a `opaque` field.
///
/// * `*mut Self`<br>
///   Implements FFI methods for a type implemented with standard Rust fields (not opaque).
///   The address of `Self` is directly reinterpreted as the sys pointer.
///   The size of the corresponding sys type must not be bigger than `size_of::<Self>()`.
///
/// Using this macro as a complete implementation for [`ArborFfi`] is sound only when:
///
/// ## Using `*mut Opaque`
///
/// Turning pointer call arguments into a value is simply calling `from_opaque` on the
/// dereferenced argument pointer.
/// Returning a value from a pointer call is simply calling [`std::ptr::swap`] on the return pointer
/// and the address of the `opaque` field.
///
/// ## Using `*mut Self`
///
/// Turning pointer call arguments into a value is a dereference.
/// Returning a value from a pointer call is `*ret_ptr = value`.
#[macro_export]
macro_rules! ffi_methods {
    ( // Sys pointer = address of opaque
        type $Ptr:ty = *mut Opaque;
        $( $rest:tt )*
    ) => {
        $crate::ffi_methods_rest!(OpaquePtr $Ptr; $($rest)*);
    };

    ( // Sys pointer = address of self
        type $Ptr:ty = *mut Self;
        $( $rest:tt )*
    ) => {
        $crate::ffi_methods_rest!(SelfPtr $Ptr; $($rest)*);
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation for common types (needs to be this crate due to orphan rule)

mod scalars {
    use super::ArborFfi;
    use crate as sys;

    unsafe impl ArborFfi for bool {
        fn variant_type() -> sys::VariantType {
            sys::VariantType::Bool
        }

        ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
    }

    unsafe impl ArborFfi for i64 {
        fn variant_type() -> sys::VariantType {
            sys::VariantType::Int
        }

        ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
    }

    unsafe impl ArborFfi for f64 {
        fn variant_type() -> sys::VariantType {
            sys::VariantType::Float
        }

        ffi_methods! { type sys::AxiTypePtr = *mut Self; .. }
    }

    unsafe impl ArborFfi for () {
        fn variant_type() -> sys::VariantType {
            sys::VariantType::Nil
        }

        unsafe fn from_sys(_ptr: sys::AxiTypePtr) -> Self {
            // Do nothing
        }

        unsafe fn from_sys_init(init: impl FnOnce(sys::AxiUninitializedTypePtr)) -> Self {
            // The init function must still run; the engine call happens inside it. The return
            // slot for () is never read, so null suffices.
            init(std::ptr::null_mut())
        }

        fn sys(&self) -> sys::AxiTypePtr {
            // ZST dummy pointer
            self as *const _ as sys::AxiTypePtr
        }

        // SAFETY:
        // We're not accessing the value in `_ptr`.
        unsafe fn from_arg_ptr(_ptr: sys::AxiTypePtr) -> Self {}

        // SAFETY:
        // We're not doing anything with `_dst`.
        unsafe fn move_return_ptr(self, _dst: sys::AxiTypePtr) {
            // Do nothing
        }
    }
}

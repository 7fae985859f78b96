/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ptr};

use arbor_ffi as sys;
use sys::{interface_fn, ArborFfi, ArborNullableFfi};

use crate::builtin::{Variant, VariantType};
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::{
    ArborConvert, ArborFfiVariant, ArborType, CallContext, ClassName, FromArbor, ToArbor,
};
use crate::obj::bounds::DynMemory as _;
use crate::obj::rtti::ObjectRtti;
use crate::obj::{ArborClass, Gd, InstanceId};
use crate::{classes, out};

/// Low-level bindings for object pointers in Arbor.
///
/// This should not be used directly, you should either use [`Gd<T>`](super::Gd) or [`Option<Gd<T>>`]
/// depending on whether you need a nullable object pointer or not.
#[repr(C)]
#[doc(hidden)]
pub struct RawGd<T: ArborClass> {
    pub(super) obj: *mut T,

    // Must not be changed after initialization.
    cached_rtti: Option<ObjectRtti>,
}

impl<T: ArborClass> RawGd<T> {
    /// Create a new object representing a null in Arbor.
    pub(super) fn null() -> Self {
        Self {
            obj: ptr::null_mut(),
            cached_rtti: None,
        }
    }

    /// Initializes this `RawGd<T>` from the object pointer as a **weak ref**, meaning it does not
    /// initialize/increment the reference counter.
    ///
    /// If `obj` is null, the returned `RawGd<T>` will have the null state.
    ///
    /// # Safety
    ///
    /// `obj` must be a valid object pointer or a null pointer.
    pub(super) unsafe fn from_obj_sys_weak(obj: sys::AxiObjectPtr) -> Self {
        let rtti = if obj.is_null() {
            None
        } else {
            let raw_id = unsafe { interface_fn!(object_get_instance_id)(obj) };

            // A zero ID here means the object pointer is already dangling; the conversion that handed it
            // over (e.g. Variant -> RawGd) has no way to detect this earlier.
            let instance_id = InstanceId::try_from_u64(raw_id)
                .expect("null instance ID when constructing object; this very likely causes UB");

            // This queries the static type T, which can be less derived than the object's dynamic type
            // (upcast, FromArbor, etc). See comment in ObjectRtti.
            Some(ObjectRtti::of::<T>(instance_id))
        };

        Self {
            obj: obj.cast::<T>(),
            cached_rtti: rtti,
        }
    }

    /// Initializes this `RawGd<T>` from the object pointer as a **strong ref**, meaning it initializes
    /// /increments the reference counter and keeps the object alive.
    ///
    /// This is the default for most initializations from FFI. In cases where reference counter
    /// should explicitly **not** be updated, [`from_obj_sys_weak()`](Self::from_obj_sys_weak) is available.
    ///
    /// # Safety
    ///
    /// `obj` must be a valid object pointer or a null pointer.
    pub(super) unsafe fn from_obj_sys(obj: sys::AxiObjectPtr) -> Self {
        Self::from_obj_sys_weak(obj).with_inc_refcount()
    }

    /// Returns `self` but with initialized ref-count.
    fn with_inc_refcount(self) -> Self {
        // Note: use init_ref and not inc_ref, since this might be the first reference increment.
        // Arbor expects RefCounted::init_ref to be called instead of RefCounted::reference in that case.
        // init_ref also doesn't hurt (except 1 possibly unnecessary check).
        T::DynMemory::maybe_init_ref(&self);
        self
    }

    /// Returns `true` if the object is null.
    ///
    /// This does not check if the object is dead. For that, use [`is_instance_valid()`](Self::is_instance_valid).
    pub(crate) fn is_null(&self) -> bool {
        self.obj.is_null() || self.cached_rtti.is_none()
    }

    pub(crate) fn instance_id_unchecked(&self) -> Option<InstanceId> {
        self.cached_rtti.as_ref().map(|rtti| rtti.instance_id())
    }

    pub(crate) fn is_instance_valid(&self) -> bool {
        self.cached_rtti
            .as_ref()
            .is_some_and(|rtti| rtti.instance_id().lookup_validity())
    }

    /// Returns `Ok(cast_obj)` on success, `Err(self)` on error.
    pub(super) fn owned_cast<U>(self) -> Result<RawGd<U>, Self>
    where
        U: ArborClass,
    {
        // The unsafe { std::mem::transmute<&T, &Base>(self.inner()) } relies on the engine's class casts
        // to return the same pointer. The Deref/DerefMut impls for T implement an "implicit upcast" on the
        // object (not Gd) level and rely on this (e.g. &Camera2D -> &Node2D).

        let result = unsafe { self.ffi_cast::<U>() };
        match result {
            Some(cast_obj) => {
                // Duplicated ref, one must be wiped.
                std::mem::forget(self);
                Ok(cast_obj)
            }
            None => Err(self),
        }
    }

    // Note: does not transfer ownership and is thus unsafe. Also operates on shared ref.
    // Either the parameter or the return value *must* be forgotten (since reference counts are not updated).
    pub(super) unsafe fn ffi_cast<U>(&self) -> Option<RawGd<U>>
    where
        U: ArborClass,
    {
        // `self` may be null when we convert a null-variant into an `Option<Gd<T>>`, since we use `ffi_cast`
        // in the `ffi_from_variant` conversion function to ensure type-correctness. So the chain would be as follows:
        // - Variant::nil()
        // - null RawGd<Object>
        // - null RawGd<T>
        // - Option::<Gd<T>>::None
        if self.is_null() {
            // Null can be cast to anything.
            // Forgetting a null doesn't do anything, since dropping a null also does nothing.
            return Some(RawGd::null());
        }

        // Before engine API calls, make sure the object is alive (and in Debug mode, of the correct type).
        self.check_rtti("ffi_cast");

        let class_tag = U::class_name()
            .with_string_name(|name| interface_fn!(classdb_get_class_tag)(name.string_sys()));
        let cast_object_ptr = interface_fn!(object_cast_to)(self.obj_sys(), class_tag);

        // Create weak object, as ownership will be moved and reference-counter stays the same.
        sys::ptr_then(cast_object_ptr, |ptr| RawGd::from_obj_sys_weak(ptr))
    }

    /// Executes a function, assuming that `self` inherits `RefCounted`.
    ///
    /// # Panics
    /// If `self` does not inherit `RefCounted` or is null.
    pub(crate) fn with_ref_counted<R>(&self, apply: impl Fn(&mut classes::RefCounted) -> R) -> R {
        debug_assert!(
            self.is_instance_valid(),
            "with_ref_counted() on freed instance; maybe forgot to increment reference count?"
        );

        let tmp = unsafe { self.ffi_cast::<classes::RefCounted>() };
        let mut tmp = tmp.expect("object expected to inherit RefCounted");
        let return_val = apply(tmp.as_target_mut());

        std::mem::forget(tmp); // no ownership transfer
        return_val
    }

    /// Enables outer `Gd` APIs or bypasses additional null checks, in cases where `RawGd` is guaranteed non-null.
    ///
    /// # Safety
    /// `self` must not be null.
    pub(crate) unsafe fn as_non_null(&self) -> &Gd<T> {
        debug_assert!(
            !self.is_null(),
            "RawGd::as_non_null() called on null pointer; this is UB"
        );

        // SAFETY: layout of Gd<T> is currently equivalent to RawGd<T>.
        unsafe { std::mem::transmute::<&RawGd<T>, &Gd<T>>(self) }
    }

    pub(crate) fn as_object_ref(&self) -> &classes::Object {
        // SAFETY: Object is always a valid upcast target.
        unsafe { self.as_upcast_ref() }
    }

    pub(crate) fn as_object_mut(&mut self) -> &mut classes::Object {
        // SAFETY: Object is always a valid upcast target.
        unsafe { self.as_upcast_mut() }
    }

    /// # Panics
    /// If this `RawGd` is null. In Debug mode, sanity checks (valid upcast, ID comparisons) can also lead to panics.
    ///
    /// # Safety
    /// `Base` must actually be a base class of `T`.
    ///
    /// This is not done via bounds because that would infect all APIs with `Inherits<T>` and leads to cycles in `Deref`.
    /// Bounds should be added on user-facing safe APIs.
    pub(super) unsafe fn as_upcast_ref<Base>(&self) -> &Base
    where
        Base: ArborClass,
    {
        self.ensure_valid_upcast::<Base>();

        // SAFETY:
        // Every engine object is a struct like:
        //
        // #[repr(C)]
        // struct Node2D {
        //     object_ptr: sys::AxiObjectPtr,
        //     rtti: Option<ObjectRtti>,
        // }
        //
        // and `RawGd` looks like:
        //
        // #[repr(C)]
        // pub struct RawGd<T: ArborClass> {
        //     obj: *mut T,
        //     cached_rtti: Option<ObjectRtti>,
        // }
        //
        // The pointers have the same meaning despite different types, and so the whole struct is layout-compatible.
        // In addition, Gd<T> as opposed to RawGd<T> will have the Option always set to Some.
        std::mem::transmute::<&Self, &Base>(self)
    }

    /// # Panics
    /// If this `RawGd` is null. In Debug mode, sanity checks (valid upcast, ID comparisons) can also lead to panics.
    ///
    /// # Safety
    /// `Base` must actually be a base class of `T`.
    ///
    /// This is not done via bounds because that would infect all APIs with `Inherits<T>` and leads to cycles in `Deref`.
    /// Bounds should be added on user-facing safe APIs.
    pub(super) unsafe fn as_upcast_mut<Base>(&mut self) -> &mut Base
    where
        Base: ArborClass,
    {
        self.ensure_valid_upcast::<Base>();

        // SAFETY: see also `as_upcast_ref()`.
        //
        // We have a mutable reference to self, and thus it's safe to transmute that into a
        // mutable reference to a compatible type.
        //
        // There cannot be aliasing on the same internal Base object, as every Gd<T> has a different such object -- aliasing
        // of the internal object would thus require multiple &mut Gd<T>, which cannot happen.
        std::mem::transmute::<&mut Self, &mut Base>(self)
    }

    /// # Panics
    /// If this `RawGd` is null.
    pub(super) fn as_target(&self) -> &T {
        // SAFETY: T is always a valid upcast target for itself, and all classes are engine types.
        unsafe { self.as_upcast_ref::<T>() }
    }

    /// # Panics
    /// If this `RawGd` is null.
    pub(super) fn as_target_mut(&mut self) -> &mut T {
        // SAFETY: See as_target().
        unsafe { self.as_upcast_mut::<T>() }
    }

    // Clippy believes the type parameters are not used, however they are used in the `.ffi_cast::<Base>` call.
    #[allow(clippy::extra_unused_type_parameters)]
    fn ensure_valid_upcast<Base>(&self)
    where
        Base: ArborClass,
    {
        // Validation object identity.
        self.check_rtti("upcast_ref");
        debug_assert!(!self.is_null(), "cannot upcast null object refs");

        // In Debug builds, go the long path via the engine FFI to verify the results are the same.
        #[cfg(debug_assertions)]
        {
            // SAFETY: we forget the object below and do not leave the function before.
            let ffi_dest = unsafe { self.ffi_cast::<Base>() }.expect("failed FFI upcast");

            // The ID check is not that expressive; a complete comparison of the ObjectRtti would be better, but currently the
            // dynamic types can be different (see comment in ObjectRtti struct). This at least checks that the transmuted
            // object is not complete garbage. We get direct_id from Self and not Base because the latter has no API with
            // current bounds; but this equivalence is tested in Deref.
            let direct_id = self.instance_id_unchecked().expect("direct_id null");
            let ffi_id = ffi_dest.instance_id_unchecked().expect("ffi_id null");

            assert_eq!(
                direct_id, ffi_id,
                "upcast_ref: direct and FFI IDs differ. This is a bug, please report to arbor-rust maintainers."
            );

            std::mem::forget(ffi_dest);
        }
    }

    /// Verify that the object is non-null and alive. In Debug mode, additionally verify that it is of type `T` or derived.
    pub(crate) fn check_rtti(&self, method_name: &'static str) {
        let call_ctx = CallContext::gd::<T>(method_name);

        let instance_id = self.check_dynamic_type(&call_ctx);
        classes::ensure_object_alive(instance_id, self.obj_sys(), &call_ctx);
    }

    /// Checks only type, not alive-ness. Used in Gd<T> in case of `free()`.
    pub(crate) fn check_dynamic_type(&self, call_ctx: &CallContext<'static>) -> InstanceId {
        debug_assert!(
            !self.is_null(),
            "{call_ctx}: cannot call method on null object",
        );

        let rtti = self.cached_rtti.as_ref();

        // SAFETY: code surrounding RawGd<T> ensures that `self` is non-null; above is just a sanity check against internal bugs.
        let rtti = unsafe { rtti.unwrap_unchecked() };

        #[cfg(debug_assertions)]
        rtti.check_type::<T>();

        rtti.instance_id()
    }

    pub(crate) fn obj_sys(&self) -> sys::AxiObjectPtr {
        self.obj as sys::AxiObjectPtr
    }
}

// SAFETY:
// - `from_arg_ptr`: object arguments are passed as `T**`; we read the object pointer behind it and
//   initialize as strong ref, since ownership of arguments stays with the caller.
// - `move_return_ptr`: we write the object pointer into the return slot and forget `self`, passing
//   our reference to the caller.
unsafe impl<T> ArborFfi for RawGd<T>
where
    T: ArborClass,
{
    fn variant_type() -> VariantType {
        VariantType::Object
    }

    unsafe fn from_sys(ptr: sys::AxiTypePtr) -> Self {
        Self::from_obj_sys_weak(ptr as sys::AxiObjectPtr)
    }

    unsafe fn from_sys_init(init_fn: impl FnOnce(sys::AxiUninitializedTypePtr)) -> Self {
        let obj = raw_object_init(init_fn);
        Self::from_obj_sys_weak(obj)
    }

    fn sys(&self) -> sys::AxiTypePtr {
        self.obj.cast()
    }

    fn as_arg_ptr(&self) -> sys::AxiConstTypePtr {
        // Objects are passed as `T**` in argument position. The address of the field pointer matters;
        // copying it into a local variable would create a dangling pointer.
        //
        // We pass an object to an engine API. If the reference count needs to be incremented, the
        // callee will do so; no need to prematurely increment it here.
        ptr::addr_of!(self.obj) as sys::AxiConstTypePtr
    }

    unsafe fn from_arg_ptr(ptr: sys::AxiTypePtr) -> Self {
        if ptr.is_null() {
            return Self::null();
        }

        // ptr is `T**`.
        let obj_ptr = *(ptr as *mut sys::AxiObjectPtr);

        // obj_ptr is `T*`.
        Self::from_obj_sys(obj_ptr)
    }

    unsafe fn move_return_ptr(self, dst: sys::AxiTypePtr) {
        ptr::write(dst as *mut _, self.obj);

        // We've passed ownership to caller.
        std::mem::forget(self);
    }
}

impl<T: ArborClass> ArborConvert for RawGd<T> {
    type Via = Self;
}

impl<T: ArborClass> ToArbor for RawGd<T> {
    fn to_arbor(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: ArborClass> FromArbor for RawGd<T> {
    fn try_from_arbor(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: ArborClass> ArborType for RawGd<T> {
    type Ffi = Self;

    fn to_ffi(&self) -> Self::Ffi {
        self.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi)
    }

    fn class_name() -> ClassName {
        T::class_name()
    }
}

impl<T: ArborClass> ArborFfiVariant for RawGd<T> {
    fn ffi_to_variant(&self) -> Variant {
        object_ffi_to_variant(self)
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let variant_type = variant.get_type();

        // Explicit type check before converting, to allow for better error messages.
        if variant_type != VariantType::Object {
            return Err(FromVariantError::BadType {
                expected: VariantType::Object,
                actual: variant_type,
            }
            .into_error(variant.clone()));
        }

        let raw = unsafe {
            // Uses RawGd<Object> and not Self, because the engine converts to the dynamic object class
            // regardless of the target type. Type correctness is ensured with the cast below.
            RawGd::<classes::Object>::from_sys_init(|self_ptr| {
                let converter = sys::variant_conv_api().to_type_constructor(VariantType::Object);
                converter(self_ptr, variant.var_sys());
            })
        };

        // The conversion above does not increment the reference count; take ownership explicitly.
        raw.with_inc_refcount().owned_cast().map_err(|raw| {
            FromVariantError::WrongClass {
                expected: T::class_name(),
            }
            .into_error(raw)
        })
    }
}

impl<T: ArborClass> ArborNullableFfi for RawGd<T> {
    fn flatten_option(opt: Option<Self>) -> Self {
        opt.unwrap_or_else(Self::null)
    }

    fn is_null(&self) -> bool {
        Self::is_null(self)
    }
}

/// Destructor with semantics depending on memory strategy.
///
/// * If this `RawGd` smart pointer holds a reference-counted type, this will decrement the reference counter.
///   If this was the last remaining reference, dropping it will invoke `T`'s destructor.
///
/// * If the held object is manually-managed, **nothing happens**.
///   To destroy manually-managed `RawGd` pointers, you need to call [`crate::obj::Gd::free()`].
impl<T: ArborClass> Drop for RawGd<T> {
    fn drop(&mut self) {
        // No-op for manually managed objects

        out!("RawGd::drop:      {self:?}");

        // SAFETY: This `RawGd` won't be dropped again after this.
        let is_last = unsafe { T::DynMemory::maybe_dec_ref(self) }; // may drop
        if is_last {
            unsafe {
                interface_fn!(object_destroy)(self.obj_sys());
            }
        }
    }
}

impl<T: ArborClass> Clone for RawGd<T> {
    fn clone(&self) -> Self {
        out!("RawGd::clone:     {self:?}  (before clone)");

        let cloned = if self.is_null() {
            Self::null()
        } else {
            self.check_rtti("clone");

            // Create new object, adopt cached fields.
            let copy = Self {
                obj: self.obj,
                cached_rtti: self.cached_rtti.clone(),
            };
            copy.with_inc_refcount()
        };

        out!("                  {self:?}  (after clone)");
        cloned
    }
}

impl<T: ArborClass> fmt::Debug for RawGd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        classes::debug_string_nullable(self, f, "RawGd")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Reusable functions, also shared with Gd and Variant.

/// Runs `init_fn` on the address of a pointer (initialized to null), then returns that pointer, possibly still null.
///
/// This relies on the fact that an object pointer takes up the same space as the FFI representation of an object.
/// The pointer is thus used as an opaque handle, initialized by `init_fn`, so that it represents a valid Arbor object afterwards.
///
/// # Safety
/// `init_fn` must be a function that correctly handles a _type pointer_ pointing to an _object pointer_.
#[doc(hidden)]
pub unsafe fn raw_object_init(
    init_fn: impl FnOnce(sys::AxiUninitializedTypePtr),
) -> sys::AxiObjectPtr {
    // return_ptr has type AxiTypePtr = AxiObjectPtr* = Object**
    // (in other words, the type-ptr contains the _address_ of an object-ptr).
    let mut object_ptr: sys::AxiObjectPtr = ptr::null_mut();
    let return_ptr: *mut sys::AxiObjectPtr = ptr::addr_of_mut!(object_ptr);

    init_fn(return_ptr as sys::AxiUninitializedTypePtr);

    // We don't need to know if Object** is null, but if Object* is null; return_ptr has the address of a local (never null).
    object_ptr
}

pub(crate) fn object_ffi_to_variant<T: ArborFfi>(self_: &T) -> Variant {
    // The conversion constructor DOES increment the reference-count of the object; so nothing to do here.
    // (This behaves differently in the opposite direction, see ffi_from_variant().)

    unsafe {
        Variant::from_var_sys_init(|variant_ptr| {
            let converter = sys::variant_conv_api().from_type_constructor(VariantType::Object);

            // Note: type pointers sometimes mean `Object**` and sometimes `Object*`; in conversion
            // constructors it is the former, thus the extra indirection here.
            let type_ptr = self_.sys();
            converter(variant_ptr, ptr::addr_of!(type_ptr) as sys::AxiTypePtr);
        })
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ops::{Deref, DerefMut};

use arbor_ffi as sys;

use crate::meta::error::{ConvertError, FromFfiError};
use crate::meta::{ArborConvert, ArborType, ClassName, FromArbor, ToArbor};
use crate::obj::bounds::DynMemory as _;
use crate::obj::{bounds, cap, ArborClass, Bounds, Inherits, InstanceId, WithSignals};
use crate::{classes, out};

use super::RawGd;

/// Smart pointer to objects owned by the Arbor engine.
///
/// This smart pointer can only hold _objects_ in the Arbor sense: instances of engine classes
/// (`Node`, `RefCounted`, etc.). It does **not** hold built-in types (`Vector2`, `Color`, `i64`).
///
/// `Gd<T>` never holds null objects. If you need nullability, use `Option<Gd<T>>`.
///
/// # Memory management
///
/// This smart pointer behaves differently depending on `T`'s associated types, see [`Bounds`] for their documentation.
/// In particular, the memory management strategy is fully dependent on `T`:
///
/// - **Reference-counted**<br>
///   Objects of type [`RefCounted`] or inherited from it are **reference-counted**. This means that every time a smart pointer is
///   shared using [`Clone::clone()`], the reference counter is incremented, and every time one is dropped, it is decremented.
///   This ensures that the last reference (either in Rust or the engine) will deallocate the object.<br><br>
///
/// - **Manual**<br>
///   Objects inheriting from [`Object`] which are not `RefCounted` (or inherited) are **manually-managed**.
///   Their destructor is not automatically called (unless they are part of the scene tree). Creating a `Gd<T>` means that
///   you are responsible of explicitly deallocating such objects using [`free()`][Self::free].<br><br>
///
/// - **Dynamic**<br>
///   For `T=Object`, the memory strategy is determined **dynamically**. Due to polymorphism, a `Gd<Object>` can point to either
///   reference-counted or manually-managed types at runtime. The behavior corresponds to one of the two previous points.
///   Note that if the dynamic type is also `Object`, the memory is manually-managed.
///
/// # Construction
///
/// To construct default instances of various `Gd<T>` types, there are extension methods on the type `T` itself:
///
/// * [`T::new_gd()`][crate::obj::NewGd::new_gd] for reference-counted types.
/// * [`T::new_alloc()`][crate::obj::NewAlloc::new_alloc] for manually-managed types.
///
/// In addition, the smart pointer can be constructed in multiple ways:
///
/// * [`Gd::default()`] for reference-counted types. `Gd::<T>::default()` is equivalent to the shorter `T::new_gd()` and
///   primarily useful for derives or generics.
/// * [`Gd::from_instance_id(id)`][Gd::from_instance_id] and [`Gd::try_from_instance_id(id)`][Gd::try_from_instance_id]
///   to obtain a pointer to an object which is already alive in the engine.
///
/// [`Object`]: classes::Object
/// [`RefCounted`]: classes::RefCounted
#[repr(C)] // must be layout compatible with engine classes
pub struct Gd<T: ArborClass> {
    // Note: `raw` has the same layout as AxiObjectPtr == Object* in the engine, i.e. the bytes represent a pointer.
    // To receive an AxiTypePtr == AxiObjectPtr* == Object**, we need to get the address of this.
    // Hence separate sys() for AxiTypePtr, and obj_sys() for AxiObjectPtr.
    pub(crate) raw: RawGd<T>,
}

/// _The methods in this impl block are available for any `T`._ <br><br>
impl<T: ArborClass> Gd<T> {
    /// Looks up the given instance ID and returns the associated object, if possible.
    ///
    /// If no such instance ID is registered, or if the dynamic type of the object behind that instance ID
    /// is not compatible with `T`, then `None` is returned.
    pub fn try_from_instance_id(instance_id: InstanceId) -> Option<Self> {
        let object_ptr = classes::object_ptr_from_id(instance_id)?;

        // SAFETY: assumes that the returned AxiObjectPtr is convertible to Object* (i.e. the engine upcast doesn't modify the pointer).
        let untyped = unsafe { Gd::<classes::Object>::from_obj_sys(object_ptr) };

        untyped.owned_cast::<T>().ok()
    }

    /// ⚠️ Looks up the given instance ID and returns the associated object.
    ///
    /// # Panics
    /// If no such instance ID is registered, or if the dynamic type of the object behind that instance ID
    /// is not compatible with `T`.
    pub fn from_instance_id(instance_id: InstanceId) -> Self {
        Self::try_from_instance_id(instance_id).unwrap_or_else(|| {
            panic!(
                "instance ID {} does not belong to a valid object of class '{}'",
                instance_id,
                T::class_name()
            )
        })
    }

    /// Returns the instance ID of this object, or `None` if the object is dead.
    pub(crate) fn instance_id_or_none(&self) -> Option<InstanceId> {
        let known_id = self.instance_id_unchecked();

        // Refreshes the internal cached ID on every call, as we cannot be sure that the object has not been
        // destroyed since last time. The only reliable way to find out is to check with the engine.
        if self.raw.is_instance_valid() {
            Some(known_id)
        } else {
            None
        }
    }

    /// ⚠️ Returns the instance ID of this object (panics when dead).
    ///
    /// # Panics
    /// If this object is no longer alive (registered in the engine's object database).
    pub fn instance_id(&self) -> InstanceId {
        self.instance_id_or_none().unwrap_or_else(|| {
            panic!(
                "failed to call instance_id() on destroyed object; \
                use instance_id_or_none() or keep your objects alive"
            )
        })
    }

    /// Returns the last known, possibly invalid instance ID of this object.
    ///
    /// This function does not check that the returned instance ID points to a valid instance!
    /// Unless performance is a problem, use [`instance_id()`][Self::instance_id] instead.
    ///
    /// This method is safe and never panics.
    pub fn instance_id_unchecked(&self) -> InstanceId {
        // SAFETY:
        // A `Gd` can only be created from a non-null `RawGd`, so `raw.instance_id_unchecked()` will
        // always return `Some`.
        unsafe { self.raw.instance_id_unchecked().unwrap_unchecked() }
    }

    /// Checks if this smart pointer points to a live object (read description!).
    ///
    /// Using this method is often indicative of bad design; you should dispose of your pointers once an object is
    /// destroyed. However, this method exists because the engine scripting API offers it and there may be **rare** use cases.
    ///
    /// Do not use this method to check if you can safely access an object. Accessing dead objects is generally safe
    /// and will panic in a defined manner. Encountering such panics is almost always a bug you should fix, and not a
    /// runtime condition to check against.
    pub fn is_instance_valid(&self) -> bool {
        // This call refreshes the instance ID, and recognizes dead objects.
        self.instance_id_or_none().is_some()
    }

    /// **Upcast:** convert into a smart pointer to a base class. Always succeeds.
    ///
    /// Moves out of this value. If you want to create _another_ smart pointer instance,
    /// use this idiom:
    /// ```no_run
    /// # use arbor::prelude::*;
    /// let tree: Gd<Tree> = Tree::new_alloc();
    /// let base = tree.clone().upcast::<Node>();
    /// ```
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: ArborClass,
        T: Inherits<Base>,
    {
        self.owned_cast()
            .expect("upcast failed; this is a bug, please report it")
    }

    /// **Upcast shared-ref:** access this object as a shared reference to a base class.
    ///
    /// This is semantically equivalent to multiple applications of [`Deref`], but can be used in generic code.
    pub fn upcast_ref<Base>(&self) -> &Base
    where
        Base: ArborClass,
        T: Inherits<Base>,
    {
        // SAFETY: `T: Inherits<Base>` ensures that `Base` is a valid base class of `T`.
        unsafe { self.raw.as_upcast_ref::<Base>() }
    }

    /// **Upcast exclusive-ref:** access this object as an exclusive reference to a base class.
    ///
    /// This is semantically equivalent to multiple applications of [`DerefMut`], but can be used in generic code.
    pub fn upcast_mut<Base>(&mut self) -> &mut Base
    where
        Base: ArborClass,
        T: Inherits<Base>,
    {
        // SAFETY: `T: Inherits<Base>` ensures that `Base` is a valid base class of `T`.
        unsafe { self.raw.as_upcast_mut::<Base>() }
    }

    /// **Downcast:** try to convert into a smart pointer to a derived class.
    ///
    /// If `T`'s dynamic type is not `Derived` or one of its subclasses, `Err(self)` is returned, so the original
    /// object can still be used (e.g. to free it, if it is manually managed). Otherwise, `Ok` is returned and
    /// the ownership is moved to the returned value.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: ArborClass + Inherits<T>,
    {
        self.owned_cast()
    }

    /// ⚠️ **Downcast:** convert into a smart pointer to a derived class. Panics on error.
    ///
    /// # Panics
    /// If the class' dynamic type is not `Derived` or one of its subclasses. Use [`Self::try_cast()`] if you want to check the result.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: ArborClass + Inherits<T>,
    {
        self.owned_cast().unwrap_or_else(|from_obj| {
            panic!(
                "downcast from {from} to {to} failed; instance {from_obj:?}",
                from = T::class_name(),
                to = Derived::class_name(),
            )
        })
    }

    /// Returns `Ok(cast_obj)` on success, `Err(self)` on error.
    fn owned_cast<U>(self) -> Result<Gd<U>, Self>
    where
        U: ArborClass,
    {
        self.raw
            .owned_cast()
            .map(Gd::from_ffi)
            .map_err(Self::from_ffi)
    }

    /// Access to the signals of this object, to connect or emit them in a type-safe way.
    pub fn signals(&self) -> T::SignalCollection<T>
    where
        T: WithSignals,
    {
        T::__signals_from_external(self)
    }

    /// Create default instance for all types that have `ArborDefault`.
    ///
    /// Deliberately more loose than `Gd::default()`, does not require ref-counted memory strategy.
    pub(crate) fn default_instance() -> Self
    where
        T: cap::ArborDefault,
    {
        T::__arbor_default()
    }

    pub(crate) unsafe fn from_obj_sys_or_none(ptr: sys::AxiObjectPtr) -> Option<Self> {
        Self::try_from_ffi(RawGd::from_obj_sys(ptr)).ok()
    }

    /// Initializes this `Gd<T>` from the object pointer as a **strong ref**, meaning
    /// it initializes/increments the reference counter and keeps the object alive.
    ///
    /// This is the default for most initializations from FFI. In cases where reference counter
    /// should explicitly **not** be updated, [`Self::from_obj_sys_weak`] is available.
    pub(crate) unsafe fn from_obj_sys(ptr: sys::AxiObjectPtr) -> Self {
        Self::from_obj_sys_or_none(ptr).unwrap()
    }

    pub(crate) unsafe fn from_obj_sys_weak_or_none(ptr: sys::AxiObjectPtr) -> Option<Self> {
        Self::try_from_ffi(RawGd::from_obj_sys_weak(ptr)).ok()
    }

    pub(crate) unsafe fn from_obj_sys_weak(ptr: sys::AxiObjectPtr) -> Self {
        Self::from_obj_sys_weak_or_none(ptr).unwrap()
    }

    pub(crate) fn obj_sys(&self) -> sys::AxiObjectPtr {
        self.raw.obj_sys()
    }

    /// Returns the reference count, if the dynamic object is ref-counted.
    pub(crate) fn maybe_refcount(&self) -> Option<usize> {
        // Fast check if ref-counted, without downcast.
        self.instance_id_unchecked().is_ref_counted().then(|| {
            let refcount = self.raw.with_ref_counted(|refc| refc.get_reference_count());
            refcount as usize
        })
    }
}

impl<T: ArborClass> Deref for Gd<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.raw.as_target()
    }
}

impl<T: ArborClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.raw.as_target_mut()
    }
}

/// _The methods in this impl block are only available for objects `T` that are manually managed,
/// i.e. anything that is not `RefCounted` or inherited from it._ <br><br>
impl<T, M> Gd<T>
where
    T: ArborClass + Bounds<Memory = M>,
    M: bounds::Memory + bounds::PossiblyManual,
{
    /// Destroy the manually-managed Arbor object.
    ///
    /// Consumes this smart pointer and renders all other `Gd` smart pointers to the same object
    /// immediately invalid. Using those `Gd` instances will lead to panics, but not undefined behavior.
    ///
    /// This operation is **safe** and effectively prevents double-free.
    ///
    /// Not calling `free()` on manually-managed instances causes memory leaks, unless their ownership is delegated, for
    /// example to the node tree in case of nodes.
    ///
    /// # Panics
    /// - When the referred-to object has already been destroyed.
    /// - When this is invoked on an upcast `Gd<Object>` that dynamically points to a reference-counted type (i.e. operation not supported).
    pub fn free(self) {
        // Runtime check in case of T=Object, no-op otherwise.
        let ref_counted = T::DynMemory::is_ref_counted(&self.raw);
        assert_ne!(
            ref_counted,
            Some(true),
            "called free() on Gd<Object> which points to a RefCounted dynamic type; free() only supported for manually managed types\n\
            object: {self:?}"
        );

        // If ref_counted returned None, that means the instance was destroyed.
        assert!(
            ref_counted == Some(false) && self.is_instance_valid(),
            "called free() on already destroyed object"
        );

        // SAFETY: object must be alive, which was just checked above. No multithreading here.
        unsafe {
            sys::interface_fn!(object_destroy)(self.raw.obj_sys());
        }

        std::mem::forget(self);
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Trait impls

impl<T: ArborClass> ArborConvert for Gd<T> {
    type Via = Gd<T>;
}

impl<T: ArborClass> ToArbor for Gd<T> {
    fn to_arbor(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: ArborClass> FromArbor for Gd<T> {
    fn try_from_arbor(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: ArborClass> ArborType for Gd<T> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> Self::Ffi {
        self.raw.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self.raw
    }

    fn try_from_ffi(raw: Self::Ffi) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Err(FromFfiError::NullRawGd.into_error(()))
        } else {
            Ok(Self { raw })
        }
    }

    fn class_name() -> ClassName {
        T::class_name()
    }
}

impl<T> Default for Gd<T>
where
    T: cap::ArborDefault + Bounds<Memory = bounds::MemRefCounted>,
{
    /// Creates a default-constructed `T` inside a smart pointer.
    ///
    /// This is equivalent to the shorter expression `T::new_gd()`, and primarily useful for derives or generics.
    ///
    /// This trait is only implemented for reference-counted classes. Classes with manually-managed memory (e.g. `Node`) are not covered,
    /// because they need explicit memory management, and deriving `Default` has a high chance of the user forgetting to call `free()` on those.
    /// `T::new_alloc()` should be used for those instead.
    fn default() -> Self {
        T::__arbor_default()
    }
}

impl<T: ArborClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        out!("Gd::clone");
        Self::from_ffi(self.raw.clone())
    }
}

impl<T: ArborClass> PartialEq for Gd<T> {
    /// ⚠️ Returns whether two `Gd` pointers point to the same object.
    ///
    /// # Panics
    /// When `self` or `other` is dead.
    fn eq(&self, other: &Self) -> bool {
        // Panics when one is dead
        self.instance_id() == other.instance_id()
    }
}

impl<T: ArborClass> Eq for Gd<T> {}

impl<T: ArborClass> Display for Gd<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        classes::display_string(self, f)
    }
}

impl<T: ArborClass> Debug for Gd<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        classes::debug_string(self, f, "Gd")
    }
}

// Gd unwinding across panics does not invalidate any invariants;
// its mutability is anyway present, in the Arbor engine.
impl<T: ArborClass> std::panic::UnwindSafe for Gd<T> {}
impl<T: ArborClass> std::panic::RefUnwindSafe for Gd<T> {}

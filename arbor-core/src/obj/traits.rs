/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arbor_ffi as sys;

use crate::init::InitLevel;
use crate::meta::ClassName;
use crate::obj::{bounds, Bounds, Gd};

/// Makes `T` eligible to be managed by Arbor and stored in [`Gd<T>`][crate::obj::Gd] pointers.
///
/// The behavior of types implementing this trait is influenced by the associated types; check their documentation for information.
///
/// This trait is implemented by the generated engine classes; it is not meant to be implemented manually.
#[diagnostic::on_unimplemented(
    message = "only classes provided by the Arbor engine are allowed in this context"
)]
pub trait ArborClass: Bounds + 'static
where
    Self: Sized,
{
    /// The immediate superclass of `T`. This is always an Arbor engine class.
    type Base: ArborClass; // not EngineClass because it can be ()

    /// Globally unique class name, under which the class is registered with Arbor.
    fn class_name() -> ClassName;

    /// Initialization level, during which this class should be initialized with Arbor.
    ///
    /// It must not be less than `Base::INIT_LEVEL`.
    const INIT_LEVEL: InitLevel = <Self::Base as ArborClass>::INIT_LEVEL;

    /// Returns whether `Self` inherits from `Base`.
    ///
    /// This is reflexive, i.e `Self` inherits from itself.
    ///
    /// See also [`Inherits`] for a trait bound.
    fn inherits<Base: ArborClass>() -> bool {
        if Self::class_name() == Base::class_name() {
            true
        } else if Self::Base::class_name() == <NoBase>::class_name() {
            false
        } else {
            Self::Base::inherits::<Base>()
        }
    }
}

/// Type representing the absence of a base class, at the root of the hierarchy.
///
/// `NoBase` is used as the base class for exactly one class: [`Object`][crate::classes::Object].
///
/// This is an enum without any variants, as we should never construct an instance of this class.
pub enum NoBase {}

impl ArborClass for NoBase {
    type Base = NoBase;

    fn class_name() -> ClassName {
        ClassName::none()
    }

    const INIT_LEVEL: InitLevel = InitLevel::Core; // arbitrary; never read.
}

unsafe impl Bounds for NoBase {
    type Memory = bounds::MemManual;
    type DynMemory = bounds::MemManual;
}

/// Non-strict inheritance relationship in the Arbor class hierarchy.
///
/// `Derived: Inherits<Base>` means that either `Derived` is a subclass of `Base`, or the class `Base` itself (hence "non-strict").
///
/// This trait is automatically implemented for all engine classes. It has `ArborClass` as a supertrait, allowing your code to have
/// bounds solely on `Derived: Inherits<Base>` rather than `Derived: Inherits<Base> + ArborClass`.
///
/// Inheritance is transitive across indirect base classes: `Camera2D` implements `Inherits<Node>` and `Inherits<Object>`.
///
/// The trait is also reflexive: `T` always implements `Inherits<T>`.
///
/// # Usage
///
/// The primary use case for this trait is polymorphism: you write a function that accepts anything that derives from a certain class
/// (including the class itself):
/// ```no_run
/// # use arbor::prelude::*;
/// # use arbor::obj::Inherits;
/// fn print_node<T>(node: Gd<T>)
/// where
///     T: Inherits<Node>,
/// {
///     let up = node.upcast(); // type Gd<Node> inferred
///     println!("Node #{} with name {}", up.instance_id(), up.get_name());
///     up.free();
/// }
///
/// // Call with different types
/// print_node(Node::new_alloc());   // works on T=Node as well
/// print_node(Node2D::new_alloc()); // or derived classes
/// print_node(Node3D::new_alloc());
/// ```
///
/// A variation of the above pattern works without `Inherits` or generics, if you move the `upcast()` into the call site:
/// ```no_run
/// # use arbor::prelude::*;
/// fn print_node(node: Gd<Node>) { /* ... */ }
///
/// // Call with different types
/// print_node(Node::new_alloc());            // no upcast needed
/// print_node(Node2D::new_alloc().upcast());
/// print_node(Node3D::new_alloc().upcast());
/// ```
///
/// # Safety
///
/// This trait must only be implemented for subclasses of `Base`.
///
/// Importantly, this means it is always safe to upcast a value of type `Gd<Self>` to `Gd<Base>`.
pub unsafe trait Inherits<Base: ArborClass>: ArborClass {}

// SAFETY: Every class is a subclass of itself.
unsafe impl<T: ArborClass> Inherits<T> for T {}

/// Auto-implemented for all engine-provided classes, granting access to the underlying object pointer.
pub trait EngineClass: ArborClass {
    #[doc(hidden)]
    fn as_object_ptr(&self) -> sys::AxiObjectPtr;

    #[doc(hidden)]
    fn as_type_ptr(&self) -> sys::AxiTypePtr;
}

/// Auto-implemented for all engine-provided enums.
pub trait EngineEnum: Copy {
    fn try_from_ord(ord: i32) -> Option<Self>;

    /// Ordinal value of the enumerator, as specified in Arbor.
    /// This is not necessarily unique.
    fn ord(self) -> i32;

    fn from_ord(ord: i32) -> Self {
        Self::try_from_ord(ord)
            .unwrap_or_else(|| panic!("ordinal {ord} does not map to any enumerator"))
    }

    /// The name of the enumerator, as it appears in Rust.
    ///
    /// If the value does not match one of the known enumerators, the empty string is returned.
    fn as_str(&self) -> &'static str;
}

/// Implemented for all classes with registered signals.
///
/// This trait enables the [`Gd::signals()`] method.
// Inherits bound makes some up/downcasting in signals impl easier.
pub trait WithSignals: ArborClass + Inherits<crate::classes::Object> {
    /// The associated struct listing all signals of this class.
    ///
    /// `C` is the concrete class on which the signals are provided. This can be different than `Self` when signals of a base
    /// class are connected or emitted through a derived class.
    type SignalCollection<C>
    where
        C: WithSignals;

    /// Create from existing `Gd`, to enable `Gd::signals()`.
    ///
    /// Only used for constructing from a concrete class, so `C = Self` in the return type.
    #[doc(hidden)]
    fn __signals_from_external(external: &Gd<Self>) -> Self::SignalCollection<Self>;
}

/// Extension trait for all reference-counted classes.
pub trait NewGd: ArborClass {
    /// Return a new, ref-counted `Gd` containing a default-constructed instance.
    ///
    /// `MyClass::new_gd()` is equivalent to `Gd::<MyClass>::default()`.
    fn new_gd() -> Gd<Self>;
}

impl<T> NewGd for T
where
    T: cap::ArborDefault + Bounds<Memory = bounds::MemRefCounted>,
{
    fn new_gd() -> Gd<Self> {
        Gd::default()
    }
}

/// Extension trait for all manually managed classes.
pub trait NewAlloc: ArborClass {
    /// Return a new, manually-managed `Gd` containing a default-constructed instance.
    ///
    /// The result must be manually managed, e.g. by attaching it to the scene tree or calling `free()` after usage.
    /// Failure to do so will result in memory leaks.
    #[must_use]
    fn new_alloc() -> Gd<Self>;
}

impl<T> NewAlloc for T
where
    T: cap::ArborDefault + Bounds<Memory = bounds::MemManual>,
{
    fn new_alloc() -> Gd<Self> {
        Gd::default_instance()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Capability traits, providing dedicated functionalities for Arbor classes
pub mod cap {
    use super::*;

    /// Trait for all classes that are default-constructible from the Arbor engine.
    ///
    /// Implemented for every constructible engine class. Abstract classes such as `Font` or `CanvasItem` provide no
    /// constructor and do not implement this trait.
    ///
    /// This trait is not manually implemented, and you cannot call any methods. You can use it as a bound, but typically you'd
    /// use it indirectly through [`Gd::default()`][crate::obj::Gd::default()]. Note that `Gd::default()` has an additional
    /// requirement on being reference-counted, meaning not every `ArborDefault` class can automatically be used with
    /// `Gd::default()`.
    pub trait ArborDefault: ArborClass {
        /// Provides a default smart pointer instance, constructed through the class database.
        #[doc(hidden)]
        fn __arbor_default() -> Gd<Self>;
    }
}

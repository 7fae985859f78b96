/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! **arbor-rust** implements Rust bindings for AXI, the C interface of the [Arbor engine](https://arborengine.org).
//!
//! # Type categories
//!
//! Arbor is written in C++, which doesn't have the same strict guarantees about safety and
//! mutability that Rust does. As a result, not everything in this crate will look and feel
//! entirely "rusty". We distinguish three different kinds of types:
//!
//! 1. **Value types**: `i64`, `f64`, and mathematical types like
//!    [`Vector2`][crate::builtin::Vector2] and [`Color`][crate::builtin::Color].
//!
//!    These are the simplest to understand and to work with. They implement `Clone` and `Copy`,
//!    have the same memory layout as their counterparts in the engine, and have public fields.
//!
//! 2. **Copy-on-write types**: [`GString`][crate::builtin::GString] and
//!    [`StringName`][crate::builtin::StringName].
//!
//!    These mostly act like value types. You can `Clone` them to get a full copy of the entire
//!    object, as you would expect. Under the hood in the engine, they are implemented with
//!    copy-on-write, but that optimization is entirely hidden from the API.
//!
//! 3. **Engine objects**: [`Gd<T>`][crate::obj::Gd] smart pointers, where `T` is an engine class
//!    such as [`Node`][crate::classes::Node] or [`RigidBody3D`][crate::classes::RigidBody3D].
//!
//!    These share their underlying data between multiple instances: changes to one instance are
//!    visible in another. Classes inheriting [`RefCounted`][crate::classes::RefCounted] are
//!    automatically memory-managed; manually managed classes like `Node` must either be handed
//!    over to the engine (e.g. by adding a node to the scene tree) or freed explicitly using
//!    [`Gd::free()`][crate::obj::Gd::free].
//!
//! # Ergonomics and panics
//!
//! The library is designed with usage ergonomics in mind, making it viable for fast prototyping.
//! Methods like `cast()` panic with sophisticated messages when they fail, immediately giving you
//! the necessary context for debugging. Where you want to check assumptions dynamically, more
//! verbose `try_*` counterparts returning `Option` or `Result` are provided, e.g. `try_cast()`.
//!
//! # Cargo features
//!
//! * **`double-precision`**: use `f64` instead of `f32` for the floating-point type
//!   [`real`][type@builtin::real]. Requires an engine build with 64-bit floats.
//! * **`serde`**: implement [serde](https://docs.rs/serde)'s `Serialize` and `Deserialize` traits
//!   for certain built-in types. The serialized representation underlies **no stability guarantees**
//!   and may change at any time.
//! * **`debug-log`**: enable additional diagnostic output of the binding itself.
//!
//! # Public API
//!
//! Some symbols in the API are not intended for users, however Rust's visibility feature is not
//! strong enough to express that in all cases. The following API symbols are considered private:
//!
//! * Symbols annotated with `#[doc(hidden)]`.
//! * Any of the dependency crates (crate `arbor` is the only public interface).
//! * Modules named `private` and all their contents.
//!
//! Being private means a workflow is not supported, and there are no guarantees regarding API
//! stability for such symbols.

#[doc(inline)]
pub use arbor_core::{builtin, classes, global, init, meta, obj, signals};

#[doc(hidden)]
pub use arbor_core::sys;

#[doc(hidden)]
pub use arbor_core::private;

// Re-export macros at crate root (they are #[macro_export] in arbor-core).
pub use arbor_core::{arbor_entry_point, arbor_error, arbor_print, arbor_warn, real};

/// Often-imported symbols.
pub mod prelude {
    pub use super::builtin::__prelude_reexport::*;
    pub use super::builtin::math::FloatExt as _;

    pub use super::classes::{
        Camera2D, CanvasItem, Control, CpuParticles2D, Font, FontFile, Node, Node2D, Node3D,
        Object, PhysicsBody3D, Popup, PopupMenu, RefCounted, Resource, RigidBody3D, Tree, TreeItem,
    };
    pub use super::global::{arbor_error, arbor_print, arbor_warn};
    pub use super::arbor_entry_point;
    pub use super::init::{ExtensionLibrary, InitLevel};
    pub use super::obj::{Gd, InstanceId};

    // Make trait methods available.
    pub use super::meta::{FromArbor, ToArbor};
    pub use super::obj::ArborClass as _;
    pub use super::obj::EngineEnum as _;
    pub use super::obj::NewAlloc as _;
    pub use super::obj::NewGd as _;
    pub use super::obj::WithSignals as _;
}

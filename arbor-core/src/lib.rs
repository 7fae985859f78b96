/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Internal crate of [**arbor-rust**](https://arbor-rust.github.io), the Rust binding for the Arbor engine.
//!
//! Do not depend on this crate directly; use the `arbor` crate instead.

pub mod builtin;
pub mod classes;
pub mod global;
pub mod init;
pub mod meta;
pub mod obj;
pub mod signals;

pub use arbor_ffi as sys;
#[doc(hidden)]
pub use arbor_ffi::out;

#[doc(hidden)]
pub mod private;

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Types and traits related to objects.
//!
//! The most important symbols in this module are:
//! * [`ArborClass`], which is implemented for every class that the Arbor engine provides.
//! * [`Gd`], a smart pointer that manages instances of Arbor classes.

mod gd;
mod instance_id;
mod raw_gd;
mod traits;

pub(crate) mod rtti;

pub use gd::*;
pub use instance_id::*;
pub use raw_gd::*;
pub use traits::*;

pub mod bounds;
pub use bounds::private::Bounds;

// Do not re-export rtti here.

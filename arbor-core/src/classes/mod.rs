/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Maps the Arbor class API to Rust.
//!
//! This module contains the following symbols:
//! * Classes: `Camera2D`, `Tree`, `RigidBody3D`, etc.
//! * Sidecar modules with related enum/flag and builder types: `camera_2d`, `tree`, etc.
//!
//! Class methods that take default parameters additionally come in an `*_ex` flavor, returning
//! an `Ex*` builder from the class's sidecar module.

mod class_runtime;

pub mod camera_2d;
mod canvas_item;
pub mod control;
pub mod cpu_particles_2d;
pub mod font;
mod font_file;
pub mod node;
mod node_2d;
mod node_3d;
pub mod object;
mod physics_body_3d;
mod popup;
pub mod popup_menu;
mod ref_counted;
mod resource;
pub mod rigid_body_3d;
pub mod tree;
pub mod tree_item;

pub use camera_2d::re_export::*;
pub use canvas_item::re_export::*;
pub use control::re_export::*;
pub use cpu_particles_2d::re_export::*;
pub use font::re_export::*;
pub use font_file::re_export::*;
pub use node::re_export::*;
pub use node_2d::re_export::*;
pub use node_3d::re_export::*;
pub use object::re_export::*;
pub use physics_body_3d::re_export::*;
pub use popup::re_export::*;
pub use popup_menu::re_export::*;
pub use ref_counted::re_export::*;
pub use resource::re_export::*;
pub use rigid_body_3d::re_export::*;
pub use tree::re_export::*;
pub use tree_item::re_export::*;

pub(crate) use class_runtime::*;

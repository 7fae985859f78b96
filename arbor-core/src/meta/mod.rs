/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about variant types, conversions and class names.

mod arbor_convert;
mod class_name;
mod param_tuple;
mod sealed;
mod signature;
mod traits;

pub mod error;

pub use arbor_convert::{ArborConvert, FromArbor, ToArbor};
pub use class_name::ClassName;
pub use param_tuple::{InParamTuple, OutParamTuple, ParamTuple};
pub use traits::ArborType;

pub(crate) use crate::impl_arbor_as_self;
pub(crate) use traits::ArborFfiVariant;

#[doc(hidden)]
pub use signature::*;

/// Tears down all global caches in this module.
///
/// # Safety
/// Must only be called during library deinitialization, when no other threads access the binding.
pub(crate) unsafe fn cleanup() {
    class_name::cleanup();
}

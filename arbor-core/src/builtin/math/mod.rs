/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod approx_eq;
mod float;
mod glam_helpers;

pub use crate::{assert_eq_approx, assert_ne_approx};
pub use approx_eq::ApproxEq;
pub use float::FloatExt;

// Internal glam re-exports
pub(crate) use glam::IVec2;
pub(crate) use glam_helpers::*;

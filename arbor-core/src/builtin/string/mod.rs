/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Arbor types that are Strings.

mod gstring;
mod string_name;

use crate::meta::error::ConvertError;
use crate::meta::{ArborConvert, FromArbor, ToArbor};

pub use gstring::GString;
pub use string_name::StringName;

impl ArborConvert for &str {
    type Via = GString;
}

impl ToArbor for &str {
    fn to_arbor(&self) -> Self::Via {
        GString::from(*self)
    }
}

impl ArborConvert for String {
    type Via = GString;
}

impl ToArbor for String {
    fn to_arbor(&self) -> Self::Via {
        GString::from(self)
    }
}

impl FromArbor for String {
    fn try_from_arbor(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via.to_string())
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::sys;

mod impls;

/// Represents a parameter list as Rust tuple where each tuple element is one parameter.
///
/// This trait only contains metadata for the parameter list, the actual functionality is contained in [`InParamTuple`] and
/// [`OutParamTuple`].
pub trait ParamTuple: Sized {
    /// The number of elements in this parameter list.
    const LEN: usize;

    /// Return a string representing the arguments.
    fn format_args(&self) -> String;
}

/// Represents a parameter list that is received from some external location (usually the engine).
///
/// As an example, this is used for closures invoked through a [`Callable`](crate::builtin::Callable), such as
/// typed signal handlers. It is _not_ used when calling an engine function from Rust code.
pub trait InParamTuple: ParamTuple {
    /// Converts `array` to `Self` by calling [`from_variant`](crate::meta::FromArbor::from_variant) on each argument.
    fn from_variant_array(array: &[&Variant]) -> Self;
}

/// Represents a parameter list that is used to call some external code.
///
/// As an example, this is used to call engine functions through FFI. It is _not_ used when the engine calls back
/// into a Rust closure.
pub trait OutParamTuple: ParamTuple {
    /// Call `f` on the tuple `self` by first converting `self` to an array of [`Variant`]s.
    fn with_variants<F, R>(self, f: F) -> R
    where
        F: FnOnce(&[Variant]) -> R;

    /// Call `f` on the tuple `self` by first converting `self` to an array of engine type pointers.
    #[doc(hidden)]
    fn with_type_pointers<F, R>(self, f: F) -> R
    where
        F: FnOnce(&[sys::AxiConstTypePtr]) -> R;

    /// Converts `self` to a `Vec` by calling [`to_variant`](crate::meta::ToArbor::to_variant) on each argument.
    fn to_variant_array(&self) -> Vec<Variant>;
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low level bindings to AXI, the C extension API of the Arbor engine.
//!
//! Loads the engine's function-pointer table at startup, owns the global binding storage and the
//! per-init-level method-bind caches, and defines how Rust values cross the AXI pointer boundary
//! ([`ArborFfi`], [`ffi_methods!`](crate::ffi_methods)).

#![cfg_attr(test, allow(unused))]

mod arbor_ffi;
mod axi;
mod binding;
mod central;
mod global;
mod init_level;
mod interface_init;
mod method_tables;
mod opaque;
mod string_cache;
mod toolbox;

pub use arbor_ffi::{ArborFfi, ArborNullableFfi};
pub use axi::*;
pub use binding::*;
pub use central::*;
pub use global::{Global, GlobalGuard};
pub use init_level::InitLevel;
pub use method_tables::{lazy_keys, ClassMethodTable, VariantConversionTable};
pub use string_cache::StringCache;
pub use toolbox::*;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Initialization

/// Initializes the binding: loads the AXI interface and sets up global storage.
///
/// # Safety
///
/// - `get_proc_address` must be the pointer the engine passed to the extension entry point.
/// - `library` must be the library pointer given by Arbor at initialization.
/// - Must be called exactly once, before any other function of this crate.
pub unsafe fn initialize(
    get_proc_address: AxiInterfaceGetProcAddress,
    library: AxiClassLibraryPtr,
    config: ArborConfig,
) {
    out!("initialize arbor-rust...");

    interface_init::ensure_runtime_compatibility(get_proc_address);

    let interface = interface_init::load_interface(get_proc_address);
    let variant_conv_table = VariantConversionTable::load(&interface);

    binding::initialize_binding(ArborBinding::new(
        interface,
        library,
        variant_conv_table,
        config,
    ));

    out!("arbor-rust initialized.");
}

/// Deinitializes the binding and drops all cached engine handles.
///
/// # Safety
///
/// - Must be called exactly once, after [`initialize`].
/// - No other function of this crate may be called afterwards or concurrently.
pub unsafe fn deinitialize() {
    binding::deinitialize_binding();

    out!("arbor-rust deinitialized.");
}

/// Creates the method-bind cache for classes of the given init level.
///
/// # Safety
///
/// - The binding must be initialized.
/// - Must only be called once per level.
pub unsafe fn load_class_method_table(level: InitLevel) {
    match level {
        InitLevel::Core => initialize_class_core_method_table(ClassMethodTable::load()),
        InitLevel::Servers => initialize_class_servers_method_table(ClassMethodTable::load()),
        InitLevel::Scene => initialize_class_scene_method_table(ClassMethodTable::load()),
        InitLevel::Editor => initialize_class_editor_method_table(ClassMethodTable::load()),
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

#[macro_export]
#[doc(hidden)]
macro_rules! interface_fn {
    ($name:ident) => {{
        unsafe { $crate::get_interface().$name.unwrap_unchecked() }
    }};
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Call helpers

#[doc(hidden)]
#[inline]
pub fn default_call_error() -> AxiCallError {
    AxiCallError {
        error: AXI_CALL_OK,
        argument: -1,
        expected: -1,
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{AxiClassLibraryPtr, AxiInterface, ClassMethodTable, VariantConversionTable};

mod storage;

use storage::{BindingStorage, ManualInitCell};

// Note: this is `Sync` and `Send` because all its fields are. We have avoided implementing `Sync`
// and `Send` for `ArborBinding` as that could hide issues if any of the field types are changed to
// no longer be sync/send, but the manual implementation for `ArborBinding` wouldn't detect that.
pub(crate) struct ArborBinding {
    interface: AxiInterface,
    library: ClassLibraryPtr,
    variant_conv_table: VariantConversionTable,
    class_core_method_table: ManualInitCell<ClassMethodTable>,
    class_servers_method_table: ManualInitCell<ClassMethodTable>,
    class_scene_method_table: ManualInitCell<ClassMethodTable>,
    class_editor_method_table: ManualInitCell<ClassMethodTable>,
    config: ArborConfig,
}

impl ArborBinding {
    pub fn new(
        interface: AxiInterface,
        library: AxiClassLibraryPtr,
        variant_conv_table: VariantConversionTable,
        config: ArborConfig,
    ) -> Self {
        Self {
            interface,
            library: ClassLibraryPtr(library),
            variant_conv_table,
            class_core_method_table: ManualInitCell::new(),
            class_servers_method_table: ManualInitCell::new(),
            class_scene_method_table: ManualInitCell::new(),
            class_editor_method_table: ManualInitCell::new(),
            config,
        }
    }
}

/// Runtime-queryable binding settings, provided by the `ExtensionLibrary` impl at load time.
pub struct ArborConfig {
    /// Whether editor-only functionality of this library should stay dormant outside the editor.
    pub tool_only_in_editor: bool,
}

impl ArborConfig {
    pub fn new(tool_only_in_editor: bool) -> Self {
        Self {
            tool_only_in_editor,
        }
    }
}

/// Newtype around `AxiClassLibraryPtr` so we can implement `Sync` and `Send` manually for this.
struct ClassLibraryPtr(AxiClassLibraryPtr);

// SAFETY: This implementation of `Sync` and `Send` does not guarantee that reading from or writing to the pointer is actually
// thread safe. It merely means we can send/share the pointer itself between threads. Which is safe since any place that actually
// reads/writes to this pointer must ensure they do so in a thread safe manner.
//
// So these implementations effectively just pass the responsibility for thread safe usage of the library pointer onto whomever
// reads/writes to the pointer from a different thread. Since doing so requires `unsafe` anyway this is something we can do soundly.
unsafe impl Sync for ClassLibraryPtr {}
// SAFETY: See `Sync` impl safety doc.
unsafe impl Send for ClassLibraryPtr {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// # Safety
/// The table must not have been initialized yet.
unsafe fn initialize_table<T>(table: &ManualInitCell<T>, value: T, what: &str) {
    debug_assert!(
        !table.is_initialized(),
        "method table for {what} should only be initialized once"
    );

    table.set(value)
}

/// # Safety
/// The table must have been initialized.
unsafe fn get_table<'a, T>(table: &'a ManualInitCell<T>, msg: &str) -> &'a T {
    debug_assert!(table.is_initialized(), "{msg}");

    table.get_unchecked()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API

/// # Safety
///
/// The Arbor binding must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn get_interface() -> &'static AxiInterface {
    &get_binding().interface
}

/// # Safety
///
/// The Arbor binding must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn get_library() -> AxiClassLibraryPtr {
    get_binding().library.0
}

/// # Safety
///
/// The Arbor binding must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn variant_conv_api() -> &'static VariantConversionTable {
    &get_binding().variant_conv_table
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - The class core method table must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn class_core_api() -> &'static ClassMethodTable {
    get_table(
        &get_binding().class_core_method_table,
        "cannot fetch classes; init level 'Core' not yet loaded",
    )
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - The class servers method table must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn class_servers_api() -> &'static ClassMethodTable {
    get_table(
        &get_binding().class_servers_method_table,
        "cannot fetch classes; init level 'Servers' not yet loaded",
    )
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - The class scene method table must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn class_scene_api() -> &'static ClassMethodTable {
    get_table(
        &get_binding().class_scene_method_table,
        "cannot fetch classes; init level 'Scene' not yet loaded",
    )
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - The class editor method table must have been initialized before calling this function.
#[inline(always)]
pub unsafe fn class_editor_api() -> &'static ClassMethodTable {
    get_table(
        &get_binding().class_editor_method_table,
        "cannot fetch classes; init level 'Editor' not yet loaded",
    )
}

/// # Safety
///
/// The Arbor binding must have been initialized before calling this function.
#[inline]
pub unsafe fn config() -> &'static ArborConfig {
    &get_binding().config
}

#[inline]
pub fn is_initialized() -> bool {
    BindingStorage::is_initialized()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Crate-local implementation

/// Initializes the Arbor binding.
///
/// Most other functions in this module rely on this function being called first as a safety condition.
///
/// # Safety
///
/// Must not be called concurrently with other functions that interact with the binding.
pub(crate) unsafe fn initialize_binding(binding: ArborBinding) {
    BindingStorage::initialize(binding);
}

/// Deinitializes the Arbor binding.
///
/// # Safety
///
/// See [`initialize_binding`].
pub(crate) unsafe fn deinitialize_binding() {
    BindingStorage::deinitialize();
}

/// # Safety
///
/// The Arbor binding must have been initialized before calling this function.
#[inline(always)]
pub(crate) unsafe fn get_binding() -> &'static ArborBinding {
    BindingStorage::get_binding_unchecked()
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - Must only be called once.
pub(crate) unsafe fn initialize_class_core_method_table(table: ClassMethodTable) {
    initialize_table(
        &get_binding().class_core_method_table,
        table,
        "classes (Core level)",
    )
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - Must only be called once.
pub(crate) unsafe fn initialize_class_servers_method_table(table: ClassMethodTable) {
    initialize_table(
        &get_binding().class_servers_method_table,
        table,
        "classes (Servers level)",
    )
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - Must only be called once.
pub(crate) unsafe fn initialize_class_scene_method_table(table: ClassMethodTable) {
    initialize_table(
        &get_binding().class_scene_method_table,
        table,
        "classes (Scene level)",
    )
}

/// # Safety
///
/// - The Arbor binding must have been initialized before calling this function.
/// - Must only be called once.
pub(crate) unsafe fn initialize_class_editor_method_table(table: ClassMethodTable) {
    initialize_table(
        &get_binding().class_editor_method_table,
        table,
        "classes (Editor level)",
    )
}

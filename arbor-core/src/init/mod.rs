/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::atomic::{AtomicBool, Ordering::Relaxed};

use arbor_ffi as sys;

#[doc(hidden)]
pub unsafe fn __arbor_load_library<E: ExtensionLibrary>(
    get_proc_address: sys::AxiInterfaceGetProcAddress,
    library: sys::AxiClassLibraryPtr,
    init: *mut sys::AxiInitialization,
) -> sys::AxiBool {
    let init_code = || {
        let tool_only_in_editor = match E::editor_run_behavior() {
            EditorRunBehavior::ToolClassesOnly => true,
            EditorRunBehavior::AllClasses => false,
        };

        let config = sys::ArborConfig::new(tool_only_in_editor);

        sys::initialize(get_proc_address, library, config);

        // Currently no way to express failure; could be exposed to E if necessary.
        // No early exit, unclear if Arbor still requires output parameters to be set.
        let success = true;

        let arbor_init_params = sys::AxiInitialization {
            minimum_initialization_level: E::min_level().to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(ffi_initialize_layer::<E>),
            deinitialize: Some(ffi_deinitialize_layer::<E>),
        };

        *init = arbor_init_params;

        success as sys::AxiBool
    };

    let ctx = || "error when loading Arbor extension library";
    let is_success = crate::private::handle_panic(ctx, init_code);

    is_success.unwrap_or(0)
}

static LEVEL_SERVERS_CORE_LOADED: AtomicBool = AtomicBool::new(false);

unsafe extern "C" fn ffi_initialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::AxiInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);
    let ctx = || format!("failed to initialize AXI level `{level:?}`");

    fn try_load<E: ExtensionLibrary>(level: InitLevel) {
        // The engine only calls back for levels >= min_level(). The method tables of the lower levels must
        // still be loaded, so catch up on them when the first callback arrives.
        if level == InitLevel::Scene {
            if !LEVEL_SERVERS_CORE_LOADED.load(Relaxed) {
                try_load::<E>(InitLevel::Core);
                try_load::<E>(InitLevel::Servers);
            }
        } else if level == InitLevel::Core {
            LEVEL_SERVERS_CORE_LOADED.store(true, Relaxed);
        }

        // SAFETY: Arbor will call this from the main thread, after `__arbor_load_library` where the library is
        // initialized, and only once per level.
        unsafe { arbor_on_level_init(level) };
        E::on_level_init(level);
    }

    // Swallow panics.
    let _ = crate::private::handle_panic(ctx, || {
        try_load::<E>(level);
    });
}

unsafe extern "C" fn ffi_deinitialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::AxiInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);
    let ctx = || format!("failed to deinitialize AXI level `{level:?}`");

    // Swallow panics.
    let _ = crate::private::handle_panic(ctx, || {
        if level == InitLevel::Core {
            // Once the Core api is unloaded, reset the flag to initial state.
            LEVEL_SERVERS_CORE_LOADED.store(false, Relaxed);
        }

        E::on_level_deinit(level);
        arbor_on_level_deinit(level);
    });
}

/// Internal tasks upon loading an initialization level. Called before user code.
///
/// # Safety
///
/// - Must be called from the main thread.
/// - The interface must have been initialized.
/// - Must only be called once per level.
#[deny(unsafe_op_in_unsafe_fn)]
unsafe fn arbor_on_level_init(level: InitLevel) {
    // SAFETY: we are in the main thread, initialize has been called, has never been called with this level before.
    unsafe { sys::load_class_method_table(level) };
}

/// Internal tasks upon unloading an initialization level. Called after user code.
fn arbor_on_level_deinit(level: InitLevel) {
    if level == InitLevel::Core {
        // If the lowest level is unloaded, call global deinitialization.
        // No business logic by itself, but ensures consistency if the library is loaded again.

        // Garbage-collect various statics.
        // SAFETY: this is the last time meta APIs are used.
        unsafe {
            crate::meta::cleanup();
        }

        // SAFETY: called after all other logic, so no concurrent access.
        unsafe {
            sys::deinitialize();
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Defines the entry point for an Arbor extension library.
///
/// Every library should have exactly one implementation of this trait. It is always used in combination with the
/// [`arbor_entry_point!`][crate::arbor_entry_point] macro.
///
/// The simplest usage is as follows. This will automatically perform the necessary init and cleanup routines.
///
/// ```no_run
/// use arbor::init::*;
/// use arbor::arbor_entry_point;
///
/// // This is just a type tag without any functionality. Its name is irrelevant.
/// struct MyExtension;
///
/// unsafe impl ExtensionLibrary for MyExtension {}
///
/// arbor_entry_point!(MyExtension);
/// ```
///
/// # Safety
/// The library cannot enforce any safety guarantees outside Rust code, which means that **you as a user** are
/// responsible to uphold them: namely in engine scripts or other extension bindings loaded by the engine.
/// Violating this may cause undefined behavior, even when invoking _safe_ functions.
pub unsafe trait ExtensionLibrary {
    /// Determines if and how an extension's code is run in the editor.
    fn editor_run_behavior() -> EditorRunBehavior {
        EditorRunBehavior::ToolClassesOnly
    }

    /// Determines the initialization level at which the extension is loaded (`Scene` by default).
    ///
    /// If the level is lower than [`InitLevel::Scene`], the engine needs to be restarted to take effect.
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    /// Custom logic when a certain init-level of Arbor is loaded.
    ///
    /// This will only be invoked for levels >= [`Self::min_level()`], in ascending order. Use `if` or `match` to hook to specific levels.
    #[allow(unused_variables)]
    fn on_level_init(level: InitLevel) {
        // Nothing by default.
    }

    /// Custom logic when a certain init-level of Arbor is unloaded.
    ///
    /// This will only be invoked for levels >= [`Self::min_level()`], in descending order. Use `if` or `match` to hook to specific levels.
    #[allow(unused_variables)]
    fn on_level_deinit(level: InitLevel) {
        // Nothing by default.
    }
}

/// Determines if and how an extension's code is run in the editor.
///
/// By default, the Arbor editor runs all extension code, which is often undesired for logic that is only meant
/// for the game itself. The default behavior therefore keeps extension callbacks dormant inside the editor
/// (see [`ToolClassesOnly`][Self::ToolClassesOnly]). It is possible to configure this.
///
/// See also [`ExtensionLibrary::editor_run_behavior()`].
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub enum EditorRunBehavior {
    /// Only runs tool logic in the editor.
    ///
    /// All functionality is loaded, and calls from the engine into Rust are possible. However, game lifecycle
    /// logic is not run unless explicitly marked as tool code.
    ToolClassesOnly,

    /// Runs the extension with full functionality in editor.
    AllClasses,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Stage of the Arbor initialization process.
///
/// Arbor's initialization and deinitialization processes are split into multiple stages, like a stack. At each level,
/// a different amount of engine functionality is available. Deinitialization happens in reverse order.
///
/// See also:
/// - [`ExtensionLibrary::on_level_init()`]
/// - [`ExtensionLibrary::on_level_deinit()`]
pub type InitLevel = sys::InitLevel;

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Defines the `#[no_mangle]` entry point symbol that Arbor loads from an extension library.
///
/// Takes the type implementing [`ExtensionLibrary`] as its single argument. See that trait for an example.
#[macro_export]
macro_rules! arbor_entry_point {
    ($Library:ty) => {
        #[no_mangle]
        unsafe extern "C" fn arbor_rust_init(
            get_proc_address: $crate::sys::AxiInterfaceGetProcAddress,
            library: $crate::sys::AxiClassLibraryPtr,
            init: *mut $crate::sys::AxiInitialization,
        ) -> $crate::sys::AxiBool {
            unsafe {
                $crate::init::__arbor_load_library::<$Library>(get_proc_address, library, init)
            }
        }
    };
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Global binding storage.
//!
//! Initialization and teardown happen on the thread the engine loads the extension from; once
//! initialized, the binding may be read from any thread.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicBool, Ordering};

use super::ArborBinding;

/// A cell which is initialized and torn down at manually chosen points in time, but is otherwise
/// read-only and shareable between threads.
///
/// `set()` and `clear()` demand external synchronization (in practice: the engine's init/deinit
/// callbacks); `get_unchecked()` demands a prior, completed `set()`.
pub(crate) struct ManualInitCell<T> {
    initialized: AtomicBool,
    value: UnsafeCell<Option<T>>,
}

impl<T> ManualInitCell<T> {
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
            value: UnsafeCell::new(None),
        }
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// # Safety
    ///
    /// Must not be called while the cell is initialized or concurrently with any other access.
    pub unsafe fn set(&self, value: T) {
        let slot = &mut *self.value.get();
        debug_assert!(slot.is_none(), "ManualInitCell set twice");

        *slot = Some(value);
        self.initialized.store(true, Ordering::Release);
    }

    /// # Safety
    ///
    /// Must not be called concurrently with any other access.
    pub unsafe fn clear(&self) {
        let slot = &mut *self.value.get();
        debug_assert!(slot.is_some(), "ManualInitCell cleared while empty");

        *slot = None;
        self.initialized.store(false, Ordering::Release);
    }

    /// # Safety
    ///
    /// A `set()` call must have completed before this is called.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(
            self.is_initialized(),
            "Arbor engine not available; make sure you are not calling it from unit/doc tests"
        );

        let slot = &*self.value.get();
        slot.as_ref().unwrap_unchecked()
    }
}

// SAFETY: mutation only happens through `set`/`clear`, whose contracts rule out concurrent access;
// shared reads afterwards observe the Release store through the Acquire load.
unsafe impl<T: Send + Sync> Sync for ManualInitCell<T> {}
// SAFETY: see `Sync`.
unsafe impl<T: Send> Send for ManualInitCell<T> {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

pub(crate) struct BindingStorage {
    binding: ManualInitCell<ArborBinding>,
}

impl BindingStorage {
    #[inline(always)]
    fn storage() -> &'static Self {
        static BINDING: BindingStorage = BindingStorage {
            binding: ManualInitCell::new(),
        };

        &BINDING
    }

    /// Initialize the binding storage; must be called before any other public function.
    ///
    /// # Safety
    ///
    /// Must not be called concurrently with any other binding access.
    pub unsafe fn initialize(binding: ArborBinding) {
        let storage = Self::storage();

        assert!(
            !storage.binding.is_initialized(),
            "binding already initialized"
        );
        storage.binding.set(binding);
    }

    /// Deinitialize the binding storage.
    ///
    /// # Safety
    ///
    /// Must not be called concurrently with any other binding access.
    pub unsafe fn deinitialize() {
        let storage = Self::storage();

        assert!(
            storage.binding.is_initialized(),
            "binding deinitialized while not initialized"
        );
        storage.binding.clear();
    }

    /// Get the binding from the binding storage.
    ///
    /// # Safety
    ///
    /// The binding must be initialized.
    #[inline(always)]
    pub unsafe fn get_binding_unchecked() -> &'static ArborBinding {
        Self::storage().binding.get_unchecked()
    }

    pub fn is_initialized() -> bool {
        Self::storage().binding.is_initialized()
    }
}

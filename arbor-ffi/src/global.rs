/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::{Mutex, MutexGuard};

/// Ergonomic global variables.
///
/// No more `Mutex<Option<...>>` shenanigans with lazy initialization on each use site, or `OnceLock` which limits to immutable access.
///
/// This type is very similar to [`once_cell::Lazy`](https://docs.rs/once_cell/latest/once_cell/unsync/struct.Lazy.html) in its nature,
/// with a minimalistic implementation. Unlike `Lazy`, it is only designed for global variables, not for local lazy initialization.
///
/// This custom implementation is kept inside the `sys` crate so higher layers do not need an extra dependency for such a small concern.
///
/// # Example
/// ```
/// use arbor_ffi::Global;
///
/// // Definition
/// static MAP: Global<std::collections::HashMap<i32, &'static str>> = Global::default();
///
/// // Usage
/// let mut map = MAP.lock();
/// map.insert(2, "two");
/// ```
pub struct Global<T> {
    // When needed, this could be changed to use RwLock and support read/write guards.
    value: Mutex<InitState<T>>,
}

impl<T> Global<T> {
    /// Create `Global<T>`, providing a lazy initialization function.
    ///
    /// The initialization function is only called once, when the global is first accessed through [`lock()`][Self::lock].
    pub const fn new(init_fn: fn() -> T) -> Self {
        Self {
            value: Mutex::new(InitState::Pending(init_fn)),
        }
    }

    /// Create `Global<T>` with `T::default()` as initialization function.
    ///
    /// This is inherent rather than implementing the `Default` trait, because the latter is not `const` and thus cannot
    /// be used in static declarations.
    pub const fn default() -> Self
    where
        T: Default,
    {
        Self::new(T::default)
    }

    /// Returns a guard that gives shared or mutable access to the value.
    ///
    /// # Panics
    /// If the mutex is poisoned, i.e. a previous `lock()` holder (including the initialization function) panicked.
    pub fn lock(&self) -> GlobalGuard<'_, T> {
        let mut guard = self
            .value
            .lock()
            .expect("poisoned global; a previous access panicked");

        // First access runs the initialization function while the lock is held, so concurrent
        // callers observe either Pending or the fully initialized value.
        if let InitState::Pending(init_fn) = *guard {
            *guard = InitState::Initialized(init_fn());
        }

        GlobalGuard { guard }
    }
}

enum InitState<T> {
    Initialized(T),
    Pending(fn() -> T),
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Guards

/// Guard that temporarily gives access to a `Global<T>`'s value.
pub struct GlobalGuard<'a, T> {
    guard: MutexGuard<'a, InitState<T>>,
}

impl<T> std::ops::Deref for GlobalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match &*self.guard {
            InitState::Initialized(value) => value,
            // Unreachable: lock() replaces Pending before handing out a guard.
            InitState::Pending(_) => unreachable!("global not initialized"),
        }
    }
}

impl<T> std::ops::DerefMut for GlobalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut *self.guard {
            InitState::Initialized(value) => value,
            InitState::Pending(_) => unreachable!("global not initialized"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static MAP: Global<HashMap<i32, &'static str>> = Global::default();
    static VEC: Global<Vec<i32>> = Global::new(|| vec![1, 2, 3]);

    #[test]
    fn test_global_map() {
        {
            let mut map = MAP.lock();
            map.insert(2, "two");
            map.insert(3, "three");
        }

        {
            let mut map = MAP.lock();
            map.insert(5, "five");
        }

        let map = MAP.lock();
        assert_eq!(map.get(&2), Some(&"two"));
        assert_eq!(map.get(&3), Some(&"three"));
        assert_eq!(map.get(&5), Some(&"five"));
    }

    #[test]
    fn test_global_vec() {
        {
            let mut vec = VEC.lock();
            vec.push(4);
        }

        let vec = VEC.lock();
        assert_eq!(*vec, [1, 2, 3, 4]);
    }
}

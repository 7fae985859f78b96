/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use crate::obj::rtti::ObjectRtti;
pub use sys::out;

use crate::global::arbor_error;
use crate::obj::{ArborClass, WithSignals};
use crate::sys;
use std::sync::{atomic, Arc, Mutex};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Global variables

/// Level:
/// - 0: no error printing (during `expect_panic` in test)
/// - 1: not yet implemented, but intended for `try_` function calls (which are expected to fail, so error is annoying)
/// - 2: normal printing
static ERROR_PRINT_LEVEL: atomic::AtomicU8 = atomic::AtomicU8::new(2);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Helpers for SignalCollection upcasts

pub fn signal_collection_to_base<'r, C, Derived>(
    derived: &'r Derived::SignalCollection<C>,
) -> &'r <<Derived as ArborClass>::Base as WithSignals>::SignalCollection<C>
where
    C: WithSignals,
    Derived: WithSignals<Base: WithSignals>,
{
    type BaseCollection<C, Derived> =
        <<Derived as ArborClass>::Base as WithSignals>::SignalCollection<C>;

    let derived_collection_ptr = std::ptr::from_ref(derived);
    let base_collection_ptr = derived_collection_ptr.cast::<BaseCollection<C, Derived>>();

    // SAFETY:
    // - Signal collections have the same memory layout, independent of their enclosing class: a single optional object field.
    // - The `Inherits` relation additionally ensures that all signals present in Base are also present in Derived, i.e.
    //   reducing the collection to a smaller subset of signals is safe.
    unsafe { &*base_collection_ptr }
}

pub fn signal_collection_to_base_mut<'r, C, Derived>(
    derived: &'r mut Derived::SignalCollection<C>,
) -> &'r mut <<Derived as ArborClass>::Base as WithSignals>::SignalCollection<C>
where
    C: WithSignals,
    Derived: WithSignals<Base: WithSignals>,
{
    type BaseCollection<C, Derived> =
        <<Derived as ArborClass>::Base as WithSignals>::SignalCollection<C>;

    let derived_collection_ptr = std::ptr::from_mut(derived);
    let base_collection_ptr = derived_collection_ptr.cast::<BaseCollection<C, Derived>>();

    // SAFETY: see signal_collection_to_base().
    unsafe { &mut *base_collection_ptr }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

pub fn flush_stdout() {
    use std::io::Write;
    std::io::stdout().flush().expect("flush stdout");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Panic handling

#[derive(Debug)]
struct ArborPanicInfo {
    line: u32,
    file: String,
}

pub fn extract_panic_message(err: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = err.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("(panic of type ID {:?})", err.type_id())
    }
}

fn format_panic_message(msg: String) -> String {
    // If the message contains newlines, print all of the lines after a line break, and indent them.
    let lbegin = "\n  ";
    let indented = msg.replace('\n', lbegin);

    if indented.len() != msg.len() {
        format!("[panic]{lbegin}{indented}")
    } else {
        format!("[panic]  {msg}")
    }
}

pub fn set_error_print_level(level: u8) -> u8 {
    assert!(level <= 2);
    ERROR_PRINT_LEVEL.swap(level, atomic::Ordering::Relaxed)
}

pub(crate) fn has_error_print_level(level: u8) -> bool {
    assert!(level <= 2);
    ERROR_PRINT_LEVEL.load(atomic::Ordering::Relaxed) >= level
}

/// Executes `code`. If a panic is thrown, it is caught and an error message is printed to Arbor.
///
/// Returns `Err(message)` if a panic occurred, and `Ok(result)` with the result of `code` otherwise.
pub fn handle_panic<E, F, R, S>(error_context: E, code: F) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R + std::panic::UnwindSafe,
    S: std::fmt::Display,
{
    handle_panic_with_print(error_context, code, has_error_print_level(1))
}

fn handle_panic_with_print<E, F, R, S>(error_context: E, code: F, print: bool) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R + std::panic::UnwindSafe,
    S: std::fmt::Display,
{
    let info: Arc<Mutex<Option<ArborPanicInfo>>> = Arc::new(Mutex::new(None));

    // Back up previous hook, set new one.
    let prev_hook = std::panic::take_hook();
    {
        let info = info.clone();
        std::panic::set_hook(Box::new(move |panic_info| {
            if let Some(location) = panic_info.location() {
                *info.lock().unwrap() = Some(ArborPanicInfo {
                    file: location.file().to_string(),
                    line: location.line(),
                });
            } else {
                eprintln!("panic occurred, but can't get location information");
            }
        }));
    }

    // Run code that should panic, restore hook.
    let panic = std::panic::catch_unwind(code);
    std::panic::set_hook(prev_hook);

    match panic {
        Ok(result) => Ok(result),
        Err(err) => {
            // Flush, to make sure previous Rust output (e.g. test announcement, or debug prints during app) have been printed.
            flush_stdout();

            let guard = info.lock().unwrap();
            let info = guard.as_ref().expect("no panic info available");

            if print {
                arbor_error!(
                    "Rust function panicked at {}:{}.\n  Context: {}",
                    info.file,
                    info.line,
                    error_context()
                );
            }

            let msg = extract_panic_message(err);
            let msg = format_panic_message(msg);

            if print {
                arbor_error!("{msg}");
            }

            Err(msg)
        }
    }
}

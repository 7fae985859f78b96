/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! In-process mock of the Arbor engine, exposing the AXI surface the binding loads.
//!
//! Integration tests bootstrap the binding against [`interface::get_proc_address`] instead of a
//! real engine process. Objects, signals, refcounts and variant semantics behave like the engine
//! documents them, with deterministic stand-ins where the real engine would consult a renderer or
//! physics server.

// Each test binary compiles its own copy of this module and none of them exercises every entry
// point or helper.
#![allow(dead_code)]

mod engine;
mod interface;
mod values;

use std::sync::Once;

use arbor::sys;

/// Initializes the binding against the mock engine. Idempotent; call at the top of every test.
pub fn ensure_initialized() {
    static INIT: Once = Once::new();
    INIT.call_once(|| unsafe {
        sys::initialize(
            Some(interface::get_proc_address),
            std::ptr::null_mut(),
            sys::ArborConfig::new(false),
        );
        for level in [
            sys::InitLevel::Core,
            sys::InitLevel::Servers,
            sys::InitLevel::Scene,
            sys::InitLevel::Editor,
        ] {
            sys::load_class_method_table(level);
        }
    });
}

/// Asserts that `code` panics, keeping the default panic output quiet while it runs.
pub fn expect_panic(context: &str, code: impl FnOnce() + std::panic::UnwindSafe) {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = std::panic::catch_unwind(code);
    std::panic::set_hook(prev_hook);

    assert!(result.is_err(), "code should have panicked but did not: {context}");
}

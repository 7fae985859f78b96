/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Printing and logging functionality.

use crate::sys;

// https://stackoverflow.com/a/40234666
#[macro_export]
#[doc(hidden)]
macro_rules! inner_function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap()
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! inner_arbor_msg {
    // FIXME expr needs to be parenthesised, see usages
    ($arbor_fn:ident; $fmt:literal $(, $args:expr)* $(,)?) => {
        unsafe {
            let msg = format!("{}\0", format_args!($fmt $(, $args)*));

            // Check whether engine is loaded, otherwise fall back to stderr.
            if $crate::sys::is_initialized() {
                let function = format!("{}\0", $crate::inner_function!());
                $crate::sys::interface_fn!($arbor_fn)(
                    $crate::sys::c_str_from_str(&msg),
                    $crate::sys::c_str_from_str(&function),
                    $crate::sys::c_str_from_str(concat!(file!(), "\0")),
                    line!() as i32,
                );
            } else {
                eprintln!("[{}] {}", stringify!($arbor_fn), &msg[..msg.len() - 1]);
            }
        }
    };
}

/// Pushes a warning message to Arbor's log and to the OS terminal.
#[macro_export]
macro_rules! arbor_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_arbor_msg!(print_warning; $fmt $(, $args)*);
    };
}

/// Pushes an error message to Arbor's log and to the OS terminal.
#[macro_export]
macro_rules! arbor_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_arbor_msg!(print_error; $fmt $(, $args)*);
    };
}

/// Prints to the Arbor console.
#[macro_export]
macro_rules! arbor_print {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::global::print_line(
            format_args!($fmt $(, $args)*)
        )
    };
}

/// Prints a message to the Arbor console, falling back to stdout before the engine is loaded.
///
/// Usually invoked through [`arbor_print!`][crate::arbor_print].
pub fn print_line(args: std::fmt::Arguments) {
    let msg = format!("{args}\0");

    if sys::is_initialized() {
        // SAFETY: the interface is loaded, and the message is nul-terminated.
        unsafe {
            sys::interface_fn!(print_line)(sys::c_str_from_str(&msg));
        }
    } else {
        println!("{}", &msg[..msg.len() - 1]);
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Machinery behind type-safe signals.
//!
//! The generated signal collections are found on the respective classes, e.g. [`SignalsOfTree`][crate::classes::tree::SignalsOfTree].

mod connect_handle;
mod signal_receiver;
mod typed_signal;

pub use connect_handle::ConnectHandle;
pub use signal_receiver::{IndirectSignalReceiver, SignalReceiver};
pub use typed_signal::TypedSignal;

// ParamTuple re-exported in crate::meta.

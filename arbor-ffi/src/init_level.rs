/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stage in the Arbor initialization process.
///
/// Arbor's initialization and deinitialization processes are split into multiple levels, like a stack.
/// At each level, a different amount of engine functionality is available. Deinitialization happens
/// in reverse order.
///
/// See also:
/// - [`ExtensionLibrary::on_level_init()`](trait.ExtensionLibrary.html#method.on_level_init)
/// - [`ExtensionLibrary::on_level_deinit()`](trait.ExtensionLibrary.html#method.on_level_deinit)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InitLevel {
    /// First level loaded by Arbor. Builtin types are available, classes are not.
    Core,

    /// Second level loaded by Arbor. Only server classes and builtins are available.
    Servers,

    /// Third level loaded by Arbor. Most classes are available.
    Scene,

    /// Fourth level loaded by Arbor, only in the editor. All classes are available.
    Editor,
}

impl InitLevel {
    #[doc(hidden)]
    pub fn from_sys(level: crate::AxiInitializationLevel) -> Self {
        match level {
            crate::AXI_INITIALIZATION_CORE => Self::Core,
            crate::AXI_INITIALIZATION_SERVERS => Self::Servers,
            crate::AXI_INITIALIZATION_SCENE => Self::Scene,
            crate::AXI_INITIALIZATION_EDITOR => Self::Editor,
            _ => {
                eprintln!("WARNING: unknown initialization level {level}");
                Self::Scene
            }
        }
    }

    #[doc(hidden)]
    pub fn to_sys(self) -> crate::AxiInitializationLevel {
        match self {
            Self::Core => crate::AXI_INITIALIZATION_CORE,
            Self::Servers => crate::AXI_INITIALIZATION_SERVERS,
            Self::Scene => crate::AXI_INITIALIZATION_SCENE,
            Self::Editor => crate::AXI_INITIALIZATION_EDITOR,
        }
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Loading of the AXI function table.
//!
//! The extension entry point is passed a `get_proc_address` function pointer, which is used to
//! load all other AXI functions by name, one field at a time.

use crate as sys;

/// Engine version this binding was compiled against.
///
/// The runtime engine must have the same major version and an equal or newer minor version.
pub const STATIC_VERSION: (u32, u32) = (1, 3);

/// Extract a function pointer from `get_proc_address` and convert it to its typed AXI alias.
// SAFETY: transmute relies on Option<F1> and Option<F2> having the same layout.
// It might be better to transmute the raw function pointers, but then we have no type names.
macro_rules! load_fn_ptr {
    ($get_proc_address:ident: $name:ident as $Ty:ty) => {
        std::mem::transmute::<sys::AxiInterfaceFunctionPtr, $Ty>($get_proc_address(sys::c_str(
            concat!(stringify!($name), "\0").as_bytes(),
        )))
    };
}

/// Checks that the loading engine is compatible with the version this binding was compiled
/// against, and panics otherwise. No call into the engine is safe before this passed.
pub unsafe fn ensure_runtime_compatibility(get_proc_address: sys::AxiInterfaceGetProcAddress) {
    let runtime_version_raw = runtime_version(get_proc_address);
    let runtime = (runtime_version_raw.major, runtime_version_raw.minor);

    if runtime.0 != STATIC_VERSION.0 || runtime < STATIC_VERSION {
        let (static_major, static_minor) = STATIC_VERSION;
        let runtime_version_str = read_version_string(&runtime_version_raw);

        panic!(
            "arbor-rust was compiled against Arbor {static_major}.{static_minor},\n\
            but loaded by an incompatible Arbor binary, with version: {runtime_version_str}\n\
            \n\
            Update your Arbor engine version, or compile the binding against an older version.\n"
        );
    }

    crate::out!("arbor-rust: engine version ok ({})", read_version_string(&runtime_version_raw));
}

/// Queries the version of the loading engine, before the full interface is available.
pub unsafe fn runtime_version(
    get_proc_address: sys::AxiInterfaceGetProcAddress,
) -> sys::AxiArborVersion {
    let get_proc_address = get_proc_address.expect("get_proc_address unexpectedly null");

    let get_arbor_version =
        load_fn_ptr!(get_proc_address: get_arbor_version as sys::AxiInterfaceGetArborVersion);
    let get_arbor_version = get_arbor_version.expect("get_arbor_version unexpectedly null");

    let mut version = std::mem::MaybeUninit::<sys::AxiArborVersion>::zeroed();

    get_arbor_version(version.as_mut_ptr());

    // SAFETY: `get_arbor_version` initializes `version`.
    version.assume_init()
}

pub(crate) fn read_version_string(version: &sys::AxiArborVersion) -> String {
    // SAFETY: the engine hands out a valid, null-terminated version string with static lifetime.
    let c_str = unsafe { std::ffi::CStr::from_ptr(version.string) };

    String::from_utf8_lossy(c_str.to_bytes()).into_owned()
}

pub unsafe fn load_interface(
    get_proc_address: sys::AxiInterfaceGetProcAddress,
) -> sys::AxiInterface {
    let get_proc_address = get_proc_address.expect("invalid get_proc_address function pointer");

    sys::AxiInterface {
        get_arbor_version: load_fn_ptr!(get_proc_address: get_arbor_version as sys::AxiInterfaceGetArborVersion),

        print_line: load_fn_ptr!(get_proc_address: print_line as sys::AxiInterfacePrintLine),
        print_warning: load_fn_ptr!(get_proc_address: print_warning as sys::AxiInterfacePrintWarning),
        print_error: load_fn_ptr!(get_proc_address: print_error as sys::AxiInterfacePrintError),

        variant_new_nil: load_fn_ptr!(get_proc_address: variant_new_nil as sys::AxiInterfaceVariantNewNil),
        variant_new_copy: load_fn_ptr!(get_proc_address: variant_new_copy as sys::AxiInterfaceVariantNewCopy),
        variant_destroy: load_fn_ptr!(get_proc_address: variant_destroy as sys::AxiInterfaceVariantDestroy),
        variant_get_type: load_fn_ptr!(get_proc_address: variant_get_type as sys::AxiInterfaceVariantGetType),
        variant_stringify: load_fn_ptr!(get_proc_address: variant_stringify as sys::AxiInterfaceVariantStringify),
        get_variant_from_type_constructor: load_fn_ptr!(get_proc_address: get_variant_from_type_constructor as sys::AxiInterfaceGetVariantFromTypeConstructor),
        get_variant_to_type_constructor: load_fn_ptr!(get_proc_address: get_variant_to_type_constructor as sys::AxiInterfaceGetVariantToTypeConstructor),

        string_new_with_utf8_chars_and_len: load_fn_ptr!(get_proc_address: string_new_with_utf8_chars_and_len as sys::AxiInterfaceStringNewWithUtf8CharsAndLen),
        string_new_copy: load_fn_ptr!(get_proc_address: string_new_copy as sys::AxiInterfaceStringNewCopy),
        string_destroy: load_fn_ptr!(get_proc_address: string_destroy as sys::AxiInterfaceStringDestroy),
        string_to_utf8_chars: load_fn_ptr!(get_proc_address: string_to_utf8_chars as sys::AxiInterfaceStringToUtf8Chars),

        string_name_new_with_utf8_chars_and_len: load_fn_ptr!(get_proc_address: string_name_new_with_utf8_chars_and_len as sys::AxiInterfaceStringNameNewWithUtf8CharsAndLen),
        string_name_new_copy: load_fn_ptr!(get_proc_address: string_name_new_copy as sys::AxiInterfaceStringNameNewCopy),
        string_name_destroy: load_fn_ptr!(get_proc_address: string_name_destroy as sys::AxiInterfaceStringNameDestroy),
        string_name_equal: load_fn_ptr!(get_proc_address: string_name_equal as sys::AxiInterfaceStringNameEqual),
        string_name_to_string: load_fn_ptr!(get_proc_address: string_name_to_string as sys::AxiInterfaceStringNameToString),

        callable_custom_create: load_fn_ptr!(get_proc_address: callable_custom_create as sys::AxiInterfaceCallableCustomCreate),
        callable_new_copy: load_fn_ptr!(get_proc_address: callable_new_copy as sys::AxiInterfaceCallableNewCopy),
        callable_destroy: load_fn_ptr!(get_proc_address: callable_destroy as sys::AxiInterfaceCallableDestroy),

        classdb_construct_object: load_fn_ptr!(get_proc_address: classdb_construct_object as sys::AxiInterfaceClassdbConstructObject),
        classdb_get_method_bind: load_fn_ptr!(get_proc_address: classdb_get_method_bind as sys::AxiInterfaceClassdbGetMethodBind),
        classdb_get_class_tag: load_fn_ptr!(get_proc_address: classdb_get_class_tag as sys::AxiInterfaceClassdbGetClassTag),

        object_method_bind_ptrcall: load_fn_ptr!(get_proc_address: object_method_bind_ptrcall as sys::AxiInterfaceObjectMethodBindPtrcall),
        object_method_bind_call: load_fn_ptr!(get_proc_address: object_method_bind_call as sys::AxiInterfaceObjectMethodBindCall),
        object_destroy: load_fn_ptr!(get_proc_address: object_destroy as sys::AxiInterfaceObjectDestroy),
        object_get_instance_id: load_fn_ptr!(get_proc_address: object_get_instance_id as sys::AxiInterfaceObjectGetInstanceId),
        object_get_instance_from_id: load_fn_ptr!(get_proc_address: object_get_instance_from_id as sys::AxiInterfaceObjectGetInstanceFromId),
        object_cast_to: load_fn_ptr!(get_proc_address: object_cast_to as sys::AxiInterfaceObjectCastTo),
    }
}

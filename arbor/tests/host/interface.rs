/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The `get_proc_address` surface of the mock engine: one `extern "C"` function per AXI entry
//! point, resolved by name exactly like the real engine does it.

use std::ffi::{c_char, c_void, CStr};

use arbor::sys;

use super::engine::{self, MethodBind};
use super::values::{self, VariantValue};

/// Resolves `$f` against the trusted AXI alias, then erases the signature. Keeps every host
/// function type-checked against the ABI declaration it implements.
macro_rules! provide {
    ($f:ident as $Alias:ty) => {{
        let typed: $Alias = Some($f);
        std::mem::transmute::<$Alias, sys::AxiInterfaceFunctionPtr>(typed)
    }};
}

pub unsafe extern "C" fn get_proc_address(
    function_name: *const c_char,
) -> sys::AxiInterfaceFunctionPtr {
    let name = CStr::from_ptr(function_name)
        .to_str()
        .expect("non-UTF-8 entry point name");

    match name {
        "get_arbor_version" => provide!(get_arbor_version as sys::AxiInterfaceGetArborVersion),

        "print_line" => provide!(print_line as sys::AxiInterfacePrintLine),
        "print_warning" => provide!(print_warning as sys::AxiInterfacePrintWarning),
        "print_error" => provide!(print_error as sys::AxiInterfacePrintError),

        "variant_new_nil" => provide!(variant_new_nil as sys::AxiInterfaceVariantNewNil),
        "variant_new_copy" => provide!(variant_new_copy as sys::AxiInterfaceVariantNewCopy),
        "variant_destroy" => provide!(variant_destroy as sys::AxiInterfaceVariantDestroy),
        "variant_get_type" => provide!(variant_get_type as sys::AxiInterfaceVariantGetType),
        "variant_stringify" => provide!(variant_stringify as sys::AxiInterfaceVariantStringify),
        "get_variant_from_type_constructor" => {
            provide!(get_variant_from_type_constructor as sys::AxiInterfaceGetVariantFromTypeConstructor)
        }
        "get_variant_to_type_constructor" => {
            provide!(get_variant_to_type_constructor as sys::AxiInterfaceGetVariantToTypeConstructor)
        }

        "string_new_with_utf8_chars_and_len" => {
            provide!(string_new_with_utf8_chars_and_len as sys::AxiInterfaceStringNewWithUtf8CharsAndLen)
        }
        "string_new_copy" => provide!(string_new_copy as sys::AxiInterfaceStringNewCopy),
        "string_destroy" => provide!(string_destroy as sys::AxiInterfaceStringDestroy),
        "string_to_utf8_chars" => {
            provide!(string_to_utf8_chars as sys::AxiInterfaceStringToUtf8Chars)
        }

        "string_name_new_with_utf8_chars_and_len" => {
            provide!(string_name_new_with_utf8_chars_and_len as sys::AxiInterfaceStringNameNewWithUtf8CharsAndLen)
        }
        "string_name_new_copy" => {
            provide!(string_name_new_copy as sys::AxiInterfaceStringNameNewCopy)
        }
        "string_name_destroy" => provide!(string_name_destroy as sys::AxiInterfaceStringNameDestroy),
        "string_name_equal" => provide!(string_name_equal as sys::AxiInterfaceStringNameEqual),
        "string_name_to_string" => {
            provide!(string_name_to_string as sys::AxiInterfaceStringNameToString)
        }

        "callable_custom_create" => {
            provide!(callable_custom_create as sys::AxiInterfaceCallableCustomCreate)
        }
        "callable_new_copy" => provide!(callable_new_copy as sys::AxiInterfaceCallableNewCopy),
        "callable_destroy" => provide!(callable_destroy as sys::AxiInterfaceCallableDestroy),

        "classdb_construct_object" => {
            provide!(classdb_construct_object as sys::AxiInterfaceClassdbConstructObject)
        }
        "classdb_get_method_bind" => {
            provide!(classdb_get_method_bind as sys::AxiInterfaceClassdbGetMethodBind)
        }
        "classdb_get_class_tag" => {
            provide!(classdb_get_class_tag as sys::AxiInterfaceClassdbGetClassTag)
        }

        "object_method_bind_ptrcall" => {
            provide!(object_method_bind_ptrcall as sys::AxiInterfaceObjectMethodBindPtrcall)
        }
        "object_method_bind_call" => {
            provide!(object_method_bind_call as sys::AxiInterfaceObjectMethodBindCall)
        }
        "object_destroy" => provide!(object_destroy as sys::AxiInterfaceObjectDestroy),
        "object_get_instance_id" => {
            provide!(object_get_instance_id as sys::AxiInterfaceObjectGetInstanceId)
        }
        "object_get_instance_from_id" => {
            provide!(object_get_instance_from_id as sys::AxiInterfaceObjectGetInstanceFromId)
        }
        "object_cast_to" => provide!(object_cast_to as sys::AxiInterfaceObjectCastTo),

        other => panic!("mock engine: unknown entry point '{other}'"),
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Version and printing

unsafe extern "C" fn get_arbor_version(r_version: *mut sys::AxiArborVersion) {
    static VERSION_STRING: &CStr = c"Arbor v1.3.0.stable.mock";
    *r_version = sys::AxiArborVersion {
        major: 1,
        minor: 3,
        patch: 0,
        string: VERSION_STRING.as_ptr(),
    };
}

unsafe extern "C" fn print_line(message: *const c_char) {
    eprintln!("[arbor] {}", CStr::from_ptr(message).to_string_lossy());
}

unsafe extern "C" fn print_warning(
    description: *const c_char,
    _function: *const c_char,
    file: *const c_char,
    line: i32,
) {
    eprintln!(
        "[arbor] WARNING: {} ({}:{line})",
        CStr::from_ptr(description).to_string_lossy(),
        CStr::from_ptr(file).to_string_lossy(),
    );
}

unsafe extern "C" fn print_error(
    description: *const c_char,
    _function: *const c_char,
    file: *const c_char,
    line: i32,
) {
    eprintln!(
        "[arbor] ERROR: {} ({}:{line})",
        CStr::from_ptr(description).to_string_lossy(),
        CStr::from_ptr(file).to_string_lossy(),
    );
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variants

unsafe extern "C" fn variant_new_nil(r_dest: sys::AxiUninitializedVariantPtr) {
    values::write_variant(r_dest, VariantValue::Nil);
}

unsafe extern "C" fn variant_new_copy(
    r_dest: sys::AxiUninitializedVariantPtr,
    p_src: sys::AxiConstVariantPtr,
) {
    let copy = engine::copy_variant(values::variant_ref(p_src));
    values::write_variant(r_dest, copy);
}

unsafe extern "C" fn variant_destroy(p_self: sys::AxiVariantPtr) {
    engine::release_variant(values::take_variant(p_self));
}

unsafe extern "C" fn variant_get_type(p_self: sys::AxiConstVariantPtr) -> sys::AxiVariantType {
    values::variant_ref(p_self).type_ord()
}

unsafe extern "C" fn variant_stringify(p_self: sys::AxiConstVariantPtr, r_ret: sys::AxiStringPtr) {
    // r_ret is an initialized string; replace its contents.
    *values::string_slot(r_ret) = values::variant_ref(p_self).stringify();
}

macro_rules! from_ctor {
    ($name:ident, $Wire:ty, |$v:ident| $variant:expr) => {
        unsafe extern "C" fn $name(r_dest: sys::AxiUninitializedVariantPtr, p_src: sys::AxiTypePtr) {
            let $v = *(p_src as *const $Wire);
            values::write_variant(r_dest, $variant);
        }
    };
}

from_ctor!(variant_from_bool, bool, |v| VariantValue::Bool(v));
from_ctor!(variant_from_int, i64, |v| VariantValue::Int(v));
from_ctor!(variant_from_float, f64, |v| VariantValue::Float(v));
from_ctor!(variant_from_vector2, [f32; 2], |v| VariantValue::Vector2(v));
from_ctor!(variant_from_vector2i, [i32; 2], |v| VariantValue::Vector2i(v));
from_ctor!(variant_from_rect2, [f32; 4], |v| VariantValue::Rect2(v));
from_ctor!(variant_from_vector3, [f32; 3], |v| VariantValue::Vector3(v));
from_ctor!(variant_from_color, [f32; 4], |v| VariantValue::Color(v));

unsafe extern "C" fn variant_from_string(
    r_dest: sys::AxiUninitializedVariantPtr,
    p_src: sys::AxiTypePtr,
) {
    let contents = values::read_string(p_src);
    values::write_variant(r_dest, VariantValue::String(Box::into_raw(Box::new(contents))));
}

unsafe extern "C" fn variant_from_string_name(
    r_dest: sys::AxiUninitializedVariantPtr,
    p_src: sys::AxiTypePtr,
) {
    values::write_variant(r_dest, VariantValue::StringName(values::name_slot(p_src)));
}

/// Object -> variant takes a new reference; the matching release happens in `variant_destroy`.
unsafe extern "C" fn variant_from_object(
    r_dest: sys::AxiUninitializedVariantPtr,
    p_src: sys::AxiTypePtr,
) {
    let object_ptr = *(p_src as *const *mut c_void);
    if object_ptr.is_null() {
        values::write_variant(r_dest, VariantValue::Nil);
        return;
    }
    let id = engine::instance_id(object_ptr);
    engine::variant_ref_object(id);
    values::write_variant(
        r_dest,
        VariantValue::Object {
            ptr: object_ptr as usize,
            id,
        },
    );
}

unsafe extern "C" fn variant_from_callable(
    r_dest: sys::AxiUninitializedVariantPtr,
    p_src: sys::AxiTypePtr,
) {
    let callable = values::callable_slot(p_src);
    values::callable_inc(callable);
    values::write_variant(r_dest, VariantValue::Callable(callable));
}

unsafe extern "C" fn get_variant_from_type_constructor(
    p_type: sys::AxiVariantType,
) -> sys::AxiVariantFromTypeConstructorFunc {
    match p_type {
        sys::AXI_VARIANT_TYPE_BOOL => Some(variant_from_bool),
        sys::AXI_VARIANT_TYPE_INT => Some(variant_from_int),
        sys::AXI_VARIANT_TYPE_FLOAT => Some(variant_from_float),
        sys::AXI_VARIANT_TYPE_STRING => Some(variant_from_string),
        sys::AXI_VARIANT_TYPE_VECTOR2 => Some(variant_from_vector2),
        sys::AXI_VARIANT_TYPE_VECTOR2I => Some(variant_from_vector2i),
        sys::AXI_VARIANT_TYPE_RECT2 => Some(variant_from_rect2),
        sys::AXI_VARIANT_TYPE_VECTOR3 => Some(variant_from_vector3),
        sys::AXI_VARIANT_TYPE_COLOR => Some(variant_from_color),
        sys::AXI_VARIANT_TYPE_STRING_NAME => Some(variant_from_string_name),
        sys::AXI_VARIANT_TYPE_OBJECT => Some(variant_from_object),
        sys::AXI_VARIANT_TYPE_CALLABLE => Some(variant_from_callable),
        _ => None,
    }
}

macro_rules! to_ctor {
    ($name:ident, $Wire:ty, $Variant:ident) => {
        unsafe extern "C" fn $name(r_dest: sys::AxiUninitializedTypePtr, p_src: sys::AxiVariantPtr) {
            let VariantValue::$Variant(v) = values::variant_ref(p_src) else {
                panic!("variant is not of type {}", stringify!($Variant));
            };
            *(r_dest as *mut $Wire) = *v;
        }
    };
}

to_ctor!(variant_to_bool, bool, Bool);
to_ctor!(variant_to_int, i64, Int);
to_ctor!(variant_to_float, f64, Float);
to_ctor!(variant_to_vector2, [f32; 2], Vector2);
to_ctor!(variant_to_vector2i, [i32; 2], Vector2i);
to_ctor!(variant_to_rect2, [f32; 4], Rect2);
to_ctor!(variant_to_vector3, [f32; 3], Vector3);
to_ctor!(variant_to_color, [f32; 4], Color);

unsafe extern "C" fn variant_to_string(
    r_dest: sys::AxiUninitializedTypePtr,
    p_src: sys::AxiVariantPtr,
) {
    let VariantValue::String(s) = values::variant_ref(p_src) else {
        panic!("variant is not of type String");
    };
    values::write_string(r_dest, (**s).clone());
}

unsafe extern "C" fn variant_to_string_name(
    r_dest: sys::AxiUninitializedTypePtr,
    p_src: sys::AxiVariantPtr,
) {
    let VariantValue::StringName(name) = values::variant_ref(p_src) else {
        panic!("variant is not of type StringName");
    };
    values::write_name(r_dest, *name);
}

/// Variant -> object hands out the bare pointer; the binding manages its own reference.
unsafe extern "C" fn variant_to_object(
    r_dest: sys::AxiUninitializedTypePtr,
    p_src: sys::AxiVariantPtr,
) {
    let VariantValue::Object { ptr, .. } = values::variant_ref(p_src) else {
        panic!("variant is not of type Object");
    };
    *(r_dest as *mut *mut c_void) = *ptr as *mut c_void;
}

unsafe extern "C" fn variant_to_callable(
    r_dest: sys::AxiUninitializedTypePtr,
    p_src: sys::AxiVariantPtr,
) {
    let VariantValue::Callable(callable) = values::variant_ref(p_src) else {
        panic!("variant is not of type Callable");
    };
    values::callable_inc(*callable);
    values::write_callable(r_dest, *callable);
}

unsafe extern "C" fn get_variant_to_type_constructor(
    p_type: sys::AxiVariantType,
) -> sys::AxiTypeFromVariantConstructorFunc {
    match p_type {
        sys::AXI_VARIANT_TYPE_BOOL => Some(variant_to_bool),
        sys::AXI_VARIANT_TYPE_INT => Some(variant_to_int),
        sys::AXI_VARIANT_TYPE_FLOAT => Some(variant_to_float),
        sys::AXI_VARIANT_TYPE_STRING => Some(variant_to_string),
        sys::AXI_VARIANT_TYPE_VECTOR2 => Some(variant_to_vector2),
        sys::AXI_VARIANT_TYPE_VECTOR2I => Some(variant_to_vector2i),
        sys::AXI_VARIANT_TYPE_RECT2 => Some(variant_to_rect2),
        sys::AXI_VARIANT_TYPE_VECTOR3 => Some(variant_to_vector3),
        sys::AXI_VARIANT_TYPE_COLOR => Some(variant_to_color),
        sys::AXI_VARIANT_TYPE_STRING_NAME => Some(variant_to_string_name),
        sys::AXI_VARIANT_TYPE_OBJECT => Some(variant_to_object),
        sys::AXI_VARIANT_TYPE_CALLABLE => Some(variant_to_callable),
        _ => None,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Strings

unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    r_dest: sys::AxiUninitializedStringPtr,
    p_contents: *const c_char,
    p_size: sys::AxiInt,
) {
    let contents = if p_size <= 0 {
        String::new()
    } else {
        let bytes = std::slice::from_raw_parts(p_contents as *const u8, p_size as usize);
        String::from_utf8_lossy(bytes).into_owned()
    };
    values::write_string(r_dest, contents);
}

unsafe extern "C" fn string_new_copy(
    r_dest: sys::AxiUninitializedStringPtr,
    p_src: sys::AxiConstStringPtr,
) {
    values::write_string(r_dest, values::read_string(p_src));
}

unsafe extern "C" fn string_destroy(p_self: sys::AxiStringPtr) {
    values::drop_string(p_self);
}

unsafe extern "C" fn string_to_utf8_chars(
    p_self: sys::AxiConstStringPtr,
    r_text: *mut c_char,
    p_max_write_length: sys::AxiInt,
) -> sys::AxiInt {
    let s = &*values::string_slot(p_self);
    let len = s.len() as sys::AxiInt;
    if !r_text.is_null() && p_max_write_length > 0 {
        let write = len.min(p_max_write_length) as usize;
        std::ptr::copy_nonoverlapping(s.as_ptr(), r_text as *mut u8, write);
    }
    len
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// String names

unsafe extern "C" fn string_name_new_with_utf8_chars_and_len(
    r_dest: sys::AxiUninitializedStringNamePtr,
    p_contents: *const c_char,
    p_size: sys::AxiInt,
) {
    let contents = if p_size <= 0 {
        String::new()
    } else {
        let bytes = std::slice::from_raw_parts(p_contents as *const u8, p_size as usize);
        String::from_utf8_lossy(bytes).into_owned()
    };
    values::write_name(r_dest, values::intern(&contents));
}

unsafe extern "C" fn string_name_new_copy(
    r_dest: sys::AxiUninitializedStringNamePtr,
    p_src: sys::AxiConstStringNamePtr,
) {
    values::write_name(r_dest, values::name_slot(p_src));
}

unsafe extern "C" fn string_name_destroy(_p_self: sys::AxiStringNamePtr) {
    // Interned names live forever.
}

unsafe extern "C" fn string_name_equal(
    p_a: sys::AxiConstStringNamePtr,
    p_b: sys::AxiConstStringNamePtr,
) -> sys::AxiBool {
    (values::name_slot(p_a) == values::name_slot(p_b)) as sys::AxiBool
}

unsafe extern "C" fn string_name_to_string(
    p_self: sys::AxiConstStringNamePtr,
    r_ret: sys::AxiUninitializedStringPtr,
) {
    values::write_string(r_ret, values::read_name(p_self).clone());
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Callables

unsafe extern "C" fn callable_custom_create(
    r_callable: sys::AxiUninitializedTypePtr,
    p_info: *const sys::AxiCallableCustomInfo,
) {
    values::write_callable(r_callable, values::callable_create(&*p_info));
}

unsafe extern "C" fn callable_new_copy(
    r_dest: sys::AxiUninitializedTypePtr,
    p_src: sys::AxiConstTypePtr,
) {
    let callable = values::callable_slot(p_src);
    values::callable_inc(callable);
    values::write_callable(r_dest, callable);
}

unsafe extern "C" fn callable_destroy(p_self: sys::AxiTypePtr) {
    values::callable_dec(values::callable_slot(p_self));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class database and objects

unsafe extern "C" fn classdb_construct_object(
    p_classname: sys::AxiConstStringNamePtr,
) -> sys::AxiObjectPtr {
    engine::construct_object(values::read_name(p_classname))
}

unsafe extern "C" fn classdb_get_method_bind(
    p_classname: sys::AxiConstStringNamePtr,
    p_methodname: sys::AxiConstStringNamePtr,
    p_hash: sys::AxiInt,
) -> sys::AxiMethodBindPtr {
    engine::method_bind(
        values::read_name(p_classname),
        values::read_name(p_methodname),
        p_hash,
    )
}

unsafe extern "C" fn classdb_get_class_tag(
    p_classname: sys::AxiConstStringNamePtr,
) -> sys::AxiClassTag {
    engine::class_tag(values::read_name(p_classname))
}

unsafe extern "C" fn object_method_bind_ptrcall(
    p_method_bind: sys::AxiMethodBindPtr,
    p_instance: sys::AxiObjectPtr,
    p_args: *const sys::AxiConstTypePtr,
    r_ret: sys::AxiTypePtr,
) {
    engine::ptrcall(
        &*(p_method_bind as *const MethodBind),
        p_instance,
        p_args,
        r_ret,
    );
}

unsafe extern "C" fn object_method_bind_call(
    p_method_bind: sys::AxiMethodBindPtr,
    p_instance: sys::AxiObjectPtr,
    p_args: *const sys::AxiConstVariantPtr,
    p_arg_count: sys::AxiInt,
    r_ret: sys::AxiUninitializedVariantPtr,
    r_error: *mut sys::AxiCallError,
) {
    engine::varcall(
        &*(p_method_bind as *const MethodBind),
        p_instance,
        p_args,
        p_arg_count,
        r_ret,
        r_error,
    );
}

unsafe extern "C" fn object_destroy(p_o: sys::AxiObjectPtr) {
    engine::destroy_object(p_o);
}

unsafe extern "C" fn object_get_instance_id(p_object: sys::AxiConstObjectPtr) -> sys::AxiInstanceId {
    engine::instance_id(p_object)
}

unsafe extern "C" fn object_get_instance_from_id(p_instance_id: sys::AxiInstanceId) -> sys::AxiObjectPtr {
    engine::instance_from_id(p_instance_id)
}

unsafe extern "C" fn object_cast_to(
    p_object: sys::AxiConstObjectPtr,
    p_class_tag: sys::AxiClassTag,
) -> sys::AxiObjectPtr {
    engine::cast_to(p_object, p_class_tag)
}

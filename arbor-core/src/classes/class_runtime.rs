/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Runtime checks and inspection of Arbor classes.

use arbor_ffi as sys;

use crate::builtin::GString;
use crate::meta::CallContext;
#[cfg(debug_assertions)]
use crate::meta::ClassName;
#[cfg(debug_assertions)]
use crate::classes::Object;
use crate::obj::{ArborClass, Gd, InstanceId, RawGd};

pub(crate) fn debug_string<T: ArborClass>(
    obj: &Gd<T>,
    f: &mut std::fmt::Formatter<'_>,
    ty: &str,
) -> std::fmt::Result {
    if let Some(id) = obj.instance_id_or_none() {
        let class: GString = obj.raw.as_object_ref().get_class();
        debug_string_parts(f, ty, id, class, obj.maybe_refcount())
    } else {
        write!(f, "{ty} {{ freed obj }}")
    }
}

pub(crate) fn debug_string_nullable<T: ArborClass>(
    obj: &RawGd<T>,
    f: &mut std::fmt::Formatter<'_>,
    ty: &str,
) -> std::fmt::Result {
    if obj.is_null() {
        write!(f, "{ty} {{ null }}")
    } else {
        // Unsafety introduced here to avoid creating a new Gd<T> (which can have all sorts of side effects, logs, refcounts etc.)
        // *and* pushing down all high-level Gd<T> functions to RawGd<T> as pure delegates.

        // SAFETY: checked non-null.
        let obj = unsafe { obj.as_non_null() };
        debug_string(obj, f, ty)
    }
}

fn debug_string_parts(
    f: &mut std::fmt::Formatter<'_>,
    ty: &str,
    id: InstanceId,
    class: GString,
    refcount: Option<usize>,
) -> std::fmt::Result {
    let mut builder = f.debug_struct(ty);
    builder
        .field("id", &id.to_i64())
        .field("class", &format_args!("{class}"));

    if let Some(refcount) = refcount {
        builder.field("refc", &refcount);
    }

    builder.finish()
}

/// Formats in the engine's default object notation, e.g. `<Node2D#1234567891011>`.
pub(crate) fn display_string<T: ArborClass>(
    obj: &Gd<T>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let id = obj.instance_id();
    let class: GString = obj.raw.as_object_ref().get_class();

    write!(f, "<{class}#{id}>")
}

pub(crate) fn object_ptr_from_id(instance_id: InstanceId) -> Option<sys::AxiObjectPtr> {
    // SAFETY: the engine looks up the ID in its object database and returns null if not found.
    let object_ptr = unsafe { sys::interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) };

    sys::ptr_then(object_ptr, |ptr| ptr)
}

pub(crate) fn construct_engine_object<T: ArborClass>() -> Gd<T> {
    // SAFETY: adhere to AXI contract; valid class name, and the returned pointer is an object.
    unsafe {
        let object_ptr = T::class_name()
            .with_string_name(|name| sys::interface_fn!(classdb_construct_object)(name.string_sys()));

        Gd::from_obj_sys(object_ptr)
    }
}

pub(crate) fn ensure_object_alive(
    instance_id: InstanceId,
    old_object_ptr: sys::AxiObjectPtr,
    call_ctx: &CallContext,
) {
    let Some(new_object_ptr) = object_ptr_from_id(instance_id) else {
        panic!("{call_ctx}: access to instance with ID {instance_id} after it has been freed")
    };

    // Instance IDs are never reused, so a successful lookup must give back the original pointer.
    assert_eq!(
        new_object_ptr, old_object_ptr,
        "{call_ctx}: instance ID {instance_id} points to a stale, reused object; please report this to arbor-rust maintainers"
    );
}

#[cfg(debug_assertions)]
pub(crate) fn ensure_object_inherits(derived: ClassName, base: ClassName, instance_id: InstanceId) {
    if derived == base
        || base == Object::class_name() // for Object base, anything inherits by definition
        || is_derived_base(derived, base)
    {
        return;
    }

    panic!(
        "instance of ID {instance_id} has type {derived} but is incorrectly stored in a Gd<{base}>.\n\
        This may happen if you change an object's identity through DerefMut."
    )
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation of this file

/// Checks if `derived` inherits from `base`, walking the static inheritance chain.
#[cfg(debug_assertions)]
fn is_derived_base(derived: ClassName, base: ClassName) -> bool {
    let base = base.to_cow_str();
    let derived = derived.to_cow_str();

    let mut current = parent_class(&derived);
    while let Some(parent) = current {
        if parent == base.as_ref() {
            return true;
        }
        current = parent_class(parent);
    }

    false
}

/// Immediate parent of each engine class; `None` for `Object` (and unknown names).
#[cfg(debug_assertions)]
fn parent_class(class: &str) -> Option<&'static str> {
    let parent = match class {
        "RefCounted" | "Node" | "TreeItem" => "Object",
        "Resource" => "RefCounted",
        "Font" => "Resource",
        "FontFile" => "Font",
        "CanvasItem" | "Node3D" => "Node",
        "Node2D" | "Control" => "CanvasItem",
        "Camera2D" | "CpuParticles2D" => "Node2D",
        "Tree" | "Popup" => "Control",
        "PopupMenu" => "Popup",
        "PhysicsBody3D" => "Node3D",
        "RigidBody3D" => "PhysicsBody3D",
        _ => return None,
    };

    Some(parent)
}

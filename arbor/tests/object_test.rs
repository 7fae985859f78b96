/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object lifecycle: construction, instance ids, casts, reference counting and `free()`.

mod host;

use arbor::builtin::GString;
use arbor::classes::{Control, FontFile, Node, Node2D, Object, RefCounted, Resource};
use arbor::meta::ToArbor;
use arbor::obj::{Gd, NewAlloc, NewGd};

use host::{ensure_initialized, expect_panic};

#[test]
fn construct_and_free() {
    ensure_initialized();

    let node = Node::new_alloc();
    assert_eq!(node.get_class(), GString::from("Node"));
    assert!(node.is_instance_valid());
    node.free();
}

#[test]
fn dynamic_class_name_of_subclass() {
    ensure_initialized();

    let node = Node2D::new_alloc();
    let as_node: Gd<Node> = node.upcast();
    assert_eq!(as_node.get_class(), GString::from("Node2D"));
    as_node.free();
}

#[test]
fn instance_ids_are_unique() {
    ensure_initialized();

    let a = Node::new_alloc();
    let b = Node::new_alloc();
    assert_ne!(a.instance_id(), b.instance_id());
    a.free();
    b.free();
}

#[test]
fn instance_id_encodes_memory_management() {
    ensure_initialized();

    let node = Node::new_alloc();
    assert!(!node.instance_id().is_ref_counted());
    node.free();

    let font = FontFile::new_gd();
    assert!(font.instance_id().is_ref_counted());
}

#[test]
fn instance_id_lookup() {
    ensure_initialized();

    let node = Node::new_alloc();
    let id = node.instance_id();

    let found = Gd::<Node>::from_instance_id(id);
    assert_eq!(found, node);

    node.free();
    assert!(Gd::<Node>::try_from_instance_id(id).is_none());
}

#[test]
fn free_invalidates_other_references() {
    ensure_initialized();

    let node = Node::new_alloc();
    let other = node.clone();
    assert_eq!(node, other);

    node.free();
    assert!(!other.is_instance_valid());
    expect_panic("method call on freed object", move || {
        let _ = other.get_child_count();
    });
}

#[test]
fn upcast_and_cast_preserve_identity() {
    ensure_initialized();

    let node2d = Node2D::new_alloc();
    let id = node2d.instance_id();

    let object: Gd<Object> = node2d.upcast();
    assert_eq!(object.instance_id(), id);

    let back: Gd<Node2D> = object.cast();
    assert_eq!(back.instance_id(), id);
    back.free();
}

#[test]
fn try_cast_to_unrelated_class_fails() {
    ensure_initialized();

    let node2d = Node2D::new_alloc();
    let as_node: Gd<Node> = node2d.upcast();

    let control = as_node.try_cast::<Control>();
    let as_node = control.expect_err("Node2D is not a Control");
    assert_eq!(as_node.get_class(), GString::from("Node2D"));
    as_node.free();
}

#[test]
fn refcounted_starts_at_one() {
    ensure_initialized();

    let font = FontFile::new_gd();
    assert_eq!(font.get_reference_count(), 1);
}

#[test]
fn clone_and_drop_balance_refcount() {
    ensure_initialized();

    let font = FontFile::new_gd();
    let copy = font.clone();
    assert_eq!(font.get_reference_count(), 2);

    drop(copy);
    assert_eq!(font.get_reference_count(), 1);
}

#[test]
fn upcast_does_not_leak_references() {
    ensure_initialized();

    let font = FontFile::new_gd();
    let resource: Gd<Resource> = font.clone().upcast();
    assert_eq!(resource.instance_id(), font.instance_id());
    assert_eq!(font.get_reference_count(), 2);

    let refcounted: Gd<RefCounted> = resource.upcast();
    assert_eq!(font.get_reference_count(), 2);

    drop(refcounted);
    assert_eq!(font.get_reference_count(), 1);
}

#[test]
fn variant_holds_a_reference() {
    ensure_initialized();

    let font = FontFile::new_gd();
    let variant = font.to_variant();
    assert_eq!(font.get_reference_count(), 2);

    drop(variant);
    assert_eq!(font.get_reference_count(), 1);
}

#[test]
fn refcounted_object_survives_via_variant() {
    ensure_initialized();

    let font = FontFile::new_gd();
    let id = font.instance_id();
    let variant = font.to_variant();

    drop(font);

    // The variant keeps the object alive.
    let revived = variant.to::<Gd<FontFile>>();
    assert_eq!(revived.instance_id(), id);
    assert_eq!(revived.get_reference_count(), 2); // variant + revived
}

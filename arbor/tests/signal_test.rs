/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Signals: typed connections, low-level connect/emit and call-error reporting.

mod host;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arbor::builtin::{Callable, GString, StringName, Variant, Vector2};
use arbor::classes::{Control, FontFile, Node, PopupMenu, RigidBody3D, Tree};
use arbor::global::Error;
use arbor::meta::ToArbor;
use arbor::obj::{NewAlloc, NewGd};

use host::ensure_initialized;

#[test]
fn typed_signal_delivers_payload() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let received = Rc::new(RefCell::new(Vec::new()));

    let sink = received.clone();
    menu.signals().id_pressed().connect(move |id| {
        sink.borrow_mut().push(id);
    });

    menu.signals().id_pressed().emit(42);
    menu.signals().id_pressed().emit(-3);

    assert_eq!(*received.borrow(), vec![42, -3]);
    menu.free();
}

#[test]
fn typed_signal_with_two_parameters() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    let received = Rc::new(RefCell::new(Vec::new()));

    let sink = received.clone();
    tree.signals().column_title_clicked().connect(move |column, mouse_button| {
        sink.borrow_mut().push((column, mouse_button));
    });

    tree.signals().column_title_clicked().emit(2, 1);
    assert_eq!(*received.borrow(), vec![(2, 1)]);
    tree.free();
}

#[test]
fn typed_signal_with_mixed_parameters() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    let received = Rc::new(RefCell::new(Vec::new()));

    let sink = received.clone();
    tree.signals().item_mouse_selected().connect(move |pos, button| {
        sink.borrow_mut().push((pos, button));
    });

    tree.signals().item_mouse_selected().emit(Vector2::new(12.0, 6.0), 2);
    assert_eq!(*received.borrow(), vec![(Vector2::new(12.0, 6.0), 2)]);
    tree.free();
}

#[test]
fn typed_signal_with_object_parameter() {
    ensure_initialized();

    let mut body = RigidBody3D::new_alloc();
    let other = Node::new_alloc();
    let received = Rc::new(RefCell::new(Vec::new()));

    let sink = received.clone();
    body.signals().body_entered().connect(move |node| {
        sink.borrow_mut().push(node);
    });

    body.signals().body_entered().emit(&other);

    let seen = received.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], other);
    drop(seen);

    other.free();
    body.free();
}

#[test]
fn connect_handle_disconnects() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let count = Rc::new(Cell::new(0));

    let sink = count.clone();
    let handle = menu.signals().id_pressed().connect(move |_id| {
        sink.set(sink.get() + 1);
    });

    menu.signals().id_pressed().emit(1);
    assert_eq!(count.get(), 1);
    assert!(handle.is_connected());

    handle.disconnect();
    menu.signals().id_pressed().emit(2);
    assert_eq!(count.get(), 1);
    menu.free();
}

#[test]
fn panicking_handler_is_contained() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let count = Rc::new(Cell::new(0));

    // The first handler panics; the trampoline must catch it so that the process survives
    // and the remaining handlers still run.
    menu.signals().id_pressed().connect(|_id| {
        panic!("handler failure");
    });
    let sink = count.clone();
    menu.signals().id_pressed().connect(move |_id| {
        sink.set(sink.get() + 1);
    });

    menu.signals().id_pressed().emit(5);
    assert_eq!(count.get(), 1);
    menu.free();
}

#[test]
fn low_level_connect_and_emit() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let mut object = menu.clone().upcast::<arbor::classes::Object>();

    let count = Rc::new(Cell::new(0));
    let sink = count.clone();
    let callable = Callable::from_local_fn("count_presses", move |args| {
        assert_eq!(args.len(), 1);
        sink.set(sink.get() + 1);
        Ok(Variant::nil())
    });

    let signal = StringName::from("id_pressed");
    assert_eq!(object.connect(signal.clone(), callable.clone()), Error::OK);
    assert!(object.is_connected(signal.clone(), callable.clone()));

    let result = object.emit_signal(signal.clone(), &[7i64.to_variant()]);
    assert_eq!(result, Error::OK);
    assert_eq!(count.get(), 1);

    object.disconnect(signal.clone(), callable.clone());
    assert!(!object.is_connected(signal, callable));
    menu.free();
}

#[test]
fn duplicate_connect_is_rejected() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let mut object = menu.clone().upcast::<arbor::classes::Object>();
    let callable = Callable::from_local_fn("noop", |_args| Ok(Variant::nil()));

    let signal = StringName::from("id_pressed");
    assert_eq!(object.connect(signal.clone(), callable.clone()), Error::OK);
    assert_eq!(
        object.connect_ex(signal, callable).flags(0).done(),
        Error::ERR_INVALID_PARAMETER
    );
    menu.free();
}

#[test]
fn emit_unknown_signal_reports_unavailable() {
    ensure_initialized();

    let mut node = Node::new_alloc();
    let result = node.emit_signal(StringName::from("no_such_signal"), &[]);
    assert_eq!(result, Error::ERR_UNAVAILABLE);
    node.free();
}

#[test]
fn emit_with_wrong_arity_fails() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let signal = StringName::from("id_pressed");

    let too_few = menu.try_emit_signal(signal.clone(), &[]);
    assert!(too_few.is_err());

    let too_many = menu.try_emit_signal(signal, &[1i64.to_variant(), 2i64.to_variant()]);
    assert!(too_many.is_err());
    menu.free();
}

#[test]
fn emit_with_wrong_argument_type_fails() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    let result = menu.try_emit_signal(
        StringName::from("id_pressed"),
        &[GString::from("not an id").to_variant()],
    );

    let error = result.expect_err("string is not a valid id");
    let message = error.to_string();
    assert!(message.contains("parameter #1"), "unexpected message: {message}");
    menu.free();
}

#[test]
fn grab_focus_fires_focus_entered() {
    ensure_initialized();

    let mut control = Control::new_alloc();
    let count = Rc::new(Cell::new(0));

    let sink = count.clone();
    control.signals().focus_entered().connect(move || {
        sink.set(sink.get() + 1);
    });

    control.grab_focus();
    assert_eq!(count.get(), 1);

    // Already focused, no second emission.
    control.grab_focus();
    assert_eq!(count.get(), 1);
    control.free();
}

#[test]
fn set_size_fires_resized() {
    ensure_initialized();

    let mut control = Control::new_alloc();
    let count = Rc::new(Cell::new(0));

    let sink = count.clone();
    control.signals().resized().connect(move || {
        sink.set(sink.get() + 1);
    });

    control.set_size(Vector2::new(64.0, 64.0));
    assert_eq!(count.get(), 1);

    // Same size, no change.
    control.set_size(Vector2::new(64.0, 64.0));
    assert_eq!(count.get(), 1);

    control.set_size(Vector2::new(128.0, 64.0));
    assert_eq!(count.get(), 2);
    control.free();
}

#[test]
fn hide_fires_visibility_changed() {
    ensure_initialized();

    let mut node = arbor::classes::Node2D::new_alloc();
    let count = Rc::new(Cell::new(0));

    let sink = count.clone();
    node.signals().visibility_changed().connect(move || {
        sink.set(sink.get() + 1);
    });

    node.hide();
    assert_eq!(count.get(), 1);

    // Already hidden, no change.
    node.set_visible(false);
    assert_eq!(count.get(), 1);

    node.show();
    assert_eq!(count.get(), 2);
    node.free();
}

#[test]
fn resource_changed_signal() {
    ensure_initialized();

    let mut font = FontFile::new_gd();
    let count = Rc::new(Cell::new(0));

    let sink = count.clone();
    font.signals().changed().connect(move || {
        sink.set(sink.get() + 1);
    });

    font.emit_changed();
    font.emit_changed();
    assert_eq!(count.get(), 2);
}

#[test]
fn tree_item_select_fires_item_selected() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    tree.set_columns(2);
    let mut item = tree.create_item().expect("root item");

    let count = Rc::new(Cell::new(0));
    let sink = count.clone();
    tree.signals().item_selected().connect(move || {
        sink.set(sink.get() + 1);
    });

    item.select(1);
    assert_eq!(count.get(), 1);
    tree.free();
}

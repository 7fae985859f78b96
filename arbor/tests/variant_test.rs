/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Variant conversions and string builtins, executed against the mock engine.

mod host;

use arbor::builtin::{Color, GString, StringName, Variant, VariantType, Vector2, Vector2i, Vector3};
use arbor::meta::{FromArbor, ToArbor};
use arbor::obj::{Gd, NewAlloc};
use arbor::classes::Node;
use proptest::prelude::*;

use host::ensure_initialized;

#[test]
fn variant_nil() {
    ensure_initialized();

    let nil = Variant::nil();
    assert_eq!(nil.get_type(), VariantType::Nil);
    assert!(nil.is_nil());
    assert!(nil.try_to::<i64>().is_err());
}

#[test]
fn variant_scalar_round_trip() {
    ensure_initialized();

    let v = Variant::from(-823_941_i64);
    assert_eq!(v.get_type(), VariantType::Int);
    assert_eq!(v.to::<i64>(), -823_941);

    let v = Variant::from(true);
    assert_eq!(v.get_type(), VariantType::Bool);
    assert!(v.to::<bool>());

    let v = Variant::from(0.25_f64);
    assert_eq!(v.get_type(), VariantType::Float);
    assert_eq!(v.to::<f64>(), 0.25);
}

#[test]
fn variant_narrow_int_round_trip() {
    ensure_initialized();

    let v = Variant::from(-7_i32);
    assert_eq!(v.get_type(), VariantType::Int);
    assert_eq!(v.to::<i32>(), -7);
    assert_eq!(v.to::<i64>(), -7);

    let v = Variant::from(200_u8);
    assert_eq!(v.to::<u8>(), 200);

    // Out-of-range narrowing fails instead of wrapping.
    let wide = Variant::from(300_i64);
    assert!(wide.try_to::<u8>().is_err());
}

#[test]
fn variant_math_round_trip() {
    ensure_initialized();

    let v2 = Vector2::new(1.5, -2.25);
    assert_eq!(Variant::from(v2).to::<Vector2>(), v2);

    let v2i = Vector2i::new(7, -3);
    assert_eq!(Variant::from(v2i).to::<Vector2i>(), v2i);

    let v3 = Vector3::new(0.5, 1.0, -8.0);
    assert_eq!(Variant::from(v3).to::<Vector3>(), v3);

    let color = Color::from_rgba(0.1, 0.2, 0.3, 1.0);
    assert_eq!(Variant::from(color).to::<Color>(), color);
}

#[test]
fn variant_string_round_trip() {
    ensure_initialized();

    let s = GString::from("mock engine ❤ utf-8");
    let v = s.to_variant();
    assert_eq!(v.get_type(), VariantType::String);
    assert_eq!(GString::from_variant(&v), s);

    // The variant owns an independent copy.
    drop(s);
    assert_eq!(v.to::<GString>(), GString::from("mock engine ❤ utf-8"));
}

#[test]
fn variant_string_name_round_trip() {
    ensure_initialized();

    let name = StringName::from("item_selected");
    let v = name.to_variant();
    assert_eq!(v.get_type(), VariantType::StringName);
    assert_eq!(v.to::<StringName>(), name);
}

#[test]
fn variant_wrong_type_fails() {
    ensure_initialized();

    let v = Variant::from(Vector2::new(1.0, 2.0));
    assert!(v.try_to::<i64>().is_err());
    assert!(v.try_to::<GString>().is_err());
    assert_eq!(v.try_to::<Vector2>().unwrap(), Vector2::new(1.0, 2.0));
}

#[test]
fn variant_clone_is_independent() {
    ensure_initialized();

    let original = Variant::from(GString::from("shared"));
    let copy = original.clone();
    drop(original);

    assert_eq!(copy.to::<GString>(), GString::from("shared"));
}

#[test]
fn variant_stringify() {
    ensure_initialized();

    assert_eq!(Variant::from(7_i64).to_string(), "7");
    assert_eq!(Variant::from(true).to_string(), "true");
    assert_eq!(Variant::from(GString::from("text")).to_string(), "text");
    assert_eq!(Variant::nil().to_string(), "<null>");
}

#[test]
fn variant_object_round_trip() {
    ensure_initialized();

    let node = Node::new_alloc();
    let id = node.instance_id();

    let v = node.to_variant();
    assert_eq!(v.get_type(), VariantType::Object);

    let back = v.to::<Gd<Node>>();
    assert_eq!(back.instance_id(), id);
    assert_eq!(back, node);

    drop(back);
    drop(v);
    node.free();
}

#[test]
fn gstring_len_and_eq() {
    ensure_initialized();

    let empty = GString::new();
    assert!(empty.is_empty());
    assert_eq!(empty, GString::default());

    let s = GString::from("über");
    assert_eq!(s.len(), 5); // bytes, not chars
    assert_eq!(String::from(&s), "über");
    assert_ne!(s, GString::from("uber"));
}

#[test]
fn string_name_equality_is_cheap_identity() {
    ensure_initialized();

    let a = StringName::from("ready");
    let b = StringName::from("ready");
    let c = StringName::from("process");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(GString::from(&a), GString::from("ready"));
}

proptest! {
    #[test]
    fn variant_int_round_trip_prop(value in any::<i64>()) {
        ensure_initialized();
        prop_assert_eq!(Variant::from(value).to::<i64>(), value);
    }

    #[test]
    fn variant_float_round_trip_prop(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        ensure_initialized();
        prop_assert_eq!(Variant::from(value).to::<f64>(), value);
    }

    #[test]
    fn variant_gstring_round_trip_prop(value in "\\PC*") {
        ensure_initialized();
        let s = GString::from(value.as_str());
        prop_assert_eq!(String::from(&Variant::from(s).to::<GString>()), value);
    }

    #[test]
    fn variant_vector2_round_trip_prop(x in -1.0e6_f32..1.0e6, y in -1.0e6_f32..1.0e6) {
        ensure_initialized();
        let v = Vector2::new(x, y);
        prop_assert_eq!(Variant::from(v).to::<Vector2>(), v);
    }
}

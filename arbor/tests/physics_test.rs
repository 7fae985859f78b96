/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Physics classes: collision layers, rigid body state and impulse application.

mod host;

use arbor::builtin::Vector3;
use arbor::classes::rigid_body_3d::{CenterOfMassMode, DampMode, FreezeMode};
use arbor::classes::RigidBody3D;
use arbor::obj::NewAlloc;

use host::ensure_initialized;

#[test]
fn rigid_body_defaults() {
    ensure_initialized();

    let body = RigidBody3D::new_alloc();
    assert_eq!(body.get_mass(), 1.0);
    assert_eq!(body.get_gravity_scale(), 1.0);
    assert_eq!(body.get_linear_velocity(), Vector3::ZERO);
    assert_eq!(body.get_angular_velocity(), Vector3::ZERO);
    assert_eq!(body.get_freeze_mode(), FreezeMode::STATIC);
    assert_eq!(body.get_center_of_mass_mode(), CenterOfMassMode::AUTO);
    assert_eq!(body.get_linear_damp_mode(), DampMode::COMBINE);
    assert!(!body.is_sleeping());
    assert!(!body.is_contact_monitor_enabled());
    assert_eq!(body.get_max_contacts_reported(), 0);
    body.free();
}

#[test]
fn rigid_body_properties_round_trip() {
    ensure_initialized();

    let mut body = RigidBody3D::new_alloc();
    body.set_mass(4.0);
    body.set_gravity_scale(0.5);
    body.set_freeze_mode(FreezeMode::KINEMATIC);
    body.set_center_of_mass_mode(CenterOfMassMode::CUSTOM);
    body.set_linear_damp_mode(DampMode::REPLACE);
    body.set_angular_damp_mode(DampMode::REPLACE);
    body.set_sleeping(true);
    body.set_contact_monitor(true);
    body.set_max_contacts_reported(8);

    assert_eq!(body.get_mass(), 4.0);
    assert_eq!(body.get_gravity_scale(), 0.5);
    assert_eq!(body.get_freeze_mode(), FreezeMode::KINEMATIC);
    assert_eq!(body.get_center_of_mass_mode(), CenterOfMassMode::CUSTOM);
    assert_eq!(body.get_linear_damp_mode(), DampMode::REPLACE);
    assert_eq!(body.get_angular_damp_mode(), DampMode::REPLACE);
    assert!(body.is_sleeping());
    assert!(body.is_contact_monitor_enabled());
    assert_eq!(body.get_max_contacts_reported(), 8);
    body.free();
}

#[test]
fn collision_layer_bits() {
    ensure_initialized();

    let mut body = RigidBody3D::new_alloc();
    assert_eq!(body.get_collision_layer(), 1);
    assert!(body.get_collision_layer_value(1));
    assert!(!body.get_collision_layer_value(2));

    body.set_collision_layer_value(3, true);
    assert!(body.get_collision_layer_value(3));
    assert_eq!(body.get_collision_layer(), 0b101);

    body.set_collision_layer_value(1, false);
    assert_eq!(body.get_collision_layer(), 0b100);

    body.set_collision_mask(0xFF00);
    assert_eq!(body.get_collision_mask(), 0xFF00);
    body.free();
}

#[test]
fn central_impulse_changes_linear_velocity() {
    ensure_initialized();

    let mut body = RigidBody3D::new_alloc();
    body.set_mass(2.0);

    body.apply_central_impulse(Vector3::new(4.0, 0.0, 0.0));
    assert_eq!(body.get_linear_velocity(), Vector3::new(2.0, 0.0, 0.0));
    // No lever arm, so no rotation.
    assert_eq!(body.get_angular_velocity(), Vector3::ZERO);

    body.apply_central_impulse(Vector3::new(0.0, 2.0, 0.0));
    assert_eq!(body.get_linear_velocity(), Vector3::new(2.0, 1.0, 0.0));
    body.free();
}

#[test]
fn off_center_impulse_adds_angular_velocity() {
    ensure_initialized();

    let mut body = RigidBody3D::new_alloc();
    let impulse = Vector3::new(0.0, 3.0, 0.0);
    let position = Vector3::new(1.0, 0.0, 0.0);

    body.apply_impulse_ex(impulse).position(position).done();

    assert_eq!(body.get_linear_velocity(), Vector3::new(0.0, 3.0, 0.0));
    // cross((1,0,0), (0,3,0)) / mass = (0,0,3)
    assert_eq!(body.get_angular_velocity(), Vector3::new(0.0, 0.0, 3.0));
    body.free();
}

#[test]
fn impulse_default_position_is_center() {
    ensure_initialized();

    let mut plain = RigidBody3D::new_alloc();
    let mut extended = RigidBody3D::new_alloc();
    let impulse = Vector3::new(1.5, -2.0, 0.5);

    plain.apply_impulse(impulse);
    extended.apply_impulse_ex(impulse).position(Vector3::ZERO).done();

    assert_eq!(plain.get_linear_velocity(), extended.get_linear_velocity());
    assert_eq!(plain.get_angular_velocity(), extended.get_angular_velocity());
    assert_eq!(plain.get_angular_velocity(), Vector3::ZERO);

    plain.free();
    extended.free();
}

#[test]
fn apply_force_accumulates() {
    ensure_initialized();

    let mut body = RigidBody3D::new_alloc();
    body.apply_force(Vector3::new(10.0, 0.0, 0.0));
    body.apply_force_ex(Vector3::new(0.0, 5.0, 0.0))
        .position(Vector3::new(0.0, 0.0, 1.0))
        .done();

    // Forces move velocity in the same direction; exact integration step is
    // host-defined, so only check the direction components are non-zero.
    let velocity = body.get_linear_velocity();
    assert!(velocity.x > 0.0);
    assert!(velocity.y > 0.0);
    body.free();
}

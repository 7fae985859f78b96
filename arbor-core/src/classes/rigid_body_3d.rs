/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`RigidBody3D`][crate::classes::RigidBody3D].
//!
//! Defines related flag and enum types.

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `RigidBody3D`.
    ///
    /// Inherits [`PhysicsBody3D`][crate::classes::PhysicsBody3D].
    ///
    /// Related symbols:
    ///
    /// * [`rigid_body_3d`][crate::classes::rigid_body_3d]: sidecar module with related enum/flag types
    #[derive(Debug)]
    #[repr(C)]
    pub struct RigidBody3D {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl RigidBody3D {
        pub fn set_mass(&mut self, mass: f32) {
            type CallRet = ();
            type CallParams = (f32,);

            let args = (mass,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_mass",
                    hash: 373806693,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_mass",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_mass(&self) -> f32 {
            type CallRet = f32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_mass",
                    hash: 1740695154,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_mass",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_linear_velocity(&mut self, linear_velocity: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3,);

            let args = (linear_velocity,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_linear_velocity",
                    hash: 3460891854,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_linear_velocity",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_linear_velocity(&self) -> Vector3 {
            type CallRet = Vector3;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_linear_velocity",
                    hash: 3360562785,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_linear_velocity",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3,);

            let args = (angular_velocity,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_angular_velocity",
                    hash: 3460891855,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_angular_velocity",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_angular_velocity(&self) -> Vector3 {
            type CallRet = Vector3;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_angular_velocity",
                    hash: 3360562786,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_angular_velocity",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_gravity_scale(&mut self, gravity_scale: f32) {
            type CallRet = ();
            type CallParams = (f32,);

            let args = (gravity_scale,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_gravity_scale",
                    hash: 373806694,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_gravity_scale",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_gravity_scale(&self) -> f32 {
            type CallRet = f32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_gravity_scale",
                    hash: 1740695155,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_gravity_scale",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_freeze_mode(&mut self, freeze_mode: FreezeMode) {
            type CallRet = ();
            type CallParams = (FreezeMode,);

            let args = (freeze_mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_freeze_mode",
                    hash: 2302511279,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_freeze_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_freeze_mode(&self) -> FreezeMode {
            type CallRet = FreezeMode;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_freeze_mode",
                    hash: 3362217315,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_freeze_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_center_of_mass_mode(&mut self, mode: CenterOfMassMode) {
            type CallRet = ();
            type CallParams = (CenterOfMassMode,);

            let args = (mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_center_of_mass_mode",
                    hash: 2302511280,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_center_of_mass_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_center_of_mass_mode(&self) -> CenterOfMassMode {
            type CallRet = CenterOfMassMode;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_center_of_mass_mode",
                    hash: 3362217316,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_center_of_mass_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_linear_damp_mode(&mut self, linear_damp_mode: DampMode) {
            type CallRet = ();
            type CallParams = (DampMode,);

            let args = (linear_damp_mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_linear_damp_mode",
                    hash: 2302511281,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_linear_damp_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_linear_damp_mode(&self) -> DampMode {
            type CallRet = DampMode;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_linear_damp_mode",
                    hash: 3362217317,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_linear_damp_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_angular_damp_mode(&mut self, angular_damp_mode: DampMode) {
            type CallRet = ();
            type CallParams = (DampMode,);

            let args = (angular_damp_mode,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_angular_damp_mode",
                    hash: 2302511282,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_angular_damp_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_angular_damp_mode(&self) -> DampMode {
            type CallRet = DampMode;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_angular_damp_mode",
                    hash: 3362217318,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_angular_damp_mode",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_sleeping(&mut self, sleeping: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (sleeping,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_sleeping",
                    hash: 2586408646,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_sleeping",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_sleeping(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "is_sleeping",
                    hash: 36873704,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "is_sleeping",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_contact_monitor(&mut self, enabled: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (enabled,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_contact_monitor",
                    hash: 2586408647,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_contact_monitor",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_contact_monitor_enabled(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "is_contact_monitor_enabled",
                    hash: 36873705,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "is_contact_monitor_enabled",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_max_contacts_reported(&mut self, amount: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (amount,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "set_max_contacts_reported",
                    hash: 1286410259,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "set_max_contacts_reported",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_max_contacts_reported(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "get_max_contacts_reported",
                    hash: 3905245794,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "get_max_contacts_reported",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn apply_impulse(&mut self, impulse: Vector3) {
            self.apply_impulse_ex(impulse).done()
        }

        #[inline]
        pub fn apply_impulse_ex(&mut self, impulse: Vector3) -> ExApplyImpulse<'_> {
            ExApplyImpulse::new(self, impulse)
        }

        pub(crate) fn apply_impulse_full(&mut self, impulse: Vector3, position: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3, Vector3);

            let args = (impulse, position);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "apply_impulse",
                    hash: 2754756483,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "apply_impulse",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn apply_central_impulse(&mut self, impulse: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3,);

            let args = (impulse,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "apply_central_impulse",
                    hash: 3460891856,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "apply_central_impulse",
                    self.object_ptr,
                    args,
                )
            }
        }

        #[inline]
        pub fn apply_force(&mut self, force: Vector3) {
            self.apply_force_ex(force).done()
        }

        #[inline]
        pub fn apply_force_ex(&mut self, force: Vector3) -> ExApplyForce<'_> {
            ExApplyForce::new(self, force)
        }

        pub(crate) fn apply_force_full(&mut self, force: Vector3, position: Vector3) {
            type CallRet = ();
            type CallParams = (Vector3, Vector3);

            let args = (force, position);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "RigidBody3D",
                    method_name: "apply_force",
                    hash: 2754756484,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "RigidBody3D",
                    "apply_force",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for RigidBody3D {
        type Base = crate::classes::PhysicsBody3D;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"RigidBody3D"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for RigidBody3D {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for RigidBody3D {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for RigidBody3D {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::PhysicsBody3D> for RigidBody3D {}

    unsafe impl crate::obj::Inherits<crate::classes::Node3D> for RigidBody3D {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for RigidBody3D {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for RigidBody3D {}

    impl std::ops::Deref for RigidBody3D {
        type Target = crate::classes::PhysicsBody3D;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for RigidBody3D {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

/// Default-param extender for [`RigidBody3D::apply_impulse_ex`][super::RigidBody3D::apply_impulse_ex].
#[must_use]
pub struct ExApplyImpulse<'a> {
    surround_object: &'a mut re_export::RigidBody3D,
    impulse: Vector3,
    position: Vector3,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExApplyImpulse<'a> {
    fn new(surround_object: &'a mut re_export::RigidBody3D, impulse: Vector3) -> Self {
        Self {
            surround_object,
            impulse,
            position: Vector3::ZERO,
        }
    }

    #[inline]
    pub fn position(self, value: Vector3) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            position: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::RigidBody3D::apply_impulse_full(
            self.surround_object,
            self.impulse,
            self.position,
        )
    }
}

/// Default-param extender for [`RigidBody3D::apply_force_ex`][super::RigidBody3D::apply_force_ex].
#[must_use]
pub struct ExApplyForce<'a> {
    surround_object: &'a mut re_export::RigidBody3D,
    force: Vector3,
    position: Vector3,
}

#[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
impl<'a> ExApplyForce<'a> {
    fn new(surround_object: &'a mut re_export::RigidBody3D, force: Vector3) -> Self {
        Self {
            surround_object,
            force,
            position: Vector3::ZERO,
        }
    }

    #[inline]
    pub fn position(self, value: Vector3) -> Self {
        // Currently not testing whether the parameter was already set
        Self {
            position: value,
            ..self
        }
    }

    #[inline]
    pub fn done(self) {
        re_export::RigidBody3D::apply_force_full(self.surround_object, self.force, self.position)
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FreezeMode {
    ord: i32,
}

impl FreezeMode {
    pub const STATIC: FreezeMode = FreezeMode { ord: 0 };

    pub const KINEMATIC: FreezeMode = FreezeMode { ord: 1 };
}

impl std::fmt::Debug for FreezeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::STATIC => "STATIC",
            Self::KINEMATIC => "KINEMATIC",
            _ => {
                f.debug_struct("FreezeMode").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for FreezeMode {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::STATIC => "STATIC",
            Self::KINEMATIC => "KINEMATIC",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for FreezeMode {
    type Via = i32;
}

impl crate::meta::ToArbor for FreezeMode {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for FreezeMode {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CenterOfMassMode {
    ord: i32,
}

impl CenterOfMassMode {
    pub const AUTO: CenterOfMassMode = CenterOfMassMode { ord: 0 };

    pub const CUSTOM: CenterOfMassMode = CenterOfMassMode { ord: 1 };
}

impl std::fmt::Debug for CenterOfMassMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::AUTO => "AUTO",
            Self::CUSTOM => "CUSTOM",
            _ => {
                f.debug_struct("CenterOfMassMode")
                    .field("ord", &self.ord)
                    .finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for CenterOfMassMode {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::AUTO => "AUTO",
            Self::CUSTOM => "CUSTOM",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for CenterOfMassMode {
    type Via = i32;
}

impl crate::meta::ToArbor for CenterOfMassMode {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for CenterOfMassMode {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct DampMode {
    ord: i32,
}

impl DampMode {
    pub const COMBINE: DampMode = DampMode { ord: 0 };

    pub const REPLACE: DampMode = DampMode { ord: 1 };
}

impl std::fmt::Debug for DampMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::COMBINE => "COMBINE",
            Self::REPLACE => "REPLACE",
            _ => {
                f.debug_struct("DampMode").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for DampMode {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::COMBINE => "COMBINE",
            Self::REPLACE => "REPLACE",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for DampMode {
    type Via = i32;
}

impl crate::meta::ToArbor for DampMode {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for DampMode {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::RigidBody3D;
    use crate::classes::Node;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`RigidBody3D`][crate::classes::RigidBody3D] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfRigidBody3D<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfRigidBody3D<C> {
        /// Signature: `(body: Gd<Node>)`
        pub fn body_entered(&mut self) -> SigBodyEntered<C> {
            SigBodyEntered {
                typed: TypedSignal::extract(&mut self.__internal_obj, "body_entered"),
            }
        }

        /// Signature: `(body: Gd<Node>)`
        pub fn body_exited(&mut self) -> SigBodyExited<C> {
            SigBodyExited {
                typed: TypedSignal::extract(&mut self.__internal_obj, "body_exited"),
            }
        }

        /// Signature: `()`
        pub fn sleeping_state_changed(&mut self) -> SigSleepingStateChanged<C> {
            SigSleepingStateChanged {
                typed: TypedSignal::extract(&mut self.__internal_obj, "sleeping_state_changed"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfRigidBody3D<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<RigidBody3D as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = RigidBody3D;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfRigidBody3D<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = RigidBody3D;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigBodyEntered<C> = TypedSignal<C, (Gd<Node>,)>;

    pub struct SigBodyEntered<C: WithSignals> {
        typed: TypedSigBodyEntered<C>,
    }

    impl<C: WithSignals> SigBodyEntered<C> {
        pub fn emit(&mut self, body: &Gd<Node>) {
            self.typed.emit_tuple((body.clone(),));
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigBodyEntered<C> {
        type Target = TypedSigBodyEntered<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigBodyEntered<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigBodyExited<C> = TypedSignal<C, (Gd<Node>,)>;

    pub struct SigBodyExited<C: WithSignals> {
        typed: TypedSigBodyExited<C>,
    }

    impl<C: WithSignals> SigBodyExited<C> {
        pub fn emit(&mut self, body: &Gd<Node>) {
            self.typed.emit_tuple((body.clone(),));
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigBodyExited<C> {
        type Target = TypedSigBodyExited<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigBodyExited<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    type TypedSigSleepingStateChanged<C> = TypedSignal<C, ()>;

    pub struct SigSleepingStateChanged<C: WithSignals> {
        typed: TypedSigSleepingStateChanged<C>,
    }

    impl<C: WithSignals> SigSleepingStateChanged<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigSleepingStateChanged<C> {
        type Target = TypedSigSleepingStateChanged<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigSleepingStateChanged<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for RigidBody3D {
        type SignalCollection<C: WithSignals> = SignalsOfRigidBody3D<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sidecar module for class [`CpuParticles2D`][crate::classes::CpuParticles2D].
//!
//! Defines related flag and enum types.

use arbor_ffi as sys;

use crate::builtin::*;
use crate::meta::{ClassName, Signature};

pub(super) mod re_export {
    use super::*;

    /// Arbor class `CpuParticles2D`.
    ///
    /// Inherits [`Node2D`][crate::classes::Node2D].
    ///
    /// Related symbols:
    ///
    /// * [`cpu_particles_2d`][crate::classes::cpu_particles_2d]: sidecar module with related enum/flag types
    #[derive(Debug)]
    #[repr(C)]
    pub struct CpuParticles2D {
        object_ptr: sys::AxiObjectPtr,

        // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
        // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
        rtti: Option<crate::private::ObjectRtti>,
    }

    impl CpuParticles2D {
        pub fn set_emitting(&mut self, emitting: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (emitting,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_emitting",
                    hash: 2586408644,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_emitting",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn is_emitting(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "is_emitting",
                    hash: 36873701,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "is_emitting",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_amount(&mut self, amount: i32) {
            type CallRet = ();
            type CallParams = (i32,);

            let args = (amount,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_amount",
                    hash: 1286410251,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_amount",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_amount(&self) -> i32 {
            type CallRet = i32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_amount",
                    hash: 3905245788,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_amount",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_lifetime(&mut self, secs: f64) {
            type CallRet = ();
            type CallParams = (f64,);

            let args = (secs,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_lifetime",
                    hash: 373806691,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_lifetime",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_lifetime(&self) -> f64 {
            type CallRet = f64;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_lifetime",
                    hash: 1740695152,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_lifetime",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_one_shot(&mut self, enable: bool) {
            type CallRet = ();
            type CallParams = (bool,);

            let args = (enable,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_one_shot",
                    hash: 2586408645,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_one_shot",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_one_shot(&self) -> bool {
            type CallRet = bool;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_one_shot",
                    hash: 36873702,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_one_shot",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_emission_shape(&mut self, shape: EmissionShape) {
            type CallRet = ();
            type CallParams = (EmissionShape,);

            let args = (shape,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_emission_shape",
                    hash: 2302511276,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_emission_shape",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_emission_shape(&self) -> EmissionShape {
            type CallRet = EmissionShape;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_emission_shape",
                    hash: 3362217312,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_emission_shape",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_param_min(&mut self, param: Parameter, value: f32) {
            type CallRet = ();
            type CallParams = (Parameter, f32);

            let args = (param, value);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_param_min",
                    hash: 3320600299,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_param_min",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_param_min(&self, param: Parameter) -> f32 {
            type CallRet = f32;
            type CallParams = (Parameter,);

            let args = (param,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_param_min",
                    hash: 2038050600,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_param_min",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_param_max(&mut self, param: Parameter, value: f32) {
            type CallRet = ();
            type CallParams = (Parameter, f32);

            let args = (param, value);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_param_max",
                    hash: 3320600300,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_param_max",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_param_max(&self, param: Parameter) -> f32 {
            type CallRet = f32;
            type CallParams = (Parameter,);

            let args = (param,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_param_max",
                    hash: 2038050601,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_param_max",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_direction(&mut self, direction: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (direction,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_direction",
                    hash: 743155729,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_direction",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_direction(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_direction",
                    hash: 3341600331,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_direction",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_spread(&mut self, spread: f32) {
            type CallRet = ();
            type CallParams = (f32,);

            let args = (spread,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_spread",
                    hash: 373806692,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_spread",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_spread(&self) -> f32 {
            type CallRet = f32;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_spread",
                    hash: 1740695153,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_spread",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_gravity(&mut self, accel_vec: Vector2) {
            type CallRet = ();
            type CallParams = (Vector2,);

            let args = (accel_vec,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_gravity",
                    hash: 743155730,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_gravity",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_gravity(&self) -> Vector2 {
            type CallRet = Vector2;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_gravity",
                    hash: 3341600332,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_gravity",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_draw_order(&mut self, order: DrawOrder) {
            type CallRet = ();
            type CallParams = (DrawOrder,);

            let args = (order,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_draw_order",
                    hash: 2302511277,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_draw_order",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_draw_order(&self) -> DrawOrder {
            type CallRet = DrawOrder;
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_draw_order",
                    hash: 3362217313,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_draw_order",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn set_particle_flag(&mut self, particle_flag: ParticleFlags, enable: bool) {
            type CallRet = ();
            type CallParams = (ParticleFlags, bool);

            let args = (particle_flag, enable);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "set_particle_flag",
                    hash: 1774431677,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "set_particle_flag",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn get_particle_flag(&self, particle_flag: ParticleFlags) -> bool {
            type CallRet = bool;
            type CallParams = (ParticleFlags,);

            let args = (particle_flag,);

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "get_particle_flag",
                    hash: 1100442926,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "get_particle_flag",
                    self.object_ptr,
                    args,
                )
            }
        }

        pub fn restart(&mut self) {
            type CallRet = ();
            type CallParams = ();

            let args = ();

            unsafe {
                let method_bind = sys::class_scene_api().fptr_by_key(sys::lazy_keys::ClassMethodKey {
                    class_name: "CpuParticles2D",
                    method_name: "restart",
                    hash: 3218959720,
                });

                Signature::<CallParams, CallRet>::out_class_ptrcall(
                    method_bind,
                    "CpuParticles2D",
                    "restart",
                    self.object_ptr,
                    args,
                )
            }
        }
    }

    impl crate::obj::ArborClass for CpuParticles2D {
        type Base = crate::classes::Node2D;

        fn class_name() -> ClassName {
            static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();

            let name: &'static ClassName =
                CLASS_NAME.get_or_init(|| ClassName::alloc_next_ascii(c"CpuParticles2D"));
            *name
        }

        const INIT_LEVEL: crate::init::InitLevel = crate::init::InitLevel::Scene;
    }

    unsafe impl crate::obj::Bounds for CpuParticles2D {
        type Memory = crate::obj::bounds::MemManual;
        type DynMemory = crate::obj::bounds::MemManual;
    }

    impl crate::obj::EngineClass for CpuParticles2D {
        fn as_object_ptr(&self) -> sys::AxiObjectPtr {
            self.object_ptr
        }

        fn as_type_ptr(&self) -> sys::AxiTypePtr {
            std::ptr::addr_of!(self.object_ptr) as sys::AxiTypePtr
        }
    }

    impl crate::obj::cap::ArborDefault for CpuParticles2D {
        fn __arbor_default() -> crate::obj::Gd<Self> {
            crate::classes::construct_engine_object::<Self>()
        }
    }

    unsafe impl crate::obj::Inherits<crate::classes::Node2D> for CpuParticles2D {}

    unsafe impl crate::obj::Inherits<crate::classes::CanvasItem> for CpuParticles2D {}

    unsafe impl crate::obj::Inherits<crate::classes::Node> for CpuParticles2D {}

    unsafe impl crate::obj::Inherits<crate::classes::Object> for CpuParticles2D {}

    impl std::ops::Deref for CpuParticles2D {
        type Target = crate::classes::Node2D;

        fn deref(&self) -> &Self::Target {
            // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
            unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
        }
    }

    impl std::ops::DerefMut for CpuParticles2D {
        fn deref_mut(&mut self) -> &mut Self::Target {
            // SAFETY: see above.
            unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
        }
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct DrawOrder {
    ord: i32,
}

impl DrawOrder {
    pub const INDEX: DrawOrder = DrawOrder { ord: 0 };

    pub const LIFETIME: DrawOrder = DrawOrder { ord: 1 };
}

impl std::fmt::Debug for DrawOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::INDEX => "INDEX",
            Self::LIFETIME => "LIFETIME",
            _ => {
                f.debug_struct("DrawOrder").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for DrawOrder {
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
            Self::INDEX => "INDEX",
            Self::LIFETIME => "LIFETIME",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for DrawOrder {
    type Via = i32;
}

impl crate::meta::ToArbor for DrawOrder {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for DrawOrder {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EmissionShape {
    ord: i32,
}

impl EmissionShape {
    pub const POINT: EmissionShape = EmissionShape { ord: 0 };

    pub const SPHERE: EmissionShape = EmissionShape { ord: 1 };

    pub const SPHERE_SURFACE: EmissionShape = EmissionShape { ord: 2 };

    pub const RECTANGLE: EmissionShape = EmissionShape { ord: 3 };

    pub const POINTS: EmissionShape = EmissionShape { ord: 4 };

    pub const DIRECTED_POINTS: EmissionShape = EmissionShape { ord: 5 };

    pub const MAX: EmissionShape = EmissionShape { ord: 6 };
}

impl std::fmt::Debug for EmissionShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::POINT => "POINT",
            Self::SPHERE => "SPHERE",
            Self::SPHERE_SURFACE => "SPHERE_SURFACE",
            Self::RECTANGLE => "RECTANGLE",
            Self::POINTS => "POINTS",
            Self::DIRECTED_POINTS => "DIRECTED_POINTS",
            Self::MAX => "MAX",
            _ => {
                f.debug_struct("EmissionShape").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for EmissionShape {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1 | 2 | 3 | 4 | 5 | 6) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::POINT => "POINT",
            Self::SPHERE => "SPHERE",
            Self::SPHERE_SURFACE => "SPHERE_SURFACE",
            Self::RECTANGLE => "RECTANGLE",
            Self::POINTS => "POINTS",
            Self::DIRECTED_POINTS => "DIRECTED_POINTS",
            Self::MAX => "MAX",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for EmissionShape {
    type Via = i32;
}

impl crate::meta::ToArbor for EmissionShape {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for EmissionShape {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Parameter {
    ord: i32,
}

impl Parameter {
    pub const INITIAL_LINEAR_VELOCITY: Parameter = Parameter { ord: 0 };

    pub const ANGULAR_VELOCITY: Parameter = Parameter { ord: 1 };

    pub const ORBIT_VELOCITY: Parameter = Parameter { ord: 2 };

    pub const LINEAR_ACCEL: Parameter = Parameter { ord: 3 };

    pub const RADIAL_ACCEL: Parameter = Parameter { ord: 4 };

    pub const TANGENTIAL_ACCEL: Parameter = Parameter { ord: 5 };

    pub const DAMPING: Parameter = Parameter { ord: 6 };

    pub const ANGLE: Parameter = Parameter { ord: 7 };

    pub const SCALE: Parameter = Parameter { ord: 8 };

    pub const HUE_VARIATION: Parameter = Parameter { ord: 9 };

    pub const ANIM_SPEED: Parameter = Parameter { ord: 10 };

    pub const ANIM_OFFSET: Parameter = Parameter { ord: 11 };

    pub const MAX: Parameter = Parameter { ord: 12 };
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::INITIAL_LINEAR_VELOCITY => "INITIAL_LINEAR_VELOCITY",
            Self::ANGULAR_VELOCITY => "ANGULAR_VELOCITY",
            Self::ORBIT_VELOCITY => "ORBIT_VELOCITY",
            Self::LINEAR_ACCEL => "LINEAR_ACCEL",
            Self::RADIAL_ACCEL => "RADIAL_ACCEL",
            Self::TANGENTIAL_ACCEL => "TANGENTIAL_ACCEL",
            Self::DAMPING => "DAMPING",
            Self::ANGLE => "ANGLE",
            Self::SCALE => "SCALE",
            Self::HUE_VARIATION => "HUE_VARIATION",
            Self::ANIM_SPEED => "ANIM_SPEED",
            Self::ANIM_OFFSET => "ANIM_OFFSET",
            Self::MAX => "MAX",
            _ => {
                f.debug_struct("Parameter").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for Parameter {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::INITIAL_LINEAR_VELOCITY => "INITIAL_LINEAR_VELOCITY",
            Self::ANGULAR_VELOCITY => "ANGULAR_VELOCITY",
            Self::ORBIT_VELOCITY => "ORBIT_VELOCITY",
            Self::LINEAR_ACCEL => "LINEAR_ACCEL",
            Self::RADIAL_ACCEL => "RADIAL_ACCEL",
            Self::TANGENTIAL_ACCEL => "TANGENTIAL_ACCEL",
            Self::DAMPING => "DAMPING",
            Self::ANGLE => "ANGLE",
            Self::SCALE => "SCALE",
            Self::HUE_VARIATION => "HUE_VARIATION",
            Self::ANIM_SPEED => "ANIM_SPEED",
            Self::ANIM_OFFSET => "ANIM_OFFSET",
            Self::MAX => "MAX",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for Parameter {
    type Via = i32;
}

impl crate::meta::ToArbor for Parameter {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for Parameter {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ParticleFlags {
    ord: i32,
}

impl ParticleFlags {
    pub const ALIGN_Y_TO_VELOCITY: ParticleFlags = ParticleFlags { ord: 0 };

    pub const ROTATE_Y: ParticleFlags = ParticleFlags { ord: 1 };

    pub const DISABLE_Z: ParticleFlags = ParticleFlags { ord: 2 };

    pub const MAX: ParticleFlags = ParticleFlags { ord: 3 };
}

impl std::fmt::Debug for ParticleFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::ALIGN_Y_TO_VELOCITY => "ALIGN_Y_TO_VELOCITY",
            Self::ROTATE_Y => "ROTATE_Y",
            Self::DISABLE_Z => "DISABLE_Z",
            Self::MAX => "MAX",
            _ => {
                f.debug_struct("ParticleFlags").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for ParticleFlags {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 1 | 2 | 3) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::ALIGN_Y_TO_VELOCITY => "ALIGN_Y_TO_VELOCITY",
            Self::ROTATE_Y => "ROTATE_Y",
            Self::DISABLE_Z => "DISABLE_Z",
            Self::MAX => "MAX",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for ParticleFlags {
    type Via = i32;
}

impl crate::meta::ToArbor for ParticleFlags {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for ParticleFlags {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

pub use signals::*;

mod signals {
    use crate::obj::{Gd, WithSignals};
    use super::re_export::CpuParticles2D;
    use crate::signals::TypedSignal;

    /// A collection of signals for the [`CpuParticles2D`][crate::classes::CpuParticles2D] class.
    // C is needed for signals of derived classes that are upcast via Deref; C in that class is the derived class.
    pub struct SignalsOfCpuParticles2D<C: WithSignals> {
        #[doc(hidden)]
        pub(crate) __internal_obj: Option<Gd<C>>,
    }

    impl<C: WithSignals> SignalsOfCpuParticles2D<C> {
        /// Signature: `()`
        pub fn finished(&mut self) -> SigFinished<C> {
            SigFinished {
                typed: TypedSignal::extract(&mut self.__internal_obj, "finished"),
            }
        }
    }

    impl<C: WithSignals> std::ops::Deref for SignalsOfCpuParticles2D<C> {
        // The whole upcast mechanism is based on C remaining the same even through upcast.
        type Target =
            <<CpuParticles2D as crate::obj::ArborClass>::Base as WithSignals>::SignalCollection<C>;

        fn deref(&self) -> &Self::Target {
            type Derived = CpuParticles2D;
            crate::private::signal_collection_to_base::<C, Derived>(self)
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SignalsOfCpuParticles2D<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            type Derived = CpuParticles2D;
            crate::private::signal_collection_to_base_mut::<C, Derived>(self)
        }
    }

    type TypedSigFinished<C> = TypedSignal<C, ()>;

    pub struct SigFinished<C: WithSignals> {
        typed: TypedSigFinished<C>,
    }

    impl<C: WithSignals> SigFinished<C> {
        pub fn emit(&mut self) {
            self.typed.emit_tuple(());
        }
    }

    impl<C: WithSignals> std::ops::Deref for SigFinished<C> {
        type Target = TypedSigFinished<C>;

        fn deref(&self) -> &Self::Target {
            &self.typed
        }
    }

    impl<C: WithSignals> std::ops::DerefMut for SigFinished<C> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.typed
        }
    }

    impl WithSignals for CpuParticles2D {
        type SignalCollection<C: WithSignals> = SignalsOfCpuParticles2D<C>;

        // During construction, C = Self.
        #[doc(hidden)]
        fn __signals_from_external(gd_ref: &Gd<Self>) -> Self::SignalCollection<Self> {
            Self::SignalCollection {
                __internal_obj: Some(gd_ref.clone()),
            }
        }
    }
}

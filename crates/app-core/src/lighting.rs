//! Scene lights as a function of elapsed time.

use glam::{Quat, Vec3};

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Vec3,
    /// Half-angle of the outer cone.
    pub angle: f32,
    /// Fraction of the cone over which intensity falls off.
    pub penumbra: f32,
}

impl SpotLight {
    /// Cosines of the inner and outer cone half-angles, for smoothstep falloff.
    pub fn cone_cosines(&self) -> (f32, f32) {
        let outer = self.angle;
        let inner = self.angle * (1.0 - self.penumbra);
        (inner.cos(), outer.cos())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// World position; light travels from here toward the origin.
    pub position: Vec3,
    pub color: Vec3,
}

impl DirectionalLight {
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: Vec3,
    pub spot: SpotLight,
    pub directional: DirectionalLight,
}

impl LightRig {
    pub fn at(elapsed_ms: f64) -> Self {
        let sway = (elapsed_ms * DIR_SWAY_RAD_PER_MS).sin() as f32 * DIR_SWAY_AMPLITUDE;
        let local = Vec3::from(DIR_LOCAL_POSITION) + Vec3::Z * sway;
        let orbit = ((elapsed_ms / 1000.0) * DIR_ORBIT_RAD_PER_SEC as f64)
            .rem_euclid(std::f64::consts::TAU) as f32;
        Self {
            ambient: Vec3::from(AMBIENT_RGB),
            spot: SpotLight {
                position: Vec3::from(SPOT_POSITION),
                target: Vec3::ZERO,
                color: Vec3::from(SPOT_RGB),
                angle: SPOT_ANGLE_RAD,
                penumbra: SPOT_PENUMBRA,
            },
            directional: DirectionalLight {
                position: Quat::from_rotation_y(orbit) * local,
                color: Vec3::from(DIR_RGB),
            },
        }
    }
}

//! Camera types shared by both front-ends.
//!
//! The scene is Z-up: the grid lies in the XY plane and heights go along +Z.

use glam::{Mat4, Vec3};

use crate::constants::{
    camera_start_eye, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE, ORBIT_ZOOM_STEP,
};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Keep the pole out of reach so `look_at` never degenerates.
const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Drag-to-rotate, wheel-to-zoom camera circling a fixed target.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    azimuth: f32,
    elevation: f32,
    distance: f32,
    aspect: f32,
}

impl OrbitCamera {
    /// Orbit that reproduces the start-up view: eye at the configured start
    /// position, looking at the origin.
    pub fn new(aspect: f32) -> Self {
        let mut orbit = Self {
            target: Vec3::ZERO,
            azimuth: 0.0,
            elevation: 0.0,
            distance: 1.0,
            aspect: sanitize_aspect(aspect),
        };
        orbit.look_from(camera_start_eye());
        orbit
    }

    /// Place the eye at `eye`, keeping the current target.
    pub fn look_from(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        self.distance = distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.azimuth = offset.y.atan2(offset.x);
        self.elevation = (offset.z / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    pub fn reset(&mut self) {
        self.target = Vec3::ZERO;
        self.look_from(camera_start_eye());
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(cos_el * cos_az, cos_el * sin_az, sin_el)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// Rotate by a pointer drag of `(dx, dy)` pixels on a viewport
    /// `viewport_height` pixels tall. A full-height drag is one turn.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let per_pixel = std::f32::consts::TAU / viewport_height;
        self.azimuth = (self.azimuth - dx * per_pixel).rem_euclid(std::f32::consts::TAU);
        self.elevation = (self.elevation + dy * per_pixel).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Zoom by wheel notches; positive moves toward the target.
    pub fn zoom(&mut self, notches: f32) {
        if !notches.is_finite() {
            return;
        }
        self.distance =
            (self.distance * ORBIT_ZOOM_STEP.powf(notches)).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Z,
            aspect: self.aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

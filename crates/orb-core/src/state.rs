//! Per-frame state types shared with the native frontend.
//!
//! These types avoid platform-specific APIs so the renderer, the headless
//! exporter and the tests can all drive them directly.

use std::f64::consts::TAU;

use glam::{Mat4, Vec3, Vec4};

use crate::constants::{CAMERA_Z, DEFAULT_ROTATION_SPEED, FRUSTUM_SIZE};

/// Orthographic camera looking down -Z at the origin.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub frustum_size: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrthoCamera {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width as f32 / height as f32,
            frustum_size: FRUSTUM_SIZE,
            znear: 0.1,
            zfar: 2.0 * CAMERA_Z,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        let half_h = self.frustum_size / 2.0;
        let half_w = half_h * self.aspect;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray through NDC `(x, y)`.
    ///
    /// Returns `(ray_origin, ray_direction)`; every ray shares the view direction.
    pub fn ndc_ray(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        self.ndc_ray_with(&inv, ndc_x, ndc_y)
    }

    /// Same as [`Self::ndc_ray`] with a precomputed inverse view-projection.
    #[inline]
    pub fn ndc_ray_with(&self, inv_view_proj: &Mat4, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let near = *inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let origin = near.truncate() / near.w;
        let dir = (self.target - self.eye).normalize();
        (origin, dir)
    }
}

/// Spin of the sampled texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    /// Accumulated angle in radians; only its value mod 2π matters for sampling.
    ///
    /// Kept in `f64` so a per-frame step stays exact over long sessions.
    pub angle: f64,
    /// Radians added per frame while content is still. May be negative or zero.
    pub speed: f32,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

impl RotationState {
    /// `angle` reduced to `[0, 2π)` for sampling.
    #[inline]
    pub fn wrapped_angle(&self) -> f32 {
        self.angle.rem_euclid(TAU) as f32
    }
}

/// Values external collaborators (recorder, compositor) poll after each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStatus {
    pub angle: f64,
    pub clip_enabled: bool,
}

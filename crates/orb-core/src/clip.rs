//! Clip plane that cuts the sphere down to a tiltable visible cap.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLIP_OFFSET, DEFAULT_CLIP_TILT_X, DEFAULT_CLIP_TILT_Z};

/// User-facing clip controls. Tilts are radians and may take any value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    pub enabled: bool,
    pub tilt_x: f32,
    pub tilt_z: f32,
    /// Signed plane distance from the sphere centre, conventionally in [-1, 1].
    pub offset: f32,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tilt_x: DEFAULT_CLIP_TILT_X,
            tilt_z: DEFAULT_CLIP_TILT_Z,
            offset: DEFAULT_CLIP_OFFSET,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub normal: Vec3,
    /// Raw offset, unclamped. Used for the distance test.
    pub offset: f32,
    /// Fraction of the pole-to-boundary latitude range left visible, in [0, 1].
    pub visible_v_max: f32,
}

/// Solve the plane for the given tilts.
///
/// `up` is rotated about X by `tilt_x` and then the result about Z by `tilt_z`.
/// The two rotations are applied one after the other in the global frame.
pub fn solve_clip_plane(tilt_x: f32, tilt_z: f32, offset: f32, enabled: bool) -> ClipPlane {
    let up = Vec3::Y;

    let (sx, cx) = tilt_x.sin_cos();
    let about_x = Vec3::new(up.x, up.y * cx - up.z * sx, up.y * sx + up.z * cx);

    let (sz, cz) = tilt_z.sin_cos();
    let about_z = Vec3::new(
        about_x.x * cz - about_x.y * sz,
        about_x.x * sz + about_x.y * cz,
        about_x.z,
    );

    ClipPlane {
        normal: about_z.normalize(),
        offset,
        visible_v_max: visible_v_max(offset, enabled),
    }
}

/// `(1 - clamp(offset, -1, 1)) / 2`, or 1 when clipping is off.
#[inline]
pub fn visible_v_max(offset: f32, enabled: bool) -> f32 {
    if enabled {
        (1.0 - offset.clamp(-1.0, 1.0)) / 2.0
    } else {
        1.0
    }
}

/// Clip controls plus the plane derived from them.
///
/// Every setter re-solves the plane so readers never see a stale cache.
#[derive(Clone, Debug)]
pub struct ClipState {
    config: ClipConfig,
    plane: ClipPlane,
}

impl Default for ClipState {
    fn default() -> Self {
        Self::new(ClipConfig::default())
    }
}

impl ClipState {
    pub fn new(config: ClipConfig) -> Self {
        let plane = solve_clip_plane(config.tilt_x, config.tilt_z, config.offset, config.enabled);
        Self { config, plane }
    }

    #[inline]
    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    #[inline]
    pub fn plane(&self) -> &ClipPlane {
        &self.plane
    }

    pub fn set_config(&mut self, config: ClipConfig) {
        *self = Self::new(config);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.set_config(ClipConfig { enabled, ..self.config });
    }

    pub fn set_tilt_x(&mut self, tilt_x: f32) {
        self.set_config(ClipConfig { tilt_x, ..self.config });
    }

    pub fn set_tilt_z(&mut self, tilt_z: f32) {
        self.set_config(ClipConfig { tilt_z, ..self.config });
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.set_config(ClipConfig { offset, ..self.config });
    }

    /// Tilt of the texture rotation axis. Always the negated clip Z tilt so the
    /// spin follows the arc of the clip boundary.
    #[inline]
    pub fn axis_tilt_z(&self) -> f32 {
        -self.config.tilt_z
    }

    /// True when a point on the unit sphere lies on the cut-away side.
    #[inline]
    pub fn is_discarded(&self, local_pos: Vec3) -> bool {
        self.config.enabled && local_pos.dot(self.plane.normal) - self.plane.offset < 0.0
    }
}

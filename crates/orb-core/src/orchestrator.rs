//! Per-frame driver tying clip, rotation and effect state together.

use glam::{Vec2, Vec3, Vec4};

use crate::clip::ClipState;
use crate::constants::{EDGE_EXPONENT, EDGE_MIN};
use crate::effects::{self, cell_center, EffectStyle, ShadeInput, ShadingParams};
use crate::state::RotationState;
use crate::texture::{TextureSampler, TextureTransform};
use crate::uv::{rotate_uv, rotation_axis, sphere_to_uv};

/// `mix(EDGE_MIN, 1, |n·v|^EDGE_EXPONENT)`: silhouettes keep at least half brightness.
#[inline]
pub fn edge_falloff(normal: Vec3, view_dir: Vec3) -> f32 {
    let facing = normal.dot(view_dir).abs().min(1.0).powf(EDGE_EXPONENT);
    EDGE_MIN + (1.0 - EDGE_MIN) * facing
}

/// Owned shading state, read by every fragment of a frame.
///
/// Two states: still content (`animated == false`) spins by `rotation.speed`
/// each tick; animated content keeps its angle frozen because the decoder is
/// already supplying motion.
#[derive(Clone, Debug, Default)]
pub struct Orchestrator {
    pub rotation: RotationState,
    pub clip: ClipState,
    pub transform: TextureTransform,
    style: EffectStyle,
    params: ShadingParams,
    animated: bool,
    time: f32,
}

impl Orchestrator {
    pub fn new(clip: ClipState, rotation: RotationState, transform: TextureTransform) -> Self {
        Self {
            rotation,
            clip,
            transform,
            ..Self::default()
        }
    }

    #[inline]
    pub fn style(&self) -> EffectStyle {
        self.style
    }

    #[inline]
    pub fn params(&self) -> &ShadingParams {
        &self.params
    }

    /// Swap in the preset for `style` as one assignment.
    pub fn set_style(&mut self, style: EffectStyle) {
        self.style = style;
        self.params = style.preset();
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Content changed; takes effect on the next tick.
    pub fn set_content_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one frame. `dt` only feeds the effect clock; rotation is per frame.
    pub fn tick(&mut self, dt: f32) {
        self.time += dt;
        if !self.animated {
            self.rotation.angle += f64::from(self.rotation.speed);
        }
    }

    /// Axis the texture spins around, leaning the same way as the clip normal.
    #[inline]
    pub fn rotation_axis(&self) -> Vec3 {
        rotation_axis(self.clip.axis_tilt_z())
    }

    /// Map a surface UV to the UV the source is sampled at.
    pub fn sample_uv(&self, surface_uv: Vec2) -> Vec2 {
        let adjusted = self.transform.apply_pre_rotation(surface_uv);
        let rotated = rotate_uv(adjusted, self.rotation_axis(), self.rotation.wrapped_angle());
        let v = if self.animated {
            rotated.y
        } else {
            rotated.y * self.clip.plane().visible_v_max
        };
        Vec2::new(rotated.x, v + self.transform.v_offset)
    }

    /// Shade one point of the unit sphere, or `None` if the clip plane removes it.
    ///
    /// `view_dir` points from the surface toward the viewer.
    pub fn shade_fragment(
        &self,
        local_pos: Vec3,
        view_dir: Vec3,
        sampler: &impl TextureSampler,
    ) -> Option<Vec4> {
        if self.clip.is_discarded(local_pos) {
            return None;
        }

        let uv = self.sample_uv(sphere_to_uv(local_pos));
        let cells = self.params.cells;
        let color = match self.style {
            EffectStyle::None => sampler.sample(uv),
            _ => sampler.sample(cell_center(uv, cells)),
        };

        let input = ShadeInput::new(color, uv, cells, local_pos, view_dir, self.time);
        let shaded = effects::shade(&input, &self.params, self.style, sampler);
        let gain = self.params.brightness * edge_falloff(local_pos, view_dir);
        Some((shaded.truncate() * gain).extend(shaded.w))
    }
}

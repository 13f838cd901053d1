//! Per-pixel synthesis of simulated display elements.
//!
//! The visible surface is divided into a coarse cell grid. Each style turns the
//! colour sampled for a cell, plus the fragment's position inside that cell,
//! into the colour a physical display element of that kind would emit. Styles
//! also mix toward their own solid background wherever the element mask has no
//! coverage so nothing behind the sphere shows through the gaps.

mod crt;
mod holographic;
mod lcd;
mod led;
mod neon;
mod plasma;
pub mod preset;
pub mod util;

use glam::{UVec2, Vec2, Vec3, Vec4};

use crate::texture::TextureSampler;
pub use preset::{EffectStyle, ShadingParams, PRESETS};

/// Everything a style needs to know about one fragment.
#[derive(Clone, Copy, Debug)]
pub struct ShadeInput {
    /// Source colour for the fragment's cell (or the fragment itself for `none`).
    pub color: Vec4,
    /// Sampling UV after rotation and cap compensation.
    pub uv: Vec2,
    /// `floor(uv * cells)`.
    pub cell_index: Vec2,
    /// `fract(uv * cells)`, position inside the cell.
    pub cell_local: Vec2,
    /// Unit surface normal.
    pub normal: Vec3,
    /// Unit vector from the surface toward the viewer.
    pub view_dir: Vec3,
    /// Seconds since the scene started.
    pub time: f32,
}

impl ShadeInput {
    pub fn new(
        color: Vec4,
        uv: Vec2,
        cells: UVec2,
        normal: Vec3,
        view_dir: Vec3,
        time: f32,
    ) -> Self {
        let scaled = uv * cells.as_vec2();
        let cell_index = scaled.floor();
        Self {
            color,
            uv,
            cell_index,
            cell_local: scaled - cell_index,
            normal,
            view_dir,
            time,
        }
    }

    /// UV of the centre of this fragment's cell.
    #[inline]
    pub fn cell_center_uv(&self, cells: UVec2) -> Vec2 {
        (self.cell_index + Vec2::splat(0.5)) / cells.as_vec2()
    }
}

/// Cell-centre UV for `uv`, used to pick the one colour a cell displays.
#[inline]
pub fn cell_center(uv: Vec2, cells: UVec2) -> Vec2 {
    let grid = cells.as_vec2();
    ((uv * grid).floor() + Vec2::splat(0.5)) / grid
}

/// Final display colour for one fragment, straight (non-premultiplied) alpha.
///
/// Brightness and edge falloff are left to the caller.
pub fn shade(
    input: &ShadeInput,
    params: &ShadingParams,
    style: EffectStyle,
    sampler: &impl TextureSampler,
) -> Vec4 {
    match style {
        EffectStyle::None => input.color.truncate().extend(1.0),
        EffectStyle::Crt => crt::shade(input, params, sampler),
        EffectStyle::Led => led::shade(input, params),
        EffectStyle::Lcd => lcd::shade(input, params, sampler),
        EffectStyle::Plasma => plasma::shade(input, params),
        EffectStyle::Neon => neon::shade(input, params),
        EffectStyle::Holographic => holographic::shade(input, params),
    }
}

//! Decoded source content and the UV adjustments applied before rotation.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::frame::Rgba8;
use crate::uv::fract;

/// Anything the effect pipeline can pull colours from.
pub trait TextureSampler {
    /// Colour at `uv` with components in [0, 1]. `u` repeats, `v` clamps.
    fn sample(&self, uv: Vec2) -> Vec4;
}

impl<F> TextureSampler for F
where
    F: Fn(Vec2) -> Vec4,
{
    #[inline]
    fn sample(&self, uv: Vec2) -> Vec4 {
        self(uv)
    }
}

/// RGBA8 pixel buffer handed over by the content decoder.
#[derive(Clone, Debug)]
pub struct SourceTexture {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl SourceTexture {
    /// Wrap a tightly packed RGBA8 buffer, top row first.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, SceneError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected || expected == 0 {
            return Err(SceneError::TextureSize {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice::<u8, Rgba8>(bytes).to_vec(),
        })
    }

    /// Single-colour texture, handy as a placeholder before content arrives.
    pub fn solid(color: Rgba8) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn texel(&self, x: i64, y: i64) -> Vec4 {
        let w = self.width as i64;
        let h = self.height as i64;
        let x = x.rem_euclid(w);
        let y = y.clamp(0, h - 1);
        self.pixels[(y * w + x) as usize].to_vec4()
    }
}

impl TextureSampler for SourceTexture {
    /// Bilinear filtering with texel centres at half-integer coordinates.
    fn sample(&self, uv: Vec2) -> Vec4 {
        let x = fract(uv.x) * self.width as f32 - 0.5;
        let y = uv.y.clamp(0.0, 1.0) * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let tx = x - x0;
        let ty = y - y0;
        let (xi, yi) = (x0 as i64, y0 as i64);

        let top = self.texel(xi, yi).lerp(self.texel(xi + 1, yi), tx);
        let bottom = self.texel(xi, yi + 1).lerp(self.texel(xi + 1, yi + 1), tx);
        top.lerp(bottom, ty)
    }
}

/// Affine knobs on the sampled UV.
///
/// `scale` and `u_offset` act before rotation; `v_offset` is added after the
/// visible-cap compensation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureTransform {
    pub scale: f32,
    pub u_offset: f32,
    pub v_offset: f32,
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            u_offset: 0.0,
            v_offset: 0.0,
        }
    }
}

impl TextureTransform {
    /// Scale about the texture centre, then shift along `u`.
    #[inline]
    pub fn apply_pre_rotation(&self, uv: Vec2) -> Vec2 {
        let scaled = (uv - Vec2::splat(0.5)) * self.scale + Vec2::splat(0.5);
        Vec2::new(fract(scaled.x + self.u_offset), scaled.y.clamp(0.0, 1.0))
    }
}

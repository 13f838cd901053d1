use glam::{Vec2, Vec3, Vec4};

use super::util::{flicker, luminance, quantize, smoothstep};
use super::{ShadeInput, ShadingParams};
use crate::constants::{bg, BG_LED, FLICKER_RATE};

/// Signed distance to a rounded square of half-extent `half` and corner `radius`.
#[inline]
fn rounded_square(p: Vec2, half: f32, radius: f32) -> f32 {
    let q = p.abs() - Vec2::splat(half - radius);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - radius
}

/// Discrete LED emitters with visible gaps between them.
pub(super) fn shade(input: &ShadeInput, params: &ShadingParams) -> Vec4 {
    let p = input.cell_local - Vec2::splat(0.5);
    let half = 0.5 * (1.0 - params.gap_size);
    let d = rounded_square(p, half, half * 0.35);
    let soft = 0.03 + params.gap_size * 0.1;
    let mask = 1.0 - smoothstep(-soft, soft, d);

    // brightest at the emitter centre
    let radial = 1.0 - 0.45 * smoothstep(0.0, half * 1.2, p.length());

    let third = ((input.cell_local.x * 3.0) as usize).min(2);
    let mut tint = Vec3::splat(0.78);
    tint[third] = 1.0;

    let mut c = quantize(input.color.truncate(), params.color_levels) * tint * radial;
    c += c * luminance(c) * params.glow_intensity;
    c *= flicker(input.cell_index, input.time, FLICKER_RATE, params.noise_intensity);

    // light spilling into the gap around each emitter
    let halo = c * params.glow_intensity * 0.25 * (1.0 - mask) * (-d.max(0.0) * 10.0).exp();

    (bg(BG_LED).lerp(c, mask) + halo).extend(1.0)
}

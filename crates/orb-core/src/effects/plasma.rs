use glam::{Vec2, Vec3, Vec4};

use super::util::{flicker, luminance, quantize, saturate_boost, smoothstep};
use super::{ShadeInput, ShadingParams};
use crate::constants::{bg, BG_BLACK, FLICKER_RATE};

const WARM_BIAS: Vec3 = Vec3::new(1.12, 1.0, 0.85);

/// Gas-discharge cells: punchy, warm colour with each cell glowing from its centre.
pub(super) fn shade(input: &ShadeInput, params: &ShadingParams) -> Vec4 {
    let mut c = saturate_boost(input.color.truncate(), 0.35).min(Vec3::ONE);
    c = c * c * (Vec3::splat(3.0) - 2.0 * c);
    c = quantize(c, params.color_levels) * WARM_BIAS;

    let d = (input.cell_local - Vec2::splat(0.5)).length();
    let lit = 0.5 * (1.0 - params.gap_size);
    let soft = 1.0 - smoothstep(lit * 0.4, lit + 0.08, d);
    let center_glow = (-d * d * 14.0).exp() * params.glow_intensity;

    let bloom = luminance(c).powf(2.5) * params.glow_intensity * 0.6;
    c = c * (soft + center_glow * 0.5) + c * bloom;
    c *= flicker(input.cell_index, input.time, FLICKER_RATE, params.noise_intensity);

    let coverage = (soft + center_glow).min(1.0);
    bg(BG_BLACK).lerp(c, coverage).extend(1.0)
}

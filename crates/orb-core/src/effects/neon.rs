use glam::{Vec2, Vec4};

use super::util::{flicker, luminance, quantize, saturate_boost, smoothstep};
use super::{ShadeInput, ShadingParams};
use crate::constants::{bg, BG_BLACK, NEON_THRESHOLD};

// (falloff rate, weight) for core, inner glow, outer glow, outer halo
const RINGS: [(f32, f32); 4] = [(18.0, 1.0), (8.0, 0.6), (4.0, 0.3), (2.0, 0.15)];

/// Neon tubes: only bright content lights up, and what does is drowned in glow.
pub(super) fn shade(input: &ShadeInput, params: &ShadingParams) -> Vec4 {
    let source = input.color.truncate();
    let gate = smoothstep(NEON_THRESHOLD[0], NEON_THRESHOLD[1], luminance(source));

    let c = quantize(saturate_boost(source, 0.5), params.color_levels);

    let d = (input.cell_local - Vec2::splat(0.5)).length();
    let lit = 0.5 * (1.0 - params.gap_size);
    let pixel = 1.0 - smoothstep(lit - 0.05, lit, d);
    let glow = (RINGS
        .iter()
        .map(|&(rate, weight)| (-d * rate).exp() * weight)
        .sum::<f32>()
        * params.glow_intensity)
        .min(1.0);

    let slow = flicker(input.cell_index, input.time, 3.0, params.noise_intensity);
    let lit_color = (c * pixel + c * glow) * gate * slow;

    let alpha = pixel.max(glow) * gate;
    bg(BG_BLACK).lerp(lit_color, alpha).extend(alpha)
}

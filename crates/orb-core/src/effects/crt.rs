use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3, Vec4};

use super::util::{cell_edge, flicker, luminance, quantize, smoothstep};
use super::{ShadeInput, ShadingParams};
use crate::constants::{bg, BG_CRT, CRT_ABERRATION, FLICKER_RATE};
use crate::texture::TextureSampler;

/// Aperture-grille tube: split RGB sampling, vertical phosphor stripes,
/// dark scanline bands between rows.
pub(super) fn shade(
    input: &ShadeInput,
    params: &ShadingParams,
    sampler: &impl TextureSampler,
) -> Vec4 {
    let center = input.cell_center_uv(params.cells);
    let shift = Vec2::new(CRT_ABERRATION, 0.0);
    let raw = Vec3::new(
        sampler.sample(center + shift).x,
        input.color.y,
        sampler.sample(center - shift).z,
    );
    let mut c = quantize(raw, params.color_levels);

    // one stripe per channel, centred at 1/6, 3/6, 5/6 of the cell
    let local = input.cell_local;
    let stripe = |k: f32| {
        let wave = 0.5 + 0.5 * (TAU * (local.x - (2.0 * k + 1.0) / 6.0)).cos();
        smoothstep(0.25, 0.95, wave)
    };
    let phosphor = Vec3::new(stripe(0.0), stripe(1.0), stripe(2.0));
    c *= Vec3::splat(0.45) + phosphor * 0.75;

    let row = (PI * local.y).sin();
    c *= 1.0 - params.scanline_intensity * (1.0 - row);

    c += c * luminance(c) * params.glow_intensity;
    c *= flicker(input.cell_index, input.time, FLICKER_RATE, params.noise_intensity);

    // tube glass shows through wherever the phosphor mask is thin
    let coverage = phosphor.max_element() * cell_edge(local.x, params.gap_size, 0.08);
    bg(BG_CRT).lerp(c, coverage).extend(1.0)
}

use glam::{Vec2, Vec3, Vec4};

use super::util::{cell_edge, hsv_to_rgb, noise, quantize, saturate};
use super::{ShadeInput, ShadingParams};
use crate::constants::{bg, BG_HOLOGRAPHIC};

pub(super) fn shade(input: &ShadeInput, params: &ShadingParams) -> Vec4 {
    let uv = input.uv;
    let t = input.time;

    let cell = input.cell_index;
    let hue = cell.x * 0.013 + cell.y * 0.007 + uv.x * 0.5 + uv.y * 0.25 + t * 0.1;
    let rainbow = hsv_to_rgb(hue, 0.6, 1.0);
    let mut c = quantize(input.color.truncate().lerp(rainbow, 0.35), params.color_levels);

    let shimmer_a = 0.5 + 0.5 * (uv.y * 40.0 + t * 3.0).sin();
    let shimmer_b = 0.5 + 0.5 * ((uv.x + uv.y) * 25.0 - t * 2.1).sin();
    c *= (0.75 + 0.25 * shimmer_a) * (0.85 + 0.15 * shimmer_b);

    // horizontal scan band sweeping down the rows
    let rows = params.cells.y as f32;
    let scan = 0.5 + 0.5 * (uv.y * rows * 0.5 - t * 4.0).sin();
    c *= 1.0 - params.scanline_intensity * scan;

    let fresnel = (1.0 - input.normal.dot(input.view_dir).abs()).powf(2.0);
    c += rainbow * fresnel * params.glow_intensity;
    let grain = noise(input.cell_index + Vec2::splat(t * 9.0));
    c += Vec3::splat(grain * params.noise_intensity);

    let local = input.cell_local;
    let grid = cell_edge(local.x, params.gap_size, 0.1) * cell_edge(local.y, params.gap_size, 0.1);
    let alpha = saturate(grid * (0.55 + 0.25 * shimmer_a + 0.2 * shimmer_b) + fresnel * 0.5);

    bg(BG_HOLOGRAPHIC).lerp(c, alpha).extend(alpha)
}

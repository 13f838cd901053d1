use glam::{Vec2, Vec3, Vec4};

use super::util::{cell_edge, flicker, luminance, quantize};
use super::{ShadeInput, ShadingParams};
use crate::constants::{bg, BG_LCD, FLICKER_RATE, LCD_BLUR_RADIUS, LCD_SUBPIXEL_FLOOR};
use crate::texture::TextureSampler;

/// Backlit liquid-crystal panel: slightly soft image, RGB stripe sub-pixels.
pub(super) fn shade(
    input: &ShadeInput,
    params: &ShadingParams,
    sampler: &impl TextureSampler,
) -> Vec4 {
    let grid = params.cells.as_vec2();
    let center = input.cell_center_uv(params.cells);
    let step = Vec2::splat(LCD_BLUR_RADIUS) / grid;

    // five-tap box blur: centre plus four neighbours
    let taps = [
        Vec2::new(step.x, 0.0),
        Vec2::new(-step.x, 0.0),
        Vec2::new(0.0, step.y),
        Vec2::new(0.0, -step.y),
    ];
    let blurred = taps
        .iter()
        .fold(input.color.truncate(), |acc, &o| acc + sampler.sample(center + o).truncate())
        / 5.0;
    let mut c = quantize(blurred, params.color_levels);

    let local = input.cell_local;
    let third = ((local.x * 3.0) as usize).min(2);
    let mut sub = Vec3::splat(LCD_SUBPIXEL_FLOOR);
    sub[third] = 1.0;
    c *= sub;

    let backlight = 0.93 + 0.07 * (input.time * 0.8 + input.uv.y * 3.0).sin();
    c *= backlight;
    c *= 1.0 - params.scanline_intensity * 0.5 * (1.0 - local.y);
    c += c * luminance(c) * params.glow_intensity;
    c *= flicker(input.cell_index, input.time, FLICKER_RATE * 0.25, params.noise_intensity);

    let mask =
        cell_edge(local.x, params.gap_size, 0.02) * cell_edge(local.y, params.gap_size, 0.02);
    bg(BG_LCD).lerp(c, mask).extend(1.0)
}

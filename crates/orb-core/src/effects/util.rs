//! Shader-style helpers shared by the display styles.

use glam::{Vec2, Vec3};

pub use crate::uv::fract;

const LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Hermite step. Degenerate edges act as a hard step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if (edge1 - edge0).abs() <= f32::EPSILON {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn luminance(c: Vec3) -> f32 {
    c.dot(LUMA)
}

/// `floor(c * levels) / levels` per channel.
#[inline]
pub fn quantize(c: Vec3, levels: u32) -> Vec3 {
    let l = levels.max(1) as f32;
    (c * l).floor() / l
}

/// Push `c` away from its grey by `amount` (0 leaves it unchanged).
#[inline]
pub fn saturate_boost(c: Vec3, amount: f32) -> Vec3 {
    let grey = Vec3::splat(luminance(c));
    grey.lerp(c, 1.0 + amount).max(Vec3::ZERO)
}

/// Cheap deterministic hash in [0, 1].
#[inline]
pub fn hash21(p: Vec2) -> f32 {
    fract((p.dot(Vec2::new(12.9898, 78.233))).sin() * 43758.547)
}

/// Smooth value noise in [0, 1].
pub fn noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let w = f * f * (Vec2::splat(3.0) - 2.0 * f);

    let a = hash21(i);
    let b = hash21(i + Vec2::X);
    let c = hash21(i + Vec2::Y);
    let d = hash21(i + Vec2::ONE);
    mix(mix(a, b, w.x), mix(c, d, w.x), w.y)
}

/// Per-cell brightness wobble: 1 at zero intensity, never below `1 - intensity`.
#[inline]
pub fn flicker(cell: Vec2, time: f32, rate: f32, intensity: f32) -> f32 {
    1.0 - intensity * noise(cell * 0.37 + Vec2::new(time * rate, time * rate * 0.61))
}

/// `h`, `s`, `v` in [0, 1]; hue wraps.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let k = Vec3::new(1.0, 2.0 / 3.0, 1.0 / 3.0);
    let p = (Vec3::splat(fract(h)) + k).fract() * 6.0 - Vec3::splat(3.0);
    let rgb = (p.abs() - Vec3::ONE).clamp(Vec3::ZERO, Vec3::ONE);
    v * Vec3::ONE.lerp(rgb, s)
}

/// Lit fraction across one cell axis: 1 in the middle, 0 inside the gap at
/// either edge, softened by `softness`.
#[inline]
pub fn cell_edge(local: f32, gap: f32, softness: f32) -> f32 {
    let half_gap = gap * 0.5;
    smoothstep(half_gap, half_gap + softness, local)
        * smoothstep(half_gap, half_gap + softness, 1.0 - local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_snaps_down_to_levels() {
        let q = quantize(Vec3::new(0.0, 0.49, 1.0), 4);
        assert_eq!(q, Vec3::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn hsv_primaries() {
        assert!((hsv_to_rgb(0.0, 1.0, 1.0) - Vec3::X).length() < 1e-5);
        assert!((hsv_to_rgb(1.0 / 3.0, 1.0, 1.0) - Vec3::Y).length() < 1e-5);
        assert!((hsv_to_rgb(2.0 / 3.0, 1.0, 1.0) - Vec3::Z).length() < 1e-5);
        assert!((hsv_to_rgb(0.3, 0.0, 0.5) - Vec3::splat(0.5)).length() < 1e-5);
    }

    #[test]
    fn noise_stays_in_unit_range() {
        for i in 0..500 {
            let p = Vec2::new(i as f32 * 0.731, i as f32 * -1.37);
            let n = noise(p);
            assert!((0.0..=1.0).contains(&n), "noise({p}) = {n}");
        }
    }

    #[test]
    fn smoothstep_handles_zero_width() {
        assert_eq!(smoothstep(0.0, 0.0, -0.1), 0.0);
        assert_eq!(smoothstep(0.0, 0.0, 0.0), 1.0);
        assert_eq!(cell_edge(0.0, 0.0, 0.0), 1.0);
    }
}

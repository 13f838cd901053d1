// Clip plane solving and the discard rule.

use glam::Vec3;
use orb_core::*;
use rand::prelude::*;

#[test]
fn reference_tilts_give_expected_normal_and_visible_range() {
    let plane = solve_clip_plane(0.170, -0.060, -0.31, true);
    let expected = Vec3::new(0.059, 0.984, 0.169);
    assert!(
        (plane.normal - expected).abs().max_element() < 1e-3,
        "normal = {}",
        plane.normal
    );
    assert!((plane.normal.length() - 1.0).abs() < 1e-6);
    assert!((plane.visible_v_max - 0.655).abs() < 1e-6);
    assert_eq!(plane.offset, -0.31);
}

#[test]
fn zero_tilt_normal_is_up() {
    let plane = solve_clip_plane(0.0, 0.0, 0.0, true);
    assert_eq!(plane.normal, Vec3::Y);
}

#[test]
fn rotations_apply_x_then_z() {
    // A quarter turn about X lays up along +Z, which a Z rotation leaves alone.
    let plane = solve_clip_plane(std::f32::consts::FRAC_PI_2, 0.7, 0.0, true);
    assert!((plane.normal - Vec3::Z).length() < 1e-6, "{}", plane.normal);

    // The other order would have produced a vector in the X-Y plane first.
    let z_only = solve_clip_plane(0.0, std::f32::consts::FRAC_PI_2, 0.0, true);
    assert!((z_only.normal - Vec3::NEG_X).length() < 1e-6, "{}", z_only.normal);
}

#[test]
fn visible_v_max_boundary_values() {
    assert_eq!(visible_v_max(0.0, true), 0.5);
    assert_eq!(visible_v_max(1.0, true), 0.0);
    assert_eq!(visible_v_max(-1.0, true), 1.0);
}

#[test]
fn visible_v_max_decreases_with_offset() {
    let mut prev = visible_v_max(-1.0, true);
    for i in 1..=200 {
        let offset = -1.0 + i as f32 * 0.01;
        let v = visible_v_max(offset, true);
        assert!(v < prev, "not decreasing at offset {offset}");
        prev = v;
    }
}

#[test]
fn visible_v_max_clamps_out_of_range_offsets_but_plane_keeps_raw_offset() {
    assert_eq!(visible_v_max(3.0, true), 0.0);
    assert_eq!(visible_v_max(-7.5, true), 1.0);
    let plane = solve_clip_plane(0.1, 0.2, -7.5, true);
    assert_eq!(plane.offset, -7.5);
    assert_eq!(plane.visible_v_max, 1.0);
}

#[test]
fn disabled_clip_leaves_whole_range_visible() {
    for offset in [-2.0, -0.3, 0.0, 0.9, 4.0] {
        assert_eq!(solve_clip_plane(0.4, -0.2, offset, false).visible_v_max, 1.0);
    }
}

#[test]
fn setters_recompute_the_cached_plane() {
    let mut clip = ClipState::default();
    clip.set_offset(0.5);
    assert_eq!(clip.plane().visible_v_max, 0.25);
    assert_eq!(clip.plane().offset, 0.5);

    clip.set_tilt_x(0.0);
    clip.set_tilt_z(0.0);
    assert_eq!(clip.plane().normal, Vec3::Y);

    clip.set_enabled(false);
    assert_eq!(clip.plane().visible_v_max, 1.0);
    assert!(!clip.config().enabled);
}

#[test]
fn rotation_axis_tilt_is_negated_clip_tilt() {
    let mut clip = ClipState::default();
    for tilt in [-1.2, -0.06, 0.0, 0.3, 2.5] {
        clip.set_tilt_z(tilt);
        assert_eq!(clip.axis_tilt_z(), -tilt);
    }
}

#[test]
fn spin_axis_leans_with_the_clip_normal() {
    for tilt in [-0.9, -0.06, 0.0, 0.3, 1.1] {
        let clip = ClipState::new(ClipConfig {
            tilt_x: 0.0,
            tilt_z: tilt,
            ..ClipConfig::default()
        });
        let axis = rotation_axis(clip.axis_tilt_z());
        let normal = clip.plane().normal;
        assert!(
            (axis - normal).length() < 1e-6,
            "tilt {tilt}: axis {axis} vs normal {normal}"
        );
    }

    // with an X tilt the axis still matches the normal's XY direction
    let clip = ClipState::new(ClipConfig {
        tilt_x: 0.17,
        tilt_z: -0.06,
        ..ClipConfig::default()
    });
    let axis = rotation_axis(clip.axis_tilt_z());
    let normal_xy = clip.plane().normal.truncate().normalize();
    assert!((axis.truncate() - normal_xy).length() < 1e-6);
}

#[test]
fn discard_follows_sign_of_plane_distance_when_enabled() {
    let mut rng = StdRng::seed_from_u64(7);
    let clip = ClipState::new(ClipConfig {
        enabled: true,
        tilt_x: 0.170,
        tilt_z: -0.060,
        offset: -0.31,
    });
    let plane = *clip.plane();
    for _ in 0..2000 {
        let p = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or_zero();
        let distance = p.dot(plane.normal) - plane.offset;
        assert_eq!(clip.is_discarded(p), distance < 0.0, "p = {p}");
    }
}

#[test]
fn nothing_is_discarded_when_disabled() {
    let mut rng = StdRng::seed_from_u64(11);
    let clip = ClipState::new(ClipConfig {
        enabled: false,
        tilt_x: 0.4,
        tilt_z: 0.9,
        offset: 0.95,
    });
    for _ in 0..2000 {
        let p = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        assert!(!clip.is_discarded(p));
    }
}

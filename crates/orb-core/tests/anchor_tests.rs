// Sphere placement against the contain-fitted source image.

use glam::Vec2;
use orb_core::*;

fn reference_anchor() -> ViewportAnchorConfig {
    ViewportAnchorConfig {
        source_width: 1500,
        source_height: 1000,
        anchor_pixel: Vec2::new(869.0, 634.0),
        radius_ratio: 0.1691,
    }
}

#[test]
fn letterbox_matching_aspect_fills_viewport() {
    let fit = letterbox(1500.0 / 1000.0, 1200.0, 800.0);
    assert_eq!(fit.displayed_width, 1200.0);
    assert_eq!(fit.displayed_height, 800.0);
    assert_eq!(fit.offset_x, 0.0);
    assert_eq!(fit.offset_y, 0.0);
}

#[test]
fn letterbox_wide_viewport_is_height_limited() {
    let fit = letterbox(1.0, 1200.0, 800.0);
    assert_eq!(fit.displayed_height, 800.0);
    assert_eq!(fit.displayed_width, 800.0);
    assert_eq!(fit.offset_x, 200.0);
    assert_eq!(fit.offset_y, 0.0);
}

#[test]
fn letterbox_tall_viewport_is_width_limited() {
    let fit = letterbox(2.0, 800.0, 800.0);
    assert_eq!(fit.displayed_width, 800.0);
    assert_eq!(fit.displayed_height, 400.0);
    assert_eq!(fit.offset_x, 0.0);
    assert_eq!(fit.offset_y, 200.0);
}

#[test]
fn anchor_maps_to_reference_world_position_and_scale() {
    let t = map_anchor_to_sphere(&reference_anchor(), 1200, 800);
    assert!((t.position.x - 0.238).abs() < 1e-3, "x = {}", t.position.x);
    assert!((t.position.y + 0.268).abs() < 1e-3, "y = {}", t.position.y);
    assert_eq!(t.position.z, 0.0);
    assert!((t.scale - 0.2537).abs() < 1e-3, "scale = {}", t.scale);
}

#[test]
fn anchor_mapping_is_idempotent() {
    let anchor = reference_anchor();
    let a = map_anchor_to_sphere(&anchor, 1337, 711);
    let b = map_anchor_to_sphere(&anchor, 1337, 711);
    assert_eq!(a, b);
}

#[test]
fn image_centre_lands_on_world_origin_for_any_viewport() {
    let anchor = ViewportAnchorConfig {
        anchor_pixel: Vec2::new(750.0, 500.0),
        ..reference_anchor()
    };
    for (w, h) in [(1200, 800), (1920, 1080), (600, 900), (333, 333)] {
        let t = map_anchor_to_sphere(&anchor, w, h);
        assert!(t.position.truncate().length() < 1e-5, "{w}x{h}: {}", t.position);
    }
}

#[test]
fn sphere_keeps_its_share_of_the_displayed_image_across_resizes() {
    let anchor = reference_anchor();
    for (w, h) in [(1200, 800), (2400, 1600), (900, 1200), (1600, 600)] {
        let t = map_anchor_to_sphere(&anchor, w, h);
        let fit = letterbox(anchor.image_aspect(), w as f32, h as f32);
        // world units per pixel is FRUSTUM_SIZE / viewport height in an ortho view
        let radius_px = t.world_radius() * h as f32 / FRUSTUM_SIZE;
        let share = radius_px / fit.displayed_width;
        assert!((share - anchor.radius_ratio).abs() < 1e-4, "{w}x{h}: {share}");
    }
}

#[test]
fn scene_resize_recomputes_placement_and_rejects_zero() {
    let mut scene = Scene::new(&SceneConfig {
        anchor: reference_anchor(),
        ..SceneConfig::default()
    })
    .unwrap();
    let before = scene.sphere();

    scene.on_resize(2400, 1600).unwrap();
    let doubled = scene.sphere();
    assert!((doubled.position - before.position).length() < 1e-5);
    assert!((doubled.scale - before.scale).abs() < 1e-5);

    scene.on_resize(1600, 600).unwrap();
    let wide = scene.sphere();
    scene.on_resize(1600, 600).unwrap();
    assert_eq!(wide, scene.sphere());

    let err = scene.on_resize(0, 600).unwrap_err();
    assert_eq!(err, SceneError::InvalidViewport { width: 0, height: 600 });
    assert_eq!(scene.viewport(), (1600, 600));
    assert_eq!(scene.sphere(), wide);
}

#[test]
fn scene_rejects_zero_viewport_at_construction() {
    let config = SceneConfig {
        viewport: [640, 0],
        ..SceneConfig::default()
    };
    assert!(matches!(
        Scene::new(&config),
        Err(SceneError::InvalidViewport { width: 640, height: 0 })
    ));
}

#[test]
fn set_anchor_moves_sphere() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    let before = scene.sphere();
    scene.set_anchor(ViewportAnchorConfig {
        anchor_pixel: Vec2::new(100.0, 100.0),
        ..*scene.anchor()
    });
    let after = scene.sphere();
    assert!(after.position.x < before.position.x);
    assert!(after.position.y > before.position.y);
    assert_eq!(after.scale, before.scale);
}

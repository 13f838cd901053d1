//! Maps a sphere anchored in source-image pixel space into the orthographic world.
//!
//! The source image is fitted into the viewport with a "contain" letterbox, so
//! an anchor picked on the image stays glued to the same image feature while
//! the window is resized.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{
    default_anchor_pixel, DEFAULT_RADIUS_RATIO, DEFAULT_SOURCE_SIZE, FRUSTUM_SIZE,
    SPHERE_BASE_RADIUS,
};

/// Sphere placement expressed against the source image.
///
/// Preconditions (not validated): `source_width`, `source_height` and
/// `radius_ratio` are all positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportAnchorConfig {
    pub source_width: u32,
    pub source_height: u32,
    /// Sphere centre in source-image pixels, y down.
    pub anchor_pixel: Vec2,
    /// Sphere radius as a fraction of the source-image width.
    pub radius_ratio: f32,
}

impl Default for ViewportAnchorConfig {
    fn default() -> Self {
        Self {
            source_width: DEFAULT_SOURCE_SIZE[0],
            source_height: DEFAULT_SOURCE_SIZE[1],
            anchor_pixel: default_anchor_pixel(),
            radius_ratio: DEFAULT_RADIUS_RATIO,
        }
    }
}

impl ViewportAnchorConfig {
    #[inline]
    pub fn image_aspect(&self) -> f32 {
        self.source_width as f32 / self.source_height as f32
    }
}

/// Rectangle the source image occupies inside the viewport, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    pub displayed_width: f32,
    pub displayed_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Derived world placement of the sphere. Not independently mutable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereTransform {
    pub position: Vec3,
    pub scale: f32,
}

impl SphereTransform {
    /// World-space radius of the scaled sphere mesh.
    #[inline]
    pub fn world_radius(&self) -> f32 {
        self.scale * SPHERE_BASE_RADIUS
    }
}

/// Contain-fit of an image with `image_aspect` into a viewport.
///
/// Equal aspects take the width-limited branch.
pub fn letterbox(image_aspect: f32, viewport_width: f32, viewport_height: f32) -> Letterbox {
    let viewport_aspect = viewport_width / viewport_height;
    if viewport_aspect > image_aspect {
        // height-limited, bars left and right
        let displayed_height = viewport_height;
        let displayed_width = displayed_height * image_aspect;
        Letterbox {
            displayed_width,
            displayed_height,
            offset_x: (viewport_width - displayed_width) / 2.0,
            offset_y: 0.0,
        }
    } else {
        let displayed_width = viewport_width;
        let displayed_height = displayed_width / image_aspect;
        Letterbox {
            displayed_width,
            displayed_height,
            offset_x: 0.0,
            offset_y: (viewport_height - displayed_height) / 2.0,
        }
    }
}

/// Place the sphere for the current viewport.
///
/// Callers must reject zero-sized viewports. The result is a pure function of
/// its inputs, so re-running it after a resize is always safe.
pub fn map_anchor_to_sphere(
    anchor: &ViewportAnchorConfig,
    viewport_width: u32,
    viewport_height: u32,
) -> SphereTransform {
    let vw = viewport_width as f32;
    let vh = viewport_height as f32;
    let viewport_aspect = vw / vh;
    let fit = letterbox(anchor.image_aspect(), vw, vh);

    // image pixels -> viewport pixels
    let px_scale = fit.displayed_width / anchor.source_width as f32;
    let screen_x = fit.offset_x + anchor.anchor_pixel.x * px_scale;
    let screen_y = fit.offset_y + anchor.anchor_pixel.y * px_scale;

    // viewport pixels -> NDC, y flipped to point up
    let ndc_x = screen_x / vw * 2.0 - 1.0;
    let ndc_y = 1.0 - screen_y / vh * 2.0;

    let half_height = FRUSTUM_SIZE / 2.0;
    let half_width = half_height * viewport_aspect;
    let position = Vec3::new(ndc_x * half_width, ndc_y * half_height, 0.0);

    let radius_px = anchor.radius_ratio * fit.displayed_width;
    let px_per_world = vw / (FRUSTUM_SIZE * viewport_aspect);
    let world_radius = radius_px / px_per_world;

    SphereTransform {
        position,
        scale: world_radius / SPHERE_BASE_RADIUS,
    }
}

use glam::{Vec2, Vec3};

// Shared geometry and shading tuning constants used by the core and the native frontend.

// Camera / scene layout
pub const FRUSTUM_SIZE: f32 = 2.0; // orthographic frustum height in world units
pub const SPHERE_BASE_RADIUS: f32 = 2.0; // sphere mesh radius before scaling
pub const CAMERA_Z: f32 = 10.0; // orthographic eye distance along +Z

// Default source-image anchor (pixels of a 1500x1000 reference image)
pub const DEFAULT_SOURCE_SIZE: [u32; 2] = [1500, 1000];
pub const DEFAULT_ANCHOR_PIXEL: [f32; 2] = [869.0, 634.0];
pub const DEFAULT_RADIUS_RATIO: f32 = 0.1691;

// Default viewport
pub const DEFAULT_VIEWPORT: [u32; 2] = [1200, 800];

// Default clip plane
pub const DEFAULT_CLIP_TILT_X: f32 = 0.170;
pub const DEFAULT_CLIP_TILT_Z: f32 = -0.060;
pub const DEFAULT_CLIP_OFFSET: f32 = -0.31;

// Rotation
pub const DEFAULT_ROTATION_SPEED: f32 = 0.005; // radians per frame

// UV rotator
pub const BASIS_EPSILON: f32 = 1e-4; // below this the projected reference is treated as parallel
pub const POLE_EPSILON: f32 = 1e-6;

// Orchestrator edge falloff: mix(EDGE_MIN, 1, |n.v|^EDGE_EXPONENT)
pub const EDGE_MIN: f32 = 0.5;
pub const EDGE_EXPONENT: f32 = 0.4;

// Effect shaping
pub const CRT_ABERRATION: f32 = 0.0015; // horizontal uv offset per colour channel
pub const LCD_BLUR_RADIUS: f32 = 0.75; // in cells
pub const LCD_SUBPIXEL_FLOOR: f32 = 0.35;
pub const NEON_THRESHOLD: [f32; 2] = [0.12, 0.32]; // luminance soft-step edges
pub const FLICKER_RATE: f32 = 12.0; // noise lattice steps per second

// Backgrounds each style mixes toward where its mask has no coverage
pub const BG_CRT: [f32; 3] = [0.02, 0.02, 0.025];
pub const BG_LED: [f32; 3] = [0.015, 0.015, 0.015];
pub const BG_LCD: [f32; 3] = [0.08, 0.08, 0.085];
pub const BG_BLACK: [f32; 3] = [0.0, 0.0, 0.0];
pub const BG_HOLOGRAPHIC: [f32; 3] = [0.01, 0.02, 0.06];

#[inline]
pub fn default_anchor_pixel() -> Vec2 {
    Vec2::from(DEFAULT_ANCHOR_PIXEL)
}

#[inline]
pub fn bg(color: [f32; 3]) -> Vec3 {
    Vec3::from(color)
}

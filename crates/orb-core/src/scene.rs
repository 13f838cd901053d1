//! The scene: every piece of mutable state the pipeline reads, owned in one place.
//!
//! External inputs (resize, anchor edits, clip edits, preset names, content
//! loads) are applied here between frames through `&mut self`, so a frame never
//! observes a half-applied change.

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::anchor::{map_anchor_to_sphere, SphereTransform, ViewportAnchorConfig};
use crate::clip::{ClipConfig, ClipState};
use crate::constants::{DEFAULT_ROTATION_SPEED, DEFAULT_VIEWPORT};
use crate::effects::{EffectStyle, ShadingParams};
use crate::error::SceneError;
use crate::frame::{FrameBuffer, Rgba8};
use crate::orchestrator::Orchestrator;
use crate::raster::render_frame;
use crate::state::{FrameStatus, RotationState};
use crate::texture::{SourceTexture, TextureTransform};

/// Initial values for a [`Scene`]. Every field falls back to its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub viewport: [u32; 2],
    pub anchor: ViewportAnchorConfig,
    pub clip: ClipConfig,
    /// Radians per frame.
    pub rotation_speed: f32,
    pub texture: TextureTransform,
    pub preset: EffectStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            anchor: ViewportAnchorConfig::default(),
            clip: ClipConfig::default(),
            rotation_speed: DEFAULT_ROTATION_SPEED,
            texture: TextureTransform::default(),
            preset: EffectStyle::None,
        }
    }
}

pub struct Scene {
    anchor: ViewportAnchorConfig,
    viewport: UVec2,
    sphere: SphereTransform,
    orchestrator: Orchestrator,
    content: SourceTexture,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        let [width, height] = config.viewport;
        check_viewport(width, height)?;

        let rotation = RotationState {
            angle: 0.0,
            speed: config.rotation_speed,
        };
        let mut orchestrator =
            Orchestrator::new(ClipState::new(config.clip), rotation, config.texture);
        orchestrator.set_style(config.preset);

        Ok(Self {
            anchor: config.anchor,
            viewport: UVec2::new(width, height),
            sphere: map_anchor_to_sphere(&config.anchor, width, height),
            orchestrator,
            content: SourceTexture::solid(Rgba8 { r: 128, g: 128, b: 128, a: 255 }),
        })
    }

    // ---------------- Placement ----------------

    /// Viewport changed. Zero-sized viewports are rejected and leave the scene untouched.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        check_viewport(width, height)?;
        self.viewport = UVec2::new(width, height);
        self.update_sphere();
        Ok(())
    }

    pub fn set_anchor(&mut self, anchor: ViewportAnchorConfig) {
        self.anchor = anchor;
        self.update_sphere();
    }

    fn update_sphere(&mut self) {
        self.sphere = map_anchor_to_sphere(&self.anchor, self.viewport.x, self.viewport.y);
        log::debug!(
            "sphere placed at ({:.3}, {:.3}) scale {:.4} for {}x{}",
            self.sphere.position.x,
            self.sphere.position.y,
            self.sphere.scale,
            self.viewport.x,
            self.viewport.y
        );
    }

    #[inline]
    pub fn anchor(&self) -> &ViewportAnchorConfig {
        &self.anchor
    }

    #[inline]
    pub fn sphere(&self) -> SphereTransform {
        self.sphere
    }

    #[inline]
    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport.x, self.viewport.y)
    }

    // ---------------- Clip ----------------

    #[inline]
    pub fn clip(&self) -> &ClipState {
        &self.orchestrator.clip
    }

    pub fn set_clip(&mut self, config: ClipConfig) {
        self.orchestrator.clip.set_config(config);
    }

    pub fn set_clip_enabled(&mut self, enabled: bool) {
        self.orchestrator.clip.set_enabled(enabled);
    }

    pub fn set_clip_tilt_x(&mut self, tilt_x: f32) {
        self.orchestrator.clip.set_tilt_x(tilt_x);
    }

    pub fn set_clip_tilt_z(&mut self, tilt_z: f32) {
        self.orchestrator.clip.set_tilt_z(tilt_z);
    }

    pub fn set_clip_offset(&mut self, offset: f32) {
        self.orchestrator.clip.set_offset(offset);
    }

    // ---------------- Effects ----------------

    /// Select a preset by name. Unknown names are reported and change nothing.
    pub fn select_preset(&mut self, name: &str) -> Result<(), SceneError> {
        match name.parse::<EffectStyle>() {
            Ok(style) => {
                self.set_style(style);
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}; keeping `{}`", self.orchestrator.style());
                Err(e.into())
            }
        }
    }

    pub fn set_style(&mut self, style: EffectStyle) {
        log::info!("effect preset: {style}");
        self.orchestrator.set_style(style);
    }

    #[inline]
    pub fn style(&self) -> EffectStyle {
        self.orchestrator.style()
    }

    #[inline]
    pub fn params(&self) -> &ShadingParams {
        self.orchestrator.params()
    }

    // ---------------- Texture / rotation ----------------

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.orchestrator.rotation.speed = speed;
    }

    pub fn set_texture_transform(&mut self, transform: TextureTransform) {
        self.orchestrator.transform = transform;
    }

    /// New content loaded. `animated` switches between spinning and frozen rotation.
    pub fn set_content(&mut self, texture: SourceTexture, animated: bool) {
        log::debug!(
            "content {}x{} (animated: {animated})",
            texture.width(),
            texture.height()
        );
        self.content = texture;
        self.orchestrator.set_content_animated(animated);
    }

    /// Next frame of the current animated content. Rotation state is untouched.
    pub fn update_content_frame(&mut self, texture: SourceTexture) {
        self.content = texture;
    }

    #[inline]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    // ---------------- Frame ----------------

    pub fn tick(&mut self, dt: f32) {
        self.orchestrator.tick(dt);
    }

    /// Render at the current viewport size, resizing `frame` if needed.
    pub fn render(&self, frame: &mut FrameBuffer) {
        frame.resize(self.viewport.x, self.viewport.y);
        render_frame(&self.orchestrator, &self.content, &self.sphere, frame);
    }

    pub fn status(&self) -> FrameStatus {
        FrameStatus {
            angle: self.orchestrator.rotation.angle,
            clip_enabled: self.orchestrator.clip.config().enabled,
        }
    }
}

fn check_viewport(width: u32, height: u32) -> Result<(), SceneError> {
    if width == 0 || height == 0 {
        return Err(SceneError::InvalidViewport { width, height });
    }
    Ok(())
}

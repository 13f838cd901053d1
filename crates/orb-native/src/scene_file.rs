//! TOML scene descriptions.
//!
//! ```toml
//! viewport = [1280, 720]
//! preset = "crt"
//! rotation_speed = 0.01
//!
//! [anchor]
//! anchor_pixel = [869.0, 634.0]
//! radius_ratio = 0.17
//!
//! [clip]
//! enabled = true
//! offset = -0.31
//! ```
//!
//! Every key is optional.

use std::path::Path;

use anyhow::{Context, Result};
use orb_core::SceneConfig;

pub fn parse_scene(text: &str) -> Result<SceneConfig> {
    toml::from_str(text).context("invalid scene description")
}

pub fn load_scene(path: &Path) -> Result<SceneConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    let config =
        parse_scene(&text).with_context(|| format!("in scene file {}", path.display()))?;
    log::info!("scene loaded from {}", path.display());
    Ok(config)
}

/// Scene from `path`, or the defaults when no file was given.
pub fn load_or_default(path: Option<&Path>) -> Result<SceneConfig> {
    path.map_or_else(|| Ok(SceneConfig::default()), load_scene)
}

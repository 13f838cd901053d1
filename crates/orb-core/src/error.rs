use thiserror::Error;

/// Errors surfaced by [`crate::Scene`] when an external input cannot be applied.
///
/// None of these are fatal: the scene keeps its previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("unknown effect preset `{0}`")]
    UnknownPreset(String),
    #[error("viewport must be non-zero, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    #[error("texture buffer has {actual} bytes, expected {expected}")]
    TextureSize { expected: usize, actual: usize },
}

/// Returned by `EffectStyle::from_str` for names outside the preset table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not one of none, crt, led, lcd, plasma, neon, holographic")]
pub struct ParseStyleError(pub String);

impl From<ParseStyleError> for SceneError {
    fn from(e: ParseStyleError) -> Self {
        SceneError::UnknownPreset(e.0)
    }
}

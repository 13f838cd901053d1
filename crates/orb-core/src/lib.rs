pub mod anchor;
pub mod clip;
pub mod constants;
pub mod effects;
pub mod error;
pub mod frame;
pub mod orchestrator;
pub mod raster;
pub mod scene;
pub mod state;
pub mod texture;
pub mod uv;

pub use anchor::*;
pub use clip::*;
pub use constants::*;
pub use effects::{shade, EffectStyle, ShadeInput, ShadingParams, PRESETS};
pub use error::*;
pub use frame::*;
pub use orchestrator::*;
pub use raster::*;
pub use scene::*;
pub use state::*;
pub use texture::*;
pub use uv::*;

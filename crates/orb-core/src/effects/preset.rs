use std::fmt;
use std::str::FromStr;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::error::ParseStyleError;

/// The simulated display a frame is rendered through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectStyle {
    #[default]
    None,
    Crt,
    Led,
    Lcd,
    Plasma,
    Neon,
    Holographic,
}

impl EffectStyle {
    pub const ALL: [EffectStyle; 7] = [
        EffectStyle::None,
        EffectStyle::Crt,
        EffectStyle::Led,
        EffectStyle::Lcd,
        EffectStyle::Plasma,
        EffectStyle::Neon,
        EffectStyle::Holographic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectStyle::None => "none",
            EffectStyle::Crt => "crt",
            EffectStyle::Led => "led",
            EffectStyle::Lcd => "lcd",
            EffectStyle::Plasma => "plasma",
            EffectStyle::Neon => "neon",
            EffectStyle::Holographic => "holographic",
        }
    }

    /// Fixed shading parameters for this style.
    #[inline]
    pub fn preset(self) -> ShadingParams {
        PRESETS[self as usize]
    }
}

impl fmt::Display for EffectStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| ParseStyleError(s.to_owned()))
    }
}

/// Numeric knobs shared by every style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadingParams {
    /// Cell grid over the UV square (columns, rows).
    pub cells: UVec2,
    /// Fraction of each cell left dark between elements, in [0, 1].
    pub gap_size: f32,
    pub brightness: f32,
    pub glow_intensity: f32,
    /// Colour steps per channel, at least 1.
    pub color_levels: u32,
    pub scanline_intensity: f32,
    pub noise_intensity: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        EffectStyle::None.preset()
    }
}

/// Indexed by `EffectStyle as usize`.
pub const PRESETS: [ShadingParams; 7] = [
    // none
    ShadingParams {
        cells: UVec2::new(512, 256),
        gap_size: 0.0,
        brightness: 1.0,
        glow_intensity: 0.0,
        color_levels: 256,
        scanline_intensity: 0.0,
        noise_intensity: 0.0,
    },
    // crt
    ShadingParams {
        cells: UVec2::new(320, 160),
        gap_size: 0.15,
        brightness: 1.2,
        glow_intensity: 0.35,
        color_levels: 32,
        scanline_intensity: 0.45,
        noise_intensity: 0.04,
    },
    // led
    ShadingParams {
        cells: UVec2::new(96, 48),
        gap_size: 0.3,
        brightness: 1.4,
        glow_intensity: 0.5,
        color_levels: 16,
        scanline_intensity: 0.0,
        noise_intensity: 0.03,
    },
    // lcd
    ShadingParams {
        cells: UVec2::new(200, 100),
        gap_size: 0.1,
        brightness: 1.1,
        glow_intensity: 0.1,
        color_levels: 64,
        scanline_intensity: 0.1,
        noise_intensity: 0.01,
    },
    // plasma
    ShadingParams {
        cells: UVec2::new(128, 64),
        gap_size: 0.2,
        brightness: 1.3,
        glow_intensity: 0.8,
        color_levels: 24,
        scanline_intensity: 0.05,
        noise_intensity: 0.02,
    },
    // neon
    ShadingParams {
        cells: UVec2::new(80, 40),
        gap_size: 0.35,
        brightness: 1.6,
        glow_intensity: 1.2,
        color_levels: 8,
        scanline_intensity: 0.0,
        noise_intensity: 0.05,
    },
    // holographic
    ShadingParams {
        cells: UVec2::new(150, 75),
        gap_size: 0.2,
        brightness: 1.25,
        glow_intensity: 0.6,
        color_levels: 32,
        scanline_intensity: 0.25,
        noise_intensity: 0.06,
    },
];

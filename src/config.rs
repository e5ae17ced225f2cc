//! Viewer configuration.
//!
//! Everything is fixed at start-up. Values come from environment variables;
//! missing or unparseable values fall back to the preset defaults.
//!
//! - `ISO_GRID_PRESET`: `standard` (default) or `compact`
//! - `ISO_GRID_WIDTH` / `ISO_GRID_HEIGHT`: override the preset grid size
//! - `ISO_TILE_SIZE`: base tile width in pixels
//! - `ISO_FPS`: target frame rate for rendering and sampling
//! - `ISO_LOG_PATH`: append logs to this file (no logging when unset)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;

use crate::types::{GridSize, ZoomLimits, DEFAULT_TILE_SIZE, TARGET_FPS};

/// Built-in grid/zoom combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPreset {
    /// 100x100 tiles, zoom 0.1-5.0.
    #[default]
    Standard,
    /// 20x20 tiles, zoom 0.5-2.0.
    Compact,
}

impl FromStr for GridPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(GridPreset::Standard),
            "compact" => Ok(GridPreset::Compact),
            other => bail!("unknown grid preset {other:?}"),
        }
    }
}

impl GridPreset {
    pub fn grid(&self) -> GridSize {
        match self {
            GridPreset::Standard => GridSize::new(100, 100),
            GridPreset::Compact => GridSize::new(20, 20),
        }
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        match self {
            GridPreset::Standard => ZoomLimits::new(0.1, 5.0, 0.1),
            GridPreset::Compact => ZoomLimits::new(0.5, 2.0, 0.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub preset: GridPreset,
    pub grid: GridSize,
    pub zoom: ZoomLimits,
    pub base_tile: u32,
    pub target_fps: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::from_preset(GridPreset::default())
    }
}

impl ViewerConfig {
    pub fn from_preset(preset: GridPreset) -> Self {
        Self {
            preset,
            grid: preset.grid(),
            zoom: preset.zoom_limits(),
            base_tile: DEFAULT_TILE_SIZE,
            target_fps: TARGET_FPS,
            log_path: None,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ViewerConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let preset = lookup("ISO_GRID_PRESET")
            .and_then(|s| s.parse::<GridPreset>().ok())
            .unwrap_or_default();
        let defaults = Self::from_preset(preset);

        let positive = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|v| *v > 0)
        };

        let width = positive("ISO_GRID_WIDTH").unwrap_or(defaults.grid.width);
        let height = positive("ISO_GRID_HEIGHT").unwrap_or(defaults.grid.height);
        let base_tile = positive("ISO_TILE_SIZE").unwrap_or(defaults.base_tile);
        let target_fps = positive("ISO_FPS").unwrap_or(defaults.target_fps);

        let log_path = lookup("ISO_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            grid: GridSize::new(width, height),
            base_tile,
            target_fps,
            log_path,
            ..defaults
        }
    }
}

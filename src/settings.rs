//! Interaction settings: tile geometry, zoom bounds and creation defaults.
//!
//! Settings live in a JSON file under the platform config directory. A
//! missing file means defaults; a malformed one is reported and replaced by
//! defaults so a bad edit never locks the user out of the editor.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CONNECTOR_COLOR, DEFAULT_RECTANGLE_COLOR, DEFAULT_ZOOM, MAX_ZOOM,
    MIN_ZOOM, SETTINGS_FILE_NAME, SLOW_DISPATCH_MS, TILE_SIZE, ZOOM_STEP,
};
use crate::error::SettingsError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Discrete zoom configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            step: ZOOM_STEP,
            default: DEFAULT_ZOOM,
        }
    }
}

impl ZoomSettings {
    /// Clamp a zoom level into bounds, snapping away float drift.
    ///
    /// Never panics on unvalidated bounds: an inverted range resolves to
    /// `max` and a NaN bound is ignored.
    pub fn clamp(&self, zoom: f64) -> f64 {
        let snapped = (zoom * 1000.0).round() / 1000.0;
        snapped.max(self.min).min(self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Tile edge length in pixels at zoom 1.0
    pub tile_size: f64,
    pub zoom: ZoomSettings,
    pub default_rectangle_color: String,
    pub default_connector_color: String,
    /// Budget for one dispatch before a slow-operation warning
    pub slow_dispatch_ms: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            zoom: ZoomSettings::default(),
            default_rectangle_color: DEFAULT_RECTANGLE_COLOR.to_string(),
            default_connector_color: DEFAULT_CONNECTOR_COLOR.to_string(),
            slow_dispatch_ms: SLOW_DISPATCH_MS,
        }
    }
}

impl InteractionSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "Loaded interaction settings");
                settings
            }
            Err(e) => {
                warn!("Falling back to default interaction settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load and validate a settings file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(SettingsError::from)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(SettingsError::from)
            .with_context(|| format!("parsing {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.tile_size > 0.0) {
            return Err(SettingsError::InvalidTileSize(self.tile_size));
        }
        let zoom = &self.zoom;
        if !(zoom.step > 0.0) || !(zoom.min > 0.0) || !(zoom.max >= zoom.min) {
            return Err(SettingsError::InvalidZoom {
                min: zoom.min,
                max: zoom.max,
                step: zoom.step,
            });
        }
        Ok(())
    }
}

/// `<config dir>/tileboard/interaction.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}

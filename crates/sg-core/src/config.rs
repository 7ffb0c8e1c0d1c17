//! Grid configuration
//!
//! Persisted as RON, the same format used for editor project files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_GRID_SPACING, DEFAULT_MARKER_SCALE, DEFAULT_SNAP_ANGLE, colors,
    thickness,
};
use crate::layout::GridLayout;

/// Grid settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Whether the grid is shown at startup
    pub enabled: bool,
    /// Grid extent (half-size in each direction)
    pub size: f32,
    /// Grid line spacing
    pub spacing: f32,
    /// Angular snap increment in degrees
    pub snap_angle: f32,
    /// Snap positions to the grid
    pub snap_to_position: bool,
    /// Snap orientations to the snap angle
    pub snap_to_orientation: bool,
    /// Minor line color (RGBA)
    pub minor_color: [f32; 4],
    /// Major line color (RGBA)
    pub major_color: [f32; 4],
    /// Center line color (RGBA)
    pub center_color: [f32; 4],
    /// Backing quad color (RGBA)
    pub back_color: [f32; 4],
    /// Snap marker color (RGBA)
    pub marker_color: [f32; 4],
    /// Minor line thickness in pixels
    pub minor_thickness: f32,
    /// Major line thickness in pixels
    pub major_thickness: f32,
    /// Center line thickness in pixels
    pub center_thickness: f32,
    /// Uniform scale of the snap marker
    pub marker_scale: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_GRID_SIZE,
            spacing: DEFAULT_GRID_SPACING,
            snap_angle: DEFAULT_SNAP_ANGLE,
            snap_to_position: true,
            snap_to_orientation: true,
            minor_color: colors::LINE,
            major_color: colors::LINE,
            center_color: colors::CENTER,
            back_color: colors::BACK,
            marker_color: colors::MARKER,
            minor_thickness: thickness::MINOR,
            major_thickness: thickness::MAJOR,
            center_thickness: thickness::CENTER,
            marker_scale: DEFAULT_MARKER_SCALE,
        }
    }
}

impl GridConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that size, spacing and snap angle are positive and finite, and
    /// that size and spacing give a drawable grid within the line limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("size", self.size),
            ("spacing", self.spacing),
            ("snap_angle", self.snap_angle),
        ];
        for (field, value) in checks {
            if !is_positive(value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    field, value
                )));
            }
        }
        GridLayout::compute(self.size, self.spacing)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved grid config to {}", path.display());
        Ok(())
    }

    /// Serialize configuration to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::load_from_bytes(&content)?;
        tracing::info!("Loaded grid config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from bytes. The result is validated.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let config: GridConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

//! Engine configuration.

use cube_types::InteriorMode;
use iso_scene::ProjectionSettings;
use pattern_ops::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

use crate::types::EngineError;

/// Tunables for scene generation. Every field has a default, so a partial
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas width in pixels. The lattice origin is placed at the centre.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// On-screen size of the sculpture; the voxel scale is `scene_scale / n`.
    pub scene_scale: f64,
    /// Stroke width shared by every quad.
    pub stroke_width: f64,
    /// Fill policy for cells on no face of the cube (symmetric shapes only).
    pub interior: InteriorMode,
    /// Cap on degenerate face resamples before the centre cell is forced.
    pub max_pattern_attempts: usize,
    /// How many canvas sizes the background extends past each edge.
    pub background_extent: f64,
    /// Fixed RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 800.0,
            scene_scale: 300.0,
            stroke_width: 6.0,
            interior: InteriorMode::Hollow,
            max_pattern_attempts: DEFAULT_MAX_ATTEMPTS,
            background_extent: 10.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("scene_scale", self.scene_scale),
            ("background_extent", self.background_extent),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::InvalidConfig {
                    reason: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(EngineError::InvalidConfig {
                reason: format!("stroke_width must be non-negative, got {}", self.stroke_width),
            });
        }
        if self.max_pattern_attempts == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "max_pattern_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn projection(&self) -> ProjectionSettings {
        ProjectionSettings {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            scene_scale: self.scene_scale,
            stroke_width: self.stroke_width,
        }
    }
}

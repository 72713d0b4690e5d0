use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Drawing-surface and interaction constants shared by the edge model, the
/// hit tester and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    pub node_radius: f32,
    /// Pointer slack around an edge stroke, in pixels.
    pub hit_threshold: f32,
    /// Lateral step between neighbouring parallel edges.
    pub base_offset: f32,
    pub arrow_size: f32,
    pub loop_arrow_size: f32,
    /// Number of parameter steps used when testing a curved edge.
    pub curve_samples: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            width: 500.0,
            height: 500.0,
            node_radius: 10.0,
            hit_threshold: 4.0,
            base_offset: 20.0,
            arrow_size: 10.0,
            loop_arrow_size: 8.0,
            curve_samples: 100,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("node_radius", self.node_radius),
            ("base_offset", self.base_offset),
            ("arrow_size", self.arrow_size),
            ("loop_arrow_size", self.loop_arrow_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if !self.hit_threshold.is_finite() || self.hit_threshold < 0.0 {
            return Err(ConfigError::OutOfRange { field: "hit_threshold", value: self.hit_threshold });
        }
        if self.curve_samples == 0 || self.curve_samples > 10_000 {
            return Err(ConfigError::OutOfRange {
                field: "curve_samples",
                value: self.curve_samples as f32,
            });
        }
        Ok(())
    }
}

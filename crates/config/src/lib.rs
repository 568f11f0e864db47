//! Shared configuration for Airmark
//!
//! This crate provides the single source of truth for the tunable values of
//! the stroke painter and the marker constraint. Every struct has a `Default`
//! holding the values the runtime was tuned with, and deserializes with
//! missing fields filled from those defaults.
//!
//! Vectors are stored as plain arrays so this crate does not pick a math
//! library for its consumers.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default minimum distance between accepted stroke points (3 mm)
pub const DEFAULT_MIN_DISTANCE: f32 = 0.003;

/// Default number of vertices around each tube ring
pub const DEFAULT_RADIAL_SEGMENTS: usize = 8;

/// Default vertex capacity of a stroke buffer
pub const DEFAULT_MAX_VERTICES: usize = 100_000;

/// Default tube radius at zero pressure
pub const DEFAULT_MIN_WIDTH: f32 = 0.001;

/// Default tube radius at full pressure
pub const DEFAULT_MAX_WIDTH: f32 = 0.01;

/// Default marker body length
pub const DEFAULT_MARKER_LENGTH: f32 = 0.12;

/// Default in-plane movement needed before a locked tip slides (1 mm)
pub const DEFAULT_SLIDE_THRESHOLD: f32 = 0.001;

/// Default whiteboard size (width, height, depth)
pub const DEFAULT_SURFACE_SIZE: [f32; 3] = [2.0, 1.0, 0.0];

/// Error loading configuration from text
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tube generation settings for a stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct StrokeSettings {
    /// Points closer than this to the last accepted point are ignored
    pub min_distance: f32,
    /// Vertices per ring
    pub radial_segments: usize,
    /// Capacity of the vertex buffer
    pub max_vertices: usize,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

/// Pressure to tube radius mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct BrushSettings {
    /// Radius at pressure 0
    pub min_width: f32,
    /// Radius at pressure 1
    pub max_width: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Pose and extent of the constraining surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct SurfaceSettings {
    /// Width, height, depth
    pub size: [f32; 3],
    /// Center of the surface in world space
    pub position: [f32; 3],
    /// Orientation quaternion as [x, y, z, w]
    pub rotation: [f32; 4],
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SURFACE_SIZE,
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Marker proxy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct MarkerSettings {
    /// Length of the marker body; the body center sits half of this behind the tip
    pub marker_length: f32,
    /// Minimum in-plane movement for a locked tip to follow the stylus
    pub slide_threshold: f32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            marker_length: DEFAULT_MARKER_LENGTH,
            slide_threshold: DEFAULT_SLIDE_THRESHOLD,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct AirmarkConfig {
    pub stroke: StrokeSettings,
    pub brush: BrushSettings,
    pub surface: SurfaceSettings,
    pub marker: MarkerSettings,
}

impl AirmarkConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json_str(text: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AirmarkConfig::default();
        assert_eq!(config.stroke.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(config.stroke.radial_segments, DEFAULT_RADIAL_SEGMENTS);
        assert_eq!(config.stroke.max_vertices, DEFAULT_MAX_VERTICES);
        assert_eq!(config.marker.marker_length, DEFAULT_MARKER_LENGTH);
        assert_eq!(config.surface.rotation, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            AirmarkConfig::from_json_str(r#"{ "stroke": { "radial_segments": 12 } }"#).unwrap();
        assert_eq!(config.stroke.radial_segments, 12);
        assert_eq!(config.stroke.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(config.brush, BrushSettings::default());
        assert_eq!(config.marker.slide_threshold, DEFAULT_SLIDE_THRESHOLD);
    }

    #[test]
    fn test_json_surface_pose() {
        let config = AirmarkConfig::from_json_str(
            r#"{ "surface": { "position": [0.0, 1.5, -1.0], "size": [3.0, 1.2, 0.0] } }"#,
        )
        .unwrap();
        assert_eq!(config.surface.position, [0.0, 1.5, -1.0]);
        assert_eq!(config.surface.size, [3.0, 1.2, 0.0]);
        assert_eq!(config.surface.rotation, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_malformed_json() {
        let result = AirmarkConfig::from_json_str("{ stroke: ");
        assert!(matches!(result, Err(ConfigLoadError::Json(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let mut config = AirmarkConfig::default();
        config.stroke.max_vertices = 4096;
        let text = config.to_json_string().unwrap();
        assert_eq!(AirmarkConfig::from_json_str(&text).unwrap(), config);
    }
}

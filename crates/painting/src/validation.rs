use airmark_config::StrokeSettings;
use thiserror::Error;

/// Invalid static configuration, reported when a session is constructed
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Radial segment count must be at least 1")]
    ZeroSegments,
    #[error("Vertex capacity must be at least 1")]
    ZeroCapacity,
    #[error("Invalid minimum point distance: {0}")]
    InvalidMinDistance(f32),
}

/// Check that a ring has at least one segment
pub fn validate_segments(segments: usize) -> Result<(), ConfigError> {
    if segments == 0 {
        return Err(ConfigError::ZeroSegments);
    }
    Ok(())
}

/// Check that a vertex buffer can hold at least one vertex slot
pub fn validate_capacity(max_vertices: usize) -> Result<(), ConfigError> {
    if max_vertices == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    Ok(())
}

/// Validate stroke settings before any buffer is allocated
pub fn validate_stroke_settings(settings: &StrokeSettings) -> Result<(), ConfigError> {
    validate_segments(settings.radial_segments)?;
    validate_capacity(settings.max_vertices)?;

    // NaN fails this comparison too
    if !(settings.min_distance >= 0.0 && settings.min_distance.is_finite()) {
        return Err(ConfigError::InvalidMinDistance(settings.min_distance));
    }
    Ok(())
}

//! Brush width mapping
//!
//! Maps the analog pressure reported by the stylus to the tube radius used
//! for the next ring.

use airmark_config::BrushSettings;

/// Pressure to radius mapping
#[derive(Debug, Clone, PartialEq)]
pub struct BrushWidth {
    /// Radius at pressure 0
    pub min_width: f32,
    /// Radius at pressure 1
    pub max_width: f32,
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self::from_settings(&BrushSettings::default())
    }
}

impl BrushWidth {
    /// Create a width mapping, clamping to `0 <= min_width <= max_width`
    pub fn new(min_width: f32, max_width: f32) -> Self {
        let min_width = min_width.max(0.0);
        Self {
            min_width,
            max_width: max_width.max(min_width),
        }
    }

    pub fn from_settings(settings: &BrushSettings) -> Self {
        Self::new(settings.min_width, settings.max_width)
    }

    /// Calculate tube radius based on pressure
    pub fn width_for_pressure(&self, pressure: f32) -> f32 {
        let pressure = pressure.clamp(0.0, 1.0);
        self.min_width + (self.max_width - self.min_width) * pressure
    }
}

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_UP;

/// Orientation of the tube cross-section at one point of the path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Direction of travel
    pub forward: Vec3,
    /// First in-plane axis of the ring (angle 0)
    pub right: Vec3,
    /// Second in-plane axis of the ring (angle pi/2)
    pub up: Vec3,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: DEFAULT_UP,
        }
    }
}

impl Frame {
    /// Check that all three axes are unit length and mutually perpendicular
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.forward)
            && unit(self.right)
            && unit(self.up)
            && self.forward.dot(self.right).abs() <= tolerance
            && self.forward.dot(self.up).abs() <= tolerance
            && self.right.dot(self.up).abs() <= tolerance
    }
}

/// One boundary vertex of a ring
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RingVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Cross-section of the tube: one vertex per angular step, in increasing angle order
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub(crate) vertices: Vec<RingVertex>,
}

impl Ring {
    /// Create a ring with `segments` zeroed vertices, ready to be filled in place
    pub fn with_segments(segments: usize) -> Self {
        Self {
            vertices: vec![RingVertex::default(); segments],
        }
    }

    /// Number of angular steps
    pub fn segments(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[RingVertex] {
        &self.vertices
    }
}

/// One frame of stylus input as delivered by the tracking collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StylusSample {
    /// Tip position in world space
    pub position: Vec3,
    /// Stylus orientation
    pub orientation: Quat,
    /// Analog tip pressure 0.0-1.0
    pub tip: f32,
    /// Analog middle button value 0.0-1.0
    pub middle: f32,
}

impl StylusSample {
    /// Sample with no buttons pressed
    pub fn hover(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            tip: 0.0,
            middle: 0.0,
        }
    }

    /// Sample pressing the tip with the given pressure
    pub fn pressed(position: Vec3, pressure: f32) -> Self {
        Self {
            tip: pressure,
            ..Self::hover(position)
        }
    }

    /// Whether either drawing input is active
    pub fn is_drawing(&self) -> bool {
        self.tip > 0.0 || self.middle > 0.0
    }

    /// Pressure used for width: the stronger of the two drawing inputs
    pub fn pressure(&self) -> f32 {
        self.tip.max(self.middle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_orthonormal() {
        assert!(Frame::default().is_orthonormal(1e-6));
    }

    #[test]
    fn test_skewed_frame_is_not_orthonormal() {
        let frame = Frame {
            forward: Vec3::Z,
            right: Vec3::new(1.0, 0.1, 0.0).normalize(),
            up: Vec3::Y,
        };
        assert!(!frame.is_orthonormal(1e-3));
    }

    #[test]
    fn test_ring_with_segments() {
        let ring = Ring::with_segments(8);
        assert_eq!(ring.segments(), 8);
        assert!(ring.vertices().iter().all(|v| *v == RingVertex::default()));
    }

    #[test]
    fn test_stylus_sample_drawing() {
        let hover = StylusSample::hover(Vec3::ZERO);
        assert!(!hover.is_drawing());

        let pressed = StylusSample::pressed(Vec3::ZERO, 0.4);
        assert!(pressed.is_drawing());
        assert!((pressed.pressure() - 0.4).abs() < 1e-6);

        let middle = StylusSample {
            middle: 0.7,
            ..pressed
        };
        assert!((middle.pressure() - 0.7).abs() < 1e-6);
    }
}

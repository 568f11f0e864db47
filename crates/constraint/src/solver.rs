//! Marker tip constraint against a planar surface.
//!
//! The solver has two states:
//! - **Free**: the visible marker follows the desired tip.
//! - **Locked**: the desired tip is behind the plane. The visible tip is held
//!   at a point on the plane and only follows the stylus once its in-plane
//!   projection has moved more than `slide_threshold`, which hides tracking
//!   jitter while the marker is pressed against the surface.
//!
//! Entering and leaving the lock is immediate: Free becomes Locked on the
//! first frame with a negative signed distance, and Locked becomes Free on
//! the first frame with a non-negative one.

use airmark_config::{MarkerSettings, SurfaceSettings};
use glam::{Quat, Vec3};
use thiserror::Error;
use tracing::{debug, trace};

use crate::plane::Plane;
use crate::types::{MarkerPose, SurfacePose};

/// Marker axis in the marker's local space, pointing from body towards tip
pub const MARKER_LOCAL_AXIS: Vec3 = Vec3::NEG_Y;

/// Invalid solver configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConstraintConfigError {
    #[error("Invalid marker length: {0}")]
    InvalidMarkerLength(f32),
    #[error("Invalid slide threshold: {0}")]
    InvalidSlideThreshold(f32),
    #[error("Surface rotation must be a non-zero finite quaternion")]
    InvalidRotation,
}

fn non_negative_finite(value: f32) -> bool {
    value >= 0.0 && value.is_finite()
}

/// Keeps a marker's visible tip from crossing a plane
#[derive(Debug, Clone)]
pub struct PlaneConstraintSolver {
    surface: SurfacePose,
    plane: Plane,
    marker_length: f32,
    slide_threshold: f32,
    is_locked: bool,
    locked_tip: Vec3,
}

impl PlaneConstraintSolver {
    pub fn new(surface: SurfacePose, marker: &MarkerSettings) -> Result<Self, ConstraintConfigError> {
        if !non_negative_finite(marker.marker_length) {
            return Err(ConstraintConfigError::InvalidMarkerLength(marker.marker_length));
        }
        if !non_negative_finite(marker.slide_threshold) {
            return Err(ConstraintConfigError::InvalidSlideThreshold(marker.slide_threshold));
        }
        let rotation = surface.rotation;
        if !rotation.is_finite() || rotation.length_squared() < f32::EPSILON {
            return Err(ConstraintConfigError::InvalidRotation);
        }

        let surface = SurfacePose {
            rotation: rotation.normalize(),
            ..surface
        };
        Ok(Self {
            plane: Plane::from_pose(&surface),
            surface,
            marker_length: marker.marker_length,
            slide_threshold: marker.slide_threshold,
            is_locked: false,
            locked_tip: Vec3::ZERO,
        })
    }

    pub fn from_settings(
        surface: &SurfaceSettings,
        marker: &MarkerSettings,
    ) -> Result<Self, ConstraintConfigError> {
        Self::new(SurfacePose::from_settings(surface), marker)
    }

    /// Compute the visible marker pose for a desired tip position and orientation
    pub fn evaluate(&mut self, desired_tip: Vec3, orientation: Quat) -> MarkerPose {
        let marker_direction = (orientation * MARKER_LOCAL_AXIS)
            .try_normalize()
            .unwrap_or(MARKER_LOCAL_AXIS);

        let distance = self.plane.signed_distance(desired_tip);
        let is_colliding = distance < 0.0;

        if is_colliding {
            let projected = desired_tip - self.plane.normal * distance;
            if !self.is_locked {
                self.locked_tip = projected;
                self.is_locked = true;
                debug!(
                    "PlaneConstraintSolver: locked at ({:.4}, {:.4}, {:.4}), depth={:.4}",
                    projected.x, projected.y, projected.z, -distance
                );
            } else if projected.distance(self.locked_tip) > self.slide_threshold {
                trace!(
                    "PlaneConstraintSolver: sliding {:.4}",
                    projected.distance(self.locked_tip)
                );
                self.locked_tip = projected;
            }
        } else if self.is_locked {
            self.is_locked = false;
            debug!("PlaneConstraintSolver: unlocked");
        }

        let tip = if self.is_locked {
            self.locked_tip
        } else {
            desired_tip
        };

        MarkerPose {
            position: tip - marker_direction * (self.marker_length / 2.0),
            orientation,
            is_colliding,
            tip,
        }
    }

    /// Move the surface. Any lock in progress is dropped.
    pub fn update_surface(&mut self, surface: SurfacePose) {
        self.surface = surface;
        self.plane = Plane::from_pose(&surface);
        self.is_locked = false;
        debug!(
            "PlaneConstraintSolver: surface moved, normal=({:.3}, {:.3}, {:.3})",
            self.plane.normal.x, self.plane.normal.y, self.plane.normal.z
        );
    }

    /// Drop the lock and forget the locked tip
    pub fn reset(&mut self) {
        self.is_locked = false;
        self.locked_tip = Vec3::ZERO;
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    pub fn locked_tip(&self) -> Vec3 {
        self.locked_tip
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn surface(&self) -> &SurfacePose {
        &self.surface
    }

    pub fn marker_length(&self) -> f32 {
        self.marker_length
    }

    pub fn slide_threshold(&self) -> f32 {
        self.slide_threshold
    }
}

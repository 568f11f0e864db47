use airmark_config::SurfaceSettings;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Pose and extent of the constraining surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePose {
    /// Width, height, depth. Carried for collaborators; the plane ignores it.
    pub size: Vec3,
    /// Surface center
    pub position: Vec3,
    /// Surface orientation; local +Z is the plane normal
    pub rotation: Quat,
}

impl Default for SurfacePose {
    fn default() -> Self {
        Self::from_settings(&SurfaceSettings::default())
    }
}

impl SurfacePose {
    pub fn new(size: Vec3, position: Vec3, rotation: Quat) -> Self {
        Self {
            size,
            position,
            rotation,
        }
    }

    /// Convert from configuration arrays. The rotation is used as given.
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            size: Vec3::from_array(settings.size),
            position: Vec3::from_array(settings.position),
            rotation: Quat::from_array(settings.rotation),
        }
    }
}

/// Visible marker pose returned by the solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPose {
    /// Marker body center
    pub position: Vec3,
    /// Marker orientation (passed through unchanged)
    pub orientation: Quat,
    /// Whether the desired tip is behind the surface
    pub is_colliding: bool,
    /// Tip the body was placed from: the locked tip while locked, else the desired tip
    pub tip: Vec3,
}

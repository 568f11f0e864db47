//! Infinite plane through the surface center

use glam::{Quat, Vec3};

use crate::types::SurfacePose;

/// Surface normal in the surface's local space
pub const LOCAL_NORMAL: Vec3 = Vec3::Z;

/// Plane given by a unit normal and a point on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    /// Plane of a surface posed at `position` with orientation `rotation`
    pub fn from_transform(position: Vec3, rotation: Quat) -> Self {
        let normal = (rotation * LOCAL_NORMAL)
            .try_normalize()
            .unwrap_or(LOCAL_NORMAL);
        Self {
            normal,
            point: position,
        }
    }

    pub fn from_pose(pose: &SurfacePose) -> Self {
        Self::from_transform(pose.position, pose.rotation)
    }

    /// Signed distance, positive on the side the normal points to
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.point).dot(self.normal)
    }

    /// Closest point on the plane
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }
}

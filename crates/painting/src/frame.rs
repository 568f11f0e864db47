//! Orientation tracking along a stroke path
//!
//! Each accepted step re-derives `right` and `up` from the new forward
//! direction and the previous `up`. This keeps the ring from spinning between
//! neighbouring steps, but it is a local re-orthonormalization and not a
//! rotation-minimizing frame: twist can build up along long curved strokes.

use glam::Vec3;

use crate::constants::{DEFAULT_UP, PARALLEL_EPSILON};
use crate::types::Frame;

/// Compute `(right, up)` for a unit `forward` given the previous step's up.
///
/// If `forward` is (anti)parallel to `previous_up`, a fallback axis
/// perpendicular enough to `forward` is used in its place.
pub fn compute_frame(previous_up: Vec3, forward: Vec3) -> (Vec3, Vec3) {
    let mut right = forward.cross(previous_up);
    if right.length() < PARALLEL_EPSILON {
        right = forward.cross(fallback_up(forward));
    }
    let right = right.normalize();
    let up = right.cross(forward).normalize();
    (right, up)
}

/// Z unless forward leans more towards Z than X, then X
fn fallback_up(forward: Vec3) -> Vec3 {
    if forward.z.abs() <= forward.x.abs() {
        Vec3::Z
    } else {
        Vec3::X
    }
}

/// Carries the up vector from one stroke step to the next
#[derive(Debug, Clone)]
pub struct FrameTracker {
    up: Vec3,
}

impl Default for FrameTracker {
    fn default() -> Self {
        Self { up: DEFAULT_UP }
    }
}

impl FrameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget accumulated twist and start again from the default up axis
    pub fn reset(&mut self) {
        self.up = DEFAULT_UP;
    }

    /// Current up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Advance to a new unit forward direction and return the full frame
    pub fn advance(&mut self, forward: Vec3) -> Frame {
        let (right, up) = compute_frame(self.up, forward);
        self.up = up;
        Frame { forward, right, up }
    }
}

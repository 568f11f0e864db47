//! Ring generation for tube cross-sections

use std::f32::consts::TAU;

use glam::Vec3;

use crate::types::{Frame, Ring, RingVertex};

/// Generate a ring of `segments` vertices around `center`.
///
/// Vertex `s` sits at angle `TAU * s / segments`, measured from
/// `frame.right` towards `frame.up`. Normals point away from `center`.
pub fn generate_ring(center: Vec3, frame: &Frame, radius: f32, segments: usize) -> Ring {
    let mut ring = Ring::with_segments(segments);
    generate_ring_into(&mut ring, center, frame, radius);
    ring
}

/// Fill an existing ring in place. The ring's length sets the segment count.
pub fn generate_ring_into(ring: &mut Ring, center: Vec3, frame: &Frame, radius: f32) {
    let segments = ring.vertices.len();
    for (s, vertex) in ring.vertices.iter_mut().enumerate() {
        let angle = TAU * s as f32 / segments as f32;
        let direction = frame.right * angle.cos() + frame.up * angle.sin();
        let position = center + direction * radius;

        // A zero radius collapses the ring to its center; keep the unit direction as normal
        let normal = (position - center).try_normalize().unwrap_or(direction);

        *vertex = RingVertex { position, normal };
    }
}

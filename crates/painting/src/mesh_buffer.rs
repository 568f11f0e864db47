//! Fixed-capacity vertex arena for a stroke
//!
//! The position and normal arrays are allocated once at construction and
//! never grow. Triangles are stored as an unindexed triangle list, three
//! consecutive vertices per triangle.
//!
//! Two counts are tracked:
//! - `used`: slots written so far
//! - `published`: the draw range a renderer may read
//!
//! `published` only moves at the end of [`MeshBuffer::append`], after every
//! write of that append has landed, and always covers whole triangles.

#[cfg(feature = "bevy")]
use bevy::asset::RenderAssetUsages;
#[cfg(feature = "bevy")]
use bevy::mesh::PrimitiveTopology;
#[cfg(feature = "bevy")]
use bevy::prelude::Mesh;

use crate::types::{Ring, RingVertex};
use crate::validation::{ConfigError, validate_capacity};

/// Preallocated triangle-list buffer with drop-on-overflow
#[derive(Debug, Clone)]
pub struct MeshBuffer {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    used: usize,
    published: usize,
}

impl MeshBuffer {
    /// Allocate a buffer for `max_vertices` vertices
    pub fn new(max_vertices: usize) -> Result<Self, ConfigError> {
        validate_capacity(max_vertices)?;
        Ok(Self {
            positions: vec![[0.0; 3]; max_vertices],
            normals: vec![[0.0; 3]; max_vertices],
            used: 0,
            published: 0,
        })
    }

    /// Total vertex slots
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Slots written since the last reset
    pub fn used_count(&self) -> usize {
        self.used
    }

    /// Number of vertices a renderer may draw
    pub fn vertex_count(&self) -> usize {
        self.published
    }

    /// Number of complete triangles in the draw range
    pub fn triangle_count(&self) -> usize {
        self.published / 3
    }

    /// Whether further writes are being dropped
    pub fn is_saturated(&self) -> bool {
        self.used + 1 >= self.capacity()
    }

    /// Restart the buffer for a new stroke.
    ///
    /// Old contents stay in memory but fall outside the draw range.
    pub fn reset(&mut self) {
        self.used = 0;
        self.published = 0;
    }

    /// Write one vertex at the next slot.
    ///
    /// Returns false and drops the vertex once the buffer is full. The last
    /// slot is never written.
    pub fn push_vertex(&mut self, vertex: &RingVertex) -> bool {
        if self.is_saturated() {
            return false;
        }
        self.positions[self.used] = vertex.position.to_array();
        self.normals[self.used] = vertex.normal.to_array();
        self.used += 1;
        true
    }

    /// Join two rings with a quad strip and publish the result.
    ///
    /// For each segment `s` and `next = (s + 1) % n` this emits
    /// `(a[s], b[s], a[next])` and `(a[next], b[s], b[next])`, which faces
    /// outward for rings produced by [`crate::ring::generate_ring`] along the
    /// frame's forward axis. Returns the number of vertices written.
    pub fn append(&mut self, from: &Ring, to: &Ring) -> usize {
        debug_assert_eq!(from.segments(), to.segments());
        let segments = from.segments().min(to.segments());
        let start = self.used;

        for s in 0..segments {
            let next = (s + 1) % segments;
            let a = &from.vertices[s];
            let a_next = &from.vertices[next];
            let b = &to.vertices[s];
            let b_next = &to.vertices[next];

            for vertex in [a, b, a_next, a_next, b, b_next] {
                if !self.push_vertex(vertex) {
                    break;
                }
            }
        }

        self.publish();
        self.used - start
    }

    fn publish(&mut self) {
        self.published = self.used - self.used % 3;
    }

    /// Positions inside the draw range
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions[..self.published]
    }

    /// Normals inside the draw range
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals[..self.published]
    }

    /// Draw-range positions as raw bytes for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions())
    }

    /// Draw-range normals as raw bytes for GPU upload
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals())
    }

    /// Build a Bevy mesh holding the current draw range
    #[cfg(feature = "bevy")]
    pub fn to_bevy_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        self.write_bevy_mesh(&mut mesh);
        mesh
    }

    /// Replace the position and normal attributes of an existing mesh
    #[cfg(feature = "bevy")]
    pub fn write_bevy_mesh(&self, mesh: &mut Mesh) {
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions().to_vec());
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals().to_vec());
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::ring::generate_ring;
    use crate::types::Frame;

    fn frame() -> Frame {
        Frame {
            forward: Vec3::Z,
            right: Vec3::NEG_X,
            up: Vec3::Y,
        }
    }

    fn rings(segments: usize) -> (Ring, Ring) {
        let frame = frame();
        (
            generate_ring(Vec3::ZERO, &frame, 0.1, segments),
            generate_ring(Vec3::new(0.0, 0.0, 0.05), &frame, 0.1, segments),
        )
    }

    fn triangle(buffer: &MeshBuffer, index: usize) -> [Vec3; 3] {
        let p = buffer.positions();
        [
            Vec3::from_array(p[index * 3]),
            Vec3::from_array(p[index * 3 + 1]),
            Vec3::from_array(p[index * 3 + 2]),
        ]
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(MeshBuffer::new(0).unwrap_err(), ConfigError::ZeroCapacity);
    }

    #[test]
    fn test_append_writes_two_triangles_per_segment() {
        let mut buffer = MeshBuffer::new(1000).unwrap();
        let (a, b) = rings(8);

        let written = buffer.append(&a, &b);

        assert_eq!(written, 48);
        assert_eq!(buffer.used_count(), 48);
        assert_eq!(buffer.vertex_count(), 48);
        assert_eq!(buffer.triangle_count(), 16);
        assert_eq!(buffer.positions().len(), 48);
        assert_eq!(buffer.normals().len(), 48);
    }

    #[test]
    fn test_append_quad_vertex_order() {
        let mut buffer = MeshBuffer::new(1000).unwrap();
        let (a, b) = rings(4);
        buffer.append(&a, &b);

        let p = buffer.positions();
        assert_eq!(p[0], a.vertices()[0].position.to_array());
        assert_eq!(p[1], b.vertices()[0].position.to_array());
        assert_eq!(p[2], a.vertices()[1].position.to_array());
        assert_eq!(p[3], a.vertices()[1].position.to_array());
        assert_eq!(p[4], b.vertices()[0].position.to_array());
        assert_eq!(p[5], b.vertices()[1].position.to_array());

        // Last quad wraps back to segment 0
        let last = &p[18..24];
        assert_eq!(last[2], a.vertices()[0].position.to_array());
        assert_eq!(last[5], b.vertices()[0].position.to_array());
    }

    #[test]
    fn test_triangle_winding_matches_normals() {
        let mut buffer = MeshBuffer::new(1000).unwrap();
        let (a, b) = rings(8);
        buffer.append(&a, &b);

        let normals = buffer.normals();
        for t in 0..buffer.triangle_count() {
            let [p0, p1, p2] = triangle(&buffer, t);
            let face = (p1 - p0).cross(p2 - p0);
            let vertex_normal = Vec3::from_array(normals[t * 3]);
            assert!(
                face.dot(vertex_normal) > 0.0,
                "triangle {t} faces inward"
            );
        }
    }

    #[test]
    fn test_capacity_saturates_without_overflow() {
        // 8 segments need 48 vertices; give room for 20 usable slots
        let mut buffer = MeshBuffer::new(21).unwrap();
        let (a, b) = rings(8);

        let written = buffer.append(&a, &b);
        assert_eq!(written, 20);
        assert_eq!(buffer.used_count(), 20);
        assert!(buffer.is_saturated());
        // Draw range stops at the last whole triangle
        assert_eq!(buffer.vertex_count(), 18);

        let snapshot = buffer.positions().to_vec();
        assert_eq!(buffer.append(&a, &b), 0);
        assert_eq!(buffer.used_count(), 20);
        assert_eq!(buffer.positions(), snapshot.as_slice());
    }

    #[test]
    fn test_push_vertex_drops_when_full() {
        let mut buffer = MeshBuffer::new(3).unwrap();
        let vertex = RingVertex {
            position: Vec3::ONE,
            normal: Vec3::Y,
        };
        assert!(buffer.push_vertex(&vertex));
        assert!(buffer.push_vertex(&vertex));
        assert!(!buffer.push_vertex(&vertex));
        assert_eq!(buffer.used_count(), 2);
    }

    #[test]
    fn test_reset_keeps_allocation() {
        let mut buffer = MeshBuffer::new(100).unwrap();
        let (a, b) = rings(4);
        buffer.append(&a, &b);
        assert_eq!(buffer.vertex_count(), 24);

        buffer.reset();
        assert_eq!(buffer.used_count(), 0);
        assert_eq!(buffer.vertex_count(), 0);
        assert!(buffer.positions().is_empty());
        assert_eq!(buffer.capacity(), 100);
    }

    #[test]
    fn test_byte_views_cover_draw_range() {
        let mut buffer = MeshBuffer::new(100).unwrap();
        let (a, b) = rings(4);
        buffer.append(&a, &b);
        assert_eq!(buffer.position_bytes().len(), 24 * 3 * 4);
        assert_eq!(buffer.normal_bytes().len(), 24 * 3 * 4);
    }
}

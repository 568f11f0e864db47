use glam::Vec3;

/// Up axis a stroke starts from. Not a magic number - matches the world up of the host scene.
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// Below this cross product length, forward and up are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-4;

/// Vertices emitted per ring segment when two rings are joined (two triangles).
pub const VERTICES_PER_QUAD: usize = 6;

//! Stroke session: turns a stream of stylus points into a growing tube mesh

use airmark_config::StrokeSettings;
use glam::Vec3;
use tracing::{debug, trace, warn};

use crate::constants::VERTICES_PER_QUAD;
use crate::frame::FrameTracker;
use crate::mesh_buffer::MeshBuffer;
use crate::ring::generate_ring_into;
use crate::types::{Frame, Ring};
use crate::validation::{ConfigError, validate_stroke_settings};

/// Lifecycle of a stroke session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// No stroke has been started
    Idle,
    /// A start point is set but no segment has been emitted yet
    Started,
    /// At least one segment has been emitted
    Drawing,
}

/// Result of feeding one point to [`StrokeSession::extend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendOutcome {
    /// No stroke was active; the point became the start of a new one
    Started,
    /// The point was within the minimum distance and was ignored
    TooClose,
    /// A segment was emitted in full
    Extended { vertices: usize },
    /// The buffer is full; only `vertices` of the segment were kept
    Saturated { vertices: usize },
}

impl ExtendOutcome {
    /// Whether the buffer contents changed
    pub fn changed(&self) -> bool {
        match self {
            Self::Started | Self::TooClose => false,
            Self::Extended { .. } => true,
            Self::Saturated { vertices } => *vertices > 0,
        }
    }
}

/// Per-stroke tube painter.
///
/// Owns its vertex buffer and all stroke state. After construction no call
/// allocates: rings are generated into two preallocated scratch rings that are
/// swapped after every accepted point.
pub struct StrokeSession {
    buffer: MeshBuffer,
    tracker: FrameTracker,
    min_distance: f32,
    has_start: bool,
    last_position: Vec3,
    frame: Frame,
    /// Ring at `last_position`; only meaningful while `has_previous_ring`
    previous_ring: Ring,
    has_previous_ring: bool,
    next_ring: Ring,
    ring_count: usize,
    saturation_reported: bool,
}

impl StrokeSession {
    /// Create a session, allocating the vertex buffer up front
    pub fn new(settings: &StrokeSettings) -> Result<Self, ConfigError> {
        validate_stroke_settings(settings)?;
        Ok(Self {
            buffer: MeshBuffer::new(settings.max_vertices)?,
            tracker: FrameTracker::new(),
            min_distance: settings.min_distance,
            has_start: false,
            last_position: Vec3::ZERO,
            frame: Frame::default(),
            previous_ring: Ring::with_segments(settings.radial_segments),
            has_previous_ring: false,
            next_ring: Ring::with_segments(settings.radial_segments),
            ring_count: 0,
            saturation_reported: false,
        })
    }

    /// Start a new stroke at `origin`, discarding the previous one
    pub fn reset(&mut self, origin: Vec3) {
        debug!(
            "StrokeSession::reset: new stroke at ({:.3}, {:.3}, {:.3})",
            origin.x, origin.y, origin.z
        );
        self.last_position = origin;
        self.has_start = true;
        self.buffer.reset();
        self.tracker.reset();
        self.frame = Frame::default();
        self.has_previous_ring = false;
        self.ring_count = 0;
        self.saturation_reported = false;
    }

    /// Extend the stroke to `point` with tube radius `radius`
    pub fn extend(&mut self, point: Vec3, radius: f32) -> ExtendOutcome {
        if !self.has_start {
            self.reset(point);
            return ExtendOutcome::Started;
        }

        let delta = point - self.last_position;
        let distance = delta.length();
        if distance < self.min_distance {
            return ExtendOutcome::TooClose;
        }
        // Only reachable with a zero minimum distance
        let Some(forward) = delta.try_normalize() else {
            return ExtendOutcome::TooClose;
        };

        self.frame = self.tracker.advance(forward);
        generate_ring_into(&mut self.next_ring, point, &self.frame, radius);

        if !self.has_previous_ring {
            // Start ring: same orientation and radius, placed at the previous point
            generate_ring_into(&mut self.previous_ring, self.last_position, &self.frame, radius);
            self.ring_count += 1;
        }

        let written = self.buffer.append(&self.previous_ring, &self.next_ring);

        std::mem::swap(&mut self.previous_ring, &mut self.next_ring);
        self.has_previous_ring = true;
        self.ring_count += 1;
        self.last_position = point;

        trace!(
            "StrokeSession::extend: distance={:.4}, radius={:.4}, wrote {} vertices",
            distance, radius, written
        );

        let expected = self.previous_ring.segments() * VERTICES_PER_QUAD;
        if written < expected {
            if !self.saturation_reported {
                warn!(
                    "Stroke buffer full at {} of {} vertices; further geometry is dropped",
                    self.buffer.used_count(),
                    self.buffer.capacity()
                );
                self.saturation_reported = true;
            }
            return ExtendOutcome::Saturated { vertices: written };
        }

        ExtendOutcome::Extended { vertices: written }
    }

    /// Finish the stroke. The geometry stays in the buffer until the next stroke starts.
    pub fn end(&mut self) {
        if self.has_start {
            debug!(
                "StrokeSession::end: {} rings, {} triangles",
                self.ring_count,
                self.buffer.triangle_count()
            );
        }
        self.has_start = false;
        self.has_previous_ring = false;
    }

    pub fn state(&self) -> StrokeState {
        match (self.has_start, self.ring_count) {
            (false, _) => StrokeState::Idle,
            (true, 0) => StrokeState::Started,
            (true, _) => StrokeState::Drawing,
        }
    }

    /// Whether a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.has_start
    }

    /// Vertex buffer shared with the renderer
    pub fn buffer(&self) -> &MeshBuffer {
        &self.buffer
    }

    /// Last accepted point
    pub fn last_position(&self) -> Vec3 {
        self.last_position
    }

    /// Frame used for the most recent ring
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Rings generated in this stroke, including the start ring
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    pub fn triangle_count(&self) -> usize {
        self.buffer.triangle_count()
    }

    pub fn radial_segments(&self) -> usize {
        self.next_ring.segments()
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }
}

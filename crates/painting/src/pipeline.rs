//! Per-frame stroke pipeline
//!
//! This module connects:
//! - Stylus input (one [`StylusSample`] per rendered frame)
//! - Brush width mapping (pressure to radius)
//! - The stroke session (tube mesh generation)
//!
//! A stroke starts on the frame the tip or middle button goes down, follows
//! the stylus while either is held, and ends on release. The pipeline does
//! not depend on any engine; the host feeds it samples and reads the buffer.

use airmark_config::{BrushSettings, StrokeSettings};
use tracing::debug;

use crate::brush::BrushWidth;
use crate::mesh_buffer::MeshBuffer;
use crate::stroke::{ExtendOutcome, StrokeSession};
use crate::types::StylusSample;
use crate::validation::ConfigError;

/// What a single [`StrokePipeline::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Not drawing
    Idle,
    /// Drawing input went down; a new stroke starts at the sample position
    StrokeStarted,
    /// Drawing continued
    Extended(ExtendOutcome),
    /// Drawing input was released
    StrokeEnded,
}

/// Complete stroke pipeline for one stylus
pub struct StrokePipeline {
    session: StrokeSession,
    brush: BrushWidth,
    was_drawing: bool,
}

impl StrokePipeline {
    pub fn new(stroke: &StrokeSettings, brush: &BrushSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            session: StrokeSession::new(stroke)?,
            brush: BrushWidth::from_settings(brush),
            was_drawing: false,
        })
    }

    /// Feed one frame of stylus input
    pub fn update(&mut self, sample: &StylusSample) -> PipelineEvent {
        let drawing = sample.is_drawing();
        let was_drawing = std::mem::replace(&mut self.was_drawing, drawing);

        match (was_drawing, drawing) {
            (false, true) => {
                debug!("StrokePipeline: drawing input down");
                self.session.reset(sample.position);
                PipelineEvent::StrokeStarted
            }
            (true, true) => {
                let radius = self.brush.width_for_pressure(sample.pressure());
                PipelineEvent::Extended(self.session.extend(sample.position, radius))
            }
            (true, false) => {
                debug!("StrokePipeline: drawing input released");
                self.session.end();
                PipelineEvent::StrokeEnded
            }
            (false, false) => PipelineEvent::Idle,
        }
    }

    /// Set the brush width mapping
    pub fn set_brush(&mut self, brush: BrushWidth) {
        self.brush = brush;
    }

    pub fn brush(&self) -> &BrushWidth {
        &self.brush
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    /// Vertex buffer for the renderer
    pub fn buffer(&self) -> &MeshBuffer {
        self.session.buffer()
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.session.is_stroking()
    }
}

//! Airmark painting system - stylus strokes as variable-width tube meshes
//!
//! This crate turns a tracked stylus path into a triangulated tube:
//! - [`frame`] - Orientation tracking along the path
//! - [`ring`] - Cross-section ring generation
//! - [`mesh_buffer`] - Fixed-capacity vertex arena with a published draw range
//! - [`stroke`] - Stateful per-stroke session
//! - [`brush`] - Pressure to tube radius mapping
//! - [`pipeline`] - Per-frame driver with draw button edge detection
//! - [`validation`] - Configuration checks

pub mod brush;
pub mod constants;
pub mod frame;
pub mod mesh_buffer;
pub mod pipeline;
pub mod ring;
pub mod stroke;
pub mod types;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use frame::*;
pub use mesh_buffer::*;
pub use pipeline::*;
pub use ring::*;
pub use stroke::*;
pub use types::*;
pub use validation::*;

//! Marker-on-surface constraint for Airmark.
//!
//! A tracked marker has no physical surface to press against, so its tip can
//! sink through a virtual whiteboard. This crate corrects the visible pose of
//! the marker so the tip rests on the board instead:
//!
//! - **Plane**: the board as an infinite plane (normal + point)
//! - **Solver**: Free/Locked state machine producing the visible marker pose
//!   and a collision flag for haptics
//!
//! The solver is independent of the painting crate; the host passes the same
//! stylus pose to both each frame.

pub mod plane;
pub mod solver;
pub mod types;

pub use plane::{LOCAL_NORMAL, Plane};
pub use solver::{ConstraintConfigError, MARKER_LOCAL_AXIS, PlaneConstraintSolver};
pub use types::{MarkerPose, SurfacePose};

//! Camera choreography for the dock scene.
//!
//! Maps named camera phases to target positions and animates between
//! them, yielding to the user's orbit controls when they take over.

/// Phase-driven camera transitions and the interaction side channel.
pub mod choreographer;

pub use choreographer::{CameraChoreographer, CameraFrame, CameraPhase};

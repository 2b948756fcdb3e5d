//! Shared utilities for the choreography.
//!
//! Helpers for easing curves and frame pacing.

pub mod easing;
pub mod frame_timing;

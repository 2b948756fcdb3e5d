//! Per-tick output of the crate animator.

use glam::Vec3;

/// Position, Euler rotation (radians) and uniform scale of a scene node.
///
/// Recomputed from phase and elapsed time on every tick; never stored as
/// authoritative state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians (XYZ order).
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl Pose {
    /// Unrotated pose at `position` with the given scale.
    #[must_use]
    pub const fn at(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale,
        }
    }
}

/// Linear interpolation between two Vec3 positions.
#[inline]
#[must_use]
pub fn lerp_vec3(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + (end - start) * t
}

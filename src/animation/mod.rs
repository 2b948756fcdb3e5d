//! Frame-driven animators for the dock scene.
//!
//! Each animator owns a [`clock::PhaseClock`] over its own closed phase
//! enum. The owner sets a target phase, calls `tick(now)` once per frame
//! and gets back a pose plus, on the tick a bounded phase finishes, a
//! [`phase::PhaseCompleted`] event naming the successor from the phase's
//! transition table. Animators never advance themselves; the owner applies
//! the successor.

pub mod clock;
pub mod door;
pub mod image_crate;
pub mod phase;
pub mod pose;
pub mod terminal;

pub use clock::PhaseClock;
pub use door::{
    DoorAnimator, DoorFill, DoorFrame, DoorInput, DoorMaterial, DoorPhase,
    DoorPose, OpacitySource,
};
pub use image_crate::{CrateFrame, CratePhase, ImageCrateAnimator};
pub use phase::{Phase, PhaseCompleted};
pub use pose::Pose;
pub use terminal::TerminalSurface;

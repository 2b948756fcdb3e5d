// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good values
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Frame-driven animation choreography for a 3D container dock scene.
//!
//! An image crate flies in, docks and floats inside a container whose doors
//! swing shut while a mock terminal scrolls across them, and an orbit camera
//! glides between named framings. Every moving part is a small state
//! machine with its own phase clock; nothing here renders, so the crate
//! plugs into any engine that can call a function once per frame.
//!
//! # Key entry points
//!
//! - [`stage::Stage`] - owns all animators and sequences them from UI
//!   signals
//! - [`animation::ImageCrateAnimator`], [`animation::DoorAnimator`],
//!   [`camera::CameraChoreographer`] - the individual animators
//! - [`options::Options`] - timings, path points and targets, loadable from
//!   TOML
//! - [`util::easing::EasingFunction`] - the easing curves
//!
//! # Frame contract
//!
//! Call `tick(now)` once per displayed frame with monotonically increasing
//! timestamps. Ticks never block. Changing a target phase takes effect
//! immediately and discards the previous phase's remaining motion; the
//! pose is always recomputed from phase and elapsed time.

pub mod animation;
pub mod camera;
pub mod error;
pub mod options;
pub mod stage;
pub mod status;
pub mod util;

pub use error::DockyardError;

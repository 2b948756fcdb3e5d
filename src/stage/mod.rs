//! The orchestrating owner of the dock animators.
//!
//! A [`Stage`] holds one crate animator, one door pair and the camera
//! choreographer together with the container status. UI signals pick new
//! target phases; each tick the stage forwards completion events through
//! the animators' transition tables and sequences the cross-animator
//! follow-ups (the crate settling closes the doors, and so on).

mod script;
mod signal;

pub use script::{Script, ScriptStep};
pub use signal::UiSignal;
use web_time::Instant;

use crate::animation::{
    CrateFrame, CratePhase, DoorAnimator, DoorFrame, DoorInput, DoorMaterial,
    DoorPhase, ImageCrateAnimator, PhaseCompleted,
};
use crate::camera::{CameraChoreographer, CameraFrame, CameraPhase};
use crate::error::DockyardError;
use crate::options::Options;
use crate::status::ContainerStatus;

/// Everything a renderer needs from one stage tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageFrame {
    /// Container status the frame was computed under.
    pub status: ContainerStatus,
    /// Image crate output.
    pub image_crate: CrateFrame,
    /// Door output.
    pub doors: DoorFrame,
    /// Camera output.
    pub camera: CameraFrame,
}

/// Owns the animators and sequences them from UI signals.
#[derive(Debug, Clone)]
pub struct Stage {
    image_crate: ImageCrateAnimator,
    doors: DoorAnimator,
    camera: CameraChoreographer,
    status: ContainerStatus,
    status_progress: f32,
    drawer_open: bool,
    /// Phase the choreography wants, shown whenever the drawer is closed.
    scene_camera: CameraPhase,
    terminal_lines: Vec<String>,
}

impl Stage {
    /// Empty dock: crate idle, doors open, status ready.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            image_crate: ImageCrateAnimator::new(options.crate_motion.clone()),
            doors: DoorAnimator::new(options.door.clone()),
            camera: CameraChoreographer::new(options.camera.clone()),
            status: ContainerStatus::Ready,
            status_progress: 0.0,
            drawer_open: false,
            scene_camera: CameraPhase::Default,
            terminal_lines: Vec::new(),
        }
    }

    /// Current container status.
    #[must_use]
    pub fn status(&self) -> ContainerStatus {
        self.status
    }

    /// The crate animator.
    #[must_use]
    pub fn image_crate(&self) -> &ImageCrateAnimator {
        &self.image_crate
    }

    /// The door animator.
    #[must_use]
    pub fn doors(&self) -> &DoorAnimator {
        &self.doors
    }

    /// The camera choreographer.
    #[must_use]
    pub fn camera(&self) -> &CameraChoreographer {
        &self.camera
    }

    /// Whether the side drawer is open.
    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Terminal lines painted on the doors while building.
    #[must_use]
    pub fn terminal_lines(&self) -> &[String] {
        &self.terminal_lines
    }

    /// Apply one UI signal at `now`.
    pub fn signal(&mut self, signal: UiSignal, now: Instant) {
        log::info!("stage signal {signal} (status {})", self.status);
        match signal {
            UiSignal::StartBuild => {
                self.set_status(ContainerStatus::Building);
                self.terminal_lines.clear();
                let _ = self.image_crate.set_phase(CratePhase::Entering, now);
                let _ = self.doors.set_phase(DoorPhase::Open, now);
                self.request_camera(CameraPhase::BuildStart, now);
            }
            UiSignal::BuildSucceeded => {
                self.set_status(ContainerStatus::Running);
                let _ = self.image_crate.set_phase(CratePhase::Floating, now);
                self.swing_doors_open(now);
                self.request_camera(CameraPhase::Running, now);
            }
            UiSignal::BuildFailed => {
                self.set_status(ContainerStatus::Error);
                self.request_camera(CameraPhase::Default, now);
            }
            UiSignal::Stop => {
                self.set_status(ContainerStatus::Ready);
                self.terminal_lines.clear();
                if self.image_crate.phase() != CratePhase::Idle {
                    let _ = self.image_crate.set_phase(CratePhase::Exiting, now);
                }
                self.swing_doors_open(now);
                self.request_camera(CameraPhase::Default, now);
            }
            UiSignal::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                let phase = if self.drawer_open {
                    CameraPhase::DrawerOpen
                } else {
                    self.scene_camera
                };
                let _ = self.camera.set_phase(phase, now);
            }
            UiSignal::InteractionStart => {
                if !self.camera.begin_interaction(self.status) {
                    log::debug!(
                        "camera interaction ignored while {}",
                        self.status
                    );
                }
            }
            UiSignal::InteractionEnd => self.camera.end_interaction(),
        }
    }

    /// [`signal`](Self::signal) by name; unknown names are rejected.
    pub fn signal_named(
        &mut self,
        name: &str,
        now: Instant,
    ) -> Result<(), DockyardError> {
        let signal = name.parse()?;
        self.signal(signal, now);
        Ok(())
    }

    /// Override the container status. Resets the status progress.
    pub fn set_status(&mut self, status: ContainerStatus) {
        if status == self.status {
            return;
        }
        log::debug!("container status {} -> {status}", self.status);
        self.status = status;
        self.status_progress = 0.0;
    }

    /// [`set_status`](Self::set_status) by name; unknown names are rejected.
    pub fn set_status_named(&mut self, name: &str) -> Result<(), DockyardError> {
        self.set_status(name.parse()?);
        Ok(())
    }

    /// Progress of the current status (build progress, warm-up), feeding
    /// the status-driven door opacity.
    pub fn set_status_progress(&mut self, progress: f32) {
        self.status_progress = progress;
    }

    /// Replace the terminal output.
    pub fn set_terminal_lines(&mut self, lines: Vec<String>) {
        self.terminal_lines = lines;
    }

    /// Append one terminal line.
    pub fn push_terminal_line(&mut self, line: impl Into<String>) {
        self.terminal_lines.push(line.into());
    }

    /// Turn automatic camera movement on or off.
    pub fn set_camera_enabled(&mut self, enabled: bool, now: Instant) {
        self.camera.set_enabled(enabled, now);
    }

    /// Report the orbit controls' camera position.
    pub fn sync_camera_position(&mut self, position: glam::Vec3) {
        self.camera.sync_position(position);
    }

    /// Tick every animator at `now` and apply completion follow-ups.
    pub fn tick(&mut self, now: Instant) -> StageFrame {
        let image_crate = self.image_crate.tick(now);
        if let Some(done) = image_crate.completed {
            self.crate_completed(done, now);
        }

        let input = DoorInput {
            material: DoorMaterial::for_status(self.status, self.status_progress),
            status: self.status,
            terminal_lines: &self.terminal_lines,
        };
        let doors = self.doors.tick(now, &input);
        if let Some(next) = doors.completed.and_then(|done| done.next) {
            let _ = self.doors.set_phase(next, now);
        }

        let camera = self.camera.tick(now);

        StageFrame {
            status: self.status,
            image_crate,
            doors,
            camera,
        }
    }

    fn crate_completed(&mut self, done: PhaseCompleted<CratePhase>, now: Instant) {
        let Some(next) = done.next else {
            return;
        };
        let _ = self.image_crate.set_phase(next, now);
        if next == CratePhase::Settled && self.status == ContainerStatus::Building
        {
            let _ = self.doors.set_phase(DoorPhase::Closing, now);
            self.request_camera(CameraPhase::Building, now);
        }
    }

    fn swing_doors_open(&mut self, now: Instant) {
        if matches!(self.doors.phase(), DoorPhase::Closed | DoorPhase::Closing) {
            let _ = self.doors.set_phase(DoorPhase::Opening, now);
        }
    }

    fn request_camera(&mut self, phase: CameraPhase, now: Instant) {
        self.scene_camera = phase;
        if !self.drawer_open {
            let _ = self.camera.set_phase(phase, now);
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

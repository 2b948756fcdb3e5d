use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::animation::clock::{seconds, PhaseClock};
use crate::animation::phase::{parse_phase, Phase, PhaseCompleted};
use crate::animation::pose::lerp_vec3;
use crate::error::DockyardError;
use crate::options::CameraOptions;
use crate::status::ContainerStatus;

/// Named camera framings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPhase {
    /// Overview of the whole dock.
    Default,
    /// Watching the crate fly in.
    BuildStart,
    /// Close on the shut container.
    Building,
    /// Framing the running container.
    Running,
    /// Pulled back while the side drawer covers part of the view.
    DrawerOpen,
}

impl Phase for CameraPhase {
    const KIND: &'static str = "camera";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::BuildStart,
        Self::Building,
        Self::Running,
        Self::DrawerOpen,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::BuildStart => "build_start",
            Self::Building => "building",
            Self::Running => "running",
            Self::DrawerOpen => "drawer_open",
        }
    }

    // Every entry starts a timed move toward the phase's target.
    fn is_time_driven(self) -> bool {
        true
    }

    fn next(self) -> Option<Self> {
        None
    }
}

impl fmt::Display for CameraPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraPhase {
    type Err = DockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_phase(s)
    }
}

/// One tick of camera output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Current phase.
    pub phase: CameraPhase,
    /// New camera position, or `None` when the choreographer is not moving
    /// the camera this frame.
    pub position: Option<Vec3>,
    /// Transition progress; 0 when no transition is running.
    pub progress: f32,
    /// Set on the tick a transition lands on its target.
    pub completed: Option<PhaseCompleted<CameraPhase>>,
    /// Whether the user is dragging/orbiting the camera.
    pub interacting: bool,
}

/// Status in which a manual drag takes the camera away from the
/// choreography.
const INTERACTIVE_STATUS: ContainerStatus = ContainerStatus::Building;

/// Animates the orbit camera between phase targets.
#[derive(Debug, Clone)]
pub struct CameraChoreographer {
    options: CameraOptions,
    clock: PhaseClock<CameraPhase>,
    from: Vec3,
    current: Vec3,
    animating: bool,
    enabled: bool,
    interacting: bool,
}

impl CameraChoreographer {
    /// Choreographer resting on the default phase's target.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        let current = Vec3::from_array(options.default_target);
        Self {
            options,
            clock: PhaseClock::resting(CameraPhase::Default),
            from: current,
            current,
            animating: false,
            enabled: true,
            interacting: false,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CameraPhase {
        self.clock.phase()
    }

    /// Last position the choreographer produced or was told about.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.current
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether the user currently holds the camera.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Whether automatic movement is allowed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Target position for `phase`.
    #[must_use]
    pub fn target(&self, phase: CameraPhase) -> Vec3 {
        let o = &self.options;
        Vec3::from_array(match phase {
            CameraPhase::Default => o.default_target,
            CameraPhase::BuildStart => o.build_start_target,
            CameraPhase::Building => o.building_target,
            CameraPhase::Running => o.running_target,
            CameraPhase::DrawerOpen => o.drawer_open_target,
        })
    }

    /// Transition length.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        seconds(self.options.transition_duration)
    }

    /// Move toward `phase`'s target, starting from the current position.
    ///
    /// Returns `false` if `phase` is already current. The phase is recorded
    /// even while disabled or interacting, but no motion starts then.
    pub fn set_phase(&mut self, phase: CameraPhase, now: Instant) -> bool {
        let previous = self.clock.phase();
        if !self.clock.enter(phase, now) {
            return false;
        }
        log::debug!("camera phase {previous} -> {phase}");
        if self.enabled && !self.interacting {
            self.from = self.current;
            self.animating = true;
        } else {
            self.stop();
        }
        true
    }

    /// [`set_phase`](Self::set_phase) by name; unknown names are rejected.
    pub fn set_phase_named(
        &mut self,
        name: &str,
        now: Instant,
    ) -> Result<bool, DockyardError> {
        let phase = name.parse()?;
        Ok(self.set_phase(phase, now))
    }

    /// Turn automatic movement on or off.
    ///
    /// Disabling abandons the in-flight transition. Enabling resumes toward
    /// the current phase's target if the camera is not already there.
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.resume(now);
        } else {
            self.stop();
        }
    }

    /// Report where the orbit controls put the camera.
    ///
    /// Ignored while a transition is running, since the choreographer owns
    /// the camera then.
    pub fn sync_position(&mut self, position: Vec3) {
        if !self.animating {
            self.current = position;
        }
    }

    /// The user started dragging the camera.
    ///
    /// Only honored while the container is in the interactive status: the
    /// running transition is dropped, the interacting flag is raised and
    /// `true` returned. Otherwise nothing changes and `false` is returned.
    pub fn begin_interaction(&mut self, status: ContainerStatus) -> bool {
        if status != INTERACTIVE_STATUS {
            return false;
        }
        if !self.interacting {
            log::debug!("camera handed to user in phase {}", self.phase());
        }
        self.interacting = true;
        self.stop();
        true
    }

    /// The user let go of the camera.
    pub fn end_interaction(&mut self) {
        self.interacting = false;
    }

    /// Advance to `now`.
    pub fn tick(&mut self, now: Instant) -> CameraFrame {
        let phase = self.clock.phase();
        let mut frame = CameraFrame {
            phase,
            position: None,
            progress: 0.0,
            completed: None,
            interacting: self.interacting,
        };
        if !self.animating {
            return frame;
        }

        let target = self.target(phase);
        let progress = self.clock.progress(now, self.transition_duration());
        frame.progress = progress;
        if progress >= 1.0 {
            // land exactly on the target, no residual drift
            self.current = target;
            self.stop();
            frame.completed = Some(PhaseCompleted::of(phase));
        } else {
            let eased = self.options.easing.evaluate(progress);
            self.current = lerp_vec3(eased, self.from, target);
        }
        frame.position = Some(self.current);
        frame
    }

    fn resume(&mut self, now: Instant) {
        if self.interacting || self.current == self.target(self.phase()) {
            return;
        }
        self.from = self.current;
        self.clock.restart(now);
        self.animating = true;
    }

    fn stop(&mut self) {
        self.animating = false;
        self.clock.settle();
    }
}

impl Default for CameraChoreographer {
    fn default() -> Self {
        Self::new(CameraOptions::default())
    }
}

//! Container door swing, material policy and terminal overlay.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use web_time::{Duration, Instant};

use super::clock::{progress_of, seconds, PhaseClock};
use super::phase::{parse_phase, Phase, PhaseCompleted};
use super::terminal::TerminalSurface;
use crate::error::DockyardError;
use crate::options::DoorOptions;
use crate::status::ContainerStatus;

/// Phases of a container's door pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorPhase {
    /// Swung fully open.
    Open,
    /// Swinging shut, then settling.
    Closing,
    /// Shut.
    Closed,
    /// Swinging open.
    Opening,
}

impl Phase for DoorPhase {
    const KIND: &'static str = "door";
    const ALL: &'static [Self] =
        &[Self::Open, Self::Closing, Self::Closed, Self::Opening];

    fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closing => "closing",
            Self::Closed => "closed",
            Self::Opening => "opening",
        }
    }

    fn is_time_driven(self) -> bool {
        matches!(self, Self::Closing | Self::Opening)
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Closing => Some(Self::Closed),
            Self::Opening => Some(Self::Open),
            Self::Open | Self::Closed => None,
        }
    }
}

impl fmt::Display for DoorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DoorPhase {
    type Err = DockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_phase(s)
    }
}

/// Where door opacity comes from this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpacitySource {
    /// Held at a constant.
    Fixed(f32),
    /// Follows the container status's own progress.
    StatusDriven(f32),
}

impl OpacitySource {
    /// Opacity in `[0, 1]`; NaN resolves to fully opaque.
    #[must_use]
    pub fn resolve(self) -> f32 {
        let (Self::Fixed(value) | Self::StatusDriven(value)) = self;
        if value.is_nan() {
            1.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

/// Door surface fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorFill {
    /// Solid black panel.
    Black,
    /// No panel at all.
    Transparent,
}

/// Fill and opacity source for the doors under one container status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorMaterial {
    /// Panel fill.
    pub fill: DoorFill,
    /// Opacity input for the door animator.
    pub opacity: OpacitySource,
}

impl DoorMaterial {
    /// Lookup over the four container statuses.
    ///
    /// `status_progress` is the status's own progress (build progress while
    /// building, warm-up while running); only the status-driven rows read
    /// it.
    #[must_use]
    pub fn for_status(status: ContainerStatus, status_progress: f32) -> Self {
        let (fill, opacity) = match status {
            ContainerStatus::Building | ContainerStatus::Running => (
                DoorFill::Black,
                OpacitySource::StatusDriven(status_progress),
            ),
            ContainerStatus::Error => (DoorFill::Black, OpacitySource::Fixed(1.0)),
            ContainerStatus::Ready => {
                (DoorFill::Transparent, OpacitySource::Fixed(0.0))
            }
        };
        Self { fill, opacity }
    }
}

/// Per-tick inputs from the owner.
#[derive(Debug, Clone, Copy)]
pub struct DoorInput<'a> {
    /// Fill and opacity for this frame.
    pub material: DoorMaterial,
    /// Status of the owning container.
    pub status: ContainerStatus,
    /// Terminal output to paint while the overlay is active.
    pub terminal_lines: &'a [String],
}

/// Door rotations (radians about Y), opacity and fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorPose {
    /// Left door; `-open_angle` when open, 0 when shut.
    pub left_rotation: f32,
    /// Right door; `+open_angle` when open, 0 when shut.
    pub right_rotation: f32,
    /// Material opacity in `[0, 1]`.
    pub opacity: f32,
    /// Panel fill.
    pub fill: DoorFill,
}

/// One tick of door output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorFrame {
    /// Phase the pose was computed for.
    pub phase: DoorPhase,
    /// Progress through a bounded phase (closing includes the settle
    /// window); 0 for open/closed.
    pub progress: f32,
    /// Pose to apply to the door nodes.
    pub pose: DoorPose,
    /// Set on the single tick where a bounded phase finishes.
    pub completed: Option<PhaseCompleted<DoorPhase>>,
    /// Surface revision while the terminal overlay is showing.
    pub terminal_revision: Option<u64>,
}

/// Status under which the closed doors show terminal output.
const TERMINAL_STATUS: ContainerStatus = ContainerStatus::Building;

/// Drives a container's door pair.
#[derive(Debug, Clone)]
pub struct DoorAnimator {
    options: DoorOptions,
    clock: PhaseClock<DoorPhase>,
    completion_signaled: bool,
    /// Closedness the opening swing starts from.
    opening_from: f32,
    terminal: Option<TerminalSurface>,
}

impl DoorAnimator {
    /// Doors resting open.
    #[must_use]
    pub fn new(options: DoorOptions) -> Self {
        Self {
            options,
            clock: PhaseClock::resting(DoorPhase::Open),
            completion_signaled: false,
            opening_from: 1.0,
            terminal: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DoorPhase {
        self.clock.phase()
    }

    /// Switch to `phase` at `now`; a no-op returning `false` if current.
    ///
    /// Opening starts from wherever the doors are at `now`, so a closing
    /// swing can be reversed without a jump.
    pub fn set_phase(&mut self, phase: DoorPhase, now: Instant) -> bool {
        let previous = self.clock.phase();
        let current = self.closedness(previous, self.clock.elapsed(now));
        if !self.clock.enter(phase, now) {
            return false;
        }
        if phase == DoorPhase::Opening {
            self.opening_from = current.clamp(0.0, 1.0);
        }
        self.completion_signaled = false;
        log::debug!("door phase {previous} -> {phase}");
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

    /// Total length of a bounded phase, settle window included.
    #[must_use]
    pub fn duration(&self, phase: DoorPhase) -> Option<Duration> {
        match phase {
            DoorPhase::Closing => Some(
                seconds(self.options.closing_duration)
                    + seconds(self.options.settle_duration),
            ),
            DoorPhase::Opening => Some(seconds(self.options.opening_duration)),
            DoorPhase::Open | DoorPhase::Closed => None,
        }
    }

    /// The terminal surface, once the overlay has been shown.
    #[must_use]
    pub fn terminal(&self) -> Option<&TerminalSurface> {
        self.terminal.as_ref()
    }

    /// Advance to `now` with this frame's inputs.
    pub fn tick(&mut self, now: Instant, input: &DoorInput<'_>) -> DoorFrame {
        let phase = self.clock.phase();
        let bound = self.duration(phase);
        let progress =
            bound.map_or(0.0, |duration| self.clock.progress(now, duration));
        let closedness = self.closedness(phase, self.clock.elapsed(now));
        let swing = self.options.open_angle_degrees.to_radians();

        let pose = DoorPose {
            left_rotation: -swing * (1.0 - closedness),
            right_rotation: swing * (1.0 - closedness),
            opacity: input.material.opacity.resolve(),
            fill: input.material.fill,
        };

        let completed = if bound.is_some()
            && progress >= 1.0
            && !self.completion_signaled
        {
            self.completion_signaled = true;
            log::debug!("door phase {phase} complete");
            Some(PhaseCompleted::of(phase))
        } else {
            None
        };

        let terminal_revision = if input.status == TERMINAL_STATUS
            && phase == DoorPhase::Closed
        {
            Some(self.paint_terminal(input.terminal_lines, now))
        } else {
            None
        };

        DoorFrame {
            phase,
            progress,
            pose,
            completed,
            terminal_revision,
        }
    }

    /// 0 = fully open, 1 = shut; briefly above 1 while settling.
    #[must_use]
    pub fn closedness(&self, phase: DoorPhase, elapsed: f32) -> f32 {
        let o = &self.options;
        match phase {
            DoorPhase::Open => 0.0,
            DoorPhase::Closed => 1.0,
            DoorPhase::Opening => {
                let eased =
                    o.easing.evaluate(progress_of(elapsed, o.opening_duration));
                self.opening_from * (1.0 - eased)
            }
            DoorPhase::Closing => {
                let swing = seconds(o.closing_duration).as_secs_f32();
                let settle = seconds(o.settle_duration).as_secs_f32();
                let eased = o.easing.evaluate(progress_of(elapsed, swing));
                if elapsed > swing && settle > 0.0 {
                    let s = progress_of(elapsed - swing, settle);
                    eased + o.settle_overshoot * (TAU * s).sin() * (1.0 - s)
                } else {
                    eased
                }
            }
        }
    }

    fn paint_terminal(&mut self, lines: &[String], now: Instant) -> u64 {
        let o = &self.options;
        let surface = self.terminal.get_or_insert_with(|| {
            log::debug!(
                "allocating {}x{} terminal surface",
                o.terminal_columns,
                o.terminal_rows
            );
            TerminalSurface::new(
                o.terminal_columns,
                o.terminal_rows,
                o.cursor_blink_hz,
                now,
            )
        });
        let _ = surface.update(lines, now);
        surface.revision()
    }
}

impl Default for DoorAnimator {
    fn default() -> Self {
        Self::new(DoorOptions::default())
    }
}

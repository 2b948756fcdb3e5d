//! Image crate flight: fly in, dock, settle, float, exit.

use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use web_time::{Duration, Instant};

use super::clock::{seconds, PhaseClock};
use super::phase::{parse_phase, Phase, PhaseCompleted};
use super::pose::{lerp_vec3, Pose};
use crate::error::DockyardError;
use crate::options::CrateOptions;

/// Phases of the image crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CratePhase {
    /// Parked off-stage at scale 0.
    Idle,
    /// Arcing flight from the start point to the container entrance.
    Entering,
    /// Sliding from the entrance into the container.
    Docking,
    /// At rest inside the container.
    Settled,
    /// Bobbing gently inside the container, indefinitely.
    Floating,
    /// Spinning away and shrinking.
    Exiting,
}

impl Phase for CratePhase {
    const KIND: &'static str = "crate";
    const ALL: &'static [Self] = &[
        Self::Idle,
        Self::Entering,
        Self::Docking,
        Self::Settled,
        Self::Floating,
        Self::Exiting,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Entering => "entering",
            Self::Docking => "docking",
            Self::Settled => "settled",
            Self::Floating => "floating",
            Self::Exiting => "exiting",
        }
    }

    fn is_time_driven(self) -> bool {
        matches!(
            self,
            Self::Entering | Self::Docking | Self::Floating | Self::Exiting
        )
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Entering => Some(Self::Docking),
            Self::Docking => Some(Self::Settled),
            Self::Exiting => Some(Self::Idle),
            Self::Idle | Self::Settled | Self::Floating => None,
        }
    }
}

impl fmt::Display for CratePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CratePhase {
    type Err = DockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_phase(s)
    }
}

/// One tick of crate output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrateFrame {
    /// Phase the pose was computed for.
    pub phase: CratePhase,
    /// Progress through a bounded phase; 0 for unbounded ones.
    pub progress: f32,
    /// Pose to apply to the crate node this frame.
    pub pose: Pose,
    /// Set on the single tick where a bounded phase finishes.
    pub completed: Option<PhaseCompleted<CratePhase>>,
}

/// Drives the image crate's pose from its current phase.
#[derive(Debug, Clone)]
pub struct ImageCrateAnimator {
    options: CrateOptions,
    clock: PhaseClock<CratePhase>,
    completion_signaled: bool,
}

impl ImageCrateAnimator {
    /// Animator parked in [`CratePhase::Idle`].
    #[must_use]
    pub fn new(options: CrateOptions) -> Self {
        Self {
            options,
            clock: PhaseClock::resting(CratePhase::Idle),
            completion_signaled: false,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CratePhase {
        self.clock.phase()
    }

    /// Options the animator was built with.
    #[must_use]
    pub fn options(&self) -> &CrateOptions {
        &self.options
    }

    /// Switch to `phase` at `now`, discarding any in-flight progress.
    ///
    /// Returns `false` (and changes nothing) if `phase` is already current.
    pub fn set_phase(&mut self, phase: CratePhase, now: Instant) -> bool {
        let previous = self.clock.phase();
        if !self.clock.enter(phase, now) {
            return false;
        }
        self.completion_signaled = false;
        log::debug!("crate phase {previous} -> {phase}");
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

    /// Length of a bounded phase, `None` for phases without completion.
    #[must_use]
    pub fn duration(&self, phase: CratePhase) -> Option<Duration> {
        match phase {
            CratePhase::Entering => {
                Some(seconds(self.options.entering_duration))
            }
            CratePhase::Docking => Some(seconds(self.options.docking_duration)),
            CratePhase::Exiting => Some(seconds(self.options.exiting_duration)),
            CratePhase::Idle | CratePhase::Settled | CratePhase::Floating => {
                None
            }
        }
    }

    /// Advance to `now` and report the pose plus any completion.
    pub fn tick(&mut self, now: Instant) -> CrateFrame {
        let phase = self.clock.phase();
        let bound = self.duration(phase);
        let progress =
            bound.map_or(0.0, |duration| self.clock.progress(now, duration));
        let pose = self.pose_at(phase, progress, self.clock.elapsed(now));

        let completed = if bound.is_some()
            && progress >= 1.0
            && !self.completion_signaled
        {
            self.completion_signaled = true;
            log::debug!("crate phase {phase} complete");
            Some(PhaseCompleted::of(phase))
        } else {
            None
        };

        CrateFrame {
            phase,
            progress,
            pose,
            completed,
        }
    }

    /// Pose for `phase` at raw `progress`, or `elapsed` seconds for the
    /// continuous floating phase.
    #[must_use]
    pub fn pose_at(&self, phase: CratePhase, progress: f32, elapsed: f32) -> Pose {
        let o = &self.options;
        let p = progress.clamp(0.0, 1.0);
        let eased = o.easing.evaluate(p);
        let center = Vec3::from_array(o.container_center);

        match phase {
            CratePhase::Idle => Pose::at(Vec3::from_array(o.idle_position), 0.0),
            CratePhase::Entering => {
                let start = Vec3::from_array(o.entering_start);
                let end = Vec3::from_array(o.entrance_front);
                let arc = (PI * eased).sin() * o.arc_height;
                let scale = if o.pop_in_window > 0.0 {
                    o.pop_in_easing.evaluate(p / o.pop_in_window)
                } else {
                    1.0
                };
                Pose {
                    position: lerp_vec3(eased, start, end) + Vec3::Y * arc,
                    rotation: Vec3::new(
                        0.0,
                        o.entry_spin_degrees.to_radians() * (1.0 - eased),
                        (TAU * p).sin() * o.wobble_amplitude,
                    ),
                    scale,
                }
            }
            CratePhase::Docking => {
                let front = Vec3::from_array(o.entrance_front);
                Pose::at(lerp_vec3(eased, front, center), 1.0)
            }
            CratePhase::Settled => Pose::at(center, 1.0),
            CratePhase::Floating => {
                let bob =
                    (TAU * o.float_frequency * elapsed).sin() * o.float_amplitude;
                Pose {
                    position: center + Vec3::Y * bob,
                    rotation: Vec3::new(
                        0.0,
                        (o.float_sway_rate * elapsed).sin() * o.float_sway,
                        0.0,
                    ),
                    scale: 1.0,
                }
            }
            CratePhase::Exiting => {
                let exit = Vec3::from_array(o.exit_position);
                Pose {
                    position: lerp_vec3(eased, center, exit),
                    rotation: Vec3::new(
                        0.0,
                        o.exit_spin_degrees.to_radians() * eased,
                        0.0,
                    ),
                    scale: 1.0 - o.exit_shrink * p,
                }
            }
        }
    }
}

impl Default for ImageCrateAnimator {
    fn default() -> Self {
        Self::new(CrateOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn at(start: Instant, secs: f32) -> Instant {
        start + Duration::from_secs_f32(secs)
    }

    fn entering_from(start: Instant) -> ImageCrateAnimator {
        let mut animator = ImageCrateAnimator::default();
        assert!(animator.set_phase(CratePhase::Entering, start));
        animator
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(CratePhase::Entering.next(), Some(CratePhase::Docking));
        assert_eq!(CratePhase::Docking.next(), Some(CratePhase::Settled));
        assert_eq!(CratePhase::Exiting.next(), Some(CratePhase::Idle));
        assert_eq!(CratePhase::Settled.next(), None);
        assert_eq!(CratePhase::Floating.next(), None);
        assert_eq!(CratePhase::Idle.next(), None);
    }

    #[test]
    fn test_idle_is_parked_and_invisible() {
        let mut animator = ImageCrateAnimator::default();
        let frame = animator.tick(Instant::now());
        assert_eq!(frame.phase, CratePhase::Idle);
        assert_eq!(frame.pose.scale, 0.0);
        assert_eq!(frame.pose.position, Vec3::new(-12.0, 8.0, 8.0));
        assert!(frame.completed.is_none());
    }

    #[test]
    fn test_entering_progress_and_completion() {
        let start = Instant::now();
        let mut animator = entering_from(start);

        let first = animator.tick(start);
        assert_eq!(first.progress, 0.0);
        assert!((first.pose.position - Vec3::new(-12.0, 8.0, 8.0)).length() < EPSILON);
        assert!((first.pose.rotation.y - 90f32.to_radians()).abs() < EPSILON);
        assert_eq!(first.pose.scale, 0.0);

        let mid = animator.tick(at(start, 1.5));
        assert!((mid.progress - 0.5).abs() < 1e-6);
        assert!(mid.completed.is_none());
        // eased 0.5 sits on the arc's peak, 1.5 above the straight line
        let line_mid = Vec3::new(-6.0, 5.25, 7.0);
        assert!((mid.pose.position - line_mid - Vec3::Y * 1.5).length() < EPSILON);

        let end = animator.tick(at(start, 3.0));
        assert_eq!(end.progress, 1.0);
        assert_eq!(
            end.completed,
            Some(PhaseCompleted {
                completed: CratePhase::Entering,
                next: Some(CratePhase::Docking),
            })
        );
        assert!((end.pose.position - Vec3::new(0.0, 2.5, 6.0)).length() < EPSILON);
        assert!(end.pose.rotation.y.abs() < EPSILON);
        assert!((end.pose.scale - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let start = Instant::now();
        let mut animator = entering_from(start);

        let fired = (0..=300)
            .map(|i| animator.tick(at(start, i as f32 * 0.02)))
            .filter(|frame| frame.completed.is_some())
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_reentry_does_not_reset_or_refire() {
        let start = Instant::now();
        let mut animator = entering_from(start);
        assert!(animator.tick(at(start, 3.0)).completed.is_some());

        assert!(!animator.set_phase(CratePhase::Entering, at(start, 3.5)));
        let frame = animator.tick(at(start, 3.6));
        assert_eq!(frame.progress, 1.0);
        assert!(frame.completed.is_none());
    }

    #[test]
    fn test_fresh_entry_rearms_completion() {
        let start = Instant::now();
        let mut animator = entering_from(start);
        assert!(animator.tick(at(start, 3.0)).completed.is_some());

        assert!(animator.set_phase(CratePhase::Idle, at(start, 3.1)));
        assert!(animator.set_phase(CratePhase::Entering, at(start, 3.2)));
        assert!(animator.tick(at(start, 4.0)).completed.is_none());
        assert!(animator.tick(at(start, 6.5)).completed.is_some());
    }

    #[test]
    fn test_abort_to_idle_mid_flight() {
        let start = Instant::now();
        let mut animator = entering_from(start);
        let _ = animator.tick(at(start, 1.2));

        assert!(animator.set_phase(CratePhase::Idle, at(start, 1.3)));
        let frame = animator.tick(at(start, 1.31));
        assert_eq!(frame.phase, CratePhase::Idle);
        assert_eq!(
            frame.pose,
            Pose::at(Vec3::new(-12.0, 8.0, 8.0), 0.0)
        );
        assert!(frame.completed.is_none());
    }

    #[test]
    fn test_docking_ends_at_center() {
        let start = Instant::now();
        let mut animator = ImageCrateAnimator::default();
        let _ = animator.set_phase(CratePhase::Docking, start);

        let first = animator.tick(start);
        assert!((first.pose.position - Vec3::new(0.0, 2.5, 6.0)).length() < EPSILON);

        let done = animator.tick(at(start, 2.0));
        assert_eq!(done.pose.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(done.pose.rotation, Vec3::ZERO);
        assert_eq!(
            done.completed.and_then(|c| c.next),
            Some(CratePhase::Settled)
        );
    }

    #[test]
    fn test_settled_is_static() {
        let start = Instant::now();
        let mut animator = ImageCrateAnimator::default();
        let _ = animator.set_phase(CratePhase::Settled, start);
        let a = animator.tick(at(start, 0.1));
        let b = animator.tick(at(start, 9.0));
        assert_eq!(a.pose, b.pose);
        assert_eq!(a.pose.position, Vec3::new(0.0, 1.0, 0.0));
        assert!(b.completed.is_none());
    }

    #[test]
    fn test_floating_bobs_and_never_completes() {
        let start = Instant::now();
        let mut animator = ImageCrateAnimator::default();
        let _ = animator.set_phase(CratePhase::Floating, start);

        // sin(2π·0.5·0.5) = 1 → peak of the bob
        let peak = animator.tick(at(start, 0.5));
        assert!((peak.pose.position.y - 1.08).abs() < EPSILON);
        assert!(
            (peak.pose.rotation.y - (0.3f32 * 0.5).sin() * 0.05).abs() < EPSILON
        );

        for i in 0..100 {
            let frame = animator.tick(at(start, i as f32 * 0.5));
            assert!(frame.completed.is_none());
            assert!((frame.pose.position.y - 1.0).abs() <= 0.08 + EPSILON);
        }
    }

    #[test]
    fn test_exiting_spins_and_shrinks() {
        let start = Instant::now();
        let mut animator = ImageCrateAnimator::default();
        let _ = animator.set_phase(CratePhase::Exiting, start);

        let half = animator.tick(at(start, 0.5));
        assert!((half.pose.scale - 0.9).abs() < EPSILON);

        let done = animator.tick(at(start, 1.0));
        assert!((done.pose.scale - 0.8).abs() < EPSILON);
        assert!((done.pose.rotation.y - 45f32.to_radians()).abs() < EPSILON);
        assert!((done.pose.position - Vec3::new(8.0, 3.0, 6.0)).length() < EPSILON);
        assert_eq!(done.completed.and_then(|c| c.next), Some(CratePhase::Idle));
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let start = Instant::now();
        let options = CrateOptions {
            docking_duration: 0.0,
            ..CrateOptions::default()
        };
        let mut animator = ImageCrateAnimator::new(options);
        let _ = animator.set_phase(CratePhase::Docking, start);
        let frame = animator.tick(start);
        assert_eq!(frame.progress, 1.0);
        assert!(frame.completed.is_some());
    }

    #[test]
    fn test_nan_duration_does_not_stall() {
        let start = Instant::now();
        let options = CrateOptions {
            exiting_duration: f32::NAN,
            ..CrateOptions::default()
        };
        let mut animator = ImageCrateAnimator::new(options);
        let _ = animator.set_phase(CratePhase::Exiting, start);
        let frame = animator.tick(start);
        assert_eq!(frame.progress, 1.0);
        assert!(frame.pose.position.is_finite());
        assert!(frame.completed.is_some());
    }

    #[test]
    fn test_set_phase_named() {
        let now = Instant::now();
        let mut animator = ImageCrateAnimator::default();
        assert!(animator.set_phase_named("floating", now).unwrap());
        assert_eq!(animator.phase(), CratePhase::Floating);

        let err = animator.set_phase_named("hovering", now).unwrap_err();
        assert!(matches!(
            err,
            DockyardError::UnknownPhase { kind: "crate", ref value } if value == "hovering"
        ));
        assert_eq!(animator.phase(), CratePhase::Floating);
    }

    #[test]
    fn test_phase_names_round_trip() {
        for &phase in CratePhase::ALL {
            assert_eq!(phase.to_string().parse::<CratePhase>().unwrap(), phase);
        }
    }
}

//! Per-animator phase clock.
//!
//! Converts wall-clock timestamps into elapsed seconds and normalized
//! progress for the phase an animator is currently in.

use web_time::{Duration, Instant};

use super::phase::Phase;

/// Records when the current phase began.
///
/// `started_at` is `Some` only while the phase's motion is time driven. It
/// is written on phase entry and cleared by [`settle`](Self::settle); it
/// never advances otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseClock<P> {
    phase: P,
    started_at: Option<Instant>,
}

impl<P: Phase> PhaseClock<P> {
    /// Clock resting in `phase` with no start time recorded.
    #[must_use]
    pub const fn resting(phase: P) -> Self {
        Self {
            phase,
            started_at: None,
        }
    }

    /// Phase the clock was last entered with.
    #[must_use]
    pub fn phase(&self) -> P {
        self.phase
    }

    /// When the current phase's motion began, if it is time driven.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Enter `phase` at `now`.
    ///
    /// Re-entering the current phase is a no-op and returns `false`. A
    /// different phase records `now` (or clears the start for static
    /// phases) and returns `true`.
    pub fn enter(&mut self, phase: P, now: Instant) -> bool {
        if phase == self.phase {
            return false;
        }
        self.phase = phase;
        self.started_at = phase.is_time_driven().then_some(now);
        true
    }

    /// Drop the start time; the phase stays current but no longer moves.
    pub fn settle(&mut self) {
        self.started_at = None;
    }

    /// Restart the current phase's motion at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Seconds since phase entry, or 0 when no start is recorded.
    ///
    /// A `now` earlier than the start saturates to 0.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> f32 {
        self.started_at.map_or(0.0, |start| {
            now.saturating_duration_since(start).as_secs_f32()
        })
    }

    /// Normalized progress through a phase lasting `duration`.
    #[must_use]
    pub fn progress(&self, now: Instant, duration: Duration) -> f32 {
        progress_of(self.elapsed(now), duration.as_secs_f32())
    }
}

/// `clamp(elapsed / duration, 0, 1)`.
///
/// Zero, negative or NaN durations and non-finite ratios count as already
/// complete, so an animation never stalls.
#[inline]
#[must_use]
pub fn progress_of(elapsed: f32, duration: f32) -> f32 {
    if duration.is_nan() || duration <= 0.0 {
        return 1.0;
    }
    let ratio = elapsed / duration;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Configured seconds as a `Duration`.
///
/// Negative, non-finite or unrepresentable values become zero, which the
/// clock treats as an instant transition.
#[must_use]
pub fn seconds(secs: f32) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::door::DoorPhase;
    use crate::animation::image_crate::CratePhase;

    #[test]
    fn test_enter_records_start_for_timed_phase() {
        let now = Instant::now();
        let mut clock = PhaseClock::resting(CratePhase::Idle);
        assert_eq!(clock.started_at(), None);

        assert!(clock.enter(CratePhase::Entering, now));
        assert_eq!(clock.phase(), CratePhase::Entering);
        assert_eq!(clock.started_at(), Some(now));
    }

    #[test]
    fn test_enter_static_phase_clears_start() {
        let now = Instant::now();
        let mut clock = PhaseClock::resting(CratePhase::Idle);
        let _ = clock.enter(CratePhase::Docking, now);
        assert!(clock.enter(CratePhase::Settled, now + Duration::from_secs(2)));
        assert_eq!(clock.started_at(), None);
        assert_eq!(clock.elapsed(now + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn test_same_phase_reentry_is_noop() {
        let start = Instant::now();
        let mut clock = PhaseClock::resting(DoorPhase::Open);
        assert!(clock.enter(DoorPhase::Closing, start));

        let later = start + Duration::from_millis(800);
        assert!(!clock.enter(DoorPhase::Closing, later));
        assert_eq!(clock.started_at(), Some(start));
        assert!((clock.elapsed(later) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_progress_is_monotone_and_bounded() {
        let start = Instant::now();
        let mut clock = PhaseClock::resting(CratePhase::Idle);
        let _ = clock.enter(CratePhase::Entering, start);

        let duration = Duration::from_secs(3);
        let mut prev = 0.0;
        for ms in (0..=4000).step_by(50) {
            let p = clock.progress(start + Duration::from_millis(ms), duration);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= prev);
            prev = p;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_earlier_now_saturates() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = PhaseClock::resting(CratePhase::Idle);
        let _ = clock.enter(CratePhase::Exiting, start);
        assert_eq!(clock.elapsed(start - Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn test_degenerate_durations_complete_immediately() {
        assert_eq!(progress_of(0.0, 0.0), 1.0);
        assert_eq!(progress_of(0.0, -2.0), 1.0);
        assert_eq!(progress_of(0.5, f32::NAN), 1.0);
        assert_eq!(progress_of(f32::NAN, 1.0), 1.0);
        assert_eq!(progress_of(f32::INFINITY, 1.0), 1.0);
        assert_eq!(progress_of(1.5, 3.0), 0.5);
    }

    #[test]
    fn test_seconds_rejects_bad_values() {
        assert_eq!(seconds(1.5), Duration::from_millis(1500));
        assert_eq!(seconds(-1.0), Duration::ZERO);
        assert_eq!(seconds(f32::NAN), Duration::ZERO);
        assert_eq!(seconds(f32::INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_settle_and_restart() {
        let start = Instant::now();
        let mut clock = PhaseClock::resting(CratePhase::Idle);
        let _ = clock.enter(CratePhase::Floating, start);
        clock.settle();
        assert_eq!(clock.started_at(), None);
        assert_eq!(clock.phase(), CratePhase::Floating);

        let again = start + Duration::from_secs(3);
        clock.restart(again);
        assert_eq!(clock.started_at(), Some(again));
    }
}

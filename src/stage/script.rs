use web_time::Duration;

use super::signal::UiSignal;
use crate::animation::clock::seconds;
use crate::options::DriverOptions;

/// Timed signal in a [`Script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    /// Offset from the start of the run.
    pub at: Duration,
    /// Signal to send once `at` has passed.
    pub signal: UiSignal,
}

/// Ordered list of timed UI signals, standing in for the demo shell's
/// auto-timers.
#[derive(Debug, Clone, Default)]
pub struct Script {
    steps: Vec<ScriptStep>,
    cursor: usize,
}

impl Script {
    /// Script from steps in any order; they are sorted by time.
    #[must_use]
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|step| step.at);
        Self { steps, cursor: 0 }
    }

    /// Build, run, stop: the sequence the demo plays on its own.
    #[must_use]
    pub fn demo(driver: &DriverOptions) -> Self {
        let build = seconds(driver.build_seconds);
        let run = seconds(driver.run_seconds);
        Self::new(vec![
            ScriptStep {
                at: Duration::ZERO,
                signal: UiSignal::StartBuild,
            },
            ScriptStep {
                at: build,
                signal: UiSignal::BuildSucceeded,
            },
            ScriptStep {
                at: build + run,
                signal: UiSignal::Stop,
            },
        ])
    }

    /// Signals whose time has come, in order; each is returned once.
    pub fn due(&mut self, elapsed: Duration) -> Vec<UiSignal> {
        let pending = &self.steps[self.cursor..];
        let ready = pending.iter().take_while(|step| step.at <= elapsed).count();
        let signals = pending[..ready].iter().map(|step| step.signal).collect();
        self.cursor += ready;
        signals
    }

    /// Whether every step has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Time of the last step.
    #[must_use]
    pub fn length(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |step| step.at)
    }
}

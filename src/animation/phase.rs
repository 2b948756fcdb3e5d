//! Discrete phase sets and their transition tables.

use std::fmt;
use std::str::FromStr;

use crate::error::DockyardError;

/// A closed set of named phases driven by one animator.
///
/// The transition table is [`next`](Phase::next): a time-bounded phase
/// names its successor, unbounded phases return `None` and persist until
/// the caller picks a new target.
pub trait Phase:
    Copy
    + Eq
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = DockyardError>
    + 'static
{
    /// Animator kind, used in error messages and logs.
    const KIND: &'static str;

    /// Every phase in declaration order.
    const ALL: &'static [Self];

    /// Snake-case name, as accepted by [`FromStr`].
    fn name(self) -> &'static str;

    /// Whether motion in this phase depends on elapsed time.
    fn is_time_driven(self) -> bool;

    /// Automatic successor once this phase's progress reaches 1.
    fn next(self) -> Option<Self>;
}

/// Parse a phase by name, failing on anything outside `P::ALL`.
pub fn parse_phase<P: Phase>(value: &str) -> Result<P, DockyardError> {
    P::ALL
        .iter()
        .copied()
        .find(|phase| phase.name() == value.trim())
        .ok_or_else(|| DockyardError::UnknownPhase {
            kind: P::KIND,
            value: value.to_owned(),
        })
}

/// Emitted once per entry into a timed phase, when its progress reaches 1.
///
/// The owning caller consumes it and applies `next` (if any) as the new
/// target phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCompleted<P> {
    /// The phase that just finished.
    pub completed: P,
    /// Successor from the transition table.
    pub next: Option<P>,
}

impl<P: Phase> PhaseCompleted<P> {
    /// Completion event for `phase`, filling `next` from its table.
    #[must_use]
    pub fn of(phase: P) -> Self {
        Self {
            completed: phase,
            next: phase.next(),
        }
    }
}

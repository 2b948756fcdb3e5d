//! Crate-level error types.

use std::fmt;

/// Errors produced by the dockyard crate.
///
/// Timing faults never show up here: a degenerate duration or elapsed time
/// is resolved locally as a completed phase.
#[derive(Debug)]
pub enum DockyardError {
    /// A phase name that does not belong to the animator's phase set.
    UnknownPhase {
        /// Which animator rejected the name (`"crate"`, `"door"`, `"camera"`).
        kind: &'static str,
        /// The offending value, verbatim.
        value: String,
    },
    /// A UI signal name that the stage does not understand.
    UnknownSignal(String),
    /// A container status name outside building/running/error/ready.
    UnknownStatus(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for DockyardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPhase { kind, value } => {
                write!(f, "unknown {kind} phase: {value:?}")
            }
            Self::UnknownSignal(value) => {
                write!(f, "unknown stage signal: {value:?}")
            }
            Self::UnknownStatus(value) => {
                write!(f, "unknown container status: {value:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for DockyardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DockyardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

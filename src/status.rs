//! Container status reported by the surrounding UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DockyardError;

/// High-level status of the container the doors belong to.
///
/// Selects the door material policy and gates the terminal overlay and
/// camera interaction; it is not an animator phase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContainerStatus {
    /// An image build is in progress.
    Building,
    /// The container is up.
    Running,
    /// The last build or run failed.
    Error,
    /// Nothing running; the dock is empty.
    #[default]
    Ready,
}

impl ContainerStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Building, Self::Running, Self::Error, Self::Ready];

    /// Snake-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Running => "running",
            Self::Error => "error",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerStatus {
    type Err = DockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == s.trim())
            .ok_or_else(|| DockyardError::UnknownStatus(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_status_name() {
        for status in ContainerStatus::ALL {
            assert_eq!(status.to_string().parse::<ContainerStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_rejects_unknown_status() {
        let err = "paused".parse::<ContainerStatus>().unwrap_err();
        assert!(matches!(err, DockyardError::UnknownStatus(ref v) if v == "paused"));
    }
}

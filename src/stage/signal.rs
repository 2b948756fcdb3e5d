use std::fmt;
use std::str::FromStr;

use crate::error::DockyardError;

/// Discrete UI events that drive the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSignal {
    /// The user asked for an image build.
    StartBuild,
    /// The build finished and the container is up.
    BuildSucceeded,
    /// The build failed.
    BuildFailed,
    /// Stop the container and clear the dock.
    Stop,
    /// Open or close the right-hand drawer.
    ToggleDrawer,
    /// The user grabbed the orbit camera.
    InteractionStart,
    /// The user released the orbit camera.
    InteractionEnd,
}

impl UiSignal {
    /// Every signal in declaration order.
    pub const ALL: [Self; 7] = [
        Self::StartBuild,
        Self::BuildSucceeded,
        Self::BuildFailed,
        Self::Stop,
        Self::ToggleDrawer,
        Self::InteractionStart,
        Self::InteractionEnd,
    ];

    /// Snake-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StartBuild => "start_build",
            Self::BuildSucceeded => "build_succeeded",
            Self::BuildFailed => "build_failed",
            Self::Stop => "stop",
            Self::ToggleDrawer => "toggle_drawer",
            Self::InteractionStart => "interaction_start",
            Self::InteractionEnd => "interaction_end",
        }
    }
}

impl fmt::Display for UiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UiSignal {
    type Err = DockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|signal| signal.name() == s.trim())
            .ok_or_else(|| DockyardError::UnknownSignal(s.to_owned()))
    }
}

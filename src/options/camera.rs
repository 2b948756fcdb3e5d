use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera phase targets and transition timing.
pub struct CameraOptions {
    /// Transition length between phases, seconds.
    #[schemars(title = "Transition", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub transition_duration: f32,
    /// Transition curve.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Overview of the whole dock.
    #[schemars(skip)]
    pub default_target: [f32; 3],
    /// Watching the crate fly in.
    #[schemars(skip)]
    pub build_start_target: [f32; 3],
    /// Close on the closed container while building.
    #[schemars(skip)]
    pub building_target: [f32; 3],
    /// Framing the running container.
    #[schemars(skip)]
    pub running_target: [f32; 3],
    /// Pulled back and left while the side drawer is open.
    #[schemars(skip)]
    pub drawer_open_target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            transition_duration: 1.2,
            easing: EasingFunction::CubicInOut,
            default_target: [0.0, 6.0, 18.0],
            build_start_target: [-6.0, 5.0, 12.0],
            building_target: [4.0, 4.0, 10.0],
            running_target: [0.0, 3.0, 9.0],
            drawer_open_target: [-4.0, 6.0, 16.0],
        }
    }
}

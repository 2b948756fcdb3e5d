use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Image Crate", inline)]
#[serde(default)]
/// Flight path, timing and flourish amplitudes for the image crate.
pub struct CrateOptions {
    /// Fly-in duration in seconds.
    #[schemars(title = "Entering", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub entering_duration: f32,
    /// Dock duration in seconds.
    #[schemars(title = "Docking", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub docking_duration: f32,
    /// Exit duration in seconds.
    #[schemars(title = "Exiting", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub exiting_duration: f32,
    /// Where the fly-in starts.
    #[schemars(skip)]
    pub entering_start: [f32; 3],
    /// Front of the container entrance: fly-in end, dock start.
    #[schemars(skip)]
    pub entrance_front: [f32; 3],
    /// Resting point inside the container.
    #[schemars(skip)]
    pub container_center: [f32; 3],
    /// Off-axis point the crate leaves toward.
    #[schemars(skip)]
    pub exit_position: [f32; 3],
    /// Off-stage parking spot while idle.
    #[schemars(skip)]
    pub idle_position: [f32; 3],
    /// Peak height of the fly-in arc above the straight line.
    #[schemars(title = "Arc Height", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub arc_height: f32,
    /// Y spin at the start of the fly-in, unwinding to zero.
    #[schemars(skip)]
    pub entry_spin_degrees: f32,
    /// Z wobble amplitude during the fly-in, radians.
    #[schemars(title = "Wobble", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub wobble_amplitude: f32,
    /// Share of the fly-in spent popping the scale from 0 to 1.
    #[schemars(skip)]
    pub pop_in_window: f32,
    /// Vertical bob amplitude while floating.
    #[schemars(title = "Float Amplitude", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub float_amplitude: f32,
    /// Vertical bob frequency while floating, Hz.
    #[schemars(skip)]
    pub float_frequency: f32,
    /// Y sway amplitude while floating, radians.
    #[schemars(skip)]
    pub float_sway: f32,
    /// Y sway angular rate while floating, rad/s.
    #[schemars(skip)]
    pub float_sway_rate: f32,
    /// Y rotation reached at the end of the exit.
    #[schemars(skip)]
    pub exit_spin_degrees: f32,
    /// Fraction of the scale lost over the exit.
    #[schemars(skip)]
    pub exit_shrink: f32,
    /// Curve for the fly-in, dock and exit paths.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Curve for the scale pop at the start of the fly-in.
    #[schemars(skip)]
    pub pop_in_easing: EasingFunction,
}

impl Default for CrateOptions {
    fn default() -> Self {
        Self {
            entering_duration: 3.0,
            docking_duration: 2.0,
            exiting_duration: 1.0,
            entering_start: [-12.0, 8.0, 8.0],
            entrance_front: [0.0, 2.5, 6.0],
            container_center: [0.0, 1.0, 0.0],
            exit_position: [8.0, 3.0, 6.0],
            idle_position: [-12.0, 8.0, 8.0],
            arc_height: 1.5,
            entry_spin_degrees: 90.0,
            wobble_amplitude: 0.1,
            pop_in_window: 0.15,
            float_amplitude: 0.08,
            float_frequency: 0.5,
            float_sway: 0.05,
            float_sway_rate: 0.3,
            exit_spin_degrees: 45.0,
            exit_shrink: 0.2,
            easing: EasingFunction::CubicInOut,
            pop_in_easing: EasingFunction::BounceOut,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Container Doors", inline)]
#[serde(default)]
/// Door swing timing and terminal overlay layout.
pub struct DoorOptions {
    /// Main closing swing in seconds.
    #[schemars(title = "Closing", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub closing_duration: f32,
    /// Settle window after the closing swing, seconds.
    #[schemars(title = "Settle", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub settle_duration: f32,
    /// Peak settle overshoot as a fraction of the swing.
    #[schemars(title = "Overshoot", range(min = 0.0, max = 0.1), extend("step" = 0.005))]
    pub settle_overshoot: f32,
    /// Opening swing in seconds.
    #[schemars(title = "Opening", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub opening_duration: f32,
    /// Door angle when fully open. Left swings to -angle, right to +angle.
    #[schemars(skip)]
    pub open_angle_degrees: f32,
    /// Swing curve.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Terminal overlay width in character cells.
    #[schemars(skip)]
    pub terminal_columns: usize,
    /// Terminal overlay height in character cells.
    #[schemars(skip)]
    pub terminal_rows: usize,
    /// Cursor blink rate, Hz. Zero keeps the cursor solid.
    #[schemars(skip)]
    pub cursor_blink_hz: f32,
}

impl Default for DoorOptions {
    fn default() -> Self {
        Self {
            closing_duration: 2.0,
            settle_duration: 0.15,
            settle_overshoot: 0.02,
            opening_duration: 2.0,
            open_angle_degrees: 90.0,
            easing: EasingFunction::CubicInOut,
            terminal_columns: 48,
            terminal_rows: 12,
            cursor_blink_hz: 2.0,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Driver", inline)]
#[serde(default)]
/// Headless frame loop pacing and the demo build script timings.
pub struct DriverOptions {
    /// Target frame rate (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
    /// Seconds after start-build before the build succeeds.
    #[schemars(title = "Build Time", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub build_seconds: f32,
    /// Seconds the container runs before it is stopped.
    #[schemars(title = "Run Time", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub run_seconds: f32,
    /// Seconds between mock terminal lines while building.
    #[schemars(skip)]
    pub terminal_line_interval: f32,
    /// Log a pose summary every this many frames (0 = never).
    #[schemars(skip)]
    pub log_every_frames: u64,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            target_fps: 60,
            build_seconds: 9.0,
            run_seconds: 4.0,
            terminal_line_interval: 0.4,
            log_every_frames: 30,
        }
    }
}

//! Centralized choreography options with TOML preset support.
//!
//! Every tweakable timing, path point and amplitude lives here. Options
//! serialize to/from TOML so a scene can be retuned without a rebuild.

mod camera;
mod crate_motion;
mod door;
mod driver;

use std::path::Path;

pub use camera::CameraOptions;
pub use crate_motion::CrateOptions;
pub use door::DoorOptions;
pub use driver::DriverOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DockyardError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[door]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Image crate flight path and timing.
    pub crate_motion: CrateOptions,
    /// Container door swing and terminal overlay.
    pub door: DoorOptions,
    /// Camera phase targets and transitions.
    pub camera: CameraOptions,
    /// Headless driver pacing and demo script.
    #[schemars(skip)]
    pub driver: DriverOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, DockyardError> {
        toml::from_str(content)
            .map_err(|e| DockyardError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DockyardError> {
        let content =
            std::fs::read_to_string(path).map_err(DockyardError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded choreography options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DockyardError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DockyardError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DockyardError::Io)?;
        }
        std::fs::write(path, content).map_err(DockyardError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

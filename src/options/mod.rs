//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings (walker motion, camera placement, control step
//! sizes, trajectory file paths, keybindings) are consolidated here. Every
//! section uses `#[serde(default)]` so a partial TOML file (e.g. only
//! overriding `[motion]`) works correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VoltaError;
use crate::input::KeyBindings;
use crate::trajectory::walker::ARRIVE_TOLERANCE;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Walker motion parameters.
    pub motion: MotionOptions,
    /// Orbit camera placement.
    pub camera: CameraOptions,
    /// Per-keypress step sizes.
    pub controls: ControlOptions,
    /// Animated object setup.
    pub scene: SceneOptions,
    /// Keyboard binding map.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// [`VoltaError::Io`] on read failure, [`VoltaError::OptionsParse`] on
    /// malformed TOML.
    pub fn load(path: &Path) -> Result<Self, VoltaError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| VoltaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// [`VoltaError::Io`] on write failure, [`VoltaError::OptionsParse`] if
    /// serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), VoltaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VoltaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Motion
// ---------------------------------------------------------------------------

/// Walker motion parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionOptions {
    /// Walker speed in world units per second.
    pub speed: f32,
    /// Distance below which a walker counts as arrived at its waypoint.
    pub arrive_tolerance: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            arrive_tolerance: ARRIVE_TOLERANCE,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// Orbit camera placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Focus point the camera orbits around.
    pub focus: [f32; 3],
    /// Orbit radius (constant at runtime).
    pub radius: f32,
    /// Initial yaw in degrees (-90 looks down world -Z).
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            focus: [0.0, 0.0, -3.0],
            radius: 6.0,
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Per-keypress step sizes for the discrete keyboard surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlOptions {
    /// Orbit angle per keypress, in degrees.
    pub orbit_step: f32,
    /// Pan distance per keypress, in world units.
    pub pan_step: f32,
    /// Scale change per keypress.
    pub scale_step: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            orbit_step: 2.0,
            pan_step: 0.1,
            scale_step: 0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Animated object setup: one entry per cube.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Loop origin for each object's default square trajectory.
    pub origins: Vec<[f32; 3]>,
    /// Backing trajectory file for each object (save/load target).
    pub trajectory_files: Vec<String>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            origins: vec![[0.0, 0.0, -3.0], [1.5, 0.0, -3.0]],
            trajectory_files: vec![
                "trajectory1.txt".into(),
                "trajectory2.txt".into(),
            ],
        }
    }
}

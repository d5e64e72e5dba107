//! Keyboard surface: key strings mapped to serializable action tags which
//! convert to engine [`Command`](crate::engine::Command)s.
//!
//! Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
//! `"ArrowLeft"`, `"Escape"`), so a windowed front-end can feed
//! `format!("{code:?}")` straight into [`KeyBindings::lookup`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::Command;
use crate::options::ControlOptions;
use crate::scene::{RotationMode, SpinDirection};

/// Serializable tag for every key-boundable action.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// ArrowLeft = "orbit_left"
/// KeyO = "save_trajectory"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Orbit the camera upward (pitch +).
    OrbitUp,
    /// Orbit the camera downward (pitch -).
    OrbitDown,
    /// Orbit the camera left (yaw -).
    OrbitLeft,
    /// Orbit the camera right (yaw +).
    OrbitRight,
    /// Pan the focus along view-forward.
    PanForward,
    /// Pan the focus against view-forward.
    PanBack,
    /// Pan the focus against view-right.
    PanLeft,
    /// Pan the focus along view-right.
    PanRight,
    /// Spin both cubes around X, negative direction.
    SpinXReverse,
    /// Spin both cubes around X, positive direction.
    SpinXForward,
    /// Spin both cubes around Y, negative direction.
    SpinYReverse,
    /// Spin both cubes around Y, positive direction.
    SpinYForward,
    /// Spin both cubes around Z, positive direction.
    SpinZForward,
    /// Spin both cubes around Z, negative direction.
    SpinZReverse,
    /// Increase the shared cube scale.
    ScaleUp,
    /// Decrease the shared cube scale (floored).
    ScaleDown,
    /// Make the first cube the active object.
    SelectFirst,
    /// Make the second cube the active object.
    SelectSecond,
    /// Save the active object's trajectory to its file.
    SaveTrajectory,
    /// Load the active object's trajectory from its file.
    LoadTrajectory,
    /// Quit the demo loop.
    Quit,
}

impl KeyAction {
    /// Convert to a [`Command`], drawing step sizes from `controls`.
    #[must_use]
    pub fn to_command(self, controls: &ControlOptions) -> Command {
        let orbit = controls.orbit_step;
        let pan = controls.pan_step;
        let scale = controls.scale_step;
        match self {
            Self::OrbitUp => Command::OrbitCamera {
                delta_yaw: 0.0,
                delta_pitch: orbit,
            },
            Self::OrbitDown => Command::OrbitCamera {
                delta_yaw: 0.0,
                delta_pitch: -orbit,
            },
            Self::OrbitLeft => Command::OrbitCamera {
                delta_yaw: -orbit,
                delta_pitch: 0.0,
            },
            Self::OrbitRight => Command::OrbitCamera {
                delta_yaw: orbit,
                delta_pitch: 0.0,
            },
            Self::PanForward => Command::PanCamera {
                forward: pan,
                right: 0.0,
            },
            Self::PanBack => Command::PanCamera {
                forward: -pan,
                right: 0.0,
            },
            Self::PanLeft => Command::PanCamera {
                forward: 0.0,
                right: -pan,
            },
            Self::PanRight => Command::PanCamera {
                forward: 0.0,
                right: pan,
            },
            Self::SpinXReverse => Command::SetSpin {
                mode: RotationMode::AroundX(SpinDirection::Reverse),
            },
            Self::SpinXForward => Command::SetSpin {
                mode: RotationMode::AroundX(SpinDirection::Forward),
            },
            Self::SpinYReverse => Command::SetSpin {
                mode: RotationMode::AroundY(SpinDirection::Reverse),
            },
            Self::SpinYForward => Command::SetSpin {
                mode: RotationMode::AroundY(SpinDirection::Forward),
            },
            Self::SpinZForward => Command::SetSpin {
                mode: RotationMode::AroundZ(SpinDirection::Forward),
            },
            Self::SpinZReverse => Command::SetSpin {
                mode: RotationMode::AroundZ(SpinDirection::Reverse),
            },
            Self::ScaleUp => Command::AdjustScale { delta: scale },
            Self::ScaleDown => Command::AdjustScale { delta: -scale },
            Self::SelectFirst => Command::SelectObject { index: 0 },
            Self::SelectSecond => Command::SelectObject { index: 1 },
            Self::SaveTrajectory => Command::SaveTrajectory,
            Self::LoadTrajectory => Command::LoadTrajectory,
            Self::Quit => Command::Quit,
        }
    }
}

/// Maps physical key strings to [`KeyAction`] tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action tag.
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        // WASD/FG pick the spin axis+direction, E/Q scale, arrows orbit,
        // IJKL pan, digits select, O/P save/load the active trajectory.
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::SpinXReverse),
            ("KeyS".into(), KeyAction::SpinXForward),
            ("KeyA".into(), KeyAction::SpinYReverse),
            ("KeyD".into(), KeyAction::SpinYForward),
            ("KeyF".into(), KeyAction::SpinZForward),
            ("KeyG".into(), KeyAction::SpinZReverse),
            ("KeyE".into(), KeyAction::ScaleUp),
            ("KeyQ".into(), KeyAction::ScaleDown),
            ("ArrowUp".into(), KeyAction::OrbitUp),
            ("ArrowDown".into(), KeyAction::OrbitDown),
            ("ArrowLeft".into(), KeyAction::OrbitLeft),
            ("ArrowRight".into(), KeyAction::OrbitRight),
            ("KeyI".into(), KeyAction::PanForward),
            ("KeyK".into(), KeyAction::PanBack),
            ("KeyJ".into(), KeyAction::PanLeft),
            ("KeyL".into(), KeyAction::PanRight),
            ("Digit1".into(), KeyAction::SelectFirst),
            ("Digit2".into(), KeyAction::SelectSecond),
            ("KeyO".into(), KeyAction::SaveTrajectory),
            ("KeyP".into(), KeyAction::LoadTrajectory),
            ("Escape".into(), KeyAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action bound to a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind (or rebind) a key string to an action.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let _ = self.bindings.insert(key.into(), action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_spin_scale_and_quit_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("KeyW"), Some(KeyAction::SpinXReverse));
        assert_eq!(bindings.lookup("KeyD"), Some(KeyAction::SpinYForward));
        assert_eq!(bindings.lookup("KeyG"), Some(KeyAction::SpinZReverse));
        assert_eq!(bindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(bindings.lookup("KeyZ"), None);
    }

    #[test]
    fn actions_pick_up_configured_step_sizes() {
        let controls = ControlOptions {
            orbit_step: 4.0,
            pan_step: 0.25,
            scale_step: 0.2,
        };
        assert_eq!(
            KeyAction::OrbitLeft.to_command(&controls),
            Command::OrbitCamera {
                delta_yaw: -4.0,
                delta_pitch: 0.0
            }
        );
        assert_eq!(
            KeyAction::PanForward.to_command(&controls),
            Command::PanCamera {
                forward: 0.25,
                right: 0.0
            }
        );
        assert_eq!(
            KeyAction::ScaleDown.to_command(&controls),
            Command::AdjustScale { delta: -0.2 }
        );
    }

    #[test]
    fn bindings_round_trip_through_toml() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyZ", KeyAction::OrbitUp);
        let text = toml::to_string(&bindings).unwrap();
        let parsed: KeyBindings = toml::from_str(&text).unwrap();
        assert_eq!(bindings, parsed);
    }
}

//! The engine's complete interactive vocabulary.
//!
//! Every operation the keyboard surface (or a programmatic caller) can
//! trigger is a `Command` value passed to
//! [`Engine::execute`](super::Engine::execute). The engine never cares how a
//! command was produced — key press, script, or test all look identical.

use crate::scene::RotationMode;

/// A discrete or parameterized operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Adjust the orbit camera's yaw and pitch by the given degrees.
    OrbitCamera {
        /// Yaw delta in degrees (positive = clockwise seen from above).
        delta_yaw: f32,
        /// Pitch delta in degrees (clamped at the poles by the camera).
        delta_pitch: f32,
    },

    /// Pan the camera focus along its forward and right axes.
    PanCamera {
        /// World units along the view-forward axis.
        forward: f32,
        /// World units along the view-right axis.
        right: f32,
    },

    /// Raise or lower the camera focus along the world Y axis.
    RaiseCamera {
        /// World units along +Y.
        delta: f32,
    },

    /// Set the spin axis/direction applied to both cubes.
    SetSpin {
        /// The new rotation mode (a single axis or none).
        mode: RotationMode,
    },

    /// Grow or shrink the shared uniform scale (floored at the minimum).
    AdjustScale {
        /// Scale delta (typically ±0.1).
        delta: f32,
    },

    /// Make the object at `index` the target of trajectory save/load.
    SelectObject {
        /// Zero-based object index.
        index: usize,
    },

    /// Write the active object's trajectory to its backing file.
    SaveTrajectory,

    /// Replace the active object's trajectory from its backing file,
    /// re-seating its walker on success. A failed load keeps both the
    /// stale trajectory and the walker state.
    LoadTrajectory,

    /// Request loop termination.
    Quit,
}

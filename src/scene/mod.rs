//! Animated objects and the model-transform builder.
//!
//! Each cube owns its trajectory and walker — no file-scope state. The spin
//! axis/direction is a single tagged [`RotationMode`] value passed explicitly
//! into [`model_matrix`], so axis exclusivity holds by construction instead
//! of by hand-maintained boolean flags.

use std::path::PathBuf;

use glam::{Mat4, Vec3};

use crate::trajectory::walker::Walker;
use crate::trajectory::Trajectory;

/// Sense of rotation around a spin axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    /// Positive angle growth.
    Forward,
    /// Negative angle growth.
    Reverse,
}

impl SpinDirection {
    /// Sign applied to the running rotation angle.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

/// Which axis (if any) the cubes spin around, and in which direction.
/// At most one axis is ever active — guaranteed by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// No spin.
    #[default]
    None,
    /// Spin around the world X axis.
    AroundX(SpinDirection),
    /// Spin around the world Y axis.
    AroundY(SpinDirection),
    /// Spin around the world Z axis.
    AroundZ(SpinDirection),
}

impl RotationMode {
    /// Rotation matrix for this mode at the given running angle (radians).
    #[must_use]
    pub fn matrix(self, angle: f32) -> Mat4 {
        match self {
            Self::None => Mat4::IDENTITY,
            Self::AroundX(dir) => Mat4::from_rotation_x(angle * dir.sign()),
            Self::AroundY(dir) => Mat4::from_rotation_y(angle * dir.sign()),
            Self::AroundZ(dir) => Mat4::from_rotation_z(angle * dir.sign()),
        }
    }
}

/// Model transform for one object: `T * S * R` — translate to `position`,
/// uniform `scale`, then the spin rotation. Rotation applies first to the
/// vertices, so objects spin in place at their walker position.
#[must_use]
pub fn model_matrix(
    position: Vec3,
    scale: f32,
    mode: RotationMode,
    angle: f32,
) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_scale(Vec3::splat(scale))
        * mode.matrix(angle)
}

/// One animated cube: its waypoint loop, follower state, and the text file
/// its trajectory is saved to / loaded from.
#[derive(Debug, Clone)]
pub struct AnimatedObject {
    /// The closed waypoint loop this object follows.
    pub trajectory: Trajectory,
    /// Follower state (position + target index).
    pub walker: Walker,
    /// Backing file for save/load-active-trajectory.
    pub file: PathBuf,
}

impl AnimatedObject {
    /// Object seated at the start of `trajectory`, persisted at `file`.
    #[must_use]
    pub fn new(trajectory: Trajectory, file: PathBuf) -> Self {
        let walker = Walker::new(&trajectory);
        Self {
            trajectory,
            walker,
            file,
        }
    }

    /// Advance this object's walker by one frame.
    pub fn step(&mut self, elapsed: f32, speed: f32, tolerance: f32) {
        self.walker.step(&self.trajectory, elapsed, speed, tolerance);
    }

    /// Replace the trajectory wholesale and re-seat the walker at its start.
    pub fn replace_trajectory(&mut self, trajectory: Trajectory) {
        self.trajectory = trajectory;
        self.walker.reset(&self.trajectory);
    }

    /// Current world-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.walker.position()
    }
}

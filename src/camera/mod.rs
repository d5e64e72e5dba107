//! Orbit camera: a focus point circled at fixed radius by yaw/pitch angles.
//!
//! All angles are degrees at the API surface; trigonometry converts to
//! radians internally. The eye position is derived, never stored — it is
//! recomputed from `(focus, radius, yaw, pitch)` on every read.

use glam::{Mat4, Vec3};

/// Hard pitch clamp, in degrees. Keeps the view direction away from the
/// poles so the look-at up vector never degenerates.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

const WORLD_UP: Vec3 = Vec3::Y;

/// Orbit camera state. The radius is fixed after construction; `rotate` and
/// the pan operations are the only mutators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    focus: Vec3,
    radius: f32,
    /// Heading angle in degrees. `-90` looks down the world -Z axis.
    yaw: f32,
    /// Elevation angle in degrees, always within
    /// `[-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES]`.
    pitch: f32,
}

impl OrbitCamera {
    /// Camera orbiting `focus` at `radius`, initially looking down -Z
    /// (yaw -90, pitch 0) so the eye sits on the +Z side of the focus.
    #[must_use]
    pub fn new(focus: Vec3, radius: f32) -> Self {
        Self::with_angles(focus, radius, -90.0, 0.0)
    }

    /// Camera with explicit starting angles (degrees). Pitch is clamped.
    #[must_use]
    pub fn with_angles(focus: Vec3, radius: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            focus,
            radius,
            yaw,
            pitch: pitch
                .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES),
        }
    }

    /// The point the camera looks at and orbits around.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Orbit radius (constant after construction).
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Adjust yaw and pitch by the given deltas (degrees). Yaw is
    /// unconstrained; pitch is hard-clamped away from the poles.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    }

    /// Pan the focus along the view-forward axis.
    pub fn move_forward(&mut self, delta: f32) {
        self.focus += self.forward() * delta;
    }

    /// Pan the focus along the view-right axis.
    ///
    /// `right = forward × world_up`, which cannot fully degenerate because
    /// the pitch clamp keeps forward off the world up axis.
    pub fn move_right(&mut self, delta: f32) {
        let right = self.forward().cross(WORLD_UP).normalize();
        self.focus += right * delta;
    }

    /// Raise or lower the focus along the world Y axis. Vertical pan is
    /// axis-aligned, not view-relative — an intentional asymmetry with
    /// `move_forward`/`move_right`.
    pub fn move_up(&mut self, delta: f32) {
        self.focus.y += delta;
    }

    /// Unit view direction from eye toward focus, from the yaw/pitch
    /// spherical-to-Cartesian conversion.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
            .normalize()
    }

    /// Derived eye position: `radius` behind the focus along the view
    /// direction.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.focus - self.forward() * self.radius
    }

    /// Right-handed look-at matrix from the eye toward the focus with world
    /// up `(0, 1, 0)`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.focus, WORLD_UP)
    }
}

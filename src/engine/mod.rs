//! The single-threaded frame engine: owns all mutable state (objects,
//! camera, spin mode, scale) and advances it once per frame.
//!
//! Control flow per frame: the external loop feeds elapsed time to
//! [`Engine::tick`], which steps each object's walker, then calls
//! [`Engine::submit_frame`] to hand transforms to the render sink. Keyboard
//! events arrive as [`Command`]s through [`Engine::execute`]. One logical
//! thread owns everything; no operation blocks.

pub mod command;

pub use command::Command;
use glam::Vec3;

use crate::camera::OrbitCamera;
use crate::options::Options;
use crate::render::RenderSink;
use crate::scene::{model_matrix, AnimatedObject, RotationMode};
use crate::trajectory::Trajectory;

/// Lower bound on the shared cube scale.
pub const MIN_SCALE: f32 = 0.1;

/// Owns the demo's entire mutable state and applies commands and frame
/// ticks to it.
#[derive(Debug)]
pub struct Engine {
    objects: Vec<AnimatedObject>,
    active: usize,
    camera: OrbitCamera,
    spin: RotationMode,
    scale: f32,
    /// Running clock in seconds; doubles as the spin angle in radians.
    clock: f32,
    quit: bool,
    options: Options,
}

impl Engine {
    /// Build the engine from options: one animated object per configured
    /// origin (each on a default square loop), plus the orbit camera.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let origins = options.scene.origins.len();
        let files = options.scene.trajectory_files.len();
        if origins != files {
            log::warn!(
                "scene lists {origins} origin(s) but {files} trajectory \
                 file(s); extras are dropped"
            );
        }

        let objects = options
            .scene
            .origins
            .iter()
            .zip(&options.scene.trajectory_files)
            .map(|(origin, file)| {
                AnimatedObject::new(
                    Trajectory::square(Vec3::from_array(*origin), 2.0),
                    file.into(),
                )
            })
            .collect();

        let camera = OrbitCamera::with_angles(
            Vec3::from_array(options.camera.focus),
            options.camera.radius,
            options.camera.yaw,
            options.camera.pitch,
        );

        Self {
            objects,
            active: 0,
            camera,
            spin: RotationMode::None,
            scale: 1.0,
            clock: 0.0,
            quit: false,
            options,
        }
    }

    /// The animated objects, in index order.
    #[must_use]
    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    /// The object currently targeted by trajectory save/load, or `None`
    /// when the scene has no objects.
    #[must_use]
    pub fn active_object(&self) -> Option<&AnimatedObject> {
        self.objects.get(self.active)
    }

    /// Index of the active object.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Current spin mode applied to all objects.
    #[must_use]
    pub fn spin(&self) -> RotationMode {
        self.spin
    }

    /// Shared uniform scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Running clock in seconds.
    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Whether a quit command has been received.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Advance the clock and step every walker by `dt` seconds. Positions
    /// are updated here, before [`Engine::submit_frame`] reads them for the
    /// same frame.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        let speed = self.options.motion.speed;
        let tolerance = self.options.motion.arrive_tolerance;
        for obj in &mut self.objects {
            obj.step(dt, speed, tolerance);
        }
    }

    /// Hand each object's model matrix, the shared view matrix, and the
    /// camera eye position to the sink.
    pub fn submit_frame(&self, sink: &mut impl RenderSink) {
        let view = self.camera.view_matrix();
        let eye = self.camera.eye();
        for obj in &self.objects {
            let model =
                model_matrix(obj.position(), self.scale, self.spin, self.clock);
            sink.submit(model, view, eye);
        }
    }

    /// Look up a key string in the configured bindings and execute the
    /// bound command, if any. Returns `true` if a command ran.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        let command = action.to_command(&self.options.controls);
        self.execute(command);
        true
    }

    /// Apply a single command to the engine state.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::OrbitCamera {
                delta_yaw,
                delta_pitch,
            } => self.camera.rotate(delta_yaw, delta_pitch),
            Command::PanCamera { forward, right } => {
                self.camera.move_forward(forward);
                self.camera.move_right(right);
            }
            Command::RaiseCamera { delta } => self.camera.move_up(delta),
            Command::SetSpin { mode } => self.spin = mode,
            Command::AdjustScale { delta } => {
                self.scale = (self.scale + delta).max(MIN_SCALE);
            }
            Command::SelectObject { index } => {
                if index < self.objects.len() {
                    self.active = index;
                } else {
                    log::warn!(
                        "select-object {index} ignored: only {} object(s)",
                        self.objects.len()
                    );
                }
            }
            Command::SaveTrajectory => self.save_active(),
            Command::LoadTrajectory => self.load_active(),
            Command::Quit => self.quit = true,
        }
    }

    fn save_active(&self) {
        let Some(obj) = self.objects.get(self.active) else {
            log::warn!("save-trajectory ignored: scene has no objects");
            return;
        };
        if let Err(e) = obj.trajectory.save(&obj.file) {
            log::error!(
                "failed to save trajectory for object {}: {e}",
                self.active
            );
        }
    }

    /// Replace the active object's trajectory from its file. On failure the
    /// stale trajectory and the walker's index both stay untouched — the
    /// walker only resets on the success path.
    fn load_active(&mut self) {
        let Some(obj) = self.objects.get_mut(self.active) else {
            log::warn!("load-trajectory ignored: scene has no objects");
            return;
        };
        match Trajectory::load(&obj.file) {
            Ok(trajectory) => obj.replace_trajectory(trajectory),
            Err(e) => {
                log::error!(
                    "failed to load trajectory for object {}: {e}",
                    self.active
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    /// Records every submission for assertions.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(Mat4, Mat4, Vec3)>,
    }

    impl RenderSink for RecordingSink {
        fn submit(&mut self, model: Mat4, view: Mat4, eye: Vec3) {
            self.frames.push((model, view, eye));
        }
    }

    fn engine() -> Engine {
        Engine::new(Options::default())
    }

    #[test]
    fn builds_one_object_per_configured_origin() {
        let e = engine();
        assert_eq!(e.objects().len(), 2);
        assert_eq!(e.objects()[0].position(), Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(e.objects()[1].position(), Vec3::new(1.5, 0.0, -3.0));
    }

    #[test]
    fn tick_advances_clock_and_walkers() {
        let mut e = engine();
        e.tick(0.5); // first step only advances each walker's target index
        e.tick(0.5);
        assert_eq!(e.clock(), 1.0);
        let p = e.objects()[0].position();
        assert!((p - Vec3::new(0.5, 0.0, -3.0)).length() < 1e-5);
    }

    #[test]
    fn objects_animate_independently() {
        let mut e = engine();
        for _ in 0..240 {
            e.tick(1.0 / 60.0);
        }
        let offset = e.objects()[1].position() - e.objects()[0].position();
        // Same loop shape at different origins: constant offset between them.
        assert!((offset - Vec3::new(1.5, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn submit_frame_emits_one_call_per_object() {
        let mut e = engine();
        e.tick(0.25);
        let mut sink = RecordingSink::default();
        e.submit_frame(&mut sink);
        assert_eq!(sink.frames.len(), 2);

        let (model, view, eye) = sink.frames[0];
        assert_eq!(model.w_axis.truncate(), e.objects()[0].position());
        assert!(view.abs_diff_eq(e.camera().view_matrix(), 1e-6));
        assert_eq!(eye, e.camera().eye());
    }

    #[test]
    fn spin_mode_is_mutually_exclusive_by_construction() {
        let mut e = engine();
        assert!(e.handle_key("KeyW"));
        assert_eq!(
            e.spin(),
            RotationMode::AroundX(crate::scene::SpinDirection::Reverse)
        );
        // A second axis key replaces, never combines.
        assert!(e.handle_key("KeyF"));
        assert_eq!(
            e.spin(),
            RotationMode::AroundZ(crate::scene::SpinDirection::Forward)
        );
    }

    #[test]
    fn scale_is_floored_at_the_minimum() {
        let mut e = engine();
        for _ in 0..30 {
            e.execute(Command::AdjustScale { delta: -0.1 });
        }
        assert!((e.scale() - MIN_SCALE).abs() < 1e-6);
        e.execute(Command::AdjustScale { delta: 0.1 });
        assert!((e.scale() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn select_object_switches_the_save_load_target() {
        let mut e = engine();
        assert_eq!(e.active_index(), 0);
        e.execute(Command::SelectObject { index: 1 });
        assert_eq!(e.active_index(), 1);
        // Out-of-range selection is ignored.
        e.execute(Command::SelectObject { index: 7 });
        assert_eq!(e.active_index(), 1);
    }

    #[test]
    fn empty_scene_ignores_save_and_load() {
        let mut options = Options::default();
        options.scene.origins = vec![];
        options.scene.trajectory_files = vec![];
        let mut e = Engine::new(options);
        assert!(e.objects().is_empty());
        assert!(e.active_object().is_none());

        // Both commands must be no-ops rather than aborting the process.
        e.execute(Command::SaveTrajectory);
        e.execute(Command::LoadTrajectory);
        assert!(e.objects().is_empty());
    }

    #[test]
    fn mismatched_scene_lists_build_the_shorter_count() {
        let mut options = Options::default();
        options.scene.origins = vec![[0.0, 0.0, -3.0], [1.5, 0.0, -3.0]];
        options.scene.trajectory_files = vec!["only_one.txt".into()];
        let e = Engine::new(options);
        assert_eq!(e.objects().len(), 1);
    }

    #[test]
    fn quit_command_sets_the_flag() {
        let mut e = engine();
        assert!(!e.should_quit());
        assert!(e.handle_key("Escape"));
        assert!(e.should_quit());
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut e = engine();
        assert!(!e.handle_key("KeyZ"));
    }

    #[test]
    fn save_then_load_round_trips_through_the_engine() {
        let mut options = Options::default();
        let dir = std::env::temp_dir();
        options.scene.trajectory_files = vec![
            dir.join("volta_engine_t1.txt").to_string_lossy().into_owned(),
            dir.join("volta_engine_t2.txt").to_string_lossy().into_owned(),
        ];
        let mut e = Engine::new(options);

        // Walk object 0 away from its start, then save + reload: the
        // trajectory is unchanged and the walker re-seats at point 0.
        for _ in 0..120 {
            e.tick(1.0 / 60.0);
        }
        let before = e.objects()[0].trajectory.clone();
        e.execute(Command::SaveTrajectory);
        e.execute(Command::LoadTrajectory);
        assert_eq!(e.objects()[0].trajectory, before);
        assert_eq!(e.objects()[0].position(), before.point(0));
        assert_eq!(e.objects()[0].walker.target_index(), 0);

        std::fs::remove_file(&e.objects()[0].file).unwrap();
    }

    #[test]
    fn failed_load_keeps_stale_trajectory_and_walker_state() {
        let mut options = Options::default();
        options.scene.trajectory_files = vec![
            "/nonexistent/volta_t1.txt".into(),
            "/nonexistent/volta_t2.txt".into(),
        ];
        let mut e = Engine::new(options);
        for _ in 0..120 {
            e.tick(1.0 / 60.0);
        }
        let position = e.objects()[0].position();
        let index = e.objects()[0].walker.target_index();
        let trajectory = e.objects()[0].trajectory.clone();

        e.execute(Command::LoadTrajectory);

        assert_eq!(e.objects()[0].position(), position);
        assert_eq!(e.objects()[0].walker.target_index(), index);
        assert_eq!(e.objects()[0].trajectory, trajectory);
    }

    #[test]
    fn pan_commands_move_the_camera_focus() {
        let mut e = engine();
        let before = e.camera().focus();
        e.execute(Command::PanCamera {
            forward: 1.0,
            right: 0.0,
        });
        let after = e.camera().focus();
        assert!((after - before).length() > 0.99);
        e.execute(Command::RaiseCamera { delta: 2.0 });
        assert_eq!(e.camera().focus().y, after.y + 2.0);
    }
}

//! The render sink seam.
//!
//! This crate performs no rendering. Once per frame per object, the engine
//! hands a model matrix, the shared view matrix, and the camera world
//! position to whatever [`RenderSink`] the caller supplies — a GPU
//! front-end, a logger, or a test recorder.

use glam::{Mat4, Vec3};

/// Consumer of per-object frame output.
pub trait RenderSink {
    /// Accept one object's transform for the current frame.
    ///
    /// `model` positions/orients/scales the object, `view` is the camera
    /// look-at transform shared by all objects this frame, and `eye` is the
    /// camera world position (for lighting).
    fn submit(&mut self, model: Mat4, view: Mat4, eye: Vec3);
}

/// Sink that logs each submission at debug level. Stands in for a renderer
/// in the headless demo binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn submit(&mut self, model: Mat4, _view: Mat4, eye: Vec3) {
        let position = model.w_axis.truncate();
        log::debug!("draw: object at {position:?}, eye {eye:?}");
    }
}

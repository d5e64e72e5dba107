// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Graphics math: intentional casts and exact float comparisons
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Core of a minimal real-time 3D demo: two cubes follow closed waypoint
//! loops while an orbit camera circles a focus point, all driven by a
//! keyboard command surface.
//!
//! Rendering, windowing, and input plumbing live outside this crate. The
//! external loop supplies elapsed time to [`engine::Engine::tick`], feeds
//! key strings to [`engine::Engine::handle_key`], and receives per-object
//! transforms through the [`render::RenderSink`] trait.
//!
//! # Key entry points
//!
//! - [`engine::Engine`] — owns all state, applies [`engine::Command`]s
//! - [`trajectory::Trajectory`] / [`trajectory::walker::Walker`] — waypoint
//!   loops and the follower motion model
//! - [`camera::OrbitCamera`] — yaw/pitch orbit around a focus point
//! - [`options::Options`] — runtime configuration with TOML presets

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod trajectory;
pub mod util;

pub use engine::{Command, Engine};
pub use error::VoltaError;

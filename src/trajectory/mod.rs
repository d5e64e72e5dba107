//! Waypoint trajectories: closed loops of world-space points with plain-text
//! persistence.
//!
//! A trajectory file is whitespace-tokenized float triples, one `x y z` point
//! per successful parse — no header, no count prefix, no comments:
//!
//! ```text
//! 0.0 0.0 -3.0
//! 2.0 0.0 -3.0
//! 2.0 2.0 -3.0
//! ```
//!
//! Parsing stops at the first non-numeric token and keeps whatever points
//! were read up to that position (partial load, no fatal error); the
//! truncation is logged. A file that produces zero points is rejected, since
//! a [`Walker`](walker::Walker) requires at least one waypoint.

pub mod walker;

use std::path::Path;

use glam::Vec3;

use crate::error::VoltaError;

/// An ordered, non-empty loop of waypoints. The last point conceptually
/// connects back to the first (the walker wraps its target index).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Vec3>,
}

impl Trajectory {
    /// Build a trajectory from an explicit point list.
    ///
    /// # Errors
    /// [`VoltaError::NoWaypoints`] if `points` is empty.
    pub fn new(points: Vec<Vec3>) -> Result<Self, VoltaError> {
        if points.is_empty() {
            return Err(VoltaError::NoWaypoints);
        }
        Ok(Self { points })
    }

    /// Axis-aligned square loop in the XY plane: `origin`, then counter-
    /// clockwise with the given side length. The default loop shape used
    /// when no trajectory file has been loaded.
    #[must_use]
    pub fn square(origin: Vec3, side: f32) -> Self {
        Self {
            points: vec![
                origin,
                origin + Vec3::new(side, 0.0, 0.0),
                origin + Vec3::new(side, side, 0.0),
                origin + Vec3::new(0.0, side, 0.0),
            ],
        }
    }

    /// Number of waypoints (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The waypoint list.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// The waypoint at `index`, wrapping past the end of the loop.
    #[must_use]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index % self.points.len()]
    }

    /// Load a trajectory from a whitespace-delimited text file.
    ///
    /// Stops at the first unparsable token, keeping the points read so far.
    ///
    /// # Errors
    /// [`VoltaError::Io`] if the file cannot be read;
    /// [`VoltaError::EmptyTrajectory`] if no complete point was parsed.
    pub fn load(path: &Path) -> Result<Self, VoltaError> {
        let text = std::fs::read_to_string(path)?;
        let (points, truncated) = parse_waypoints(&text);
        if truncated {
            log::warn!(
                "trajectory {} truncated at a malformed token: kept {} point(s)",
                path.display(),
                points.len()
            );
        }
        if points.is_empty() {
            return Err(VoltaError::EmptyTrajectory(path.to_path_buf()));
        }
        log::info!(
            "loaded trajectory {} ({} waypoints)",
            path.display(),
            points.len()
        );
        Ok(Self { points })
    }

    /// Write the trajectory as one `x y z` line per point, replacing any
    /// existing content.
    ///
    /// # Errors
    /// [`VoltaError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VoltaError> {
        let mut out = String::new();
        for p in &self.points {
            out.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
        }
        std::fs::write(path, out)?;
        log::info!(
            "saved trajectory {} ({} waypoints)",
            path.display(),
            self.points.len()
        );
        Ok(())
    }
}

/// Parse whitespace-separated float triples. Returns the parsed points and
/// whether parsing stopped early (malformed token or incomplete final
/// triple).
fn parse_waypoints(text: &str) -> (Vec<Vec3>, bool) {
    let mut points = Vec::new();
    let mut triple = [0.0f32; 3];
    let mut filled = 0;

    for token in text.split_whitespace() {
        let Ok(value) = token.parse::<f32>() else {
            return (points, true);
        };
        triple[filled] = value;
        filled += 1;
        if filled == 3 {
            points.push(Vec3::from_array(triple));
            filled = 0;
        }
    }

    // A trailing partial triple is dropped, same as a parse stop.
    (points, filled != 0)
}

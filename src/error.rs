//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the volta crate.
#[derive(Debug)]
pub enum VoltaError {
    /// Generic I/O failure (trajectory file open/read/write).
    Io(std::io::Error),
    /// A trajectory file yielded no usable waypoints.
    EmptyTrajectory(PathBuf),
    /// A trajectory was constructed from an empty point list.
    NoWaypoints,
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VoltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptyTrajectory(path) => {
                write!(f, "no waypoints parsed from {}", path.display())
            }
            Self::NoWaypoints => {
                write!(f, "a trajectory requires at least one waypoint")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VoltaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VoltaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

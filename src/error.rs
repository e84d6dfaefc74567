//! Crate-level error types.

use std::fmt;

use crate::skeleton::BoneId;

/// Errors produced by the ikedit crate.
///
/// Editing and rendering never fail; errors only surface while building a
/// tree or loading/saving options.
#[derive(Debug)]
pub enum EditorError {
    /// The bone id does not belong to the tree it was used with.
    UnknownBone(BoneId),
    /// The bone already carries an effector.
    EffectorExists(BoneId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBone(id) => write!(f, "unknown bone {id}"),
            Self::EffectorExists(id) => {
                write!(f, "bone {id} already has an effector")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

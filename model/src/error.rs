use thiserror::Error;

use crate::coord::Coord;

/// Everything that can go wrong between reading the first input line and
/// having a map ready to render. The display form is the line printed to
/// the user.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("ERROR: Invalid configuration line '{line}': {reason}")]
    InvalidConfig { line: String, reason: String },

    #[error("ERROR: Invalid entity line '{line}': {reason}")]
    InvalidEntity { line: String, reason: String },

    #[error("ERROR: Invalid timeline value '{value}' for entity '{tag}'")]
    InvalidTimelineValue { tag: String, value: String },

    #[error("ERROR: Missing timeline values for entity '{tag}': expected {expected}, got {got}")]
    MissingTimelineValues {
        tag: String,
        expected: usize,
        got: usize,
    },

    #[error("ERROR: Entity '{tag}' at ({row}, {col}) is outside the {size}x{size} map")]
    OutOfBounds {
        tag: String,
        row: Coord,
        col: Coord,
        size: Coord,
    },

    #[error("ERROR: Cannot place '{tag}' at ({row}, {col}): cell already holds '{glyph}'")]
    CellOccupied {
        tag: String,
        row: Coord,
        col: Coord,
        glyph: char,
    },

    #[error("ERROR: Could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("ERROR: Invalid scene file: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReadError {
    pub(crate) fn config(line: &str, reason: impl Into<String>) -> Self {
        ReadError::InvalidConfig {
            line: line.trim().to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn entity(line: &str, reason: impl Into<String>) -> Self {
        ReadError::InvalidEntity {
            line: line.trim().to_string(),
            reason: reason.into(),
        }
    }
}

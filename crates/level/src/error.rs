//! Errors raised while validating level input at the load boundary.
//! Runtime queries never fail; they return `None` or `Path::NoPath` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Coordinate;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level layout has no cells")]
    EmptyLayout,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown tile glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    #[error("coordinate ({}, {}) is outside the level", .0.x, .0.y)]
    OutOfBounds(Coordinate),
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid level config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid level file: {0}")]
    LevelFile(#[from] serde_json::Error),
}

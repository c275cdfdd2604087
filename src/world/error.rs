use crate::world::Position;
use std::path::PathBuf;

/// Errors raised while building a [`crate::Grid`], either directly or from a
/// world description.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("failed to read world file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("world description must begin with `GRID <width> <height>`")]
    MissingGridHeader,
    #[error("duplicate GRID header")]
    DuplicateGridHeader,
    #[error("malformed directive `{0}`")]
    Syntax(String),
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: i32,
        height: i32,
    },
    #[error("position {0} already belongs to a tunnel")]
    DuplicateTunnel(Position),
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<WorldError>,
    },
}

impl WorldError {
    pub(crate) fn at_line(self, line: usize) -> Self {
        WorldError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

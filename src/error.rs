//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for operations on a cube that can be rejected. A rejected
/// operation commits no mutation: the cube is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// An axis token that is not one of the three recognized values.
    #[error("unrecognized axis `{0}`, expected one of `x`, `y`, `z`")]
    InvalidAxis(String),
    /// A direction or move token that is not part of the vocabulary.
    #[error("unrecognized move or direction token `{0}`")]
    InvalidDirection(String),
    /// A layer index that does not name an inner layer of the cube.
    #[error("layer {layer} is not an inner layer of a size-{size} cube")]
    InvalidLayer {
        /// The rejected layer index.
        layer: usize,
        /// The edge length of the cube.
        size: usize,
    },
    /// A row/column pair outside the face grid.
    #[error("position ({row}, {col}) is out of range for a size-{size} face")]
    IndexOutOfRange {
        /// The rejected row index.
        row: usize,
        /// The rejected column index.
        col: usize,
        /// The edge length of the face.
        size: usize,
    },
}

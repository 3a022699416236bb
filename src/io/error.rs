//! Error types for maze construction, generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Construction or CLI parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid accessor called with a position outside the grid
    ///
    /// The carving routines bounds-check every step before touching the grid,
    /// so this only surfaces from direct misuse of the accessors.
    OutOfBounds {
        /// The offending position (`row`, `col`)
        position: [i32; 2],
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Two positions are not one direction step apart
    NotAdjacent {
        /// First maze cell
        from: [i32; 2],
        /// Second maze cell
        to: [i32; 2],
    },

    /// `generate` was called on a generator that already produced its maze
    AlreadyGenerated,

    /// Failed to save a rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output target cannot be used
    InvalidOutput {
        /// Description of what's wrong with the output target
        reason: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the grid (size {}x{})",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::NotAdjacent { from, to } => {
                write!(
                    f,
                    "Cells ({}, {}) and ({}, {}) are not one step apart",
                    from[0], from[1], to[0], to[1]
                )
            }
            Self::AlreadyGenerated => {
                write!(f, "Maze has already been generated")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidOutput { reason } => {
                write!(f, "Invalid output: {reason}")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid output error
pub fn invalid_output(reason: &impl ToString) -> MazeError {
    MazeError::InvalidOutput {
        reason: reason.to_string(),
    }
}

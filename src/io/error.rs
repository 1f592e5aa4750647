//! Error types for parsing, assembly, and motif scanning

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solve operations
///
/// The three algorithmic variants are kept distinct so callers can tell a
/// structurally inconsistent tile set apart from one that never parsed;
/// none of them is ever downgraded to a wrong-but-silent numeric result.
#[derive(Debug)]
pub enum SolveError {
    /// Input text does not describe a valid tile set
    MalformedInput {
        /// Description of what is wrong with the input
        reason: String,
    },

    /// No remaining tile orientation satisfies a cell's constraints
    ///
    /// Fatal: the input violates the unique-greedy-assignment assumption the
    /// solver depends on. Nothing is skipped or guessed.
    UnsatisfiableConstraint {
        /// Grid column of the unmatched cell
        x: usize,
        /// Grid row of the unmatched cell
        y: usize,
        /// Tiles still in the pool when the cell failed
        remaining: usize,
    },

    /// No orientation of the stitched image contains the motif
    PatternNotFound {
        /// Number of orientations searched
        orientations: usize,
    },

    /// Failed to read an input file
    InputRead {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to export a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { reason } => {
                write!(f, "Malformed input: {reason}")
            }
            Self::UnsatisfiableConstraint { x, y, remaining } => {
                write!(
                    f,
                    "No tile orientation satisfies the constraints at ({x}, {y}) with {remaining} tiles remaining"
                )
            }
            Self::PatternNotFound { orientations } => {
                write!(
                    f,
                    "Motif not found in any of {orientations} image orientations"
                )
            }
            Self::InputRead { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputRead { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solve results
pub type Result<T> = std::result::Result<T, SolveError>;

/// Create a malformed-input error
pub fn malformed(reason: impl Into<String>) -> SolveError {
    SolveError::MalformedInput {
        reason: reason.into(),
    }
}

impl From<std::io::Error> for SolveError {
    fn from(err: std::io::Error) -> Self {
        Self::InputRead {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

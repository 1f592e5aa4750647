//! Jigsaw assembly of square bitmap tiles with motif detection
//!
//! Reconstructs the unique grid arrangement of a set of square tiles whose
//! borders pair up with neighbouring tiles, stitches the assembled grid into
//! a single bitmap with tile borders removed, then searches that bitmap
//! across all eight orientations for a fixed motif and scores the cells the
//! motif leaves uncovered.

#![forbid(unsafe_code)]

/// Edge classification, grid assembly, stitching, motif scanning, and scoring
pub mod algorithm;
/// Input parsing, CLI orchestration, error handling, and PNG rendering
pub mod io;
/// Bitmap transforms and tile geometry
pub mod spatial;

pub use algorithm::pipeline::{Solution, solve};
pub use io::error::{Result, SolveError};

//! Input/output operations and error handling

/// Command-line interface and solve orchestration
pub mod cli;
/// Error types for parsing, assembly, and motif scanning
pub mod error;
/// Text parsing of tile blocks into tile values
pub mod parser;
/// Progress display for grid assembly
pub mod progress;
/// PNG export of stitched images with motif highlighting
pub mod render;

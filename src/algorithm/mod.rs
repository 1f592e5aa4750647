//! Grid assembly and scoring pipeline

/// Greedy row-major grid assembly from edge constraints
pub mod assembly;
/// Edge frequency classification for boundary detection
pub mod edges;
/// Motif point-set detection across bitmap orientations
pub mod motif;
/// End-to-end solve entry points and scoring
pub mod pipeline;
/// Border removal and concatenation of an assembled grid
pub mod stitch;

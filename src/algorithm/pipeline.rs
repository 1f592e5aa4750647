//! End-to-end solve entry points and scoring

use ndarray::Array2;

use crate::algorithm::assembly::{GridSolver, PartialGrid};
use crate::algorithm::motif::{self, Motif};
use crate::algorithm::stitch::stitch;
use crate::io::error::{Result, malformed};
use crate::io::parser::parse_tiles;
use crate::spatial::transform::Pixels;

/// Integer outputs of one complete solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Product of the four corner tile identifiers
    pub corner_product: u64,
    /// Set cells of the oriented stitched image not covered by any motif match
    pub roughness: usize,
}

/// Product of the tile identifiers at the four grid corners
///
/// # Errors
///
/// Returns [`crate::SolveError::MalformedInput`] when a corner position is
/// unfilled; grids produced by the solver are always full.
pub fn corner_product(grid: &PartialGrid) -> Result<u64> {
    let last = grid.size().saturating_sub(1);
    let corners = [(0, 0), (last, 0), (0, last), (last, last)];
    corners
        .iter()
        .map(|&(x, y)| {
            grid.placed_id(x, y)
                .ok_or_else(|| malformed(format!("corner position ({x}, {y}) is unfilled")))
        })
        .try_fold(1_u64, |product, id| Ok(product * id?))
}

/// Mark every cell covered by any motif match instance
///
/// Overlapping instances collapse onto the same mask cells, so each covered
/// cell is counted once by [`roughness`].
pub fn coverage_mask(dim: (usize, usize), motif: &Motif, anchors: &[[usize; 2]]) -> Array2<bool> {
    let mut covered = Array2::from_elem(dim, false);
    for anchor in anchors {
        for offset in motif.offsets() {
            if let Some(cell) = covered.get_mut((anchor[0] + offset[0], anchor[1] + offset[1])) {
                *cell = true;
            }
        }
    }
    covered
}

/// Count the set cells the coverage mask leaves unclaimed
pub fn roughness(image: &Pixels, coverage: &Array2<bool>) -> usize {
    image
        .iter()
        .zip(coverage.iter())
        .filter(|&(&set, &covered)| set && !covered)
        .count()
}

/// Parse an input text and assemble its grid
///
/// # Errors
///
/// Returns [`crate::SolveError::MalformedInput`] for unparsable input and
/// [`crate::SolveError::UnsatisfiableConstraint`] when the tile set admits no
/// greedy assembly.
pub fn assemble(input: &str) -> Result<PartialGrid> {
    GridSolver::new(parse_tiles(input)?)?.solve()
}

/// Compute both puzzle outputs for an input text with the default motif
///
/// # Errors
///
/// Propagates any parse, assembly, or scan failure.
pub fn solve(input: &str) -> Result<Solution> {
    solve_with_motif(input, &Motif::sea_monster())
}

/// Compute both puzzle outputs for an input text and a supplied motif
///
/// # Errors
///
/// Propagates any parse, assembly, or scan failure.
pub fn solve_with_motif(input: &str, motif: &Motif) -> Result<Solution> {
    let grid = assemble(input)?;
    let product = corner_product(&grid)?;
    let image = stitch(&grid)?;
    let (oriented, anchors) = motif::scan(&image, motif)?;
    let covered = coverage_mask(oriented.dim(), motif, &anchors);
    Ok(Solution {
        corner_product: product,
        roughness: roughness(&oriented, &covered),
    })
}

/// Corner product straight from an input text
///
/// Stops after assembly; the stitched image and motif are never needed.
///
/// # Errors
///
/// Propagates any parse or assembly failure.
pub fn corner_product_for(input: &str) -> Result<u64> {
    corner_product(&assemble(input)?)
}

/// Roughness straight from an input text, using the default motif
///
/// # Errors
///
/// Propagates any parse, assembly, or scan failure.
pub fn roughness_for(input: &str) -> Result<usize> {
    Ok(solve(input)?.roughness)
}

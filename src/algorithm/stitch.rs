//! Border removal and concatenation of an assembled grid

use ndarray::Array2;

use crate::algorithm::assembly::PartialGrid;
use crate::io::error::{Result, malformed};
use crate::spatial::tile::Tile;
use crate::spatial::transform::Pixels;

/// Trim every placed tile and concatenate the interiors in grid order
///
/// Tiles in the same grid row are joined pixel-row by pixel-row and the grid
/// rows stacked vertically, producing one square bitmap of side
/// `size * (N - 2)` for tile side `N`. Deterministic and side-effect free
/// given a full grid.
///
/// # Errors
///
/// Returns [`crate::SolveError::MalformedInput`] when the grid has unfilled
/// positions. The solver only ever produces full grids, so this guards
/// direct misuse.
pub fn stitch(grid: &PartialGrid) -> Result<Pixels> {
    if !grid.is_full() {
        return Err(malformed(format!(
            "cannot stitch a grid with {} of {} positions filled",
            grid.filled(),
            grid.size() * grid.size()
        )));
    }

    let size = grid.size();
    let trimmed: Vec<Tile> = (0..size * size)
        .filter_map(|position| grid.placement(position).map(Tile::trim))
        .collect();
    let inner = trimmed.first().map_or(0, Tile::side);
    let side = size * inner;

    let image = Array2::from_shape_fn((side, side), |(row, col)| {
        let position = (row / inner) * size + col / inner;
        trimmed.get(position).is_some_and(|tile| {
            tile.pixels()
                .get((row % inner, col % inner))
                .copied()
                .unwrap_or(false)
        })
    });

    Ok(image)
}

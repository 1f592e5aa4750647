//! Greedy row-major grid assembly from edge constraints
//!
//! Positions are filled in row-major order, so only the neighbours above and
//! to the left of a cell can already be placed. Each cell therefore pins a
//! candidate through its top and left edges literally, while the right and
//! bottom sides are classified through the edge frequency index: sides facing
//! out of the grid must carry a boundary edge, sides facing unfilled cells an
//! interior one. Valid inputs admit exactly one tile and orientation per cell
//! under these constraints, which is why the solver never backtracks.

use std::collections::HashMap;

use crate::algorithm::edges::EdgeIndex;
use crate::io::error::{Result, SolveError, malformed};
use crate::spatial::tile::{Edge, Tile};

/// Requirement on one side of a candidate placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeConstraint {
    /// Side must equal the facing edge of an already placed neighbour
    Exact(Edge),
    /// Neighbour position lies outside the grid; side must be an edge no
    /// other tile can match
    Boundary,
    /// Neighbour position is inside the grid but not yet filled; side must
    /// pair with exactly one other tile
    Interior,
}

/// Constraints for one position in top, right, bottom, left order
pub type CellConstraints = [EdgeConstraint; 4];

/// What occupies a neighbouring position during constraint construction
#[derive(Debug)]
pub enum Neighbor<'a> {
    /// An oriented tile already committed to the position
    Placed(&'a Tile),
    /// In-range position not yet filled
    Unknown,
    /// Position outside the grid on either axis
    OutOfBounds,
}

/// Square arrangement of oriented tiles, filled one position at a time
///
/// Positions are indexed row-major: `x = position % size`,
/// `y = position / size`.
#[derive(Debug, Clone)]
pub struct PartialGrid {
    size: usize,
    placements: HashMap<usize, Tile>,
}

impl PartialGrid {
    /// Empty grid of `size * size` positions
    pub fn new(size: usize) -> Self {
        Self {
            size,
            placements: HashMap::with_capacity(size * size),
        }
    }

    /// Grid side length in tiles
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of positions already filled
    pub fn filled(&self) -> usize {
        self.placements.len()
    }

    /// True once every position holds a tile
    pub fn is_full(&self) -> bool {
        self.placements.len() == self.size * self.size
    }

    /// Commit an oriented tile to a row-major position
    pub fn place(&mut self, position: usize, tile: Tile) {
        self.placements.insert(position, tile);
    }

    /// Tile at a row-major position, if filled
    pub fn placement(&self, position: usize) -> Option<&Tile> {
        self.placements.get(&position)
    }

    /// Identifier of the tile placed at `(x, y)`, if any
    pub fn placed_id(&self, x: usize, y: usize) -> Option<u64> {
        self.placements.get(&(y * self.size + x)).map(Tile::id)
    }

    /// Classify the occupant of a signed grid coordinate
    ///
    /// Out-of-range coordinates are a distinct state from in-range positions
    /// that simply have no tile yet; the two impose different constraints.
    pub fn tile_at(&self, x: i64, y: i64) -> Neighbor<'_> {
        let side = self.size as i64;
        if x < 0 || x >= side || y < 0 || y >= side {
            return Neighbor::OutOfBounds;
        }
        let position = (y * side + x) as usize;
        self.placements
            .get(&position)
            .map_or(Neighbor::Unknown, Neighbor::Placed)
    }

    /// Build the four-sided constraint for a row-major position
    ///
    /// Each side takes the facing edge of its neighbour: the literal edge
    /// when the neighbour is placed, a boundary-class requirement when the
    /// neighbour is outside the grid, and an interior-class requirement when
    /// it is merely unfilled.
    pub fn constraints_for(&self, position: usize) -> CellConstraints {
        let x = (position % self.size) as i64;
        let y = (position / self.size) as i64;

        let top = match self.tile_at(x, y - 1) {
            Neighbor::Placed(tile) => EdgeConstraint::Exact(tile.bottom_edge()),
            Neighbor::OutOfBounds => EdgeConstraint::Boundary,
            Neighbor::Unknown => EdgeConstraint::Interior,
        };
        let right = match self.tile_at(x + 1, y) {
            Neighbor::Placed(tile) => EdgeConstraint::Exact(tile.left_edge()),
            Neighbor::OutOfBounds => EdgeConstraint::Boundary,
            Neighbor::Unknown => EdgeConstraint::Interior,
        };
        let bottom = match self.tile_at(x, y + 1) {
            Neighbor::Placed(tile) => EdgeConstraint::Exact(tile.top_edge()),
            Neighbor::OutOfBounds => EdgeConstraint::Boundary,
            Neighbor::Unknown => EdgeConstraint::Interior,
        };
        let left = match self.tile_at(x - 1, y) {
            Neighbor::Placed(tile) => EdgeConstraint::Exact(tile.right_edge()),
            Neighbor::OutOfBounds => EdgeConstraint::Boundary,
            Neighbor::Unknown => EdgeConstraint::Interior,
        };

        [top, right, bottom, left]
    }
}

/// True when every side of the oriented tile meets its constraint
fn satisfies(tile: &Tile, constraints: &CellConstraints, index: &EdgeIndex) -> bool {
    constraints
        .iter()
        .zip(tile.edges())
        .all(|(constraint, edge)| match constraint {
            EdgeConstraint::Exact(required) => *required == edge,
            EdgeConstraint::Boundary => index.is_boundary(&edge),
            EdgeConstraint::Interior => index.is_interior(&edge),
        })
}

/// Assembles the unique grid arrangement of a tile set
///
/// Owns the pool of unplaced tiles for the duration of one solve. Each tile
/// is consumed exactly once; an unmatched cell is an unrecoverable input
/// defect rather than a search dead end, so there is no backtracking and no
/// silent guessing.
pub struct GridSolver {
    pool: Vec<Tile>,
    index: EdgeIndex,
    size: usize,
}

impl GridSolver {
    /// Prepare a solve over a tile set
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MalformedInput`] when the tile count is zero or
    /// not a perfect square.
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let size = tiles.len().isqrt();
        if tiles.is_empty() || size * size != tiles.len() {
            return Err(malformed(format!(
                "tile count {} is not a positive perfect square",
                tiles.len()
            )));
        }
        let index = EdgeIndex::build(&tiles);
        Ok(Self { pool: tiles, index, size })
    }

    /// Grid side length the tile set will assemble into
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Assemble the full grid
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnsatisfiableConstraint`] when no remaining tile
    /// orientation fits some cell.
    pub fn solve(self) -> Result<PartialGrid> {
        self.solve_with_progress(|_, _| {})
    }

    /// Assemble the full grid, reporting `(filled, total)` after each placement
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnsatisfiableConstraint`] when no remaining tile
    /// orientation fits some cell.
    pub fn solve_with_progress(
        mut self,
        mut on_placed: impl FnMut(usize, usize),
    ) -> Result<PartialGrid> {
        let total = self.size * self.size;
        let mut grid = PartialGrid::new(self.size);

        for position in 0..total {
            let constraints = grid.constraints_for(position);
            let tile = self.take_match(&constraints).ok_or_else(|| {
                SolveError::UnsatisfiableConstraint {
                    x: position % self.size,
                    y: position / self.size,
                    remaining: self.pool.len(),
                }
            })?;
            grid.place(position, tile);
            on_placed(position + 1, total);
        }

        Ok(grid)
    }

    /// Remove and return the oriented tile satisfying the constraints
    ///
    /// Searches the pool in input order and each candidate's orbit in the
    /// fixed transform order, keeping the result deterministic.
    fn take_match(&mut self, constraints: &CellConstraints) -> Option<Tile> {
        let (pool_index, oriented) = self.pool.iter().enumerate().find_map(|(i, tile)| {
            tile.orbit()
                .into_iter()
                .find(|candidate| satisfies(candidate, constraints, &self.index))
                .map(|candidate| (i, candidate))
        })?;
        self.pool.remove(pool_index);
        Some(oriented)
    }
}

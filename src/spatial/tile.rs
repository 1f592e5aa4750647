//! Immutable square tile values with edge extraction and orientation orbits

use std::fmt;

use bitvec::vec::BitVec;
use ndarray::Array2;

use crate::spatial::transform::{self, Pixels};

/// Directed border sequence of a tile
///
/// Read left-to-right for the top and bottom edges and top-to-bottom for the
/// left and right edges. Edges are compared by literal sequence equality: the
/// right edge of a tile must equal the left edge of its right-hand neighbour
/// exactly, with no canonicalisation.
pub type Edge = BitVec;

/// Return a copy of an edge read in the opposite direction
pub fn reversed(edge: &Edge) -> Edge {
    let mut flipped = edge.clone();
    flipped.reverse();
    flipped
}

/// Square bitmap with an integer identifier
///
/// A value type: two tiles are equal iff their ids and pixel contents are
/// equal. Every transform returns a new tile; nothing mutates a tile in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: u64,
    pixels: Pixels,
}

impl Tile {
    /// Wrap an identifier and a square pixel grid as a tile
    pub const fn new(id: u64, pixels: Pixels) -> Self {
        Self { id, pixels }
    }

    /// Identifier from the tile's input header
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Pixel contents, `true` for set cells
    pub const fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    /// Side length of the square bitmap
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Rotate 90 degrees clockwise `n` times (mod 4)
    pub fn rotate(&self, n: usize) -> Self {
        let mut pixels = self.pixels.clone();
        for _ in 0..n % 4 {
            pixels = transform::rotate_cw(&pixels);
        }
        Self { id: self.id, pixels }
    }

    /// Mirror left-to-right
    pub fn flip_horizontal(&self) -> Self {
        Self {
            id: self.id,
            pixels: transform::flip_horizontal(&self.pixels),
        }
    }

    /// Mirror top-to-bottom
    pub fn flip_vertical(&self) -> Self {
        Self {
            id: self.id,
            pixels: transform::flip_vertical(&self.pixels),
        }
    }

    /// Top border, left-to-right
    pub fn top_edge(&self) -> Edge {
        self.pixels.row(0).iter().copied().collect()
    }

    /// Bottom border, left-to-right
    pub fn bottom_edge(&self) -> Edge {
        let last = self.side().saturating_sub(1);
        self.pixels.row(last).iter().copied().collect()
    }

    /// Left border, top-to-bottom
    pub fn left_edge(&self) -> Edge {
        self.pixels.column(0).iter().copied().collect()
    }

    /// Right border, top-to-bottom
    pub fn right_edge(&self) -> Edge {
        let last = self.side().saturating_sub(1);
        self.pixels.column(last).iter().copied().collect()
    }

    /// The four borders in top, right, bottom, left order
    pub fn edges(&self) -> [Edge; 4] {
        [
            self.top_edge(),
            self.right_edge(),
            self.bottom_edge(),
            self.left_edge(),
        ]
    }

    /// Distinct tiles reachable by composing rotations and a horizontal flip
    ///
    /// At most eight members, enumerated in the fixed transform order and
    /// deduplicated by structural equality, so tiles with internal symmetry
    /// yield smaller orbits. The orbit is closed: transforming any member
    /// produces another member.
    pub fn orbit(&self) -> Vec<Self> {
        transform::orientations(&self.pixels)
            .into_iter()
            .map(|pixels| Self { id: self.id, pixels })
            .fold(Vec::with_capacity(8), |mut members, candidate| {
                if !members.contains(&candidate) {
                    members.push(candidate);
                }
                members
            })
    }

    /// Every directed edge the tile can expose across its orientations
    ///
    /// The four borders plus their reversals, deduplicated per tile. This is
    /// exactly the set of edges some orbit member presents on some side.
    pub fn exposed_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = Vec::with_capacity(8);
        for edge in self.edges() {
            let flipped = reversed(&edge);
            for candidate in [edge, flipped] {
                if !edges.contains(&candidate) {
                    edges.push(candidate);
                }
            }
        }
        edges
    }

    /// Remove the outermost row and column on every side
    pub fn trim(&self) -> Self {
        let inner = self.side().saturating_sub(2);
        let pixels = Array2::from_shape_fn((inner, inner), |(r, c)| {
            self.pixels.get((r + 1, c + 1)).copied().unwrap_or(false)
        });
        Self { id: self.id, pixels }
    }
}

impl fmt::Display for Tile {
    /// Render in the input text format: a header line followed by `#`/`.` rows
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}:", self.id)?;
        for row in self.pixels.rows() {
            writeln!(f)?;
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

//! Motif point-set detection across bitmap orientations

use crate::io::error::{Result, SolveError, malformed};
use crate::spatial::transform::{self, Pixels};

/// Text form of the built-in sea monster motif
pub const SEA_MONSTER: &str = concat!(
    "                  # \n",
    "#    ##    ##    ###\n",
    " #  #  #  #  #  #   \n",
);

/// Fixed relative point-set searched for within a bitmap
///
/// Offsets are `[row, col]` displacements from a top-left anchor; the
/// bounding box is derived from the maximum offsets. A cell matches when
/// every offset lands on a set pixel — cells outside the point set are
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    offsets: Vec<[usize; 2]>,
    height: usize,
    width: usize,
}

impl Motif {
    /// Parse a motif from text where `#` marks a required cell
    ///
    /// Any other character is unconstrained, so motifs can be drawn with
    /// spaces or dots as filler.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MalformedInput`] when the text contains no `#`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut offsets = Vec::new();
        for (row, line) in text.lines().enumerate() {
            for (col, cell) in line.chars().enumerate() {
                if cell == '#' {
                    offsets.push([row, col]);
                }
            }
        }
        if offsets.is_empty() {
            return Err(malformed("motif contains no marked cells"));
        }

        let height = offsets.iter().map(|o| o[0]).max().unwrap_or(0) + 1;
        let width = offsets.iter().map(|o| o[1]).max().unwrap_or(0) + 1;
        Ok(Self {
            offsets,
            height,
            width,
        })
    }

    /// The built-in sea monster: 15 cells in a 20-by-3 bounding box
    pub fn sea_monster() -> Self {
        // The constant always parses; fall back to a single cell if edited
        // into an empty pattern.
        Self::parse(SEA_MONSTER).unwrap_or(Self {
            offsets: vec![[0, 0]],
            height: 1,
            width: 1,
        })
    }

    /// Required `[row, col]` displacements from the anchor
    pub fn offsets(&self) -> &[[usize; 2]] {
        &self.offsets
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// True when every offset from the anchor lands on a set pixel
    fn matches_at(&self, image: &Pixels, anchor: [usize; 2]) -> bool {
        self.offsets.iter().all(|offset| {
            image
                .get((anchor[0] + offset[0], anchor[1] + offset[1]))
                .copied()
                .unwrap_or(false)
        })
    }
}

/// All `[row, col]` anchors where the motif matches, in row-major order
///
/// Only anchors whose bounding box fits inside the bitmap are considered; a
/// bitmap smaller than the motif yields no anchors.
pub fn find_anchors(image: &Pixels, motif: &Motif) -> Vec<[usize; 2]> {
    let (rows, cols) = image.dim();
    if rows < motif.height() || cols < motif.width() {
        return Vec::new();
    }

    let mut anchors = Vec::new();
    for row in 0..=rows - motif.height() {
        for col in 0..=cols - motif.width() {
            if motif.matches_at(image, [row, col]) {
                anchors.push([row, col]);
            }
        }
    }
    anchors
}

/// Search all eight orientations of a bitmap for the motif
///
/// Orientations are tried in the fixed enumeration order of
/// [`transform::orientations`]; the first one containing at least one match
/// is returned together with all of its anchors. The scan never mutates the
/// input image.
///
/// # Errors
///
/// Returns [`SolveError::PatternNotFound`] when no orientation contains the
/// motif — valid inputs are guaranteed to contain it, so this signals an
/// input-assumption violation rather than a recoverable condition.
pub fn scan(image: &Pixels, motif: &Motif) -> Result<(Pixels, Vec<[usize; 2]>)> {
    let candidates = transform::orientations(image);
    let tried = candidates.len();
    for oriented in candidates {
        let anchors = find_anchors(&oriented, motif);
        if !anchors.is_empty() {
            return Ok((oriented, anchors));
        }
    }
    Err(SolveError::PatternNotFound {
        orientations: tried,
    })
}

//! Text parsing of tile blocks into tile values
//!
//! Input is a sequence of blank-line separated blocks. Each block opens with
//! a `Tile <id>:` header followed by N rows of N characters, `#` for set and
//! `.` for clear. Tiles are returned in input order so downstream iteration
//! stays deterministic.

use ndarray::Array2;

use crate::io::error::{Result, malformed};
use crate::spatial::tile::Tile;

/// Character marking a set pixel
pub const SET_PIXEL: char = '#';
/// Character marking a clear pixel
pub const CLEAR_PIXEL: char = '.';

/// Parse a full input text into tiles
///
/// CRLF line endings are tolerated; trailing blank lines are not
/// significant. All tiles in a run must share one side length.
///
/// # Errors
///
/// Returns [`crate::SolveError::MalformedInput`] when the input contains no
/// tile blocks, a header cannot be parsed, rows differ in length, a grid is
/// not square, a character is outside `{'#', '.'}`, or tiles differ in size.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    let normalized = input.replace("\r\n", "\n");

    let mut tiles = Vec::new();
    for block in normalized.split("\n\n") {
        let trimmed = block.trim_matches('\n');
        if trimmed.is_empty() {
            continue;
        }
        tiles.push(parse_block(trimmed)?);
    }

    if tiles.is_empty() {
        return Err(malformed("input contains no tile blocks"));
    }

    let side = tiles.first().map_or(0, Tile::side);
    if let Some(odd) = tiles.iter().find(|tile| tile.side() != side) {
        return Err(malformed(format!(
            "tile {} has side {} but earlier tiles have side {side}",
            odd.id(),
            odd.side()
        )));
    }

    Ok(tiles)
}

fn parse_block(block: &str) -> Result<Tile> {
    let mut lines = block.lines();
    let header = lines.next().ok_or_else(|| malformed("empty tile block"))?;
    let id = parse_header(header)?;

    let mut cells = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0;
    for raw_line in lines {
        // Trailing whitespace is not significant
        let line = raw_line.trim_end();
        height += 1;
        let row_len = line.chars().count();
        match width {
            None => width = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(malformed(format!(
                    "tile {id} has rows of length {expected} and {row_len}"
                )));
            }
            Some(_) => {}
        }
        for cell in line.chars() {
            match cell {
                SET_PIXEL => cells.push(true),
                CLEAR_PIXEL => cells.push(false),
                other => {
                    return Err(malformed(format!(
                        "tile {id} contains invalid character {other:?}"
                    )));
                }
            }
        }
    }

    let width = width.unwrap_or(0);
    if width != height || width == 0 {
        return Err(malformed(format!(
            "tile {id} is {width} wide but {height} tall"
        )));
    }

    let pixels = Array2::from_shape_vec((height, width), cells)
        .map_err(|err| malformed(format!("tile {id}: {err}")))?;
    Ok(Tile::new(id, pixels))
}

fn parse_header(header: &str) -> Result<u64> {
    header
        .trim()
        .strip_prefix("Tile ")
        .and_then(|rest| rest.strip_suffix(':'))
        .and_then(|rest| rest.trim().parse().ok())
        .ok_or_else(|| malformed(format!("unparsable tile header {header:?}")))
}

//! PNG export of stitched images with motif highlighting

use std::path::Path;

use image::{ImageBuffer, Rgba};
use ndarray::Array2;

use crate::io::error::{Result, SolveError};
use crate::spatial::transform::Pixels;

const CLEAR: Rgba<u8> = Rgba([240, 244, 248, 255]);
const SET: Rgba<u8> = Rgba([24, 48, 96, 255]);
const HIGHLIGHT: Rgba<u8> = Rgba([200, 32, 32, 255]);

/// Export a stitched image as a PNG
///
/// Set cells render dark, clear cells light, and cells marked in the
/// optional coverage mask render highlighted so motif instances stand out.
///
/// # Errors
///
/// Returns [`SolveError::InputRead`] when the parent directory cannot be
/// created and [`SolveError::ImageExport`] when the image cannot be saved.
pub fn export_png(image: &Pixels, coverage: Option<&Array2<bool>>, path: &Path) -> Result<()> {
    let (rows, cols) = image.dim();
    let mut buffer = ImageBuffer::new(cols as u32, rows as u32);

    for ((row, col), &set) in image.indexed_iter() {
        let highlighted = coverage
            .and_then(|mask| mask.get((row, col)))
            .copied()
            .unwrap_or(false);
        let color = if highlighted {
            HIGHLIGHT
        } else if set {
            SET
        } else {
            CLEAR
        };
        buffer.put_pixel(col as u32, row as u32, color);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| SolveError::InputRead {
                path: parent.to_path_buf(),
                source: err,
            })?;
        }
    }

    buffer.save(path).map_err(|err| SolveError::ImageExport {
        path: path.to_path_buf(),
        source: err,
    })?;

    Ok(())
}

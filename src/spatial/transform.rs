//! Pure rotation and reflection transforms over boolean bitmaps
//!
//! Every transform builds a fresh array and leaves its input untouched. The
//! same primitives serve individual tiles and the full stitched image, so the
//! orientation enumeration order is fixed here once and shared by tile orbits
//! and whole-image motif scanning.

use ndarray::Array2;

/// Rectangular boolean bitmap
pub type Pixels = Array2<bool>;

/// Rotate a bitmap 90 degrees clockwise
///
/// The source cell at `(row, col)` lands at `(col, rows - 1 - row)`.
pub fn rotate_cw(pixels: &Pixels) -> Pixels {
    let (rows, cols) = pixels.dim();
    Array2::from_shape_fn((cols, rows), |(r, c)| {
        pixels.get((rows - 1 - c, r)).copied().unwrap_or(false)
    })
}

/// Mirror a bitmap left-to-right
pub fn flip_horizontal(pixels: &Pixels) -> Pixels {
    let (rows, cols) = pixels.dim();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        pixels.get((r, cols - 1 - c)).copied().unwrap_or(false)
    })
}

/// Mirror a bitmap top-to-bottom
pub fn flip_vertical(pixels: &Pixels) -> Pixels {
    let (rows, cols) = pixels.dim();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        pixels.get((rows - 1 - r, c)).copied().unwrap_or(false)
    })
}

/// Enumerate the eight orientations of a bitmap in a fixed order
///
/// Order is identity, one to three clockwise quarter turns, then the
/// horizontally flipped bitmap followed by its three quarter turns. Symmetric
/// bitmaps yield repeats; callers that need set semantics deduplicate
/// themselves.
pub fn orientations(pixels: &Pixels) -> Vec<Pixels> {
    let mut result = Vec::with_capacity(8);
    for base in [pixels.clone(), flip_horizontal(pixels)] {
        let mut current = base;
        for _ in 0..3 {
            result.push(current.clone());
            current = rotate_cw(&current);
        }
        result.push(current);
    }
    result
}

//! Boundary-aware neighborhood resolution for the blur transform.
use crate::image::{PixelGrid, Rgb8};

/// Offsets covering a cell and its 8 surrounding cells, in the fixed
/// enumeration order the blur average is defined over.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 9] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (0, 0),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// True iff (row, col) lies inside the grid.
#[inline]
pub fn in_bounds(grid: &PixelGrid, row: i64, col: i64) -> bool {
    row >= 0 && (row as usize) < grid.h && col >= 0 && (col as usize) < grid.w
}

/// Collect the pixel at (row, col) together with every in-bounds orthogonal
/// and diagonal neighbor. Corner cells yield 4 entries, edge cells 6,
/// interior cells 9.
pub fn neighborhood(grid: &PixelGrid, row: usize, col: usize) -> Vec<Rgb8> {
    let mut pixels = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as i64 + dr;
        let c = col as i64 + dc;
        if in_bounds(grid, r, c) {
            pixels.push(grid.get(r as usize, c as usize));
        }
    }
    pixels
}

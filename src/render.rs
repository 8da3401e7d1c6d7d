//! Rendering seam: the core hands a finished grid to anything that can place
//! a unit-sized colored mark at a coordinate.
use crate::image::{io::ensure_parent_dir, ImageView, PixelGrid, Rgb8};

use image::{Rgb, RgbImage};
use std::path::Path;

/// The color-setting primitive a drawing surface must provide.
///
/// Coordinates are (x, y) with the origin at the top-left, x growing right
/// and y growing down, one unit per grid cell.
pub trait Canvas {
    fn dot(&mut self, x: usize, y: usize, color: Rgb8);
}

/// Draw the grid row-major from the top-left, one mark per cell.
pub fn draw_grid<C: Canvas>(canvas: &mut C, grid: &PixelGrid) {
    for (y, row) in grid.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            canvas.dot(x, y, px);
        }
    }
}

/// A [`Canvas`] backed by an RGB image buffer, written out as a PNG.
pub struct PngCanvas {
    buffer: RgbImage,
}

impl PngCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: RgbImage::new(width as u32, height as u32),
        }
    }

    /// Write the canvas to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        ensure_parent_dir(path)?;
        self.buffer
            .save(path)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}

impl Canvas for PngCanvas {
    fn dot(&mut self, x: usize, y: usize, color: Rgb8) {
        self.buffer
            .put_pixel(x as u32, y as u32, Rgb(color.channels()));
    }
}

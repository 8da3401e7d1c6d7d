//! Owned RGB pixel grid in row-major layout (stride == width).
//!
//! The decoder builds one of these; every transform allocates a fresh grid of
//! the same dimensions and leaves its input untouched.
use super::rgb::Rgb8;
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid width in pixels (columns)
    pub w: usize,
    /// Grid height in pixels (rows)
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, origin at top-left
    pub data: Vec<Rgb8>,
}

impl PixelGrid {
    /// Construct a black (all-zero) grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![Rgb8::default(); w * h],
        }
    }

    #[inline]
    /// Convert (row, col) to a linear index into `data`.
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.stride + col
    }

    #[inline]
    /// Get the pixel at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Rgb8 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    /// Set the pixel at (row, col).
    pub fn set(&mut self, row: usize, col: usize, px: Rgb8) {
        let i = self.idx(row, col);
        self.data[i] = px;
    }
}

impl ImageView for PixelGrid {
    type Pixel = Rgb8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for PixelGrid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

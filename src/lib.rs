#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod decode;
pub mod image;
pub mod neighbors;
pub mod render;
pub mod transform;

// --- High-level re-exports -------------------------------------------------

// Main entry points: decoder + transforms + renderer.
pub use crate::decode::{decode_lines, read_pixmap, DecodeError, DecodeOptions};
pub use crate::image::{PixelGrid, Rgb8};
pub use crate::render::{draw_grid, Canvas, PngCanvas};
pub use crate::transform::{blur, grayscale, negative, run_pipeline, Op, PipelineResult};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixmap_filter::prelude::*;
///
/// let mut grid = PixelGrid::new(2, 2);
/// grid.set(0, 0, Rgb8::new(200, 100, 50));
/// let neg = negative(&grid);
/// assert_eq!(neg.get(0, 0), Rgb8::new(55, 155, 205));
/// ```
pub mod prelude {
    pub use crate::decode::{decode_lines, read_pixmap, DecodeOptions, ShortData};
    pub use crate::image::{ImageView, PixelGrid, Rgb8};
    pub use crate::render::{draw_grid, Canvas, PngCanvas};
    pub use crate::transform::{blur, grayscale, negative, run_pipeline, Op};
}

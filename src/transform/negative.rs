use crate::image::{ImageView, ImageViewMut, PixelGrid, Rgb8};

/// Photographic negative: every channel becomes `255 - c`.
pub fn negative(grid: &PixelGrid) -> PixelGrid {
    let mut out = PixelGrid::new(grid.w, grid.h);
    for (dst_row, src_row) in out.rows_mut().zip(grid.rows()) {
        for (dst, src) in dst_row.iter_mut().zip(src_row) {
            *dst = Rgb8::new(255 - src.r, 255 - src.g, 255 - src.b);
        }
    }
    out
}

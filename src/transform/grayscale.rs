use crate::image::{ImageView, ImageViewMut, PixelGrid, Rgb8};

/// Replace every pixel with the gray of its average channel intensity,
/// `(r + g + b) / 3` with floor division.
pub fn grayscale(grid: &PixelGrid) -> PixelGrid {
    let mut out = PixelGrid::new(grid.w, grid.h);
    for (dst_row, src_row) in out.rows_mut().zip(grid.rows()) {
        for (dst, src) in dst_row.iter_mut().zip(src_row) {
            let avg = ((src.r as u32 + src.g as u32 + src.b as u32) / 3) as u8;
            *dst = Rgb8::new(avg, avg, avg);
        }
    }
    out
}

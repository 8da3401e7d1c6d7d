use crate::image::{PixelGrid, Rgb8};
use crate::neighbors::neighborhood;

/// Single-pass box blur: every output pixel is the channel-wise average of
/// the input pixel and its in-bounds neighbors, with floor division by the
/// neighborhood size.
///
/// One call is one convolution pass. For a stronger blur, apply the result
/// again; the transform never iterates internally.
pub fn blur(grid: &PixelGrid) -> PixelGrid {
    let mut out = PixelGrid::new(grid.w, grid.h);
    for row in 0..grid.h {
        for col in 0..grid.w {
            out.set(row, col, neighbor_average(grid, row, col));
        }
    }
    out
}

fn neighbor_average(grid: &PixelGrid, row: usize, col: usize) -> Rgb8 {
    let pixels = neighborhood(grid, row, col);
    let mut r_sum = 0u32;
    let mut g_sum = 0u32;
    let mut b_sum = 0u32;
    for px in &pixels {
        r_sum += px.r as u32;
        g_sum += px.g as u32;
        b_sum += px.b as u32;
    }
    // Never empty: the center pixel is always in bounds.
    let count = pixels.len() as u32;
    Rgb8::new(
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_grid_is_unchanged() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgb8::new(10, 20, 30));
        assert_eq!(blur(&grid), grid);
    }

    #[test]
    fn two_by_two_averages_all_four_pixels() {
        let mut grid = PixelGrid::new(2, 2);
        grid.set(0, 0, Rgb8::new(0, 0, 0));
        grid.set(0, 1, Rgb8::new(10, 10, 10));
        grid.set(1, 0, Rgb8::new(20, 20, 20));
        grid.set(1, 1, Rgb8::new(31, 31, 31));
        // Every cell's neighborhood is the whole grid: (0+10+20+31)/4 = 15.
        let blurred = blur(&grid);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(blurred.get(row, col), Rgb8::new(15, 15, 15));
            }
        }
    }

    #[test]
    fn uniform_grid_is_a_fixed_point() {
        let mut grid = PixelGrid::new(4, 3);
        for px in grid.data.iter_mut() {
            *px = Rgb8::new(7, 77, 177);
        }
        assert_eq!(blur(&grid), grid);
    }

    #[test]
    fn division_floors_per_neighborhood_size() {
        // Corner of a 2x1 grid: neighborhood is both pixels, (0 + 5) / 2 = 2.
        let mut grid = PixelGrid::new(2, 1);
        grid.set(0, 1, Rgb8::new(5, 5, 5));
        let blurred = blur(&grid);
        assert_eq!(blurred.get(0, 0), Rgb8::new(2, 2, 2));
        assert_eq!(blurred.get(0, 1), Rgb8::new(2, 2, 2));
    }
}

use pixmap_filter::image::{PixelGrid, Rgb8};

/// Generates a grid with distinct channel values per cell.
pub fn gradient_grid(width: usize, height: usize) -> PixelGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    let mut grid = PixelGrid::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let base = (row * width + col) % 80;
            grid.set(
                row,
                col,
                Rgb8::new(base as u8, (base * 2) as u8, (base * 3) as u8),
            );
        }
    }
    grid
}

/// Encode a grid in the line-oriented ASCII pixmap format the decoder reads.
pub fn pixmap_text(grid: &PixelGrid) -> String {
    let mut out = String::new();
    out.push_str("PX\n");
    out.push_str("# synthetic test pixmap\n");
    out.push_str(&format!("{} {}\n", grid.w, grid.h));
    out.push_str("#\n");
    for row in 0..grid.h {
        for col in 0..grid.w {
            let px = grid.get(row, col);
            for channel in px.channels() {
                out.push_str(&format!("{channel}\n"));
            }
        }
    }
    out
}

use pixmap_filter::decode::{read_pixmap, DecodeOptions};
use pixmap_filter::render::{draw_grid, PngCanvas};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "pixmap_render".to_string());
    let input = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => return Err(format!("usage: {program} FILE")),
    };

    let grid = read_pixmap(&input, DecodeOptions::default()).map_err(|e| e.to_string())?;

    let output = input.with_extension("png");
    let mut canvas = PngCanvas::new(grid.w, grid.h);
    draw_grid(&mut canvas, &grid);
    canvas.save(&output)?;

    println!(
        "Rendered {}x{} pixmap to {}",
        grid.w,
        grid.h,
        output.display()
    );
    Ok(())
}

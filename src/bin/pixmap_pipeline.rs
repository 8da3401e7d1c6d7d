use pixmap_filter::config::load_config;
use pixmap_filter::decode::read_pixmap;
use pixmap_filter::image::io::write_json_file;
use pixmap_filter::render::{draw_grid, PngCanvas};
use pixmap_filter::transform::run_pipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "pixmap_pipeline".to_string());
    let config_path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => return Err(format!("usage: {program} CONFIG.json")),
    };
    let config = load_config(Path::new(&config_path))?;

    let grid = read_pixmap(&config.input, config.decode).map_err(|e| e.to_string())?;
    println!(
        "Decoded {}x{} pixmap from {}",
        grid.w,
        grid.h,
        config.input.display()
    );

    let result = run_pipeline(grid, &config.ops);
    for stage in &result.stages {
        println!("  {}: {:.3} ms", stage.op, stage.elapsed_ms);
    }

    if let Some(path) = &config.output.png {
        let mut canvas = PngCanvas::new(result.grid.w, result.grid.h);
        draw_grid(&mut canvas, &result.grid);
        canvas.save(path)?;
        println!("Rendered image written to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &result)?;
        println!("Stage report written to {}", path.display());
    }

    Ok(())
}

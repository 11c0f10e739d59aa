use chrono::Local;
use street_orientation::config::{load_config, RunConfig};
use street_orientation::diagnostics::RunReport;
use street_orientation::image::io::{save_rgb_png, write_json_file};
use street_orientation::pipeline::{run_orientation, OrientationOptions, OrientationRun};
use street_orientation::provider::{slug, JsonGraphProvider};
use street_orientation::render::{draw_figure, draw_network};
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
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let places = config.places.resolve().map_err(|e| e.to_string())?;
    println!("input: {} place(s) from {}", places.len(), config_path);

    let provider = JsonGraphProvider::new(&config.graph_dir);
    let options = OrientationOptions {
        n_bins: config.n_bins,
        weight_by_length: config.weight_by_length,
    };
    let run = run_orientation(&places, &provider, options, &config.title)
        .map_err(|e| e.to_string())?;

    let canvas = draw_figure(&run.figure, &config.style).map_err(|e| e.to_string())?;
    let figure_path = config
        .output
        .figure_path(&config.title, Some(Local::now().naive_local()));
    save_rgb_png(&canvas, &figure_path).map_err(|e| e.to_string())?;
    println!(
        "Saved {} panels ({}x{} grid) to {}",
        run.figure.panels.len(),
        run.figure.shape.nrows,
        run.figure.shape.ncols,
        figure_path.display()
    );

    if let Some(dir) = &config.output.network_image_dir {
        save_network_images(dir, &run, &config)?;
        println!("Network images written to {}", dir.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &RunReport::from(&run)).map_err(|e| e.to_string())?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn save_network_images(dir: &Path, run: &OrientationRun, config: &RunConfig) -> Result<(), String> {
    for (label, result) in &run.results {
        let canvas = draw_network(
            &result.graph,
            config.output.network_image_px,
            &config.style.panel,
        )
        .map_err(|e| format!("network image for '{label}': {e}"))?;
        save_rgb_png(&canvas, &dir.join(format!("{}.png", slug(label))))
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: street_orientation <config.json>".to_string()
}

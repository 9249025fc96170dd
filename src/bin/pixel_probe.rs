use pixel_util::config::probe::{load_config, EditColor};
use pixel_util::image::io::{read, try_write, write_json_file};
use pixel_util::image::ImageView;
use pixel_util::{get_argb, set_argb, set_rgb, Argb, PixelBuffer};
use serde::Serialize;
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
    let config = load_config(Path::new(&config_path))?;

    let mut image = read(&config.input);
    if image.is_empty() {
        return Err(format!("Failed to load {}", config.input.display()));
    }
    let (width, height) = image.dimensions();

    for edit in &config.edits {
        let result = match edit.color()? {
            EditColor::Rgb(rgb) => set_rgb(&mut image, edit.x, edit.y, rgb),
            EditColor::Argb(argb) => set_argb(&mut image, edit.x, edit.y, argb),
        };
        result.map_err(|e| format!("Edit failed: {e}"))?;
    }

    let samples = config
        .probes
        .iter()
        .map(|p| {
            get_argb(&image, p.x, p.y)
                .map(|argb| PixelSample { x: p.x, y: p.y, argb })
                .map_err(|e| format!("Probe failed: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for s in &samples {
        let [a, r, g, b] = s.argb;
        println!("({}, {}) a={a} r={r} g={g} b={b}", s.x, s.y);
    }

    if let Some(path) = &config.output.image {
        save_image(&image, path)?;
        println!("Saved image to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        let report = ProbeReport {
            input: config.input.display().to_string(),
            width,
            height,
            edit_count: config.edits.len(),
            samples,
        };
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    if config.show {
        show(&image)?;
    }

    Ok(())
}

#[cfg(feature = "viewer")]
fn show(image: &PixelBuffer) -> Result<(), String> {
    pixel_util::show(image).map_err(|e| format!("Viewer failed: {e}"))
}

#[cfg(not(feature = "viewer"))]
fn show(_image: &PixelBuffer) -> Result<(), String> {
    Err("Built without the `viewer` feature".to_string())
}

fn save_image(image: &PixelBuffer, path: &Path) -> Result<(), String> {
    try_write(image, path).map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn usage() -> String {
    "Usage: pixel_probe <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeReport {
    input: String,
    width: u32,
    height: u32,
    edit_count: usize,
    samples: Vec<PixelSample>,
}

#[derive(Debug, Serialize)]
struct PixelSample {
    x: i64,
    y: i64,
    argb: Argb,
}

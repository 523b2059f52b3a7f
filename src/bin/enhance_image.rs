use crop_detector::enhance::{EnhanceParams, Enhancer};
use crop_detector::image::io::{load_rgba_image, save_png};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let input = args.next().ok_or_else(usage)?;
    let output = args.next().ok_or_else(usage)?;

    let image = load_rgba_image(Path::new(&input)).map_err(|e| e.to_string())?;
    let (in_w, in_h) = (image.w, image.h);

    let enhancer = Enhancer::new(EnhanceParams::default());
    let enhanced = enhancer.enhance(&image).map_err(|e| e.to_string())?;
    save_png(&enhanced, Path::new(&output)).map_err(|e| e.to_string())?;

    println!(
        "Enhanced {input} ({in_w}x{in_h}) -> {output} ({}x{})",
        enhanced.w, enhanced.h
    );
    Ok(())
}

fn usage() -> String {
    "Usage: enhance_image <input-image> <output.png>".to_string()
}

use crop_detector::detector::{CropDetector, DetectorParams};
use crop_detector::image::io::load_rgba_image;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SuggestToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorConfig,
    pub output: SuggestOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub threshold_low: f32,
    pub threshold_high: f32,
    pub min_area_frac: f64,
    pub max_area_frac: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let p = DetectorParams::default();
        Self {
            threshold_low: p.threshold_low,
            threshold_high: p.threshold_high,
            min_area_frac: p.min_area_frac,
            max_area_frac: p.max_area_frac,
        }
    }
}

impl DetectorConfig {
    fn to_params(&self) -> DetectorParams {
        DetectorParams {
            threshold_low: self.threshold_low,
            threshold_high: self.threshold_high,
            min_area_frac: self.min_area_frac,
            max_area_frac: self.max_area_frac,
            ..DetectorParams::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<SuggestToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input).map_err(|e| e.to_string())?;
    let detector = CropDetector::new(config.detector.to_params());
    let report = detector.suggest_with_diagnostics(&image);

    match &report.crop {
        Some(b) => println!("suggested crop: {},{} {}x{}", b.x, b.y, b.w, b.h),
        None => println!("no suggestion ({:?})", report.rejection),
    }
    println!(
        "contours: {} low / {} high, candidates: {}, merged: {}, total_ms: {:.3}",
        report.trace.contours_low,
        report.trace.contours_high,
        report.trace.candidates,
        report.trace.merged,
        report.trace.total_ms
    );

    let report_path = &config.output.report_json;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("cannot serialize report: {e}"))?;
    fs::write(report_path, json)
        .map_err(|e| format!("cannot write {}: {e}", report_path.display()))?;
    println!("JSON report written to {}", report_path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: suggest_crop <config.json>\n\
     Config: {\"input\": \"img.png\", \"detector\": {\"threshold_low\": 30.0}, \
     \"output\": {\"report_json\": \"report.json\"}}"
        .to_string()
}

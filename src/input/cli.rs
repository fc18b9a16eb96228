use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::resolution::Resolution;
use crate::core::zoom::budget::DEFAULT_BUDGET_STEP;
use crate::core::zoom::zoom_config::{
    DEFAULT_ABORT_THRESHOLD, DEFAULT_DURATION_SECONDS, DEFAULT_FPS, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SHRINK_PERCENT, ZoomConfig,
};
use crate::presenters::file::image_file::ImageFileFormat;

/// Given a string and a separator, returns the two values
/// separated by the separator.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (left, right) = s.split_once(separator)?;

    match (T::from_str(left.trim()), T::from_str(right.trim())) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

fn parse_size(s: &str) -> Result<Resolution, String> {
    let (width, height) =
        parse_pair::<u32>(s, 'x').ok_or_else(|| format!("could not parse image size '{}'", s))?;

    Resolution::new(width, height).map_err(|err| err.to_string())
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    parse_pair::<f64>(s, ',').ok_or_else(|| format!("could not parse range '{}', expected MIN,MAX", s))
}

fn parse_shrink_percent(s: &str) -> Result<f64, String> {
    let percent = f64::from_str(s).map_err(|_| format!("could not parse shrink percent '{}'", s))?;

    if !(0.0..100.0).contains(&percent) {
        return Err(format!("shrink percent must be in [0, 100), got {}", percent));
    }

    Ok(percent)
}

/// Renders a Mandelbrot zoom animation as numbered image files.
#[derive(Debug, Parser)]
#[command(name = "mandelzoom", version, about)]
pub struct Cli {
    /// Directory the frames are written to
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Image size as WIDTHxHEIGHT
    #[arg(short, long, default_value = "640x480", value_parser = parse_size)]
    pub size: Resolution,

    /// Real axis of the first frame as MIN,MAX
    #[arg(long, default_value = "-1,2", value_parser = parse_range, allow_hyphen_values = true)]
    pub real_range: (f64, f64),

    /// Imaginary axis of the first frame as MIN,MAX
    #[arg(long, default_value = "-1,1", value_parser = parse_range, allow_hyphen_values = true)]
    pub imag_range: (f64, f64),

    /// Iteration budget of the first frame
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Escape bound on the squared magnitude of the orbit
    #[arg(short, long, default_value_t = DEFAULT_ABORT_THRESHOLD)]
    pub abort_threshold: f64,

    /// Frames per second of the finished video
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Length of the finished video in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECONDS)]
    pub duration: u32,

    /// Percentage each frame's bounds move toward the focus
    #[arg(short = 'z', long, default_value_t = DEFAULT_SHRINK_PERCENT, value_parser = parse_shrink_percent)]
    pub shrink_percent: f64,

    /// Extra iterations per frame index added from frame 2 on
    #[arg(long, default_value_t = DEFAULT_BUDGET_STEP)]
    pub budget_step: u32,

    /// Output image format (bmp or ppm)
    #[arg(short, long, default_value_t = ImageFileFormat::Bmp)]
    pub format: ImageFileFormat,
}

impl Cli {
    pub fn zoom_config(&self) -> Result<ZoomConfig, String> {
        let (x_min, x_max) = self.real_range;
        let (y_min, y_max) = self.imag_range;
        let region = PlaneRegion::new(x_min, x_max, y_min, y_max).map_err(|err| err.to_string())?;

        Ok(ZoomConfig {
            region,
            resolution: self.size,
            max_iterations: self.iterations,
            abort_threshold: self.abort_threshold,
            fps: self.fps,
            duration_seconds: self.duration,
            shrink_percent: self.shrink_percent,
            budget_step: self.budget_step,
        })
    }
}

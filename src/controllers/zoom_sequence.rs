use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::algorithm::build_raster;
use crate::core::fractals::mandelbrot::colour_map::map_to_colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::zoom::errors::ZoomError;
use crate::core::zoom::focus::find_focus;
use crate::core::zoom::sequence::{Frame, FrameSequence};
use crate::core::zoom::zoom_config::ZoomConfig;

#[derive(Debug)]
pub enum ZoomSequenceError {
    Mandelbrot(MandelbrotError),
    Zoom(ZoomError),
    Render(GeneratePixelBufferError),
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Present {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ZoomSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "escape-time error: {}", err),
            Self::Zoom(err) => write!(f, "zoom error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::OutputDir { path, source } => {
                write!(f, "cannot create {}: {}", path.display(), source)
            }
            Self::Present { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ZoomSequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::OutputDir { source, .. } | Self::Present { source, .. } => Some(source),
        }
    }
}

impl From<MandelbrotError> for ZoomSequenceError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<ZoomError> for ZoomSequenceError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

impl From<GeneratePixelBufferError> for ZoomSequenceError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Render(err)
    }
}

fn render_frame(
    params: &MandelbrotParams,
    resolution: Resolution,
    frame: &Frame,
) -> Result<PixelBuffer, ZoomSequenceError> {
    let params = params.with_frame(frame.region, frame.max_iterations)?;
    let raster = build_raster(params, resolution)?;

    Ok(map_to_colour(&raster)?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSummary {
    pub frames_written: u32,
    pub focus: Complex,
    pub last_frame: Frame,
    pub files: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Renders a zoom animation into numbered image files.
///
/// Frame 0 is rendered over the configured region and picks the focus
/// point; every later frame shrinks the region toward that focus and gets
/// its iteration budget from the configured growth policy. The first error
/// ends the run.
pub struct ZoomSequenceController<P: FilePresenterPort> {
    presenter: P,
    output_dir: PathBuf,
}

impl<P: FilePresenterPort> ZoomSequenceController<P> {
    pub fn new(presenter: P, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            presenter,
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.output_dir
            .join(format!("img-{}.{}", index, self.presenter.extension()))
    }

    pub fn run(&self, config: &ZoomConfig) -> Result<ZoomSummary, ZoomSequenceError> {
        let start = Instant::now();
        let frame_count = config.frame_count();
        let params = config.initial_params()?;
        config.validate_shrink()?;

        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            ZoomSequenceError::OutputDir {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        info!(
            "Rendering {} frames at {} into {}",
            frame_count,
            config.resolution,
            self.output_dir.display()
        );

        let first = Frame {
            index: 0,
            region: config.region,
            max_iterations: config.max_iterations,
        };

        let raster = build_raster(params, config.resolution)?;
        let focus = find_focus(&raster, first.region)?;
        let buffer = map_to_colour(&raster)?;
        drop(raster);

        info!("Zoom focus: {} {:+}i", focus.real, focus.imag);

        let mut files = vec![self.write_frame(&first, &buffer)?];
        let mut last_frame = first;

        let frames = FrameSequence::new(
            first,
            focus,
            config.shrink_percent,
            frame_count,
            config.budget_policy(),
        )?;

        for frame in frames {
            let frame = frame?;
            let buffer = render_frame(&params, config.resolution, &frame)?;
            files.push(self.write_frame(&frame, &buffer)?);
            last_frame = frame;
        }

        let elapsed = start.elapsed();
        info!("Total time = {:.3} seconds", elapsed.as_secs_f64());

        Ok(ZoomSummary {
            frames_written: files.len() as u32,
            focus,
            last_frame,
            files,
            elapsed,
        })
    }

    fn write_frame(&self, frame: &Frame, buffer: &PixelBuffer) -> Result<PathBuf, ZoomSequenceError> {
        let path = self.frame_path(frame.index);

        self.presenter
            .present(buffer, &path)
            .map_err(|source| ZoomSequenceError::Present {
                path: path.clone(),
                source,
            })?;

        debug!(
            "Frame {} ({} iterations, region {}) -> {}",
            frame.index,
            frame.max_iterations,
            frame.region,
            path.display()
        );

        Ok(path)
    }
}

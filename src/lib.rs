pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::zoom_sequence::{ZoomSequenceController, ZoomSequenceError, ZoomSummary};
pub use crate::core::data::{complex::Complex, plane_region::PlaneRegion, resolution::Resolution};
pub use crate::core::fractals::mandelbrot::algorithm::{build_raster, escape_count};
pub use crate::core::fractals::mandelbrot::colour_map::map_to_colour;
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use crate::core::zoom::focus::find_focus;
pub use crate::core::zoom::shrink::shrink_region;
pub use crate::core::zoom::zoom_config::ZoomConfig;
pub use input::cli::Cli;
pub use presenters::file::image_file::{ImageFileFormat, ImageFilePresenter};

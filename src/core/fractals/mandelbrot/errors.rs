use crate::core::actions::generate_fractal::generate_fractal::GenerateFractalError;
use crate::core::data::iteration_raster::IterationRasterError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidAbortThreshold(f64),
    Coordinates(PixelToComplexCoordsError),
    Raster(IterationRasterError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidAbortThreshold(threshold) => {
                write!(
                    f,
                    "Abort threshold must be positive and finite, got {}",
                    threshold
                )
            }
            Self::Coordinates(err) => write!(f, "{}", err),
            Self::Raster(err) => write!(f, "{}", err),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coordinates(err) => Some(err),
            Self::Raster(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IterationRasterError> for MandelbrotError {
    fn from(err: IterationRasterError) -> Self {
        Self::Raster(err)
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for MandelbrotError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Algorithm(err) => Self::Coordinates(err),
            GenerateFractalError::AllocationFailed { pixels } => {
                Self::Raster(IterationRasterError::AllocationFailed { pixels })
            }
        }
    }
}

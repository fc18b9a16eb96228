use crate::core::data::plane_region::PlaneRegionError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ZoomError {
    /// No pixel escaped after more than zero steps but before the budget ran out.
    NoBoundaryPoint { max_iterations: u32 },
    InvalidShrinkPercent(f64),
    Coordinates(PixelToComplexCoordsError),
    /// Shrinking produced bounds too close for `f64` to tell apart.
    RegionCollapsed(PlaneRegionError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBoundaryPoint { max_iterations } => {
                write!(
                    f,
                    "no focus found: raster has no count between 1 and {}",
                    max_iterations.saturating_sub(1)
                )
            }
            Self::InvalidShrinkPercent(percent) => {
                write!(f, "shrink percent must be in [0, 100), got {}", percent)
            }
            Self::Coordinates(err) => write!(f, "{}", err),
            Self::RegionCollapsed(err) => write!(f, "zoom region collapsed: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coordinates(err) => Some(err),
            Self::RegionCollapsed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelToComplexCoordsError> for ZoomError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Coordinates(err)
    }
}

impl From<PlaneRegionError> for ZoomError {
    fn from(err: PlaneRegionError) -> Self {
        Self::RegionCollapsed(err)
    }
}

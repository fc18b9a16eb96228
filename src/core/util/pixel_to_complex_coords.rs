use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideResolution { point: Point, resolution: Resolution },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideResolution { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {} pixel grid",
                    point.x, point.y, resolution
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the plane. Column 0 sits on `x_min` and row 0 on `y_max`;
/// the far edges (`x_max`, `y_min`) are one step past the last pixel.
pub fn pixel_to_complex_coords(
    point: Point,
    resolution: Resolution,
    region: PlaneRegion,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains(point) {
        return Err(PixelToComplexCoordsError::PointOutsideResolution { point, resolution });
    }

    let real = region.x_min() + f64::from(point.x) * region.width() / f64::from(resolution.width());
    let imag =
        region.y_max() - f64::from(point.y) * region.height() / f64::from(resolution.height());

    Ok(Complex { real, imag })
}

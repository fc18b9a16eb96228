use crate::core::data::complex::Complex;
use crate::core::data::iteration_raster::IterationRaster;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::zoom::errors::ZoomError;

/// Slowest-escaping pixel that still escaped, first in scan order on ties.
///
/// Counts of 0 (escaped on the first step) and `max_iterations` (never
/// escaped) are not boundary detail and never win.
pub fn find_focus_pixel(raster: &IterationRaster) -> Result<Point, ZoomError> {
    let max_iterations = raster.max_iterations();
    let mut best: Option<(Point, u32)> = None;

    for (pixel, count) in raster.iter() {
        if count == 0 || count >= max_iterations {
            continue;
        }

        // strict comparison keeps the earliest pixel on ties
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((pixel, count));
        }
    }

    best.map(|(pixel, _)| pixel)
        .ok_or(ZoomError::NoBoundaryPoint { max_iterations })
}

/// Plane coordinate the zoom converges toward, picked from `raster`
/// rendered over `region`.
pub fn find_focus(raster: &IterationRaster, region: PlaneRegion) -> Result<Complex, ZoomError> {
    let pixel = find_focus_pixel(raster)?;

    Ok(pixel_to_complex_coords(pixel, raster.resolution(), region)?)
}

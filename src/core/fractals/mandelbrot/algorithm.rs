use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_raster::IterationRaster;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// One step of the orbit: `z' = z² - c`.
#[inline]
#[must_use]
pub fn step_iteration(z: Complex, c: Complex) -> Complex {
    z * z - c
}

/// Counts the steps whose result stayed below `abort_threshold` (compared
/// against the squared magnitude). A point escaping on its first step
/// scores 0; a point that never escapes scores `max_iterations`.
#[must_use]
pub fn escape_count(c: Complex, abort_threshold: f64, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = step_iteration(z, c);

        // NaN from an overflowed orbit counts as escaped
        if !(z.magnitude_squared() < abort_threshold) {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    resolution: Resolution,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.resolution, self.params.region())?;

        Ok(escape_count(
            c,
            self.params.abort_threshold(),
            self.params.max_iterations(),
        ))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(resolution: Resolution, params: MandelbrotParams) -> Self {
        Self { resolution, params }
    }

    /// Escape counts for every pixel of the frame.
    pub fn build_raster(&self) -> Result<IterationRaster, MandelbrotError> {
        let counts = generate_fractal(self.resolution, self)?;

        Ok(IterationRaster::from_data(
            self.resolution,
            self.params.max_iterations(),
            counts,
        )?)
    }
}

pub fn build_raster(
    params: MandelbrotParams,
    resolution: Resolution,
) -> Result<IterationRaster, MandelbrotError> {
    MandelbrotAlgorithm::new(resolution, params).build_raster()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::plane_region::PlaneRegion;

    fn params(max_iterations: u32) -> MandelbrotParams {
        MandelbrotParams::new(
            PlaneRegion::new(-1.0, 2.0, -1.0, 1.0).unwrap(),
            max_iterations,
            2.0,
        )
        .unwrap()
    }

    #[test]
    fn test_step_iteration_subtracts_c() {
        let z = Complex::new(1.0, 1.0);
        let c = Complex::new(0.5, -0.5);

        // (1 + i)² = 2i, 2i - (0.5 - 0.5i) = -0.5 + 2.5i
        assert_eq!(step_iteration(z, c), Complex::new(-0.5, 2.5));
    }

    #[test]
    fn test_first_step_from_origin_is_negated_c() {
        let c = Complex::new(0.3, -0.2);
        assert_eq!(step_iteration(Complex::ZERO, c), Complex::new(-0.3, 0.2));
    }

    #[test]
    fn test_point_escaping_on_first_step_scores_zero() {
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 2.0, 100), 0);
    }

    #[test]
    fn test_points_outside_threshold_escape_immediately() {
        for c in [
            Complex::new(-3.0, 0.0),
            Complex::new(0.0, 1.5),
            Complex::new(1.0, 1.0),
        ] {
            assert!(c.magnitude_squared() >= 2.0);
            assert_eq!(escape_count(c, 2.0, 100), 0);
        }
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_count(Complex::ZERO, 2.0, 50), 50);
    }

    #[test]
    fn test_threshold_is_compared_against_squared_magnitude() {
        // z1 = -1.2, |z1|² = 1.44: bounded under 2.0
        // z2 = 1.44 - 1.2 = 0.24, bounded; the orbit settles into a two-cycle
        let c = Complex::new(1.2, 0.0);
        assert_eq!(escape_count(c, 2.0, 20), 20);

        // the same point escapes at once when the bound is 1.0
        assert_eq!(escape_count(c, 1.0, 20), 0);
    }

    #[test]
    fn test_counts_bounded_steps_before_escape() {
        // c = -1: z1 = 1 stays bounded, z2 = 1 + 1 = 2 escapes (4 >= 2)
        assert_eq!(escape_count(Complex::new(-1.0, 0.0), 2.0, 100), 1);
    }

    #[test]
    fn test_zero_budget_returns_zero() {
        assert_eq!(escape_count(Complex::ZERO, 2.0, 0), 0);
    }

    #[test]
    fn test_compute_matches_escape_count() {
        let resolution = Resolution::new(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(resolution, params(30));

        // top-left pixel maps to (-1, 1), |c|² = 2
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(0));
        assert!(algorithm.compute(Point { x: 4, y: 0 }).is_err());
    }

    #[test]
    fn test_build_raster_length_and_range() {
        let resolution = Resolution::new(32, 24).unwrap();
        let raster = build_raster(params(40), resolution).unwrap();

        assert_eq!(raster.len(), 32 * 24);
        assert!(raster.counts().iter().all(|&count| count <= 40));
        assert_eq!(raster.max_iterations(), 40);
    }

    #[test]
    fn test_build_raster_is_deterministic() {
        let resolution = Resolution::new(40, 30).unwrap();
        let first = build_raster(params(60), resolution).unwrap();
        let second = build_raster(params(60), resolution).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_raster_contains_interior_and_escaping_points() {
        let resolution = Resolution::new(30, 20).unwrap();
        let raster = build_raster(params(50), resolution).unwrap();

        // pixel (10, 10) maps to the origin
        assert_eq!(raster.get(Point { x: 10, y: 10 }), Ok(50));
        assert_eq!(raster.get(Point { x: 0, y: 0 }), Ok(0));
    }
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GenerateFractalError<F> {
    Algorithm(F),
    AllocationFailed { pixels: usize },
}

impl<F: fmt::Display> fmt::Display for GenerateFractalError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::AllocationFailed { pixels } => {
                write!(f, "could not allocate results for {} pixels", pixels)
            }
        }
    }
}

impl<F: Error + 'static> Error for GenerateFractalError<F> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::AllocationFailed { .. } => None,
        }
    }
}

/// Runs `algorithm` over every pixel of `resolution`, left to right and top
/// to bottom, collecting results in that order. Stops at the first failure.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>> {
    let pixels = resolution.pixel_count();
    let mut results = Vec::new();

    results
        .try_reserve_exact(pixels)
        .map_err(|_| GenerateFractalError::AllocationFailed { pixels })?;

    for pixel in resolution.points() {
        results.push(
            algorithm
                .compute(pixel)
                .map_err(GenerateFractalError::Algorithm)?,
        );
    }

    Ok(results)
}

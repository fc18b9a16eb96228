use crate::core::{
    data::plane_region::PlaneRegion, fractals::mandelbrot::errors::MandelbrotError,
};

/// Everything one frame's escape-time computation depends on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    region: PlaneRegion,
    max_iterations: u32,
    abort_threshold: f64,
}

impl MandelbrotParams {
    pub fn new(
        region: PlaneRegion,
        max_iterations: u32,
        abort_threshold: f64,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(abort_threshold.is_finite() && abort_threshold > 0.0) {
            return Err(MandelbrotError::InvalidAbortThreshold(abort_threshold));
        }

        Ok(Self {
            region,
            max_iterations,
            abort_threshold,
        })
    }

    #[must_use]
    pub fn region(&self) -> PlaneRegion {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Bound on the squared magnitude of the orbit.
    #[must_use]
    pub fn abort_threshold(&self) -> f64 {
        self.abort_threshold
    }

    /// Same parameters for a different viewport and iteration budget.
    pub fn with_frame(
        &self,
        region: PlaneRegion,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        Self::new(region, max_iterations, self.abort_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> PlaneRegion {
        PlaneRegion::new(-1.0, 2.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let params = MandelbrotParams::new(region(), 100, 2.0).unwrap();

        assert_eq!(params.region(), region());
        assert_eq!(params.max_iterations(), 100);
        assert_eq!(params.abort_threshold(), 2.0);
    }

    #[test]
    fn test_rejects_zero_max_iterations() {
        assert_eq!(
            MandelbrotParams::new(region(), 0, 2.0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_rejects_bad_abort_threshold() {
        assert_eq!(
            MandelbrotParams::new(region(), 10, 0.0),
            Err(MandelbrotError::InvalidAbortThreshold(0.0))
        );
        assert_eq!(
            MandelbrotParams::new(region(), 10, f64::INFINITY),
            Err(MandelbrotError::InvalidAbortThreshold(f64::INFINITY))
        );
        assert!(MandelbrotParams::new(region(), 10, f64::NAN).is_err());
    }

    #[test]
    fn test_with_frame_keeps_abort_threshold() {
        let params = MandelbrotParams::new(region(), 100, 4.0).unwrap();
        let smaller = PlaneRegion::new(0.0, 1.0, 0.0, 0.5).unwrap();
        let next = params.with_frame(smaller, 120).unwrap();

        assert_eq!(next.region(), smaller);
        assert_eq!(next.max_iterations(), 120);
        assert_eq!(next.abort_threshold(), 4.0);
    }
}

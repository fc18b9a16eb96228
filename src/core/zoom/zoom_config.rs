use crate::core::{
    data::{plane_region::PlaneRegion, resolution::Resolution},
    fractals::mandelbrot::{errors::MandelbrotError, params::MandelbrotParams},
    zoom::{budget::{DEFAULT_BUDGET_STEP, LinearBudgetGrowth}, errors::ZoomError},
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ABORT_THRESHOLD: f64 = 2.0;
pub const DEFAULT_FPS: u32 = 25;
pub const DEFAULT_DURATION_SECONDS: u32 = 10;
pub const DEFAULT_SHRINK_PERCENT: f64 = 20.0;
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

pub(crate) fn default_region() -> PlaneRegion {
    PlaneRegion::new(-1.0, 2.0, -1.0, 1.0).expect("default zoom region is valid")
}

pub(crate) fn default_resolution() -> Resolution {
    Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default resolution is valid")
}

/// Parameters for a whole zoom run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub region: PlaneRegion,
    pub resolution: Resolution,
    pub max_iterations: u32,
    /// Squared-magnitude escape bound.
    pub abort_threshold: f64,
    pub fps: u32,
    pub duration_seconds: u32,
    pub shrink_percent: f64,
    pub budget_step: u32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            resolution: default_resolution(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            abort_threshold: DEFAULT_ABORT_THRESHOLD,
            fps: DEFAULT_FPS,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            shrink_percent: DEFAULT_SHRINK_PERCENT,
            budget_step: DEFAULT_BUDGET_STEP,
        }
    }
}

impl ZoomConfig {
    /// Total frames to render, never fewer than one.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.fps.saturating_mul(self.duration_seconds).max(1)
    }

    pub fn initial_params(&self) -> Result<MandelbrotParams, MandelbrotError> {
        MandelbrotParams::new(self.region, self.max_iterations, self.abort_threshold)
    }

    #[must_use]
    pub fn budget_policy(&self) -> LinearBudgetGrowth {
        LinearBudgetGrowth::new(self.budget_step)
    }

    /// Checks the shrink percentage up front so a bad run fails before frame 0 is rendered.
    pub fn validate_shrink(&self) -> Result<(), ZoomError> {
        if !(0.0..100.0).contains(&self.shrink_percent) {
            return Err(ZoomError::InvalidShrinkPercent(self.shrink_percent));
        }

        Ok(())
    }
}

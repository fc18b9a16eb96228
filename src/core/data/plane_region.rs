use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRegionError {
    NonFiniteBound,
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlaneRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound => write!(f, "plane region bounds must be finite"),
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane region size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PlaneRegionError {}

/// Rectangle of the complex plane mapped onto the image. The real axis runs
/// along `x`, the imaginary axis along `y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlaneRegion {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlaneRegionError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(PlaneRegionError::NonFiniteBound);
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        // min == max also lands here, and so does a span that underflowed to zero
        if !(width > 0.0 && height > 0.0) {
            return Err(PlaneRegionError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max
            && self.y_min <= point.imag
            && point.imag <= self.y_max
    }
}

impl fmt::Display for PlaneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

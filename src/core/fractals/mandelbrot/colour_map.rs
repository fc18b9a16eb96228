use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_raster::IterationRaster;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

pub const DEFAULT_RED_DIVISOR: f64 = 1.1;
pub const DEFAULT_GREEN_DIVISOR: f64 = 1.05;
pub const DEFAULT_BLUE_DIVISOR: f64 = 1.0;

#[derive(Debug, PartialEq)]
pub enum MandelbrotColourMapError {
    ZeroMaxIterations,
    InvalidDivisor(f64),
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for MandelbrotColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "colour mapping needs a maximum iteration count above zero")
            }
            Self::InvalidDivisor(divisor) => {
                write!(f, "channel divisor must be positive and finite, got {}", divisor)
            }
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotColourMapError {}

/// Grey ramp on the inverted count with a fixed per-channel bias.
///
/// Points that never escaped come out black, points escaping on the first
/// step come out brightest. Each channel is `(max - count) * 255 / max`
/// divided by that channel's divisor, clamped to `0..=255` and truncated.
/// The default divisors leave blue strongest and red weakest.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotChannelBias {
    max_iterations: u32,
    divisors: [f64; 3],
}

impl MandelbrotChannelBias {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotColourMapError> {
        Self::with_divisors(
            max_iterations,
            DEFAULT_RED_DIVISOR,
            DEFAULT_GREEN_DIVISOR,
            DEFAULT_BLUE_DIVISOR,
        )
    }

    pub fn with_divisors(
        max_iterations: u32,
        red: f64,
        green: f64,
        blue: f64,
    ) -> Result<Self, MandelbrotColourMapError> {
        if max_iterations == 0 {
            return Err(MandelbrotColourMapError::ZeroMaxIterations);
        }

        let divisors = [red, green, blue];
        if let Some(&bad) = divisors.iter().find(|d| !(d.is_finite() && **d > 0.0)) {
            return Err(MandelbrotColourMapError::InvalidDivisor(bad));
        }

        Ok(Self {
            max_iterations,
            divisors,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn channel(&self, scaled: f64, divisor: f64) -> u8 {
        (scaled / divisor).clamp(0.0, 255.0) as u8
    }
}

impl ColourMap<u32> for MandelbrotChannelBias {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        let colour_step = 255.0 / f64::from(self.max_iterations);
        let scaled = f64::from(self.max_iterations - iterations) * colour_step;
        let [red, green, blue] = self.divisors;

        Ok(Colour {
            r: self.channel(scaled, red),
            g: self.channel(scaled, green),
            b: self.channel(scaled, blue),
        })
    }

    fn display_name(&self) -> &str {
        "Channel bias"
    }
}

/// Renders a raster with the default palette scaled to the raster's own budget.
pub fn map_to_colour(raster: &IterationRaster) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let palette = MandelbrotChannelBias::new(raster.max_iterations())
        .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?;

    generate_pixel_buffer(raster.counts().iter().copied(), &palette, raster.resolution())
}

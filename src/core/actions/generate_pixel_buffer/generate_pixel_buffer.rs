use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
    AllocationFailed { bytes: usize },
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::AllocationFailed { bytes } => {
                write!(f, "could not allocate a {} byte pixel buffer", bytes)
            }
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
            Self::AllocationFailed { .. } => None,
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates a pixel buffer by mapping row-major input values to colours.
///
/// The input must hold exactly one value per pixel of `resolution`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T> + ?Sized>(
    input: impl IntoIterator<Item = T>,
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let bytes = resolution.pixel_count() * 3;
    let mut buffer: PixelBufferData = Vec::new();

    buffer
        .try_reserve_exact(bytes)
        .map_err(|_| GeneratePixelBufferError::AllocationFailed { bytes })?;

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(resolution, buffer)?)
}

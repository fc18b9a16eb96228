use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::codecs::bmp::BmpEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageError};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFileFormat {
    #[default]
    Bmp,
    Ppm,
}

impl ImageFileFormat {
    pub const ALL: &'static [Self] = &[Self::Bmp, Self::Ppm];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Ppm => "ppm",
        }
    }
}

impl fmt::Display for ImageFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown image format '{}', expected bmp or ppm", s))
    }
}

fn into_io_error(err: ImageError) -> std::io::Error {
    match err {
        ImageError::IoError(err) => err,
        other => std::io::Error::other(other),
    }
}

/// Writes finished frames as 24-bit RGB image files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFilePresenter {
    format: ImageFileFormat,
}

impl ImageFilePresenter {
    #[must_use]
    pub fn new(format: ImageFileFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub fn format(&self) -> ImageFileFormat {
        self.format
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn extension(&self) -> &str {
        self.format.extension()
    }

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut output = BufWriter::new(File::create(filepath)?);
        let width = buffer.resolution().width();
        let height = buffer.resolution().height();

        let written = match self.format {
            ImageFileFormat::Bmp => BmpEncoder::new(&mut output).write_image(
                buffer.buffer(),
                width,
                height,
                ExtendedColorType::Rgb8,
            ),
            ImageFileFormat::Ppm => PnmEncoder::new(&mut output)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
                .write_image(buffer.buffer(), width, height, ExtendedColorType::Rgb8),
        };
        written.map_err(into_io_error)?;

        output.flush()
    }
}

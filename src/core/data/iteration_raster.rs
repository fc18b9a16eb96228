use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum IterationRasterError {
    PixelOutsideBounds {
        pixel: Point,
        resolution: Resolution,
    },
    BoundsMismatch {
        expected: usize,
        actual: usize,
    },
    CountExceedsMax {
        index: usize,
        count: u32,
        max_iterations: u32,
    },
    AllocationFailed {
        pixels: usize,
    },
}

impl fmt::Display for IterationRasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {} raster",
                    pixel.x, pixel.y, resolution
                )
            }
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "raster needs {} counts but {} were supplied",
                    expected, actual
                )
            }
            Self::CountExceedsMax {
                index,
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "count {} at index {} exceeds maximum {}",
                    count, index, max_iterations
                )
            }
            Self::AllocationFailed { pixels } => {
                write!(f, "could not allocate a raster of {} pixels", pixels)
            }
        }
    }
}

impl Error for IterationRasterError {}

/// Escape counts for one frame, row-major, each in `0..=max_iterations`.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRaster {
    resolution: Resolution,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl IterationRaster {
    pub fn from_data(
        resolution: Resolution,
        max_iterations: u32,
        counts: Vec<u32>,
    ) -> Result<Self, IterationRasterError> {
        if counts.len() != resolution.pixel_count() {
            return Err(IterationRasterError::BoundsMismatch {
                expected: resolution.pixel_count(),
                actual: counts.len(),
            });
        }

        if let Some((index, &count)) = counts
            .iter()
            .enumerate()
            .find(|(_, count)| **count > max_iterations)
        {
            return Err(IterationRasterError::CountExceedsMax {
                index,
                count,
                max_iterations,
            });
        }

        Ok(Self {
            resolution,
            max_iterations,
            counts,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, pixel: Point) -> Result<u32, IterationRasterError> {
        self.resolution
            .index_of(pixel)
            .map(|index| self.counts[index])
            .ok_or(IterationRasterError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            })
    }

    /// `(pixel, count)` pairs in row-major scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.resolution.points().zip(self.counts.iter().copied())
    }

    #[must_use]
    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let raster = IterationRaster::from_data(resolution(3, 2), 10, vec![0, 1, 2, 3, 4, 10]).unwrap();

        assert_eq!(raster.len(), 6);
        assert_eq!(raster.max_iterations(), 10);
        assert_eq!(raster.counts(), &[0, 1, 2, 3, 4, 10]);
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = IterationRaster::from_data(resolution(2, 2), 10, vec![1, 2, 3]);

        assert_eq!(
            result,
            Err(IterationRasterError::BoundsMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_data_rejects_count_above_max() {
        let result = IterationRaster::from_data(resolution(2, 1), 5, vec![5, 6]);

        assert_eq!(
            result,
            Err(IterationRasterError::CountExceedsMax {
                index: 1,
                count: 6,
                max_iterations: 5
            })
        );
    }

    #[test]
    fn test_get_by_row_and_column() {
        let raster = IterationRaster::from_data(resolution(3, 2), 10, vec![0, 1, 2, 3, 4, 5]).unwrap();

        assert_eq!(raster.get(Point { x: 0, y: 0 }), Ok(0));
        assert_eq!(raster.get(Point { x: 2, y: 0 }), Ok(2));
        assert_eq!(raster.get(Point { x: 0, y: 1 }), Ok(3));
        assert_eq!(raster.get(Point { x: 2, y: 1 }), Ok(5));
    }

    #[test]
    fn test_get_outside_bounds() {
        let raster = IterationRaster::from_data(resolution(3, 2), 10, vec![0; 6]).unwrap();

        assert_eq!(
            raster.get(Point { x: 3, y: 0 }),
            Err(IterationRasterError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                resolution: resolution(3, 2)
            })
        );
    }

    #[test]
    fn test_iter_pairs_points_with_counts() {
        let raster = IterationRaster::from_data(resolution(2, 2), 9, vec![7, 8, 9, 1]).unwrap();
        let pairs: Vec<(Point, u32)> = raster.iter().collect();

        assert_eq!(pairs[1], (Point { x: 1, y: 0 }, 8));
        assert_eq!(pairs[2], (Point { x: 0, y: 1 }, 9));
        assert_eq!(pairs.len(), 4);
    }
}

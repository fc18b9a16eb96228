pub mod colour;
pub mod complex;
pub mod iteration_raster;
pub mod pixel_buffer;
pub mod plane_region;
pub mod point;
pub mod resolution;

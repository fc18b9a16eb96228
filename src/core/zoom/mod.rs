pub mod budget;
pub mod errors;
pub mod focus;
pub mod sequence;
pub mod shrink;
pub mod zoom_config;

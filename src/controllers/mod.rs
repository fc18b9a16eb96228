pub mod ports;
pub mod zoom_sequence;

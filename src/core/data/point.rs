/// Pixel coordinate: `x` is the column, `y` the row counted downward from the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

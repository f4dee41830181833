pub type Coord = u32;

/// `(row, column)`, row 0 is the bottom row of a rendered map
pub type Point = (Coord, Coord);

/// Largest map size whose indices still fit the three digit labels
pub const MAX_SIZE: Coord = 1000;

pub fn in_bounds((row, col): Point, size: Coord) -> bool {
    row < size && col < size
}

use std::fmt;

/// A cell on the playing field.
///
/// Coordinates are signed so that a head which has just left the field (e.g.,
/// `x == -1`) is still representable and can be detected as a collision.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the playing field, in cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridSize {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl GridSize {
    pub(crate) const fn new(width: i32, height: i32) -> GridSize {
        GridSize { width, height }
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        in_bounds(cell, self.width, self.height)
    }

    /// Iterate over every cell in the field in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

/// Returns true iff `0 <= cell.x < width` and `0 <= cell.y < height`
pub(crate) fn in_bounds(cell: Cell, width: i32, height: i32) -> bool {
    (0..width).contains(&cell.x) && (0..height).contains(&cell.y)
}

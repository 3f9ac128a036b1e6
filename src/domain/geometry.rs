/// Pixel and grid coordinates.
///
/// Two coordinate spaces, both with origin at the top-left:
///   - `Point`: pixels, where sprites are drawn and speeds integrate
///   - `Cell`:  grid tiles, where terrain and collectibles live
///
/// Conversion is lossy in one direction: every pixel inside a tile maps
/// to that tile, and a tile maps back to its top-left pixel. Cell sizes
/// come from `ArenaConfig`, never from constants.

use std::collections::BTreeSet;
use std::ops::Add;

use crate::config::ArenaConfig;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Terrain and collectibles are positional sets: membership and removal only.
pub type CellSet = BTreeSet<Cell>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The cell containing this pixel. Integer division truncates, so any
    /// point inside a cell resolves to that cell.
    #[inline]
    pub fn to_cell(self, arena: &ArenaConfig) -> Cell {
        Cell::new(self.y / arena.cell_height, self.x / arena.cell_width)
    }

    /// Is this point exactly on a vertical grid line?
    #[inline]
    pub fn x_aligned(self, arena: &ArenaConfig) -> bool {
        self.x % arena.cell_width == 0
    }

    /// Is this point exactly on a horizontal grid line?
    #[inline]
    pub fn y_aligned(self, arena: &ArenaConfig) -> bool {
        self.y % arena.cell_height == 0
    }
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    /// Top-left pixel of the cell.
    #[inline]
    pub fn to_point(self, arena: &ArenaConfig) -> Point {
        Point::new(self.col * arena.cell_width, self.row * arena.cell_height)
    }
}

impl Direction {
    /// Unit displacement as (d_row, d_col).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left  => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up    => (-1, 0),
            Direction::Down  => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// +1 for Right/Down, -1 for Left/Up.
    pub fn sign(self) -> i32 {
        let (dr, dc) = self.delta();
        dr + dc
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let (dr, dc) = dir.delta();
        Cell::new(self.row + dr, self.col + dc)
    }
}

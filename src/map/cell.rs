// src/map/cell.rs

use std::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Traversable.
    Path,
    /// Impassable. Freshly allocated grids are all wall.
    #[default]
    Wall,
}

impl Cell {
    pub fn is_path(self) -> bool {
        self == Cell::Path
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    /// Numeric code used by the text printer and by agent front ends that
    /// expect `0` for open space and `1` for obstruction.
    pub fn code(self) -> u8 {
        match self {
            Cell::Path => 0,
            Cell::Wall => 1,
        }
    }

    /// Single-character glyph for plain (uncolored) output.
    pub fn glyph(self) -> char {
        match self {
            Cell::Path => '.',
            Cell::Wall => '#',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// src/map/grid_map.rs

use crate::error::{MapGenError, Result};
use crate::map::Cell;
use crate::utils::geometry::Point2D;
use std::fmt;
use std::ops::Range;

/// A rectangular grid of cells addressed as `[column][row]`.
///
/// Storage is column-major because generation carves one column at a time
/// and the connectivity check only ever looks at whole columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Creates a `width` x `height` grid with every cell set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Cell) -> Self {
        GridMap {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Creates a grid of walls.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Wall)
    }

    /// Builds a grid from explicit columns. All columns must share one length.
    pub fn from_columns(columns: Vec<Vec<Cell>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if let Some(x) = columns.iter().position(|c| c.len() != height) {
            return Err(MapGenError::invalid(
                "columns",
                format!(
                    "column {} has {} rows, expected {}",
                    x,
                    columns[x].len(),
                    height
                ),
            ));
        }
        Ok(GridMap {
            width,
            height,
            cells: columns.into_iter().flatten().collect(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[x * self.height + y])
        } else {
            None
        }
    }

    /// True for walls and for any coordinate outside the grid.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y).map_or(true, Cell::is_wall)
    }

    pub fn is_path(&self, x: usize, y: usize) -> bool {
        !self.is_wall(x, y)
    }

    pub fn column(&self, x: usize) -> Option<&[Cell]> {
        if x < self.width {
            let start = x * self.height;
            Some(&self.cells[start..start + self.height])
        } else {
            None
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() panics on a zero size, and a zero-height grid has no cells anyway.
        self.cells.chunks(self.height.max(1)).take(self.width)
    }

    /// Iterates the cells of row `y` from left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width).filter_map(move |x| self.get(x, y))
    }

    pub(crate) fn column_mut(&mut self, x: usize) -> &mut [Cell] {
        let start = x * self.height;
        &mut self.cells[start..start + self.height]
    }

    /// Replaces column `x` with walls except for `rows`, which becomes path.
    pub(crate) fn carve_column(&mut self, x: usize, rows: Range<usize>) {
        let column = self.column_mut(x);
        column.fill(Cell::Wall);
        column[rows].fill(Cell::Path);
    }

    /// Number of separate path runs in column `x`.
    pub fn path_runs(&self, x: usize) -> usize {
        let Some(column) = self.column(x) else {
            return 0;
        };
        let mut runs = 0;
        let mut previous = Cell::Wall;
        for &cell in column {
            if cell.is_path() && previous.is_wall() {
                runs += 1;
            }
            previous = cell;
        }
        runs
    }

    /// The corridor of column `x`: its single contiguous run of path cells.
    /// Returns `None` when the column has no path or more than one run.
    pub fn corridor(&self, x: usize) -> Option<Range<usize>> {
        let column = self.column(x)?;
        if self.path_runs(x) != 1 {
            return None;
        }
        let start = column.iter().position(|c| c.is_path())?;
        let len = column[start..].iter().take_while(|c| c.is_path()).count();
        Some(start..start + len)
    }

    /// Embeds this grid at offset (1, 1) inside a one-cell ring of walls.
    pub fn with_border(&self) -> GridMap {
        let mut bordered = GridMap::new(self.width + 2, self.height + 2);
        for (x, column) in self.columns().enumerate() {
            bordered.column_mut(x + 1)[1..=self.height].copy_from_slice(column);
        }
        bordered
    }

    /// Strips a one-cell border, returning `None` if there is nothing inside it.
    pub fn interior(&self) -> Option<GridMap> {
        if self.width < 3 || self.height < 3 {
            return None;
        }
        let columns = self.columns()
            .skip(1)
            .take(self.width - 2)
            .map(|c| c[1..self.height - 1].to_vec())
            .collect();
        GridMap::from_columns(columns).ok()
    }

    /// True when every cell on the outer ring is a wall.
    pub fn has_wall_border(&self) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let last_x = self.width - 1;
        let last_y = self.height - 1;
        (0..self.width).all(|x| self.is_wall(x, 0) && self.is_wall(x, last_y))
            && (0..self.height).all(|y| self.is_wall(0, y) && self.is_wall(last_x, y))
    }

    /// Collision lookup for a point in pixel space where each cell spans
    /// `scale` pixels. Anything off the map counts as blocked.
    pub fn is_blocked_at(&self, point: &Point2D, scale: f64) -> bool {
        match point.to_cell(scale) {
            Some((x, y)) => self.is_wall(x, y),
            None => true,
        }
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for cell in self.row(y) {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

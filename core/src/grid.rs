//! Fixed-size 2D grid of cells and the Game of Life transition rule.
//!
//! The origin is the top-left corner of the grid; X increases to the right and
//! Y increases downwards. Cells are stored row-major, so the cell at `(x, y)`
//! lives at index `y * width + x`.

use itertools::{iproduct, Itertools};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered when constructing or accessing a grid.
#[allow(missing_docs)]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be nonzero; got {width}x{height}")]
    ZeroSize { width: usize, height: usize },
    #[error("grid of size {width}x{height} is too big")]
    TooBig { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside of {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("pattern has no live cells")]
    EmptyPattern,
}

/// How neighbors are counted for cells at the edge of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Each edge connects to the opposite edge.
    Toroidal,
    /// Cells on the outer boundary of the grid are considered to have zero
    /// neighbors, regardless of their surroundings.
    Bounded,
}
impl Default for Topology {
    fn default() -> Self {
        Self::Toroidal
    }
}

/// Returns the next state of a cell under B3/S23.
#[inline]
pub fn life_rule(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}

/// Largest number of cells in a grid (256 Mi cells, one byte each).
pub const MAX_CELLS: usize = 1 << 28;

/// Fixed-size 2D grid of live/dead cells.
///
/// The dimensions of a grid never change after construction; to "resize" a
/// grid, make a new one and `place()` the old one into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[bool]>,
}
impl Grid {
    /// Creates a grid with all cells dead.
    ///
    /// Returns [`GridError::TooBig`] if the grid would have more than
    /// [`MAX_CELLS`] cells.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSize { width, height });
        }
        let too_big = GridError::TooBig { width, height };
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(too_big)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_big)?;
        cells.resize(len, false);

        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid from row-major data, so that `rows[y][x]` is copied into
    /// the cell at `(x, y)`. Missing rows and cells past the end of a short row
    /// are dead; data outside of the grid is ignored.
    pub fn from_rows<R: AsRef<[bool]>>(width: usize, height: usize, rows: &[R]) -> GridResult<Self> {
        let mut ret = Self::new(width, height)?;
        for (y, row) in rows.iter().take(height).enumerate() {
            let row = row.as_ref();
            let n = row.len().min(width);
            ret.cells[y * width..y * width + n].copy_from_slice(&row[..n]);
        }
        Ok(ret)
    }

    /// Returns the width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the state of the cell at `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> GridResult<bool> {
        Ok(self.cells[self.flatten_idx(x, y)?])
    }
    /// Sets the state of the cell at `(x, y)`.
    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) -> GridResult<()> {
        let idx = self.flatten_idx(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
    /// Returns true if there are no live cells.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }
    /// Returns an iterator over the positions of all live cells, with Y as the
    /// outer loop and X as the inner loop.
    pub fn live_cells(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        let width = self.width;
        self.cells
            .iter()
            .positions(|&cell| cell)
            .map(move |idx| (idx % width, idx / width))
    }
    /// Returns an iterator over the rows of the grid, from top to bottom.
    pub fn rows(&self) -> impl '_ + Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Sets every cell to a uniformly random state using the thread-local RNG.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }
    /// Sets every cell to a uniformly random state using the given RNG.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen();
        }
    }

    /// Copies every cell of `other` into this grid with the top-left corner of
    /// `other` at `(x, y)`. Cells that land outside of this grid are dropped.
    pub fn place(&mut self, other: &Grid, x: isize, y: isize) {
        for (j, row) in other.rows().enumerate() {
            let dest_y = y + j as isize;
            if dest_y < 0 || dest_y >= self.height as isize {
                continue;
            }
            for (i, &state) in row.iter().enumerate() {
                let dest_x = x + i as isize;
                if dest_x < 0 || dest_x >= self.width as isize {
                    continue;
                }
                self.cells[dest_y as usize * self.width + dest_x as usize] = state;
            }
        }
    }
    /// Places `other` in the center of this grid, rounding toward the top-left.
    pub fn place_center(&mut self, other: &Grid) {
        let center_x = (self.width / 2) as isize - (other.width / 2) as isize;
        let center_y = (self.height / 2) as isize - (other.height / 2) as isize;
        self.place(other, center_x, center_y);
    }

    /// Returns the number of live cells in the Moore neighborhood of `(x, y)`.
    pub fn count_live_neighbors(
        &self,
        x: usize,
        y: usize,
        topology: Topology,
    ) -> GridResult<usize> {
        self.flatten_idx(x, y)?;
        Ok(self.live_neighbors(x, y, topology))
    }

    /// Returns the next generation of the grid, counting neighbors with
    /// wraparound.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn step(&self) -> Grid {
        let cells = iproduct!(0..self.height, 0..self.width)
            .map(|(y, x)| {
                let alive = self.cells[y * self.width + x];
                life_rule(alive, self.live_neighbors(x, y, Topology::Toroidal))
            })
            .collect_vec();
        Self {
            width: self.width,
            height: self.height,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Returns the smallest grid containing every live cell, with the top-left
    /// live-cell bounds moved to the origin.
    pub fn bounding_box(&self) -> GridResult<Grid> {
        let (min_x, max_x) = self
            .live_cells()
            .map(|(x, _)| x)
            .minmax()
            .into_option()
            .ok_or(GridError::EmptyPattern)?;
        let (min_y, max_y) = self
            .live_cells()
            .map(|(_, y)| y)
            .minmax()
            .into_option()
            .ok_or(GridError::EmptyPattern)?;

        let mut ret = Grid::new(max_x - min_x + 1, max_y - min_y + 1)?;
        for (x, y) in self.live_cells() {
            let idx = (y - min_y) * ret.width + (x - min_x);
            ret.cells[idx] = true;
        }
        Ok(ret)
    }

    /// Counts live neighbors, assuming `(x, y)` is in bounds.
    fn live_neighbors(&self, x: usize, y: usize, topology: Topology) -> usize {
        match topology {
            Topology::Toroidal => {
                let (w, h) = (self.width as isize, self.height as isize);
                iproduct!(-1_isize..=1, -1_isize..=1)
                    .filter(|&(dy, dx)| dx != 0 || dy != 0)
                    .filter(|&(dy, dx)| {
                        let nx = (x as isize + dx).rem_euclid(w) as usize;
                        let ny = (y as isize + dy).rem_euclid(h) as usize;
                        self.cells[ny * self.width + nx]
                    })
                    .count()
            }
            Topology::Bounded => {
                if x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1 {
                    return 0;
                }
                iproduct!(y - 1..=y + 1, x - 1..=x + 1)
                    .filter(|&(ny, nx)| (nx, ny) != (x, y))
                    .filter(|&(ny, nx)| self.cells[ny * self.width + nx])
                    .count()
            }
        }
    }

    fn flatten_idx(&self, x: usize, y: usize) -> GridResult<usize> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

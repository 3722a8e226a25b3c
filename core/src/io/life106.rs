//! [Life 1.06 format](https://conwaylife.com/wiki/Life_1.06): a header line
//! followed by the `x y` coordinates of each live cell.
//!
//! Coordinates may be negative; the imported grid is the bounding box of the
//! listed cells. The first line is always skipped, as are blank lines and `#`
//! lines after it.

use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::SerializablePattern;
use crate::grid::{Grid, GridError};

/// Result type returned by fallible Life 1.06 routines.
pub type Life106Result<T> = Result<T, Life106Error>;

/// Error encountered during Life 1.06 import.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Life106Error {
    #[error("pattern has no live cells")]
    EmptyPattern,
    #[error("expected two integer coordinates; got {0:?}")]
    InvalidCoordinate(String),
    #[error("pattern is too big")]
    TooBig,
    #[error(transparent)]
    Grid(#[from] GridError),
}

const HEADER: &str = "#Life 1.06";

/// Life 1.06 contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Life106 {
    /// Live cell coordinates, in file order.
    cells: Vec<(i64, i64)>,
}
impl Life106 {
    /// Returns the coordinates of every live cell, in the order they are
    /// listed.
    pub fn cells(&self) -> &[(i64, i64)] {
        &self.cells
    }
}
impl fmt::Display for Life106 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        for (x, y) in &self.cells {
            writeln!(f, "{} {}", x, y)?;
        }
        Ok(())
    }
}
impl FromStr for Life106 {
    type Err = Life106Error;

    fn from_str(s: &str) -> Life106Result<Self> {
        let mut cells = vec![];
        // Skip the version line, whatever it says.
        for line in s.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = || Life106Error::InvalidCoordinate(line.to_owned());
            let (x, y) = line
                .split_whitespace()
                .map(str::parse::<i64>)
                .collect_tuple()
                .ok_or_else(invalid)?;
            cells.push((x.map_err(|_| invalid())?, y.map_err(|_| invalid())?));
        }
        Ok(Self { cells })
    }
}

impl SerializablePattern for Life106 {
    fn from_grid(grid: &Grid) -> Self {
        let cells = grid
            .live_cells()
            .map(|(x, y)| (x as i64, y as i64))
            .collect();
        Self { cells }
    }

    fn to_grid(&self) -> Life106Result<Grid> {
        let (min_x, max_x) = self
            .cells
            .iter()
            .map(|&(x, _)| x)
            .minmax()
            .into_option()
            .ok_or(Life106Error::EmptyPattern)?;
        let (min_y, max_y) = self
            .cells
            .iter()
            .map(|&(_, y)| y)
            .minmax()
            .into_option()
            .ok_or(Life106Error::EmptyPattern)?;

        let span = |min: i64, max: i64| {
            usize::try_from(max as i128 - min as i128 + 1).map_err(|_| Life106Error::TooBig)
        };
        let mut ret = Grid::new(span(min_x, max_x)?, span(min_y, max_y)?)?;
        for &(x, y) in &self.cells {
            // Both offsets fit because they are no larger than the grid size.
            let dx = (x as i128 - min_x as i128) as usize;
            let dy = (y as i128 - min_y as i128) as usize;
            ret.set_cell(dx, dy, true)?;
        }
        Ok(ret)
    }
}

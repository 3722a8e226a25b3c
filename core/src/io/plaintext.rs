//! [Plaintext format](https://conwaylife.com/wiki/Plaintext): one line per
//! row, `O` for live cells and `.` for dead cells.
//!
//! Lines starting with `!` are comments. The width of the pattern is the length
//! of the first non-comment line and the height is the number of non-comment
//! lines. Characters other than `O` are read as dead cells.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::SerializablePattern;
use crate::grid::{Grid, GridError};

/// Result type returned by fallible Plaintext routines.
pub type PlaintextResult<T> = Result<T, PlaintextError>;

/// Error encountered during Plaintext import.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PlaintextError {
    #[error("pattern has no rows or its first row is empty")]
    EmptyPattern,
    #[error(transparent)]
    Grid(#[from] GridError),
}

const LIVE_CHAR: char = 'O';
const DEAD_CHAR: char = '.';

/// Plaintext contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plaintext {
    /// Comment lines, each starting with `!`.
    comments: String,
    /// Non-comment lines, verbatim.
    rows: Vec<String>,
}
impl Plaintext {
    /// Returns the comments.
    pub fn comments(&self) -> &str {
        &self.comments
    }
    /// Sets the comments. Lines that do not start with `!` are written with a
    /// `!` prefix.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_comments(mut self, comments: impl ToString) -> Self {
        self.comments = comments.to_string();
        self
    }

    /// Returns the rows of the pattern, as written.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}
impl fmt::Display for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for comment_line in self.comments.trim_end().lines() {
            if !comment_line.starts_with('!') {
                write!(f, "!")?;
            }
            writeln!(f, "{}", comment_line)?;
        }
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
impl FromStr for Plaintext {
    type Err = PlaintextError;

    fn from_str(s: &str) -> PlaintextResult<Self> {
        let mut ret = Self::default();
        for line in s.lines() {
            if line.starts_with('!') {
                ret.comments.push_str(line);
                ret.comments.push('\n');
            } else {
                ret.rows.push(line.to_owned());
            }
        }
        Ok(ret)
    }
}

impl SerializablePattern for Plaintext {
    fn from_grid(grid: &Grid) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell { LIVE_CHAR } else { DEAD_CHAR })
                    .collect()
            })
            .collect();
        Self {
            comments: String::new(),
            rows,
        }
    }

    fn to_grid(&self) -> PlaintextResult<Grid> {
        let width = match self.rows.first() {
            Some(first_row) => first_row.chars().count(),
            None => 0,
        };
        let height = self.rows.len();
        if width == 0 || height == 0 {
            return Err(PlaintextError::EmptyPattern);
        }

        let rows: Vec<Vec<bool>> = self
            .rows
            .iter()
            .map(|row| row.chars().map(|ch| ch == LIVE_CHAR).collect())
            .collect();
        Ok(Grid::from_rows(width, height, &rows)?)
    }
}

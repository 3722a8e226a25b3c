//! Golly-style ["Run Length Encoded"
//! format](https://conwaylife.com/wiki/Run_Length_Encoded) for two-state
//! patterns.
//!
//! An RLE consists of optional `#` comment lines, a header line such as
//! `x = 3, y = 3, rule = B3/S23`, and a body of runs. Each run is an optional
//! count followed by `b` (dead), `o` (live), `$` (end of row), or `!` (end of
//! pattern). The body may be split across several lines, but any other
//! character, including a space inside a line, is an invalid token. Anything
//! after `!` is not read. Exported bodies are always a single line.
//!
//! RLEs can be `parse()`d from strings and printed using `to_string()`; see
//! [`SerializablePattern`](crate::io::SerializablePattern) for converting
//! to/from a grid.

use thiserror::Error;

mod components;
mod convert;

pub use components::{Rle, RleHeader, RleItem, RleRun};

use crate::grid::GridError;

/// Result type returned by fallible RLE routines.
pub type RleResult<T> = Result<T, RleError>;

lazy_static::lazy_static! {
    /// Regex matching an optional count followed by a single RLE item.
    static ref RLE_RUN_REGEX: regex::Regex =
        regex::Regex::new(r"[0-9]*[^0-9]").unwrap();
}

/// Error encountered during RLE import.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RleError {
    #[error("missing or malformed RLE header")]
    MalformedHeader,
    #[error("invalid size")]
    InvalidSize,
    #[error("invalid count")]
    InvalidCount,
    #[error("invalid token: {0:?}")]
    InvalidToken(char),
    #[error("invalid RLE item")]
    InvalidItem,
    #[error(transparent)]
    Grid(#[from] GridError),
}

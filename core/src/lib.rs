//! Conway's Game of Life simulation backend.
//!
//! This crate holds the fixed-size grid, the single-generation step function,
//! the tick-indexed timeline, and import/export of patterns in RLE, Plaintext,
//! and Life 1.06 formats.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod config;
pub mod grid;
pub mod io;
pub mod simulation;

pub mod traits {
    //! Traits that are useful to have in scope.
    pub use crate::io::SerializablePattern;
}

pub mod prelude {
    //! Everything a front-end typically needs.
    pub use crate::traits::*;

    pub use crate::config::SimConfig;
    pub use crate::grid::{Grid, GridError, GridResult, Topology};
    pub use crate::io::{
        read_file, write_file, CaFormat, CaFormatError, CaFormatResult, Life106, Plaintext, Rle,
    };
    pub use crate::simulation::{SimError, SimResult, Simulation};
}

#[cfg(test)]
mod tests;

//! Tick-indexed timeline of generations.
//!
//! A simulation records every generation it has computed, starting with the
//! seed grid at tick 0. Stepping backward just moves the current tick.
//! Stepping forward always recomputes the next generation from the current
//! one, overwriting whatever was recorded there before. Editing the current
//! grid discards every recorded generation after it, since those no longer
//! follow from the edited state.

use thiserror::Error;

use crate::config::SimConfig;
use crate::grid::{Grid, GridError, GridResult};

/// Result type returned by fallible simulation routines.
pub type SimResult<T> = Result<T, SimError>;

/// Error encountered while navigating or editing a simulation.
#[allow(missing_docs)]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SimError {
    #[error("cannot step back from the first generation")]
    AtBeginning,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Game of Life simulation with a navigable history of generations.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Recorded generations, never empty. Index 0 is the seed.
    history: Vec<Grid>,
    /// Index of the current generation in `history`.
    tick: usize,
    /// Milliseconds between generations when playing.
    tick_delay_ms: u64,
}
impl Simulation {
    /// Creates a simulation seeded with the given grid.
    pub fn new(seed: Grid) -> Self {
        Self {
            history: vec![seed],
            tick: 0,
            tick_delay_ms: SimConfig::default().tick_delay_ms,
        }
    }
    /// Creates a simulation seeded with an empty grid of the given size.
    pub fn with_size(width: usize, height: usize) -> GridResult<Self> {
        Ok(Self::new(Grid::new(width, height)?))
    }
    /// Creates a simulation seeded with an empty grid using the size and tick
    /// delay from `config`.
    pub fn from_config(config: &SimConfig) -> GridResult<Self> {
        let mut ret = Self::with_size(config.width, config.height)?;
        ret.tick_delay_ms = config.tick_delay_ms;
        Ok(ret)
    }

    /// Returns the index of the current generation.
    pub fn tick(&self) -> usize {
        self.tick
    }
    /// Returns the number of recorded generations, including ones after the
    /// current tick.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
    /// Returns the delay between generations, in milliseconds.
    pub fn tick_delay_ms(&self) -> u64 {
        self.tick_delay_ms
    }
    /// Sets the delay between generations, in milliseconds.
    pub fn set_tick_delay_ms(&mut self, ms: u64) {
        self.tick_delay_ms = ms;
    }

    /// Returns the current generation.
    pub fn current(&self) -> &Grid {
        &self.history[self.tick]
    }
    /// Returns the width of the grid.
    pub fn width(&self) -> usize {
        self.current().width()
    }
    /// Returns the height of the grid.
    pub fn height(&self) -> usize {
        self.current().height()
    }
    /// Returns the state of a cell in the current generation.
    pub fn get_cell(&self, x: usize, y: usize) -> GridResult<bool> {
        self.current().get_cell(x, y)
    }

    /// Returns to the seed generation and returns it.
    pub fn reset(&mut self) -> &Grid {
        self.tick = 0;
        self.current()
    }
    /// Returns true if there is a generation before the current one.
    pub fn can_step_back(&self) -> bool {
        self.tick > 0
    }
    /// Moves back one generation and returns it.
    pub fn step_back(&mut self) -> SimResult<&Grid> {
        if !self.can_step_back() {
            return Err(SimError::AtBeginning);
        }
        self.tick -= 1;
        Ok(self.current())
    }
    /// Computes the next generation from the current one, records it at the
    /// next tick, moves to it, and returns it.
    pub fn step_forward(&mut self) -> &Grid {
        let next = self.current().step();
        if self.tick + 1 == self.history.len() {
            self.history.push(next);
        } else {
            self.history[self.tick + 1] = next;
        }
        self.tick += 1;
        self.current()
    }

    /// Sets a cell in the current generation and discards all later
    /// generations.
    pub fn edit_cell(&mut self, x: usize, y: usize, state: bool) -> SimResult<()> {
        self.history[self.tick].set_cell(x, y, state)?;
        self.discard_future();
        Ok(())
    }
    /// Randomizes the current generation and discards all later generations.
    pub fn randomize(&mut self) {
        self.history[self.tick].randomize();
        self.discard_future();
    }
    /// Replaces the whole timeline with a single empty grid the same size as
    /// the current one, with `pattern` centered in it. The tick delay is kept.
    pub fn load_pattern(&mut self, pattern: &Grid) -> SimResult<()> {
        let mut seed = Grid::new(self.width(), self.height())?;
        seed.place_center(pattern);
        self.history = vec![seed];
        self.tick = 0;
        Ok(())
    }

    fn discard_future(&mut self) {
        self.history.truncate(self.tick + 1);
    }
}

//! Simulation settings.

/// Settings used to create a new simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Width of the starting grid.
    pub width: usize,
    /// Height of the starting grid.
    pub height: usize,
    /// Milliseconds between generations when playing. The simulation itself
    /// never reads this.
    pub tick_delay_ms: u64,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tick_delay_ms: 300,
        }
    }
}
impl SimConfig {
    /// Returns a copy of the config with the grid size grown so that a pattern
    /// of the given size fits without clipping.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn fitting(&self, width: usize, height: usize) -> Self {
        Self {
            width: self.width.max(width),
            height: self.height.max(height),
            ..self.clone()
        }
    }
}

use std::time::Duration;

use crate::config::{PlaybackSpeed, SimulationConfig};
use crate::domain::{Result, SimulationEngine};

use super::PlaybackController;

/// Session orchestrates the simulation for the frontend.
/// This is the application layer that couples the engine with playback.
pub struct Session {
    pub engine: SimulationEngine,
    pub playback: PlaybackController,
    pub speed: PlaybackSpeed,
}

impl Session {
    /// Create a session with an empty board, paused
    pub fn new(config: SimulationConfig) -> Self {
        let speed = PlaybackSpeed::default();
        Self {
            engine: SimulationEngine::new(config),
            playback: PlaybackController::new(speed.millis()),
            speed,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Toggle play/pause state
    pub fn toggle_playing(mut self) -> Self {
        self.playback.toggle();
        self
    }

    /// Fill the board randomly; playback state is kept
    pub fn seed(mut self) -> Self {
        self.engine.seed_default();
        self
    }

    /// Empty the board and halt playback
    pub fn clear(mut self) -> Self {
        self.playback.stop();
        self.engine.clear();
        self
    }

    /// Select a preset speed; applies from the next scheduled tick
    pub fn set_speed(mut self, speed: PlaybackSpeed) -> Self {
        self.speed = speed;
        self.playback.set_interval(speed.millis());
        self
    }

    /// Flip one cell. Allowed while playing; the edit lands on the
    /// latest generation.
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Result<()> {
        self.engine.toggle_cell(row, col).map(|_| ())
    }

    /// Advance playback by one frame
    pub fn tick(mut self, elapsed: Duration) -> Self {
        self.playback.tick(&mut self.engine, elapsed);
        self
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

use std::num::NonZeroU64;
use std::time::Duration;

/// Board dimensions
pub const ROWS: usize = 30;
pub const COLS: usize = 50;

/// Probability that a seeded cell starts alive
pub const DEFAULT_DENSITY: f64 = 0.25;

/// Largest on-screen cell edge in pixels
pub const MAX_CELL_SIZE: f32 = 20.0;

/// Horizontal space reserved around the board
pub const BOARD_MARGIN_X: f32 = 32.0;

/// Vertical space reserved for the title and control bar
pub const BOARD_MARGIN_Y: f32 = 200.0;

const fn millis(ms: u64) -> NonZeroU64 {
    match NonZeroU64::new(ms) {
        Some(ms) => ms,
        None => panic!("playback interval must be positive"),
    }
}

/// Board shape and seeding density for an engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub density: f64,
}

impl SimulationConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            density: DEFAULT_DENSITY,
        }
    }
}

/// Preset playback speeds offered by the speed selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackSpeed {
    Slow,
    Medium,
    #[default]
    Fast,
    Lightning,
}

impl PlaybackSpeed {
    /// Selector order
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Slow,
        PlaybackSpeed::Medium,
        PlaybackSpeed::Fast,
        PlaybackSpeed::Lightning,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlaybackSpeed::Slow => "Slow",
            PlaybackSpeed::Medium => "Medium",
            PlaybackSpeed::Fast => "Fast",
            PlaybackSpeed::Lightning => "Lightning",
        }
    }

    /// Milliseconds between generations
    pub const fn millis(self) -> NonZeroU64 {
        match self {
            PlaybackSpeed::Slow => millis(1000),
            PlaybackSpeed::Medium => millis(500),
            PlaybackSpeed::Fast => millis(100),
            PlaybackSpeed::Lightning => millis(50),
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.millis().get())
    }

    /// Position in [`PlaybackSpeed::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_presets() {
        let ms: Vec<u64> = PlaybackSpeed::ALL.iter().map(|s| s.millis().get()).collect();
        assert_eq!(ms, vec![1000, 500, 100, 50]);
        assert_eq!(PlaybackSpeed::default().interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_speed_index_matches_selector_order() {
        for (i, speed) in PlaybackSpeed::ALL.iter().enumerate() {
            assert_eq!(speed.index(), i);
        }
    }

    #[test]
    fn test_config_builders() {
        let config = SimulationConfig::default().with_size(8, 9).with_density(0.5);
        assert_eq!((config.rows, config.cols, config.density), (8, 9, 0.5));
        assert_eq!(SimulationConfig::default().rows, ROWS);
    }
}

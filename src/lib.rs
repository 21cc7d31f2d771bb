// Domain layer - grid, rules and the simulation engine
pub mod domain;

// Application layer - playback, session state and board layout
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{
    Cell, Grid, LifeError, NEIGHBOR_OFFSETS, SimulationEngine, create_empty_grid, seed_random,
    step, toggle_cell,
};
pub use application::{BoardLayout, PlaybackController, Session};
pub use config::{COLS, DEFAULT_DENSITY, PlaybackSpeed, ROWS, SimulationConfig};

//! Runs the simulation without a window and reports how each playback
//! speed advances a seeded board over the same span of simulated time.

use std::time::{Duration, Instant};

use life_board::{PlaybackController, PlaybackSpeed, SimulationConfig, SimulationEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 0x11fe;
const SIMULATED_SECONDS: u64 = 10;
const FRAME: Duration = Duration::from_micros(16_667);

fn run(speed: PlaybackSpeed) -> (SimulationEngine, f64) {
    let config = SimulationConfig::default();
    let mut engine = SimulationEngine::new(config);
    engine.seed_random_with(&mut StdRng::seed_from_u64(SEED), config.density);

    let mut playback = PlaybackController::default();
    playback.start(speed.millis());

    let frames = Duration::from_secs(SIMULATED_SECONDS).as_micros() / FRAME.as_micros();
    let start = Instant::now();
    for _ in 0..frames {
        playback.tick(&mut engine, FRAME);
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (engine, elapsed_ms)
}

fn main() {
    env_logger::init();

    println!("=== Game of Life headless run ({}s simulated, seed {:#x}) ===\n", SIMULATED_SECONDS, SEED);
    println!("{:>10} {:>10} {:>12} {:>12} {:>12}", "Speed", "Interval", "Generations", "Population", "Wall ms");
    println!("{:-<60}", "");

    for speed in PlaybackSpeed::ALL {
        let (engine, elapsed_ms) = run(speed);
        println!(
            "{:>10} {:>8}ms {:>12} {:>12} {:>12.2}",
            speed.label(),
            speed.millis(),
            engine.generation(),
            engine.population(),
            elapsed_ms
        );
    }
}

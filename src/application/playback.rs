use std::num::NonZeroU64;
use std::time::Duration;

use log::debug;

use crate::config::PlaybackSpeed;
use crate::domain::{Grid, SimulationEngine};

/// PlaybackController steps an engine on a repeating schedule.
///
/// Time is fed in by the caller as elapsed frame time, so the frame loop
/// acts as the clock. Each schedule captures the interval that is current
/// when it is made; changing the interval affects the next schedule, not
/// the pending one.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    interval_ms: NonZeroU64,
    playing: bool,
    /// Delay of the pending tick, fixed when it was scheduled
    pending: Option<Duration>,
    /// Time accumulated towards the pending tick
    waited: Duration,
}

impl PlaybackController {
    pub fn new(interval_ms: NonZeroU64) -> Self {
        Self {
            interval_ms,
            playing: false,
            pending: None,
            waited: Duration::ZERO,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Interval used for the next schedule
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.get())
    }

    /// Begin playing; the first step happens one interval from now.
    /// If already playing only the interval is updated.
    pub fn start(&mut self, interval_ms: NonZeroU64) {
        self.set_interval(interval_ms);
        if !self.playing {
            self.playing = true;
            self.schedule();
            debug!("Playback started every {}ms", self.interval_ms);
        }
    }

    /// Change the cadence. The pending tick keeps its delay.
    pub fn set_interval(&mut self, interval_ms: NonZeroU64) {
        if interval_ms != self.interval_ms {
            debug!("Playback interval {}ms -> {}ms", self.interval_ms, interval_ms);
            self.interval_ms = interval_ms;
        }
    }

    /// Cancel the pending schedule. No-op when already stopped.
    pub fn stop(&mut self) {
        if self.playing {
            debug!("Playback stopped");
        }
        self.playing = false;
        self.pending = None;
        self.waited = Duration::ZERO;
    }

    /// Play/pause
    pub fn toggle(&mut self) {
        if self.playing {
            self.stop();
        } else {
            self.start(self.interval_ms);
        }
    }

    /// Advance the clock by `elapsed`. When the pending tick is due the
    /// engine is stepped once, the next tick is scheduled with the current
    /// interval, and the new grid is returned.
    pub fn tick<'e>(
        &mut self,
        engine: &'e mut SimulationEngine,
        elapsed: Duration,
    ) -> Option<&'e Grid> {
        if !self.playing {
            return None;
        }
        let due = self.pending?;

        self.waited += elapsed;
        if self.waited < due {
            return None;
        }

        self.schedule();
        Some(engine.step())
    }

    fn schedule(&mut self) {
        self.pending = Some(self.interval());
        self.waited = Duration::ZERO;
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackSpeed::default().millis())
    }
}

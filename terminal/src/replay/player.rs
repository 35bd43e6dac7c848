use super::ReplayData;
use engine::{GameEngine, Snapshot};

/// Re-simulates a recorded run frame by frame. The core is
/// deterministic, so stepping the recorded key states through a fresh
/// engine reproduces the original session exactly; seeking backward
/// rebuilds from the start.
pub struct ReplayPlayer {
    pub data: ReplayData,
    engine: GameEngine,
    cursor: usize,
    pub is_playing: bool,
    pub play_speed: f32,
}

impl ReplayPlayer {
    pub fn new(data: ReplayData) -> Self {
        let engine = data.recording.fresh_engine();
        Self {
            data,
            engine,
            cursor: 0,
            is_playing: false,
            play_speed: 1.0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.engine.snapshot()
    }

    pub fn current_tick(&self) -> usize {
        self.cursor
    }

    pub fn max_tick(&self) -> usize {
        self.data.recording.len()
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.data.recording.len()
    }

    /// Move forward by n ticks, clamped to the end of the recording.
    pub fn step_forward(&mut self, ticks: usize) {
        for _ in 0..ticks {
            let Some(keys) = self.data.recording.frames.get(self.cursor) else {
                self.is_playing = false;
                break;
            };
            self.engine.step(*keys);
            self.cursor += 1;
        }
    }

    /// Rewind by n ticks (rebuilds state from the beginning).
    pub fn step_backward(&mut self, ticks: usize) {
        let target = self.cursor.saturating_sub(ticks);
        self.seek_to_tick(target);
    }

    /// Seek to a specific tick (always rebuilds from the start).
    pub fn seek_to_tick(&mut self, target: usize) {
        self.engine = self.data.recording.fresh_engine();
        self.cursor = 0;
        if target > 0 {
            self.step_forward(target);
        }
    }

    pub fn toggle_play(&mut self) {
        if self.at_end() {
            self.is_playing = false;
        } else {
            self.is_playing = !self.is_playing;
        }
    }
}

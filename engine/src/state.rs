use serde::{Deserialize, Serialize};

use crate::constants::{BLINK_INTERVAL_TICKS, DIE_HOLD_TICKS, MAX_SCORE, SELECT_ARM_TICKS};
use crate::input::KeyState;
use crate::machine::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Restart,
    Start,
    Play,
    Die,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Ticks between two movement steps.
    pub fn speed(&self) -> u32 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 20,
            Difficulty::Hard => 12,
        }
    }

    /// Key-to-difficulty mapping on the level select screen. Up carries no
    /// binding of its own and falls back to Easy, the documented default.
    fn select(keys: KeyState) -> Difficulty {
        if keys.down {
            Difficulty::Easy
        } else if keys.left {
            Difficulty::Medium
        } else if keys.right {
            Difficulty::Hard
        } else {
            Difficulty::Easy
        }
    }
}

/// The top-level state machine: Restart -> Start -> Play -> Die and back.
/// Sole writer of the phase, the difficulty, the phase timers and the
/// `snake_display` blink line.
#[derive(Debug, Clone)]
pub struct ControlUnit {
    phase: Phase,
    difficulty: Difficulty,
    restart_ticks: u32,
    die_ticks: u32,
    snake_display: bool,
    clear_signal: bool,
    start_signal: bool,
}

impl Default for ControlUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlUnit {
    pub fn new() -> Self {
        ControlUnit {
            phase: Phase::Restart,
            difficulty: Difficulty::Easy,
            restart_ticks: 0,
            die_ticks: 0,
            snake_display: true,
            clear_signal: false,
            start_signal: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn restart_ticks(&self) -> u32 {
        self.restart_ticks
    }

    pub fn die_ticks(&self) -> u32 {
        self.die_ticks
    }

    pub fn snake_display(&self) -> bool {
        self.snake_display
    }

    pub fn clear_signal(&self) -> bool {
        self.clear_signal
    }

    pub fn start_signal(&self) -> bool {
        self.start_signal
    }

    /// Advance one tick. Collision flags and the score are read from the
    /// previous tick's snapshot, never from this tick's updates.
    pub fn tick(&mut self, prev: &Snapshot, keys: KeyState) {
        match self.phase {
            Phase::Restart => {
                self.snake_display = true;
                self.clear_signal = false;
                self.start_signal = false;
                self.restart_ticks = self.restart_ticks.saturating_add(1);
                if self.restart_ticks >= SELECT_ARM_TICKS && keys.pressed() {
                    self.difficulty = Difficulty::select(keys);
                    log::info!("difficulty selected: {:?}", self.difficulty);
                    self.phase = Phase::Start;
                }
            }
            Phase::Start => {
                self.clear_signal = keys.pressed();
                if keys.pressed() {
                    log::info!("game started ({:?})", self.difficulty);
                    self.phase = Phase::Play;
                }
            }
            Phase::Play => {
                self.clear_signal = false;
                self.start_signal = true;
                let dead = prev.hit_wall || prev.hit_body || prev.hit_stone;
                if dead || prev.score >= MAX_SCORE {
                    self.phase = Phase::Die;
                    self.die_ticks = 0;
                    log::info!(
                        "game over: wall={} body={} stone={} score={}",
                        prev.hit_wall,
                        prev.hit_body,
                        prev.hit_stone,
                        prev.score
                    );
                }
            }
            Phase::Die => {
                self.start_signal = false;
                self.die_ticks = self.die_ticks.saturating_add(1);
                if self.die_ticks <= DIE_HOLD_TICKS {
                    // Six threshold crossings of the hold counter flip the
                    // snake on and off while the last frame stays frozen.
                    self.snake_display = (self.die_ticks / BLINK_INTERVAL_TICKS) % 2 == 0;
                } else {
                    self.snake_display = true;
                    if keys.pressed() {
                        self.phase = Phase::Restart;
                        self.restart_ticks = 0;
                        self.die_ticks = 0;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::initial();
        snapshot.phase = Phase::Play;
        snapshot.hit_wall = true;
        snapshot
    }

    fn any_key() -> KeyState {
        KeyState {
            down: true,
            ..KeyState::RELEASED
        }
    }

    #[test]
    fn test_select_arms_after_timer() {
        let mut control = ControlUnit::new();
        let prev = Snapshot::initial();
        // A key held before the arming timer expires is ignored.
        for _ in 0..SELECT_ARM_TICKS - 1 {
            control.tick(&prev, any_key());
            assert_eq!(control.phase(), Phase::Restart);
        }
        control.tick(&prev, any_key());
        assert_eq!(control.phase(), Phase::Start);
        assert_eq!(control.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_key_mapping() {
        let cases = [
            (KeyState { down: true, ..KeyState::RELEASED }, Difficulty::Easy),
            (KeyState { left: true, ..KeyState::RELEASED }, Difficulty::Medium),
            (KeyState { right: true, ..KeyState::RELEASED }, Difficulty::Hard),
            // Up has no binding and falls back to the Easy default.
            (KeyState { up: true, ..KeyState::RELEASED }, Difficulty::Easy),
        ];
        for (keys, expected) in cases {
            let mut control = ControlUnit::new();
            let prev = Snapshot::initial();
            for _ in 0..SELECT_ARM_TICKS {
                control.tick(&prev, KeyState::RELEASED);
            }
            control.tick(&prev, keys);
            assert_eq!(control.phase(), Phase::Start);
            assert_eq!(control.difficulty(), expected);
        }
    }

    #[test]
    fn test_play_to_die_on_flags_and_clear() {
        let causes: [fn(&mut Snapshot); 4] = [
            |s| s.hit_wall = true,
            |s| s.hit_body = true,
            |s| s.hit_stone = true,
            |s| s.score = MAX_SCORE,
        ];
        for make in causes {
            let mut control = ControlUnit::new();
            control.phase = Phase::Play;
            let mut prev = Snapshot::initial();
            prev.phase = Phase::Play;
            control.tick(&prev, KeyState::RELEASED);
            assert_eq!(control.phase(), Phase::Play);
            make(&mut prev);
            control.tick(&prev, KeyState::RELEASED);
            assert_eq!(control.phase(), Phase::Die);
        }
    }

    #[test]
    fn test_die_blink_thresholds() {
        let mut control = ControlUnit::new();
        control.phase = Phase::Die;
        let prev = die_snapshot();
        let mut pattern = Vec::new();
        for _ in 0..DIE_HOLD_TICKS {
            control.tick(&prev, KeyState::RELEASED);
            pattern.push(control.snake_display());
        }
        // Visible below the first threshold, hidden after it, and so on
        // through all six crossings.
        assert!(pattern[10]);
        assert!(!pattern[BLINK_INTERVAL_TICKS as usize + 10]);
        assert!(pattern[2 * BLINK_INTERVAL_TICKS as usize + 10]);
        assert!(!pattern[3 * BLINK_INTERVAL_TICKS as usize + 10]);
        assert!(pattern[4 * BLINK_INTERVAL_TICKS as usize + 10]);
        assert!(!pattern[5 * BLINK_INTERVAL_TICKS as usize + 10]);
        // The hold window elapsed: the snake stays on and a key restarts.
        control.tick(&prev, KeyState::RELEASED);
        assert!(control.snake_display());
        assert_eq!(control.phase(), Phase::Die);
        control.tick(&prev, any_key());
        assert_eq!(control.phase(), Phase::Restart);
        assert_eq!(control.restart_ticks(), 0);
    }

    #[test]
    fn test_keypress_during_blink_is_ignored() {
        let mut control = ControlUnit::new();
        control.phase = Phase::Die;
        let prev = die_snapshot();
        for _ in 0..DIE_HOLD_TICKS / 2 {
            control.tick(&prev, any_key());
        }
        assert_eq!(control.phase(), Phase::Die);
    }
}

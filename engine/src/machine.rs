use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::{START_APPLE_X, START_APPLE_Y};
use crate::input::KeyState;
use crate::oracle::AppleOracle;
use crate::score::ScoreBoard;
use crate::snake::{Cell, Direction, MotionEngine, SnakeBody};
use crate::state::{ControlUnit, Difficulty, Phase};

/// The published, fully-settled state of one tick. Every component
/// computes its next state from this, never from another component's
/// same-tick update; the raster compositor reads nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub restart_ticks: u32,
    pub die_ticks: u32,
    pub snake_display: bool,
    pub clear_signal: bool,
    pub start_signal: bool,
    pub snake: SnakeBody,
    pub direction: Direction,
    pub apple: Cell,
    pub apple_eaten: bool,
    pub hit_wall: bool,
    pub hit_body: bool,
    pub hit_stone: bool,
    pub score: u8,
    pub best_score: u8,
    pub score_digits: [u8; 3],
}

impl Snapshot {
    /// The power-on snapshot every restart returns to.
    pub fn initial() -> Self {
        Snapshot {
            tick: 0,
            phase: Phase::Restart,
            difficulty: Difficulty::Easy,
            restart_ticks: 0,
            die_ticks: 0,
            snake_display: true,
            clear_signal: false,
            start_signal: false,
            snake: SnakeBody::at_start(),
            direction: Direction::Right,
            apple: Cell::new(START_APPLE_X, START_APPLE_Y),
            apple_eaten: false,
            hit_wall: false,
            hit_body: false,
            hit_stone: false,
            score: 0,
            best_score: 0,
            score_digits: [0, 0, 0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Wall,
    Body,
    Stone,
    Cleared,
}

/// Things that happened during one tick, derived from consecutive
/// snapshots. Consumers are logging, the replay tooling and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: Phase, to: Phase },
    DifficultySelected { difficulty: Difficulty },
    AppleEaten { cell: Cell },
    AppleMoved { cell: Cell },
    ScoreChanged { score: u8 },
    SnakeDied { cause: DeathCause },
}

/// The whole synchronous machine. `step` is the single clock edge: all
/// four components advance against the previous tick's snapshot, then the
/// new snapshot is published at once.
#[derive(Debug, Clone)]
pub struct GameEngine {
    tick: u64,
    control: ControlUnit,
    motion: MotionEngine,
    oracle: AppleOracle,
    score: ScoreBoard,
    published: Snapshot,
}

pub const DEFAULT_SEED: u16 = 0xace1;

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u16) -> Self {
        GameEngine {
            tick: 0,
            control: ControlUnit::new(),
            motion: MotionEngine::new(),
            oracle: AppleOracle::new(seed),
            score: ScoreBoard::new(),
            published: Snapshot::initial(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.published
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.published)?)
    }

    /// Advance one tick with the given key lines and publish the next
    /// snapshot. Returns the events the tick produced.
    pub fn step(&mut self, keys: KeyState) -> Vec<GameEvent> {
        let prev = self.published.clone();

        self.control.tick(&prev, keys);
        self.motion.tick(&prev, keys);
        self.oracle.tick(&prev);
        self.score.tick(&prev);

        self.tick += 1;
        self.published = self.compose();
        self.events(&prev)
    }

    fn compose(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            phase: self.control.phase(),
            difficulty: self.control.difficulty(),
            restart_ticks: self.control.restart_ticks(),
            die_ticks: self.control.die_ticks(),
            snake_display: self.control.snake_display(),
            clear_signal: self.control.clear_signal(),
            start_signal: self.control.start_signal(),
            snake: *self.motion.body(),
            direction: self.motion.direction(),
            apple: self.oracle.apple(),
            apple_eaten: self.oracle.apple_eaten(),
            hit_wall: self.motion.hit_wall(),
            hit_body: self.motion.hit_body(),
            hit_stone: self.oracle.hit_stone(),
            score: self.score.current(),
            best_score: self.score.best(),
            score_digits: ScoreBoard::digits(self.score.current()),
        }
    }

    fn events(&self, prev: &Snapshot) -> Vec<GameEvent> {
        let now = &self.published;
        let mut out = Vec::new();

        if now.phase != prev.phase {
            out.push(GameEvent::PhaseChanged {
                from: prev.phase,
                to: now.phase,
            });
            if now.phase == Phase::Die {
                let cause = if prev.hit_wall {
                    DeathCause::Wall
                } else if prev.hit_body {
                    DeathCause::Body
                } else if prev.hit_stone {
                    DeathCause::Stone
                } else {
                    DeathCause::Cleared
                };
                out.push(GameEvent::SnakeDied { cause });
            }
        }
        if now.difficulty != prev.difficulty {
            out.push(GameEvent::DifficultySelected {
                difficulty: now.difficulty,
            });
        }
        if now.apple_eaten && !prev.apple_eaten {
            out.push(GameEvent::AppleEaten { cell: prev.apple });
        }
        if now.apple != prev.apple {
            out.push(GameEvent::AppleMoved { cell: now.apple });
        }
        if now.score != prev.score {
            out.push(GameEvent::ScoreChanged { score: now.score });
        }

        out
    }
}

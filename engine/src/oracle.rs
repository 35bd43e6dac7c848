use serde::{Deserialize, Serialize};

use crate::constants::{
    APPLE_X_FOLD, APPLE_Y_FOLD, GRID_HEIGHT, GRID_WIDTH, START_APPLE_X, START_APPLE_Y,
};
use crate::machine::Snapshot;
use crate::snake::Cell;
use crate::state::{Difficulty, Phase};
use crate::util::AdditiveCounter;

/// Axis-aligned stone zone on the cell grid, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneRect {
    pub x0: u8,
    pub y0: u8,
    pub x1: u8,
    pub y1: u8,
}

impl StoneRect {
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x0 && cell.x <= self.x1 && cell.y >= self.y0 && cell.y <= self.y1
    }
}

/// Four stone blocks, one per quadrant of the playfield. Gameplay-defining
/// constants, not tunables.
pub const STONES_MEDIUM: [StoneRect; 4] = [
    StoneRect { x0: 8, y0: 7, x1: 11, y1: 9 },
    StoneRect { x0: 28, y0: 7, x1: 31, y1: 9 },
    StoneRect { x0: 8, y0: 20, x1: 11, y1: 22 },
    StoneRect { x0: 28, y0: 20, x1: 31, y1: 22 },
];

/// The medium blocks plus four horizontal strips across the middle lanes.
pub const STONES_HARD: [StoneRect; 8] = [
    StoneRect { x0: 8, y0: 7, x1: 11, y1: 9 },
    StoneRect { x0: 28, y0: 7, x1: 31, y1: 9 },
    StoneRect { x0: 8, y0: 20, x1: 11, y1: 22 },
    StoneRect { x0: 28, y0: 20, x1: 31, y1: 22 },
    StoneRect { x0: 14, y0: 8, x1: 25, y1: 8 },
    StoneRect { x0: 14, y0: 12, x1: 25, y1: 12 },
    StoneRect { x0: 14, y0: 17, x1: 25, y1: 17 },
    StoneRect { x0: 14, y0: 21, x1: 25, y1: 21 },
];

/// The stone set active for a difficulty.
pub fn stones(difficulty: Difficulty) -> &'static [StoneRect] {
    match difficulty {
        Difficulty::Easy => &[],
        Difficulty::Medium => &STONES_MEDIUM,
        Difficulty::Hard => &STONES_HARD,
    }
}

pub fn in_stone(cell: Cell, difficulty: Difficulty) -> bool {
    stones(difficulty).iter().any(|r| r.contains(cell))
}

/// Shift a cell right one column at a time until it leaves every stone
/// zone. Deterministic; no stone reaches the right wall, so this always
/// terminates inside the playfield.
fn nudge_out_of_stones(mut cell: Cell, difficulty: Difficulty) -> Cell {
    let mut guard = 0u8;
    while in_stone(cell, difficulty) && guard < GRID_WIDTH {
        cell.x += 1;
        guard += 1;
    }
    cell
}

/// Watches the head, owns the apple and reports eaten/obstacle flags.
/// Placement comes from the free-running additive counter, bias and all.
#[derive(Debug, Clone)]
pub struct AppleOracle {
    apple: Cell,
    counter: AdditiveCounter,
    apple_eaten: bool,
    hit_stone: bool,
}

impl AppleOracle {
    pub fn new(seed: u16) -> Self {
        AppleOracle {
            apple: Cell::new(START_APPLE_X, START_APPLE_Y),
            counter: AdditiveCounter::new(seed),
            apple_eaten: false,
            hit_stone: false,
        }
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn apple_eaten(&self) -> bool {
        self.apple_eaten
    }

    pub fn hit_stone(&self) -> bool {
        self.hit_stone
    }

    /// Fold the counter bits into a playfield cell: x from the low six
    /// bits, y from the next five, out-of-range candidates pulled back by a
    /// fixed offset and zero clamped to one so the wall ring is never hit.
    fn place_apple(&self, difficulty: Difficulty) -> Cell {
        let mut x = self.counter.x_bits();
        let mut y = self.counter.y_bits();
        if x > GRID_WIDTH - 2 {
            x -= APPLE_X_FOLD;
        }
        if x == 0 {
            x = 1;
        }
        if y > GRID_HEIGHT - 2 {
            y -= APPLE_Y_FOLD;
        }
        if y == 0 {
            y = 1;
        }
        nudge_out_of_stones(Cell::new(x, y), difficulty)
    }

    /// Advance one tick against the previous tick's published snapshot.
    pub fn tick(&mut self, prev: &Snapshot) {
        // The counter runs on every tick of every phase; that free run is
        // the only entropy source.
        self.counter.advance();

        match prev.phase {
            Phase::Restart => {
                self.apple = Cell::new(START_APPLE_X, START_APPLE_Y);
                self.apple_eaten = false;
                self.hit_stone = false;
                return;
            }
            Phase::Start => {
                self.apple_eaten = false;
                self.hit_stone = false;
                return;
            }
            Phase::Die => return,
            Phase::Play => {}
        }

        let head = prev.snake.head();
        if head == self.apple {
            self.apple_eaten = true;
            self.apple = self.place_apple(prev.difficulty);
            log::debug!("apple eaten, next at {:?}", self.apple);
        } else if prev.difficulty != Difficulty::Easy {
            self.apple_eaten = false;
            self.apple = nudge_out_of_stones(self.apple, prev.difficulty);
            self.hit_stone = in_stone(head, prev.difficulty);
        } else {
            self.apple_eaten = false;
            self.hit_stone = false;
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::constants::{
    GRID_HEIGHT, GRID_WIDTH, INITIAL_LENGTH, SNAKE_CAPACITY, START_HEAD_X, START_HEAD_Y,
};
use crate::input::KeyState;
use crate::machine::Snapshot;
use crate::state::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A position on the 40x30 logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Cell { x, y }
    }

    pub fn step(self, direction: Direction) -> Cell {
        match direction {
            Direction::Up => Cell::new(self.x, self.y.saturating_sub(1)),
            Direction::Down => Cell::new(self.x, (self.y + 1).min(GRID_HEIGHT - 1)),
            Direction::Left => Cell::new(self.x.saturating_sub(1), self.y),
            Direction::Right => Cell::new((self.x + 1).min(GRID_WIDTH - 1), self.y),
        }
    }

    /// True on the lethal border ring.
    pub fn on_wall(&self) -> bool {
        self.x == 0 || self.x == GRID_WIDTH - 1 || self.y == 0 || self.y == GRID_HEIGHT - 1
    }
}

/// Fixed-capacity segment arena mirroring the original shift-register bank:
/// sixteen cell slots, a length counter and an active bit-set. Slot 0 is the
/// head. Growth activates the next slot in place; nothing reallocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeBody {
    cells: [Cell; SNAKE_CAPACITY],
    len: u8,
    active: u16,
}

impl SnakeBody {
    pub fn at_start() -> Self {
        let mut cells = [Cell::new(0, 0); SNAKE_CAPACITY];
        for (i, cell) in cells.iter_mut().enumerate().take(INITIAL_LENGTH as usize) {
            *cell = Cell::new(START_HEAD_X - i as u8, START_HEAD_Y);
        }
        SnakeBody {
            cells,
            len: INITIAL_LENGTH,
            active: (1 << INITIAL_LENGTH) - 1,
        }
    }

    /// Build a body from explicit cells, head first. Used by tooling and
    /// tests to stage specific shapes.
    pub fn from_cells(cells: &[Cell]) -> Self {
        assert!(!cells.is_empty() && cells.len() <= SNAKE_CAPACITY);
        let mut body = [Cell::new(0, 0); SNAKE_CAPACITY];
        body[..cells.len()].copy_from_slice(cells);
        SnakeBody {
            cells: body,
            len: cells.len() as u8,
            active: ((1u32 << cells.len()) - 1) as u16,
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active & (1 << index) != 0
    }

    pub fn segments(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.cells
            .iter()
            .copied()
            .enumerate()
            .take(self.len as usize)
    }

    /// Index of the active segment occupying `cell`, head first.
    pub fn segment_at(&self, cell: Cell) -> Option<usize> {
        self.segments().find(|&(_, c)| c == cell).map(|(i, _)| i)
    }

    /// The 4-bit render status tag for a segment: 0 head, then alternating
    /// 1/2 down the body, which the compositor maps to the two-tone pattern.
    pub fn status_tag(&self, index: usize) -> u8 {
        if index == 0 {
            0
        } else if index % 2 == 1 {
            1
        } else {
            2
        }
    }

    /// One movement step: every slot takes its predecessor's cell and the
    /// head advances one cell in `direction`.
    fn shift_and_advance(&mut self, direction: Direction) {
        for i in (1..self.len as usize).rev() {
            self.cells[i] = self.cells[i - 1];
        }
        self.cells[0] = self.cells[0].step(direction);
    }

    /// Activate the next slot with the current tail cell. The duplicate
    /// resolves on the next shift, which leaves the tail in place for one
    /// movement step; that is how the snake grows.
    fn grow_tail(&mut self) {
        let len = self.len as usize;
        self.cells[len] = self.cells[len - 1];
        self.active |= 1 << len;
        self.len += 1;
    }

    fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.segments().skip(1).any(|(_, c)| c == head)
    }
}

fn steer(current: Direction, buffered: Direction, keys: KeyState) -> Direction {
    // Only the perpendicular axis is sampled, so a move can never reverse
    // straight into itself. Up wins over Down, Left over Right.
    if current.is_vertical() {
        if keys.left {
            Direction::Left
        } else if keys.right {
            Direction::Right
        } else {
            buffered
        }
    } else if keys.up {
        Direction::Up
    } else if keys.down {
        Direction::Down
    } else {
        buffered
    }
}

/// Owns the snake body and advances it one cell per movement tick. The
/// buffered next direction is committed only when a move happens, and the
/// growth latch guarantees one segment per apple even though the eaten
/// pulse can span ticks.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    body: SnakeBody,
    direction: Direction,
    next_direction: Direction,
    move_countdown: u32,
    growing: bool,
    hit_wall: bool,
    hit_body: bool,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionEngine {
    pub fn new() -> Self {
        MotionEngine {
            body: SnakeBody::at_start(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            move_countdown: 0,
            growing: false,
            hit_wall: false,
            hit_body: false,
        }
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn hit_wall(&self) -> bool {
        self.hit_wall
    }

    pub fn hit_body(&self) -> bool {
        self.hit_body
    }

    fn reset(&mut self, speed: u32) {
        self.body = SnakeBody::at_start();
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.move_countdown = speed;
        self.growing = false;
        self.hit_wall = false;
        self.hit_body = false;
    }

    /// Advance one tick against the previous tick's published snapshot.
    pub fn tick(&mut self, prev: &Snapshot, keys: KeyState) {
        match prev.phase {
            Phase::Restart | Phase::Start => {
                self.reset(prev.difficulty.speed());
                return;
            }
            Phase::Die => return,
            Phase::Play => {}
        }

        self.next_direction = steer(self.direction, self.next_direction, keys);

        if prev.apple_eaten {
            if !self.growing && (self.body.len() as usize) < SNAKE_CAPACITY {
                self.body.grow_tail();
            }
            self.growing = true;
        } else {
            self.growing = false;
        }

        // A dead snake holds its last frame until the control unit restarts.
        if self.hit_wall || self.hit_body || prev.hit_stone {
            return;
        }

        if self.move_countdown > 1 {
            self.move_countdown -= 1;
            return;
        }
        self.move_countdown = prev.difficulty.speed();

        self.direction = self.next_direction;
        self.body.shift_and_advance(self.direction);

        if self.body.head().on_wall() {
            self.hit_wall = true;
            log::debug!("snake hit the wall at {:?}", self.body.head());
        }
        if self.body.head_hits_body() {
            self.hit_body = true;
            log::debug!("snake hit itself at {:?}", self.body.head());
        }
    }
}

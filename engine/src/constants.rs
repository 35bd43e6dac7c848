/// Logical grid width in cells; column 0 and 39 form the wall ring
pub const GRID_WIDTH: u8 = 40;

/// Logical grid height in cells; row 0 and 29 form the wall ring
pub const GRID_HEIGHT: u8 = 30;

/// Pixel edge length of one grid cell on the raster
pub const CELL_PIXELS: u16 = 16;

/// Raster width in pixels (40 cells of 16 px)
pub const FRAME_WIDTH: u16 = 640;

/// Raster height in pixels (30 cells of 16 px)
pub const FRAME_HEIGHT: u16 = 480;

/// Discrete ticks per simulated second
pub const TICKS_PER_SECOND: u32 = 60;

/// Maximum number of snake segments the body arena can hold
pub const SNAKE_CAPACITY: usize = 16;

/// Segment count the snake resets to
pub const INITIAL_LENGTH: u8 = 5;

/// Head cell the snake resets to; the body extends to the left of it
pub const START_HEAD_X: u8 = 10;
pub const START_HEAD_Y: u8 = 5;

/// Apple cell after a reset, before the first respawn
pub const START_APPLE_X: u8 = 20;
pub const START_APPLE_Y: u8 = 15;

/// Score at which the game ends in a clear
pub const MAX_SCORE: u8 = 100;

/// Ticks the splash image stays up at the start of the Restart phase (~4 s)
pub const SPLASH_TICKS: u32 = 240;

/// Ticks into Restart before a direction key selects a difficulty (~6 s)
pub const SELECT_ARM_TICKS: u32 = 360;

/// Ticks the Die phase holds the frozen frame before the score screen (~4 s)
pub const DIE_HOLD_TICKS: u32 = 240;

/// Blink half-period inside the Die hold window; six threshold crossings
pub const BLINK_INTERVAL_TICKS: u32 = 40;

/// Odd increment of the free-running apple placement counter
pub const APPLE_COUNTER_STEP: u16 = 0x36d5;

/// Subtracted from a raw apple x candidate that falls past the playfield
pub const APPLE_X_FOLD: u8 = 25;

/// Subtracted from a raw apple y candidate that falls past the playfield
pub const APPLE_Y_FOLD: u8 = 8;

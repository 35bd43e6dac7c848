use engine::{
    Cell, Difficulty, Phase, ScoreBoard, Snapshot, SnakeBody, CELL_PIXELS, DIE_HOLD_TICKS,
    SPLASH_TICKS, STONES_MEDIUM,
};
use terminal::render::compositor::pixel_color;
use terminal::render::types::{
    APPLE, BACKGROUND, SNAKE_BODY_A, SNAKE_BODY_B, SNAKE_HEAD, SPLASH_CHECKER, SPLASH_FIELD,
    STONE, SWATCH_EASY, SWATCH_HARD, SWATCH_MEDIUM, TEXT, WALL,
};

/// Sample the pixel at the center of a grid cell.
fn cell_center(snapshot: &Snapshot, x: u8, y: u8) -> terminal::render::types::Rgb {
    pixel_color(
        snapshot,
        x as u16 * CELL_PIXELS + CELL_PIXELS / 2,
        y as u16 * CELL_PIXELS + CELL_PIXELS / 2,
    )
}

fn play_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::initial();
    snapshot.phase = Phase::Play;
    snapshot
}

#[test]
fn test_playfield_priorities() {
    let mut snapshot = play_snapshot();
    snapshot.apple = Cell::new(20, 15);
    snapshot.snake = SnakeBody::from_cells(&[
        Cell::new(10, 5),
        Cell::new(9, 5),
        Cell::new(8, 5),
        Cell::new(7, 5),
    ]);

    // Apple cell.
    assert_eq!(cell_center(&snapshot, 20, 15), APPLE);
    // Wall ring on all four edges.
    assert_eq!(cell_center(&snapshot, 0, 0), WALL);
    assert_eq!(cell_center(&snapshot, 39, 12), WALL);
    assert_eq!(cell_center(&snapshot, 17, 29), WALL);
    // Head, then the alternating body tones.
    assert_eq!(cell_center(&snapshot, 10, 5), SNAKE_HEAD);
    assert_eq!(cell_center(&snapshot, 9, 5), SNAKE_BODY_A);
    assert_eq!(cell_center(&snapshot, 8, 5), SNAKE_BODY_B);
    assert_eq!(cell_center(&snapshot, 7, 5), SNAKE_BODY_A);
    // Empty cell.
    assert_eq!(cell_center(&snapshot, 20, 20), BACKGROUND);
}

#[test]
fn test_snake_hidden_while_blinking() {
    let mut snapshot = play_snapshot();
    snapshot.snake = SnakeBody::from_cells(&[Cell::new(10, 5), Cell::new(9, 5)]);
    assert_eq!(cell_center(&snapshot, 10, 5), SNAKE_HEAD);
    snapshot.snake_display = false;
    assert_eq!(cell_center(&snapshot, 10, 5), BACKGROUND);
}

#[test]
fn test_stones_only_on_medium_and_hard() {
    let mut snapshot = play_snapshot();
    let stone_cell = Cell::new(STONES_MEDIUM[0].x0, STONES_MEDIUM[0].y0);
    // Keep the snake away from the probed cell.
    snapshot.snake = SnakeBody::from_cells(&[Cell::new(30, 15)]);
    assert_eq!(cell_center(&snapshot, stone_cell.x, stone_cell.y), BACKGROUND);
    snapshot.difficulty = Difficulty::Medium;
    assert_eq!(cell_center(&snapshot, stone_cell.x, stone_cell.y), STONE);
    snapshot.difficulty = Difficulty::Hard;
    assert_eq!(cell_center(&snapshot, stone_cell.x, stone_cell.y), STONE);
}

#[test]
fn test_snake_draws_over_stone() {
    let mut snapshot = play_snapshot();
    snapshot.difficulty = Difficulty::Medium;
    let stone_cell = Cell::new(STONES_MEDIUM[0].x0, STONES_MEDIUM[0].y0);
    snapshot.snake = SnakeBody::from_cells(&[stone_cell, Cell::new(30, 15)]);
    assert_eq!(cell_center(&snapshot, stone_cell.x, stone_cell.y), SNAKE_HEAD);
}

#[test]
fn test_restart_splash() {
    let mut snapshot = Snapshot::initial();
    snapshot.phase = Phase::Restart;
    snapshot.restart_ticks = 0;
    // Border frame.
    assert_eq!(pixel_color(&snapshot, 2, 2), WALL);
    // Checkerboard backdrop away from the title.
    let sample = pixel_color(&snapshot, 320, 240);
    assert!(sample == SPLASH_FIELD || sample == SPLASH_CHECKER);
    // No gameplay: the apple cell is not drawn.
    assert_ne!(cell_center(&snapshot, 20, 15), APPLE);
}

#[test]
fn test_level_select_swatches() {
    let mut snapshot = Snapshot::initial();
    snapshot.phase = Phase::Restart;
    snapshot.restart_ticks = SPLASH_TICKS;
    // Swatch centers: green, blue, red.
    assert_eq!(pixel_color(&snapshot, 192, 240), SWATCH_EASY);
    assert_eq!(pixel_color(&snapshot, 320, 240), SWATCH_MEDIUM);
    assert_eq!(pixel_color(&snapshot, 448, 240), SWATCH_HARD);
    // Between swatches the splash backdrop shows through.
    let gap = pixel_color(&snapshot, 256, 240);
    assert!(gap == SPLASH_FIELD || gap == SPLASH_CHECKER);
}

#[test]
fn test_level_select_best_score_digits() {
    let mut snapshot = Snapshot::initial();
    snapshot.phase = Phase::Restart;
    snapshot.restart_ticks = SPLASH_TICKS + 10;
    snapshot.best_score = 42;
    // Tens digit '4' lights its top-left segment. The digit group sits
    // centered at x=264..376, y=376..424; the tens box starts at x=304.
    assert_eq!(pixel_color(&snapshot, 304 + 4, 376 + 14), TEXT);
    // The blanked leading hundreds digit leaves the backdrop visible.
    let blank = pixel_color(&snapshot, 264 + 16, 376 + 4);
    assert!(blank == SPLASH_FIELD || blank == SPLASH_CHECKER);
}

#[test]
fn test_clear_banner_overrides_playfield() {
    let mut snapshot = play_snapshot();
    snapshot.apple = Cell::new(5, 5);
    snapshot.score = 100;
    snapshot.score_digits = ScoreBoard::digits(100);
    // The apple cell is no longer drawn.
    assert_eq!(cell_center(&snapshot, 5, 5), BACKGROUND);
    // The leading '1' of "100" is lit (right bar of the hundreds box).
    assert_eq!(pixel_color(&snapshot, 264 + 28, 216 + 14), TEXT);
}

#[test]
fn test_die_freezes_then_shows_score() {
    let mut snapshot = play_snapshot();
    snapshot.phase = Phase::Die;
    snapshot.die_ticks = 100;
    snapshot.apple = Cell::new(20, 15);
    snapshot.snake = SnakeBody::from_cells(&[Cell::new(12, 7), Cell::new(11, 7)]);
    // Inside the hold window: the frozen playfield, blink riding on
    // snake_display.
    assert_eq!(cell_center(&snapshot, 20, 15), APPLE);
    assert_eq!(cell_center(&snapshot, 12, 7), SNAKE_HEAD);
    snapshot.snake_display = false;
    assert_eq!(cell_center(&snapshot, 12, 7), BACKGROUND);
    // Past the window: label and digits on black.
    snapshot.die_ticks = DIE_HOLD_TICKS + 1;
    snapshot.score = 7;
    snapshot.score_digits = ScoreBoard::digits(7);
    assert_eq!(cell_center(&snapshot, 20, 15), BACKGROUND);
    // 'S' of "SCORE" at the label origin.
    assert_eq!(pixel_color(&snapshot, 240 + 8, 152 + 0), TEXT);
    // Ones digit '7' top bar.
    assert_eq!(pixel_color(&snapshot, 344 + 16, 232 + 4), TEXT);
}

#[test]
fn test_every_pixel_resolves() {
    // Each phase's decision tree must be total; sample a coarse sweep.
    let mut snapshots = vec![Snapshot::initial()];
    let mut select = Snapshot::initial();
    select.restart_ticks = SPLASH_TICKS + 1;
    snapshots.push(select);
    snapshots.push(play_snapshot());
    let mut dying = play_snapshot();
    dying.phase = Phase::Die;
    dying.die_ticks = 10;
    snapshots.push(dying.clone());
    dying.die_ticks = DIE_HOLD_TICKS + 10;
    snapshots.push(dying);
    for snapshot in &snapshots {
        for py in (0..480u16).step_by(16) {
            for px in (0..640u16).step_by(16) {
                let _ = pixel_color(snapshot, px, py);
            }
        }
    }
}

//! The per-pixel color decision. Once per raster position the compositor
//! consults the published snapshot and resolves exactly one color; a full
//! sweep of the raster is one displayed frame.

use engine::{
    in_stone, Cell, Phase, ScoreBoard, Snapshot, CELL_PIXELS, DIE_HOLD_TICKS, SPLASH_TICKS,
};

use super::overlay::{BestScore, ClearBanner, FinalScore, LevelSelect, SplashScreen};
use super::traits::OverlayLayer;
use super::types::{
    FrameBuffer, Rgb, APPLE, BACKGROUND, SNAKE_BODY_A, SNAKE_BODY_B, SNAKE_HEAD, STONE, WALL,
};

/// Body colors keyed by the 4-bit segment status tag: head, then the two
/// alternating body tones. Unused tag values fall back to the background.
pub const BODY_STATUS_COLORS: [Rgb; 16] = [
    SNAKE_HEAD,
    SNAKE_BODY_A,
    SNAKE_BODY_B,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
    BACKGROUND,
];

/// The in-game layer: apple, wall ring, snake, stones, background, in
/// that priority. Stones only show on otherwise empty cells, so the
/// snake passes over them visually (the oracle kills it anyway).
fn playfield_color(snapshot: &Snapshot, px: u16, py: u16) -> Rgb {
    let cell = Cell::new((px / CELL_PIXELS) as u8, (py / CELL_PIXELS) as u8);
    if cell == snapshot.apple {
        return APPLE;
    }
    if cell.on_wall() {
        return WALL;
    }
    if snapshot.snake_display {
        if let Some(index) = snapshot.snake.segment_at(cell) {
            return BODY_STATUS_COLORS[snapshot.snake.status_tag(index) as usize];
        }
    }
    if in_stone(cell, snapshot.difficulty) {
        return STONE;
    }
    BACKGROUND
}

/// Resolve the color of one raster pixel. Total over the whole frame:
/// every branch ends in a color, background black as the fallback.
pub fn pixel_color(snapshot: &Snapshot, px: u16, py: u16) -> Rgb {
    match snapshot.phase {
        Phase::Restart => {
            if snapshot.restart_ticks < SPLASH_TICKS {
                SplashScreen.sample(px, py).unwrap_or(BACKGROUND)
            } else {
                let best = BestScore {
                    digits: ScoreBoard::digits(snapshot.best_score),
                };
                LevelSelect
                    .sample(px, py)
                    .or_else(|| best.sample(px, py))
                    .or_else(|| SplashScreen.sample(px, py))
                    .unwrap_or(BACKGROUND)
            }
        }
        _ if snapshot.score_digits[0] >= 1 => {
            ClearBanner.sample(px, py).unwrap_or(BACKGROUND)
        }
        Phase::Start | Phase::Play => playfield_color(snapshot, px, py),
        Phase::Die => {
            if snapshot.die_ticks <= DIE_HOLD_TICKS {
                // Frozen last frame; the blink rides on snake_display.
                playfield_color(snapshot, px, py)
            } else {
                let overlay = FinalScore {
                    digits: snapshot.score_digits,
                };
                overlay.sample(px, py).unwrap_or(BACKGROUND)
            }
        }
    }
}

/// Sweep the full raster once, the way the sync generator would.
pub fn render_frame(snapshot: &Snapshot) -> FrameBuffer {
    let mut frame = FrameBuffer::new();
    for py in 0..frame.height() {
        for px in 0..frame.width() {
            frame.set(px, py, pixel_color(snapshot, px, py));
        }
    }
    frame
}

/// Color at the center of a grid cell; the terminal front-end paints one
/// character block per cell from this.
pub fn cell_color(snapshot: &Snapshot, x: u8, y: u8) -> Rgb {
    pixel_color(
        snapshot,
        x as u16 * CELL_PIXELS + CELL_PIXELS / 2,
        y as u16 * CELL_PIXELS + CELL_PIXELS / 2,
    )
}

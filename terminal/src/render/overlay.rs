//! The non-gameplay screens: splash, level select, best/final score and
//! the level-clear banner. Each is a stateless layer sampled per pixel.

use engine::{FRAME_HEIGHT, FRAME_WIDTH};

use super::glyphs::{digit_pixel, text_pixel, text_width, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::traits::OverlayLayer;
use super::types::{
    PixelRect, Rgb, SPLASH_CHECKER, SPLASH_FIELD, SWATCH_EASY, SWATCH_HARD, SWATCH_MEDIUM, TEXT,
    WALL,
};

/// Difficulty swatches on the level select screen, left to right:
/// green Easy, blue Medium, red Hard.
pub const SWATCH_RECTS: [PixelRect; 3] = [
    PixelRect::new(160, 208, 224, 272),
    PixelRect::new(288, 208, 352, 272),
    PixelRect::new(416, 208, 480, 272),
];

const SWATCH_COLORS: [Rgb; 3] = [SWATCH_EASY, SWATCH_MEDIUM, SWATCH_HARD];

/// Horizontal gap between two digit glyphs in a score group.
const DIGIT_STRIDE: u16 = GLYPH_WIDTH + 8;

fn centered(width: u16) -> u16 {
    (FRAME_WIDTH - width) / 2
}

/// Sample a row of digit glyphs at `origin`, leading zeros blanked.
fn digits_pixel(digits: [u8; 3], origin: (u16, u16), px: u16, py: u16) -> bool {
    let (ox, oy) = origin;
    for (i, digit) in digits.iter().enumerate() {
        let x0 = ox + i as u16 * DIGIT_STRIDE;
        let rect = PixelRect::new(x0, oy, x0 + GLYPH_WIDTH, oy + GLYPH_HEIGHT);
        if !rect.contains(px, py) {
            continue;
        }
        let leading_zero = *digit == 0 && digits[..i].iter().all(|d| *d == 0) && i < 2;
        if leading_zero {
            return false;
        }
        return digit_pixel(*digit, px - x0, py - oy);
    }
    false
}

fn digits_group_width() -> u16 {
    2 * DIGIT_STRIDE + GLYPH_WIDTH
}

/// Stand-in for the ROM splash picture: an opaque color keyed only by
/// scan position, with the game title across the middle.
pub struct SplashScreen;

impl OverlayLayer for SplashScreen {
    fn sample(&self, px: u16, py: u16) -> Option<Rgb> {
        if px < 8 || px >= FRAME_WIDTH - 8 || py < 8 || py >= FRAME_HEIGHT - 8 {
            return Some(WALL);
        }
        if text_pixel("SNAKE", (centered(text_width("SNAKE", 6)), 168), 6, px, py) {
            return Some(TEXT);
        }
        if (px / 16 + py / 16) % 2 == 0 {
            Some(SPLASH_CHECKER)
        } else {
            Some(SPLASH_FIELD)
        }
    }
}

/// The difficulty chooser: three swatches and a label; transparent in
/// between so the splash backdrop shows through.
pub struct LevelSelect;

impl OverlayLayer for LevelSelect {
    fn sample(&self, px: u16, py: u16) -> Option<Rgb> {
        for (rect, color) in SWATCH_RECTS.iter().zip(SWATCH_COLORS) {
            if rect.contains(px, py) {
                return Some(color);
            }
        }
        if text_pixel("LEVEL", (centered(text_width("LEVEL", 4)), 96), 4, px, py) {
            return Some(TEXT);
        }
        None
    }
}

/// Session best, shown under the level chooser.
pub struct BestScore {
    pub digits: [u8; 3],
}

impl OverlayLayer for BestScore {
    fn sample(&self, px: u16, py: u16) -> Option<Rgb> {
        if text_pixel("BEST", (centered(text_width("BEST", 4)), 320), 4, px, py) {
            return Some(TEXT);
        }
        if digits_pixel(self.digits, (centered(digits_group_width()), 376), px, py) {
            return Some(TEXT);
        }
        None
    }
}

/// The screen shown when the score hits one hundred.
pub struct ClearBanner;

impl OverlayLayer for ClearBanner {
    fn sample(&self, px: u16, py: u16) -> Option<Rgb> {
        if digits_pixel([1, 0, 0], (centered(digits_group_width()), 216), px, py) {
            return Some(TEXT);
        }
        None
    }
}

/// Post-blink death screen: label plus the final score digits.
pub struct FinalScore {
    pub digits: [u8; 3],
}

impl OverlayLayer for FinalScore {
    fn sample(&self, px: u16, py: u16) -> Option<Rgb> {
        if text_pixel("SCORE", (centered(text_width("SCORE", 4)), 152), 4, px, py) {
            return Some(TEXT);
        }
        if digits_pixel(self.digits, (centered(digits_group_width()), 232), px, py) {
            return Some(TEXT);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_is_opaque_everywhere() {
        for py in (0..FRAME_HEIGHT).step_by(7) {
            for px in (0..FRAME_WIDTH).step_by(7) {
                assert!(SplashScreen.sample(px, py).is_some());
            }
        }
    }

    #[test]
    fn test_swatch_colors() {
        for (rect, expected) in SWATCH_RECTS.iter().zip(SWATCH_COLORS) {
            let cx = (rect.x0 + rect.x1) / 2;
            let cy = (rect.y0 + rect.y1) / 2;
            assert_eq!(LevelSelect.sample(cx, cy), Some(expected));
        }
        // Between the swatches the layer is transparent.
        assert_eq!(LevelSelect.sample(250, 240), None);
    }

    #[test]
    fn test_leading_zeros_blanked() {
        // Score 7 renders only the ones digit; the hundreds/tens boxes
        // stay dark even where a zero glyph would be lit.
        let digits = [0, 0, 7];
        let origin = (centered(digits_group_width()), 232);
        let hundreds_probe = (origin.0 + GLYPH_WIDTH / 2, origin.1 + 4);
        assert!(!digits_pixel(digits, origin, hundreds_probe.0, hundreds_probe.1));
        // But 100 lights its zeros.
        assert!(digits_pixel(
            [1, 0, 0],
            origin,
            origin.0 + DIGIT_STRIDE + GLYPH_WIDTH / 2,
            origin.1 + 4
        ));
    }

    #[test]
    fn test_clear_banner_shows_one_hundred() {
        let origin_x = centered(digits_group_width());
        // Segment B of the leading '1'.
        assert!(ClearBanner.sample(origin_x + 28, 216 + 14).is_some());
    }
}

//! Sweep a few frames of a scripted run and dump them as PPM images,
//! standing in for the VGA sync generator pulling the pixel stream.
//!
//! Usage: cargo run --example frame_dump [out_dir]

use anyhow::Result;
use engine::{Direction, GameEngine, KeyState, SELECT_ARM_TICKS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use terminal::render::compositor::render_frame;
use terminal::render::types::FrameBuffer;

fn key(direction: Direction) -> KeyState {
    match direction {
        Direction::Up => KeyState { up: true, ..KeyState::RELEASED },
        Direction::Down => KeyState { down: true, ..KeyState::RELEASED },
        Direction::Left => KeyState { left: true, ..KeyState::RELEASED },
        Direction::Right => KeyState { right: true, ..KeyState::RELEASED },
    }
}

fn write_ppm(path: &PathBuf, frame: &FrameBuffer) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "P3 {} {} 255", frame.width(), frame.height())?;
    for row in frame.rows() {
        for pixel in row {
            writeln!(out, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("gridsnake_frames"));
    std::fs::create_dir_all(&out_dir)?;

    let mut engine = GameEngine::new();

    // Splash frame.
    engine.step(KeyState::RELEASED);
    write_ppm(&out_dir.join("splash.ppm"), &render_frame(engine.snapshot()))?;

    // Level select frame.
    for _ in 0..SELECT_ARM_TICKS {
        engine.step(KeyState::RELEASED);
    }
    write_ppm(&out_dir.join("select.ppm"), &render_frame(engine.snapshot()))?;

    // Into play on medium, then a few seconds of wandering.
    engine.step(key(Direction::Left));
    engine.step(key(Direction::Left));
    for i in 0..600u32 {
        let keys = if i % 200 == 150 {
            key(Direction::Down)
        } else {
            KeyState::RELEASED
        };
        engine.step(keys);
    }
    write_ppm(&out_dir.join("play.ppm"), &render_frame(engine.snapshot()))?;

    println!("frames written to {}", out_dir.display());
    Ok(())
}

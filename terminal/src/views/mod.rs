pub mod game;
pub mod replay_selector;
pub mod replay_viewer;

pub use game::GameViewState;
pub use replay_selector::ReplaySelectorState;
pub use replay_viewer::ReplayViewerState;

use crate::app::AppCommand;
use crate::render::compositor;
use crossterm::event::KeyEvent;
use engine::{Snapshot, GRID_HEIGHT, GRID_WIDTH};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};
use std::time::Duration;

pub trait View {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand>;
    fn update(&mut self, dt: Duration);
    fn render(&self, frame: &mut Frame);
}

/// Paint the raster as terminal lines, one 2x1 character block per grid
/// cell, each colored from the compositor's sample at the cell center.
pub fn snapshot_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    for y in 0..GRID_HEIGHT {
        let mut spans = Vec::with_capacity(GRID_WIDTH as usize);
        for x in 0..GRID_WIDTH {
            let color = compositor::cell_color(snapshot, x, y);
            spans.push(Span::styled(
                "  ",
                Style::default().bg(Color::Rgb(color.r, color.g, color.b)),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

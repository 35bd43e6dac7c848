use super::{snapshot_lines, View};
use crate::app::AppCommand;
use crate::replay::{player::ReplayPlayer, ReplayData};
use crossterm::event::{KeyCode, KeyEvent};
use engine::TICKS_PER_SECOND;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

const SECONDS_PER_TICK: f32 = 1.0 / TICKS_PER_SECOND as f32;

pub struct ReplayViewerState {
    player: ReplayPlayer,
    playback_accumulator: f32,
}

impl ReplayViewerState {
    pub fn new(data: ReplayData) -> Self {
        Self {
            player: ReplayPlayer::new(data),
            playback_accumulator: 0.0,
        }
    }
}

impl View for ReplayViewerState {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char(' ') => {
                self.player.toggle_play();
                self.playback_accumulator = 0.0;
                None
            }
            KeyCode::Char('j') => {
                self.player.is_playing = false;
                self.player.step_forward(1);
                None
            }
            KeyCode::Char('l') => {
                self.player.is_playing = false;
                self.player.step_forward(TICKS_PER_SECOND as usize);
                None
            }
            KeyCode::Char('k') => {
                self.player.is_playing = false;
                self.player.step_backward(1);
                None
            }
            KeyCode::Char('h') => {
                self.player.is_playing = false;
                self.player.step_backward(TICKS_PER_SECOND as usize);
                None
            }
            KeyCode::Char('0') => {
                self.player.is_playing = false;
                self.player.seek_to_tick(0);
                None
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.play_speed = (self.player.play_speed * 2.0).min(16.0);
                None
            }
            KeyCode::Char('-') => {
                self.player.play_speed = (self.player.play_speed / 2.0).max(0.25);
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::OpenSelector),
            _ => None,
        }
    }

    fn update(&mut self, dt: Duration) {
        if !self.player.is_playing {
            return;
        }
        self.playback_accumulator += dt.as_secs_f32() * self.player.play_speed;
        while self.playback_accumulator >= SECONDS_PER_TICK {
            self.player.step_forward(1);
            self.playback_accumulator -= SECONDS_PER_TICK;
            if self.player.at_end() {
                self.player.is_playing = false;
                self.playback_accumulator = 0.0;
                break;
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(frame.area());

        let board = Paragraph::new(snapshot_lines(self.player.snapshot()))
            .block(Block::default().borders(Borders::ALL).title("replay"));
        frame.render_widget(board, chunks[0]);

        let snapshot = self.player.snapshot();
        let status = format!(
            "tick {}/{}   score {}   {}x   space play/pause  h/j/k/l seek  0 start  q back",
            self.player.current_tick(),
            self.player.max_tick(),
            snapshot.score,
            self.player.play_speed,
        );
        let bar = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
        frame.render_widget(bar, chunks[1]);
    }
}

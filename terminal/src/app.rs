use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;

use crate::replay::reader::ReplayReader;
use crate::views::{GameViewState, ReplaySelectorState, ReplayViewerState, View};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    OpenSelector,
    OpenReplay(PathBuf),
    BackToGame,
}

pub enum AppState {
    Game(Box<GameViewState>),
    ReplaySelector(Box<ReplaySelectorState>),
    ReplayViewer(Box<ReplayViewerState>),
}

pub struct App {
    pub state: AppState,
    pub replay_dir: PathBuf,
}

impl App {
    pub fn new(replay_dir: PathBuf) -> Self {
        Self {
            state: AppState::Game(Box::new(GameViewState::new(replay_dir.clone()))),
            replay_dir,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match &mut self.state {
            AppState::Game(game) => game.handle_input(key),
            AppState::ReplaySelector(selector) => selector.handle_input(key),
            AppState::ReplayViewer(viewer) => viewer.handle_input(key),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        match &mut self.state {
            AppState::Game(game) => game.update(dt),
            AppState::ReplaySelector(selector) => selector.update(dt),
            AppState::ReplayViewer(viewer) => viewer.update(dt),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.state {
            AppState::Game(game) => game.render(frame),
            AppState::ReplaySelector(selector) => selector.render(frame),
            AppState::ReplayViewer(viewer) => viewer.render(frame),
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::OpenSelector => {
                let selector = ReplaySelectorState::new(self.replay_dir.clone())?;
                self.state = AppState::ReplaySelector(Box::new(selector));
            }
            AppCommand::OpenReplay(path) => {
                let data = ReplayReader::load_replay(&path)?;
                let viewer = ReplayViewerState::new(data);
                self.state = AppState::ReplayViewer(Box::new(viewer));
            }
            AppCommand::BackToGame => {
                let game = GameViewState::new(self.replay_dir.clone());
                self.state = AppState::Game(Box::new(game));
            }
            AppCommand::Quit => {
                // Handled in the main loop.
            }
        }
        Ok(())
    }
}

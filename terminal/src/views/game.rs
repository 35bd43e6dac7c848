use super::{snapshot_lines, View};
use crate::app::AppCommand;
use crate::replay::writer::ReplayWriter;
use crossterm::event::{KeyCode, KeyEvent};
use engine::{Direction, GameEngine, KeyState, Recording, TICKS_PER_SECOND, DEFAULT_SEED};
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long one key press counts as held. Terminals report presses and
/// repeats, not releases, so a press is stretched over the following
/// ticks to look like a held line to the engine.
const KEY_HOLD: Duration = Duration::from_millis(180);

const SECONDS_PER_TICK: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Ticks to run at most per UI frame, so a stalled terminal does not
/// spiral into an ever-growing catch-up burst.
const MAX_TICKS_PER_FRAME: u32 = 240;

#[derive(Default)]
struct HeldKeys {
    up: Option<Instant>,
    down: Option<Instant>,
    left: Option<Instant>,
    right: Option<Instant>,
}

impl HeldKeys {
    fn press(&mut self, direction: Direction) {
        let now = Some(Instant::now());
        match direction {
            Direction::Up => self.up = now,
            Direction::Down => self.down = now,
            Direction::Left => self.left = now,
            Direction::Right => self.right = now,
        }
    }

    fn state(&self, now: Instant) -> KeyState {
        let held = |pressed: Option<Instant>| {
            pressed.is_some_and(|at| now.duration_since(at) < KEY_HOLD)
        };
        KeyState {
            up: held(self.up),
            down: held(self.down),
            left: held(self.left),
            right: held(self.right),
        }
    }
}

/// The live game: owns the engine, records every tick's key lines, and
/// paints the compositor's output.
pub struct GameViewState {
    engine: GameEngine,
    recording: Recording,
    held: HeldKeys,
    tick_accumulator: f32,
    paused: bool,
    replay_dir: PathBuf,
    status_line: Option<String>,
}

impl GameViewState {
    pub fn new(replay_dir: PathBuf) -> Self {
        Self {
            engine: GameEngine::new(),
            recording: Recording::new(DEFAULT_SEED),
            held: HeldKeys::default(),
            tick_accumulator: 0.0,
            paused: false,
            replay_dir,
            status_line: None,
        }
    }

    fn save_replay(&mut self) {
        let snapshot = self.engine.snapshot();
        match ReplayWriter::save_run(
            &self.replay_dir,
            &self.recording,
            snapshot.score,
            snapshot.best_score,
        ) {
            Ok(path) => {
                self.status_line = Some(format!("saved {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save replay");
                self.status_line = Some(format!("save failed: {err}"));
            }
        }
    }
}

impl View for GameViewState {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Up => {
                self.held.press(Direction::Up);
                None
            }
            KeyCode::Down => {
                self.held.press(Direction::Down);
                None
            }
            KeyCode::Left => {
                self.held.press(Direction::Left);
                None
            }
            KeyCode::Right => {
                self.held.press(Direction::Right);
                None
            }
            KeyCode::Char('p') => {
                self.paused = !self.paused;
                None
            }
            KeyCode::Char('s') => {
                self.save_replay();
                None
            }
            KeyCode::Char('v') => Some(AppCommand::OpenSelector),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            _ => None,
        }
    }

    fn update(&mut self, dt: Duration) {
        if self.paused {
            return;
        }
        self.tick_accumulator += dt.as_secs_f32();
        let mut budget = MAX_TICKS_PER_FRAME;
        while self.tick_accumulator >= SECONDS_PER_TICK && budget > 0 {
            let keys = self.held.state(Instant::now());
            self.recording.push(keys);
            self.engine.step(keys);
            self.tick_accumulator -= SECONDS_PER_TICK;
            budget -= 1;
        }
        if budget == 0 {
            self.tick_accumulator = 0.0;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Length(82), Constraint::Min(24)])
            .split(frame.area());

        let board = Paragraph::new(snapshot_lines(self.engine.snapshot()))
            .block(Block::default().borders(Borders::ALL).title("GRIDSNAKE"));
        frame.render_widget(board, chunks[0]);

        let snapshot = self.engine.snapshot();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{:?}", snapshot.phase),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("difficulty: {:?}", snapshot.difficulty)),
            Line::from(format!("score: {:>3}", snapshot.score)),
            Line::from(format!("best:  {:>3}", snapshot.best_score)),
            Line::from(format!("length: {}", snapshot.snake.len())),
            Line::from(format!("tick: {}", snapshot.tick)),
            Line::from(""),
            Line::from("arrows       steer"),
            Line::from("p            pause"),
            Line::from("s            save replay"),
            Line::from("v            replays"),
            Line::from("q            quit"),
        ];
        if self.paused {
            lines.push(Line::from(Span::styled(
                "PAUSED",
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(status) = &self.status_line {
            lines.push(Line::from(status.clone()));
        }
        let sidebar =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("status"));
        frame.render_widget(sidebar, chunks[1]);
    }
}

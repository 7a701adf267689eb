use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{GameState, MoveResult, WIDTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::status::StatusNotifier;

/// Starting cursor column, kept on the board whatever the config holds
fn home_column(ui: &UiConfig) -> usize {
    ui.initial_column.min(WIDTH - 1)
}

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    status: StatusNotifier,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: home_column(&ui),
            should_quit: false,
            status: StatusNotifier::new(ui),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let poll_interval = Duration::from_millis(self.status.ui().poll_interval_ms);
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            if event::poll(poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.status.message()
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.status.clear_message();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < WIDTH {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as usize) - ('1' as usize);
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_column = home_column(self.status.ui());
                self.status.reset();
                self.status.set_message("New game started!");
                tracing::info!("new game started");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.play(self.selected_column, &mut self.status) {
            Ok(MoveResult::Placed(_)) => {}
            Ok(MoveResult::ColumnFull) => {
                self.status.set_message("Column is full!");
            }
            Ok(MoveResult::GameOver) => {
                self.status.set_message("Game over! Press 'r' to restart.");
            }
            Err(err @ MoveError::InvalidColumn { .. }) => {
                tracing::warn!(%err, "rejected move");
                self.status.set_message("Invalid column!");
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.status);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

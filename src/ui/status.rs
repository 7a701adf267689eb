use crate::config::UiConfig;
use crate::game::{GameObserver, GameOutcome, Player};

/// Human-readable game-end announcement.
pub fn describe_outcome(outcome: GameOutcome, ui: &UiConfig) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!("{} has won the game!", ui.player_name(player)),
        GameOutcome::Tie => "This game was a tie!".to_string(),
    }
}

/// Observer that keeps the latest placement and status line for the
/// terminal UI.
#[derive(Debug, Clone)]
pub struct StatusNotifier {
    ui: UiConfig,
    message: Option<String>,
    last_placed: Option<(usize, usize)>,
}

impl StatusNotifier {
    pub fn new(ui: UiConfig) -> Self {
        StatusNotifier {
            ui,
            message: None,
            last_placed: None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Cell of the most recent piece, if any
    pub fn last_placed(&self) -> Option<(usize, usize)> {
        self.last_placed
    }

    /// Forget everything from the previous session
    pub fn reset(&mut self) {
        self.message = None;
        self.last_placed = None;
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }
}

impl GameObserver for StatusNotifier {
    fn on_piece_placed(&mut self, row: usize, column: usize, _player: Player) {
        self.last_placed = Some((row, column));
    }

    fn on_game_end(&mut self, outcome: GameOutcome) {
        self.message = Some(format!(
            "{}  Press 'r' to play again.",
            describe_outcome(outcome, &self.ui)
        ));
    }
}

use super::player::Player;
use super::state::GameOutcome;

/// Presentation hooks invoked by [`GameState::play`](super::GameState::play).
pub trait GameObserver {
    /// A piece for `player` settled at (row, column).
    fn on_piece_placed(&mut self, row: usize, column: usize, player: Player);

    /// The game reached a terminal state. Called at most once per session.
    fn on_game_end(&mut self, outcome: GameOutcome);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_piece_placed(&mut self, _row: usize, _column: usize, _player: Player) {}

    fn on_game_end(&mut self, _outcome: GameOutcome) {}
}

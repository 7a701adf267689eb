use std::fmt;

use super::board::{Board, WIDTH};
use super::observer::GameObserver;
use super::player::Player;
use super::win;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "player{}-wins", player.number()),
            GameOutcome::Tie => f.write_str("tie"),
        }
    }
}

/// Where a dropped piece settled and what it did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    /// Set when this placement ended the game
    pub outcome: Option<GameOutcome>,
}

/// Result of handling a single "column chosen" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Placed(Placement),
    /// The column had no empty cell; nothing changed
    ColumnFull,
    /// The game already ended; nothing changed
    GameOver,
}

/// A single game session: the grid, whose turn it is, and the outcome once
/// the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get current player. After a terminal move this stays the player who
    /// ended the game.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return the new state alongside the result (immutable)
    pub fn apply_move(&self, column: usize) -> Result<(GameState, MoveResult), MoveError> {
        let mut next = *self;
        let result = next.apply_move_mut(column)?;
        Ok((next, result))
    }

    /// Process one "column chosen" event to completion: place, check for a
    /// win by the mover, check for a tie, then hand the turn over.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn { column });
        }

        if self.is_terminal() {
            tracing::debug!(column, "game already over, ignoring move");
            return Ok(MoveResult::GameOver);
        }

        let Some(row) = self.board.find_landing_row(column) else {
            tracing::debug!(column, "column full, ignoring move");
            return Ok(MoveResult::ColumnFull);
        };

        let player = self.current_player;
        self.board.place_piece(row, column, player);
        tracing::debug!(row, column, %player, "piece placed");

        let outcome = if win::has_won(&self.board, player) {
            Some(GameOutcome::Winner(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Tie)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.outcome = Some(outcome);
                tracing::info!(%outcome, moves = self.board.piece_count(), "game over");
            }
            None => self.current_player = player.other(),
        }

        Ok(MoveResult::Placed(Placement {
            row,
            column,
            player,
            outcome,
        }))
    }

    /// Like [`GameState::apply_move_mut`], reporting the placement and any
    /// game end to `observer`.
    pub fn play<O>(&mut self, column: usize, observer: &mut O) -> Result<MoveResult, MoveError>
    where
        O: GameObserver + ?Sized,
    {
        let result = self.apply_move_mut(column)?;
        if let MoveResult::Placed(placement) = result {
            observer.on_piece_placed(placement.row, placement.column, placement.player);
            if let Some(outcome) = placement.outcome {
                observer.on_game_end(outcome);
            }
        }
        Ok(result)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, NoopObserver, HEIGHT};

    /// Alternating moves that fill the board with no four-in-a-row.
    /// The 42nd move is Player Two's.
    const TIE_GAME: [usize; 42] = [
        3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4,
        4, 0, 1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
    ];

    #[derive(Default)]
    struct Recorder {
        placed: Vec<(usize, usize, Player)>,
        ended: Vec<GameOutcome>,
    }

    impl GameObserver for Recorder {
        fn on_piece_placed(&mut self, row: usize, column: usize, player: Player) {
            self.placed.push((row, column, player));
        }

        fn on_game_end(&mut self, outcome: GameOutcome) {
            self.ended.push(outcome);
        }
    }

    fn play_all(columns: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &col in columns {
            state.apply_move_mut(col).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), WIDTH);
    }

    #[test]
    fn test_apply_move_is_immutable() {
        let state = GameState::initial();
        let (next, result) = state.apply_move(3).unwrap();

        assert_eq!(state, GameState::initial());
        assert_eq!(next.current_player(), Player::Two);
        assert_eq!(next.board().get(5, 3), Cell::Player1);
        assert_eq!(
            result,
            MoveResult::Placed(Placement {
                row: 5,
                column: 3,
                player: Player::One,
                outcome: None,
            })
        );
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let mut state = GameState::initial();
        assert_eq!(
            state.apply_move_mut(WIDTH),
            Err(MoveError::InvalidColumn { column: WIDTH })
        );
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_full_column_is_a_noop() {
        let mut state = play_all(&[0; HEIGHT]);
        let before = state;

        assert_eq!(state.apply_move_mut(0), Ok(MoveResult::ColumnFull));
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_horizontal_win_keeps_mover_as_current() {
        let state = play_all(&[0, 0, 1, 1, 2, 2, 3]);

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_second_player_can_win() {
        let state = play_all(&[0, 1, 0, 1, 0, 1, 6, 1]);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Two)));
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut state = play_all(&[0, 1, 0, 1, 0, 1, 0]);
        let before = state;

        assert_eq!(state.apply_move_mut(5), Ok(MoveResult::GameOver));
        assert_eq!(state, before);
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_tie() {
        let state = play_all(&TIE_GAME);

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Tie));
        assert_eq!(state.current_player(), Player::Two);
        assert!(!win::has_won(state.board(), Player::One));
        assert!(!win::has_won(state.board(), Player::Two));
    }

    #[test]
    fn test_turn_toggles_on_non_terminal_move() {
        let mut state = GameState::initial();
        state.apply_move_mut(2).unwrap();
        assert_eq!(state.current_player(), Player::Two);
        state.apply_move_mut(2).unwrap();
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_play_notifies_observer() {
        let mut state = GameState::initial();
        let mut recorder = Recorder::default();

        for col in [0, 0, 1, 1, 2, 2, 3] {
            state.play(col, &mut recorder).unwrap();
        }

        assert_eq!(recorder.placed.len(), 7);
        assert_eq!(recorder.placed[0], (5, 0, Player::One));
        assert_eq!(recorder.placed[1], (4, 0, Player::Two));
        assert_eq!(recorder.placed[6], (5, 3, Player::One));
        assert_eq!(recorder.ended, vec![GameOutcome::Winner(Player::One)]);

        // Ignored moves produce no callbacks
        state.play(4, &mut recorder).unwrap();
        assert_eq!(recorder.placed.len(), 7);
        assert_eq!(recorder.ended.len(), 1);
    }

    #[test]
    fn test_play_with_noop_observer_matches_apply_move() {
        let mut observed = GameState::initial();
        let mut plain = GameState::initial();
        for col in [3, 3, 4, 2] {
            let a = observed.play(col, &mut NoopObserver).unwrap();
            let b = plain.apply_move_mut(col).unwrap();
            assert_eq!(a, b);
        }
        assert_eq!(observed, plain);
    }

    #[test]
    fn test_play_reports_tie_once() {
        let mut state = GameState::initial();
        let mut recorder = Recorder::default();
        for &col in &TIE_GAME {
            state.play(col, &mut recorder).unwrap();
        }
        assert_eq!(recorder.placed.len(), WIDTH * HEIGHT);
        assert_eq!(recorder.ended, vec![GameOutcome::Tie]);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Winner(Player::One).to_string(), "player1-wins");
        assert_eq!(GameOutcome::Winner(Player::Two).to_string(), "player2-wins");
        assert_eq!(GameOutcome::Tie.to_string(), "tie");
    }
}

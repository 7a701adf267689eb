//! Core Connect Four rules: board, players, four-in-a-row detection and the
//! per-move state machine, plus the observer hooks presentation layers use.

mod board;
mod observer;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use observer::{GameObserver, NoopObserver};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveResult, Placement};

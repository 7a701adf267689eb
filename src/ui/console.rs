//! Line-oriented front end: one 1-based column number per input line.

use std::io::{self, BufRead, Write};

use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{Board, Cell, GameObserver, GameOutcome, GameState, MoveResult, Player, HEIGHT, WIDTH};

use super::status::describe_outcome;

/// Plain-text rendering of the board, top row first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for col in 1..=WIDTH {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            let symbol = match board.get(row, col) {
                Cell::Empty => '.',
                Cell::Player1 => 'X',
                Cell::Player2 => 'O',
            };
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

/// Observer that queues announcements until the caller writes them out.
#[derive(Debug)]
pub struct ConsoleNotifier {
    ui: UiConfig,
    pending: Vec<String>,
}

impl ConsoleNotifier {
    pub fn new(ui: UiConfig) -> Self {
        ConsoleNotifier {
            ui,
            pending: Vec::new(),
        }
    }

    /// Write and drop every queued line
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for line in self.pending.drain(..) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl GameObserver for ConsoleNotifier {
    fn on_piece_placed(&mut self, row: usize, column: usize, player: Player) {
        self.pending.push(format!(
            "{} dropped into column {} (row {} from the top)",
            self.ui.player_name(player),
            column + 1,
            row + 1
        ));
    }

    fn on_game_end(&mut self, outcome: GameOutcome) {
        self.pending.push(describe_outcome(outcome, &self.ui));
    }
}

/// Play one game reading moves from `input` until the game ends or input
/// runs out. Returns the final session.
pub fn run<R, W>(input: R, out: &mut W, ui: &UiConfig) -> io::Result<GameState>
where
    R: BufRead,
    W: Write,
{
    let mut state = GameState::initial();
    let mut notifier = ConsoleNotifier::new(ui.clone());

    prompt(out, &state, ui)?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Ok(number) = trimmed.parse::<usize>() else {
            writeln!(out, "'{trimmed}' is not a column; enter 1-{WIDTH}")?;
            continue;
        };

        // 0 has no 0-based counterpart; report it as out of range
        let column = number.checked_sub(1).unwrap_or(usize::MAX);
        match state.play(column, &mut notifier) {
            Ok(MoveResult::Placed(_)) => notifier.flush_to(out)?,
            Ok(MoveResult::ColumnFull) => writeln!(out, "Column {number} is full")?,
            Ok(MoveResult::GameOver) => break,
            Err(MoveError::InvalidColumn { .. }) => {
                writeln!(out, "Column {number} does not exist; enter 1-{WIDTH}")?
            }
        }

        if state.is_terminal() {
            break;
        }
        prompt(out, &state, ui)?;
    }

    write!(out, "{}", render_board(state.board()))?;
    if !state.is_terminal() {
        writeln!(out, "Game unfinished")?;
    }
    Ok(state)
}

fn prompt<W: Write>(out: &mut W, state: &GameState, ui: &UiConfig) -> io::Result<()> {
    writeln!(out, "{} to move", ui.player_name(state.current_player()))
}

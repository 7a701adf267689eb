//! Four-in-a-row detection.
//!
//! Every cell is tried as the anchor of a line running right, down,
//! down-right and down-left; together these cover every line on the grid.

use super::board::{Board, HEIGHT, WIDTH};
use super::player::Player;

/// Number of aligned pieces needed to win
pub const CONNECT: usize = 4;

/// Coordinates `(row, column)` of a completed line
pub type Line = [(usize, usize); CONNECT];

/// (row step, column step): horizontal, vertical, diagonal down-right,
/// diagonal down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether `player` owns four cells in a row anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First line owned entirely by `player`, in row-major anchor order
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let target = player.to_cell();

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            for &(d_row, d_col) in &DIRECTIONS {
                let Some(line) = line_from(row, col, d_row, d_col) else {
                    continue;
                };
                if line.iter().all(|&(r, c)| board.get(r, c) == target) {
                    return Some(line);
                }
            }
        }
    }

    None
}

/// The CONNECT cells starting at (row, col) in the given direction, or
/// `None` if any of them falls outside the grid.
fn line_from(row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Line> {
    let mut line = [(0, 0); CONNECT];
    for (step, slot) in line.iter_mut().enumerate() {
        let step = step as isize;
        let r = row.checked_add_signed(d_row * step)?;
        let c = col.checked_add_signed(d_col * step)?;
        if r >= HEIGHT || c >= WIDTH {
            return None;
        }
        *slot = (r, c);
    }
    Some(line)
}

use super::player::Player;

pub const HEIGHT: usize = 6;
pub const WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }
}

/// Fixed HEIGHT x WIDTH grid. Row 0 is the top; pieces settle toward
/// row `HEIGHT - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Lowest empty row in `column`, scanning up from the bottom.
    /// `None` when the column is full or out of range.
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty)
    }

    /// Claim the cell at (row, column) for `player`.
    ///
    /// The cell must be empty; `row` is expected to come from
    /// [`Board::find_landing_row`]. Occupied cells are never overwritten.
    pub fn place_piece(&mut self, row: usize, column: usize, player: Player) {
        let cell = &mut self.cells[row][column];
        debug_assert_eq!(
            *cell,
            Cell::Empty,
            "placing onto occupied cell ({row}, {column})"
        );
        if *cell == Cell::Empty {
            *cell = player.to_cell();
        }
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        self.find_landing_row(column).is_none()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell != Cell::Empty)
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_into(board: &mut Board, column: usize, player: Player) -> usize {
        let row = board.find_landing_row(column).unwrap();
        board.place_piece(row, column, player);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_landing_row_starts_at_bottom() {
        let mut board = Board::new();
        assert_eq!(board.find_landing_row(3), Some(HEIGHT - 1));

        assert_eq!(drop_into(&mut board, 3, Player::One), 5);
        assert_eq!(board.get(5, 3), Cell::Player1);

        assert_eq!(drop_into(&mut board, 3, Player::Two), 4);
        assert_eq!(board.get(4, 3), Cell::Player2);
    }

    #[test]
    fn test_column_fills_bottom_to_top() {
        let mut board = Board::new();
        let rows: Vec<usize> = (0..HEIGHT).map(|_| drop_into(&mut board, 0, Player::One)).collect();
        assert_eq!(rows, vec![5, 4, 3, 2, 1, 0]);

        assert!(board.is_column_full(0));
        assert_eq!(board.find_landing_row(0), None);
        assert_eq!(board.piece_count(), HEIGHT);
    }

    #[test]
    fn test_out_of_range_column_has_no_landing_row() {
        let board = Board::new();
        assert_eq!(board.find_landing_row(WIDTH), None);
        assert_eq!(board.find_landing_row(usize::MAX), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..WIDTH {
            assert!(!board.is_full());
            for _ in 0..HEIGHT {
                drop_into(&mut board, col, Player::Two);
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_legal_columns_skip_full_ones() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            drop_into(&mut board, 2, Player::One);
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Player1.owner(), Some(Player::One));
        assert_eq!(Cell::Player2.owner(), Some(Player::Two));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "occupied cell")]
    fn test_place_on_occupied_cell_panics_in_debug() {
        let mut board = Board::new();
        board.place_piece(5, 0, Player::One);
        board.place_piece(5, 0, Player::Two);
    }
}

use super::game_state::Mark;

pub const GRID_SIDE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// 3x3 board stored row-major: indices 0,1,2 / 3,4,5 / 6,7,8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    /// Callers validate the move first; placement never mutates `self`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[index] = mark;
        Board { cells }
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

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&cell| cell == Mark::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_is_valid_move_rejects_out_of_range() {
        let board = Board::new();
        assert!(board.is_valid_move(0));
        assert!(board.is_valid_move(8));
        assert!(!board.is_valid_move(9));
        assert!(!board.is_valid_move(100));
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_cell() {
        let board = Board::new().with_mark(4, Mark::X);
        assert!(!board.is_valid_move(4));
        assert!(board.is_valid_move(5));
    }

    #[test]
    fn test_with_mark_leaves_original_unchanged() {
        let board = Board::new();
        let marked = board.with_mark(0, Mark::O);
        assert_eq!(board.cell(0), Mark::Empty);
        assert_eq!(marked.cell(0), Mark::O);
    }

    #[test]
    fn test_is_full_after_nine_marks() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            let mark = if index % 2 == 0 { Mark::X } else { Mark::O };
            board = board.with_mark(index, mark);
        }
        assert!(board.is_full());
    }
}

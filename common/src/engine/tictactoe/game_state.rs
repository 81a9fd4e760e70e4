use super::board::{Board, CELL_COUNT};
use super::error::MoveError;
use super::types::WinningLine;
use super::win_detector::{check_win_with_line, is_draw};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// Full state of one game. Transitions never mutate: `apply_move`
/// returns the successor state and leaves the receiver untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl GameState {
    /// Empty board, X to move. Restart is just a fresh `new()`.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Places the current mark at `index` and flips the turn.
    /// The turn flips on every accepted move, including the game-ending
    /// one; a finished game rejects all further moves anyway.
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_valid_move(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let board = self.board.with_mark(index, self.current_mark);

        let winning_line = check_win_with_line(&board);
        let status = match winning_line {
            Some(line) => match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            },
            None if is_draw(&board, None) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        let current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };

        Ok(GameState {
            board,
            current_mark,
            status,
            winning_line,
        })
    }

    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::XWon => "Winner: X".to_string(),
            GameStatus::OWon => "Winner: O".to_string(),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => {
                format!("Next player: {}", self.current_mark.symbol())
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            state = state.apply_move(index).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game_starts_empty_with_x() {
        let state = GameState::new();
        assert!(state.board().cells().iter().all(|&c| c == Mark::Empty));
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_turn_alternates_after_every_accepted_move() {
        let state = GameState::new();
        let after_one = state.apply_move(4).unwrap();
        assert_eq!(after_one.current_mark(), Mark::O);
        let after_two = after_one.apply_move(0).unwrap();
        assert_eq!(after_two.current_mark(), Mark::X);
        assert_eq!(after_two.board().cell(4), Mark::X);
        assert_eq!(after_two.board().cell(0), Mark::O);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let state = play(&[4]);
        assert_eq!(state.apply_move(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(state.apply_move(9), Err(MoveError::OutOfRange(9)));
        // Still O's turn, board untouched.
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board().cell(4), Mark::X);
    }

    #[test]
    fn test_x_wins_top_row() {
        // X: 0, 1, 2; O: 3, 4.
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        let line = state.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_o_wins_middle_row() {
        // X: 0, 1, 8; O: 3, 4, 5.
        let state = play(&[0, 3, 1, 4, 8, 5]);
        assert_eq!(state.status(), GameStatus::OWon);
        assert_eq!(state.winning_line().unwrap().cells, [3, 4, 5]);
    }

    #[test]
    fn test_no_moves_after_winner() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(state.status(), GameStatus::XWon);
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let state = play(&[0, 1, 2, 5, 3, 4, 7, 6, 8]);
        assert!(state.board().is_full());
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_restart_resets_board_and_turn() {
        let _finished = play(&[0, 3, 1, 4, 2]);
        let restarted = GameState::new();
        assert!(restarted.board().cells().iter().all(|&c| c == Mark::Empty));
        assert_eq!(restarted.current_mark(), Mark::X);
        assert_eq!(restarted.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_status_line_strings() {
        assert_eq!(GameState::new().status_line(), "Next player: X");
        assert_eq!(play(&[4]).status_line(), "Next player: O");
        assert_eq!(play(&[0, 3, 1, 4, 2]).status_line(), "Winner: X");
        assert_eq!(
            play(&[0, 1, 2, 5, 3, 4, 7, 6, 8]).status_line(),
            "Draw!"
        );
    }
}

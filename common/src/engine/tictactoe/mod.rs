mod board;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, GRID_SIDE};
pub use error::MoveError;
pub use game_state::{GameState, GameStatus, Mark};
pub use types::WinningLine;
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_draw};

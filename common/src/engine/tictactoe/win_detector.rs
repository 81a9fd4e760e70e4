use super::board::Board;
use super::game_state::Mark;
use super::types::WinningLine;

/// The 8 index triples that decide the game: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Returns the first fully-marked triple in `WINNING_LINES` order.
/// In valid play at most one line can be complete; the enumeration
/// order makes the result deterministic for arbitrary boards.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = board.cell(a);
        if mark != Mark::Empty && board.cell(b) == mark && board.cell(c) == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn is_draw(board: &Board, winner: Option<Mark>) -> bool {
    winner.is_none() && board.is_full()
}

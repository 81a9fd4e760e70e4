#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),
    #[error("cell {0} is already marked")]
    CellOccupied(usize),
    #[error("game is already over")]
    GameOver,
}

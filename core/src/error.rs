use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {0} is outside the 3x3 grid")]
    InvalidIndex(usize),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must contain exactly 9 cells")]
    InvalidGridShape,
    #[error("Unknown cell symbol {0:?}")]
    InvalidCellSymbol(char),
    #[error("Move {0} is not part of the recorded history")]
    UnknownSnapshot(usize),
    #[error("History must hold at least the starting position")]
    EmptyHistory,
}

pub type Result<T> = core::result::Result<T, GameError>;

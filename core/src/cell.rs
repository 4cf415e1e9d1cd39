use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Symbol a player puts on the board. `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Taken(mark) => Some(mark),
        }
    }

    /// Label shown on the board, empty for an unplayed cell.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Taken(mark) => mark.as_str(),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Taken(Mark::X) => 'X',
            Self::Taken(Mark::O) => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'X' | 'x' => Ok(Self::Taken(Mark::X)),
            'O' | 'o' => Ok(Self::Taken(Mark::O)),
            '.' | '-' | '_' => Ok(Self::Empty),
            other => Err(GameError::InvalidCellSymbol(other)),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Self::Taken(mark)
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Self::Empty, Self::Taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_alternate() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
        assert_eq!(Mark::default(), Mark::X);
    }

    #[test]
    fn symbols_parse_case_insensitively() {
        assert_eq!(Cell::from_symbol('x'), Ok(Cell::Taken(Mark::X)));
        assert_eq!(Cell::from_symbol('O'), Ok(Cell::Taken(Mark::O)));
        assert_eq!(Cell::from_symbol('_'), Ok(Cell::Empty));
        assert_eq!(
            Cell::from_symbol('?'),
            Err(GameError::InvalidCellSymbol('?'))
        );
    }

    #[test]
    fn empty_cell_has_no_label() {
        assert_eq!(Cell::Empty.label(), "");
        assert_eq!(Cell::from(Mark::O).label(), "O");
        assert_eq!(Cell::from(None).mark(), None);
    }
}

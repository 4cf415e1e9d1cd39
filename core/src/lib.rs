#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use symmetry::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod history;
mod symmetry;
mod types;

/// The nine cells of the board in row-major order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    pub const fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn validate_index(index: usize) -> Result<usize> {
        if is_valid_index(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn validate_coords(coords: Coord2) -> Result<usize> {
        if is_valid_coords(coords) {
            Ok(coords.to_cell_index())
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell> {
        Self::validate_index(index).map(|index| self.cells[index])
    }

    /// Copy of this grid with `index` replaced by `cell`.
    pub fn with_cell(mut self, index: usize, cell: Cell) -> Result<Self> {
        let index = Self::validate_index(index)?;
        self.cells[index] = cell;
        Ok(self)
    }

    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.iter().filter(|&cell| cell == Cell::Taken(mark)).count()
    }

    pub fn taken_count(&self) -> usize {
        self.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.iter().all(|cell| !cell.is_empty())
    }

    pub fn winner(&self) -> Option<Mark> {
        evaluate_winner(self)
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_cell_index()]
    }
}

impl From<[Cell; CELL_COUNT]> for Grid {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

/// Rows are separated by `/`, e.g. `XX./O../...`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for (index, cell) in self.iter().enumerate() {
            if index > 0 && index % usize::from(SIDE) == 0 {
                f.write_char('/')?;
            }
            f.write_char(cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut len = 0;

        for symbol in s.chars().filter(|&c| c != '/' && !c.is_whitespace()) {
            let cell = Cell::from_symbol(symbol)?;
            let slot = cells.get_mut(len).ok_or(GameError::InvalidGridShape)?;
            *slot = cell;
            len += 1;
        }

        if len == CELL_COUNT {
            Ok(Self::from_cells(cells))
        } else {
            Err(GameError::InvalidGridShape)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Mark),
    Drawn,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won(_) => true,
            Drawn => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn grid_text_form_is_row_major() {
        let grid: Grid = "XX./O../...".parse().unwrap();

        assert_eq!(grid[0], Cell::Taken(Mark::X));
        assert_eq!(grid[1], Cell::Taken(Mark::X));
        assert_eq!(grid[(0, 1)], Cell::Taken(Mark::O));
        assert_eq!(grid.count(Mark::X), 2);
        assert_eq!(grid.count(Mark::O), 1);
        assert_eq!(grid.to_string(), "XX./O../...");
    }

    #[test]
    fn grid_parse_accepts_whitespace_rows() {
        let grid: Grid = "X O X\nO X O\n. . .".parse().unwrap();

        assert_eq!(grid.taken_count(), 6);
        assert_eq!(grid.empty_indices().collect::<alloc::vec::Vec<_>>(), [6, 7, 8]);
    }

    #[test]
    fn grid_parse_rejects_wrong_length_and_symbols() {
        assert_eq!("XX".parse::<Grid>(), Err(GameError::InvalidGridShape));
        assert_eq!(
            "..........".parse::<Grid>(),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(
            "XX?/.../...".parse::<Grid>(),
            Err(GameError::InvalidCellSymbol('?'))
        );
    }

    #[test]
    fn with_cell_copies_and_validates() {
        let grid = Grid::new();
        let next = grid.with_cell(4, Cell::Taken(Mark::O)).unwrap();

        assert_eq!(grid, Grid::new());
        assert_eq!(next[4], Cell::Taken(Mark::O));
        assert_eq!(
            grid.with_cell(9, Cell::Taken(Mark::X)),
            Err(GameError::InvalidIndex(9))
        );
    }

    #[test]
    fn coords_are_validated() {
        assert_eq!(Grid::validate_coords((2, 1)), Ok(5));
        assert_eq!(Grid::validate_coords((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(Grid::new().cell_at(8), Ok(Cell::Empty));
        assert_eq!(Grid::new().cell_at(12), Err(GameError::InvalidIndex(12)));
    }

    #[test]
    fn only_no_change_skips_updates() {
        assert!(!MoveOutcome::NoChange.has_update());
        assert!(MoveOutcome::Placed.has_update());
        assert!(MoveOutcome::Won(Mark::O).is_finished());
        assert!(MoveOutcome::Drawn.is_finished());
        assert!(!MoveOutcome::Placed.is_finished());
    }
}

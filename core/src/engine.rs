use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Returns the mark holding a full line, checking [`LINES`] in order.
///
/// A drawn board and an unfinished board both yield `None`; use
/// [`GameState::status`] to tell them apart.
pub fn evaluate_winner(grid: &Grid) -> Option<Mark> {
    winning_line(grid).map(|(mark, _)| mark)
}

/// Like [`evaluate_winner`], but also returns the matched line.
pub fn winning_line(grid: &Grid) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match grid[a] {
            Cell::Taken(mark) if grid[b] == grid[a] && grid[c] == grid[a] => Some((mark, line)),
            _ => None,
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game continues, holding the mark that plays next.
    InProgress(Mark),
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }

    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(next) => write!(f, "Next player is {next}"),
            Self::Won(winner) => write!(f, "Winner is {winner}"),
            Self::Draw => f.write_str("Draw"),
        }
    }
}

/// Immutable snapshot of a game: the grid plus whose turn it is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    next_mark: Mark,
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            grid: Grid::new(),
            next_mark: Mark::X,
        }
    }

    /// Builds a state without checking that the mark counts are reachable.
    pub const fn from_parts_unchecked(grid: Grid, next_mark: Mark) -> Self {
        Self { grid, next_mark }
    }

    /// Builds the state a legal game would reach with this grid, inferring the
    /// next mark from the mark counts.
    pub fn from_grid(grid: Grid) -> Option<Self> {
        let xs = grid.count(Mark::X);
        let os = grid.count(Mark::O);

        let next_mark = if xs == os {
            Mark::X
        } else if xs == os + 1 {
            Mark::O
        } else {
            return None;
        };

        Some(Self::from_parts_unchecked(grid, next_mark))
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell> {
        self.grid.cell_at(index)
    }

    pub fn move_count(&self) -> usize {
        self.grid.taken_count()
    }

    pub fn winner(&self) -> Option<Mark> {
        evaluate_winner(&self.grid)
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.grid).map(|(_, line)| line)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.grid.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_mark)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Whether a click on `index` would place a mark. Out-of-range indices
    /// are never playable.
    pub fn can_play_at(&self, index: usize) -> bool {
        matches!(self.grid.get(index), Some(Cell::Empty)) && self.winner().is_none()
    }

    /// Places the next mark at `index` and returns the resulting snapshot.
    ///
    /// Clicking an occupied cell or playing after a win is not an error: the
    /// returned state equals `self` and the outcome is [`MoveOutcome::NoChange`].
    pub fn play(&self, index: usize) -> Result<(Self, MoveOutcome)> {
        let index = Grid::validate_index(index)?;

        if !self.can_play_at(index) {
            log::trace!("ignoring move at {index}: {}", self.status());
            return Ok((*self, MoveOutcome::NoChange));
        }

        let mark = self.next_mark;
        let next = Self {
            grid: self.grid.with_cell(index, Cell::Taken(mark))?,
            next_mark: mark.other(),
        };
        log::trace!("{mark} plays {index}: {}", next.grid);

        let outcome = match next.status() {
            GameStatus::InProgress(_) => MoveOutcome::Placed,
            GameStatus::Won(winner) => MoveOutcome::Won(winner),
            GameStatus::Draw => MoveOutcome::Drawn,
        };

        Ok((next, outcome))
    }

    pub fn apply_move(&self, index: usize) -> Result<Self> {
        self.play(index).map(|(next, _)| next)
    }
}

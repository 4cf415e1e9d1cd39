use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshots of one game indexed by move number, snapshot 0 being the start.
///
/// Playing after jumping back drops the snapshots past the cursor, so the
/// list always describes a single line of play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    snapshots: Vec<GameState>,
    cursor: usize,
}

/// Unchecked serialized form of [`History`].
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<GameState>,
    cursor: usize,
}

impl TryFrom<HistoryRecord> for History {
    type Error = GameError;

    fn try_from(HistoryRecord { snapshots, cursor }: HistoryRecord) -> Result<Self> {
        if snapshots.is_empty() {
            return Err(GameError::EmptyHistory);
        }
        if cursor >= snapshots.len() {
            return Err(GameError::UnknownSnapshot(cursor));
        }
        Ok(Self { snapshots, cursor })
    }
}

impl History {
    pub fn new() -> Self {
        Self::starting_from(GameState::new())
    }

    pub fn starting_from(state: GameState) -> Self {
        let mut snapshots = Vec::with_capacity(CELL_COUNT + 1);
        snapshots.push(state);
        Self {
            snapshots,
            cursor: 0,
        }
    }

    pub fn current(&self) -> &GameState {
        &self.snapshots[self.cursor]
    }

    /// Number of moves between the first snapshot and the current one.
    pub fn move_number(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, including the starting one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its starting snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    pub fn snapshots(&self) -> impl ExactSizeIterator<Item = &GameState> {
        self.snapshots.iter()
    }

    pub fn play(&mut self, index: usize) -> Result<MoveOutcome> {
        let (next, outcome) = self.current().play(index)?;

        if outcome.has_update() {
            self.snapshots.truncate(self.cursor + 1);
            self.snapshots.push(next);
            self.cursor += 1;
            log::debug!("move #{}: {outcome:?}", self.cursor);
        }

        Ok(outcome)
    }

    pub fn jump_to(&mut self, move_number: usize) -> Result<()> {
        if move_number < self.snapshots.len() {
            self.cursor = move_number;
            Ok(())
        } else {
            Err(GameError::UnknownSnapshot(move_number))
        }
    }

    pub fn undo(&mut self) -> bool {
        self.cursor
            .checked_sub(1)
            .and_then(|previous| self.jump_to(previous).ok())
            .is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.jump_to(self.cursor + 1).is_ok()
    }

    pub fn reset(&mut self) {
        self.snapshots.truncate(1);
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// The eight rotations and reflections of the square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror across the vertical axis (left and right swap).
    FlipHorizontal,
    /// Mirror across the horizontal axis (top and bottom swap).
    FlipVertical,
    /// Mirror across the `0-4-8` diagonal.
    Transpose,
    /// Mirror across the `2-4-6` diagonal.
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::Transpose,
        Self::AntiTranspose,
    ];

    pub const fn map_coords(self, (x, y): Coord2) -> Coord2 {
        const MAX: Coord = SIDE - 1;
        match self {
            Self::Identity => (x, y),
            Self::Rotate90 => (MAX - y, x),
            Self::Rotate180 => (MAX - x, MAX - y),
            Self::Rotate270 => (y, MAX - x),
            Self::FlipHorizontal => (MAX - x, y),
            Self::FlipVertical => (x, MAX - y),
            Self::Transpose => (y, x),
            Self::AntiTranspose => (MAX - y, MAX - x),
        }
    }

    /// Where the cell at `index` ends up. `index` must be in range.
    pub fn map_index(self, index: usize) -> usize {
        self.map_coords(coords_of(index)).to_cell_index()
    }

    pub const fn inverse(self) -> Self {
        match self {
            Self::Rotate90 => Self::Rotate270,
            Self::Rotate270 => Self::Rotate90,
            other => other,
        }
    }

    pub fn apply(self, grid: &Grid) -> Grid {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, cell) in grid.iter().enumerate() {
            cells[self.map_index(index)] = cell;
        }
        Grid::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn every_symmetry_is_a_permutation() {
        for symmetry in Symmetry::ALL {
            let mut seen = [false; CELL_COUNT];
            for index in 0..CELL_COUNT {
                seen[symmetry.map_index(index)] = true;
            }
            assert!(seen.iter().all(|&hit| hit), "{symmetry:?}");
        }
    }

    #[test]
    fn inverse_undoes_the_mapping() {
        for symmetry in Symmetry::ALL {
            for index in 0..CELL_COUNT {
                assert_eq!(symmetry.inverse().map_index(symmetry.map_index(index)), index);
            }
        }
    }

    #[test]
    fn lines_map_onto_lines() {
        for symmetry in Symmetry::ALL {
            for line in LINES {
                let mut mapped = line.map(|index| symmetry.map_index(index));
                mapped.sort_unstable();
                assert!(
                    LINES.iter().any(|&other| {
                        let mut other = other;
                        other.sort_unstable();
                        other == mapped
                    }),
                    "{symmetry:?} {line:?}"
                );
            }
        }
    }

    #[test]
    fn quarter_turn_moves_top_left_to_top_right() {
        let grid: Grid = "X../.../...".parse().unwrap();

        assert_eq!(Symmetry::Rotate90.apply(&grid).to_string(), "..X/.../...");
        assert_eq!(Symmetry::FlipVertical.apply(&grid).to_string(), ".../.../X..");
        assert_eq!(Symmetry::AntiTranspose.apply(&grid).to_string(), ".../.../..X");
    }
}

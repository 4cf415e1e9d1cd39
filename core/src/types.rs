/// Single coordinate axis used for columns and rows.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord2 = (Coord, Coord);

/// Three cell indices that win when they all hold the same mark.
pub type Line = [usize; 3];

/// Cells per side of the board.
pub const SIDE: Coord = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (SIDE as usize) * (SIDE as usize);

/// Rows top-to-bottom, columns left-to-right, then both diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub trait ToCellIndex {
    fn to_cell_index(self) -> usize;
}

impl ToCellIndex for Coord2 {
    fn to_cell_index(self) -> usize {
        usize::from(self.1) * usize::from(SIDE) + usize::from(self.0)
    }
}

pub const fn coords_of(index: usize) -> Coord2 {
    let side = SIDE as usize;
    ((index % side) as Coord, (index / side) as Coord)
}

pub const fn is_valid_index(index: usize) -> bool {
    index < CELL_COUNT
}

pub const fn is_valid_coords(coords: Coord2) -> bool {
    coords.0 < SIDE && coords.1 < SIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_and_indices_are_row_major() {
        assert_eq!((0, 0).to_cell_index(), 0);
        assert_eq!((2, 0).to_cell_index(), 2);
        assert_eq!((0, 1).to_cell_index(), 3);
        assert_eq!((2, 2).to_cell_index(), 8);

        for index in 0..CELL_COUNT {
            assert_eq!(coords_of(index).to_cell_index(), index);
        }
    }

    #[test]
    fn every_line_is_distinct_and_in_bounds() {
        for (i, line) in LINES.iter().enumerate() {
            assert!(line.iter().all(|&index| is_valid_index(index)));
            assert!(LINES[i + 1..].iter().all(|other| other != line));
        }
    }
}

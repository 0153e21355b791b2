//! Square coordinates and ray directions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of distinct column letters (`A` through `Z`).
pub const MAX_COLS: usize = 26;

/// Largest row index a `Square` can hold (displayed as row 256).
pub const MAX_ROWS: usize = u8::MAX as usize + 1;

/// A coordinate on the board, stored zero-based as (col, row).
///
/// Displayed as one uppercase column letter followed by a 1-based row, so
/// `Square::new(3, 3)` is `D4`. A `Square` only says where something would
/// be; whether it lies on a particular board is answered by
/// [`Board::contains`](crate::board::Board::contains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Create a square, `None` past column `Z` or row 256.
    #[inline]
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Option<Self> {
        if col < MAX_COLS && row < MAX_ROWS {
            Some(Square {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from its letter and 1-based row (`'D', 4`).
    #[must_use]
    pub fn from_coords(col: char, row: u32) -> Option<Self> {
        if !col.is_ascii_uppercase() || row == 0 {
            return None;
        }
        Square::new((col as u8 - b'A') as usize, (row - 1) as usize)
    }

    /// Zero-based column (0 = `A`)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Zero-based row (0 = row 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column letter
    #[inline]
    #[must_use]
    pub const fn col_char(self) -> char {
        (self.col + b'A') as char
    }

    /// Row number as written (1-based)
    #[inline]
    #[must_use]
    pub const fn row_number(self) -> u32 {
        self.row as u32 + 1
    }

    /// Shift by a raw (col, row) delta.
    #[inline]
    #[must_use]
    pub fn offset(self, d_col: i8, d_row: i8) -> Option<Square> {
        let col = (self.col as usize).checked_add_signed(d_col as isize)?;
        let row = (self.row as usize).checked_add_signed(d_row as isize)?;
        Square::new(col, row)
    }

    /// Walk `n` steps in `direction`.
    ///
    /// `None` means the result has no coordinate at all; an upper-bound
    /// check against the board is still required.
    #[inline]
    #[must_use]
    pub fn step(self, direction: Direction, n: usize) -> Option<Square> {
        let (d_col, d_row) = direction.delta();
        let n = isize::try_from(n).ok()?;
        let col = (self.col as usize).checked_add_signed(d_col as isize * n)?;
        let row = (self.row as usize).checked_add_signed(d_row as isize * n)?;
        Square::new(col, row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_number())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Row-major, the same order the board scans in
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let col = chars.next().ok_or_else(invalid)?;
        if !col.is_ascii_uppercase() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 || row as usize > MAX_ROWS {
            return Err(SquareError::RowOutOfRange { row });
        }

        Square::from_coords(col, row).ok_or_else(invalid)
    }
}

/// One of the eight unit ray directions over (Δcol, Δrow).
///
/// "Up" is towards higher rows, which is White's forward direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Rook rays in output order
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Bishop rays in output order
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Queen and king rays in output order (clockwise from up-left)
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
    ];

    /// (Δcol, Δrow) for one step
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let sq = Square::new(3, 3).unwrap();
        assert_eq!(sq.to_string(), "D4");
        assert_eq!("D4".parse::<Square>(), Ok(sq));
        assert_eq!("Z12".parse::<Square>().unwrap().to_string(), "Z12");
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        for bad in ["", "D", "d4", "4D", "D-1", "DD4", "D4x"] {
            assert!(
                matches!(bad.parse::<Square>(), Err(SquareError::InvalidNotation { .. })),
                "{bad} should not parse"
            );
        }
        assert_eq!(
            "A0".parse::<Square>(),
            Err(SquareError::RowOutOfRange { row: 0 })
        );
        assert_eq!(
            "A257".parse::<Square>(),
            Err(SquareError::RowOutOfRange { row: 257 })
        );
    }

    #[test]
    fn test_from_coords() {
        assert_eq!(Square::from_coords('A', 1), Square::new(0, 0));
        assert_eq!(Square::from_coords('H', 8), Square::new(7, 7));
        assert_eq!(Square::from_coords('a', 1), None);
        assert_eq!(Square::from_coords('A', 0), None);
    }

    #[test]
    fn test_step_stops_below_origin() {
        let a1 = Square::new(0, 0).unwrap();
        assert_eq!(a1.step(Direction::Left, 1), None);
        assert_eq!(a1.step(Direction::Down, 1), None);
        assert_eq!(a1.step(Direction::UpRight, 3), Square::new(3, 3));
        assert_eq!(a1.step(Direction::Up, 0), Some(a1));
    }

    #[test]
    fn test_step_stops_past_last_letter() {
        let z1 = Square::new(25, 0).unwrap();
        assert_eq!(z1.step(Direction::Right, 1), None);
        assert_eq!(z1.offset(-2, 1), Square::new(23, 1));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let b1 = Square::new(1, 0).unwrap();
        let a2 = Square::new(0, 1).unwrap();
        assert!(b1 < a2);
    }

    #[test]
    fn test_direction_tables_are_distinct() {
        for d in Direction::ALL {
            assert_eq!(
                Direction::ALL.iter().filter(|&&o| o == d).count(),
                1,
                "{d:?} repeated"
            );
        }
        assert!(Direction::DIAGONAL.iter().all(|d| d.is_diagonal()));
        assert!(Direction::ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
    }
}

//! Board state: dimensions plus one slot per square.

use super::error::{ArgumentError, BoardError};
use super::types::{Color, Piece, PieceKind, Square, MAX_COLS, MAX_ROWS};

/// A rectangular board of `width x height` squares.
///
/// Slots live in a single boxed slice indexed `row * width + col`, sized once
/// at construction. A square is occupied iff its slot is `Some`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    squares: Box<[Option<Piece>]>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// Returns [`ArgumentError::Dimensions`] when a dimension is zero or
    /// exceeds what `Square` can address (26 columns, 256 rows).
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width > MAX_COLS || height > MAX_ROWS {
            return Err(ArgumentError::Dimensions { width, height }.into());
        }
        board_debug!("creating {}x{} board", width, height);
        Ok(Board {
            width,
            height,
            squares: vec![None; width * height].into_boxed_slice(),
        })
    }

    /// Standard 8x8 board with no pieces.
    #[must_use]
    pub fn standard_empty() -> Self {
        Board {
            width: 8,
            height: 8,
            squares: vec![None; 64].into_boxed_slice(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `square` exists on this board.
    #[inline]
    #[must_use]
    pub const fn contains(&self, square: Square) -> bool {
        square.col() < self.width && square.row() < self.height
    }

    #[inline]
    fn slot_index(&self, square: Square) -> Option<usize> {
        if self.contains(square) {
            Some(square.row() * self.width + square.col())
        } else {
            None
        }
    }

    /// Piece on `square`, `None` when empty or off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.slot_index(square).and_then(|idx| self.squares[idx])
    }

    /// Returns true if `square` is on the board and holds a piece.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        let idx = self.slot_index(square)?;
        self.squares[idx].as_mut()
    }

    /// Put `piece` on `square`, replacing any occupant.
    ///
    /// Returns false and leaves the board untouched when the square is not
    /// on this board.
    pub fn place_piece(&mut self, piece: Piece, square: Square) -> bool {
        match self.slot_index(square) {
            Some(idx) => {
                self.squares[idx] = Some(piece);
                true
            }
            None => false,
        }
    }

    /// Letter/row form of [`Board::place_piece`] (`'D', 4`).
    ///
    /// # Errors
    /// Fails only when the pair is not a coordinate at all; an off-board
    /// coordinate is a silent no-op like `place_piece`.
    pub fn place_piece_at(
        &mut self,
        piece: Piece,
        col: char,
        row: u32,
    ) -> Result<bool, BoardError> {
        let square = notation_square(col, row)?;
        Ok(self.place_piece(piece, square))
    }

    /// Take the piece off `square`, returning it.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let idx = self.slot_index(square)?;
        self.squares[idx].take()
    }

    /// Move a piece between squares without any legality check.
    ///
    /// Returns whatever stood on `to` before.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let to_idx = self.slot_index(to)?;
        let piece = self.remove_piece(from);
        std::mem::replace(&mut self.squares[to_idx], piece)
    }

    /// Every square of the board, row by row starting at `A1`.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let width = self.width;
        (0..self.width * self.height).filter_map(move |idx| Square::new(idx % width, idx / width))
    }

    /// Occupied squares with their pieces, in the same order as [`Board::squares`].
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let width = self.width;
        self.squares.iter().enumerate().filter_map(move |(idx, slot)| {
            let piece = (*slot)?;
            Square::new(idx % width, idx / width).map(|sq| (sq, piece))
        })
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// First king of `color` in scan order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Remove every piece, keeping the dimensions.
    pub fn clear(&mut self) {
        self.squares.iter_mut().for_each(|slot| *slot = None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard_empty()
    }
}

pub(crate) fn notation_square(col: char, row: u32) -> Result<Square, BoardError> {
    use super::error::SquareError;

    Square::from_coords(col, row).ok_or_else(|| {
        if col.is_ascii_uppercase() {
            SquareError::RowOutOfRange { row }.into()
        } else {
            SquareError::InvalidNotation {
                notation: format!("{col}{row}"),
            }
            .into()
        }
    })
}

//! Fluent builder for setting up positions.
//!
//! Allows creating positions piece by piece, on any board size.
//!
//! # Example
//! ```
//! use chess_moves::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .dimensions(6, 6)
//!     .piece("A1".parse().unwrap(), Piece::rook(Color::White))
//!     .piece("F6".parse().unwrap(), Piece::king(Color::Black))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::error::BoardError;
use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    width: usize,
    height: usize,
    pieces: Vec<(Square, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create an empty 8x8 builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            width: 8,
            height: 8,
            pieces: Vec::new(),
        }
    }

    /// Create a builder holding the standard 8x8 initial array.
    #[must_use]
    pub fn standard() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            builder.push(col, 0, Piece::new(Color::White, kind));
            builder.push(col, 1, Piece::pawn(Color::White));
            builder.push(col, 6, Piece::pawn(Color::Black));
            builder.push(col, 7, Piece::new(Color::Black, kind));
        }
        builder
    }

    fn push(&mut self, col: usize, row: usize, piece: Piece) {
        if let Some(square) = Square::new(col, row) {
            self.pieces.push((square, piece));
        }
    }

    /// Set the board size. Pieces outside the final size are dropped on build.
    #[must_use]
    pub const fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Place a piece, replacing anything already queued for that square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Place a piece that counts as already moved (a pawn off its home rank).
    #[must_use]
    pub fn moved_piece(self, square: Square, piece: Piece) -> Self {
        self.piece(square, piece.moved(true))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidArgument`] for unusable dimensions.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::new(self.width, self.height)?;
        for (square, piece) in self.pieces {
            board.place_piece(piece, square);
        }
        Ok(board)
    }
}

//! Validated move application.

use super::error::BoardError;
use super::state::notation_square;
use super::{Board, Piece, PieceKind, Square};

impl Board {
    /// Move the piece on `from` to `to` if `to` is among its legal moves.
    ///
    /// On success the origin is emptied and the destination is overwritten.
    /// A pawn that advanced two rows is marked as having moved; no other move
    /// changes piece state. Whatever stood on the destination is returned;
    /// no other record of a capture is kept.
    ///
    /// # Errors
    /// - [`BoardError::InvalidPosition`] if `from` is not on this board
    /// - [`BoardError::EmptySquare`] if nothing stands on `from`
    /// - [`BoardError::IllegalMove`] if `to` is not a legal destination
    ///
    /// The board is unchanged whenever an error is returned.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        if !self.contains(from) {
            return Err(BoardError::InvalidPosition { square: from });
        }
        let piece = self
            .piece_at(from)
            .ok_or(BoardError::EmptySquare { square: from })?;

        let legal = self.piece_moves(from, piece);
        if !legal.contains_destination(to) {
            board_debug!("rejected {} {} -> {}", piece, from, to);
            return Err(BoardError::IllegalMove { from, to });
        }

        let captured = self.relocate(from, to);
        if is_double_step(piece, from, to) {
            if let Some(pawn) = self.piece_at_mut(to) {
                pawn.set_has_moved(true);
            }
        }

        match captured {
            Some(taken) => board_debug!("{} {} -> {} takes {}", piece, from, to, taken),
            None => board_debug!("{} {} -> {}", piece, from, to),
        }
        Ok(captured)
    }

    /// Letter/row form of [`Board::move_piece`] (`'D', 2, 'D', 4`).
    ///
    /// # Errors
    /// As `move_piece`, plus [`BoardError::InvalidArgument`] when either pair
    /// is not a coordinate.
    pub fn move_piece_at(
        &mut self,
        col: char,
        row: u32,
        to_col: char,
        to_row: u32,
    ) -> Result<Option<Piece>, BoardError> {
        let from = notation_square(col, row)?;
        let to = notation_square(to_col, to_row)?;
        self.move_piece(from, to)
    }
}

fn is_double_step(piece: Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2
}

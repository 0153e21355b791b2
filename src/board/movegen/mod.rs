mod kings;
mod knights;
mod pawns;
mod sliders;

pub use sliders::{RayPolicy, StepLimit};

use super::error::BoardError;
use super::state::notation_square;
use super::{Board, Direction, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Pseudo-legal moves of whatever stands on `square`.
    ///
    /// Moves respect occupancy (no jumping, no landing on your own pieces)
    /// but king safety is never checked.
    ///
    /// # Errors
    /// [`BoardError::InvalidPosition`] if `square` is not on this board.
    /// An empty square yields an empty list, not an error.
    pub fn legal_moves(&self, square: Square) -> Result<MoveList, BoardError> {
        if !self.contains(square) {
            return Err(BoardError::InvalidPosition { square });
        }
        Ok(match self.piece_at(square) {
            Some(piece) => self.piece_moves(square, piece),
            None => MoveList::new(),
        })
    }

    /// Letter/row form of [`Board::legal_moves`] (`'D', 4`).
    ///
    /// # Errors
    /// As `legal_moves`, plus [`BoardError::InvalidArgument`] when the pair is
    /// not a coordinate.
    pub fn legal_moves_at(&self, col: char, row: u32) -> Result<MoveList, BoardError> {
        self.legal_moves(notation_square(col, row)?)
    }

    /// Cast a single ray from the piece on `from`.
    ///
    /// The occupancy policy follows the piece: along its file a pawn never
    /// captures and along any diagonal it only captures, in either color's
    /// direction. Every other piece uses the plain rule.
    ///
    /// # Errors
    /// [`BoardError::InvalidPosition`] if `from` is off the board,
    /// [`BoardError::EmptySquare`] if nothing stands there.
    pub fn slide_moves(
        &self,
        from: Square,
        direction: Direction,
        limit: StepLimit,
    ) -> Result<MoveList, BoardError> {
        if !self.contains(from) {
            return Err(BoardError::InvalidPosition { square: from });
        }
        let piece = self
            .piece_at(from)
            .ok_or(BoardError::EmptySquare { square: from })?;

        let mut moves = MoveList::new();
        let policy = RayPolicy::for_piece(piece, direction);
        self.slide_into(from, piece, direction, limit, policy, &mut moves);
        Ok(moves)
    }

    /// The single dispatch point from piece kind to generator.
    pub(crate) fn piece_moves(&self, from: Square, piece: Piece) -> MoveList {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece),
            PieceKind::Knight => self.generate_knight_moves(from, piece),
            PieceKind::Bishop => {
                self.generate_ray_moves(from, piece, &Direction::DIAGONAL, StepLimit::Unlimited)
            }
            PieceKind::Rook => {
                self.generate_ray_moves(from, piece, &Direction::ORTHOGONAL, StepLimit::Unlimited)
            }
            PieceKind::Queen => {
                self.generate_ray_moves(from, piece, &Direction::ALL, StepLimit::Unlimited)
            }
            PieceKind::King => self.generate_king_moves(from, piece),
        }
    }
}

use super::super::{Board, Direction, MoveList, Piece, Square};
use super::StepLimit;

impl Board {
    /// Queen rays cut to one step. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, piece: Piece) -> MoveList {
        self.generate_ray_moves(from, piece, &Direction::ALL, StepLimit::Steps(1))
    }
}

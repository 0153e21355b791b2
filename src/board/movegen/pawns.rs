use super::super::{Board, Color, Direction, MoveList, Piece, Square};
use super::{RayPolicy, StepLimit};

/// Direction a pawn of `color` advances in.
#[inline]
pub(crate) const fn forward(color: Color) -> Direction {
    match color {
        Color::White => Direction::Up,
        Color::Black => Direction::Down,
    }
}

/// Left and right capture diagonals, from White's point of view.
#[inline]
pub(crate) const fn capture_diagonals(color: Color) -> [Direction; 2] {
    match color {
        Color::White => [Direction::UpLeft, Direction::UpRight],
        Color::Black => [Direction::DownLeft, Direction::DownRight],
    }
}

impl Board {
    /// Left capture, forward advance, right capture.
    ///
    /// Advances never land on an occupied square, captures never land on an
    /// empty one. An unmoved pawn may advance two squares if both are empty.
    pub(crate) fn generate_pawn_moves(&self, from: Square, piece: Piece) -> MoveList {
        let mut moves = MoveList::with_capacity(4);
        let [left, right] = capture_diagonals(piece.color);
        let advance = if piece.has_moved {
            StepLimit::Steps(1)
        } else {
            StepLimit::Steps(2)
        };

        self.slide_into(
            from,
            piece,
            left,
            StepLimit::Steps(1),
            RayPolicy::PawnCapture,
            &mut moves,
        );
        self.slide_into(
            from,
            piece,
            forward(piece.color),
            advance,
            RayPolicy::PawnAdvance,
            &mut moves,
        );
        self.slide_into(
            from,
            piece,
            right,
            StepLimit::Steps(1),
            RayPolicy::PawnCapture,
            &mut moves,
        );
        moves
    }
}

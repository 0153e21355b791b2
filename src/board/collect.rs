//! Whole-board move collection, split by side.

use super::{Board, Color, MoveList, PieceKind, Square};

/// Every pseudo-legal move on the board, grouped by the mover's color, plus
/// where each king stands.
///
/// This is the input a check filter needs; no such filter is applied here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllMoves {
    pub white: MoveList,
    pub black: MoveList,
    pub white_king: Option<Square>,
    pub black_king: Option<Square>,
}

impl AllMoves {
    /// Moves of one side
    #[must_use]
    pub fn for_color(&self, color: Color) -> &MoveList {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// King square of one side, if that side has a king
    #[must_use]
    pub fn king(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Returns true if any move of `color` lands on `square`.
    #[must_use]
    pub fn reaches(&self, color: Color, square: Square) -> bool {
        self.for_color(color).contains_destination(square)
    }
}

impl Board {
    /// Collect the moves of every piece on the board.
    ///
    /// Squares are visited row by row from `A1`, so each side's list holds
    /// its pieces' moves in that order. With several kings of one color the
    /// last one visited is reported.
    #[must_use]
    pub fn all_moves(&self) -> AllMoves {
        let mut all = AllMoves::default();

        for (square, piece) in self.pieces() {
            if piece.kind == PieceKind::King {
                match piece.color {
                    Color::White => all.white_king = Some(square),
                    Color::Black => all.black_king = Some(square),
                }
            }

            // Same entry point callers use. `pieces()` only yields squares on
            // this board, so the lookup cannot fail.
            if let Ok(moves) = self.legal_moves(square) {
                match piece.color {
                    Color::White => all.white.append(moves),
                    Color::Black => all.black.append(moves),
                }
            }
        }

        board_trace!(
            "collected {} white and {} black moves",
            all.white.len(),
            all.black.len()
        );
        all
    }
}

use super::super::{Board, Move, MoveList, Piece, Square};

/// (Δcol, Δrow) jumps, clockwise from up-one-left-two.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, piece: Piece) -> MoveList {
        let mut moves = MoveList::with_capacity(KNIGHT_OFFSETS.len());

        for (d_col, d_row) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(d_col, d_row).filter(|sq| self.contains(*sq)) else {
                continue;
            };
            match self.piece_at(to) {
                Some(occupant) if !occupant.is_enemy_of(piece) => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
        moves
    }
}

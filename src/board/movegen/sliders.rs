//! Directional ray casting shared by every piece except the knight.

use super::super::{Board, Direction, Move, MoveList, Piece, PieceKind, Square};

/// How far a ray may travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepLimit {
    Unlimited,
    Steps(usize),
}

impl StepLimit {
    #[inline]
    const fn max_steps(self) -> usize {
        match self {
            StepLimit::Unlimited => usize::MAX,
            StepLimit::Steps(n) => n,
        }
    }
}

/// Which squares along a ray may become destinations.
///
/// Every policy stops the ray at the first occupied square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayPolicy {
    /// Empty squares, plus the blocking square if it holds an enemy
    Generic,
    /// Empty squares only
    PawnAdvance,
    /// The blocking square only, and only if it holds an enemy
    PawnCapture,
}

impl RayPolicy {
    /// Policy a piece uses along `direction`.
    ///
    /// Pawns never step quietly along a diagonal and never capture along
    /// their file, whichever way the ray points.
    #[must_use]
    pub fn for_piece(piece: Piece, direction: Direction) -> RayPolicy {
        if piece.kind != PieceKind::Pawn {
            return RayPolicy::Generic;
        }
        match direction {
            Direction::Up | Direction::Down => RayPolicy::PawnAdvance,
            d if d.is_diagonal() => RayPolicy::PawnCapture,
            _ => RayPolicy::Generic,
        }
    }

    #[inline]
    const fn allows_quiet(self) -> bool {
        matches!(self, RayPolicy::Generic | RayPolicy::PawnAdvance)
    }

    #[inline]
    const fn allows_capture(self) -> bool {
        matches!(self, RayPolicy::Generic | RayPolicy::PawnCapture)
    }
}

impl Board {
    /// Walk from `from` towards `direction`, pushing destinations in order.
    ///
    /// The ray ends (exclusive) at the board edge or after `limit` steps, and
    /// at the first occupant, which is included only for an enemy piece the
    /// policy lets us capture.
    pub(crate) fn slide_into(
        &self,
        from: Square,
        mover: Piece,
        direction: Direction,
        limit: StepLimit,
        policy: RayPolicy,
        moves: &mut MoveList,
    ) {
        let max_steps = limit.max_steps();
        let mut current = from;
        let mut steps = 0;

        while steps < max_steps {
            let Some(next) = current.step(direction, 1).filter(|sq| self.contains(*sq)) else {
                break;
            };
            steps += 1;
            current = next;

            match self.piece_at(next) {
                None => {
                    if policy.allows_quiet() {
                        moves.push(Move::new(from, next));
                    }
                }
                Some(occupant) => {
                    if policy.allows_capture() && occupant.is_enemy_of(mover) {
                        moves.push(Move::new(from, next));
                    }
                    break;
                }
            }
        }
    }

    /// Union of generic rays, concatenated in `directions` order.
    pub(crate) fn generate_ray_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[Direction],
        limit: StepLimit,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &direction in directions {
            self.slide_into(from, piece, direction, limit, RayPolicy::Generic, &mut moves);
        }
        moves
    }
}

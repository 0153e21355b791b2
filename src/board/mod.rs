//! Board representation and pseudo-legal move generation.
//!
//! Boards have caller-chosen dimensions (up to 26 columns). Moves respect
//! occupancy but not king safety: there is no check detection, castling,
//! en passant or promotion.
//!
//! # Example
//! ```
//! use chess_moves::board::{Board, Color, Piece};
//!
//! let mut board = Board::new(8, 8).unwrap();
//! board.place_piece(Piece::pawn(Color::White), "D2".parse().unwrap());
//! let moves = board.legal_moves("D2".parse().unwrap()).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod collect;
mod error;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use collect::AllMoves;
pub use error::{ArgumentError, BoardError, SquareError};
pub use movegen::{RayPolicy, StepLimit};
pub use state::Board;
pub use types::{Color, Direction, Move, MoveList, Piece, PieceKind, Square, MAX_COLS, MAX_ROWS};

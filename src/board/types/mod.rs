//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Color` - what stands on a square
//! - `Square` and `Direction` - coordinate arithmetic
//! - `Move` and `MoveList` - generator output

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Direction, Square, MAX_COLS, MAX_ROWS};

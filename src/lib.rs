#[macro_use]
mod logging;

pub mod board;
pub mod sync;

pub use board::{
    AllMoves, Board, BoardBuilder, BoardError, Color, Direction, Move, MoveList, Piece, PieceKind,
    Square,
};
pub use sync::SharedBoard;

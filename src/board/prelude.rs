//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_moves::board::prelude::*;
//! ```

pub use super::{
    AllMoves, Board, BoardBuilder, BoardError, Color, Direction, Move, MoveList, Piece, PieceKind,
    Square, StepLimit,
};

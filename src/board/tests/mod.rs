//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `sliders.rs` - Ray casting for rook, bishop and queen
//! - `knights.rs` - Knight jumps
//! - `kings.rs` - One-step king moves
//! - `pawns.rs` - Pawn advances and captures
//! - `apply.rs` - Validated move application
//! - `collect.rs` - Whole-board collection
//! - `edge_cases.rs` - Odd board sizes and corner positions
//! - `proptest.rs` - Property-based tests

mod pawns;

use crate::board::{Board, MoveList, Piece, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Destination squares in generator order, as notation.
pub(super) fn dests(moves: &MoveList) -> Vec<String> {
    moves.destinations().map(|s| s.to_string()).collect()
}

/// Destinations sorted, for tests that only care about the set.
pub(super) fn dest_set(moves: &MoveList) -> Vec<String> {
    let mut out = dests(moves);
    out.sort();
    out
}

/// 8x8 board with the given pieces.
pub(super) fn board_with(pieces: &[(&str, Piece)]) -> Board {
    let mut board = Board::standard_empty();
    for &(square, piece) in pieces {
        assert!(board.place_piece(piece, sq(square)), "{square} off board");
    }
    board
}

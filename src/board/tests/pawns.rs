//! Pawn advances and diagonal captures.

use super::{board_with, dest_set, dests, sq};
use crate::board::{Board, Color, Direction, Piece, RayPolicy, StepLimit};

#[test]
fn test_unmoved_white_pawn_double_step() {
    let board = board_with(&[("D2", Piece::pawn(Color::White))]);
    let moves = board.legal_moves(sq("D2")).unwrap();
    assert_eq!(dests(&moves), ["D3", "D4"]);
}

#[test]
fn test_unmoved_black_pawn_moves_down() {
    let board = board_with(&[("E7", Piece::pawn(Color::Black))]);
    let moves = board.legal_moves(sq("E7")).unwrap();
    assert_eq!(dests(&moves), ["E6", "E5"]);
}

#[test]
fn test_moved_pawn_single_step() {
    let board = board_with(&[("D3", Piece::pawn(Color::White).moved(true))]);
    let moves = board.legal_moves(sq("D3")).unwrap();
    assert_eq!(dests(&moves), ["D4"]);
}

#[test]
fn test_moved_pawn_blocked_forward_captures_both_sides() {
    let board = board_with(&[
        ("D3", Piece::pawn(Color::White).moved(true)),
        ("D4", Piece::pawn(Color::Black)),
        ("C4", Piece::pawn(Color::Black)),
        ("E4", Piece::pawn(Color::Black)),
    ]);
    let moves = board.legal_moves(sq("D3")).unwrap();
    assert_eq!(dests(&moves), ["C4", "E4"]);
}

#[test]
fn test_unmoved_pawn_with_two_captures() {
    let board = board_with(&[
        ("D2", Piece::pawn(Color::White)),
        ("C3", Piece::pawn(Color::Black)),
        ("E3", Piece::pawn(Color::Black)),
    ]);
    let moves = board.legal_moves(sq("D2")).unwrap();
    assert_eq!(dests(&moves), ["C3", "D3", "D4", "E3"]);
    assert_eq!(dest_set(&moves), ["C3", "D3", "D4", "E3"]);
}

#[test]
fn test_blocked_on_first_square_yields_no_advance() {
    for blocker in [Piece::knight(Color::Black), Piece::knight(Color::White)] {
        let board = board_with(&[("D2", Piece::pawn(Color::White)), ("D3", blocker)]);
        assert!(board.legal_moves(sq("D2")).unwrap().is_empty());
    }
}

#[test]
fn test_blocked_on_second_square_yields_single_advance() {
    for blocker in [Piece::rook(Color::Black), Piece::rook(Color::White)] {
        let board = board_with(&[("D2", Piece::pawn(Color::White)), ("D4", blocker)]);
        assert_eq!(dests(&board.legal_moves(sq("D2")).unwrap()), ["D3"]);
    }
}

#[test]
fn test_diagonals_ignore_empty_and_friendly() {
    let board = board_with(&[
        ("D2", Piece::pawn(Color::White).moved(true)),
        ("C3", Piece::bishop(Color::White)),
    ]);
    let moves = board.legal_moves(sq("D2")).unwrap();
    assert_eq!(dests(&moves), ["D3"]);
}

#[test]
fn test_black_captures_downwards() {
    let board = board_with(&[
        ("B5", Piece::pawn(Color::Black).moved(true)),
        ("A4", Piece::knight(Color::White)),
        ("C4", Piece::knight(Color::Black)),
        ("C6", Piece::knight(Color::White)),
    ]);
    let moves = board.legal_moves(sq("B5")).unwrap();
    assert_eq!(dests(&moves), ["A4", "B4"]);
}

#[test]
fn test_pawn_on_last_row_has_no_advance() {
    let board = board_with(&[("H8", Piece::pawn(Color::White).moved(true))]);
    assert!(board.legal_moves(sq("H8")).unwrap().is_empty());
}

#[test]
fn test_pawn_edge_column_has_one_diagonal() {
    let board = board_with(&[
        ("A2", Piece::pawn(Color::White)),
        ("B3", Piece::pawn(Color::Black)),
    ]);
    assert_eq!(dests(&board.legal_moves(sq("A2")).unwrap()), ["A3", "A4", "B3"]);
}

#[test]
fn test_pawn_double_step_from_any_row_while_unmoved() {
    // Home rank is not tracked, only the has_moved flag.
    let board = board_with(&[("F5", Piece::pawn(Color::White))]);
    assert_eq!(dests(&board.legal_moves(sq("F5")).unwrap()), ["F6", "F7"]);
}

#[test]
fn test_slide_moves_applies_pawn_policies() {
    let board = board_with(&[
        ("D2", Piece::pawn(Color::White)),
        ("D3", Piece::pawn(Color::Black)),
        ("E3", Piece::pawn(Color::Black)),
    ]);
    let forward = board.slide_moves(sq("D2"), Direction::Up, StepLimit::Steps(2)).unwrap();
    assert!(forward.is_empty());
    let capture = board.slide_moves(sq("D2"), Direction::UpRight, StepLimit::Steps(1)).unwrap();
    assert_eq!(dests(&capture), ["E3"]);
    let quiet = board.slide_moves(sq("D2"), Direction::UpLeft, StepLimit::Steps(1)).unwrap();
    assert!(quiet.is_empty());
}

#[test]
fn test_slide_moves_backward_pawn_rays_keep_pawn_policies() {
    let board = board_with(&[
        ("D4", Piece::pawn(Color::White)),
        ("D3", Piece::knight(Color::Black)),
        ("E3", Piece::knight(Color::Black)),
    ]);
    // Down is blocked by an enemy the pawn may not capture on its file
    let down = board.slide_moves(sq("D4"), Direction::Down, StepLimit::Steps(2)).unwrap();
    assert!(down.is_empty());
    // Backward diagonals: capture only, no quiet steps
    let capture = board.slide_moves(sq("D4"), Direction::DownRight, StepLimit::Steps(1)).unwrap();
    assert_eq!(dests(&capture), ["E3"]);
    let quiet = board.slide_moves(sq("D4"), Direction::DownLeft, StepLimit::Steps(1)).unwrap();
    assert!(quiet.is_empty());
    // Sideways rays use the plain rule
    let left = board.slide_moves(sq("D4"), Direction::Left, StepLimit::Steps(1)).unwrap();
    assert_eq!(dests(&left), ["C4"]);
}

#[test]
fn test_ray_policy_for_pawn_directions() {
    let black = Piece::pawn(Color::Black);
    assert_eq!(RayPolicy::for_piece(black, Direction::Up), RayPolicy::PawnAdvance);
    assert_eq!(RayPolicy::for_piece(black, Direction::Down), RayPolicy::PawnAdvance);
    assert_eq!(RayPolicy::for_piece(black, Direction::UpLeft), RayPolicy::PawnCapture);
    assert_eq!(RayPolicy::for_piece(black, Direction::Right), RayPolicy::Generic);
    let rook = Piece::rook(Color::Black);
    assert_eq!(RayPolicy::for_piece(rook, Direction::DownLeft), RayPolicy::Generic);
}

#[test]
fn test_pawn_on_small_board() {
    let mut board = Board::new(3, 3).unwrap();
    board.place_piece(Piece::pawn(Color::Black), sq("B3"));
    assert_eq!(dests(&board.legal_moves(sq("B3")).unwrap()), ["B2", "B1"]);
}

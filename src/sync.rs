//! Shared board handle for hosts running games across threads.
//!
//! `Board` itself does no locking. A host that hands the same game to
//! several threads wraps it in a `SharedBoard`, which serialises every
//! access through one mutex so each move is validated and applied without
//! interleaving.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{AllMoves, Board, BoardError, MoveList, Piece, Square};

/// A cloneable, mutex-guarded handle to one board.
#[derive(Clone, Debug)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Run `f` with shared access to the board.
    pub fn with<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        let guard = self.0.lock();
        f(&guard)
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut guard = self.0.lock();
        f(&mut guard)
    }

    /// See [`Board::legal_moves`].
    ///
    /// # Errors
    /// As `Board::legal_moves`.
    pub fn legal_moves(&self, square: Square) -> Result<MoveList, BoardError> {
        self.with(|board| board.legal_moves(square))
    }

    /// See [`Board::move_piece`]. Validation and mutation happen under one lock.
    ///
    /// # Errors
    /// As `Board::move_piece`.
    pub fn move_piece(&self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        self.with_mut(|board| board.move_piece(from, to))
    }

    #[must_use]
    pub fn all_moves(&self) -> AllMoves {
        self.with(Board::all_moves)
    }

    /// Copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.with(Board::clone)
    }

    /// Unwrap the board if this is the last handle.
    ///
    /// # Errors
    /// Returns the handle back when other clones are still alive.
    pub fn try_into_inner(self) -> Result<Board, SharedBoard> {
        Arc::try_unwrap(self.0)
            .map(Mutex::into_inner)
            .map_err(SharedBoard)
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}

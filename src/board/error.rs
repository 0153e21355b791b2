//! Error types for board operations.

use std::fmt;

use super::types::{Square, MAX_COLS, MAX_ROWS};

/// Error type for square notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a column letter followed by a row number
    InvalidNotation { notation: String },
    /// Row number outside 1..=256
    RowOutOfRange { row: u32 },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::RowOutOfRange { row } => {
                write!(f, "Row {row} out of range (must be 1-{MAX_ROWS})")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A malformed input that no board could accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Board dimensions are zero or exceed the coordinate range
    Dimensions { width: usize, height: usize },
    /// Column letter / row number pair is not a coordinate
    Notation(SquareError),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::Dimensions { width, height } => {
                write!(
                    f,
                    "Invalid board dimensions {width}x{height} (width must be 1-{MAX_COLS}, height 1-{MAX_ROWS})"
                )
            }
            ArgumentError::Notation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgumentError::Notation(err) => Some(err),
            ArgumentError::Dimensions { .. } => None,
        }
    }
}

/// Error type for board queries and moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square does not exist on this board
    InvalidPosition { square: Square },
    /// No piece on the origin square
    EmptySquare { square: Square },
    /// Destination is not among the piece's legal moves
    IllegalMove { from: Square, to: Square },
    /// Input rejected before touching the board
    InvalidArgument(ArgumentError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPosition { square } => {
                write!(f, "Position {square} does not exist on the board")
            }
            BoardError::EmptySquare { square } => {
                write!(f, "There is no piece at position {square}")
            }
            BoardError::IllegalMove { from, to } => {
                write!(f, "Moving the piece at {from} to {to} is not a legal move")
            }
            BoardError::InvalidArgument(err) => write!(f, "Invalid argument: {err}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::InvalidArgument(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArgumentError> for BoardError {
    fn from(err: ArgumentError) -> Self {
        BoardError::InvalidArgument(err)
    }
}

impl From<SquareError> for BoardError {
    fn from(err: SquareError) -> Self {
        BoardError::InvalidArgument(ArgumentError::Notation(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_square_error_row_range() {
        let err = SquareError::RowOutOfRange { row: 0 };
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_dimensions_error() {
        let err = ArgumentError::Dimensions {
            width: 27,
            height: 8,
        };
        assert!(err.to_string().contains("27x8"));
    }

    #[test]
    fn test_invalid_position_names_square() {
        let err = BoardError::InvalidPosition { square: sq("I9") };
        assert!(err.to_string().contains("I9"));
    }

    #[test]
    fn test_empty_square_names_square() {
        let err = BoardError::EmptySquare { square: sq("E4") };
        assert!(err.to_string().contains("E4"));
    }

    #[test]
    fn test_illegal_move_names_both_squares() {
        let err = BoardError::IllegalMove {
            from: sq("D2"),
            to: sq("D5"),
        };
        let msg = err.to_string();
        assert!(msg.contains("D2"));
        assert!(msg.contains("D5"));
    }

    #[test]
    fn test_square_error_converts_with_source() {
        let err: BoardError = SquareError::InvalidNotation {
            notation: "??".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            BoardError::InvalidArgument(ArgumentError::Notation(_))
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("??"));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::EmptySquare { square: sq("A1") };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

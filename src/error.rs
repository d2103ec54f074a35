use crate::board::Color;
use crate::square::Square;

/// Caller contract violations. Rule rejections are not errors; they come
/// back as an unapplied [`MoveReport`](crate::moves::types::MoveReport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("source and destination are both {0}")]
    NullMove(Square),

    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    #[error("invalid square name `{0}`")]
    InvalidSquare(String),
}

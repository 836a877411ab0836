//! Error types for position loading and move validation.

use crate::square::Square;

/// Fatal errors when loading a position record.
///
/// A failed load produces no partial game state; the caller gets this error
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The record does not have at least 4 whitespace-separated fields.
    #[error("expected at least 4 position fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// A side has more than one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
}

/// Recoverable rejections of a move or undo request.
///
/// The `Display` output of each variant is a stable, user-facing contract;
/// it becomes the game's `message` when a request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The request does not name two valid board coordinates.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    /// The source square is empty.
    #[error("no piece at square {0}")]
    NoPiece(Square),
    /// The piece on the source square belongs to the side not on move.
    #[error("it's not your turn")]
    NotYourTurn,
    /// The destination is not a pseudo-legal destination of the piece.
    #[error("illegal move {0}")]
    IllegalMove(String),
    /// The move would leave the mover's own king attacked.
    #[error("observe check")]
    ObserveCheck,
    /// Undo was requested with an empty move history.
    #[error("no more moves to undo")]
    NothingToUndo,
}

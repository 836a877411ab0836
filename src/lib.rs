//! A chess rules adjudicator: move legality, check detection, terminal-state
//! classification, move application, and undo.
//!
//! This crate decides whether moves are legal and applies them. It does not
//! search, evaluate, or render, and it does not execute castling or en
//! passant captures — those fields are carried verbatim for round-trip
//! fidelity of the position record.

mod attacks;
mod board;
mod color;
mod error;
mod fen;
mod file;
mod game;
mod movegen;
mod notation;
mod piece;
mod piece_kind;
mod rank;
mod square;
mod square_set;

pub use attacks::{checkers, squares_attacking};
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{MoveError, PositionError};
pub use fen::STARTING_POSITION;
pub use file::File;
pub use game::{Game, GameStatus};
pub use movegen::pseudo_legal_moves;
pub use notation::MoveRecord;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
pub use square_set::SquareSet;

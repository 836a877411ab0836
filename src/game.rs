//! The game aggregate: move legality, application, undo, and terminal-state
//! classification.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::attacks;
use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::fen::STARTING_POSITION;
use crate::movegen::pseudo_legal_moves;
use crate::notation::{self, MoveRecord};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Classification of the game after the latest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The game continues; the side to move has at least one legal move.
    Running,
    /// The latest request was rejected; the position itself is unchanged
    /// and the game remains playable.
    Invalid,
    /// The side to move is in check with no legal move. The game is over.
    Checkmate,
    /// The side to move is not in check but has no legal move. The game is over.
    Draw,
}

/// A chess game: the board plus every piece of derived state a rules
/// adjudicator tracks.
///
/// Transitions never mutate in place: [`make_move`](Game::make_move) and
/// [`undo_move`](Game::undo_move) take `&self` and return the successor
/// state, so callers can keep any snapshot they care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    /// Castling availability, stored verbatim from the position record.
    castling: String,
    /// En passant target, stored verbatim from the position record.
    en_passant: String,
    /// Notated moves, most recent first.
    moves: VecDeque<String>,
    /// Captured piece kinds, most recent first. One entry per capturing move.
    captured: VecDeque<PieceKind>,
    /// Squares delivering check to the side to move.
    checking_squares: SquareSet,
    /// Human-readable description of the last transition, including
    /// rejection reasons.
    message: String,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard starting position.
    pub fn new() -> Game {
        STARTING_POSITION
            .parse()
            .expect("the starting position record is valid")
    }

    /// Assemble a freshly loaded game. Used by the position loader.
    pub(crate) fn from_parts(
        board: Board,
        turn: Color,
        castling: String,
        en_passant: String,
    ) -> Game {
        let checking_squares = attacks::checkers(&board, turn);
        Game {
            board,
            turn,
            castling,
            en_passant,
            moves: VecDeque::new(),
            captured: VecDeque::new(),
            checking_squares,
            message: String::new(),
            status: GameStatus::Running,
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Return the verbatim castling availability field.
    #[inline]
    pub fn castling(&self) -> &str {
        &self.castling
    }

    /// Return the verbatim en passant target field.
    #[inline]
    pub fn en_passant(&self) -> &str {
        &self.en_passant
    }

    /// Iterate over the notated moves, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    /// Iterate over the captured piece kinds, most recent first.
    pub fn captured(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.captured.iter().copied()
    }

    /// Return the squares currently delivering check to the side to move.
    #[inline]
    pub fn checking_squares(&self) -> SquareSet {
        self.checking_squares
    }

    /// Return the description of the last transition.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return the current classification.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return `true` once the game has ended in checkmate or a draw.
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate | GameStatus::Draw)
    }

    /// Validate a from/to move request such as `"e2e4"` without mutating
    /// anything.
    ///
    /// Checks run in order and stop at the first failure: coordinates parse,
    /// the source is occupied, the piece belongs to the side to move, the
    /// destination is pseudo-legal, and the simulated move leaves the
    /// mover's own king unattacked.
    pub fn check_move(&self, request: &str) -> Result<(Square, Square), MoveError> {
        let (from, to) = notation::parse_request(request)?;
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color() != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        if !pseudo_legal_moves(&self.board, from).contains(to) {
            return Err(MoveError::IllegalMove(request.to_string()));
        }
        let after = self.board.with_move(from, to);
        if attacks::checkers(&after, self.turn).is_nonempty() {
            return Err(MoveError::ObserveCheck);
        }
        Ok((from, to))
    }

    /// Attempt a move, returning the successor state.
    ///
    /// In a finished game this is a no-op returning the unchanged state.
    /// A rejected request preserves the position and marks the state
    /// [`GameStatus::Invalid`] with the rejection reason as the message.
    pub fn make_move(&self, request: &str) -> Game {
        if self.is_over() {
            return self.clone();
        }
        match self.check_move(request) {
            Ok((from, to)) => self.apply(from, to),
            Err(reason) => {
                debug!(request, %reason, "rejected move");
                let mut game = self.clone();
                game.status = GameStatus::Invalid;
                game.message = reason.to_string();
                game
            }
        }
    }

    /// Apply a validated move and reclassify the game for the new side to move.
    fn apply(&self, from: Square, to: Square) -> Game {
        let mut game = self.clone();
        let piece = game
            .board
            .piece_at(from)
            .expect("check_move verified the source square is occupied");
        let captured = game.board.piece_at(to);
        let promotion =
            piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank();

        let record = MoveRecord {
            from,
            to,
            capture: captured.is_some(),
            promotion,
        };

        game.board = game.board.with_move(from, to);
        if let Some(victim) = captured {
            game.captured.push_front(victim.kind());
        }
        game.moves.push_front(record.to_string());
        game.turn = game.turn.flip();
        game.checking_squares = attacks::checkers(&game.board, game.turn);
        game.status = game.classify();
        debug!(notation = %record, "applied move");

        game.message = match game.status {
            GameStatus::Checkmate => {
                let winner = game.turn.flip().name();
                info!(winner, "checkmate");
                format!("Checkmate! {winner} wins.")
            }
            GameStatus::Draw => {
                info!("stalemate");
                "Stalemate! It's a draw.".to_string()
            }
            _ => record.to_string(),
        };
        game
    }

    /// Classify the position for the side to move: running while any legal
    /// move exists, otherwise checkmate under check and stalemate without.
    ///
    /// This is the exhaustive simulate-every-move search; there is no sound
    /// shortcut, since a wrong terminal verdict is a correctness bug.
    fn classify(&self) -> GameStatus {
        if self.has_legal_move(self.turn) {
            GameStatus::Running
        } else if self.checking_squares.is_nonempty() {
            GameStatus::Checkmate
        } else {
            GameStatus::Draw
        }
    }

    /// Return `true` if `color` has at least one move that leaves its own
    /// king unattacked.
    fn has_legal_move(&self, color: Color) -> bool {
        for from in Square::all() {
            if self.board.color_at(from) != Some(color) {
                continue;
            }
            for to in pseudo_legal_moves(&self.board, from) {
                let after = self.board.with_move(from, to);
                if attacks::checkers(&after, color).is_empty() {
                    return true;
                }
            }
        }
        false
    }

    /// Reverse the most recent move, returning the successor state.
    ///
    /// With an empty history this is the recoverable rejection
    /// `"no more moves to undo"`. The notation itself drives the reversal:
    /// the separator says whether a captured piece must be restored and the
    /// promotion suffix says the mover reverts to a pawn.
    ///
    /// `checking_squares` and `status` are left exactly as they were; undo
    /// restores position and bookkeeping, not classification.
    pub fn undo_move(&self) -> Game {
        let mut game = self.clone();
        let Some(last) = game.moves.pop_front() else {
            game.status = GameStatus::Invalid;
            game.message = MoveError::NothingToUndo.to_string();
            return game;
        };

        let record: MoveRecord = last
            .parse()
            .expect("move history holds only notation this crate produced");
        let moved = game
            .board
            .piece_at(record.to)
            .expect("the last move's destination square is occupied");
        let restored = if record.promotion {
            Piece::new(PieceKind::Pawn, moved.color())
        } else {
            moved
        };

        game.board.clear(record.to);
        if record.capture {
            let victim = game
                .captured
                .pop_front()
                .expect("capture notation has a matching captured-piece entry");
            game.board.set(record.to, Piece::new(victim, moved.color().flip()));
        }
        game.board.set(record.from, restored);
        game.turn = game.turn.flip();
        game.message = format!("undid {last}");
        debug!(notation = %last, "undid move");
        game
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

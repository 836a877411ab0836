//! Attack and check detection, built directly on pseudo-legal movement.
//!
//! A square attacks a target iff the target appears among the attacker's
//! pseudo-legal destinations. Sharing the move generator keeps movement and
//! attack semantics unified — there is no second copy of the geometry.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Return every square holding a `by_color` piece whose pseudo-legal
/// destinations include `target`.
pub fn squares_attacking(board: &Board, target: Square, by_color: Color) -> SquareSet {
    let mut attackers = SquareSet::EMPTY;
    for from in Square::all() {
        if board.color_at(from) == Some(by_color)
            && pseudo_legal_moves(board, from).contains(target)
        {
            attackers.insert(from);
        }
    }
    attackers
}

/// Return the squares delivering check to `color`'s king.
///
/// Non-empty means `color` is in check. A side without a king on the board
/// is never in check.
pub fn checkers(board: &Board, color: Color) -> SquareSet {
    match board.king_square(color) {
        Some(king_sq) => squares_attacking(board, king_sq, color.flip()),
        None => SquareSet::EMPTY,
    }
}

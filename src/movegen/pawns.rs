//! Pawn destination generation: forward pushes and diagonal captures.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Pawns are the one piece whose geometry depends on color: they advance
/// toward the opponent's back rank and capture diagonally forward only.
/// En passant is not generated; the field is carried but never enacted.
pub(super) fn gen_pawn(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let forward = color.forward();

    // Single push onto an empty square; double push from the home rank only
    // when both squares ahead are empty.
    if let Some(one) = from.offset(0, forward) {
        if !board.is_occupied(one) {
            moves.insert(one);
            if from.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, forward) {
                    if !board.is_occupied(two) {
                        moves.insert(two);
                    }
                }
            }
        }
    }

    // Diagonal captures, only onto enemy-occupied squares.
    for file_delta in [-1, 1] {
        if let Some(target) = from.offset(file_delta, forward) {
            if board.color_at(target) == Some(color.flip()) {
                moves.insert(target);
            }
        }
    }

    moves
}

//! King destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// The eight unit steps. Castling is not generated; the rights field is
/// carried but never enacted.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Destinations here may still be attacked: stepping into check is filtered
/// by the legality layer, not by geometry, so the attack detector can reuse
/// these destinations without recursing.
pub(super) fn gen_king(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for (file_delta, rank_delta) in KING_OFFSETS {
        if let Some(target) = from.offset(file_delta, rank_delta) {
            if board.color_at(target) != Some(color) {
                moves.insert(target);
            }
        }
    }
    moves
}

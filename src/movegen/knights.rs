//! Knight destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// The eight jumps moving two squares on one axis and one on the other.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) fn gen_knight(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for (file_delta, rank_delta) in KNIGHT_OFFSETS {
        if let Some(target) = from.offset(file_delta, rank_delta) {
            if board.color_at(target) != Some(color) {
                moves.insert(target);
            }
        }
    }
    moves
}

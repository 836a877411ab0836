//! Sliding-piece destination generation: rooks, bishops, and queens.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// The four orthogonal ray directions, as (file, rank) deltas.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal ray directions.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray from `from` until it leaves the board or hits a blocker.
///
/// Blocking is resolved independently per ray: an enemy blocker is included
/// (it can be captured), a friendly blocker is excluded, and an unblocked
/// ray runs to the board edge.
pub(super) fn gen_rays(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(file_delta, rank_delta) in directions {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            match board.color_at(next) {
                None => {
                    moves.insert(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant != color {
                        moves.insert(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}

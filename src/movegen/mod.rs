//! Pseudo-legal move generation, dispatched by piece kind.
//!
//! A pseudo-legal destination respects the piece's movement geometry and
//! occupancy but ignores whether the move leaves the mover's own king in
//! check. That filtering happens one layer up, in [`Game`](crate::Game) —
//! the attack detector relies on these raw destinations and must not see
//! check-filtered ones.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Return every pseudo-legal destination of the piece on `from`.
///
/// An empty square yields an empty set, not an error. Promotion is not a
/// distinct destination; it happens as a side effect of a pawn reaching its
/// back rank when the move is applied.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => pawns::gen_pawn(board, from, color),
        PieceKind::Knight => knights::gen_knight(board, from, color),
        PieceKind::Bishop => sliders::gen_rays(board, from, color, &sliders::BISHOP_DIRECTIONS),
        PieceKind::Rook => sliders::gen_rays(board, from, color, &sliders::ROOK_DIRECTIONS),
        PieceKind::Queen => {
            sliders::gen_rays(board, from, color, &sliders::ROOK_DIRECTIONS)
                | sliders::gen_rays(board, from, color, &sliders::BISHOP_DIRECTIONS)
        }
        PieceKind::King => king::gen_king(board, from, color),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::board::Board;
    use crate::game::Game;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn starting() -> Board {
        *Game::new().board()
    }

    fn board_of(record: &str) -> Board {
        *record.parse::<Game>().unwrap().board()
    }

    #[test]
    fn empty_square_yields_empty_set() {
        let board = starting();
        assert_eq!(pseudo_legal_moves(&board, Square::E4), SquareSet::EMPTY);
    }

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let board = starting();
        let moves = pseudo_legal_moves(&board, Square::E2);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(Square::E3));
        assert!(moves.contains(Square::E4));
    }

    #[test]
    fn starting_knight_jumps_over_pawns() {
        let board = starting();
        let moves = pseudo_legal_moves(&board, Square::B1);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(Square::A3));
        assert!(moves.contains(Square::C3));
    }

    #[test]
    fn starting_back_rank_pieces_are_blocked() {
        let board = starting();
        assert!(pseudo_legal_moves(&board, Square::A1).is_empty());
        assert!(pseudo_legal_moves(&board, Square::C1).is_empty());
        assert!(pseudo_legal_moves(&board, Square::D1).is_empty());
        assert!(pseudo_legal_moves(&board, Square::E1).is_empty());
    }

    #[test]
    fn black_pawn_moves_toward_rank_one() {
        let board = starting();
        let moves = pseudo_legal_moves(&board, Square::D7);
        assert!(moves.contains(Square::D6));
        assert!(moves.contains(Square::D5));
        assert!(!moves.contains(Square::D8));
    }

    #[test]
    fn pawn_single_push_blocked_by_any_piece() {
        // White pawn e4, black pawn e5 head to head: neither can advance.
        let board = board_of("4k3/8/8/4p3/4P3/8/8/4K3 w - -");
        assert!(pseudo_legal_moves(&board, Square::E4).is_empty());
    }

    #[test]
    fn pawn_double_push_blocked_by_piece_on_intermediate_square() {
        // Knight on e3 blocks both e2-e3 and e2-e4.
        let board = board_of("4k3/8/8/8/8/4n3/4P3/4K3 w - -");
        assert!(pseudo_legal_moves(&board, Square::E2).is_empty());
        // Piece on e4 only: e3 reachable, e4 not.
        let board = board_of("4k3/8/8/8/4n3/8/4P3/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::E2);
        assert_eq!(moves.count(), 1);
        assert!(moves.contains(Square::E3));
    }

    #[test]
    fn pawn_double_push_only_from_home_rank() {
        let board = board_of("4k3/8/8/8/8/4P3/8/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::E3);
        assert_eq!(moves.count(), 1);
        assert!(moves.contains(Square::E4));
    }

    #[test]
    fn pawn_captures_diagonally_only_enemy() {
        // White pawn e4; black pawn d5; white knight f5.
        let board = board_of("4k3/8/8/3p1N2/4P3/8/8/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::E4);
        assert!(moves.contains(Square::D5));
        assert!(moves.contains(Square::E5));
        assert!(!moves.contains(Square::F5));
    }

    #[test]
    fn pawn_does_not_capture_straight_ahead() {
        let board = board_of("4k3/8/8/4p3/4P3/8/8/4K3 w - -");
        assert!(!pseudo_legal_moves(&board, Square::E4).contains(Square::E5));
    }

    #[test]
    fn knight_eight_destinations_from_center() {
        let board = board_of("4k3/8/8/8/4N3/8/8/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::E4);
        assert_eq!(moves.count(), 8);
        for sq in [
            Square::D6,
            Square::F6,
            Square::G5,
            Square::G3,
            Square::F2,
            Square::D2,
            Square::C3,
            Square::C5,
        ] {
            assert!(moves.contains(sq), "knight should reach {sq}");
        }
    }

    #[test]
    fn knight_excludes_same_color_destinations() {
        // White pawn on f6 occupies one knight destination.
        let board = board_of("4k3/8/5P2/8/4N3/8/8/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::E4);
        assert_eq!(moves.count(), 7);
        assert!(!moves.contains(Square::F6));
    }

    #[test]
    fn knight_corner_has_two_destinations() {
        let board = board_of("4k3/8/8/8/8/8/8/N3K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::A1);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(Square::B3));
        assert!(moves.contains(Square::C2));
    }

    #[test]
    fn rook_rays_stop_at_blockers() {
        // Rook d4, friendly pawn d6 (exclusive), enemy pawn g4 (inclusive).
        let board = board_of("4k3/8/3P4/8/3R2p1/8/8/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::D4);
        assert!(moves.contains(Square::D5));
        assert!(!moves.contains(Square::D6), "friendly blocker is exclusive");
        assert!(!moves.contains(Square::D7));
        assert!(moves.contains(Square::G4), "enemy blocker is inclusive");
        assert!(!moves.contains(Square::H4), "ray stops at enemy blocker");
        assert!(moves.contains(Square::A4));
        assert!(moves.contains(Square::D1));
        assert!(moves.contains(Square::D3));
    }

    #[test]
    fn bishop_rays_are_diagonal_only() {
        let board = board_of("4k3/8/8/8/3B4/8/8/4K3 w - -");
        let moves = pseudo_legal_moves(&board, Square::D4);
        assert!(moves.contains(Square::A7));
        assert!(moves.contains(Square::H8));
        assert!(moves.contains(Square::A1));
        assert!(moves.contains(Square::G1));
        assert!(!moves.contains(Square::D5));
        assert!(!moves.contains(Square::E4));
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let board = board_of("4k3/8/8/8/3Q4/8/8/4K3 w - -");
        let queen = pseudo_legal_moves(&board, Square::D4);
        assert!(queen.contains(Square::D8));
        assert!(queen.contains(Square::H4));
        assert!(queen.contains(Square::H8));
        assert!(queen.contains(Square::A1));
        // 27 squares for a queen on d4 of an otherwise open board.
        assert_eq!(queen.count(), 27);
    }

    #[test]
    fn king_one_step_in_every_direction() {
        let board = board_of("4k3/8/8/8/3K4/8/8/8 w - -");
        let moves = pseudo_legal_moves(&board, Square::D4);
        assert_eq!(moves.count(), 8);
    }

    #[test]
    fn king_excludes_same_color_and_board_edge() {
        // King a1 with a friendly pawn a2: b1, b2 remain.
        let board = board_of("4k3/8/8/8/8/8/P7/K7 w - -");
        let moves = pseudo_legal_moves(&board, Square::A1);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(Square::B1));
        assert!(moves.contains(Square::B2));
    }

    #[test]
    fn king_may_step_into_attacked_square_pseudo_legally() {
        // Black rook on h3 covers e3; pseudo-legal king moves ignore that.
        let board = board_of("4k3/8/8/8/4K3/7r/8/8 w - -");
        let moves = pseudo_legal_moves(&board, Square::E4);
        assert!(moves.contains(Square::E3));
    }
}

//! The chess board: a 64-square mailbox of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement for all 64 squares.
///
/// Every square is always addressable; `None` is the empty-square sentinel.
/// Side to move, castling, and en passant live on [`Game`](crate::Game) —
/// the board is placement only.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the kind of the piece on the given square, if any.
    #[inline]
    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        self.piece_at(sq).map(Piece::kind)
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Place a piece on the given square, replacing whatever was there.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Empty the given square.
    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
    }

    /// Return the square of the king for the given side, or `None` if that
    /// side has no king.
    ///
    /// Loaded positions may legitimately omit a king (reduced study
    /// positions); a side without one is simply never in check.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some(Piece::new(PieceKind::King, color)))
    }

    /// Return a copy with the piece on `from` moved to `to`.
    ///
    /// A pawn landing on its promotion rank becomes a queen, so simulated
    /// moves agree exactly with applied ones. If `from` is empty the board
    /// is returned unchanged.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut board = *self;
        if let Some(piece) = board.piece_at(from) {
            let placed = if piece.kind() == PieceKind::Pawn
                && to.rank() == piece.color().promotion_rank()
            {
                Piece::new(PieceKind::Queen, piece.color())
            } else {
                piece
            };
            board.clear(from);
            board.set(to, placed);
        }
        board
    }

    /// Validate the structural integrity of the board: at most one king per
    /// side. A missing king is tolerated for reduced study positions.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = Square::all()
                .filter(|&sq| self.piece_at(sq) == Some(king))
                .count();
            if count > 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(PositionError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        write!(f, "{}", self.pretty())?;
        write!(f, ")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank_idx in (0u8..8).rev() {
            write!(f, "{}  ", rank_idx + 1)?;
            for file_idx in 0u8..8 {
                let sq = Square::from_index(rank_idx * 8 + file_idx)
                    .expect("rank and file indices are 0..8");
                let c = match board.piece_at(sq) {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if file_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::game::Game;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn starting() -> Board {
        *Game::new().board()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        for sq in Square::all() {
            assert_eq!(board.piece_at(sq), None);
            assert!(!board.is_occupied(sq));
        }
    }

    #[test]
    fn starting_position_piece_at() {
        let board = starting();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(Square::E7), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.kind_at(Square::B8), Some(PieceKind::Knight));
        assert_eq!(board.color_at(Square::C8), Some(Color::Black));
    }

    #[test]
    fn king_square() {
        let board = starting();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        board.set(Square::E4, Piece::WHITE_PAWN);
        assert!(board.is_occupied(Square::E4));
        board.clear(Square::E4);
        assert!(!board.is_occupied(Square::E4));
    }

    #[test]
    fn with_move_is_pure() {
        let board = starting();
        let after = board.with_move(Square::E2, Square::E4);
        assert_eq!(after.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(after.piece_at(Square::E2), None);
        // The original board is untouched.
        assert_eq!(board.piece_at(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Square::E4), None);
    }

    #[test]
    fn with_move_promotes_pawn() {
        let mut board = Board::empty();
        board.set(Square::E1, Piece::WHITE_KING);
        board.set(Square::E8, Piece::BLACK_KING);
        board.set(Square::A7, Piece::WHITE_PAWN);
        board.set(Square::A2, Piece::BLACK_PAWN);

        let after = board.with_move(Square::A7, Square::A8);
        assert_eq!(after.piece_at(Square::A8), Some(Piece::WHITE_QUEEN));

        let after = board.with_move(Square::A2, Square::A1);
        assert_eq!(after.piece_at(Square::A1), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn with_move_empty_source_is_noop() {
        let board = starting();
        let after = board.with_move(Square::E4, Square::E5);
        assert_eq!(after, board);
    }

    #[test]
    fn validate_rejects_duplicate_kings() {
        let mut board = Board::empty();
        board.set(Square::E1, Piece::WHITE_KING);
        board.set(Square::E8, Piece::BLACK_KING);
        assert!(board.validate().is_ok());
        board.set(Square::A1, Piece::WHITE_KING);
        assert!(board.validate().is_err());
    }

    #[test]
    fn validate_tolerates_missing_king() {
        let mut board = Board::empty();
        board.set(Square::E2, Piece::WHITE_KING);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn pretty_print() {
        let board = starting();
        let output = format!("{}", board.pretty());
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }
}

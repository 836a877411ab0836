//! Position record parsing and serialization for [`Game`].
//!
//! The record is the first four FEN fields: piece placement, side to move,
//! castling availability, and en passant target. Trailing fields (move
//! counters) are tolerated and ignored. Castling and en passant are stored
//! verbatim — this core never enacts them — so a loaded record round-trips.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::PositionError;
use crate::file::File;
use crate::game::Game;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The position record for the standard starting position.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

impl FromStr for Game {
    type Err = PositionError;

    fn from_str(record: &str) -> Result<Game, PositionError> {
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(PositionError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Piece placement: eight ranks from rank 8 down to rank 1.
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(PositionError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = Rank::from_index(7 - rank_index as u8)
                .expect("rank_index is bounded by the rank count check");
            let mut file_index: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PositionError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as u8;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(PositionError::InvalidPieceChar { character: c })?;
                    if file_index >= 8 {
                        return Err(PositionError::BadRankLength {
                            rank_index,
                            length: file_index as usize + 1,
                        });
                    }
                    let file = File::from_index(file_index)
                        .expect("file_index was bounds-checked above");
                    board.set(Square::new(rank, file), piece);
                    file_index += 1;
                }
            }

            if file_index != 8 {
                return Err(PositionError::BadRankLength {
                    rank_index,
                    length: file_index as usize,
                });
            }
        }

        board.validate()?;

        // Side to move: "w" is White, anything else is Black.
        let turn = if fields[1] == "w" {
            Color::White
        } else {
            Color::Black
        };

        // Castling and en passant are carried verbatim, not interpreted.
        Ok(Game::from_parts(
            board,
            turn,
            fields[2].to_string(),
            fields[3].to_string(),
        ))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        for rank_idx in (0u8..8).rev() {
            let rank = Rank::from_index(rank_idx).expect("rank_idx is 0..8");
            let mut empty_count = 0u8;

            for file_idx in 0u8..8 {
                let file = File::from_index(file_idx).expect("file_idx is 0..8");
                let sq = Square::new(rank, file);

                match board.piece_at(sq) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if rank_idx > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {} {}", self.turn(), self.castling(), self.en_passant())
    }
}

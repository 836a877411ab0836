//! The move-log notation: origin, separator, destination, promotion suffix.
//!
//! Examples: `e2-e4` (quiet), `e4xd5` (capture), `c7xd8Q` (capture with
//! promotion). The separator and suffix carry exactly the information undo
//! needs: whether a captured piece must be restored and whether the moved
//! piece must revert to a pawn.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;
use crate::square::Square;

/// One entry of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// `true` if the move captured a piece (notated with `x`).
    pub capture: bool,
    /// `true` if the move promoted a pawn to a queen (trailing `Q`).
    pub promotion: bool,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, separator, self.to)?;
        if self.promotion {
            write!(f, "Q")?;
        }
        Ok(())
    }
}

impl FromStr for MoveRecord {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<MoveRecord, MoveError> {
        let invalid = || MoveError::InvalidCoordinates(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 && bytes.len() != 6 {
            return Err(invalid());
        }

        let from = s
            .get(..2)
            .and_then(Square::from_algebraic)
            .ok_or_else(invalid)?;
        let capture = match bytes[2] {
            b'x' => true,
            b'-' => false,
            _ => return Err(invalid()),
        };
        let to = s
            .get(3..5)
            .and_then(Square::from_algebraic)
            .ok_or_else(invalid)?;
        let promotion = match bytes.get(5) {
            Some(b'Q') => true,
            None => false,
            Some(_) => return Err(invalid()),
        };

        Ok(MoveRecord {
            from,
            to,
            capture,
            promotion,
        })
    }
}

/// Parse a 4-character from/to move request such as `e2e4`.
pub(crate) fn parse_request(s: &str) -> Result<(Square, Square), MoveError> {
    if s.len() != 4 {
        return Err(MoveError::InvalidCoordinates(s.to_string()));
    }
    let from_str = s
        .get(..2)
        .ok_or_else(|| MoveError::InvalidCoordinates(s.to_string()))?;
    let to_str = s
        .get(2..)
        .ok_or_else(|| MoveError::InvalidCoordinates(s.to_string()))?;
    let from = Square::from_algebraic(from_str)
        .ok_or_else(|| MoveError::InvalidCoordinates(from_str.to_string()))?;
    let to = Square::from_algebraic(to_str)
        .ok_or_else(|| MoveError::InvalidCoordinates(to_str.to_string()))?;
    Ok((from, to))
}

//! Sets of squares backed by a 64-bit integer, one bit per square.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::square::Square;

/// A set of squares in LERF bit order.
///
/// Used wherever the rules engine speaks of a set of squares: pseudo-legal
/// destinations, the squares attacking a target, and the squares currently
/// delivering check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Return `true` if no squares are in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one square is in the set.
    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Count the squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new set with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    /// Add the given square to the set.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Pop the lowest-index square, returning it and the remaining set.
    #[inline]
    const fn pop_lowest(self) -> Option<(Square, SquareSet)> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        match Square::from_index(index) {
            Some(sq) => Some((sq, SquareSet(self.0 & (self.0 - 1)))),
            None => None,
        }
    }

    /// Iterate over the squares in index order.
    #[inline]
    pub fn iter(self) -> Iter {
        Iter(self)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

/// Iterator over the squares of a [`SquareSet`] in index order.
pub struct Iter(SquareSet);

impl Iterator for Iter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let (sq, rest) = self.0.pop_lowest()?;
        self.0 = rest;
        Some(sq)
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SquareSet{{")?;
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sq}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn empty_set() {
        assert!(SquareSet::EMPTY.is_empty());
        assert!(!SquareSet::EMPTY.is_nonempty());
        assert_eq!(SquareSet::EMPTY.count(), 0);
        assert!(!SquareSet::EMPTY.contains(Square::A1));
    }

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        set.insert(Square::E4);
        set.insert(Square::D5);
        assert!(set.contains(Square::E4));
        assert!(set.contains(Square::D5));
        assert!(!set.contains(Square::E5));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn with_is_pure() {
        let set = SquareSet::EMPTY.with(Square::A1);
        assert!(set.contains(Square::A1));
        assert!(SquareSet::EMPTY.is_empty());
    }

    #[test]
    fn union() {
        let a = SquareSet::EMPTY.with(Square::A1);
        let b = SquareSet::EMPTY.with(Square::H8);
        let union = a | b;
        assert!(union.contains(Square::A1));
        assert!(union.contains(Square::H8));
        assert_eq!(union.count(), 2);
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [Square::H8, Square::A1, Square::E4].into_iter().collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);
    }

    #[test]
    fn debug_lists_squares() {
        let set = SquareSet::EMPTY.with(Square::E4).with(Square::D5);
        assert_eq!(format!("{set:?}"), "SquareSet{e4, d5}");
    }
}

//! Grid cell contents.

use crate::Direction;

/// The content of a single grid cell.
///
/// # Examples
///
/// ```
/// use xwordgen_core::Cell;
///
/// let cell = Cell::Letter('A');
/// assert!(cell.is_letter());
/// assert_eq!(cell.letter(), Some('A'));
/// assert_eq!(Cell::Open.letter(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    /// A black square; can never hold a letter.
    Blocked,
    /// A cell available for a letter that has not been assigned one yet.
    #[default]
    Open,
    /// A cell holding a placed letter.
    Letter(char),
}

impl Cell {
    /// Returns the letter held by this cell, if any.
    #[must_use]
    #[inline]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(ch) => Some(ch),
            Self::Blocked | Self::Open => None,
        }
    }
}

bitflags::bitflags! {
    /// The set of word directions passing through a cell.
    ///
    /// A cell used by both an across and a down word is a crossing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Occupancy: u8 {
        /// An across word uses the cell.
        const ACROSS = 0b01;
        /// A down word uses the cell.
        const DOWN = 0b10;
    }
}

impl Occupancy {
    /// Returns the flag for a single direction.
    #[must_use]
    #[inline]
    pub const fn of(direction: Direction) -> Self {
        match direction {
            Direction::Across => Self::ACROSS,
            Direction::Down => Self::DOWN,
        }
    }

    /// Returns `true` if a word running in `direction` uses the cell.
    #[must_use]
    #[inline]
    pub fn has(self, direction: Direction) -> bool {
        self.contains(Self::of(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_open() {
        assert_eq!(Cell::default(), Cell::Open);
        assert!(Cell::Blocked.is_blocked());
        assert_eq!(Cell::Blocked.letter(), None);
    }

    #[test]
    fn test_occupancy_directions() {
        let mut occupancy = Occupancy::empty();
        assert!(!occupancy.has(Direction::Across));
        occupancy |= Occupancy::of(Direction::Across);
        assert!(occupancy.has(Direction::Across));
        assert!(!occupancy.has(Direction::Down));
        occupancy |= Occupancy::of(Direction::Down);
        assert_eq!(occupancy, Occupancy::all());
    }
}

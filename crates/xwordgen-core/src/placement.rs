//! Words bound to a location in the grid.

use std::iter::FusedIterator;

use crate::{Direction, Position};

/// A word bound to a starting cell and a direction.
///
/// `word` indexes the candidate pool the placement was drawn from; the grid
/// itself only stores letters.
///
/// # Examples
///
/// ```
/// use xwordgen_core::{Direction, Placement, Position};
///
/// let placement = Placement::new(0, Position::new(2, 1), Direction::Down, 3);
/// let cells = placement.positions().collect::<Vec<_>>();
/// assert_eq!(
///     cells,
///     [Position::new(2, 1), Position::new(3, 1), Position::new(4, 1)]
/// );
/// assert_eq!(placement.end(), Position::new(4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the placed word in the candidate pool.
    pub word: usize,
    /// First cell of the word.
    pub start: Position,
    /// Direction the word runs in.
    pub direction: Direction,
    /// Number of cells the word covers.
    pub len: usize,
}

impl Placement {
    /// Creates a new placement.
    #[must_use]
    pub const fn new(word: usize, start: Position, direction: Direction, len: usize) -> Self {
        Self {
            word,
            start,
            direction,
            len,
        }
    }

    /// Returns the position of the `i`-th letter.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than the placement length.
    #[must_use]
    pub fn position(&self, i: usize) -> Position {
        assert!(i < self.len, "letter index {i} out of range");
        match self.direction {
            Direction::Across => Position::new(self.start.row, self.start.col + i),
            Direction::Down => Position::new(self.start.row + i, self.start.col),
        }
    }

    /// Returns the position of the last letter.
    ///
    /// # Panics
    ///
    /// Panics if the placement is empty.
    #[must_use]
    pub fn end(&self) -> Position {
        self.position(self.len - 1)
    }

    /// Returns `true` if the placement covers `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        match self.direction {
            Direction::Across => {
                pos.row == self.start.row
                    && pos.col >= self.start.col
                    && pos.col < self.start.col + self.len
            }
            Direction::Down => {
                pos.col == self.start.col
                    && pos.row >= self.start.row
                    && pos.row < self.start.row + self.len
            }
        }
    }

    /// Returns an iterator over the covered positions, first letter first.
    #[must_use]
    pub fn positions(&self) -> PlacementPositions {
        PlacementPositions {
            placement: *self,
            front: 0,
            back: self.len,
        }
    }
}

/// Iterator over the cells covered by a [`Placement`].
#[derive(Debug, Clone)]
pub struct PlacementPositions {
    placement: Placement,
    front: usize,
    back: usize,
}

impl Iterator for PlacementPositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.placement.position(self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PlacementPositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.placement.position(self.back))
    }
}

impl FusedIterator for PlacementPositions {}
impl ExactSizeIterator for PlacementPositions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_across() {
        let placement = Placement::new(7, Position::new(1, 2), Direction::Across, 4);
        let mut iter = placement.positions();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(Position::new(1, 2)));
        assert_eq!(iter.next_back(), Some(Position::new(1, 5)));
        assert_eq!(iter.len(), 2);
        assert_eq!(placement.end(), Position::new(1, 5));
    }

    #[test]
    fn test_covers() {
        let placement = Placement::new(0, Position::new(0, 3), Direction::Down, 3);
        assert!(placement.covers(Position::new(0, 3)));
        assert!(placement.covers(Position::new(2, 3)));
        assert!(!placement.covers(Position::new(3, 3)));
        assert!(!placement.covers(Position::new(1, 4)));
    }

    #[test]
    #[should_panic(expected = "letter index 3 out of range")]
    fn test_position_out_of_range_panics() {
        let placement = Placement::new(0, Position::new(0, 0), Direction::Across, 3);
        let _ = placement.position(3);
    }
}

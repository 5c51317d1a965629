//! Grid coordinates and word directions.

use std::fmt::{self, Display};

/// A cell coordinate in a crossword grid.
///
/// Coordinates are zero-based: `row` counts from the top edge and `col` from
/// the left edge. Ordering is row-major, which is the scan order used for
/// word numbering.
///
/// # Examples
///
/// ```
/// use xwordgen_core::Position;
///
/// let a = Position::new(0, 5);
/// let b = Position::new(1, 0);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position `steps` cells further along `direction`.
    ///
    /// Returns `None` on arithmetic overflow.
    #[must_use]
    #[inline]
    pub fn forward(self, direction: Direction, steps: usize) -> Option<Self> {
        match direction {
            Direction::Across => self.col.checked_add(steps).map(|col| Self { col, ..self }),
            Direction::Down => self.row.checked_add(steps).map(|row| Self { row, ..self }),
        }
    }

    /// Returns the position `steps` cells back along `direction`.
    ///
    /// Returns `None` if the result would leave the grid through the top or
    /// left edge.
    #[must_use]
    #[inline]
    pub fn backward(self, direction: Direction, steps: usize) -> Option<Self> {
        match direction {
            Direction::Across => self.col.checked_sub(steps).map(|col| Self { col, ..self }),
            Direction::Down => self.row.checked_sub(steps).map(|row| Self { row, ..self }),
        }
    }
}

impl Display for Position {
    /// Formats the position as 1-based `row,col`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

/// The direction a word runs in the grid.
///
/// `Across` sorts before `Down`, matching legend order for words that share
/// a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the perpendicular direction.
    #[must_use]
    #[inline]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the legend token for this direction (`"across"` or `"down"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

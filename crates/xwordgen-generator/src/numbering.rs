//! Word numbering and the clue legend.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    slice,
};

use xwordgen_core::{Direction, Placement, Position, WordEntry};

/// A placement with its clue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberedPlacement {
    /// Clue number, starting at 1.
    pub number: u32,
    /// The placement.
    pub placement: Placement,
}

/// Assigns clue numbers to `placements`.
///
/// Start cells are numbered from 1 in scan order (row-major, then column).
/// An across and a down word starting on the same cell share a number. The
/// result is sorted by number, then direction with across first.
///
/// # Examples
///
/// ```
/// use xwordgen_core::{Direction, Placement, Position};
/// use xwordgen_generator::number_placements;
///
/// let placements = [
///     Placement::new(0, Position::new(2, 0), Direction::Across, 3),
///     Placement::new(1, Position::new(0, 1), Direction::Down, 3),
///     Placement::new(2, Position::new(0, 1), Direction::Across, 4),
/// ];
/// let numbered = number_placements(&placements);
/// let summary = numbered
///     .iter()
///     .map(|n| (n.number, n.placement.word))
///     .collect::<Vec<_>>();
/// assert_eq!(summary, [(1, 2), (1, 1), (2, 0)]);
/// ```
#[must_use]
pub fn number_placements(placements: &[Placement]) -> Vec<NumberedPlacement> {
    let mut starts = placements
        .iter()
        .map(|placement| placement.start)
        .collect::<Vec<Position>>();
    starts.sort_unstable();
    starts.dedup();

    let mut numbered = placements
        .iter()
        .map(|&placement| {
            let index = starts
                .binary_search(&placement.start)
                .unwrap_or_else(|_| unreachable!("every start was collected"));
            NumberedPlacement {
                number: u32::try_from(index + 1).unwrap_or(u32::MAX),
                placement,
            }
        })
        .collect::<Vec<_>>();
    numbered.sort_unstable_by_key(|n| (n.number, n.placement.direction));
    numbered
}

/// One line of the clue legend.
///
/// [`Display`] renders `"<number>.<across|down> <row>,<col> <length>: <clue>"`
/// with 1-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry<'a> {
    number: u32,
    placement: Placement,
    word: &'a WordEntry,
}

impl<'a> LegendEntry<'a> {
    /// Returns the clue number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the word direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.placement.direction
    }

    /// Returns the first cell of the word.
    #[must_use]
    pub fn start(&self) -> Position {
        self.placement.start
    }

    /// Returns the answer length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placement.len
    }

    /// Always `false`; placed answers hold at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placement.len == 0
    }

    /// Returns the normalized answer.
    #[must_use]
    pub fn answer(&self) -> &'a str {
        self.word.answer()
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &'a str {
        self.word.clue()
    }

    /// Returns the underlying placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

impl Display for LegendEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {} {}: {}",
            self.number,
            self.placement.direction,
            self.placement.start,
            self.placement.len,
            self.word.clue()
        )
    }
}

/// Iterator over the legend of a constructed crossword, in number order.
///
/// Created by [`Crossword::legend`](crate::Crossword::legend).
#[derive(Debug, Clone)]
pub struct Legend<'a> {
    numbered: slice::Iter<'a, NumberedPlacement>,
    words: &'a [WordEntry],
}

impl<'a> Legend<'a> {
    pub(crate) fn new(numbered: &'a [NumberedPlacement], words: &'a [WordEntry]) -> Self {
        Self {
            numbered: numbered.iter(),
            words,
        }
    }

    fn entry(&self, numbered: &NumberedPlacement) -> LegendEntry<'a> {
        let words = self.words;
        LegendEntry {
            number: numbered.number,
            placement: numbered.placement,
            word: &words[numbered.placement.word],
        }
    }

    /// Restricts the legend to one direction.
    pub fn only(self, direction: Direction) -> impl Iterator<Item = LegendEntry<'a>> {
        self.filter(move |entry| entry.direction() == direction)
    }
}

impl<'a> Iterator for Legend<'a> {
    type Item = LegendEntry<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let numbered = self.numbered.next()?;
        Some(self.entry(numbered))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.numbered.size_hint()
    }
}

impl DoubleEndedIterator for Legend<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let numbered = self.numbered.next_back()?;
        Some(self.entry(numbered))
    }
}

impl FusedIterator for Legend<'_> {}
impl ExactSizeIterator for Legend<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_scan_order() {
        let placements = [
            Placement::new(0, Position::new(3, 0), Direction::Across, 4),
            Placement::new(1, Position::new(0, 2), Direction::Down, 5),
            Placement::new(2, Position::new(0, 0), Direction::Across, 3),
            Placement::new(3, Position::new(1, 5), Direction::Down, 3),
        ];
        let numbered = number_placements(&placements);
        let order = numbered
            .iter()
            .map(|n| (n.number, n.placement.start))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            [
                (1, Position::new(0, 0)),
                (2, Position::new(0, 2)),
                (3, Position::new(1, 5)),
                (4, Position::new(3, 0)),
            ]
        );
    }

    #[test]
    fn test_shared_start_shares_number() {
        let placements = [
            Placement::new(0, Position::new(0, 0), Direction::Down, 3),
            Placement::new(1, Position::new(0, 0), Direction::Across, 3),
        ];
        let numbered = number_placements(&placements);
        assert_eq!(numbered[0].number, 1);
        assert_eq!(numbered[0].placement.direction, Direction::Across);
        assert_eq!(numbered[1].number, 1);
        assert_eq!(numbered[1].placement.direction, Direction::Down);
    }

    #[test]
    fn test_legend_lines() {
        let words = [
            WordEntry::new("cat", "feline").unwrap(),
            WordEntry::new("bat", "flying mammal").unwrap(),
        ];
        let placements = [
            Placement::new(0, Position::new(1, 0), Direction::Across, 3),
            Placement::new(1, Position::new(0, 1), Direction::Down, 3),
        ];
        let numbered = number_placements(&placements);
        let legend = Legend::new(&numbered, &words);
        assert_eq!(legend.len(), 2);

        let lines = legend.clone().map(|entry| entry.to_string()).collect::<Vec<_>>();
        assert_eq!(lines, ["1.down 1,2 3: flying mammal", "2.across 2,1 3: feline"]);

        let across = legend.only(Direction::Across).collect::<Vec<_>>();
        assert_eq!(across.len(), 1);
        assert_eq!(across[0].answer(), "CAT");
        assert_eq!(across[0].number(), 2);
    }

    #[test]
    fn test_empty_placements() {
        assert!(number_placements(&[]).is_empty());
    }
}

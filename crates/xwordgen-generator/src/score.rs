use xwordgen_core::{Grid, Placement};

use crate::ScoreMetric;

impl ScoreMetric {
    /// Scores a grid and the placements written into it.
    ///
    /// # Examples
    ///
    /// ```
    /// use xwordgen_core::{Direction, Grid, Placement, Position};
    /// use xwordgen_generator::ScoreMetric;
    ///
    /// let mut grid = Grid::new(5, 5)?;
    /// let across = Placement::new(0, Position::new(1, 0), Direction::Across, 3);
    /// let down = Placement::new(1, Position::new(0, 1), Direction::Down, 3);
    /// grid.place(&across, &['C', 'A', 'T'])?;
    /// grid.place(&down, &['B', 'A', 'T'])?;
    ///
    /// let placements = [across, down];
    /// assert_eq!(ScoreMetric::Words.score(&grid, &placements), 2);
    /// assert_eq!(ScoreMetric::Letters.score(&grid, &placements), 6);
    /// assert_eq!(ScoreMetric::FilledCells.score(&grid, &placements), 5);
    /// # Ok::<(), xwordgen_core::GridError>(())
    /// ```
    #[must_use]
    pub fn score(self, grid: &Grid, placements: &[Placement]) -> usize {
        match self {
            Self::Words => placements.len(),
            Self::Letters => placements.iter().map(|placement| placement.len).sum(),
            Self::FilledCells => grid.filled_count(),
        }
    }

    /// Returns `true` if placing every candidate is guaranteed to be optimal.
    ///
    /// The search stops early once a cycle places the whole pool under such
    /// a metric.
    #[must_use]
    pub(crate) fn saturates_when_all_placed(self) -> bool {
        match self {
            Self::Words | Self::Letters => true,
            Self::FilledCells => false,
        }
    }
}

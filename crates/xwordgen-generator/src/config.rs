//! Construction settings.

use xwordgen_core::Position;

use crate::CrosswordSeed;

/// Settings for a [`Crossword`](crate::Crossword) session.
///
/// The defaults build a 25×25 grid with `-` as the blocked marker, accept up
/// to 5000 candidates, enforce [`AdjacencyRule::Strict`] and score results by
/// word count.
///
/// # Examples
///
/// ```
/// use xwordgen_generator::{AdjacencyRule, CrosswordConfig, ScoreMetric};
///
/// let config = CrosswordConfig::new(15, 10)
///     .with_blocked_marker('#')
///     .with_adjacency(AdjacencyRule::Loose)
///     .with_score(ScoreMetric::Letters);
/// assert_eq!(config.width, 15);
/// assert_eq!(config.height, 10);
/// assert_eq!(config.unfilled_marker, '.');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Token rendered for blocked cells.
    pub blocked_marker: char,
    /// Token rendered for open cells that hold no letter.
    pub unfilled_marker: char,
    /// Largest candidate pool accepted; longer lists are truncated.
    pub max_candidates: usize,
    /// Cells blocked before construction starts.
    pub blocked_cells: Vec<Position>,
    /// Legality rule for letters abutting other words.
    pub adjacency: AdjacencyRule,
    /// Metric used to pick the best cycle.
    pub score: ScoreMetric,
    /// Where the first word of each cycle goes.
    pub seed_placement: SeedPlacement,
    /// Try longer answers first within each shuffled cycle order.
    pub longest_first: bool,
    /// Allow words that cross nothing when no crossing position exists.
    pub allow_isolated: bool,
    /// Stop after this many cycles even if time remains.
    pub max_cycles: Option<u64>,
    /// Fixed seed for reproducible construction; random when `None`.
    pub seed: Option<CrosswordSeed>,
}

impl Default for CrosswordConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            blocked_marker: '-',
            unfilled_marker: '.',
            max_candidates: 5000,
            blocked_cells: Vec::new(),
            adjacency: AdjacencyRule::default(),
            score: ScoreMetric::default(),
            seed_placement: SeedPlacement::default(),
            longest_first: true,
            allow_isolated: true,
            max_cycles: None,
            seed: None,
        }
    }
}

impl CrosswordConfig {
    /// Creates a default configuration with the given grid size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the blocked-cell marker.
    #[must_use]
    pub fn with_blocked_marker(mut self, marker: char) -> Self {
        self.blocked_marker = marker;
        self
    }

    /// Sets the unfilled-cell marker.
    #[must_use]
    pub fn with_unfilled_marker(mut self, marker: char) -> Self {
        self.unfilled_marker = marker;
        self
    }

    /// Sets the candidate pool limit.
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Sets the cells blocked before construction.
    #[must_use]
    pub fn with_blocked_cells(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.blocked_cells = cells.into_iter().collect();
        self
    }

    /// Sets the adjacency rule.
    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyRule) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Sets the score metric.
    #[must_use]
    pub fn with_score(mut self, score: ScoreMetric) -> Self {
        self.score = score;
        self
    }

    /// Sets the first-word placement.
    #[must_use]
    pub fn with_seed_placement(mut self, seed_placement: SeedPlacement) -> Self {
        self.seed_placement = seed_placement;
        self
    }

    /// Enables or disables longest-first ordering.
    #[must_use]
    pub fn with_longest_first(mut self, longest_first: bool) -> Self {
        self.longest_first = longest_first;
        self
    }

    /// Enables or disables placements that cross no other word.
    #[must_use]
    pub fn with_allow_isolated(mut self, allow_isolated: bool) -> Self {
        self.allow_isolated = allow_isolated;
        self
    }

    /// Caps the number of restart cycles.
    #[must_use]
    pub fn with_max_cycles(mut self, max_cycles: Option<u64>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: CrosswordSeed) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Rule deciding when letters of a new word may touch existing letters.
///
/// Under every rule a word must stay inside the grid, avoid blocked cells,
/// match letters it crosses, never run along a cell already used in the same
/// direction, and have no letter directly before its first or after its last
/// cell. Off-grid neighbours count as clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdjacencyRule {
    /// Each newly written letter must have no letter on either perpendicular
    /// side. Crossing cells are exempt. Prevents accidental two-letter words.
    #[default]
    Strict,
    /// Only the end and conflict checks apply; letters may sit side by side.
    Loose,
}

/// Metric used to compare the results of restart cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScoreMetric {
    /// Number of placed words.
    #[default]
    Words,
    /// Total length of the placed answers; favors longer words.
    Letters,
    /// Number of distinct letter cells; favors denser grids.
    FilledCells,
}

/// Where the first word of each cycle is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeedPlacement {
    /// The top-left corner, in a random direction.
    #[default]
    TopLeft,
    /// Centered in the grid, in a random direction.
    Center,
}

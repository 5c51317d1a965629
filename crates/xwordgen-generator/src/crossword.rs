//! The construction session and its read-only views.

use std::time::Duration;

use xwordgen_core::{Cell, Grid, GridLines, Position, WordEntry};

use crate::{
    Clock, ConfigError, CrosswordConfig, CrosswordSeed, Legend, NumberedPlacement, SearchStats,
    SystemClock, number_placements,
    search::{Attempt, Search},
};

/// One rendered cell of a grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Token {
    /// A blocked or unfilled marker.
    #[display("{_0}")]
    Marker(char),
    /// A placed letter.
    #[display("{_0}")]
    Letter(char),
    /// The clue number of a word start.
    #[display("{_0}")]
    Number(u32),
}

/// A crossword construction session.
///
/// A session owns the candidate pool and the grid. [`compute_crossword`]
/// searches for a good set of placements and keeps the best one found; the
/// views ([`display`], [`solution`], [`puzzle`], [`legend`]) read the kept
/// result.
///
/// [`compute_crossword`]: Crossword::compute_crossword
/// [`display`]: Crossword::display
/// [`solution`]: Crossword::solution
/// [`puzzle`]: Crossword::puzzle
/// [`legend`]: Crossword::legend
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use xwordgen_generator::{Crossword, CrosswordConfig};
///
/// let words = [("CAT", "feline"), ("DOG", "canine")];
/// let mut crossword = Crossword::new(CrosswordConfig::default(), words)?;
/// crossword.compute_crossword(Duration::from_secs(1), 2);
///
/// assert_eq!(crossword.placed_count(), 2);
/// for line in crossword.legend() {
///     println!("{line}");
/// }
/// # Ok::<(), xwordgen_generator::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crossword {
    config: CrosswordConfig,
    words: Vec<WordEntry>,
    template: Grid,
    seed: CrosswordSeed,
    best: Attempt,
    numbered: Vec<NumberedPlacement>,
    stats: SearchStats,
}

impl Crossword {
    /// Creates a session from a configuration and `(answer, clue)` pairs.
    ///
    /// Pools longer than [`CrosswordConfig::max_candidates`] are truncated to
    /// their first entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimensions or markers are invalid, a
    /// pre-blocked cell lies outside the grid, or an answer is empty or
    /// contains a marker.
    pub fn new<I, A, C>(config: CrosswordConfig, words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: Into<String>,
    {
        let CrosswordConfig {
            width,
            height,
            blocked_marker: blocked,
            unfilled_marker: unfilled,
            max_candidates,
            ..
        } = config;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if max_candidates == 0 {
            return Err(ConfigError::ZeroMaxCandidates);
        }
        if blocked.is_whitespace() || unfilled.is_whitespace() || blocked == unfilled {
            return Err(ConfigError::InvalidMarkers { blocked, unfilled });
        }

        let mut entries = Vec::new();
        let mut dropped = 0_usize;
        for (index, (answer, clue)) in words.into_iter().enumerate() {
            if index >= max_candidates {
                dropped += 1;
                continue;
            }
            let entry = WordEntry::new(answer, clue)
                .map_err(|source| ConfigError::InvalidWord { index, source })?;
            if let Some(marker) = [blocked, unfilled]
                .into_iter()
                .find(|&marker| entry.letters().contains(&marker))
            {
                return Err(ConfigError::MarkerInAnswer {
                    index,
                    answer: entry.answer().to_owned(),
                    marker,
                });
            }
            entries.push(entry);
        }
        if dropped > 0 {
            log::warn!("candidate pool truncated to {max_candidates} words, {dropped} dropped");
        }

        let template = Grid::with_blocked(height, width, config.blocked_cells.iter().copied())?;
        let seed = config.seed.unwrap_or_else(CrosswordSeed::random);
        log::debug!(
            "{width}x{height} session with {} candidates, seed {seed}",
            entries.len()
        );

        Ok(Self {
            best: Attempt::new(&template),
            config,
            words: entries,
            template,
            seed,
            numbered: Vec::new(),
            stats: SearchStats::default(),
        })
    }

    /// Searches for placements until `time_budget` of wall-clock time has
    /// passed.
    ///
    /// Each restart cycle traverses the candidate pool `spins` times (at least
    /// once). Calling this again continues the search and keeps the better of
    /// the old and new results. An empty result is valid.
    pub fn compute_crossword(&mut self, time_budget: Duration, spins: usize) {
        let mut clock = SystemClock::start();
        self.compute_crossword_with_clock(&mut clock, time_budget, spins);
    }

    /// Like [`compute_crossword`](Self::compute_crossword), measuring the
    /// budget with `clock`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use xwordgen_generator::{Crossword, CrosswordConfig, StepClock};
    ///
    /// let mut crossword = Crossword::new(CrosswordConfig::new(9, 9), [("EMU", "bird")])?;
    /// let mut clock = StepClock::new(Duration::from_millis(1));
    /// crossword.compute_crossword_with_clock(&mut clock, Duration::ZERO, 1);
    /// assert_eq!(crossword.placed_count(), 0);
    /// assert_eq!(crossword.cycles(), 0);
    /// # Ok::<(), xwordgen_generator::ConfigError>(())
    /// ```
    pub fn compute_crossword_with_clock<C>(
        &mut self,
        clock: &mut C,
        time_budget: Duration,
        spins: usize,
    ) where
        C: Clock + ?Sized,
    {
        let search = Search {
            template: &self.template,
            words: &self.words,
            config: &self.config,
            seed: self.seed,
        };
        search.run(clock, time_budget, spins, &mut self.best, &mut self.stats);
        self.numbered = number_placements(&self.best.placements);
    }

    /// Discards the kept result and the statistics.
    pub fn reset(&mut self) {
        self.best = Attempt::new(&self.template);
        self.numbered.clear();
        self.stats = SearchStats::default();
    }

    /// Renders the grid: blocked cells as the blocked marker, open cells as
    /// the unfilled marker, letters as themselves.
    #[must_use]
    pub fn display(&self) -> GridLines<'_, impl Fn(Position, Cell) -> Token + Clone> {
        let (blocked, unfilled) = (self.config.blocked_marker, self.config.unfilled_marker);
        self.best.grid.lines(move |_, cell| match cell {
            Cell::Blocked => Token::Marker(blocked),
            Cell::Open => Token::Marker(unfilled),
            Cell::Letter(ch) => Token::Letter(ch),
        })
    }

    /// Renders the answers: letters as themselves, every other cell as the
    /// blocked marker.
    #[must_use]
    pub fn solution(&self) -> GridLines<'_, impl Fn(Position, Cell) -> Token + Clone> {
        let blocked = self.config.blocked_marker;
        self.best.grid.lines(move |_, cell| match cell {
            Cell::Letter(ch) => Token::Letter(ch),
            Cell::Blocked | Cell::Open => Token::Marker(blocked),
        })
    }

    /// Renders the blank puzzle: word starts as their clue numbers, other
    /// letter cells as the unfilled marker, every other cell as the blocked
    /// marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use xwordgen_generator::{Crossword, CrosswordConfig};
    ///
    /// let mut crossword = Crossword::new(CrosswordConfig::new(3, 1), [("SUN", "star")])?;
    /// crossword.compute_crossword(Duration::from_secs(1), 1);
    /// assert_eq!(crossword.puzzle().to_string(), "1 . .\n");
    /// # Ok::<(), xwordgen_generator::ConfigError>(())
    /// ```
    #[must_use]
    pub fn puzzle(&self) -> GridLines<'_, impl Fn(Position, Cell) -> Token + Clone> {
        let (blocked, unfilled) = (self.config.blocked_marker, self.config.unfilled_marker);
        let numbered = self.numbered.as_slice();
        self.best.grid.lines(move |pos, cell| {
            if !cell.is_letter() {
                return Token::Marker(blocked);
            }
            // Numbers grow with start positions, so the list is sorted by start.
            match numbered.binary_search_by_key(&pos, |n| n.placement.start) {
                Ok(i) => Token::Number(numbered[i].number),
                Err(_) => Token::Marker(unfilled),
            }
        })
    }

    /// Returns the clue legend in number order.
    #[must_use]
    pub fn legend(&self) -> Legend<'_> {
        Legend::new(&self.numbered, &self.words)
    }

    /// Returns the accepted placements with their numbers, in legend order.
    #[must_use]
    pub fn placements(&self) -> &[NumberedPlacement] {
        &self.numbered
    }

    /// Returns the accepted words in legend order.
    #[must_use]
    pub fn placed_words(&self) -> impl Iterator<Item = &WordEntry> + '_ {
        self.numbered
            .iter()
            .map(|numbered| &self.words[numbered.placement.word])
    }

    /// Returns the number of accepted words.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.numbered.len()
    }

    /// Returns the number of candidates in the pool, after truncation.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the candidate pool.
    #[must_use]
    pub fn candidates(&self) -> &[WordEntry] {
        &self.words
    }

    /// Returns the number of restart cycles run so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.stats.cycles()
    }

    /// Returns the search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the seed driving the search.
    #[must_use]
    pub fn seed(&self) -> CrosswordSeed {
        self.seed
    }

    /// Returns the kept grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.best.grid
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &CrosswordConfig {
        &self.config
    }
}

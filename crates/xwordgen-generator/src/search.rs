//! Deadline-bounded restart search.
//!
//! Every cycle starts from a clone of the template grid and its own random
//! stream, walks the shuffled candidate pool and greedily commits the best
//! legal slot for each word. The best-scoring cycle is kept; later cycles
//! replace it only with a strictly higher score.

use std::{cmp::Reverse, time::Duration};

use rand::{Rng, seq::SliceRandom as _};
use xwordgen_core::{Direction, Grid, Placement, Position, WordEntry};

use crate::{
    Clock, CrosswordConfig, CrosswordSeed,
    fit::{best_slot, crossing_slots, fit_score, seed_slots, shuffled_slots},
};

/// A grid together with the placements written into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Attempt {
    pub(crate) grid: Grid,
    pub(crate) placements: Vec<Placement>,
}

impl Attempt {
    pub(crate) fn new(template: &Grid) -> Self {
        Self {
            grid: template.clone(),
            placements: Vec::new(),
        }
    }
}

/// Counters describing the searches run by a session.
///
/// Cycle and attempt counts accumulate over every call to
/// [`Crossword::compute_crossword`](crate::Crossword::compute_crossword).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    cycles: u64,
    attempts: u64,
    best_cycle: Option<u64>,
    best_score: Option<usize>,
    elapsed: Duration,
    deadline_hit: bool,
}

impl SearchStats {
    /// Returns the number of restart cycles started.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the number of candidate placement attempts.
    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Returns the index of the cycle that produced the kept result.
    #[must_use]
    pub fn best_cycle(&self) -> Option<u64> {
        self.best_cycle
    }

    /// Returns the score of the kept result.
    #[must_use]
    pub fn best_score(&self) -> Option<usize> {
        self.best_score
    }

    /// Returns the clock time consumed by the searches.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` if the last search stopped at its deadline.
    #[must_use]
    pub fn deadline_hit(&self) -> bool {
        self.deadline_hit
    }
}

/// Inputs shared by every cycle of a search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Search<'a> {
    pub(crate) template: &'a Grid,
    pub(crate) words: &'a [WordEntry],
    pub(crate) config: &'a CrosswordConfig,
    pub(crate) seed: CrosswordSeed,
}

impl Search<'_> {
    /// Runs restart cycles until the budget is spent, updating `best` and
    /// `stats` in place.
    pub(crate) fn run<C>(
        &self,
        clock: &mut C,
        budget: Duration,
        spins: usize,
        best: &mut Attempt,
        stats: &mut SearchStats,
    ) where
        C: Clock + ?Sized,
    {
        let longest = self.template.rows().max(self.template.cols());
        let placeable = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| word.len() <= longest)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        if placeable.len() < self.words.len() {
            log::debug!(
                "{} candidates are longer than the grid and will be skipped",
                self.words.len() - placeable.len()
            );
        }

        let metric = self.config.score;
        let mut run_cycles = 0;
        stats.deadline_hit = false;
        let elapsed = loop {
            let now = clock.elapsed();
            if now >= budget {
                stats.deadline_hit = true;
                break now;
            }
            if self.config.max_cycles.is_some_and(|max| run_cycles >= max) {
                break now;
            }

            let cycle = stats.cycles;
            stats.cycles += 1;
            run_cycles += 1;

            let mut rng = self.seed.cycle_rng(cycle);
            let (attempt, expired) =
                self.cycle(&placeable, &mut rng, clock, budget, spins, &mut stats.attempts);
            let score = metric.score(&attempt.grid, &attempt.placements);
            if stats.best_score.is_none_or(|best_score| score > best_score) {
                log::debug!(
                    "cycle {cycle}: score {score} with {} words",
                    attempt.placements.len()
                );
                stats.best_score = Some(score);
                stats.best_cycle = Some(cycle);
                *best = attempt;
            }

            if expired {
                stats.deadline_hit = true;
                break clock.elapsed();
            }
            if metric.saturates_when_all_placed() && best.placements.len() == placeable.len() {
                break clock.elapsed();
            }
        };
        stats.elapsed = stats.elapsed.saturating_add(elapsed);

        log::info!(
            "search finished after {run_cycles} cycles: {} of {} words placed{}",
            best.placements.len(),
            self.words.len(),
            if stats.deadline_hit { " (deadline)" } else { "" }
        );
    }

    /// Runs one restart cycle. The flag is `true` if the deadline expired
    /// before the cycle finished.
    fn cycle<C, R>(
        &self,
        placeable: &[usize],
        rng: &mut R,
        clock: &mut C,
        budget: Duration,
        spins: usize,
        attempts: &mut u64,
    ) -> (Attempt, bool)
    where
        C: Clock + ?Sized,
        R: Rng + ?Sized,
    {
        let mut order = placeable.to_vec();
        order.shuffle(rng);
        if self.config.longest_first {
            order.sort_by_key(|&index| Reverse(self.words[index].len()));
        }
        let slots = shuffled_slots(self.template, rng);

        let mut attempt = Attempt::new(self.template);
        let mut placed = vec![false; self.words.len()];
        for pass in 0..spins.max(1) {
            let mut progress = false;
            for &index in &order {
                if placed[index] {
                    continue;
                }
                if clock.elapsed() >= budget {
                    return (attempt, true);
                }
                *attempts += 1;
                if self.try_place(index, &mut attempt, &slots, rng) {
                    placed[index] = true;
                    progress = true;
                }
            }
            if !progress {
                log::trace!("pass {pass} placed nothing, ending cycle");
                break;
            }
        }
        (attempt, false)
    }

    /// Writes word `index` into the best available slot.
    ///
    /// Returns `false` if the word fits nowhere.
    fn try_place<R>(
        &self,
        index: usize,
        attempt: &mut Attempt,
        slots: &[(Position, Direction)],
        rng: &mut R,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        let word = &self.words[index];
        let letters = word.letters();
        let rule = self.config.adjacency;
        let grid = &attempt.grid;
        let fits = |&(start, direction): &(Position, Direction)| {
            fit_score(grid, letters, start, direction, rule).is_some()
        };

        let target = if grid.is_blank() {
            seed_slots(grid, letters.len(), self.config.seed_placement, rng)
                .into_iter()
                .chain(slots.iter().copied())
                .find(fits)
        } else {
            best_slot(crossing_slots(grid, letters, rule), rng)
                .map(|slot| (slot.start, slot.direction))
                .or_else(|| {
                    self.config
                        .allow_isolated
                        .then(|| slots.iter().copied().find(fits))
                        .flatten()
                })
        };

        let Some((start, direction)) = target else {
            log::trace!("no slot for {}", word.answer());
            return false;
        };
        let placement = Placement::new(index, start, direction, letters.len());
        match attempt.grid.place(&placement, letters) {
            Ok(()) => {
                attempt.placements.push(placement);
                true
            }
            Err(err) => {
                log::trace!("rejected {}: {err}", word.answer());
                false
            }
        }
    }
}

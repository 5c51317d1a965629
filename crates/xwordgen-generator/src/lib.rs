//! Crossword construction engine.
//!
//! Given a grid size and a pool of `(answer, clue)` pairs, a [`Crossword`]
//! session runs a deadline-bounded randomized restart search that places as
//! many mutually consistent answers as it can, then exposes the result as
//! text views and a numbered clue legend.
//!
//! # Overview
//!
//! - [`CrosswordConfig`] holds the grid size, markers, candidate limit and
//!   search policies ([`AdjacencyRule`], [`ScoreMetric`], [`SeedPlacement`]).
//! - [`Crossword::compute_crossword`] searches until its time budget is
//!   spent. Each restart cycle draws its own random stream from the session
//!   [`CrosswordSeed`], so a fixed seed and a deterministic [`Clock`] such as
//!   [`StepClock`] reproduce a run exactly.
//! - [`Crossword::display`], [`Crossword::solution`] and
//!   [`Crossword::puzzle`] render the grid row by row; [`Crossword::legend`]
//!   lists the clues in number order.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use xwordgen_core::Direction;
//! use xwordgen_generator::{Crossword, CrosswordConfig, CrosswordSeed};
//!
//! let config = CrosswordConfig::new(9, 9).with_seed(CrosswordSeed::from_bytes([1; 32]));
//! let words = [("OTTER", "river swimmer"), ("TIGER", "striped cat"), ("EMU", "flightless bird")];
//! let mut crossword = Crossword::new(config, words)?;
//! crossword.compute_crossword(Duration::from_secs(1), 2);
//!
//! println!("{}", crossword.display());
//! for entry in crossword.legend().only(Direction::Across) {
//!     println!("{entry}");
//! }
//! println!("{} out of {}", crossword.placed_count(), crossword.candidate_count());
//! # Ok::<(), xwordgen_generator::ConfigError>(())
//! ```

pub use self::{
    clock::{Clock, StepClock, SystemClock},
    config::{AdjacencyRule, CrosswordConfig, ScoreMetric, SeedPlacement},
    crossword::{Crossword, Token},
    error::ConfigError,
    numbering::{Legend, LegendEntry, NumberedPlacement, number_placements},
    search::SearchStats,
    seed::{CrosswordSeed, ParseSeedError},
};

mod clock;
mod config;
mod crossword;
mod error;
mod fit;
mod numbering;
mod score;
mod search;
mod seed;

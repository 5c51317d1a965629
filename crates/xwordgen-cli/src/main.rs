//! Command-line crossword builder.
//!
//! Reads a word list, runs the construction search and prints the grid, the
//! answers, the numbered puzzle and the clue legend.

use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, TryFromFloatSecsError},
};

use clap::{Parser, ValueEnum};
use xwordgen_core::Direction;
use xwordgen_generator::{
    AdjacencyRule, ConfigError, Crossword, CrosswordConfig, CrosswordSeed, ScoreMetric,
    SeedPlacement,
};

use self::word_list::WordListError;

mod word_list;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AdjacencyArg {
    Strict,
    Loose,
}

impl From<AdjacencyArg> for AdjacencyRule {
    fn from(arg: AdjacencyArg) -> Self {
        match arg {
            AdjacencyArg::Strict => Self::Strict,
            AdjacencyArg::Loose => Self::Loose,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScoreArg {
    Words,
    Letters,
    FilledCells,
}

impl From<ScoreArg> for ScoreMetric {
    fn from(arg: ScoreArg) -> Self {
        match arg {
            ScoreArg::Words => Self::Words,
            ScoreArg::Letters => Self::Letters,
            ScoreArg::FilledCells => Self::FilledCells,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeedPlacementArg {
    TopLeft,
    Center,
}

impl From<SeedPlacementArg> for SeedPlacement {
    fn from(arg: SeedPlacementArg) -> Self {
        match arg {
            SeedPlacementArg::TopLeft => Self::TopLeft,
            SeedPlacementArg::Center => Self::Center,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word list with one `answer,clue` pair per line.
    #[arg(value_name = "WORDS")]
    words: PathBuf,

    /// Number of grid columns.
    #[arg(long, default_value_t = 25)]
    width: usize,

    /// Number of grid rows.
    #[arg(long, default_value_t = 25)]
    height: usize,

    /// Marker for blocked cells.
    #[arg(long, value_name = "CHAR", default_value_t = '-')]
    blocked: char,

    /// Marker for open cells without a letter.
    #[arg(long, value_name = "CHAR", default_value_t = '.')]
    unfilled: char,

    /// Search time budget in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 5.0)]
    time: f64,

    /// Passes over the word list per restart cycle.
    #[arg(long, default_value_t = 2)]
    spins: usize,

    /// Largest number of words taken from the list.
    #[arg(long, value_name = "COUNT", default_value_t = 5000)]
    max_candidates: usize,

    /// Seed (64 hex digits) for a reproducible search.
    #[arg(long)]
    seed: Option<CrosswordSeed>,

    /// Rule for letters touching neighbouring words.
    #[arg(long, value_enum, default_value = "strict")]
    adjacency: AdjacencyArg,

    /// Metric used to pick the best result.
    #[arg(long, value_enum, default_value = "words")]
    score: ScoreArg,

    /// Where the first word of each cycle is placed.
    #[arg(long, value_enum, default_value = "top-left")]
    seed_placement: SeedPlacementArg,

    /// Stop after this many restart cycles.
    #[arg(long, value_name = "COUNT")]
    max_cycles: Option<u64>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum Error {
    #[display("{_0}")]
    WordList(#[from] WordListError),
    #[display("{_0}")]
    Config(#[from] ConfigError),
    #[display("invalid time budget: {_0}")]
    Time(#[from] TryFromFloatSecsError),
}

impl Args {
    fn config(&self) -> CrosswordConfig {
        let mut config = CrosswordConfig::new(self.width, self.height)
            .with_blocked_marker(self.blocked)
            .with_unfilled_marker(self.unfilled)
            .with_max_candidates(self.max_candidates)
            .with_adjacency(self.adjacency.into())
            .with_score(self.score.into())
            .with_seed_placement(self.seed_placement.into())
            .with_max_cycles(self.max_cycles);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let budget = Duration::try_from_secs_f64(args.time)?;
    let words = word_list::load(&args.words)?;
    let total = words.len();

    let mut crossword = Crossword::new(args.config(), words)?;
    crossword.compute_crossword(budget, args.spins);

    println!("{}", crossword.display());
    println!("{}", crossword.solution());
    println!("{}", crossword.puzzle());
    for (title, direction) in [("Across", Direction::Across), ("Down", Direction::Down)] {
        println!("{title}:");
        for entry in crossword.legend().only(direction) {
            println!("  {entry}");
        }
        println!();
    }
    println!("{} out of {total}", crossword.placed_count());
    println!("cycles: {}", crossword.cycles());
    println!("seed: {}", crossword.seed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_config() {
        let args = Args::try_parse_from(["xwordgen", "words.csv"]).unwrap();
        assert_eq!(args.config(), CrosswordConfig::default());
        assert_eq!(args.spins, 2);
        assert!((args.time - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_options() {
        let seed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        let args = Args::try_parse_from([
            "xwordgen",
            "words.csv",
            "--width",
            "15",
            "--height",
            "11",
            "--blocked",
            "#",
            "--adjacency",
            "loose",
            "--score",
            "filled-cells",
            "--seed-placement",
            "center",
            "--max-cycles",
            "40",
            "--seed",
            seed,
        ])
        .unwrap();
        let config = args.config();
        assert_eq!((config.width, config.height), (15, 11));
        assert_eq!(config.blocked_marker, '#');
        assert_eq!(config.adjacency, AdjacencyRule::Loose);
        assert_eq!(config.score, ScoreMetric::FilledCells);
        assert_eq!(config.seed_placement, SeedPlacement::Center);
        assert_eq!(config.max_cycles, Some(40));
        assert_eq!(config.seed.map(|seed| seed.to_string()).as_deref(), Some(seed));
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        assert!(Args::try_parse_from(["xwordgen", "words.csv", "--seed", "xyz"]).is_err());
    }
}

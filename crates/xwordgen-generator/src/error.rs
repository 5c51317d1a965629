use xwordgen_core::{GridError, WordError};

/// Error returned when a [`Crossword`](crate::Crossword) cannot be set up.
///
/// Configuration errors are detected once, at construction; the search itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// Width or height is zero.
    #[display("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The candidate limit is zero.
    #[display("maximum candidate count must be positive")]
    ZeroMaxCandidates,
    /// A marker is whitespace or both markers are the same character.
    #[display("invalid markers: blocked {blocked:?}, unfilled {unfilled:?}")]
    InvalidMarkers {
        /// Blocked-cell marker.
        blocked: char,
        /// Unfilled-cell marker.
        unfilled: char,
    },
    /// The pre-blocked cells do not fit the grid.
    #[display("invalid blocked cells: {_0}")]
    Grid(#[from] GridError),
    /// A candidate answer could not be normalized.
    #[display("candidate #{index}: {source}")]
    InvalidWord {
        /// Index of the candidate in the input list.
        index: usize,
        /// Normalization failure.
        source: WordError,
    },
    /// A candidate answer contains a grid marker.
    #[display("candidate #{index} ({answer}) contains the marker {marker:?}")]
    MarkerInAnswer {
        /// Index of the candidate in the input list.
        index: usize,
        /// Normalized answer.
        answer: String,
        /// The marker found in the answer.
        marker: char,
    },
}

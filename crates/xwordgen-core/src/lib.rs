//! Core data structures for crossword construction.
//!
//! This crate provides the grid model shared by the construction engine and
//! its front ends.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`position`]: [`Position`] (row-major ordered cell
//!    coordinates) and [`Direction`] (across / down).
//! 2. **Cells** - [`cell`]: [`Cell`] contents (blocked, open, letter) and the
//!    [`Occupancy`] flags recording which word directions use a cell.
//! 3. **Grid** - [`grid`]: the fixed-size [`Grid`], consistency-checked word
//!    writes, and lazy line rendering through [`GridLines`].
//! 4. **Words** - [`word`]: normalized [`WordEntry`] answers with clues, and
//!    [`placement`]: [`Placement`] binding a word to a start cell and direction.
//!
//! # Examples
//!
//! ```
//! use xwordgen_core::{Direction, Grid, Placement, Position, WordEntry};
//!
//! let entry = WordEntry::new("cat", "feline")?;
//! let mut grid = Grid::new(5, 5)?;
//! let placement = Placement::new(0, Position::new(2, 1), Direction::Across, entry.len());
//! grid.place(&placement, entry.letters())?;
//!
//! let rendered = grid
//!     .lines(|_, cell| cell.letter().unwrap_or('.'))
//!     .nth(2);
//! assert_eq!(rendered.as_deref(), Some(". C A T ."));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod grid;
pub mod placement;
pub mod position;
pub mod word;

pub use self::{
    cell::{Cell, Occupancy},
    grid::{Grid, GridError, GridLines},
    placement::{Placement, PlacementPositions},
    position::{Direction, Position},
    word::{WordEntry, WordError},
};

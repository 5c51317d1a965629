//! The crossword grid.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::Index,
};

use crate::{Cell, Occupancy, Placement, Position};

/// Error returned when a grid operation would break grid invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid has a zero dimension.
    #[display("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A position lies outside the grid.
    #[display("position {pos} is outside the grid")]
    OutOfBounds {
        /// The offending position.
        pos: Position,
    },
    /// A word would cover a blocked cell.
    #[display("cell {pos} is blocked")]
    Blocked {
        /// The blocked cell.
        pos: Position,
    },
    /// A word would overwrite a different letter.
    #[display("cell {pos} holds {existing:?}, cannot place {letter:?}")]
    Conflict {
        /// The conflicting cell.
        pos: Position,
        /// Letter already in the cell.
        existing: char,
        /// Letter the word needs there.
        letter: char,
    },
    /// The letters supplied do not match the placement length.
    #[display("placement covers {expected} cells but {actual} letters were given")]
    LengthMismatch {
        /// Placement length.
        expected: usize,
        /// Number of letters given.
        actual: usize,
    },
}

/// A fixed-size grid of [`Cell`]s with per-cell direction occupancy.
///
/// Dimensions never change after construction. Cells only change through
/// [`Grid::place`], which refuses to overwrite a differing letter.
///
/// # Examples
///
/// ```
/// use xwordgen_core::{Cell, Direction, Grid, Placement, Position};
///
/// let mut grid = Grid::new(3, 4)?;
/// let placement = Placement::new(0, Position::new(1, 0), Direction::Across, 3);
/// grid.place(&placement, &['C', 'A', 'T'])?;
///
/// assert_eq!(grid[Position::new(1, 1)], Cell::Letter('A'));
/// assert_eq!(grid[Position::new(0, 0)], Cell::Open);
/// assert_eq!(grid.filled_count(), 3);
/// # Ok::<(), xwordgen_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    occupancy: Vec<Occupancy>,
}

impl Grid {
    /// Creates a grid with every cell [`Cell::Open`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let len = rows * cols;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Open; len],
            occupancy: vec![Occupancy::empty(); len],
        })
    }

    /// Creates an open grid and blocks the given cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] for a zero dimension and
    /// [`GridError::OutOfBounds`] for a blocked position outside the grid.
    pub fn with_blocked<I>(rows: usize, cols: usize, blocked: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Self::new(rows, cols)?;
        for pos in blocked {
            let i = grid.offset(pos).ok_or(GridError::OutOfBounds { pos })?;
            grid.cells[i] = Cell::Blocked;
        }
        Ok(grid)
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    fn offset(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// Returns the cell at `pos`, or `None` outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// Returns the directions of the words using the cell at `pos`.
    ///
    /// Positions outside the grid report no occupancy.
    #[must_use]
    #[inline]
    pub fn occupancy(&self, pos: Position) -> Occupancy {
        self.offset(pos)
            .map_or(Occupancy::empty(), |i| self.occupancy[i])
    }

    /// Returns `true` if `pos` is inside the grid and holds a letter.
    #[must_use]
    #[inline]
    pub fn has_letter(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_letter())
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_letter()).count()
    }

    /// Returns `true` if no cell holds a letter.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_letter())
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + Clone + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns an iterator over every letter cell in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.positions()
            .zip(&self.cells)
            .filter_map(|(pos, cell)| cell.letter().map(|ch| (pos, ch)))
    }

    /// Writes `letters` along `placement` and records its direction.
    ///
    /// Cells that already hold the same letter are shared (a crossing). The
    /// grid is left untouched if any cell would be out of bounds, blocked or
    /// conflicting.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`], [`GridError::OutOfBounds`],
    /// [`GridError::Blocked`] or [`GridError::Conflict`] without modifying
    /// the grid.
    pub fn place(&mut self, placement: &Placement, letters: &[char]) -> Result<(), GridError> {
        if placement.len != letters.len() {
            return Err(GridError::LengthMismatch {
                expected: placement.len,
                actual: letters.len(),
            });
        }
        let mut offsets = Vec::with_capacity(letters.len());
        for (pos, &letter) in placement.positions().zip(letters) {
            let i = self.offset(pos).ok_or(GridError::OutOfBounds { pos })?;
            match self.cells[i] {
                Cell::Blocked => return Err(GridError::Blocked { pos }),
                Cell::Letter(existing) if existing != letter => {
                    return Err(GridError::Conflict {
                        pos,
                        existing,
                        letter,
                    });
                }
                Cell::Letter(_) | Cell::Open => offsets.push(i),
            }
        }
        let flag = Occupancy::of(placement.direction);
        for (i, &letter) in offsets.into_iter().zip(letters) {
            self.cells[i] = Cell::Letter(letter);
            self.occupancy[i] |= flag;
        }
        Ok(())
    }

    /// Returns a line-per-row rendering of the grid.
    ///
    /// `render` maps each cell to its token; tokens are separated by a single
    /// space. The returned iterator is lazy and can be cloned to restart.
    ///
    /// # Examples
    ///
    /// ```
    /// use xwordgen_core::{Cell, Grid, Position};
    ///
    /// let grid = Grid::with_blocked(2, 3, [Position::new(0, 1)])?;
    /// let lines = grid
    ///     .lines(|_, cell| match cell {
    ///         Cell::Blocked => '#',
    ///         Cell::Open => '.',
    ///         Cell::Letter(ch) => ch,
    ///     })
    ///     .collect::<Vec<_>>();
    /// assert_eq!(lines, [". # .", ". . ."]);
    /// # Ok::<(), xwordgen_core::GridError>(())
    /// ```
    pub fn lines<F, T>(&self, render: F) -> GridLines<'_, F>
    where
        F: Fn(Position, Cell) -> T,
        T: Display,
    {
        GridLines {
            grid: self,
            render,
            front: 0,
            back: self.rows,
        }
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        let i = self
            .offset(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside the grid"));
        &self.cells[i]
    }
}

/// Lazy row-by-row rendering of a [`Grid`], created by [`Grid::lines`].
///
/// Each item is one row of space-separated tokens without a trailing line
/// break. [`Display`] writes the remaining rows, each followed by `\n`.
#[derive(Clone)]
pub struct GridLines<'g, F> {
    grid: &'g Grid,
    render: F,
    front: usize,
    back: usize,
}

impl<F, T> GridLines<'_, F>
where
    F: Fn(Position, Cell) -> T,
    T: Display,
{
    fn write_row(&self, row: usize, out: &mut impl fmt::Write) -> fmt::Result {
        for col in 0..self.grid.cols {
            if col > 0 {
                out.write_char(' ')?;
            }
            let pos = Position::new(row, col);
            write!(out, "{}", (self.render)(pos, self.grid[pos]))?;
        }
        Ok(())
    }

    fn row_string(&self, row: usize) -> String {
        let mut line = String::with_capacity(self.grid.cols * 2);
        // Writing into a String cannot fail.
        let _ = self.write_row(row, &mut line);
        line
    }
}

impl<F> fmt::Debug for GridLines<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridLines")
            .field("rows", &self.grid.rows)
            .field("cols", &self.grid.cols)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<F, T> Iterator for GridLines<'_, F>
where
    F: Fn(Position, Cell) -> T,
    T: Display,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let line = self.row_string(self.front);
        self.front += 1;
        Some(line)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<F, T> DoubleEndedIterator for GridLines<'_, F>
where
    F: Fn(Position, Cell) -> T,
    T: Display,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.row_string(self.back))
    }
}

impl<F, T> FusedIterator for GridLines<'_, F>
where
    F: Fn(Position, Cell) -> T,
    T: Display,
{
}

impl<F, T> ExactSizeIterator for GridLines<'_, F>
where
    F: Fn(Position, Cell) -> T,
    T: Display,
{
}

impl<F, T> Display for GridLines<'_, F>
where
    F: Fn(Position, Cell) -> T,
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.front..self.back {
            self.write_row(row, f)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

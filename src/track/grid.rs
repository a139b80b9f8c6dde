//! Rectangular character grid and the coordinates used to walk it
//!
//! [`Grid::parse`] is the only way raw text enters the walker. It never fails:
//! any text produces a rectangular grid, and whether that grid is a valid track
//! is decided later by the engine.

use super::cell::{classify, CellKind};
use std::fmt;

/// Zero-indexed cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

/// Direction of travel.
///
/// At most one axis is nonzero. [`Heading::IDLE`] means "not moving yet" and is
/// only held before the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading {
    pub d_row: i8,
    pub d_col: i8,
}

impl Heading {
    pub const IDLE: Heading = Heading { d_row: 0, d_col: 0 };
    pub const LEFT: Heading = Heading { d_row: 0, d_col: -1 };
    pub const RIGHT: Heading = Heading { d_row: 0, d_col: 1 };
    pub const UP: Heading = Heading { d_row: -1, d_col: 0 };
    pub const DOWN: Heading = Heading { d_row: 1, d_col: 0 };

    /// Candidate order used when a heading has to be recomputed
    pub const CARDINAL: [Heading; 4] = [Heading::LEFT, Heading::RIGHT, Heading::UP, Heading::DOWN];

    pub fn is_idle(self) -> bool {
        self == Heading::IDLE
    }

    pub fn reverse(self) -> Heading {
        Heading {
            d_row: -self.d_row,
            d_col: -self.d_col,
        }
    }

    /// Arrow glyph for display
    pub fn arrow(self) -> char {
        match (self.d_row, self.d_col) {
            (0, -1) => '←',
            (0, 1) => '→',
            (-1, 0) => '↑',
            (1, 0) => '↓',
            _ => '·',
        }
    }
}

impl Default for Heading {
    fn default() -> Self {
        Heading::IDLE
    }
}

/// A track as a rectangular grid of characters.
///
/// Every row has exactly [`Grid::width`] characters; short rows are padded with
/// spaces when the grid is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Normalize raw track text into a grid.
    ///
    /// Rows are split on `\n` (a trailing `\r` is dropped). An empty first row,
    /// left over from a leading line break, is discarded.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        if lines.first().is_some_and(|line| line.is_empty()) {
            lines.remove(0);
        }

        Grid::from_rows(lines.into_iter().map(|line| line.chars().collect()).collect())
    }

    /// Build a grid from ragged rows, padding each row on the right with blanks
    pub fn from_rows(mut rows: Vec<Vec<char>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Grid { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.height() * self.width
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn contains(&self, at: Position) -> bool {
        at.row < self.height() && at.col < self.width
    }

    pub fn get(&self, at: Position) -> Option<char> {
        self.rows.get(at.row).and_then(|row| row.get(at.col)).copied()
    }

    /// Kind of the cell at `at`; anything off the grid reads as Blank
    pub fn kind_at(&self, at: Position) -> CellKind {
        self.get(at).map_or(CellKind::Blank, classify)
    }

    /// Neighbour of `at` one step along `heading`, if it is on the grid.
    ///
    /// An idle heading yields `at` itself.
    pub fn offset(&self, at: Position, heading: Heading) -> Option<Position> {
        let row = at.row.checked_add_signed(isize::from(heading.d_row))?;
        let col = at.col.checked_add_signed(isize::from(heading.d_col))?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// All positions whose cell kind satisfies `pred`, in row-major order
    pub fn positions_where<F>(&self, pred: F) -> Vec<Position>
    where
        F: Fn(CellKind) -> bool,
    {
        let pred = &pred;
        self.rows
            .iter()
            .enumerate()
            .flat_map(move |(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(move |&(_, &c)| pred(classify(c)))
                    .map(move |(col, _)| Position::new(row, col))
            })
            .collect()
    }

    pub fn contains_kind(&self, kind: CellKind) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|&c| classify(c) == kind)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

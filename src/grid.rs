use std::ops::Index;

use crate::error::ParseError;

/// `(row, col)`
pub type Position = (usize, usize);
/// `(d_row, d_col)`
pub type Direction = (isize, isize);

pub const UP: Direction = (-1, 0);
pub const DOWN: Direction = (1, 0);
pub const LEFT: Direction = (0, -1);
pub const RIGHT: Direction = (0, 1);
pub const UP_LEFT: Direction = (-1, -1);
pub const UP_RIGHT: Direction = (-1, 1);
pub const DOWN_LEFT: Direction = (1, -1);
pub const DOWN_RIGHT: Direction = (1, 1);

pub const DIRECTIONS: [Direction; 8] = [
    UP, DOWN, LEFT, RIGHT, UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT,
];

/// A rectangular grid: every row has the same, non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T>(Vec<Vec<T>>);

impl Grid<char> {
    /// One row per line. Surrounding blank lines are ignored.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::from_rows(
            input
                .trim()
                .lines()
                .map(|line| line.chars().collect())
                .collect(),
        )
    }
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ParseError> {
        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ParseError::EmptyGrid),
        };
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ParseError::RaggedRow {
                line: i + 1,
                expected: width,
                found: row.len(),
            });
        }
        Ok(Grid(rows))
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    pub fn cols(&self) -> usize {
        self.0.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.0.iter().map(|row| row.as_slice())
    }

    pub fn get(&self, (row, col): Position) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// The cell `steps` moves away from `start` along `dir`, if it is on the grid.
    pub fn step(&self, (row, col): Position, (dr, dc): Direction, steps: usize) -> Option<Position> {
        let steps = isize::try_from(steps).ok()?;
        let row = row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = col.checked_add_signed(dc.checked_mul(steps)?)?;
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): Position) -> &Self::Output {
        &self.0[row][col]
    }
}

use super::constants::ASCII_LETTER_A;
use anyhow::{anyhow, Result};
use std::fmt::{self};
use std::str::FromStr;

/// A cell on the board. Row 0 is the top edge and column 0 the left edge.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `direction`, or `None` when it would fall off the top or left edge.
    /// Stepping off the bottom or right edge is only detectable with the board size.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;

        Some(Self::new(row, col))
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    pub fn chebyshev_distance(&self, row: usize, col: usize) -> usize {
        self.row.abs_diff(row).max(self.col.abs_diff(col))
    }

    /// Parses the leading `<column letter><row number>` of `s`, returning the unparsed remainder.
    pub(crate) fn parse_prefix(s: &str) -> Result<(Self, &str)> {
        let mut chars = s.char_indices();
        let (_, column) = chars
            .next()
            .ok_or_else(|| anyhow!("Expected a column letter"))?;

        if !column.is_ascii_lowercase() {
            return Err(anyhow!("Invalid column {:?} in {:?}", column, s));
        }

        let digits_start = column.len_utf8();
        let digits_end = s[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .map(|i| i + digits_start)
            .unwrap_or(s.len());

        let row_number = s[digits_start..digits_end]
            .parse::<usize>()
            .map_err(|_| anyhow!("Invalid row in {:?}", s))?;

        if row_number == 0 {
            return Err(anyhow!("Rows are numbered from 1 in {:?}", s));
        }

        let col = (column as u8 - ASCII_LETTER_A) as usize;

        Ok((Self::new(row_number - 1, col), &s[digits_end..]))
    }

    pub(crate) fn column_letter(&self) -> char {
        (ASCII_LETTER_A + self.col as u8) as char
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, rest) = Self::parse_prefix(s)?;

        if !rest.is_empty() {
            return Err(anyhow!("Unexpected trailing {:?} in {:?}", rest, s));
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The four cardinal directions in the order moves are generated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The two side-step directions tried when a straight jump is not possible.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }
}

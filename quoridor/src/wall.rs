use super::Position;
use anyhow::anyhow;
use std::fmt::{self};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

impl WallOrientation {
    pub const ALL: [WallOrientation; 2] = [WallOrientation::Horizontal, WallOrientation::Vertical];

    fn suffix(&self) -> char {
        match self {
            WallOrientation::Horizontal => 'h',
            WallOrientation::Vertical => 'v',
        }
    }
}

/// A two cell long wall anchored at the intersection below and to the right of cell (`row`, `col`).
///
/// A horizontal wall runs under cells (`row`, `col`) and (`row`, `col + 1`).
/// A vertical wall runs to the right of cells (`row`, `col`) and (`row + 1`, `col`).
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Wall {
    pub row: usize,
    pub col: usize,
    pub orientation: WallOrientation,
}

impl Wall {
    pub fn new(row: usize, col: usize, orientation: WallOrientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, WallOrientation::Horizontal)
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, WallOrientation::Vertical)
    }

    pub fn anchor(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Collinear walls whose anchors are at most one apart share a segment, perpendicular walls
    /// on the same anchor cross.
    pub fn conflicts_with(&self, other: &Wall) -> bool {
        use WallOrientation::*;

        match (self.orientation, other.orientation) {
            (Horizontal, Horizontal) => self.row == other.row && self.col.abs_diff(other.col) <= 1,
            (Vertical, Vertical) => self.col == other.col && self.row.abs_diff(other.row) <= 1,
            (Horizontal, Vertical) | (Vertical, Horizontal) => {
                self.row == other.row && self.col == other.col
            }
        }
    }
}

impl FromStr for Wall {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (anchor, rest) = Position::parse_prefix(s)?;
        let orientation = match rest {
            "h" => WallOrientation::Horizontal,
            "v" => WallOrientation::Vertical,
            _ => return Err(anyhow!("Expected a trailing 'h' or 'v' in {:?}", s)),
        };

        Ok(Self::new(anchor.row, anchor.col, orientation))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.anchor(), self.orientation.suffix())
    }
}

impl fmt::Debug for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

use super::{Position, Wall, WallOrientation};
use std::fmt::{self};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActionKind {
    Move,
    Wall,
}

/// A single ply. Written as the destination cell (`e8`) or the wall anchor with its
/// orientation (`d4h`).
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub enum Action {
    MovePawn(Position),
    PlaceWall(Wall),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::MovePawn(_) => ActionKind::Move,
            Action::PlaceWall(_) => ActionKind::Wall,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.kind() == ActionKind::Wall
    }
}

impl From<Position> for Action {
    fn from(position: Position) -> Self {
        Action::MovePawn(position)
    }
}

impl From<Wall> for Action {
    fn from(wall: Wall) -> Self {
        Action::PlaceWall(wall)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, rest) = Position::parse_prefix(s)?;

        let orientation = match rest {
            "" => return Ok(Action::MovePawn(position)),
            "h" => WallOrientation::Horizontal,
            "v" => WallOrientation::Vertical,
            _ => return Err(anyhow::anyhow!("Invalid action {:?}", s)),
        };

        Ok(Action::PlaceWall(Wall::new(
            position.row,
            position.col,
            orientation,
        )))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::MovePawn(position) => write!(f, "{}", position),
            Action::PlaceWall(wall) => write!(f, "{}", wall),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

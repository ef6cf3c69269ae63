use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Player {
    /// Starts on the bottom row and races to row 0.
    Player1,
    /// Starts on the top row and races to the last row.
    Player2,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn goal_row(&self, board_size: usize) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => board_size - 1,
        }
    }

    pub fn start_row(&self, board_size: usize) -> usize {
        self.opponent().goal_row(board_size)
    }

    /// Number of rows `row` lies past the player's starting row.
    pub fn rows_advanced(&self, row: usize, board_size: usize) -> usize {
        match self {
            Player::Player1 => (board_size - 1) - row,
            Player::Player2 => row,
        }
    }

    /// The 1-based player number used by the `engine` traits.
    pub fn number(&self) -> usize {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }

    pub fn from_number(player: usize) -> Option<Self> {
        match player {
            1 => Some(Player::Player1),
            2 => Some(Player::Player2),
            _ => None,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

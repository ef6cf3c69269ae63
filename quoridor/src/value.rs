use serde::{Deserialize, Serialize};

use super::Player;

/// Outcome of a finished game from each player's perspective, indexed by player number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Value(pub [f32; 2]);

impl Value {
    pub fn new(values: [f32; 2]) -> Self {
        Self(values)
    }

    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Player1 => Self([1.0, 0.0]),
            Player::Player2 => Self([0.0, 1.0]),
        }
    }
}

impl engine::value::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player - 1]
    }
}

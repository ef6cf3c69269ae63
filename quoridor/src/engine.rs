use super::{Action, GameState, Value};
use engine::engine::{GameEngine, ValidActions};

/// Stateless adapter exposing the rules to generic game drivers.
#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Value = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let mut game_state = game_state.clone();
        game_state.take_action(action);
        game_state
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Value> {
        game_state.winner().map(Value::win_for)
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.current_player().number()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.move_number()
    }
}

impl ValidActions for Engine {
    type Action = Action;
    type State = GameState;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        let actions = if game_state.is_terminal() {
            Vec::new()
        } else {
            game_state.valid_actions().collect()
        };

        actions.into_iter()
    }
}

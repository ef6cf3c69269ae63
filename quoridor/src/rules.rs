use log::debug;

use super::board;
use super::constants::{BOARD_SIZE, NUM_WALLS_PER_PLAYER};
use super::{Action, GameState, Player, Position, RuleError, Wall};

/// What is needed to take back one ply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UndoRecord {
    Move {
        player: Player,
        from: Position,
        to: Position,
    },
    Wall {
        player: Player,
        wall: Wall,
    },
}

impl UndoRecord {
    pub fn action(&self) -> Action {
        match self {
            UndoRecord::Move { to, .. } => Action::MovePawn(*to),
            UndoRecord::Wall { wall, .. } => Action::PlaceWall(*wall),
        }
    }
}

/// Owns the canonical game and is the only way to change it. Every mutation is either applied
/// completely or refused with the reason and no change.
#[derive(Clone, Debug)]
pub struct RulesEngine {
    num_walls: usize,
    state: GameState,
    history: Vec<UndoRecord>,
}

impl RulesEngine {
    pub fn new(board_size: usize, num_walls: usize) -> Self {
        Self {
            num_walls,
            state: GameState::new(board_size, num_walls),
            history: Vec::new(),
        }
    }

    /// Starts from a set up position with an empty history.
    pub fn from_state(state: GameState) -> Self {
        let num_walls = state
            .player_1_walls_remaining()
            .max(state.player_2_walls_remaining());

        Self {
            num_walls,
            state,
            history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.state = GameState::new(self.state.board_size(), self.num_walls);
        self.history.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.history.iter().map(UndoRecord::action)
    }

    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        self.state.is_valid_position(row, col)
    }

    pub fn is_wall_between(&self, a: &Position, b: &Position) -> bool {
        self.state.is_wall_between(a, b)
    }

    /// Moves for `player`, or for the player to move when `None`.
    pub fn valid_moves(&self, player: Option<Player>) -> Vec<Position> {
        self.state
            .valid_moves(player.unwrap_or_else(|| self.state.current_player()))
    }

    pub fn can_place_wall(&self, wall: &Wall) -> bool {
        self.state.can_place_wall(wall)
    }

    pub fn check_wall(&self, wall: &Wall) -> Result<(), RuleError> {
        self.state.check_wall(wall)
    }

    pub fn all_valid_walls(&self) -> Vec<Wall> {
        self.state.valid_walls()
    }

    pub fn shortest_path_length(&self, from: &Position, player: Player) -> Option<usize> {
        self.state.shortest_path_length(from, player)
    }

    pub fn move_player(&mut self, to: Position) -> Result<(), RuleError> {
        self.ensure_in_progress()?;

        if !board::contains(self.state.board_size(), &to) {
            return Err(RuleError::OutOfBounds);
        }

        let player = self.state.current_player();
        if !self.state.valid_moves(player).contains(&to) {
            return Err(RuleError::IllegalMove(to));
        }

        let from = self.state.move_pawn(to);
        self.history.push(UndoRecord::Move { player, from, to });

        debug!("{} moved {} -> {}", player, from, to);

        if let Some(winner) = self.state.winner() {
            debug!("{} reached their goal row", winner);
        }

        Ok(())
    }

    pub fn place_wall(&mut self, wall: Wall) -> Result<(), RuleError> {
        self.ensure_in_progress()?;
        self.state.check_wall(&wall)?;

        let player = self.state.current_player();
        self.state.place_wall(wall);
        self.history.push(UndoRecord::Wall { player, wall });

        debug!("{} placed {}", player, wall);

        Ok(())
    }

    pub fn take_action(&mut self, action: &Action) -> Result<(), RuleError> {
        match action {
            Action::MovePawn(to) => self.move_player(*to),
            Action::PlaceWall(wall) => self.place_wall(*wall),
        }
    }

    /// Takes `action` only if it is `player`'s turn.
    pub fn take_action_for(&mut self, player: Player, action: &Action) -> Result<(), RuleError> {
        if self.state.current_player() != player {
            return Err(RuleError::NotCurrentPlayersTurn(player));
        }

        self.take_action(action)
    }

    /// Reverses the latest ply. The game is never terminal afterwards since only the undone move
    /// could have ended it.
    pub fn undo_move(&mut self) -> Result<(), RuleError> {
        let record = self.history.pop().ok_or(RuleError::NoHistoryToUndo)?;

        match record {
            UndoRecord::Move { player, from, .. } => self.state.unmove_pawn(player, from),
            UndoRecord::Wall { player, wall } => self.state.unplace_wall(player, &wall),
        }

        debug!("Undid {:?}", record);

        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), RuleError> {
        if self.state.is_terminal() {
            Err(RuleError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new(BOARD_SIZE, NUM_WALLS_PER_PLAYER)
    }
}

use std::collections::{HashSet, VecDeque};

use super::board;
use super::constants::{BOARD_SIZE, MAX_BOARD_SIZE, NUM_WALLS_PER_PLAYER};
use super::{Action, Direction, Player, Position, RuleError, Wall};
use engine::game_state;

/// A complete snapshot of a game. Cloning produces an independent copy, including the wall set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board_size: usize,
    player_1_pos: Position,
    player_2_pos: Position,
    player_1_walls_remaining: usize,
    player_2_walls_remaining: usize,
    walls: HashSet<Wall>,
    current_player: Player,
    terminal: bool,
    winner: Option<Player>,
    num_plies: usize,
}

impl GameState {
    /// Pawns start centered on opposite edges, Player1 on the bottom row and to move first.
    pub fn new(board_size: usize, num_walls: usize) -> Self {
        assert!(
            (2..=MAX_BOARD_SIZE).contains(&board_size),
            "Board size must be between 2 and {}",
            MAX_BOARD_SIZE
        );

        let center = board_size / 2;

        Self {
            board_size,
            player_1_pos: Position::new(Player::Player1.start_row(board_size), center),
            player_2_pos: Position::new(Player::Player2.start_row(board_size), center),
            player_1_walls_remaining: num_walls,
            player_2_walls_remaining: num_walls,
            walls: HashSet::new(),
            current_player: Player::Player1,
            terminal: false,
            winner: None,
            num_plies: 0,
        }
    }

    /// Places both pawns for a set up position. Terminal status follows from the new positions.
    pub fn with_positions(mut self, player_1_pos: Position, player_2_pos: Position) -> Self {
        assert!(board::contains(self.board_size, &player_1_pos));
        assert!(board::contains(self.board_size, &player_2_pos));
        assert_ne!(player_1_pos, player_2_pos, "Pawns may not share a cell");

        self.player_1_pos = player_1_pos;
        self.player_2_pos = player_2_pos;
        self.update_terminal();
        self
    }

    /// Adds walls for a set up position without charging either player's budget.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Wall>) -> Self {
        for wall in walls {
            assert!(board::is_valid_wall_anchor(self.board_size, &wall));
            assert!(
                !self.walls.iter().any(|w| w.conflicts_with(&wall)),
                "{:?} conflicts with a placed wall",
                wall
            );
            self.walls.insert(wall);
        }

        assert!(self.players_have_path(), "Every player needs a path to their goal");
        self
    }

    pub fn with_walls_remaining(mut self, player_1: usize, player_2: usize) -> Self {
        self.player_1_walls_remaining = player_1;
        self.player_2_walls_remaining = player_2;
        self
    }

    pub fn with_current_player(mut self, player: Player) -> Self {
        self.current_player = player;
        self
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn player_1_pos(&self) -> Position {
        self.player_1_pos
    }

    pub fn player_2_pos(&self) -> Position {
        self.player_2_pos
    }

    pub fn position(&self, player: Player) -> Position {
        match player {
            Player::Player1 => self.player_1_pos,
            Player::Player2 => self.player_2_pos,
        }
    }

    pub fn player_1_walls_remaining(&self) -> usize {
        self.player_1_walls_remaining
    }

    pub fn player_2_walls_remaining(&self) -> usize {
        self.player_2_walls_remaining
    }

    pub fn walls_remaining(&self, player: Player) -> usize {
        match player {
            Player::Player1 => self.player_1_walls_remaining,
            Player::Player2 => self.player_2_walls_remaining,
        }
    }

    pub fn walls(&self) -> &HashSet<Wall> {
        &self.walls
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn num_plies(&self) -> usize {
        self.num_plies
    }

    /// Full moves, starting at 1 and advancing each time Player1 is to move again.
    pub fn move_number(&self) -> usize {
        self.num_plies / 2 + 1
    }

    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        board::is_valid_position(self.board_size, row, col)
    }

    /// Whether a placed wall severs the edge between two adjacent cells.
    pub fn is_wall_between(&self, a: &Position, b: &Position) -> bool {
        board::blocking_wall_slots(a, b)
            .iter()
            .flatten()
            .any(|wall| self.walls.contains(wall))
    }

    /// Destinations for `player`, in `Direction::ALL` order. An adjacent opponent is jumped
    /// straight over when possible, otherwise side-stepped around.
    pub fn valid_moves(&self, player: Player) -> Vec<Position> {
        let current = self.position(player);
        let opponent = self.position(player.opponent());
        let mut moves = Vec::with_capacity(5);

        for direction in Direction::ALL {
            let Some(next) = self.step(&current, direction) else {
                continue;
            };

            if self.is_wall_between(&current, &next) {
                continue;
            }

            if next != opponent {
                moves.push(next);
                continue;
            }

            match self.step(&opponent, direction) {
                Some(jump) if !self.is_wall_between(&opponent, &jump) => moves.push(jump),
                _ => {
                    for side in direction.perpendicular() {
                        if let Some(diagonal) = self.step(&opponent, side) {
                            if !self.is_wall_between(&opponent, &diagonal) {
                                moves.push(diagonal);
                            }
                        }
                    }
                }
            }
        }

        moves
    }

    pub fn can_place_wall(&self, wall: &Wall) -> bool {
        self.check_wall(wall).is_ok()
    }

    /// Checks a wall for the player to move, cheapest rules first. The path check runs on a copy
    /// of the state with the wall added.
    pub fn check_wall(&self, wall: &Wall) -> Result<(), RuleError> {
        if self.walls_remaining(self.current_player) == 0 {
            return Err(RuleError::WallBudgetExhausted);
        }

        if !board::is_valid_wall_anchor(self.board_size, wall) {
            return Err(RuleError::OutOfBounds);
        }

        if self.walls.contains(wall) {
            return Err(RuleError::WallAlreadyPlaced);
        }

        if self.walls.iter().any(|placed| wall.conflicts_with(placed)) {
            return Err(RuleError::WallOverlap);
        }

        let mut state_with_wall = self.clone();
        state_with_wall.walls.insert(*wall);

        if !state_with_wall.players_have_path() {
            return Err(RuleError::WallWouldBlockPath);
        }

        Ok(())
    }

    /// Every wall the player to move may place.
    pub fn valid_walls(&self) -> Vec<Wall> {
        if self.walls_remaining(self.current_player) == 0 {
            return vec![];
        }

        board::all_wall_slots(self.board_size)
            .filter(|wall| self.can_place_wall(wall))
            .collect()
    }

    /// Pawn moves for the player to move followed by every legal wall.
    pub fn valid_actions(&self) -> impl Iterator<Item = Action> {
        let moves = self.valid_moves(self.current_player);
        let walls = self.valid_walls();

        moves
            .into_iter()
            .map(Action::MovePawn)
            .chain(walls.into_iter().map(Action::PlaceWall))
    }

    pub fn is_legal(&self, action: &Action) -> bool {
        match action {
            Action::MovePawn(to) => self.valid_moves(self.current_player).contains(to),
            Action::PlaceWall(wall) => self.can_place_wall(wall),
        }
    }

    /// Breadth first search from `from` to `player`'s goal row over the cells still connected
    /// by unwalled edges. `None` when the goal row cannot be reached.
    pub fn shortest_path_length(&self, from: &Position, player: Player) -> Option<usize> {
        let goal_row = player.goal_row(self.board_size);
        let mut visited = vec![false; self.board_size * self.board_size];
        let mut queue = VecDeque::new();

        visited[self.cell_index(from)] = true;
        queue.push_back((*from, 0));

        while let Some((position, distance)) = queue.pop_front() {
            if position.row == goal_row {
                return Some(distance);
            }

            for direction in Direction::ALL {
                if let Some(next) = self.step(&position, direction) {
                    let index = self.cell_index(&next);
                    if !visited[index] && !self.is_wall_between(&position, &next) {
                        visited[index] = true;
                        queue.push_back((next, distance + 1));
                    }
                }
            }
        }

        None
    }

    pub fn has_path_to_goal(&self, from: &Position, player: Player) -> bool {
        self.shortest_path_length(from, player).is_some()
    }

    pub fn players_have_path(&self) -> bool {
        self.has_path_to_goal(&self.player_1_pos, Player::Player1)
            && self.has_path_to_goal(&self.player_2_pos, Player::Player2)
    }

    /// Applies an action already known to be legal for the player to move.
    pub(crate) fn take_action(&mut self, action: &Action) {
        debug_assert!(self.is_legal(action), "{:?} is not legal", action);

        match action {
            Action::MovePawn(to) => {
                self.move_pawn(*to);
            }
            Action::PlaceWall(wall) => self.place_wall(*wall),
        }
    }

    pub(crate) fn move_pawn(&mut self, to: Position) -> Position {
        assert!(
            board::contains(self.board_size, &to),
            "{:?} is outside of the board",
            to
        );

        let mover = self.current_player;
        let from = self.position(mover);

        match mover {
            Player::Player1 => self.player_1_pos = to,
            Player::Player2 => self.player_2_pos = to,
        }

        self.update_terminal();
        self.increment_turn();

        from
    }

    pub(crate) fn place_wall(&mut self, wall: Wall) {
        let walls_remaining = match self.current_player {
            Player::Player1 => &mut self.player_1_walls_remaining,
            Player::Player2 => &mut self.player_2_walls_remaining,
        };

        *walls_remaining = walls_remaining
            .checked_sub(1)
            .expect("Wall budget must be checked before placing a wall");

        self.walls.insert(wall);
        self.increment_turn();
    }

    /// Returns `player`'s pawn to `from` and hands the turn back to them.
    pub(crate) fn unmove_pawn(&mut self, player: Player, from: Position) {
        match player {
            Player::Player1 => self.player_1_pos = from,
            Player::Player2 => self.player_2_pos = from,
        }

        self.decrement_turn(player);
    }

    /// Takes `wall` back off the board, refunds `player` and hands the turn back to them.
    pub(crate) fn unplace_wall(&mut self, player: Player, wall: &Wall) {
        let removed = self.walls.remove(wall);
        assert!(removed, "{:?} was not on the board", wall);

        match player {
            Player::Player1 => self.player_1_walls_remaining += 1,
            Player::Player2 => self.player_2_walls_remaining += 1,
        }

        self.decrement_turn(player);
    }

    fn step(&self, position: &Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .filter(|next| board::contains(self.board_size, next))
    }

    fn cell_index(&self, position: &Position) -> usize {
        position.row * self.board_size + position.col
    }

    fn update_terminal(&mut self) {
        if self.terminal {
            return;
        }

        self.winner = if self.player_1_pos.row == Player::Player1.goal_row(self.board_size) {
            Some(Player::Player1)
        } else if self.player_2_pos.row == Player::Player2.goal_row(self.board_size) {
            Some(Player::Player2)
        } else {
            None
        };

        self.terminal = self.winner.is_some();
    }

    fn increment_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.num_plies += 1;
    }

    fn decrement_turn(&mut self, player: Player) {
        self.current_player = player;
        self.num_plies = self.num_plies.saturating_sub(1);
        self.terminal = false;
        self.winner = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BOARD_SIZE, NUM_WALLS_PER_PLAYER)
    }
}

impl game_state::GameState for GameState {
    fn initial() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "game_state_test.rs"]
mod game_state_test;

use super::*;
use crate::{Player, Position, RuleError, Wall};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn state_with_positions(player_1: Position, player_2: Position) -> GameState {
    GameState::default().with_positions(player_1, player_2)
}

#[test]
fn test_initial_state() {
    let game_state = GameState::default();

    assert_eq!(game_state.board_size(), 9);
    assert_eq!(game_state.player_1_pos(), p(8, 4));
    assert_eq!(game_state.player_2_pos(), p(0, 4));
    assert_eq!(game_state.walls_remaining(Player::Player1), 10);
    assert_eq!(game_state.walls_remaining(Player::Player2), 10);
    assert!(game_state.walls().is_empty());
    assert_eq!(game_state.current_player(), Player::Player1);
    assert!(!game_state.is_terminal());
    assert_eq!(game_state.winner(), None);
    assert_eq!(game_state.move_number(), 1);
}

#[test]
fn test_initial_state_small_board() {
    let game_state = GameState::new(5, 3);

    assert_eq!(game_state.player_1_pos(), p(4, 2));
    assert_eq!(game_state.player_2_pos(), p(0, 2));
    assert_eq!(game_state.walls_remaining(Player::Player2), 3);
    assert_eq!(game_state.valid_walls().len(), 32);
}

#[test]
fn test_valid_moves_p1_initial() {
    let game_state = GameState::default();

    assert_eq!(
        game_state.valid_moves(Player::Player1),
        vec![p(7, 4), p(8, 3), p(8, 5)]
    );
}

#[test]
fn test_valid_moves_p2_initial() {
    let game_state = GameState::default();

    assert_eq!(
        game_state.valid_moves(Player::Player2),
        vec![p(1, 4), p(0, 3), p(0, 5)]
    );
}

#[test]
fn test_valid_moves_straight_jump() {
    let game_state = state_with_positions(p(5, 4), p(4, 4));
    let moves = game_state.valid_moves(Player::Player1);

    assert_eq!(moves, vec![p(3, 4), p(6, 4), p(5, 3), p(5, 5)]);
    assert!(!moves.contains(&p(4, 4)));
}

#[test]
fn test_valid_moves_jump_blocked_by_wall_side_steps() {
    let game_state =
        state_with_positions(p(5, 4), p(4, 4)).with_walls([Wall::horizontal(3, 4)]);

    assert_eq!(
        game_state.valid_moves(Player::Player1),
        vec![p(4, 3), p(4, 5), p(6, 4), p(5, 3), p(5, 5)]
    );
}

#[test]
fn test_valid_moves_jump_off_board_side_steps() {
    let game_state = state_with_positions(p(1, 4), p(0, 4));

    assert_eq!(
        game_state.valid_moves(Player::Player1),
        vec![p(0, 3), p(0, 5), p(2, 4), p(1, 3), p(1, 5)]
    );
}

#[test]
fn test_valid_moves_side_step_filtered_by_wall() {
    let game_state = state_with_positions(p(5, 4), p(4, 4))
        .with_walls([Wall::horizontal(3, 4), Wall::vertical(3, 3)]);

    assert_eq!(
        game_state.valid_moves(Player::Player1),
        vec![p(4, 5), p(6, 4), p(5, 3), p(5, 5)]
    );
}

#[test]
fn test_valid_moves_horizontal_jump() {
    let game_state = state_with_positions(p(4, 3), p(4, 4));

    assert_eq!(
        game_state.valid_moves(Player::Player1),
        vec![p(3, 3), p(5, 3), p(4, 2), p(4, 5)]
    );
}

#[test]
fn test_valid_moves_opponent_moves_are_symmetric() {
    let game_state = state_with_positions(p(5, 4), p(4, 4));

    assert_eq!(
        game_state.valid_moves(Player::Player2),
        vec![p(3, 4), p(6, 4), p(4, 3), p(4, 5)]
    );
}

#[test]
fn test_valid_moves_wall_blocks_direct_move() {
    let game_state = GameState::default().with_walls([Wall::horizontal(7, 4)]);

    assert_eq!(
        game_state.valid_moves(Player::Player1),
        vec![p(8, 3), p(8, 5)]
    );
}

#[test]
fn test_valid_moves_never_out_of_bounds_or_onto_opponent() {
    let corners = [p(0, 0), p(0, 8), p(8, 0), p(8, 8)];

    for player_1 in corners {
        for player_2 in [p(1, 0), p(0, 1), p(7, 8), p(8, 7), p(4, 4)] {
            let game_state = state_with_positions(player_1, player_2);
            let moves = game_state.valid_moves(Player::Player1);

            assert!(moves.iter().all(|m| m.row < 9 && m.col < 9));
            assert!(!moves.contains(&player_2));
            assert!(moves.len() <= 5);
        }
    }
}

#[test]
fn test_is_wall_between() {
    let game_state = GameState::default().with_walls([Wall::horizontal(3, 4)]);

    assert!(game_state.is_wall_between(&p(3, 4), &p(4, 4)));
    assert!(game_state.is_wall_between(&p(4, 4), &p(3, 4)));
    assert!(game_state.is_wall_between(&p(3, 5), &p(4, 5)));
    assert!(!game_state.is_wall_between(&p(3, 3), &p(4, 3)));
    assert!(!game_state.is_wall_between(&p(3, 4), &p(3, 5)));
    assert!(!game_state.is_wall_between(&p(2, 4), &p(3, 4)));
}

#[test]
fn test_is_wall_between_vertical() {
    let game_state = GameState::default().with_walls([Wall::vertical(3, 4)]);

    assert!(game_state.is_wall_between(&p(3, 4), &p(3, 5)));
    assert!(game_state.is_wall_between(&p(4, 5), &p(4, 4)));
    assert!(!game_state.is_wall_between(&p(5, 4), &p(5, 5)));
    assert!(!game_state.is_wall_between(&p(2, 4), &p(2, 5)));
}

#[test]
fn test_is_valid_position() {
    let game_state = GameState::default();

    assert!(game_state.is_valid_position(0, 8));
    assert!(!game_state.is_valid_position(-1, 0));
    assert!(!game_state.is_valid_position(0, 9));
}

#[test]
fn test_check_wall_budget_exhausted() {
    let game_state = GameState::default().with_walls_remaining(0, 10);

    assert_eq!(
        game_state.check_wall(&Wall::horizontal(4, 4)),
        Err(RuleError::WallBudgetExhausted)
    );
    assert!(game_state.valid_walls().is_empty());
}

#[test]
fn test_check_wall_out_of_bounds() {
    let game_state = GameState::default();

    assert_eq!(
        game_state.check_wall(&Wall::horizontal(8, 0)),
        Err(RuleError::OutOfBounds)
    );
    assert_eq!(
        game_state.check_wall(&Wall::vertical(0, 8)),
        Err(RuleError::OutOfBounds)
    );
}

#[test]
fn test_check_wall_already_placed() {
    let game_state = GameState::default().with_walls([Wall::horizontal(4, 4)]);

    assert_eq!(
        game_state.check_wall(&Wall::horizontal(4, 4)),
        Err(RuleError::WallAlreadyPlaced)
    );
}

#[test]
fn test_check_wall_overlap_and_cross() {
    let game_state = GameState::default().with_walls([Wall::horizontal(4, 4)]);

    assert_eq!(
        game_state.check_wall(&Wall::horizontal(4, 5)),
        Err(RuleError::WallOverlap)
    );
    assert_eq!(
        game_state.check_wall(&Wall::horizontal(4, 3)),
        Err(RuleError::WallOverlap)
    );
    assert_eq!(
        game_state.check_wall(&Wall::vertical(4, 4)),
        Err(RuleError::WallOverlap)
    );
    assert!(game_state.can_place_wall(&Wall::horizontal(4, 6)));
    assert!(game_state.can_place_wall(&Wall::horizontal(4, 2)));
    assert!(game_state.can_place_wall(&Wall::vertical(4, 5)));
    assert!(game_state.can_place_wall(&Wall::vertical(3, 4)));
}

#[test]
fn test_check_wall_would_trap_opponent() {
    let game_state =
        state_with_positions(p(8, 4), p(0, 0)).with_walls([Wall::horizontal(0, 0)]);
    let wall = Wall::vertical(0, 1);

    assert!(!game_state
        .walls()
        .iter()
        .any(|placed| placed.conflicts_with(&wall)));
    assert_eq!(
        game_state.check_wall(&wall),
        Err(RuleError::WallWouldBlockPath)
    );
    assert!(!game_state.can_place_wall(&wall));
}

#[test]
fn test_check_wall_would_trap_self() {
    let game_state =
        state_with_positions(p(8, 8), p(0, 4)).with_walls([Wall::horizontal(7, 7)]);

    assert_eq!(
        game_state.check_wall(&Wall::vertical(7, 6)),
        Err(RuleError::WallWouldBlockPath)
    );
    assert!(game_state.can_place_wall(&Wall::vertical(6, 6)));
}

#[test]
fn test_check_wall_does_not_mutate() {
    let game_state =
        state_with_positions(p(8, 4), p(0, 0)).with_walls([Wall::horizontal(0, 0)]);
    let before = game_state.clone();

    let _ = game_state.check_wall(&Wall::vertical(0, 1));
    let _ = game_state.check_wall(&Wall::vertical(5, 5));

    assert_eq!(game_state, before);
}

#[test]
fn test_valid_walls_initial() {
    let game_state = GameState::default();
    let walls = game_state.valid_walls();

    assert_eq!(walls.len(), 128);
    assert_eq!(walls[0], Wall::horizontal(0, 0));
}

#[test]
fn test_valid_walls_excludes_conflicts() {
    let game_state = GameState::default().with_walls([Wall::horizontal(4, 4)]);
    let walls = game_state.valid_walls();
    let excluded = [
        Wall::horizontal(4, 3),
        Wall::horizontal(4, 4),
        Wall::horizontal(4, 5),
        Wall::vertical(4, 4),
    ];

    assert!(!walls.iter().any(|w| excluded.contains(w)));
    assert_eq!(walls.len(), 128 - excluded.len());
}

#[test]
fn test_valid_actions_initial() {
    let game_state = GameState::default();
    let actions = game_state.valid_actions().collect::<Vec<_>>();

    assert_eq!(actions.len(), 3 + 128);
    assert_eq!(actions[0], Action::MovePawn(p(7, 4)));
    assert!(actions[3].is_wall());
}

#[test]
fn test_shortest_path_length_initial() {
    let game_state = GameState::default();

    assert_eq!(
        game_state.shortest_path_length(&p(8, 4), Player::Player1),
        Some(8)
    );
    assert_eq!(
        game_state.shortest_path_length(&p(0, 4), Player::Player2),
        Some(8)
    );
    assert_eq!(
        game_state.shortest_path_length(&p(0, 4), Player::Player1),
        Some(0)
    );
}

#[test]
fn test_shortest_path_length_detours_around_wall() {
    let game_state = GameState::default().with_walls([Wall::horizontal(7, 4)]);

    assert_eq!(
        game_state.shortest_path_length(&p(8, 4), Player::Player1),
        Some(9)
    );
}

#[test]
fn test_shortest_path_length_ignores_pawns() {
    let game_state = state_with_positions(p(5, 4), p(4, 4));

    assert_eq!(
        game_state.shortest_path_length(&p(5, 4), Player::Player1),
        Some(5)
    );
}

#[test]
fn test_shortest_path_length_unreachable() {
    let mut game_state = state_with_positions(p(8, 4), p(0, 0));
    game_state.walls.insert(Wall::horizontal(0, 0));
    game_state.walls.insert(Wall::vertical(0, 1));

    assert_eq!(
        game_state.shortest_path_length(&p(0, 0), Player::Player2),
        None
    );
    assert!(!game_state.players_have_path());
}

#[test]
fn test_take_action_move_switches_turn() {
    let mut game_state = GameState::default();
    game_state.take_action(&Action::MovePawn(p(7, 4)));

    assert_eq!(game_state.player_1_pos(), p(7, 4));
    assert_eq!(game_state.current_player(), Player::Player2);
    assert_eq!(game_state.walls_remaining(Player::Player1), 10);
    assert_eq!(game_state.num_plies(), 1);
    assert_eq!(game_state.move_number(), 1);

    game_state.take_action(&Action::MovePawn(p(1, 4)));

    assert_eq!(game_state.player_2_pos(), p(1, 4));
    assert_eq!(game_state.current_player(), Player::Player1);
    assert_eq!(game_state.move_number(), 2);
}

#[test]
fn test_take_action_wall_only_charges_mover() {
    let mut game_state = GameState::default();
    game_state.take_action(&Action::PlaceWall(Wall::horizontal(2, 2)));

    assert_eq!(game_state.walls_remaining(Player::Player1), 9);
    assert_eq!(game_state.walls_remaining(Player::Player2), 10);
    assert!(game_state.walls().contains(&Wall::horizontal(2, 2)));
    assert_eq!(game_state.current_player(), Player::Player2);

    game_state.take_action(&Action::PlaceWall(Wall::vertical(5, 5)));

    assert_eq!(game_state.walls_remaining(Player::Player1), 9);
    assert_eq!(game_state.walls_remaining(Player::Player2), 9);
}

#[test]
fn test_take_action_wins_p1() {
    let mut game_state = state_with_positions(p(1, 4), p(5, 0));
    game_state.take_action(&Action::MovePawn(p(0, 4)));

    assert!(game_state.is_terminal());
    assert_eq!(game_state.winner(), Some(Player::Player1));
    assert_eq!(game_state.current_player(), Player::Player2);
}

#[test]
fn test_take_action_wins_p2() {
    let mut game_state =
        state_with_positions(p(3, 0), p(7, 6)).with_current_player(Player::Player2);
    game_state.take_action(&Action::MovePawn(p(8, 6)));

    assert!(game_state.is_terminal());
    assert_eq!(game_state.winner(), Some(Player::Player2));
}

#[test]
fn test_unplace_wall_round_trip() {
    let before = state_with_positions(p(6, 2), p(2, 6)).with_walls([Wall::vertical(3, 3)]);
    let mut game_state = before.clone();

    game_state.take_action(&Action::PlaceWall(Wall::horizontal(5, 5)));
    assert_ne!(game_state, before);

    game_state.unplace_wall(Player::Player1, &Wall::horizontal(5, 5));
    assert_eq!(game_state, before);
}

#[test]
fn test_unmove_pawn_clears_terminal() {
    let before = state_with_positions(p(1, 4), p(5, 0));
    let mut game_state = before.clone();

    let from = game_state.move_pawn(p(0, 4));
    assert!(game_state.is_terminal());

    game_state.unmove_pawn(Player::Player1, from);
    assert_eq!(game_state, before);
    assert!(!game_state.is_terminal());
    assert_eq!(game_state.winner(), None);
}

#[test]
fn test_clone_is_independent() {
    let game_state = GameState::default();
    let mut copy = game_state.clone();

    copy.take_action(&Action::PlaceWall(Wall::horizontal(2, 2)));

    assert!(game_state.walls().is_empty());
    assert_eq!(game_state.walls_remaining(Player::Player1), 10);
    assert_eq!(copy.walls().len(), 1);
}

#[test]
fn test_take_action_alternates_moves_and_walls() {
    let mut game_state = GameState::default();

    for action in [
        Action::MovePawn(p(7, 4)),
        Action::PlaceWall(Wall::horizontal(1, 3)),
        Action::PlaceWall(Wall::vertical(5, 5)),
        Action::MovePawn(p(1, 4)),
    ] {
        game_state.take_action(&action);
    }

    assert_eq!(game_state.player_1_pos(), p(7, 4));
    assert_eq!(game_state.player_2_pos(), p(1, 4));
    assert_eq!(game_state.player_1_walls_remaining(), 9);
    assert_eq!(game_state.player_2_walls_remaining(), 9);
    assert_eq!(game_state.walls().len(), 2);
    assert_eq!(game_state.num_plies(), 4);
    assert_eq!(game_state.current_player(), Player::Player1);
}

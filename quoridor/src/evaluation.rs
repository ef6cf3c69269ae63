use super::{GameState, Player, SearchOptions};

/// Static score of `game_state` from `player`'s perspective. Higher is better for `player`.
pub fn evaluate(game_state: &GameState, player: Player, options: &SearchOptions) -> f32 {
    let opponent = player.opponent();
    let size = game_state.board_size();
    let position = game_state.position(player);

    let self_path = path_length(game_state, player);
    let opponent_path = path_length(game_state, opponent);
    let path_score = (opponent_path - self_path) * options.path_weight;

    let walls_score = (game_state.walls_remaining(player) as f32
        - game_state.walls_remaining(opponent) as f32)
        * options.walls_weight;

    let center = (size / 2) as f32;
    let center_score = (center - (position.col as f32 - center).abs()) * options.center_weight;

    let progress_score = player.rows_advanced(position.row, size) as f32 * options.progress_weight;

    path_score + walls_score + center_score + progress_score
}

/// Unreachable goals count as a path longer than any real one.
fn path_length(game_state: &GameState, player: Player) -> f32 {
    let size = game_state.board_size();

    game_state
        .shortest_path_length(&game_state.position(player), player)
        .unwrap_or(size * size) as f32
}

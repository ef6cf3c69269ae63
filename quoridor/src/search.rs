//! Depth bounded minimax with alpha-beta pruning over pawn moves and nearby walls.

use std::time::Instant;

use log::{debug, warn};
use rand::prelude::{SeedableRng, SliceRandom, StdRng};
use rand::Rng;
use rayon::prelude::*;

use super::board;
use super::evaluation::evaluate;
use super::{Action, Difficulty, GameState, Player, SearchOptions, Wall};

/// The action picked by a search along with how it was found.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub action: Action,
    /// Minimax score of `action` from the searcher's perspective.
    pub score: f32,
    pub nodes: u64,
    /// True when the deadline cut the search short.
    pub stopped: bool,
}

pub struct Searcher {
    player: Player,
    depth: usize,
    easy_policy: bool,
    options: SearchOptions,
    rng: StdRng,
}

impl Searcher {
    pub fn new(
        player: Player,
        difficulty: Difficulty,
        options: SearchOptions,
        seed: Option<u64>,
    ) -> Self {
        Self {
            player,
            depth: difficulty.depth(),
            easy_policy: difficulty == Difficulty::Easy,
            options,
            rng: common::create_rng(seed),
        }
    }

    /// A minimax searcher of an explicit depth, never using the easy policy.
    pub fn with_depth(
        player: Player,
        depth: usize,
        options: SearchOptions,
        seed: Option<u64>,
    ) -> Self {
        assert!(depth >= 1, "Search depth must be at least 1");

        Self {
            player,
            depth,
            easy_policy: false,
            options,
            rng: common::create_rng(seed),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Picks an action for the player to move. `None` only when the game is over.
    pub fn get_best_move(&mut self, game_state: &GameState) -> Option<Action> {
        if self.easy_policy {
            self.easy_move(game_state)
        } else {
            self.search(game_state).map(|result| result.action)
        }
    }

    pub fn search(&mut self, game_state: &GameState) -> Option<SearchResult> {
        if game_state.is_terminal() {
            return None;
        }

        let maximizing = game_state.current_player() == self.player;
        if !maximizing {
            debug!(
                "{} is to move, picking the reply that is worst for {}",
                game_state.current_player(),
                self.player
            );
        }

        let deadline = self.options.time_limit.map(|limit| Instant::now() + limit);
        let actions = SearchContext::new(self.player, &self.options, deadline, &mut self.rng)
            .actions(game_state);

        let result = if let [action] = actions[..] {
            Some(self.forced(game_state, action))
        } else if self.options.parallel_root {
            self.search_parallel(game_state, &actions, maximizing, deadline)
        } else {
            self.search_sequential(game_state, &actions, maximizing, deadline)
        };

        if let Some(result) = &result {
            debug!(
                "{} depth {} chose {} score {} nodes {}{}",
                self.player,
                self.depth,
                result.action,
                result.score,
                result.nodes,
                if result.stopped { " (stopped)" } else { "" }
            );
        }

        result
    }

    /// The only legal action is returned without any lookahead, scored by the state it leads to.
    fn forced(&self, game_state: &GameState, action: Action) -> SearchResult {
        let mut child = game_state.clone();
        child.take_action(&action);

        let score = terminal_score(&child, self.player, &self.options, self.depth - 1)
            .unwrap_or_else(|| evaluate(&child, self.player, &self.options));

        SearchResult {
            action,
            score,
            nodes: 0,
            stopped: false,
        }
    }

    fn search_sequential(
        &mut self,
        game_state: &GameState,
        actions: &[Action],
        maximizing: bool,
        deadline: Option<Instant>,
    ) -> Option<SearchResult> {
        let mut context = SearchContext::new(self.player, &self.options, deadline, &mut self.rng);

        let mut alpha = f32::NEG_INFINITY;
        let mut beta = f32::INFINITY;
        let mut best: Option<(Action, f32)> = None;
        let mut best_score = worst_score(maximizing);
        let mut stopped = false;

        for action in actions {
            if context.is_past_deadline() {
                stopped = true;
                break;
            }

            let mut child = game_state.clone();
            child.take_action(action);

            let (score, was_stopped) = context.minimax(&child, self.depth - 1, alpha, beta);

            if was_stopped {
                stopped = true;
                break;
            }

            if improves(maximizing, score, best_score) {
                best_score = score;
                best = Some((*action, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        let nodes = context.nodes;
        Self::finish(actions, best, nodes, stopped)
    }

    /// Each root action is searched on its own worker with a full window, so siblings never
    /// prune each other.
    fn search_parallel(
        &mut self,
        game_state: &GameState,
        actions: &[Action],
        maximizing: bool,
        deadline: Option<Instant>,
    ) -> Option<SearchResult> {
        let seeds = actions.iter().map(|_| self.rng.gen()).collect::<Vec<u64>>();
        let player = self.player;
        let depth = self.depth;
        let options = &self.options;

        let outcomes = actions
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(action, seed)| {
                let mut rng = StdRng::seed_from_u64(*seed);
                let mut context = SearchContext::new(player, options, deadline, &mut rng);

                let mut child = game_state.clone();
                child.take_action(action);

                let (score, stopped) =
                    context.minimax(&child, depth - 1, f32::NEG_INFINITY, f32::INFINITY);

                (score, context.nodes, stopped)
            })
            .collect::<Vec<_>>();

        let nodes = outcomes.iter().map(|(_, nodes, _)| nodes).sum();
        let stopped = outcomes.iter().any(|(_, _, stopped)| *stopped);

        let mut best: Option<(Action, f32)> = None;
        let mut best_score = worst_score(maximizing);

        for (action, (score, _, was_stopped)) in actions.iter().zip(outcomes) {
            if !was_stopped && improves(maximizing, score, best_score) {
                best_score = score;
                best = Some((*action, score));
            }
        }

        Self::finish(actions, best, nodes, stopped)
    }

    fn finish(
        actions: &[Action],
        best: Option<(Action, f32)>,
        nodes: u64,
        stopped: bool,
    ) -> Option<SearchResult> {
        let (action, score) = match best {
            Some(best) => best,
            None => {
                let first = *actions.first()?;
                warn!("No scored action, falling back to {}", first);
                (first, f32::NEG_INFINITY)
            }
        };

        Some(SearchResult {
            action,
            score,
            nodes,
            stopped,
        })
    }

    fn easy_move(&mut self, game_state: &GameState) -> Option<Action> {
        if game_state.is_terminal() {
            return None;
        }

        let mover = game_state.current_player();
        let moves = game_state.valid_moves(mover);

        if self.rng.gen::<f64>() < self.options.strategic_move_probability {
            let goal_row = self.player.goal_row(game_state.board_size());
            let closest = moves.iter().min_by_key(|m| m.row.abs_diff(goal_row));

            if let Some(closest) = closest {
                return Some(Action::MovePawn(*closest));
            }
        }

        let random_move = self.rng.gen::<f64>() < self.options.random_move_probability;

        if random_move || game_state.walls_remaining(mover) == 0 {
            return moves.choose(&mut self.rng).copied().map(Action::MovePawn);
        }

        let walls = game_state.valid_walls();
        let sample = walls
            .choose_multiple(&mut self.rng, self.options.easy_wall_sample_size)
            .copied()
            .collect::<Vec<_>>();

        match sample.choose(&mut self.rng) {
            Some(wall) => Some(Action::PlaceWall(*wall)),
            None => moves.choose(&mut self.rng).copied().map(Action::MovePawn),
        }
    }
}

/// Wins score higher the sooner they happen and losses the later they happen.
fn terminal_score(
    game_state: &GameState,
    player: Player,
    options: &SearchOptions,
    depth: usize,
) -> Option<f32> {
    let score = options.win_score + depth as f32;

    game_state
        .winner()
        .map(|winner| if winner == player { score } else { -score })
}

fn worst_score(maximizing: bool) -> f32 {
    if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    }
}

/// Strictly better only, so the first of equally scored actions is kept.
fn improves(maximizing: bool, score: f32, best: f32) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

struct SearchContext<'a> {
    player: Player,
    options: &'a SearchOptions,
    deadline: Option<Instant>,
    rng: &'a mut StdRng,
    nodes: u64,
}

impl<'a> SearchContext<'a> {
    fn new(
        player: Player,
        options: &'a SearchOptions,
        deadline: Option<Instant>,
        rng: &'a mut StdRng,
    ) -> Self {
        Self {
            player,
            options,
            deadline,
            rng,
            nodes: 0,
        }
    }

    fn is_past_deadline(&self) -> bool {
        self.deadline
            .map_or(false, |deadline| Instant::now() >= deadline)
    }

    /// Returns (score, stopped) where stopped indicates the deadline passed mid search.
    fn minimax(
        &mut self,
        game_state: &GameState,
        depth: usize,
        mut alpha: f32,
        mut beta: f32,
    ) -> (f32, bool) {
        if self.is_past_deadline() {
            return (0.0, true);
        }

        self.nodes += 1;

        if let Some(score) = terminal_score(game_state, self.player, self.options, depth) {
            return (score, false);
        }

        if depth == 0 {
            return (evaluate(game_state, self.player, self.options), false);
        }

        let actions = self.actions(game_state);
        if actions.is_empty() {
            return (evaluate(game_state, self.player, self.options), false);
        }

        let maximizing = game_state.current_player() == self.player;
        let mut best = worst_score(maximizing);

        for action in actions {
            let mut child = game_state.clone();
            child.take_action(&action);

            let (score, stopped) = self.minimax(&child, depth - 1, alpha, beta);
            if stopped {
                return (best, true);
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best, false)
    }

    /// Pawn moves first, then wall candidates when the mover has walls left.
    fn actions(&mut self, game_state: &GameState) -> Vec<Action> {
        let mover = game_state.current_player();
        let mut actions = game_state
            .valid_moves(mover)
            .into_iter()
            .map(Action::MovePawn)
            .collect::<Vec<_>>();

        if game_state.walls_remaining(mover) > 0 {
            actions.extend(self.wall_candidates(game_state).into_iter().map(Action::PlaceWall));
        }

        actions
    }

    /// Legal walls anchored near the mover's opponent, down-sampled when there are too many.
    fn wall_candidates(&mut self, game_state: &GameState) -> Vec<Wall> {
        let target = game_state.position(game_state.current_player().opponent());
        let radius = self.options.wall_candidate_radius;

        let candidates = board::all_wall_slots(game_state.board_size())
            .filter(|wall| wall.anchor().chebyshev_distance(target.row, target.col) <= radius)
            .filter(|wall| game_state.can_place_wall(wall))
            .collect::<Vec<_>>();

        if candidates.len() > self.options.max_wall_candidates {
            candidates
                .choose_multiple(&mut *self.rng, self.options.max_wall_candidates)
                .copied()
                .collect()
        } else {
            candidates
        }
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

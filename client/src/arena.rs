use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use common::{create_rng, Config, ConfigLoader, FsExt};
use engine::engine::GameEngine;
use log::{info, warn};
use quoridor::{Action, Difficulty, Engine, GameState, Player, SearchOptions, Searcher};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ArenaOptions {
    pub num_games: usize,
    pub board_size: usize,
    pub num_walls: usize,
    pub player_1_difficulty: Difficulty,
    pub player_2_difficulty: Difficulty,
    pub max_plies: usize,
    pub seed: Option<u64>,
    pub games_file: PathBuf,
}

impl Config for ArenaOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            num_games: config
                .get("num_games")
                .and_then(|v| v.as_usize())
                .unwrap_or(10),
            board_size: config
                .get("board_size")
                .and_then(|v| v.as_usize())
                .unwrap_or(quoridor::BOARD_SIZE),
            num_walls: config
                .get("num_walls")
                .and_then(|v| v.as_usize())
                .unwrap_or(quoridor::NUM_WALLS_PER_PLAYER),
            player_1_difficulty: config
                .get("player_1_difficulty")
                .and_then(|v| v.as_string())
                .map(|v| Difficulty::from_label(&v))
                .unwrap_or(Difficulty::Medium),
            player_2_difficulty: config
                .get("player_2_difficulty")
                .and_then(|v| v.as_string())
                .map(|v| Difficulty::from_label(&v))
                .unwrap_or(Difficulty::Easy),
            max_plies: config
                .get("max_plies")
                .and_then(|v| v.as_usize())
                .unwrap_or(200),
            seed: config.get("seed").and_then(|v| v.as_u64()),
            games_file: config
                .get_relative_path("games_file")
                .unwrap_or_else(|_| PathBuf::from("games.jsonl")),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GameRecord {
    pub game: usize,
    pub player_1_difficulty: Difficulty,
    pub player_2_difficulty: Difficulty,
    /// `None` when the ply cap was reached first.
    pub winner: Option<Player>,
    pub plies: usize,
    pub actions: Vec<Action>,
}

/// Appends one JSON document per line.
pub struct GamePersistance {
    file: BufWriter<File>,
}

impl GamePersistance {
    pub fn new(path: PathBuf) -> Result<Self> {
        path.create_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open games file {:?}", path))?;

        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.file, record)?;
        writeln!(self.file)?;
        self.file.flush()?;

        Ok(())
    }
}

pub fn play_arena(
    options: &ArenaOptions,
    search_options: &SearchOptions,
    persistance: &mut GamePersistance,
) -> Result<()> {
    ensure!(
        (2..=quoridor::MAX_BOARD_SIZE).contains(&options.board_size),
        "board_size must be between 2 and {}",
        quoridor::MAX_BOARD_SIZE
    );

    let engine = Engine::new();
    let mut rng = create_rng(options.seed);
    let mut tally: HashMap<String, usize> = HashMap::new();

    info!(
        "Playing {} games of {} vs {} on a {}x{} board",
        options.num_games,
        options.player_1_difficulty,
        options.player_2_difficulty,
        options.board_size,
        options.board_size
    );

    for game in 0..options.num_games {
        let (player_1_difficulty, player_2_difficulty) = if game % 2 == 0 {
            (options.player_1_difficulty, options.player_2_difficulty)
        } else {
            (options.player_2_difficulty, options.player_1_difficulty)
        };

        let mut player_1 = Searcher::new(
            Player::Player1,
            player_1_difficulty,
            search_options.clone(),
            Some(rng.gen()),
        );
        let mut player_2 = Searcher::new(
            Player::Player2,
            player_2_difficulty,
            search_options.clone(),
            Some(rng.gen()),
        );

        let initial = GameState::new(options.board_size, options.num_walls);
        let (winner, actions) = play_game(
            &engine,
            initial,
            &mut player_1,
            &mut player_2,
            options.max_plies,
        );

        let outcome = match winner {
            Some(Player::Player1) => format!("{} ({})", Player::Player1, player_1_difficulty),
            Some(Player::Player2) => format!("{} ({})", Player::Player2, player_2_difficulty),
            None => "draw".to_string(),
        };

        info!("Game {} finished in {} plies: {}", game + 1, actions.len(), outcome);

        let winning_difficulty = match winner {
            Some(Player::Player1) => player_1_difficulty.to_string(),
            Some(Player::Player2) => player_2_difficulty.to_string(),
            None => "draw".to_string(),
        };
        *tally.entry(winning_difficulty).or_default() += 1;

        persistance.write(&GameRecord {
            game: game + 1,
            player_1_difficulty,
            player_2_difficulty,
            winner,
            plies: actions.len(),
            actions,
        })?;
    }

    let mut tally = tally.into_iter().collect::<Vec<_>>();
    tally.sort();
    info!("Results: {:?}", tally);

    Ok(())
}

/// Plays until a player wins or `max_plies` is reached. Returns the winner and the actions taken.
pub fn play_game(
    engine: &Engine,
    mut game_state: GameState,
    player_1: &mut Searcher,
    player_2: &mut Searcher,
    max_plies: usize,
) -> (Option<Player>, Vec<Action>) {
    let mut actions = vec![];

    while actions.len() < max_plies {
        if engine.terminal_state(&game_state).is_some() {
            break;
        }

        let searcher = match Player::from_number(engine.player_to_move(&game_state)) {
            Some(Player::Player1) => &mut *player_1,
            _ => &mut *player_2,
        };

        let action = match searcher.get_best_move(&game_state) {
            Some(action) => action,
            None => {
                warn!("No action available at move {}", engine.move_number(&game_state));
                break;
            }
        };

        game_state = engine.take_action(&game_state, &action);
        actions.push(action);
    }

    (game_state.winner(), actions)
}

use anyhow::{ensure, Context, Result};
use log::info;
use quoridor::{Action, Difficulty, Player, RulesEngine, SearchOptions, Searcher};

use super::cli::AnalyzeCommand;

/// Replays `args.actions` through the rules, then asks the engine for the next action.
pub fn analyze(args: &AnalyzeCommand, search_options: SearchOptions) -> Result<()> {
    ensure!(
        (2..=quoridor::MAX_BOARD_SIZE).contains(&args.board_size),
        "board_size must be between 2 and {}",
        quoridor::MAX_BOARD_SIZE
    );

    let mut rules = RulesEngine::new(args.board_size, args.num_walls);
    replay(&mut rules, &args.actions)?;

    println!("{}", rules.state());

    let player = rules.state().current_player();

    if let Some(winner) = rules.state().winner() {
        println!("{} has won", winner);
        return Ok(());
    }

    let difficulty = Difficulty::from_label(&args.difficulty);
    let mut searcher = Searcher::new(player, difficulty, search_options, args.seed);

    info!("Searching for {} at {}", player, difficulty);

    for p in [Player::Player1, Player::Player2] {
        let path = rules.shortest_path_length(&rules.state().position(p), p);
        info!("{} shortest path: {:?}", p, path);
    }

    match difficulty {
        Difficulty::Easy => {
            if let Some(action) = searcher.get_best_move(rules.state()) {
                println!("{} plays {}", player, action);
            }
        }
        _ => {
            if let Some(result) = searcher.search(rules.state()) {
                println!(
                    "{} plays {} (score {}, {} nodes)",
                    player, result.action, result.score, result.nodes
                );
            }
        }
    }

    Ok(())
}

fn replay(rules: &mut RulesEngine, actions: &[String]) -> Result<()> {
    for (ply, notation) in actions.iter().enumerate() {
        let action = notation
            .parse::<Action>()
            .with_context(|| format!("Failed to parse action {} at ply {}", notation, ply + 1))?;

        rules
            .take_action(&action)
            .with_context(|| format!("Rejected {} at ply {}", action, ply + 1))?;
    }

    Ok(())
}

mod analyze;
mod arena;
mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::{get_env_usize, ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use quoridor::SearchOptions;

use analyze::analyze;
use arena::{play_arena, ArenaOptions, GamePersistance};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Some(num_threads) = get_env_usize("RAYON_THREADS") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;

        info!("Using {} rayon threads", num_threads);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Arena(arena_args) => {
            let config_path = arena_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "arena".to_string())?;

            let arena_options: ArenaOptions = config.load()?;
            let search_options: SearchOptions = config.load()?;

            let mut persistance = GamePersistance::new(arena_options.games_file.clone())?;

            play_arena(&arena_options, &search_options, &mut persistance)?;
        }
        Commands::Analyze(analyze_args) => {
            let search_options = match &analyze_args.config {
                Some(config) => {
                    let config =
                        ConfigLoader::new(config.relative_to_cwd()?, "analyze".to_string())?;
                    config.load()?
                }
                None => SearchOptions::default(),
            };

            analyze(&analyze_args, search_options)?;
        }
    }

    Ok(())
}

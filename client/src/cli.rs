use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Quoridor Engine Client")]
#[clap(about = "Plays and analyzes Quoridor games against the minimax engine", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Arena(ArenaCommand),
    Analyze(AnalyzeCommand),
}

#[derive(Args)]
#[clap(about = "Plays engine against engine and records every game", long_about = None)]
pub struct ArenaCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}

#[derive(Args)]
#[clap(
    about = "Replays a list of actions, prints the board and the engine's choice",
    long_about = None
)]
pub struct AnalyzeCommand {
    /// Actions in notation, e.g. `e8 e2 e3h`.
    pub actions: Vec<String>,

    #[clap(short, long, default_value_t = String::from("medium"))]
    pub difficulty: String,

    #[clap(short, long, default_value_t = quoridor::BOARD_SIZE)]
    pub board_size: usize,

    #[clap(short = 'w', long, default_value_t = quoridor::NUM_WALLS_PER_PLAYER)]
    pub num_walls: usize,

    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Search options are read from the `analyze` scope when given.
    #[clap(short, long)]
    pub config: Option<String>,
}

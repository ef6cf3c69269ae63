pub mod action;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game_state;
pub mod player;
pub mod position;
pub mod rules;
pub mod search;
pub mod search_options;
pub mod value;
pub mod wall;

mod board;
mod constants;
mod display;
mod serde;

pub use self::engine::*;
pub use action::*;
pub use constants::{BOARD_SIZE, MAX_BOARD_SIZE, NUM_WALLS_PER_PLAYER};
pub use difficulty::*;
pub use error::*;
pub use evaluation::evaluate;
pub use game_state::*;
pub use player::*;
pub use position::*;
pub use rules::*;
pub use search::*;
pub use search_options::*;
pub use value::*;
pub use wall::*;

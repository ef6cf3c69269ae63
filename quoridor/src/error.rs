use thiserror::Error;

use super::{Player, Position};

/// Why the rules refused an action. A refused action never changes the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RuleError {
    #[error("the target is outside of the board")]
    OutOfBounds,
    #[error("it is not {0}'s turn")]
    NotCurrentPlayersTurn(Player),
    #[error("{0} is not a legal destination")]
    IllegalMove(Position),
    #[error("no walls remaining")]
    WallBudgetExhausted,
    #[error("the wall is already placed")]
    WallAlreadyPlaced,
    #[error("the wall overlaps or crosses a placed wall")]
    WallOverlap,
    #[error("the wall would leave a player without a path to their goal")]
    WallWouldBlockPath,
    #[error("there is nothing to undo")]
    NoHistoryToUndo,
    #[error("the game is already over")]
    GameAlreadyOver,
}

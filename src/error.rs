use crate::moves::Move;
use crate::piece::Team;
use crate::position::Position;
use crate::registry::GameId;

/// Every recoverable failure the engine reports.
///
/// A rejected move leaves the game untouched. `MissingKing` means the board
/// itself is malformed (a fixture or a corrupted record) and check cannot be
/// decided on it.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("no piece at {0}")]
    NoPieceAtStart(Position),

    #[error("it is {expected}'s turn, not {team}'s")]
    WrongTurn { team: Team, expected: Team },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("game is already over")]
    GameOver,

    #[error("{0} has no king on the board")]
    MissingKing(Team),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    #[error("no game with id {0}")]
    UnknownGame(GameId),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

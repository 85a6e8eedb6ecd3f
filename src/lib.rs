pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod position;
pub mod registry;

#[cfg(not(target_arch = "wasm32"))]
pub mod playout;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use board::Board;
pub use error::ChessError;
pub use game::{Game, GameStatus};
pub use moves::Move;
pub use piece::{Piece, PieceType, Team};
pub use position::Position;
pub use registry::{GameId, GameRegistry};

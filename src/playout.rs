// =============================================================================
// Random playouts
//
// Plays uniformly random legal moves through the public `Game` API until one
// side is mated or stalemated, or a ply limit is hit. Used by the `selfplay`
// binary and by tests that check engine invariants over long move sequences.
// =============================================================================

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ChessError;
use crate::game::Game;
use crate::moves::Move;
use crate::piece::Team;

/// Controls a playout. Mutate fields on a default value, as with any config.
#[derive(Clone, Debug)]
pub struct PlayoutConfig {
    /// Stop after this many plies even if the game is still going.
    pub max_plies: u32,
    /// Fixed RNG seed for reproducible games; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            max_plies: 200,
            seed: None,
        }
    }
}

impl PlayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Team },
    Stalemate,
    PlyLimit,
}

#[derive(Clone, Debug)]
pub struct PlayoutSummary {
    pub outcome: PlayoutOutcome,
    pub moves: Vec<Move>,
    pub game: Game,
}

impl PlayoutSummary {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// A uniformly random legal move for the side to move, or `None` if it has
/// none.
pub fn random_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Result<Option<Move>, ChessError> {
    let moves = game.legal_moves(game.team_turn())?;
    Ok(moves.choose(rng).copied())
}

/// Play a whole game from the standard opening.
pub fn random_playout(config: &PlayoutConfig) -> Result<PlayoutSummary, ChessError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    play_from(Game::new(), config.max_plies, &mut rng)
}

/// Play random moves from `game` until it ends or `max_plies` more moves have
/// been made. A finished game has its game-over flag set.
pub fn play_from<R: Rng + ?Sized>(
    mut game: Game,
    max_plies: u32,
    rng: &mut R,
) -> Result<PlayoutSummary, ChessError> {
    let mut moves = Vec::new();

    let outcome = loop {
        let mover = game.team_turn();
        let Some(m) = random_move(&game, rng)? else {
            game.set_game_over(true);
            break if game.is_in_check(mover)? {
                PlayoutOutcome::Checkmate {
                    winner: mover.opposite(),
                }
            } else {
                PlayoutOutcome::Stalemate
            };
        };
        if moves.len() >= max_plies as usize {
            break PlayoutOutcome::PlyLimit;
        }
        game.make_move(m)?;
        moves.push(m);
    };

    Ok(PlayoutSummary {
        outcome,
        moves,
        game,
    })
}

// =============================================================================
// Game registry
//
// Shared ownership of live games for request handlers. Each game sits behind
// its own lock and every read-validate-mutate sequence runs under it. The
// outer map lock is only held long enough to look a game up. The registry is
// an ordinary value handed to whoever needs it; there is no global.
// =============================================================================

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ChessError;
use crate::game::{Game, GameStatus};
use crate::moves::Move;
use crate::position::Position;

pub type GameId = u64;

#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Mutex<HashMap<GameId, Arc<Mutex<Game>>>>,
    last_id: AtomicU64,
}

// A panic can't leave a `Game` half-updated (moves are validated before the
// board is touched), so a poisoned lock still guards a consistent value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh game in the standard opening.
    pub fn create(&self) -> GameId {
        self.insert(Game::new())
    }

    /// Register an existing game, e.g. one restored from storage. Ids start at
    /// 1 and are never reused.
    pub fn insert(&self, game: Game) -> GameId {
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        lock(&self.games).insert(id, Arc::new(Mutex::new(game)));
        id
    }

    pub fn remove(&self, id: GameId) -> Option<Game> {
        let handle = lock(&self.games).remove(&id)?;
        let game = lock(&handle).clone();
        Some(game)
    }

    pub fn len(&self) -> usize {
        lock(&self.games).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, id: GameId) -> Result<Arc<Mutex<Game>>, ChessError> {
        lock(&self.games)
            .get(&id)
            .cloned()
            .ok_or(ChessError::UnknownGame(id))
    }

    /// A copy of the game as it stands; changes to it do not reach the registry.
    pub fn snapshot(&self, id: GameId) -> Result<Game, ChessError> {
        let handle = self.handle(id)?;
        let game = lock(&handle).clone();
        Ok(game)
    }

    pub fn valid_moves(
        &self,
        id: GameId,
        start: Position,
    ) -> Result<Option<HashSet<Move>>, ChessError> {
        let handle = self.handle(id)?;
        let game = lock(&handle);
        game.valid_moves(start)
    }

    /// Play `m` and report the position the opponent now faces. Checkmate or
    /// stalemate ends the game; finished games accept no further moves.
    pub fn make_move(&self, id: GameId, m: Move) -> Result<GameStatus, ChessError> {
        let handle = self.handle(id)?;
        let mut game = lock(&handle);
        if game.is_game_over() {
            return Err(ChessError::GameOver);
        }

        // Nothing is written back unless both the move and the status check
        // succeed.
        let mut trial = game.clone();
        trial.make_move(m)?;
        let status = trial.status(trial.team_turn())?;
        if status.is_terminal() {
            trial.set_game_over(true);
        }
        *game = trial;
        Ok(status)
    }

    pub fn resign(&self, id: GameId) -> Result<(), ChessError> {
        let handle = self.handle(id)?;
        let mut game = lock(&handle);
        if game.is_game_over() {
            return Err(ChessError::GameOver);
        }
        game.set_game_over(true);
        Ok(())
    }
}

// =============================================================================
// Game
//
// Owns the board, the side to move and the game-over flag. Legality is decided
// by trial: each geometric move is played on a copy of the board and rejected
// if it leaves the mover's own king attacked. The live board is never touched
// during that search, so no path can leak a half-applied move.
//
// Attacks on a king are computed from the raw geometric generators, not from
// `valid_moves`. A pinned enemy piece still gives check, and recursing through
// `valid_moves` would never bottom out.
// =============================================================================

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ChessError;
use crate::movegen::piece_moves;
use crate::moves::Move;
use crate::piece::Team;
use crate::position::Position;

/// What the side to move is facing. Checkmate and stalemate are mutually
/// exclusive: both mean no legal move, split on whether the king is attacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    team_turn: Team,
    game_over: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            team_turn: Team::White,
            game_over: false,
        }
    }

    /// A game on an arbitrary board. Useful for setting up test positions.
    pub fn from_board(board: Board, team_turn: Team) -> Self {
        Game {
            board,
            team_turn,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale. Meant for fixtures and restoring saved
    /// games, not for play.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn team_turn(&self) -> Team {
        self.team_turn
    }

    pub fn set_team_turn(&mut self, team: Team) {
        self.team_turn = team;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Set by whoever observes checkmate, stalemate or a resignation. The
    /// engine itself never reads it.
    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
    }

    /// Legal moves of the piece on `start`, whoever's turn it is.
    ///
    /// `Ok(None)` means the square is empty; a piece with nowhere to go gives
    /// `Ok(Some(empty set))`. Fails with `MissingKing` if the piece's team has
    /// no king to keep safe.
    pub fn valid_moves(&self, start: Position) -> Result<Option<HashSet<Move>>, ChessError> {
        let Some(piece) = self.board.piece_at(start) else {
            return Ok(None);
        };

        let mut legal = HashSet::new();
        for candidate in piece_moves(&self.board, start) {
            let mut trial = self.board.clone();
            trial.apply_move_unchecked(&candidate);
            if !king_attacked(&trial, piece.team)? {
                legal.insert(candidate);
            }
        }
        Ok(Some(legal))
    }

    /// Play `m` for the side to move. On error the game is left exactly as it
    /// was.
    pub fn make_move(&mut self, m: Move) -> Result<(), ChessError> {
        let piece = self
            .board
            .piece_at(m.start())
            .ok_or(ChessError::NoPieceAtStart(m.start()))?;

        if piece.team != self.team_turn {
            return Err(ChessError::WrongTurn {
                team: piece.team,
                expected: self.team_turn,
            });
        }

        let legal = self.valid_moves(m.start())?.unwrap_or_default();
        if !legal.contains(&m) {
            return Err(ChessError::IllegalMove(m));
        }

        self.board.apply_move_unchecked(&m);
        self.team_turn = self.team_turn.opposite();
        Ok(())
    }

    pub fn is_in_check(&self, team: Team) -> Result<bool, ChessError> {
        king_attacked(&self.board, team)
    }

    pub fn is_in_checkmate(&self, team: Team) -> Result<bool, ChessError> {
        Ok(self.is_in_check(team)? && !self.has_legal_move(team)?)
    }

    pub fn is_in_stalemate(&self, team: Team) -> Result<bool, ChessError> {
        Ok(!self.is_in_check(team)? && !self.has_legal_move(team)?)
    }

    /// Check, mate and stalemate folded into one answer for `team`.
    pub fn status(&self, team: Team) -> Result<GameStatus, ChessError> {
        let in_check = self.is_in_check(team)?;
        let can_move = self.has_legal_move(team)?;
        Ok(match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        })
    }

    /// Every legal move of `team`, sorted so callers get a stable order.
    pub fn legal_moves(&self, team: Team) -> Result<Vec<Move>, ChessError> {
        let mut all = Vec::new();
        for (origin, _) in self.board.pieces(team) {
            if let Some(moves) = self.valid_moves(origin)? {
                all.extend(moves);
            }
        }
        all.sort();
        Ok(all)
    }

    fn has_legal_move(&self, team: Team) -> Result<bool, ChessError> {
        for (origin, _) in self.board.pieces(team) {
            if self.valid_moves(origin)?.is_some_and(|moves| !moves.is_empty()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn to_json(&self) -> Result<String, ChessError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Game, ChessError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Whether any piece of the other team could geometrically reach `team`'s king.
fn king_attacked(board: &Board, team: Team) -> Result<bool, ChessError> {
    let king = board.find_king(team).ok_or(ChessError::MissingKing(team))?;
    Ok(board
        .pieces(team.opposite())
        .any(|(origin, _)| piece_moves(board, origin).iter().any(|m| m.end() == king)))
}

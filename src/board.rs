use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::piece::{Piece, PieceType, Team};
use crate::position::Position;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8×8 grid of optional pieces. `squares[row - 1][column - 1]` holds the
/// occupant of `Position::new(row, column)`.
///
/// Equality and hashing cover all 64 squares and nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// A board in the standard opening layout.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Overwrite every square with the standard opening layout.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(kind, Team::White));
            self.squares[7][col] = Some(Piece::new(kind, Team::Black));
        }
        for sq in &mut self.squares[1] {
            *sq = Some(Piece::new(PieceType::Pawn, Team::White));
        }
        for sq in &mut self.squares[6] {
            *sq = Some(Piece::new(PieceType::Pawn, Team::Black));
        }
    }

    /// Put `piece` on `position`, replacing whatever was there. `None` clears
    /// the square.
    pub fn place(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row() as usize - 1][position.column() as usize - 1] = piece;
    }

    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.column() as usize - 1]
    }

    pub fn team_at(&self, position: Position) -> Option<Team> {
        self.piece_at(position).map(|p| p.team)
    }

    pub fn find_king(&self, team: Team) -> Option<Position> {
        Position::all().find(|&pos| {
            self.piece_at(pos) == Some(Piece::new(PieceType::King, team))
        })
    }

    /// Every piece of `team` with its square, in row-major order.
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.piece_at(pos) {
            Some(p) if p.team == team => Some((pos, p)),
            _ => None,
        })
    }

    /// Move the piece on `m.start()` to `m.end()` without any legality check,
    /// promoting it if the move says so. Returns the captured piece, if any.
    /// Does nothing when the start square is empty.
    pub(crate) fn apply_move_unchecked(&mut self, m: &Move) -> Option<Piece> {
        let piece = self.piece_at(m.start())?;
        let captured = self.piece_at(m.end());

        let placed = match m.promotion() {
            Some(kind) => Piece::new(kind, piece.team),
            None => piece,
        };
        self.place(m.start(), None);
        self.place(m.end(), Some(placed));

        captured
    }
}

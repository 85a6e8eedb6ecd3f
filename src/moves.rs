use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;
use crate::piece::PieceType;
use crate::position::Position;

/// A move from `start` to `end`. A pawn move onto its last row always carries
/// the kind it promotes to, so `a7a8q` and `a7a8` are different values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl Move {
    pub const fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Move {
            start,
            end,
            promotion,
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }

    /// Convert to UCI notation, e.g. "e2e4", "a7a8q"
    pub fn to_uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.start, self.end, kind.letter()),
            None => format!("{}{}", self.start, self.end),
        }
    }

    /// Parse from UCI notation
    pub fn from_uci(s: &str) -> Result<Move, ChessError> {
        let s = s.trim();
        let invalid = || ChessError::InvalidMoveText(s.to_string());
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }
        let start: Position = s[0..2].parse().map_err(|_| invalid())?;
        let end: Position = s[2..4].parse().map_err(|_| invalid())?;
        let promotion = match s[4..].chars().next() {
            Some(letter) => match PieceType::from_letter(letter) {
                Some(kind) if PieceType::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return Err(invalid()),
            },
            None => None,
        };
        Ok(Move::new(start, end, promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, " promoting to {kind}")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const fn opposite(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row step a pawn of this team moves along.
    pub const fn forward(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Row this team's pawns start on (and may double-step from).
    pub const fn pawn_row(self) -> u8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// Row on which this team's pawns promote.
    pub const fn promotion_row(self) -> u8 {
        match self {
            Team::White => 8,
            Team::Black => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Kinds a pawn may become on reaching its last row.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Lowercase letter used in UCI promotion suffixes and board dumps.
    pub const fn letter(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceType> {
        match letter.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'r' => Some(PieceType::Rook),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Rook => "rook",
            PieceType::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// A piece value. Promotion produces a new `Piece`; nothing mutates one in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub team: Team,
}

impl Piece {
    pub const fn new(piece_type: PieceType, team: Team) -> Self {
        Piece { piece_type, team }
    }
}

impl fmt::Display for Piece {
    /// Single letter, uppercase for White.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.piece_type.letter();
        match self.team {
            Team::White => write!(f, "{}", letter.to_ascii_uppercase()),
            Team::Black => write!(f, "{letter}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips_both_ways() {
        assert_eq!(Team::White.opposite(), Team::Black);
        assert_eq!(Team::Black.opposite(), Team::White);
    }

    #[test]
    fn pawn_geometry_mirrors_between_teams() {
        assert_eq!(Team::White.forward(), 1);
        assert_eq!(Team::Black.forward(), -1);
        assert_eq!(Team::White.pawn_row() as i32 + 6 * Team::White.forward(), Team::White.promotion_row() as i32);
        assert_eq!(Team::Black.pawn_row() as i32 + 6 * Team::Black.forward(), Team::Black.promotion_row() as i32);
    }

    #[test]
    fn promotions_exclude_king_and_pawn() {
        assert!(!PieceType::PROMOTIONS.contains(&PieceType::King));
        assert!(!PieceType::PROMOTIONS.contains(&PieceType::Pawn));
    }

    #[test]
    fn letters_parse_back_case_insensitively() {
        assert_eq!(PieceType::from_letter('N'), Some(PieceType::Knight));
        assert_eq!(PieceType::from_letter('q'), Some(PieceType::Queen));
        assert_eq!(PieceType::from_letter('x'), None);
    }

    #[test]
    fn display_uses_case_for_team() {
        assert_eq!(Piece::new(PieceType::Knight, Team::White).to_string(), "N");
        assert_eq!(Piece::new(PieceType::Knight, Team::Black).to_string(), "n");
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

/// A square on the board. Rows and columns are 1-indexed: `(1, 1)` is a1 and
/// `(8, 8)` is h8. A `Position` is always on the board; off-board coordinates
/// only ever exist as the integers passed to [`Position::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    column: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    column: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = ChessError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_new(raw.row as i32, raw.column as i32)
            .ok_or_else(|| ChessError::InvalidSquare(format!("({}, {})", raw.row, raw.column)))
    }
}

impl Position {
    /// Panics if either coordinate is outside `1..=8`. Off-board positions are
    /// a caller bug, not a recoverable condition.
    pub fn new(row: u8, column: u8) -> Self {
        assert!(
            Self::is_on_board(row as i32, column as i32),
            "position ({row}, {column}) is off the board"
        );
        Position { row, column }
    }

    pub fn try_new(row: i32, column: i32) -> Option<Self> {
        if Self::is_on_board(row, column) {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    pub fn is_on_board(row: i32, column: i32) -> bool {
        (1..=8).contains(&row) && (1..=8).contains(&column)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn column(self) -> u8 {
        self.column
    }

    /// The square `(d_row, d_column)` away, or `None` if that leaves the board.
    pub fn offset(self, d_row: i32, d_column: i32) -> Option<Position> {
        Self::try_new(self.row as i32 + d_row, self.column as i32 + d_column)
    }

    /// All 64 squares, row by row from a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |column| Position { row, column }))
    }
}

impl fmt::Display for Position {
    /// Algebraic square name, e.g. `e2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column - 1) as char;
        write!(f, "{file}{}", self.row)
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Position {
            row: rank - b'0',
            column: file - b'a' + 1,
        })
    }
}

// =============================================================================
// Geometric move generation, one function per piece kind
//
// These ignore check entirely: a move that leaves the mover's own king
// attacked is still produced here. `Game::valid_moves` does the filtering.
// Every generator only lands on empty squares or on squares held by the other
// team.
// =============================================================================

use std::collections::HashSet;

use crate::board::Board;
use crate::moves::Move;
use crate::piece::{PieceType, Team};
use crate::position::Position;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = QUEEN_DIRECTIONS;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Geometric moves of whatever piece stands on `origin`. Empty when the square
/// is empty.
pub fn piece_moves(board: &Board, origin: Position) -> HashSet<Move> {
    let Some(piece) = board.piece_at(origin) else {
        return HashSet::new();
    };
    match piece.piece_type {
        PieceType::King => king_moves(board, origin),
        PieceType::Queen => queen_moves(board, origin),
        PieceType::Bishop => bishop_moves(board, origin),
        PieceType::Knight => knight_moves(board, origin),
        PieceType::Rook => rook_moves(board, origin),
        PieceType::Pawn => pawn_moves(board, origin),
    }
}

// The per-kind generators below move the occupant of `origin` with that
// kind's geometry and take the mover's team from it. They do not check the
// occupant's kind; `piece_moves` is the entry point that does.

pub fn king_moves(board: &Board, origin: Position) -> HashSet<Move> {
    generate_for(board, origin, |team, moves| {
        stepping_moves(board, origin, team, &KING_OFFSETS, moves)
    })
}

pub fn queen_moves(board: &Board, origin: Position) -> HashSet<Move> {
    generate_for(board, origin, |team, moves| {
        sliding_moves(board, origin, team, &QUEEN_DIRECTIONS, moves)
    })
}

pub fn bishop_moves(board: &Board, origin: Position) -> HashSet<Move> {
    generate_for(board, origin, |team, moves| {
        sliding_moves(board, origin, team, &BISHOP_DIRECTIONS, moves)
    })
}

pub fn knight_moves(board: &Board, origin: Position) -> HashSet<Move> {
    generate_for(board, origin, |team, moves| {
        stepping_moves(board, origin, team, &KNIGHT_OFFSETS, moves)
    })
}

pub fn rook_moves(board: &Board, origin: Position) -> HashSet<Move> {
    generate_for(board, origin, |team, moves| {
        sliding_moves(board, origin, team, &ROOK_DIRECTIONS, moves)
    })
}

pub fn pawn_moves(board: &Board, origin: Position) -> HashSet<Move> {
    generate_for(board, origin, |team, moves| {
        pawn_moves_into(board, origin, team, moves)
    })
}

/// Runs `generate` with the team of the piece on `origin`. An empty square
/// yields nothing.
fn generate_for(
    board: &Board,
    origin: Position,
    generate: impl FnOnce(Team, &mut HashSet<Move>),
) -> HashSet<Move> {
    let mut moves = HashSet::new();
    if let Some(team) = board.team_at(origin) {
        generate(team, &mut moves);
    }
    moves
}

/// Walk each direction until the edge or a piece. An enemy piece is captured
/// and ends the ray; a friendly one just ends it.
fn sliding_moves(
    board: &Board,
    origin: Position,
    team: Team,
    directions: &[(i32, i32)],
    moves: &mut HashSet<Move>,
) {
    for &(dr, dc) in directions {
        let mut next = origin.offset(dr, dc);
        while let Some(target) = next {
            match board.team_at(target) {
                None => {
                    moves.insert(Move::new(origin, target, None));
                }
                Some(other) => {
                    if other != team {
                        moves.insert(Move::new(origin, target, None));
                    }
                    break;
                }
            }
            next = target.offset(dr, dc);
        }
    }
}

fn stepping_moves(
    board: &Board,
    origin: Position,
    team: Team,
    offsets: &[(i32, i32)],
    moves: &mut HashSet<Move>,
) {
    for &(dr, dc) in offsets {
        let Some(target) = origin.offset(dr, dc) else {
            continue;
        };
        if board.team_at(target) == Some(team) {
            continue;
        }
        moves.insert(Move::new(origin, target, None));
    }
}

fn pawn_moves_into(board: &Board, origin: Position, team: Team, moves: &mut HashSet<Move>) {
    let dir = team.forward();

    // Single push, then double push from the starting row
    if let Some(one) = origin.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            push_pawn_move(origin, one, team, moves);

            if origin.row() == team.pawn_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.piece_at(two).is_none() {
                        push_pawn_move(origin, two, team, moves);
                    }
                }
            }
        }
    }

    // Diagonal captures
    for dc in [-1, 1] {
        if let Some(target) = origin.offset(dir, dc) {
            if board.team_at(target) == Some(team.opposite()) {
                push_pawn_move(origin, target, team, moves);
            }
        }
    }
}

/// A pawn reaching its last row yields one move per promotion kind and never
/// a plain move.
fn push_pawn_move(origin: Position, target: Position, team: Team, moves: &mut HashSet<Move>) {
    if target.row() == team.promotion_row() {
        for kind in PieceType::PROMOTIONS {
            moves.insert(Move::new(origin, target, Some(kind)));
        }
    } else {
        moves.insert(Move::new(origin, target, None));
    }
}

// =============================================================================
// Invariants checked over seeded random games
// =============================================================================

use std::collections::HashSet;

use chess_rules::movegen::piece_moves;
use chess_rules::playout::{play_from, random_move, random_playout, PlayoutConfig, PlayoutOutcome};
use chess_rules::{Board, Game, Piece, PieceType, Position, Team};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEEDS: [u64; 6] = [1, 2, 3, 11, 42, 1234];

/// Every geometric move leaves its origin and never lands on a friendly piece.
fn assert_geometry_sound(board: &Board) {
    for team in [Team::White, Team::Black] {
        for (origin, _) in board.pieces(team) {
            for m in piece_moves(board, origin) {
                assert_eq!(m.start(), origin);
                assert_ne!(board.team_at(m.end()), Some(team), "{m} lands on a friend");
                assert_ne!(m.end(), origin, "{m} stands still");
            }
        }
    }
}

#[test]
fn mover_is_never_left_in_check() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..150 {
            let mover = game.team_turn();
            let Some(m) = random_move(&game, &mut rng).unwrap() else {
                break;
            };
            game.make_move(m).unwrap();
            assert!(!game.is_in_check(mover).unwrap(), "seed {seed}: {m} left {mover} in check");
            assert_eq!(game.team_turn(), mover.opposite());
        }
    }
}

#[test]
fn generators_stay_sound_through_random_games() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..80 {
            assert_geometry_sound(game.board());
            let Some(m) = random_move(&game, &mut rng).unwrap() else {
                break;
            };
            game.make_move(m).unwrap();
        }
    }
}

#[test]
fn legal_moves_are_a_subset_of_geometric_moves() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..60 {
            for (origin, _) in game.board().pieces(game.team_turn()) {
                let legal = game.valid_moves(origin).unwrap().unwrap();
                let geometric = piece_moves(game.board(), origin);
                assert!(legal.is_subset(&geometric));
            }
            let Some(m) = random_move(&game, &mut rng).unwrap() else {
                break;
            };
            game.make_move(m).unwrap();
        }
    }
}

#[test]
fn kings_always_survive() {
    for seed in SEEDS {
        let config = PlayoutConfig {
            max_plies: 300,
            seed: Some(seed),
        };
        let summary = random_playout(&config).unwrap();
        let board = summary.game.board();
        assert!(board.find_king(Team::White).is_some());
        assert!(board.find_king(Team::Black).is_some());
    }
}

#[test]
fn playout_outcome_matches_predicates() {
    for seed in SEEDS {
        let config = PlayoutConfig {
            max_plies: 300,
            seed: Some(seed),
        };
        let summary = random_playout(&config).unwrap();
        let game = &summary.game;
        let mover = game.team_turn();
        match summary.outcome {
            PlayoutOutcome::Checkmate { winner } => {
                assert_eq!(winner, mover.opposite());
                assert!(game.is_in_checkmate(mover).unwrap());
                assert!(!game.is_in_stalemate(mover).unwrap());
            }
            PlayoutOutcome::Stalemate => {
                assert!(game.is_in_stalemate(mover).unwrap());
                assert!(!game.is_in_checkmate(mover).unwrap());
            }
            PlayoutOutcome::PlyLimit => {
                assert_eq!(summary.plies(), 300);
                assert!(!game.is_in_checkmate(mover).unwrap());
                assert!(!game.is_in_stalemate(mover).unwrap());
            }
        }
    }
}

#[test]
fn replaying_recorded_moves_reproduces_the_game() {
    let config = PlayoutConfig {
        max_plies: 120,
        seed: Some(99),
    };
    let summary = random_playout(&config).unwrap();
    let mut replay = Game::new();
    for m in &summary.moves {
        let text = m.to_uci();
        replay.make_move(text.parse().unwrap()).unwrap();
    }
    assert_eq!(replay.board(), summary.game.board());
    assert_eq!(replay.team_turn(), summary.game.team_turn());
}

#[test]
fn json_round_trip_through_random_positions() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let summary = play_from(Game::new(), 40, &mut rng).unwrap();
        let json = summary.game.to_json().unwrap();
        assert_eq!(Game::from_json(&json).unwrap(), summary.game);
    }
}

#[test]
fn board_equality_is_an_equivalence() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = play_from(Game::new(), 30, &mut rng).unwrap().game.board().clone();
    let b = a.clone();
    let c = b.clone();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);

    let hashes: HashSet<Board> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(hashes.len(), 1);

    let mut d = a.clone();
    let square = Position::all().find(|&p| d.piece_at(p).is_none()).unwrap();
    d.place(square, Some(Piece::new(PieceType::Knight, Team::White)));
    assert_ne!(a, d);
}

use crate::game::Game;
use crate::moves::Move;
use crate::piece::{PieceType, Team};
use crate::position::Position;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SquarePiece {
    piece_type: String,
    team: String,
}

#[derive(Serialize)]
struct MoveJson {
    from: [u8; 2],
    to: [u8; 2],
    promotion: Option<String>,
}

#[derive(Serialize)]
struct BoardState {
    /// `squares[row - 1][column - 1]`
    squares: Vec<Vec<Option<SquarePiece>>>,
    team_turn: String,
    game_over: bool,
    status: Option<String>,
    error: Option<String>,
}

#[derive(Serialize)]
struct ErrorJson {
    error: String,
}

fn piece_type_to_string(pt: PieceType) -> String {
    match pt {
        PieceType::King => "King".to_string(),
        PieceType::Queen => "Queen".to_string(),
        PieceType::Rook => "Rook".to_string(),
        PieceType::Bishop => "Bishop".to_string(),
        PieceType::Knight => "Knight".to_string(),
        PieceType::Pawn => "Pawn".to_string(),
    }
}

fn string_to_piece_type(s: &str) -> Option<PieceType> {
    match s {
        "Queen" => Some(PieceType::Queen),
        "Rook" => Some(PieceType::Rook),
        "Bishop" => Some(PieceType::Bishop),
        "Knight" => Some(PieceType::Knight),
        _ => None,
    }
}

fn move_to_json(m: &Move) -> MoveJson {
    MoveJson {
        from: [m.start().row(), m.start().column()],
        to: [m.end().row(), m.end().column()],
        promotion: m.promotion().map(piece_type_to_string),
    }
}

/// Coordinates from JS are untrusted; off-board values become `None`.
fn position_from_js(row: u32, column: u32) -> Option<Position> {
    let row = i32::try_from(row).ok()?;
    let column = i32::try_from(column).ok()?;
    Position::try_new(row, column)
}

fn build_board_state(game: &Game) -> BoardState {
    let squares = (1..=8u8)
        .map(|r| {
            (1..=8u8)
                .map(|c| {
                    game.board().piece_at(Position::new(r, c)).map(|p| SquarePiece {
                        piece_type: piece_type_to_string(p.piece_type),
                        team: p.team.to_string(),
                    })
                })
                .collect()
        })
        .collect();

    let (status, error) = match game.status(game.team_turn()) {
        Ok(status) => (Some(status.to_string()), None),
        Err(e) => (None, Some(e.to_string())),
    };

    BoardState {
        squares,
        team_turn: game.team_turn().to_string(),
        game_over: game.is_game_over(),
        status,
        error,
    }
}

/// Uniform index in `0..len` from `Math.random()`.
fn random_index(len: usize) -> usize {
    let i = (js_sys::Math::random() * len as f64) as usize;
    i.min(len - 1)
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_js(message: impl ToString) -> JsValue {
    to_js(&ErrorJson {
        error: message.to_string(),
    })
}

#[wasm_bindgen(js_name = Game)]
pub struct WasmGame {
    game: Game,
}

impl WasmGame {
    /// Play `m`, ending the game on checkmate or stalemate.
    fn commit(&mut self, m: Move) -> JsValue {
        let mut trial = self.game.clone();
        if let Err(e) = trial.make_move(m) {
            return error_js(e);
        }
        match trial.status(trial.team_turn()) {
            Ok(status) => {
                if status.is_terminal() {
                    trial.set_game_over(true);
                }
            }
            Err(e) => return error_js(e),
        }
        self.game = trial;
        self.get_board_state()
    }
}

#[wasm_bindgen(js_class = Game)]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { game: Game::new() }
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.game))
    }

    /// Legal moves of the piece on (row, column), for highlighting. `null` for
    /// an empty square.
    pub fn valid_moves(&self, row: u32, column: u32) -> JsValue {
        let Some(start) = position_from_js(row, column) else {
            return error_js(format!("square ({row}, {column}) is off the board"));
        };
        match self.game.valid_moves(start) {
            Ok(Some(moves)) => {
                let mut moves: Vec<Move> = moves.into_iter().collect();
                moves.sort();
                to_js(&moves.iter().map(move_to_json).collect::<Vec<_>>())
            }
            Ok(None) => JsValue::NULL,
            Err(e) => error_js(e),
        }
    }

    pub fn make_move(
        &mut self,
        from_row: u32,
        from_col: u32,
        to_row: u32,
        to_col: u32,
        promotion: Option<String>,
    ) -> JsValue {
        if self.game.is_game_over() {
            return error_js("Game is already over");
        }

        let (Some(start), Some(end)) = (
            position_from_js(from_row, from_col),
            position_from_js(to_row, to_col),
        ) else {
            return error_js("square is off the board");
        };

        let promotion = match promotion.as_deref() {
            Some(name) => match string_to_piece_type(name) {
                Some(pt) => Some(pt),
                None => return error_js(format!("cannot promote to {name}")),
            },
            None => None,
        };

        self.commit(Move::new(start, end, promotion))
    }

    /// Play a random legal move for the side to move.
    pub fn make_random_move(&mut self) -> JsValue {
        if self.game.is_game_over() {
            return self.get_board_state();
        }
        let moves = match self.game.legal_moves(self.game.team_turn()) {
            Ok(moves) => moves,
            Err(e) => return error_js(e),
        };
        if moves.is_empty() {
            return self.get_board_state();
        }
        self.commit(moves[random_index(moves.len())])
    }

    /// Throws an error object if `team` has no king on the board.
    pub fn is_in_check(&self, white: bool) -> Result<bool, JsValue> {
        let team = if white { Team::White } else { Team::Black };
        self.game.is_in_check(team).map_err(error_js)
    }

    pub fn resign(&mut self) {
        self.game.set_game_over(true);
    }

    pub fn to_json(&self) -> Option<String> {
        self.game.to_json().ok()
    }

    /// Replace the game with a saved one. Returns an error object if the JSON
    /// does not describe a valid game.
    pub fn load_json(&mut self, json: &str) -> JsValue {
        match Game::from_json(json) {
            Ok(game) => {
                self.game = game;
                self.get_board_state()
            }
            Err(e) => error_js(e),
        }
    }
}

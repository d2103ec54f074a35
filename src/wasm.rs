use wasm_bindgen::prelude::*;

use crate::board::Color;
use crate::game::{Game, GameObserver, GameOptions};
use crate::moves::perft::print_divide;
use crate::moves::types::MoveReport;
use crate::output::rules_println;
use crate::square::Square;
use crate::status::position_status;
use std::str::FromStr;

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Forwards core notifications to JavaScript callbacks.
#[derive(Default)]
struct JsObserver {
    on_move_applied: Option<js_sys::Function>,
    on_turn_changed: Option<js_sys::Function>,
    on_check: Option<js_sys::Function>,
    on_checkmate: Option<js_sys::Function>,
}

impl JsObserver {
    fn fire(f: &Option<js_sys::Function>, args: &[JsValue]) {
        let Some(f) = f else { return };
        let result = match args {
            [] => f.call0(&JsValue::NULL),
            [a] => f.call1(&JsValue::NULL, a),
            [a, b, ..] => f.call2(&JsValue::NULL, a, b),
        };
        if let Err(err) = result {
            rules_println!("callback threw: {:?}", err);
        }
    }
}

impl GameObserver for JsObserver {
    fn on_move_applied(&mut self, from: Square, to: Square) {
        let from = JsValue::from_str(&from.to_string());
        let to = JsValue::from_str(&to.to_string());
        Self::fire(&self.on_move_applied, &[from, to]);
    }

    fn on_turn_changed(&mut self, turn: Color) {
        Self::fire(&self.on_turn_changed, &[JsValue::from_str(color_name(turn))]);
    }

    fn on_check(&mut self, side: Color) {
        Self::fire(&self.on_check, &[JsValue::from_str(color_name(side))]);
    }

    fn on_checkmate(&mut self, side: Color) {
        Self::fire(&self.on_checkmate, &[JsValue::from_str(color_name(side))]);
    }
}

#[wasm_bindgen]
pub struct RulesEngine {
    game: Game,
    observer: JsObserver,
}

#[wasm_bindgen]
impl RulesEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(free_move: bool) -> RulesEngine {
        console_error_panic_hook::set_once();
        let options = GameOptions::default().with_free_move(free_move);
        RulesEngine {
            game: Game::with_options(options),
            observer: JsObserver::default(),
        }
    }

    /// Reset to the opening position, keeping callbacks and options.
    pub fn new_game(&mut self) {
        self.game = Game::with_options(self.game.options());
    }

    pub fn set_strict(&mut self, on: bool) {
        let options = self.game.options().with_strict_legality(on);
        self.game.set_options(options);
    }

    pub fn set_on_move_applied(&mut self, f: js_sys::Function) {
        self.observer.on_move_applied = Some(f);
    }

    pub fn set_on_turn_changed(&mut self, f: js_sys::Function) {
        self.observer.on_turn_changed = Some(f);
    }

    pub fn set_on_check(&mut self, f: js_sys::Function) {
        self.observer.on_check = Some(f);
    }

    pub fn set_on_checkmate(&mut self, f: js_sys::Function) {
        self.observer.on_checkmate = Some(f);
    }

    /// "white" or "black"
    pub fn turn(&self) -> String {
        color_name(self.game.turn()).to_string()
    }

    /// Text diagram of the board.
    pub fn board(&self) -> String {
        self.game.board().to_string()
    }

    /// Destinations for the piece on `square` (e.g. "e2") as a JSON array
    /// like `["e3","e4"]`; `[]` for an empty or malformed square.
    pub fn legal_moves_for(&self, square: &str) -> String {
        let targets = Square::from_str(square)
            .ok()
            .and_then(|sq| self.game.legal_moves_for(sq).ok())
            .unwrap_or_default();
        let names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Returns the JSON move report:
    /// {"applied":true,"promoted":false,"castled":false,"check":false,"checkmate":false}
    pub fn attempt_move(&mut self, from: &str, to: &str) -> String {
        let report = match (Square::from_str(from), Square::from_str(to)) {
            (Ok(from), Ok(to)) => self
                .game
                .attempt_move_with(from, to, &mut self.observer)
                .unwrap_or_else(|err| {
                    rules_println!("attempt_move: {}", err);
                    MoveReport::rejected()
                }),
            _ => MoveReport::rejected(),
        };
        serde_json::to_string(&report).unwrap_or_default()
    }

    /// "in_play", "check", "checkmate", "stalemate" or "draw_dead_position"
    pub fn status(&mut self) -> String {
        let status = position_status(&mut self.game);
        serde_json::to_value(status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    /// Print a divide table to the browser console; returns the node total.
    pub fn divide(&self, depth: u32) -> f64 {
        print_divide(&self.game, depth) as f64
    }
}

//! WebAssembly bindings for the Marble Duel engine.
//!
//! The JS host owns the canvas and the timer: it forwards clicks to
//! `click`, and when the returned events contain `ComputerTurnScheduled`
//! it calls `computerTurn` after the requested delay.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::GameAction;
#[cfg(feature = "wasm")]
use crate::board::Player;
#[cfg(feature = "wasm")]
use crate::bot::{Bot, BotDifficulty};
#[cfg(feature = "wasm")]
use crate::game::GameState;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    bot: Bot,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game. difficulty: "easy", "medium" or "hard"
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: &str) -> Result<WasmGame, JsValue> {
        let difficulty: BotDifficulty = difficulty
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        Ok(WasmGame {
            state: GameState::new(difficulty),
            bot: Bot::new(Player::Two),
        })
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the slots (position and owner) as JSON, for rendering
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(self.state.board.slots()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the selected slot index, if any
    #[wasm_bindgen(js_name = getSelected)]
    pub fn get_selected(&self) -> Option<u32> {
        self.state.selected().map(|slot| slot as u32)
    }

    /// Whether the game is waiting on a click
    #[wasm_bindgen(js_name = isHumanTurn)]
    pub fn is_human_turn(&self) -> bool {
        self.state.is_human_turn()
    }

    /// Forward a canvas click, returns events JSON
    #[wasm_bindgen(js_name = click)]
    pub fn click(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        self.apply(GameAction::Click { x, y })
    }

    /// Run the scheduled computer turn, returns events JSON
    #[wasm_bindgen(js_name = computerTurn)]
    pub fn computer_turn(&mut self) -> Result<String, JsValue> {
        let events = self
            .state
            .play_computer_turn(&mut self.bot)
            .map_err(|e| JsValue::from_str(&format!("Computer turn failed: {}", e)))?;
        Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Change difficulty: "easy", "medium" or "hard"
    #[wasm_bindgen(js_name = setDifficulty)]
    pub fn set_difficulty(&mut self, difficulty: &str) -> Result<String, JsValue> {
        let difficulty: BotDifficulty = difficulty
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        self.apply(GameAction::SetDifficulty(difficulty))
    }

    /// Reset the board to its starting position
    #[wasm_bindgen(js_name = restart)]
    pub fn restart(&mut self) -> Result<String, JsValue> {
        self.apply(GameAction::Restart)
    }
}

#[cfg(feature = "wasm")]
impl WasmGame {
    fn apply(&mut self, action: GameAction) -> Result<String, JsValue> {
        match self.state.apply_action(action) {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Action failed: {}", e))),
        }
    }
}

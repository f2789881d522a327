//! Inputs to the turn controller and the events it emits.

use crate::board::{Player, SlotIndex};
use crate::bot::BotDifficulty;
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Everything that can be fed to [`GameState::apply_action`](crate::GameState::apply_action)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameAction {
    // ==================== Human Input ====================
    /// A click in board space, mapped to a slot by hit testing
    Click { x: f64, y: f64 },
    /// Select a piece or choose a destination, depending on the turn phase
    Activate(SlotIndex),

    // ==================== Computer Turn ====================
    /// Commit the computer's chosen move, or forfeit with `None`
    ComputerMove(Option<Move>),

    // ==================== Session ====================
    /// Change the computer's difficulty, read at its next decision
    SetDifficulty(BotDifficulty),
    /// Reset the board and turn to the starting position
    Restart,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// PlayerOne selected one of their pieces
    SlotSelected { slot: SlotIndex },

    /// A piece moved one step
    MoveApplied { player: Player, from: SlotIndex, to: SlotIndex },

    /// The computer had no legal move and gave up its turn
    TurnForfeited { player: Player },

    /// The active player changed
    TurnPassed { player: Player, next_player: Player },

    /// The front end should call `play_computer_turn` after this delay
    ComputerTurnScheduled { delay_ms: u64 },

    /// Difficulty setting changed
    DifficultyChanged { difficulty: BotDifficulty },

    /// The game was reset to its starting position
    GameRestarted,
}

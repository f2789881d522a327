//! Turn controller.
//!
//! This module contains the `GameState` struct and the turn state machine.
//! Human input that does not fit the current phase is dropped silently, so
//! mis-clicks never disturb the game.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, BoardError, Owner, Player, SlotIndex};
use crate::bot::{Bot, BotDifficulty};
use crate::moves::{is_legal, legal_moves, Move};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pause between the human's move and the computer's reply
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 400;

/// Turn phase. PlayerOne owns the first two phases, PlayerTwo the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the human to pick one of their pieces
    AwaitingSelection,

    /// A piece is selected, waiting for a destination
    AwaitingDestination {
        selected: SlotIndex,
    },

    /// The computer's move is pending
    ComputerThinking,
}

/// Errors that can occur when applying actions
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Not the computer's turn")]
    NotComputerTurn,

    #[error("Illegal move from slot {from} to slot {to}")]
    IllegalMove { from: SlotIndex, to: SlotIndex },
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The game board
    pub board: Board,
    /// Current turn phase
    pub phase: TurnPhase,
    /// Difficulty used for the next computer decision
    pub difficulty: BotDifficulty,
    /// Turn number (starts at 1)
    pub turn_number: u32,
    /// Delay requested before each computer turn
    pub computer_delay_ms: u64,
}

impl GameState {
    /// Create a new game on the standard board
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self::with_board(Board::standard(), difficulty)
    }

    /// Create a new game on a custom board, reset to its starting position
    pub fn with_board(mut board: Board, difficulty: BotDifficulty) -> Self {
        board.initialize();
        Self {
            board,
            phase: TurnPhase::AwaitingSelection,
            difficulty,
            turn_number: 1,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }

    /// Override the computer's presentation delay
    pub fn with_computer_delay(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Player {
        match self.phase {
            TurnPhase::AwaitingSelection | TurnPhase::AwaitingDestination { .. } => Player::One,
            TurnPhase::ComputerThinking => Player::Two,
        }
    }

    /// Whether the game is waiting on human input
    pub fn is_human_turn(&self) -> bool {
        self.current_player() == Player::One
    }

    /// The currently selected slot, if any
    pub fn selected(&self) -> Option<SlotIndex> {
        match self.phase {
            TurnPhase::AwaitingDestination { selected } => Some(selected),
            _ => None,
        }
    }

    /// Where the selected piece could move, for highlighting
    pub fn legal_destinations(&self) -> Vec<SlotIndex> {
        self.selected()
            .and_then(|slot| legal_moves(&self.board, slot).ok())
            .unwrap_or_default()
    }

    /// Apply an action to the game state.
    ///
    /// Returns no events when human input was ignored.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            GameAction::Click { x, y } => match self.board.slot_at(x, y) {
                Some(slot) => self.activate(slot),
                None => Ok(Vec::new()),
            },

            GameAction::Activate(slot) => self.activate(slot),

            GameAction::ComputerMove(choice) => self.apply_computer_move(choice),

            GameAction::SetDifficulty(difficulty) => {
                self.difficulty = difficulty;
                Ok(vec![GameEvent::DifficultyChanged { difficulty }])
            }

            GameAction::Restart => {
                self.board.initialize();
                self.phase = TurnPhase::AwaitingSelection;
                self.turn_number = 1;
                Ok(vec![GameEvent::GameRestarted])
            }
        }
    }

    /// Let `bot` pick and play the computer's move.
    ///
    /// Intended as the callback for `ComputerTurnScheduled`. A callback that
    /// fires after a restart finds the phase changed and does nothing.
    pub fn play_computer_turn(&mut self, bot: &mut Bot) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != TurnPhase::ComputerThinking {
            return Ok(Vec::new());
        }

        let choice = bot.choose_move(&self.board, self.difficulty);
        self.apply_action(GameAction::ComputerMove(choice))
    }

    fn activate(&mut self, slot: SlotIndex) -> Result<Vec<GameEvent>, GameError> {
        let owner = self.board.owner_of(slot)?;

        match self.phase {
            TurnPhase::ComputerThinking => Ok(Vec::new()),

            _ if owner == Owner::PlayerOne => {
                self.phase = TurnPhase::AwaitingDestination { selected: slot };
                Ok(vec![GameEvent::SlotSelected { slot }])
            }

            TurnPhase::AwaitingSelection => Ok(Vec::new()),

            TurnPhase::AwaitingDestination { selected } => {
                if owner != Owner::Empty || !legal_moves(&self.board, selected)?.contains(&slot) {
                    // Selection stays put
                    return Ok(Vec::new());
                }

                let mut events = self.commit(Player::One, Move::new(selected, slot))?;
                events.push(GameEvent::ComputerTurnScheduled {
                    delay_ms: self.computer_delay_ms,
                });
                Ok(events)
            }
        }
    }

    fn apply_computer_move(&mut self, choice: Option<Move>) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != TurnPhase::ComputerThinking {
            return Err(GameError::NotComputerTurn);
        }

        match choice {
            Some(mv) => {
                if !is_legal(&self.board, Player::Two, mv)? {
                    return Err(GameError::IllegalMove {
                        from: mv.from,
                        to: mv.to,
                    });
                }
                self.commit(Player::Two, mv)
            }
            None => Ok(vec![
                GameEvent::TurnForfeited { player: Player::Two },
                self.pass_turn(Player::Two),
            ]),
        }
    }

    /// Move a piece and hand the turn to the other player
    fn commit(&mut self, player: Player, mv: Move) -> Result<Vec<GameEvent>, GameError> {
        self.board.set_owner(mv.to, player.owner())?;
        self.board.set_owner(mv.from, Owner::Empty)?;

        Ok(vec![
            GameEvent::MoveApplied {
                player,
                from: mv.from,
                to: mv.to,
            },
            self.pass_turn(player),
        ])
    }

    fn pass_turn(&mut self, player: Player) -> GameEvent {
        let next_player = player.opponent();
        self.phase = match next_player {
            Player::One => TurnPhase::AwaitingSelection,
            Player::Two => TurnPhase::ComputerThinking,
        };
        self.turn_number += 1;

        GameEvent::TurnPassed {
            player,
            next_player,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BotDifficulty::default())
    }
}

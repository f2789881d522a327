//! Marble Duel - a two-player, single-step marble game engine
//!
//! This crate provides the core game logic, including:
//! - Board model with fixed slot positions and ownership
//! - Single-step move generation by adjacency
//! - Turn state machine for a human player against the computer
//! - Computer opponent with three difficulty levels
//!
//! # Architecture
//!
//! The engine performs no I/O and holds no timers. Front ends feed it
//! [`GameAction`]s and react to the [`GameEvent`]s it returns; the
//! computer's pacing delay is requested through
//! [`GameEvent::ComputerTurnScheduled`]. It can be compiled to:
//! - Native Rust for terminal play
//! - WebAssembly for a canvas front end (`wasm` feature)
//!
//! # Modules
//!
//! - [`board`]: Slot layout and ownership
//! - [`moves`]: Legal move generation
//! - [`actions`]: Turn controller inputs and events
//! - [`game`]: Turn state machine
//! - [`bot`]: Computer opponent

pub mod actions;
pub mod board;
pub mod bot;
pub mod game;
pub mod moves;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, BoardError, Owner, Player, Point, Slot, SlotIndex, SIDE_SIZE, SLOT_RADIUS};
pub use bot::{Bot, BotDifficulty, ParseDifficultyError};
pub use game::{GameError, GameState, TurnPhase, DEFAULT_COMPUTER_DELAY_MS};
pub use moves::{all_moves, legal_moves, Move, ADJACENCY_THRESHOLD};

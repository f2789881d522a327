//! One human-vs-computer session: the game, the computer player and logging.

use crate::config::CliConfig;
use marbles_core::{Bot, GameAction, GameError, GameEvent, GameState, Player};
use std::time::Duration;
use tracing::{debug, info};

pub struct Session {
    pub game: GameState,
    bot: Bot,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        let bot = match config.seed {
            Some(seed) => Bot::with_seed(Player::Two, seed),
            None => Bot::new(Player::Two),
        };

        Self {
            game: GameState::new(config.difficulty).with_computer_delay(config.computer_delay_ms),
            bot,
        }
    }

    /// Apply an action. Returns the delay after which
    /// [`computer_turn`](Self::computer_turn) should run, if one was scheduled.
    pub fn handle(&mut self, action: GameAction) -> Result<Option<Duration>, GameError> {
        let events = self.game.apply_action(action)?;
        if events.is_empty() {
            debug!(?action, "Input ignored");
        }
        log_events(&events);

        Ok(events.iter().find_map(|event| match event {
            GameEvent::ComputerTurnScheduled { delay_ms } => Some(Duration::from_millis(*delay_ms)),
            _ => None,
        }))
    }

    /// Run the computer's scheduled turn
    pub fn computer_turn(&mut self) -> Result<(), GameError> {
        let events = self.game.play_computer_turn(&mut self.bot)?;
        log_events(&events);
        Ok(())
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::MoveApplied { player, from, to } => {
                info!(?player, from, to, "Move applied");
            }
            GameEvent::TurnForfeited { player } => {
                info!(?player, "No legal move, turn forfeited");
            }
            GameEvent::DifficultyChanged { difficulty } => {
                info!(%difficulty, "Difficulty changed");
            }
            GameEvent::GameRestarted => info!("Game restarted"),
            other => debug!(event = ?other, "Game event"),
        }
    }
}

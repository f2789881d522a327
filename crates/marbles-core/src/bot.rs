//! Computer opponent.
//!
//! The bot is a single-ply greedy picker. Each difficulty level only changes
//! how a candidate move is scored:
//! - Easy: a random score, no positional preference
//! - Medium: the destination's y coordinate (advance as far as possible)
//! - Hard: Medium plus a bounded random jitter

use crate::board::{Board, Player};
use crate::moves::{all_moves, Move};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound (exclusive) of the random bonus added to Hard scores
pub const HARD_JITTER: f64 = 50.0;

/// Bot difficulty level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl BotDifficulty {
    pub const ALL: [BotDifficulty; 3] = [
        BotDifficulty::Easy,
        BotDifficulty::Medium,
        BotDifficulty::Hard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BotDifficulty::Easy => "easy",
            BotDifficulty::Medium => "medium",
            BotDifficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for BotDifficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        BotDifficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDifficultyError(name.to_string()))
    }
}

/// A bot player that picks moves for one side
pub struct Bot {
    pub player: Player,
    rng: StdRng,
}

impl Bot {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a move, or `None` if the bot's side cannot move.
    ///
    /// Candidates are visited by source slot, then destination; a later
    /// candidate only wins with a strictly higher score.
    pub fn choose_move(&mut self, board: &Board, difficulty: BotDifficulty) -> Option<Move> {
        let mut best: Option<(Move, f64)> = None;

        for mv in all_moves(board, self.player) {
            let score = self.score(board, mv, difficulty);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
    }

    fn score(&mut self, board: &Board, mv: Move, difficulty: BotDifficulty) -> f64 {
        let advance = || board.position(mv.to).map(|p| p.y).unwrap_or(f64::MIN);

        match difficulty {
            BotDifficulty::Easy => self.rng.gen::<f64>(),
            BotDifficulty::Medium => advance(),
            BotDifficulty::Hard => advance() + self.rng.gen_range(0.0..HARD_JITTER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Owner;
    use crate::moves::is_legal;

    #[test]
    fn test_bot_creation() {
        let bot = Bot::new(Player::Two);
        assert_eq!(bot.player, Player::Two);
    }

    #[test]
    fn test_medium_prefers_furthest_advance() {
        let board = Board::standard();
        let mut bot = Bot::new(Player::Two);

        // 17, 18 and 19 all sit at y = 340; slot 20 -> 17 is found first
        assert_eq!(
            bot.choose_move(&board, BotDifficulty::Medium),
            Some(Move::new(20, 17))
        );
    }

    #[test]
    fn test_medium_picks_highest_y() {
        let mut board = Board::standard();
        // Open a deeper hole inside PlayerTwo's triangle
        board.set_owner(27, Owner::Empty).unwrap();

        let mut bot = Bot::new(Player::Two);
        let mv = bot.choose_move(&board, BotDifficulty::Medium).unwrap();
        assert_eq!(mv.to, 27);
        assert_eq!(mv.from, 24);
    }

    #[test]
    fn test_easy_is_reproducible_with_seed() {
        let board = Board::standard();

        let picks = |seed| {
            let mut bot = Bot::with_seed(Player::Two, seed);
            (0..5)
                .map(|_| bot.choose_move(&board, BotDifficulty::Easy))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_every_difficulty_returns_legal_move() {
        let board = Board::standard();

        for difficulty in BotDifficulty::ALL {
            let mut bot = Bot::with_seed(Player::Two, 7);
            let mv = bot.choose_move(&board, difficulty).unwrap();
            assert!(is_legal(&board, Player::Two, mv).unwrap());
        }
    }

    #[test]
    fn test_hard_jitter_cannot_beat_large_advance() {
        let mut board = Board::standard();
        board.set_owner(27, Owner::Empty).unwrap();
        let mut bot = Bot::with_seed(Player::Two, 3);

        // y = 430 vs y = 340: a gap wider than the jitter
        for _ in 0..20 {
            let mv = bot.choose_move(&board, BotDifficulty::Hard).unwrap();
            assert_eq!(mv.to, 27);
        }
    }

    #[test]
    fn test_no_move_returns_none() {
        let mut board = Board::standard();
        for i in 20..30 {
            board.set_owner(i, Owner::Empty).unwrap();
        }

        let mut bot = Bot::with_seed(Player::Two, 1);
        assert_eq!(bot.choose_move(&board, BotDifficulty::Hard), None);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<BotDifficulty>(), Ok(BotDifficulty::Easy));
        assert_eq!(" Medium ".parse::<BotDifficulty>(), Ok(BotDifficulty::Medium));
        assert_eq!("HARD".parse::<BotDifficulty>(), Ok(BotDifficulty::Hard));
        assert_eq!(
            "expert".parse::<BotDifficulty>(),
            Err(ParseDifficultyError("expert".to_string()))
        );
        assert_eq!(BotDifficulty::default(), BotDifficulty::Medium);
        assert_eq!(BotDifficulty::Hard.to_string(), "hard");
    }
}

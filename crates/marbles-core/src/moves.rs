//! Single-step move generation.

use crate::board::{Board, BoardError, Owner, Player, SlotIndex};
use serde::{Deserialize, Serialize};

/// Maximum centre distance (exclusive) between two adjacent slots.
///
/// Diagonal neighbours on the standard layout sit ~42.4 apart; the next
/// closest slots are 60 apart.
pub const ADJACENCY_THRESHOLD: f64 = 45.0;

/// A single-step move from one slot to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: SlotIndex,
    pub to: SlotIndex,
}

impl Move {
    pub fn new(from: SlotIndex, to: SlotIndex) -> Self {
        Self { from, to }
    }
}

/// Empty slots adjacent to `from`, in board order.
///
/// Does not look at who owns `from`; callers decide whose piece is moving.
pub fn legal_moves(board: &Board, from: SlotIndex) -> Result<Vec<SlotIndex>, BoardError> {
    let origin = board.position(from)?;

    Ok(board
        .slots()
        .iter()
        .enumerate()
        .filter(|&(j, slot)| {
            j != from
                && slot.owner == Owner::Empty
                && origin.distance_to(&slot.position) < ADJACENCY_THRESHOLD
        })
        .map(|(j, _)| j)
        .collect())
}

/// Check whether `mv` is a legal move for `player`
pub fn is_legal(board: &Board, player: Player, mv: Move) -> Result<bool, BoardError> {
    if board.owner_of(mv.from)? != player.owner() {
        return Ok(false);
    }
    Ok(legal_moves(board, mv.from)?.contains(&mv.to))
}

/// Every legal move for `player`, ordered by source slot then destination
pub fn all_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .slots_owned_by(player.owner())
        .into_iter()
        .flat_map(|from| {
            legal_moves(board, from)
                .unwrap_or_default()
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    #[test]
    fn test_no_moves_from_blocked_apex() {
        let board = Board::standard();
        // Slot 0's only neighbours (1 and 2) are PlayerOne's own pieces
        assert!(legal_moves(&board, 0).unwrap().is_empty());
    }

    #[test]
    fn test_unique_adjacent_empty_slot() {
        let board = Board::standard();
        assert_eq!(legal_moves(&board, 6).unwrap(), vec![10]);
        assert_eq!(legal_moves(&board, 7).unwrap(), vec![10, 11]);
    }

    #[test]
    fn test_moves_exclude_origin_and_occupied() {
        let mut board = Board::standard();
        board.set_owner(3, Owner::Empty).unwrap();

        for from in 0..board.len() {
            for to in legal_moves(&board, from).unwrap() {
                assert_ne!(to, from);
                assert_eq!(board.owner_of(to).unwrap(), Owner::Empty);
            }
        }

        // Empty origin never lists itself
        assert!(!legal_moves(&board, 3).unwrap().contains(&3));
    }

    #[test]
    fn test_out_of_range_origin() {
        let board = Board::standard();
        assert!(legal_moves(&board, 30).is_err());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let layout = vec![
            Point::new(0.0, 0.0),
            Point::new(ADJACENCY_THRESHOLD, 0.0),
            Point::new(0.0, ADJACENCY_THRESHOLD - 1.0),
            Point::new(500.0, 500.0),
        ];
        let board = Board::new(layout, 1).unwrap();
        assert_eq!(legal_moves(&board, 0).unwrap(), vec![2]);
    }

    #[test]
    fn test_is_legal() {
        let board = Board::standard();
        assert!(is_legal(&board, Player::One, Move::new(6, 10)).unwrap());
        assert!(!is_legal(&board, Player::Two, Move::new(6, 10)).unwrap());
        assert!(!is_legal(&board, Player::One, Move::new(6, 11)).unwrap());
        assert!(is_legal(&board, Player::One, Move::new(60, 10)).is_err());
    }

    #[test]
    fn test_all_moves_ordering() {
        let board = Board::standard();
        let moves = all_moves(&board, Player::Two);

        assert!(!moves.is_empty());
        assert_eq!(moves[0], Move::new(20, 17));
        let mut sorted = moves.clone();
        sorted.sort_by_key(|m| (m.from, m.to));
        assert_eq!(moves, sorted);
    }
}

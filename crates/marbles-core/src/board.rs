//! Board representation: fixed slot positions and per-slot ownership.
//!
//! This module contains:
//! - Owner and player types
//! - The standard star-shaped slot layout
//! - Ownership queries and the raw ownership mutator
//! - Geometry helpers (distance, hit testing)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Index of a slot in the board's fixed ordering
pub type SlotIndex = usize;

/// Number of pieces each player starts with on the standard board
pub const SIDE_SIZE: usize = 10;

/// Drawn radius of a slot, also used as the click hit radius
pub const SLOT_RADIUS: f64 = 12.0;

/// Slot centres of the standard board, in pixels.
///
/// The first triangle points up and holds PlayerOne's start; the second
/// points down and holds PlayerTwo's start.
const STANDARD_LAYOUT: [(f64, f64); 30] = [
    (300.0, 60.0),
    (270.0, 90.0),
    (330.0, 90.0),
    (240.0, 120.0),
    (300.0, 120.0),
    (360.0, 120.0),
    (210.0, 150.0),
    (270.0, 150.0),
    (330.0, 150.0),
    (390.0, 150.0),
    (240.0, 180.0),
    (300.0, 180.0),
    (360.0, 180.0),
    (270.0, 210.0),
    (330.0, 210.0),
    (270.0, 310.0),
    (330.0, 310.0),
    (240.0, 340.0),
    (300.0, 340.0),
    (360.0, 340.0),
    (210.0, 370.0),
    (270.0, 370.0),
    (330.0, 370.0),
    (390.0, 370.0),
    (240.0, 400.0),
    (300.0, 400.0),
    (360.0, 400.0),
    (270.0, 430.0),
    (330.0, 430.0),
    (300.0, 460.0),
];

/// Board errors. These indicate a geometry or programming bug, not bad user input.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Slot {slot} out of range (board has {len} slots)")]
    SlotOutOfRange { slot: SlotIndex, len: usize },

    #[error("Layout of {slots} slots cannot hold two sides of {side_size}")]
    LayoutTooSmall { slots: usize, side_size: usize },
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player, starting at the top of the board
    One,
    /// The computer player, starting at the bottom of the board
    Two,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The slot owner value for this player's pieces
    pub fn owner(self) -> Owner {
        match self {
            Player::One => Owner::PlayerOne,
            Player::Two => Owner::PlayerTwo,
        }
    }
}

/// Who occupies a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Owner {
    /// The player occupying the slot, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Empty => None,
            Owner::PlayerOne => Some(Player::One),
            Owner::PlayerTwo => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Owner::Empty
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        player.owner()
    }
}

/// A point in board (pixel) space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A single board position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Fixed centre of the slot
    pub position: Point,
    /// Current occupant
    pub owner: Owner,
}

/// The game board: a fixed ordered list of slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<Slot>,
    side_size: usize,
}

impl Board {
    /// Create a board from a custom layout, already in its starting position
    pub fn new(layout: Vec<Point>, side_size: usize) -> Result<Self, BoardError> {
        if layout.len() < side_size * 2 {
            return Err(BoardError::LayoutTooSmall {
                slots: layout.len(),
                side_size,
            });
        }

        let mut board = Self {
            slots: layout
                .into_iter()
                .map(|position| Slot {
                    position,
                    owner: Owner::Empty,
                })
                .collect(),
            side_size,
        };
        board.initialize();
        Ok(board)
    }

    /// Create the standard 30-slot board in its starting position
    pub fn standard() -> Self {
        let mut board = Self {
            slots: STANDARD_LAYOUT
                .iter()
                .map(|&(x, y)| Slot {
                    position: Point::new(x, y),
                    owner: Owner::Empty,
                })
                .collect(),
            side_size: SIDE_SIZE,
        };
        board.initialize();
        board
    }

    /// Reset ownership to the starting position.
    ///
    /// The first `side_size` slots belong to PlayerOne, the last `side_size`
    /// to PlayerTwo, everything in between is empty.
    pub fn initialize(&mut self) {
        let len = self.slots.len();
        let side = self.side_size;

        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.owner = if i < side {
                Owner::PlayerOne
            } else if i >= len - side {
                Owner::PlayerTwo
            } else {
                Owner::Empty
            };
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pieces per side at the start of a game
    pub fn side_size(&self) -> usize {
        self.side_size
    }

    /// All slots in board order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn slot(&self, index: SlotIndex) -> Result<&Slot, BoardError> {
        self.slots.get(index).ok_or(BoardError::SlotOutOfRange {
            slot: index,
            len: self.slots.len(),
        })
    }

    /// Get the owner of a slot
    pub fn owner_of(&self, index: SlotIndex) -> Result<Owner, BoardError> {
        self.slot(index).map(|s| s.owner)
    }

    /// Overwrite the owner of a slot. Performs no rules checking.
    pub fn set_owner(&mut self, index: SlotIndex, owner: Owner) -> Result<(), BoardError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(BoardError::SlotOutOfRange { slot: index, len })?;
        slot.owner = owner;
        Ok(())
    }

    /// Fixed centre of a slot
    pub fn position(&self, index: SlotIndex) -> Result<Point, BoardError> {
        self.slot(index).map(|s| s.position)
    }

    /// Euclidean distance between two slots
    pub fn distance(&self, a: SlotIndex, b: SlotIndex) -> Result<f64, BoardError> {
        Ok(self.slot(a)?.position.distance_to(&self.slot(b)?.position))
    }

    /// Count the slots with a given owner
    pub fn count(&self, owner: Owner) -> usize {
        self.slots.iter().filter(|s| s.owner == owner).count()
    }

    /// Indices of all slots with a given owner, in board order
    pub fn slots_owned_by(&self, owner: Owner) -> Vec<SlotIndex> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.owner == owner)
            .map(|(i, _)| i)
            .collect()
    }

    /// Find the slot under a click, i.e. the nearest slot whose centre is
    /// strictly within `SLOT_RADIUS` of the point
    pub fn slot_at(&self, x: f64, y: f64) -> Option<SlotIndex> {
        let point = Point::new(x, y);

        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.position.distance_to(&point)))
            .filter(|&(_, d)| d < SLOT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

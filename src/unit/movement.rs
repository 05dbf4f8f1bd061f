//! Movement record for the current turn

use serde::{Deserialize, Serialize};

/// How a unit moved in the movement phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MoveKind {
    #[default]
    Stationary,
    Walked,
    Ran,
    Jumped,
}

/// Movement performed this turn, consumed by both attacker-side and
/// target-side modifier compilers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementRecord {
    pub kind: MoveKind,
    /// Hexes actually traversed
    pub hexes: u32,
}

impl MovementRecord {
    pub fn stationary() -> Self {
        Self::default()
    }

    pub fn walked(hexes: u32) -> Self {
        Self {
            kind: MoveKind::Walked,
            hexes,
        }
    }

    pub fn ran(hexes: u32) -> Self {
        Self {
            kind: MoveKind::Ran,
            hexes,
        }
    }

    pub fn jumped(hexes: u32) -> Self {
        Self {
            kind: MoveKind::Jumped,
            hexes,
        }
    }
}

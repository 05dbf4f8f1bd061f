//! Turn phases

use serde::{Deserialize, Serialize};

/// Phase of the current game turn.
///
/// The engine only evaluates attacks declared in the matching phase; the
/// external turn controller owns ordering between declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TurnPhase {
    #[default]
    Movement,
    WeaponAttack,
    PhysicalAttack,
    End,
}

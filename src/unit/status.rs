//! Per-turn unit condition state
//!
//! Read throughout to-hit evaluation; mutated only by resolution and the
//! external turn controller.

use serde::{Deserialize, Serialize};

use crate::core::types::{Turn, UnitId};

/// Condition flags affecting attacks by and against a unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    pub prone: bool,
    pub immobile: bool,
    pub shutdown: bool,
    pub evading: bool,
    /// Stealth armor system active this turn
    pub stealth_active: bool,
    /// Crouched behind a crest; lower half protected
    pub hull_down: bool,
    /// Clinging to the hull of this unit (armored infantry swarm)
    pub swarming: Option<UnitId>,
    pub grappled_with: Option<UnitId>,
    /// Homing beacon pod attached
    pub narc_marked: bool,
    /// Turn on which a laser designator last painted this unit
    pub tagged_on: Option<Turn>,
    /// Spotted for someone else's indirect fire this turn
    pub spotting: bool,
    pub searchlight_on: bool,
    pub destroyed: bool,
}

impl Status {
    /// Was the unit painted by a designator this turn?
    pub fn tagged_this_turn(&self, turn: Turn) -> bool {
        self.tagged_on == Some(turn)
    }
}

//! Unit kinds and capability queries
//!
//! Rules never branch on concrete unit classes; they ask capability
//! questions of the kind.

use serde::{Deserialize, Serialize};

/// Kind of combat unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    // Ground
    Walker,          // Bipedal armored frame, full physical-attack suite
    Tank,            // Tracked or wheeled vehicle
    Hover,           // Skims terrain, fast
    Vtol,            // Rotary-wing, airborne when flying
    Infantry,        // Foot soldiers
    ArmoredInfantry, // Powered-suit squads, can swarm
    Turret,          // Fixed gun emplacement crew

    // Air and space
    Aerospace,       // Fighter
    Dropship,        // Capital-scale lander
}

impl UnitKind {
    /// Has articulated arms for punches, pushes, and grapples
    pub fn has_arms(&self) -> bool {
        matches!(self, UnitKind::Walker)
    }

    /// Has legs for kicks, trips, and death-from-above landings
    pub fn has_legs(&self) -> bool {
        matches!(self, UnitKind::Walker)
    }

    pub fn can_jump(&self) -> bool {
        matches!(self, UnitKind::Walker | UnitKind::ArmoredInfantry)
    }

    /// Airborne units are valid flak targets
    pub fn is_airborne(&self) -> bool {
        matches!(self, UnitKind::Vtol | UnitKind::Aerospace)
    }

    pub fn is_infantry(&self) -> bool {
        matches!(self, UnitKind::Infantry | UnitKind::ArmoredInfantry)
    }

    /// May mount swarm and leg-attack training
    pub fn can_swarm(&self) -> bool {
        matches!(self, UnitKind::ArmoredInfantry | UnitKind::Infantry)
    }

    /// Capital-scale units do not suffer the capital-weapon penalty and
    /// are easier to hit with anything.
    pub fn is_capital_scale(&self) -> bool {
        matches!(self, UnitKind::Dropship)
    }

    /// Tracks heat from weapons fire
    pub fn tracks_heat(&self) -> bool {
        matches!(self, UnitKind::Walker | UnitKind::Aerospace | UnitKind::Dropship)
    }

    /// Can end up prone from falls or knockdowns
    pub fn can_fall_prone(&self) -> bool {
        matches!(self, UnitKind::Walker | UnitKind::Infantry | UnitKind::ArmoredInfantry)
    }
}

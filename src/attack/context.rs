//! Attack declaration context
//!
//! Built once per attack evaluation and never mutated mid-pipeline; the
//! only substitution is an explicit re-target for swarm secondaries.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::catalog::BracketTier;
use crate::core::types::{StructureId, UnitId};
use crate::unit::Location;

/// What the attack is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackTarget {
    Unit(UnitId),
    /// Ground hex, for area-effect and smoke fire
    Hex(HexCoord),
    Structure(StructureId),
}

/// Artillery fire mission profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtilleryFire {
    /// Gun crew sees the target
    Direct,
    /// Plotted fire over the horizon
    Indirect,
    /// Round homes on a designator mark
    Homing,
}

/// Immutable bundle describing one declared attack.
///
/// Called and aimed shots are independent requests; declaring both is
/// illegal and the orchestrator rejects the combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackContext {
    pub attacker: UnitId,
    pub target: AttackTarget,
    /// Index into the attacker's weapon mounts
    pub mount: usize,
    /// Index into the attacker's ammo bins, if the weapon feeds from one
    pub ammo_bin: Option<usize>,
    /// Deliberate shot at a location, option-gated penalty
    pub called_shot: Option<Location>,
    /// Targeting-computer assisted aim at a location
    pub aimed_shot: Option<Location>,
    /// Fired without line of sight, through a spotter
    pub indirect: bool,
    pub artillery: Option<ArtilleryFire>,
    /// Anti-air burst fire against an airborne target
    pub flak: bool,
    /// Aerospace strafing run
    pub strafing: bool,
    /// Bracketing fire tier for capital bays
    pub bracket: Option<BracketTier>,
    /// This context was synthesized for leftover swarm ordnance;
    /// holds the original target it was exchanged away from
    pub swarm_origin: Option<UnitId>,
    /// Number of projectiles remaining for a synthesized swarm attack
    pub salvo_override: Option<u32>,
    pub spotter: Option<UnitId>,
    /// True when the target was not the attacker's declared primary
    pub secondary_target: bool,
    /// A roll already bound to this context (margin-of-success rules)
    pub bound_roll: Option<u32>,
    /// Heat for this salvo was already charged by an earlier queue item
    pub heat_paid: bool,
}

impl AttackContext {
    /// Plain direct-fire declaration; flags off, standard aim
    pub fn weapon_attack(attacker: UnitId, target: AttackTarget, mount: usize) -> Self {
        Self {
            attacker,
            target,
            mount,
            ammo_bin: None,
            called_shot: None,
            aimed_shot: None,
            indirect: false,
            artillery: None,
            flak: false,
            strafing: false,
            bracket: None,
            swarm_origin: None,
            salvo_override: None,
            spotter: None,
            secondary_target: false,
            bound_roll: None,
            heat_paid: false,
        }
    }

    pub fn with_ammo(mut self, bin: usize) -> Self {
        self.ammo_bin = Some(bin);
        self
    }

    pub fn with_called_shot(mut self, location: Location) -> Self {
        self.called_shot = Some(location);
        self
    }

    pub fn with_aimed_shot(mut self, location: Location) -> Self {
        self.aimed_shot = Some(location);
        self
    }

    pub fn indirect_via(mut self, spotter: UnitId) -> Self {
        self.indirect = true;
        self.spotter = Some(spotter);
        self
    }

    pub fn as_artillery(mut self, fire: ArtilleryFire) -> Self {
        self.artillery = Some(fire);
        self
    }

    /// Derive the context for leftover swarm missiles against a new target
    pub fn swarm_retarget(&self, original: UnitId, new_target: UnitId, leftover: u32) -> Self {
        Self {
            target: AttackTarget::Unit(new_target),
            swarm_origin: Some(original),
            salvo_override: Some(leftover),
            heat_paid: true,
            // Aim and bound rolls do not carry over to a target of
            // opportunity
            called_shot: None,
            aimed_shot: None,
            bound_roll: None,
            ..self.clone()
        }
    }

    pub fn target_unit(&self) -> Option<UnitId> {
        match self.target {
            AttackTarget::Unit(id) => Some(id),
            _ => None,
        }
    }

    /// Location the attacker is deliberately aiming for, however requested
    pub fn aim_location(&self) -> Option<Location> {
        self.aimed_shot.or(self.called_shot)
    }
}

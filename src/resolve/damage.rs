//! Damage outcomes and application
//!
//! Routing destinations for each sub-hit: a unit location, a structure,
//! the terrain, or nothing at all. Units sheltering inside a structure
//! have part of each hit absorbed by the construction.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::core::types::{StructureId, UnitId};
use crate::game::state::GameState;
use crate::unit::Location;

/// One resolved effect of an attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    Miss,
    /// The attack was never legal; nothing was spent or rolled
    NotResolved { reason: String },
    UnitHit {
        unit: UnitId,
        location: Location,
        damage: u32,
        /// Portion soaked by the structure the unit stands in
        absorbed: u32,
        destroyed: bool,
    },
    StructureHit {
        structure: StructureId,
        damage: u32,
        collapsed: bool,
    },
    /// A rolled location was shielded by intervening cover
    AbsorbedByCover { damage: u32 },
    /// Woods set alight by area-effect fire
    TerrainIgnited { hex: HexCoord },
    SmokeLaid { hex: HexCoord },
    /// Target painted for semi-guided and homing munitions
    TargetDesignated { unit: UnitId },
    /// Shoved into another hex by a push
    TargetDisplaced { unit: UnitId, to: HexCoord },
    /// Swept off its feet by a trip
    TargetKnockedDown { unit: UnitId },
    /// Both units locked together by a grapple
    GrappleLocked { attacker: UnitId, target: UnitId },
}

/// Apply damage to a unit location, with structure absorption.
///
/// Returns the outcome; the kill is credited by the caller so that the
/// attacker borrow does not overlap the target borrow.
pub fn apply_unit_damage(
    state: &mut GameState,
    unit_id: UnitId,
    location: Location,
    damage: u32,
) -> DamageOutcome {
    let shelter = state
        .unit(unit_id)
        .ok()
        .and_then(|u| state.map.structure_at(u.position))
        .map(|s| (s.id, s.class.absorption()));

    let mut absorbed = 0;
    if let Some((structure_id, absorption)) = shelter {
        absorbed = damage.min(absorption);
        if let Some(structure) = state.map.structure_mut(structure_id) {
            structure.integrity = structure.integrity.saturating_sub(absorbed);
        }
    }
    let through = damage - absorbed;

    let Ok(unit) = state.unit_mut(unit_id) else {
        return DamageOutcome::NotResolved {
            reason: "target vanished mid-resolution".into(),
        };
    };

    unit.armor -= through as i32;
    let destroyed = unit.armor <= 0;
    if destroyed {
        unit.status.destroyed = true;
    }

    DamageOutcome::UnitHit {
        unit: unit_id,
        location,
        damage: through,
        absorbed,
        destroyed,
    }
}

/// Apply damage to a structure directly
pub fn apply_structure_damage(
    state: &mut GameState,
    structure_id: StructureId,
    damage: u32,
) -> DamageOutcome {
    let Some(structure) = state.map.structure_mut(structure_id) else {
        return DamageOutcome::NotResolved {
            reason: "structure vanished mid-resolution".into(),
        };
    };
    structure.integrity = structure.integrity.saturating_sub(damage);
    DamageOutcome::StructureHit {
        structure: structure_id,
        damage,
        collapsed: structure.collapsed(),
    }
}

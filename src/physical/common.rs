//! Shared plumbing for physical attack variants
//!
//! Every variant runs the same gate first (combat-capable attacker,
//! legal target, adjacency) and prices the same common modifiers after
//! its own preconditions pass. Precondition order decides which reason
//! is reported, never the outcome category.

use crate::attack::modifiers::constants::*;
use crate::attack::modifiers::{attacker as attacker_mods, target as target_mods};
use crate::attack::result::ToHitResult;
use crate::board::hex::Arc;
use crate::board::terrain::Terrain;
use crate::core::error::Result;
use crate::core::types::UnitId;
use crate::game::state::GameState;
use crate::unit::Unit;

/// Attacker and target resolved for a physical attack
pub(crate) struct Engaged<'a> {
    pub attacker: &'a Unit,
    pub target: &'a Unit,
    pub distance: u32,
    /// Arc the target occupies as seen by the attacker
    pub target_arc: Arc,
    /// Arc the attacker occupies as seen by the target, for hit tables
    pub attack_side: Arc,
}

/// Gate shared by every physical variant.
///
/// A missing attacker is a caller error; everything else converts to an
/// impossible result carrying the first failed precondition.
pub(crate) fn engage<'a>(
    state: &'a GameState,
    attacker_id: UnitId,
    target_id: UnitId,
) -> Result<std::result::Result<Engaged<'a>, ToHitResult>> {
    let attacker = state.unit(attacker_id)?;

    if attacker.status.destroyed {
        return Ok(Err(ToHitResult::impossible("attacker destroyed")));
    }
    if attacker.status.shutdown {
        return Ok(Err(ToHitResult::impossible("attacker shut down")));
    }
    if !attacker.crew.conscious {
        return Ok(Err(ToHitResult::impossible("crew unconscious")));
    }
    if attacker.status.prone {
        return Ok(Err(ToHitResult::impossible(
            "cannot make physical attacks while prone",
        )));
    }

    let Ok(target) = state.unit(target_id) else {
        tracing::warn!(target = ?target_id, "physical attack declared against unit not in play");
        return Ok(Err(ToHitResult::impossible("target not in play")));
    };
    if target.status.destroyed {
        return Ok(Err(ToHitResult::impossible("target already destroyed")));
    }
    if !attacker.side.is_enemy(target.side) && !state.options.friendly_fire {
        return Ok(Err(ToHitResult::impossible("friendly target")));
    }

    let distance = attacker.position.distance(&target.position);
    if distance > 1 {
        return Ok(Err(ToHitResult::impossible("target out of reach")));
    }

    Ok(Ok(Engaged {
        attacker,
        target,
        distance,
        target_arc: Arc::of(attacker.position, attacker.facing, target.position),
        attack_side: Arc::of(target.position, target.facing, attacker.position),
    }))
}

/// Elevation difference, target minus attacker
pub(crate) fn elevation_delta(state: &GameState, engaged: &Engaged<'_>) -> i32 {
    state.map.hex(engaged.target.position).elevation
        - state.map.hex(engaged.attacker.position).elevation
}

/// The modifier stage every physical variant shares: both units'
/// movement and the target's posture.
pub(crate) fn common_modifiers(
    state: &GameState,
    engaged: &Engaged<'_>,
    mut tohit: ToHitResult,
) -> ToHitResult {
    tohit = tohit.with_side(engaged.attack_side);

    tohit = tohit.with_nonzero(
        attacker_mods::own_movement_modifier(engaged.attacker),
        "attacker movement",
    );

    if engaged.target.status.immobile {
        tohit = tohit.with_modifier(TARGET_IMMOBILE, "immobile target");
    } else {
        tohit = tohit.with_nonzero(
            target_mods::movement_modifier(engaged.target),
            "target movement",
        );
        tohit = tohit.with_nonzero(
            target_mods::evasion_modifier(engaged.target),
            "target evading",
        );
    }

    if engaged.target.status.prone {
        // Physical attacks only reach to the next hex
        tohit = tohit.with_modifier(TARGET_PRONE_ADJACENT, "prone target at arm's length");
    }

    if state.map.hex(engaged.target.position).terrain == Terrain::ShallowWater {
        tohit = tohit.with_modifier(WATER_PARTIAL_TARGET, "target partly submerged");
    }

    tohit = tohit.with_nonzero(state.conditions.light.fire_mod(), "poor light");

    tohit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::map::Map;
    use crate::catalog::Catalog;
    use crate::core::options::RuleOptions;
    use crate::core::types::Side;
    use crate::board::hex::HexCoord;
    use crate::unit::{MovementRecord, UnitKind};

    fn duel() -> (GameState, UnitId, UnitId) {
        let mut state = GameState::new(Map::new(20, 20), Catalog::standard(), RuleOptions::default());
        let mut attacker = Unit::new(Side(0), "Brawler", UnitKind::Walker, 50);
        attacker.crew.piloting = 5;
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(1, 0);
        let a = state.add_unit(attacker);
        let t = state.add_unit(target);
        (state, a, t)
    }

    #[test]
    fn test_engage_rejects_prone_attacker() {
        let (mut state, a, t) = duel();
        state.unit_mut(a).unwrap().status.prone = true;
        let gate = engage(&state, a, t).unwrap();
        assert!(gate.is_err());
    }

    #[test]
    fn test_engage_rejects_distant_target() {
        let (mut state, a, t) = duel();
        state.unit_mut(t).unwrap().position = HexCoord::new(4, 0);
        let gate = engage(&state, a, t).unwrap();
        assert!(gate.is_err());
    }

    #[test]
    fn test_missing_attacker_is_error() {
        let (state, _, t) = duel();
        assert!(engage(&state, UnitId::new(), t).is_err());
    }

    #[test]
    fn test_common_modifiers_price_both_movements() {
        let (mut state, a, t) = duel();
        state.unit_mut(a).unwrap().movement = MovementRecord::ran(4);
        state.unit_mut(t).unwrap().movement = MovementRecord::walked(5);
        let gate = engage(&state, a, t).unwrap();
        let engaged = gate.unwrap();
        let tohit = common_modifiers(&state, &engaged, ToHitResult::new(5, "piloting skill"));
        // 5 + 2 run + 2 target movement
        assert_eq!(tohit.value(), 9);
    }

    #[test]
    fn test_prone_target_discount() {
        let (mut state, a, t) = duel();
        state.unit_mut(t).unwrap().status.prone = true;
        let gate = engage(&state, a, t).unwrap();
        let engaged = gate.unwrap();
        let tohit = common_modifiers(&state, &engaged, ToHitResult::new(5, "piloting skill"));
        assert_eq!(tohit.value(), 3);
    }
}

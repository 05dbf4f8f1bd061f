//! Target-condition to-hit modifiers
//!
//! Movement, prone state, immobility, evasion, stealth, and unit-class
//! adjustments. Also selects the attack side for hit-location purposes.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::result::ToHitResult;
use crate::board::hex::Arc;
use crate::board::los::LosEffects;
use crate::board::terrain::Terrain;
use crate::catalog::{RangeBracket, WeaponDef};
use crate::game::state::GameState;
use crate::unit::{CrewAbility, MoveKind, Unit};

/// Modifier from the target's movement this turn, jump surcharge included
pub fn movement_modifier(target: &Unit) -> i32 {
    let mut modifier = 0;
    for (threshold, value) in TARGET_MOVE_STEPS {
        if target.movement.hexes >= threshold {
            modifier = value;
            break;
        }
    }
    if target.movement.kind == MoveKind::Jumped {
        modifier += TARGET_JUMPED_EXTRA;
    }
    modifier
}

/// Evasion modifier, raised for crews trained in evasive movement
pub fn evasion_modifier(target: &Unit) -> i32 {
    if !target.status.evading {
        0
    } else if target.crew.has_ability(CrewAbility::EvasionExpert) {
        TARGET_EVADING_EXPERT
    } else {
        TARGET_EVADING
    }
}

pub fn compile(
    state: &GameState,
    ctx: &AttackContext,
    weapon: &WeaponDef,
    los: &LosEffects,
    mut tohit: ToHitResult,
) -> ToHitResult {
    let Some(target_id) = ctx.target_unit() else {
        // Hex and structure targets have no condition of their own
        return tohit;
    };
    let Ok(target) = state.unit(target_id) else {
        return tohit;
    };
    let Ok(attacker) = state.unit(ctx.attacker) else {
        return tohit;
    };

    // Attack side, from the target's point of view
    tohit = tohit.with_side(Arc::of(target.position, target.facing, attacker.position));

    if target.status.immobile {
        tohit = tohit.with_modifier(TARGET_IMMOBILE, "immobile target");
    } else {
        tohit = tohit.with_nonzero(movement_modifier(target), "target movement");
        tohit = tohit.with_nonzero(evasion_modifier(target), "target evading");
    }

    if target.status.prone {
        if los.distance <= 1 {
            tohit = tohit.with_modifier(TARGET_PRONE_ADJACENT, "prone target at arm's length");
        } else {
            tohit = tohit.with_modifier(TARGET_PRONE_AT_RANGE, "prone target at range");
        }
    }

    if target.status.stealth_active {
        let delta = match weapon.bracket(los.distance) {
            RangeBracket::Medium => STEALTH_MEDIUM,
            RangeBracket::Long => STEALTH_LONG,
            _ => 0,
        };
        tohit = tohit.with_nonzero(delta, "stealth system");
    }

    let target_hex = state.map.hex(target.position);
    if target.kind.is_infantry()
        && !attacker.kind.is_infantry()
        && target_hex.terrain == Terrain::Open
        && los.target_structure.is_none()
    {
        tohit = tohit.with_modifier(INFANTRY_IN_OPEN, "infantry caught in the open");
    }

    if target.kind.is_capital_scale() {
        tohit = tohit.with_modifier(CAPITAL_SCALE_TARGET, "capital-scale target");
    }

    tohit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::context::AttackTarget;
    use crate::board::hex::HexCoord;
    use crate::board::los::{LineOfSight, MapLos};
    use crate::board::map::Map;
    use crate::catalog::Catalog;
    use crate::core::options::RuleOptions;
    use crate::core::types::Side;
    use crate::unit::{MovementRecord, UnitKind};

    fn setup(target_hexes_moved: u32) -> (GameState, AttackContext, LosEffects) {
        let mut state = GameState::new(Map::new(30, 30), Catalog::standard(), RuleOptions::default());
        let attacker = Unit::new(Side(0), "Gunner", UnitKind::Walker, 50);
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(5, 0);
        target.movement = MovementRecord::walked(target_hexes_moved);
        let attacker_id = state.add_unit(attacker);
        let target_id = state.add_unit(target);
        let los = MapLos.effects(&state.map, HexCoord::new(0, 0), HexCoord::new(5, 0));
        let ctx = AttackContext::weapon_attack(attacker_id, AttackTarget::Unit(target_id), 0);
        (state, ctx, los)
    }

    #[test]
    fn test_movement_modifier_steps() {
        let mut unit = Unit::new(Side(0), "Runner", UnitKind::Walker, 50);
        for (hexes, expected) in [(0, 0), (2, 0), (3, 1), (5, 2), (7, 3), (10, 4), (18, 5), (25, 6)] {
            unit.movement = MovementRecord::walked(hexes);
            assert_eq!(movement_modifier(&unit), expected, "hexes {hexes}");
        }
    }

    #[test]
    fn test_jump_adds_one_on_top() {
        let mut unit = Unit::new(Side(0), "Jumper", UnitKind::Walker, 50);
        unit.movement = MovementRecord::jumped(5);
        assert_eq!(movement_modifier(&unit), 3);
    }

    #[test]
    fn test_stationary_target_adds_nothing() {
        let (state, ctx, los) = setup(0);
        let weapon = WeaponDef::medium_laser();
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 4);
    }

    #[test]
    fn test_fast_target() {
        let (state, ctx, los) = setup(6);
        let weapon = WeaponDef::medium_laser();
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 6);
    }

    #[test]
    fn test_immobile_overrides_movement() {
        let (mut state, ctx, los) = setup(6);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().status.immobile = true;
        let weapon = WeaponDef::medium_laser();
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 0);
        assert_eq!(tohit.modifiers.len(), 1);
    }

    #[test]
    fn test_prone_target_adjacent_vs_at_range() {
        let (mut state, ctx, los) = setup(0);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().status.prone = true;
        let weapon = WeaponDef::medium_laser();

        let at_range = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(at_range.value(), 5);

        // Step next to the target
        state.unit_mut(ctx.attacker).unwrap().position = HexCoord::new(4, 0);
        let close_los = MapLos.effects(&state.map, HexCoord::new(4, 0), HexCoord::new(5, 0));
        let adjacent = compile(&state, &ctx, &weapon, &close_los, ToHitResult::new(4, "gunnery"));
        assert_eq!(adjacent.value(), 2);
        let prone_entries = adjacent
            .modifiers
            .iter()
            .filter(|m| m.reason.contains("prone"))
            .count();
        assert_eq!(prone_entries, 1);
    }

    #[test]
    fn test_stealth_by_range_bracket() {
        let (mut state, ctx, _) = setup(0);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().status.stealth_active = true;
        let weapon = WeaponDef::medium_laser();

        // Short range: no effect
        let short_los = MapLos.effects(&state.map, HexCoord::new(3, 0), HexCoord::new(5, 0));
        let short = compile(&state, &ctx, &weapon, &short_los, ToHitResult::new(4, "gunnery"));
        assert_eq!(short.value(), 4);

        // Medium range: +1
        let medium_los = MapLos.effects(&state.map, HexCoord::new(0, 0), HexCoord::new(5, 0));
        let medium = compile(&state, &ctx, &weapon, &medium_los, ToHitResult::new(4, "gunnery"));
        assert_eq!(medium.value(), 5);
    }

    #[test]
    fn test_evasion_expert() {
        let (mut state, ctx, los) = setup(0);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().status.evading = true;
        let weapon = WeaponDef::medium_laser();
        let plain = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(plain.value(), 6);

        state
            .unit_mut(target_id)
            .unwrap()
            .crew
            .abilities
            .push(CrewAbility::EvasionExpert);
        let expert = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(expert.value(), 7);
    }

    #[test]
    fn test_infantry_in_open() {
        let (mut state, ctx, los) = setup(0);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().kind = UnitKind::Infantry;
        let weapon = WeaponDef::medium_laser();
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 5);
    }
}

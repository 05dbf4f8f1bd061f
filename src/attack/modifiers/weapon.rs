//! Weapon-specific to-hit modifiers
//!
//! Range brackets, minimum range, delivery-system bonuses and penalties,
//! fire modes, and aiming equipment.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::modifiers::special;
use crate::attack::result::ToHitResult;
use crate::board::los::LosEffects;
use crate::catalog::{RangeBracket, WeaponDef};
use crate::game::state::GameState;

pub fn compile(
    state: &GameState,
    ctx: &AttackContext,
    weapon: &WeaponDef,
    los: &LosEffects,
    mut tohit: ToHitResult,
) -> ToHitResult {
    match weapon.bracket(los.distance) {
        RangeBracket::Short => {}
        RangeBracket::Medium => {
            tohit = tohit.with_modifier(MEDIUM_RANGE, "medium range");
        }
        RangeBracket::Long => {
            tohit = tohit.with_modifier(LONG_RANGE, "long range");
        }
        RangeBracket::OutOfRange => {
            // Range legality was settled before the chain ran; reaching
            // this arm means the bracket table and the orchestrator
            // disagree, which is worth hearing about in logs.
            tracing::warn!(weapon = %weapon.name, distance = los.distance, "bracket out of range after validation");
            return tohit.mark_impossible("beyond maximum range");
        }
    }

    let shortfall = weapon.min_range_shortfall(los.distance);
    tohit = tohit.with_nonzero(shortfall as i32, "inside minimum range");

    if weapon.flags.pulse {
        tohit = tohit.with_modifier(PULSE_WEAPON, "pulse delivery");
    }

    if ctx.flak && weapon.flags.flak {
        let airborne = ctx
            .target_unit()
            .and_then(|id| state.unit(id).ok())
            .map(|t| t.kind.is_airborne())
            .unwrap_or(false);
        if airborne {
            tohit = tohit.with_modifier(FLAK_VS_AIRBORNE, "flak burst vs airborne target");
        }
    }

    if weapon.flags.capital {
        let small_target = ctx
            .target_unit()
            .and_then(|id| state.unit(id).ok())
            .map(|t| !t.kind.is_capital_scale())
            .unwrap_or(true);
        if small_target {
            tohit = tohit.with_modifier(CAPITAL_VS_SMALL, "capital weapon vs small target");
        }
    }

    if weapon.flags.bracketing {
        if let Some(tier) = ctx.bracket {
            tohit = tohit.with_modifier(tier.fire_mod(), "bracketing fire");
        }
    }

    if ctx.indirect {
        tohit = tohit.with_modifier(INDIRECT_FIRE, "indirect fire");
        let spotter_fired = ctx
            .spotter
            .and_then(|id| state.unit(id).ok())
            .map(|s| s.mounts.iter().any(|m| m.fired_this_turn))
            .unwrap_or(false);
        if spotter_fired {
            tohit = tohit.with_modifier(SPOTTER_ALSO_ATTACKED, "spotter also attacked");
        }
    }

    let Ok(attacker) = state.unit(ctx.attacker) else {
        return tohit;
    };

    // Aiming equipment and deliberate shots
    let aiming = ctx.called_shot.is_some() || ctx.aimed_shot.is_some();
    if ctx.aimed_shot.is_some() {
        tohit = tohit.with_modifier(AIMED_SHOT, "aimed shot");
    } else if ctx.called_shot.is_some() {
        tohit = tohit.with_modifier(state.options.called_shot_penalty, "called shot");
    } else if attacker.has_working_targeting_computer() {
        tohit = tohit.with_modifier(TARGETING_COMPUTER, "targeting computer");
    }

    for (delta, reason) in special::ability_attack_mods(&attacker.crew, aiming, false) {
        tohit = tohit.with_modifier(delta, reason);
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
    use crate::catalog::{BracketTier, Catalog};
    use crate::core::options::RuleOptions;
    use crate::core::types::Side;
    use crate::unit::{Location, Mount, Unit, UnitKind};

    fn setup(distance: i32) -> (GameState, AttackContext, LosEffects) {
        let mut state = GameState::new(Map::new(60, 60), Catalog::standard(), RuleOptions::default());
        let mut attacker = Unit::new(Side(0), "Gunner", UnitKind::Walker, 50);
        attacker.mounts.push(Mount::new("Medium Laser", Location::RightArm));
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(distance, 0);
        let attacker_id = state.add_unit(attacker);
        let target_id = state.add_unit(target);
        let los = MapLos.effects(&state.map, HexCoord::new(0, 0), HexCoord::new(distance, 0));
        let ctx = AttackContext::weapon_attack(attacker_id, AttackTarget::Unit(target_id), 0);
        (state, ctx, los)
    }

    #[test]
    fn test_range_brackets() {
        let weapon = WeaponDef::medium_laser();
        let (state, ctx, short) = setup(2);
        assert_eq!(
            compile(&state, &ctx, &weapon, &short, ToHitResult::new(4, "gunnery")).value(),
            4
        );
        let (state, ctx, medium) = setup(5);
        assert_eq!(
            compile(&state, &ctx, &weapon, &medium, ToHitResult::new(4, "gunnery")).value(),
            6
        );
        let (state, ctx, long) = setup(8);
        assert_eq!(
            compile(&state, &ctx, &weapon, &long, ToHitResult::new(4, "gunnery")).value(),
            8
        );
    }

    #[test]
    fn test_minimum_range_penalty() {
        let weapon = WeaponDef::lrm_15();
        let (state, ctx, los) = setup(4);
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        // Short bracket, 3 hexes inside the minimum of 6
        assert_eq!(tohit.value(), 7);
    }

    #[test]
    fn test_pulse_bonus() {
        let weapon = WeaponDef::large_pulse_laser();
        let (state, ctx, los) = setup(2);
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 2);
    }

    #[test]
    fn test_flak_needs_airborne_target() {
        let weapon = WeaponDef::anti_air_gun();
        let (mut state, mut ctx, los) = setup(4);
        ctx.flak = true;
        let grounded = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(grounded.value(), 4);

        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().kind = UnitKind::Vtol;
        let airborne = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(airborne.value(), 2);
    }

    #[test]
    fn test_capital_weapon_vs_small_target() {
        let weapon = WeaponDef::capital_laser_bay();
        let (mut state, ctx, los) = setup(10);
        let small = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(small.value(), 9);

        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().kind = UnitKind::Dropship;
        let capital = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(capital.value(), 4);
    }

    #[test]
    fn test_bracketing_fire() {
        let weapon = WeaponDef::capital_laser_bay();
        let (mut state, mut ctx, los) = setup(10);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().kind = UnitKind::Dropship;
        ctx.bracket = Some(BracketTier::Forty);
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 1);
    }

    #[test]
    fn test_indirect_fire_penalties() {
        let weapon = WeaponDef::lrm_15();
        let (mut state, mut ctx, los) = setup(10);
        let mut spotter = Unit::new(Side(0), "Spotter", UnitKind::Walker, 30);
        spotter.mounts.push(Mount::new("Medium Laser", Location::RightArm));
        let spotter_id = state.add_unit(spotter);
        ctx = ctx.indirect_via(spotter_id);

        let quiet = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(quiet.value(), 7); // medium range +2, indirect +1

        state.unit_mut(spotter_id).unwrap().mounts[0].fired_this_turn = true;
        let busy = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(busy.value(), 8);
    }

    #[test]
    fn test_targeting_computer_passive_bonus_suppressed_by_aim() {
        let weapon = WeaponDef::medium_laser();
        let (mut state, mut ctx, los) = setup(2);
        state.unit_mut(ctx.attacker).unwrap().targeting_computer = true;

        let passive = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(passive.value(), 3);

        ctx.aimed_shot = Some(Location::LeftLeg);
        let aimed = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(aimed.value(), 7); // +3 aimed, no passive -1
    }

    #[test]
    fn test_called_shot_uses_option_value() {
        let weapon = WeaponDef::medium_laser();
        let (mut state, mut ctx, los) = setup(2);
        ctx.called_shot = Some(Location::Head);
        state.options.called_shot_penalty = 4;
        let tohit = compile(&state, &ctx, &weapon, &los, ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 8);
    }
}

//! Special-case attack tracks and crew-ability modifiers
//!
//! Infantry swarm and leg attacks and fixed-rating weapons replace the
//! whole generic accumulation. The crew-ability helper is shared by the
//! weapon and artillery compilers so the same ability is never priced
//! twice in two places.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::modifiers::target;
use crate::attack::result::{HitTable, ToHitResult};
use crate::catalog::WeaponDef;
use crate::game::state::GameState;
use crate::unit::{Crew, CrewAbility};

/// Crew-ability modifiers shared by the generic and artillery tracks.
///
/// `aiming` is true when the attack uses a called or aimed shot;
/// `artillery` when it resolves on the artillery track.
pub fn ability_attack_mods(crew: &Crew, aiming: bool, artillery: bool) -> Vec<(i32, &'static str)> {
    let mut mods = Vec::new();
    if aiming && crew.has_ability(CrewAbility::Sharpshooter) {
        mods.push((SHARPSHOOTER_AIM, "sharpshooter"));
    }
    if artillery && crew.has_ability(CrewAbility::ObliqueArtilleryman) {
        mods.push((OBLIQUE_ARTILLERYMAN, "oblique artilleryman"));
    }
    mods
}

/// Does this weapon resolve on a track of its own?
pub fn is_special_track(weapon: &WeaponDef) -> bool {
    weapon.fixed_to_hit.is_some() || weapon.flags.swarm_attack || weapon.flags.leg_attack
}

/// Complete to-hit formula for infantry swarm and leg attacks.
///
/// Uses the squad's anti-armor training instead of gunnery; only the
/// target's movement carries over from the generic chain.
pub fn infantry_special(
    state: &GameState,
    ctx: &AttackContext,
    weapon: &WeaponDef,
) -> ToHitResult {
    let Ok(attacker) = state.unit(ctx.attacker) else {
        return ToHitResult::impossible("attacker not in play");
    };

    if !attacker.kind.can_swarm() {
        return ToHitResult::impossible("unit has no anti-armor training");
    }

    let Some(target_id) = ctx.target_unit() else {
        return ToHitResult::impossible("swarm and leg attacks need a unit target");
    };
    let Ok(target) = state.unit(target_id) else {
        return ToHitResult::impossible("target not in play");
    };
    if !target.kind.has_legs() {
        return ToHitResult::impossible("target cannot be swarmed");
    }
    if attacker.position.distance(&target.position) > 1 {
        return ToHitResult::impossible("not close enough to swarm");
    }

    let mut tohit = ToHitResult::new(attacker.crew.anti_armor, "anti-armor training");
    if weapon.flags.swarm_attack {
        tohit = tohit
            .with_modifier(SWARM_ATTACK_OFFSET, "swarm attack")
            .with_hit_table(HitTable::Swarm);
    } else {
        tohit = tohit
            .with_nonzero(LEG_ATTACK_OFFSET, "leg attack")
            .with_hit_table(HitTable::Kick);
    }

    tohit.with_nonzero(target::movement_modifier(target), "target movement")
}

/// Weapons with a fixed rating ignore the accumulation chain entirely
pub fn fixed_rating(weapon: &WeaponDef) -> Option<ToHitResult> {
    weapon
        .fixed_to_hit
        .map(|number| ToHitResult::new(number, "fixed weapon rating"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::context::AttackTarget;
    use crate::board::hex::HexCoord;
    use crate::board::map::Map;
    use crate::catalog::Catalog;
    use crate::core::options::RuleOptions;
    use crate::core::types::Side;
    use crate::unit::{MovementRecord, Unit, UnitKind};

    fn setup(kind: UnitKind) -> (GameState, AttackContext) {
        let mut state = GameState::new(Map::new(20, 20), Catalog::standard(), RuleOptions::default());
        let mut attacker = Unit::new(Side(0), "Squad", kind, 1);
        attacker.position = HexCoord::new(4, 0);
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(5, 0);
        let attacker_id = state.add_unit(attacker);
        let target_id = state.add_unit(target);
        let ctx = AttackContext::weapon_attack(attacker_id, AttackTarget::Unit(target_id), 0);
        (state, ctx)
    }

    #[test]
    fn test_swarm_uses_anti_armor_skill() {
        let (state, ctx) = setup(UnitKind::ArmoredInfantry);
        let tohit = infantry_special(&state, &ctx, &WeaponDef::swarm_attack());
        assert!(tohit.needs_roll());
        // anti-armor 5 + swarm offset 2
        assert_eq!(tohit.value(), 7);
        assert_eq!(tohit.hit_table, HitTable::Swarm);
    }

    #[test]
    fn test_leg_attack_hits_legs() {
        let (state, ctx) = setup(UnitKind::ArmoredInfantry);
        let tohit = infantry_special(&state, &ctx, &WeaponDef::leg_attack());
        assert_eq!(tohit.value(), 5);
        assert_eq!(tohit.hit_table, HitTable::Kick);
    }

    #[test]
    fn test_swarm_includes_target_movement() {
        let (mut state, ctx) = setup(UnitKind::ArmoredInfantry);
        let target_id = ctx.target_unit().unwrap();
        state.unit_mut(target_id).unwrap().movement = MovementRecord::walked(5);
        let tohit = infantry_special(&state, &ctx, &WeaponDef::swarm_attack());
        assert_eq!(tohit.value(), 9);
    }

    #[test]
    fn test_walker_cannot_swarm() {
        let (state, ctx) = setup(UnitKind::Walker);
        let tohit = infantry_special(&state, &ctx, &WeaponDef::swarm_attack());
        assert!(!tohit.needs_roll());
    }

    #[test]
    fn test_swarm_needs_adjacency() {
        let (mut state, ctx) = setup(UnitKind::ArmoredInfantry);
        state.unit_mut(ctx.attacker).unwrap().position = HexCoord::new(0, 0);
        let tohit = infantry_special(&state, &ctx, &WeaponDef::swarm_attack());
        assert!(!tohit.needs_roll());
    }

    #[test]
    fn test_fixed_rating_short_circuit() {
        let bomb = WeaponDef::bomb_rack();
        let tohit = fixed_rating(&bomb).unwrap();
        assert_eq!(tohit.value(), 5);
        assert!(fixed_rating(&WeaponDef::medium_laser()).is_none());
    }

    #[test]
    fn test_ability_mods_only_when_relevant() {
        let mut crew = Crew::regular();
        crew.abilities.push(CrewAbility::Sharpshooter);
        crew.abilities.push(CrewAbility::ObliqueArtilleryman);

        assert!(ability_attack_mods(&crew, false, false).is_empty());
        assert_eq!(ability_attack_mods(&crew, true, false).len(), 1);
        assert_eq!(ability_attack_mods(&crew, true, true).len(), 2);
    }
}

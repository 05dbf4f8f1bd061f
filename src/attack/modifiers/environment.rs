//! Environmental to-hit modifiers
//!
//! Light, weather, wind, fog, gravity, and electromagnetic interference.
//! Pure in the attack context; all inputs come from `FieldConditions` and
//! the rule options.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::result::ToHitResult;
use crate::catalog::{WeaponClass, WeaponDef};
use crate::game::state::GameState;

/// Wind and gravity only disturb unguided projectiles
fn projectile_class(class: WeaponClass) -> bool {
    matches!(
        class,
        WeaponClass::Ballistic | WeaponClass::Missile | WeaponClass::Artillery
    )
}

pub fn compile(
    state: &GameState,
    ctx: &AttackContext,
    weapon: &WeaponDef,
    mut tohit: ToHitResult,
) -> ToHitResult {
    let conditions = &state.conditions;

    let mut light = conditions.light.fire_mod();
    if light > 0 && state.options.searchlights {
        let lit = state
            .unit(ctx.attacker)
            .map(|u| u.status.searchlight_on)
            .unwrap_or(false);
        if lit {
            light -= 1;
        }
    }
    tohit = tohit.with_nonzero(light, "poor light");

    tohit = tohit.with_nonzero(conditions.weather.fire_mod(), "precipitation");

    if projectile_class(weapon.class) {
        tohit = tohit.with_nonzero(conditions.wind.fire_mod(), "wind");
        if state.options.low_gravity() {
            tohit = tohit.with_modifier(LOW_GRAVITY_PROJECTILE, "low gravity");
        }
    }

    if conditions.fog {
        tohit = tohit.with_modifier(FOG, "fog");
    }

    if state.options.emi {
        tohit = tohit.with_modifier(EMI_FIELD, "electromagnetic interference");
    }

    tohit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::context::AttackTarget;
    use crate::board::map::Map;
    use crate::catalog::Catalog;
    use crate::core::options::RuleOptions;
    use crate::core::types::Side;
    use crate::game::environment::{Light, Wind};
    use crate::unit::{Unit, UnitKind};

    fn setup() -> (GameState, AttackContext) {
        let mut state = GameState::new(Map::new(20, 20), Catalog::standard(), RuleOptions::default());
        let attacker = Unit::new(Side(0), "Gunner", UnitKind::Walker, 50);
        let target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        let attacker_id = state.add_unit(attacker);
        let target_id = state.add_unit(target);
        let ctx = AttackContext::weapon_attack(attacker_id, AttackTarget::Unit(target_id), 0);
        (state, ctx)
    }

    #[test]
    fn test_clear_day_adds_nothing() {
        let (state, ctx) = setup();
        let tohit = compile(&state, &ctx, &WeaponDef::medium_laser(), ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 4);
        assert!(tohit.modifiers.is_empty());
    }

    #[test]
    fn test_night_penalty() {
        let (mut state, ctx) = setup();
        state.conditions.light = Light::Night;
        let tohit = compile(&state, &ctx, &WeaponDef::medium_laser(), ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 6);
    }

    #[test]
    fn test_searchlight_negates_one_point_of_darkness() {
        let (mut state, ctx) = setup();
        state.conditions.light = Light::Night;
        state.unit_mut(ctx.attacker).unwrap().status.searchlight_on = true;
        let tohit = compile(&state, &ctx, &WeaponDef::medium_laser(), ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 5);
    }

    #[test]
    fn test_wind_skips_energy_weapons() {
        let (mut state, ctx) = setup();
        state.conditions.wind = Wind::Storm;
        let laser = compile(&state, &ctx, &WeaponDef::medium_laser(), ToHitResult::new(4, "gunnery"));
        let cannon = compile(&state, &ctx, &WeaponDef::autocannon_10(), ToHitResult::new(4, "gunnery"));
        assert_eq!(laser.value(), 4);
        assert_eq!(cannon.value(), 6);
    }

    #[test]
    fn test_low_gravity_projectiles_only() {
        let (mut state, ctx) = setup();
        state.options.gravity = 0.5;
        let laser = compile(&state, &ctx, &WeaponDef::medium_laser(), ToHitResult::new(4, "gunnery"));
        let missiles = compile(&state, &ctx, &WeaponDef::lrm_15(), ToHitResult::new(4, "gunnery"));
        assert_eq!(laser.value(), 4);
        assert_eq!(missiles.value(), 5);
    }

    #[test]
    fn test_emi_field() {
        let (mut state, ctx) = setup();
        state.options.emi = true;
        let tohit = compile(&state, &ctx, &WeaponDef::medium_laser(), ToHitResult::new(4, "gunnery"));
        assert_eq!(tohit.value(), 6);
    }
}

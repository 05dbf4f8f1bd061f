//! Artillery fire track
//!
//! Direct, indirect, and homing missions each use a distinct formula and
//! bypass the generic accumulation chain. The zero-in auto-hit for
//! previously walked-in hexes is handled before this compiler runs.

use crate::attack::context::{ArtilleryFire, AttackContext};
use crate::attack::modifiers::constants::*;
use crate::attack::modifiers::{attacker as attacker_mods, special};
use crate::attack::result::ToHitResult;
use crate::catalog::WeaponDef;
use crate::game::state::GameState;

/// Complete to-hit formula for an artillery mission
pub fn compile(
    state: &GameState,
    ctx: &AttackContext,
    fire: ArtilleryFire,
    weapon: &WeaponDef,
) -> ToHitResult {
    let Ok(gunner) = state.unit(ctx.attacker) else {
        return ToHitResult::impossible("attacker not in play");
    };

    let gunnery = gunner.crew.gunnery_for(weapon.class, &state.options);

    let mut tohit = match fire {
        ArtilleryFire::Direct => ToHitResult::new(gunnery, "gunnery skill")
            .with_modifier(ARTILLERY_DIRECT_OFFSET, "direct artillery fire"),
        ArtilleryFire::Indirect => ToHitResult::new(gunnery, "gunnery skill")
            .with_modifier(ARTILLERY_INDIRECT_OFFSET, "indirect artillery fire"),
        ArtilleryFire::Homing => {
            // The round steers itself; crew skill does not enter into it
            let designated = ctx
                .target_unit()
                .and_then(|id| state.unit(id).ok())
                .map(|t| t.status.tagged_this_turn(state.turn))
                .unwrap_or(false);
            if !designated {
                return ToHitResult::new(ARTILLERY_HOMING_BASE, "homing ballistics")
                    .mark_auto_failure("no designator mark to home on");
            }
            ToHitResult::new(ARTILLERY_HOMING_BASE, "homing ballistics")
        }
    };

    if fire != ArtilleryFire::Homing {
        tohit = tohit.with_nonzero(
            attacker_mods::own_movement_modifier(gunner),
            "attacker movement",
        );
        tohit = tohit.with_nonzero(state.conditions.wind.fire_mod(), "wind");
    }

    for (delta, reason) in special::ability_attack_mods(&gunner.crew, false, true) {
        tohit = tohit.with_modifier(delta, reason);
    }

    tohit
}

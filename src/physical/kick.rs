//! Kick attacks
//!
//! Harder-hitting than a punch and easier to land, but only into the
//! front arc and only with a sound hip.

use crate::attack::result::{HitTable, ToHitResult};
use crate::board::hex::Arc;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, elevation_delta, engage};
use crate::physical::PhysicalContext;
use crate::unit::LimbSide;

const KICK_OFFSET: i32 = -2;
const KICK_ACTUATOR_HIT: i32 = 2;
const KICK_FOOT_DESTROYED: i32 = 1;

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !engaged.attacker.kind.has_legs() {
        return Ok(ToHitResult::impossible("unit has no legs"));
    }
    let limb = ctx.limb.unwrap_or(LimbSide::Right);
    let leg = engaged.attacker.crits.leg(limb);
    if leg.blown_off {
        return Ok(ToHitResult::impossible("kicking leg destroyed"));
    }
    if leg.hip_hit {
        return Ok(ToHitResult::impossible("hip wrecked"));
    }

    if elevation_delta(state, &engaged).abs() > 1 {
        return Ok(ToHitResult::impossible("elevation difference too great"));
    }
    if engaged.target_arc != Arc::Front {
        return Ok(ToHitResult::impossible("kicks only reach the front arc"));
    }

    let mut tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill")
        .with_modifier(KICK_OFFSET, "kick")
        .with_hit_table(HitTable::Kick);

    let actuators = leg.upper_actuator_hit as i32 + leg.lower_actuator_hit as i32;
    tohit = tohit.with_nonzero(actuators * KICK_ACTUATOR_HIT, "leg actuator damage");
    if leg.foot_destroyed {
        tohit = tohit.with_modifier(KICK_FOOT_DESTROYED, "foot destroyed");
    }

    Ok(common_modifiers(state, &engaged, tohit))
}

/// Kick damage: a fifth of tonnage, halved per wrecked actuator
pub fn damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let attacker = state.unit(ctx.attacker)?;
    let mut damage = attacker.tonnage.div_ceil(5);
    let limb = ctx.limb.unwrap_or(LimbSide::Right);
    let leg = attacker.crits.leg(limb);
    for hit in [leg.upper_actuator_hit, leg.lower_actuator_hit, leg.foot_destroyed] {
        if hit {
            damage = damage.div_ceil(2);
        }
    }
    Ok(damage)
}

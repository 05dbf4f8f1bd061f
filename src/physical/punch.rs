//! Punch attacks
//!
//! One arm, upper-body hit table, damage scaled by tonnage and degraded
//! by actuator damage in the punching arm.

use crate::attack::modifiers::constants::*;
use crate::attack::result::{HitTable, ToHitResult};
use crate::board::hex::Arc;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, elevation_delta, engage};
use crate::physical::PhysicalContext;
use crate::unit::{LimbSide, Location};

/// Actuator penalty on the punch to-hit number
const PUNCH_ACTUATOR_HIT: i32 = 2;
const PUNCH_HAND_DESTROYED: i32 = 1;

fn arm_location(side: LimbSide) -> Location {
    match side {
        LimbSide::Left => Location::LeftArm,
        LimbSide::Right => Location::RightArm,
    }
}

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !engaged.attacker.kind.has_arms() {
        return Ok(ToHitResult::impossible("unit has no arms"));
    }
    let Some(limb) = ctx.limb else {
        return Ok(ToHitResult::impossible("no punching arm chosen"));
    };
    let arm = engaged.attacker.crits.arm(limb);
    if arm.blown_off {
        return Ok(ToHitResult::impossible("punching arm destroyed"));
    }
    if arm.shoulder_hit {
        return Ok(ToHitResult::impossible("shoulder wrecked"));
    }

    let location = arm_location(limb);
    if engaged
        .attacker
        .mounts
        .iter()
        .any(|m| m.location == location && m.fired_this_turn)
    {
        return Ok(ToHitResult::impossible(
            "weapon fired from that arm this turn",
        ));
    }

    if elevation_delta(state, &engaged).abs() > 1 {
        return Ok(ToHitResult::impossible("elevation difference too great"));
    }
    if engaged.target_arc == Arc::Rear {
        return Ok(ToHitResult::impossible("target behind attacker"));
    }

    let mut tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill")
        .with_hit_table(HitTable::Punch);

    let actuators = arm.upper_actuator_hit as i32 + arm.lower_actuator_hit as i32;
    tohit = tohit.with_nonzero(actuators * PUNCH_ACTUATOR_HIT, "arm actuator damage");
    if arm.hand_destroyed {
        tohit = tohit.with_modifier(PUNCH_HAND_DESTROYED, "hand destroyed");
    }

    Ok(common_modifiers(state, &engaged, tohit))
}

/// Punch damage: a tenth of tonnage, halved for each wrecked actuator
pub fn damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let attacker = state.unit(ctx.attacker)?;
    let mut damage = attacker.tonnage.div_ceil(10);
    if let Some(limb) = ctx.limb {
        let arm = attacker.crits.arm(limb);
        for hit in [arm.upper_actuator_hit, arm.lower_actuator_hit, arm.hand_destroyed] {
            if hit {
                damage = damage.div_ceil(2);
            }
        }
    }
    Ok(damage)
}

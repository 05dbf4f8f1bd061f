//! Trip attacks
//!
//! A leg sweep; no damage, the payoff is the target on the ground.

use crate::attack::result::{HitTable, ToHitResult};
use crate::board::hex::Arc;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, engage};
use crate::physical::PhysicalContext;
use crate::unit::LimbSide;

const TRIP_OFFSET: i32 = -1;

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !engaged.attacker.kind.has_legs() {
        return Ok(ToHitResult::impossible("unit has no legs"));
    }
    for limb in [LimbSide::Left, LimbSide::Right] {
        if !engaged.attacker.crits.leg(limb).usable() {
            return Ok(ToHitResult::impossible("both sound legs needed to trip"));
        }
    }
    if !engaged.target.kind.can_fall_prone() {
        return Ok(ToHitResult::impossible("target cannot be knocked down"));
    }
    if engaged.target.status.prone {
        return Ok(ToHitResult::impossible("target already down"));
    }
    if engaged.target_arc == Arc::Rear {
        return Ok(ToHitResult::impossible("target behind attacker"));
    }

    let tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill")
        .with_modifier(TRIP_OFFSET, "trip")
        .with_hit_table(HitTable::Kick);
    Ok(common_modifiers(state, &engaged, tohit))
}

//! Grapple attacks
//!
//! Locks both walkers together; neither moves or fires freely until the
//! hold breaks. No damage on its own.

use crate::attack::result::ToHitResult;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, elevation_delta, engage};
use crate::physical::PhysicalContext;
use crate::unit::LimbSide;

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !engaged.attacker.kind.has_arms() || !engaged.target.kind.has_arms() {
        return Ok(ToHitResult::impossible("grappling takes arms on both sides"));
    }
    for limb in [LimbSide::Left, LimbSide::Right] {
        if !engaged.attacker.crits.arm(limb).usable() {
            return Ok(ToHitResult::impossible("both arms needed to grapple"));
        }
    }
    if engaged.attacker.status.grappled_with.is_some() {
        return Ok(ToHitResult::impossible("already locked in a grapple"));
    }
    if engaged.target.status.grappled_with.is_some() {
        return Ok(ToHitResult::impossible("target already locked in a grapple"));
    }
    if elevation_delta(state, &engaged) != 0 {
        return Ok(ToHitResult::impossible("target on different footing"));
    }

    let tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill");
    Ok(common_modifiers(state, &engaged, tohit))
}

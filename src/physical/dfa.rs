//! Death-from-above attacks
//!
//! A jump ending on the target. Devastating when it lands, and the
//! attacker's legs pay a price either way.

use crate::attack::result::{HitTable, ToHitResult};
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, engage};
use crate::physical::PhysicalContext;
use crate::unit::MoveKind;

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !engaged.attacker.kind.has_legs() || !engaged.attacker.kind.can_jump() {
        return Ok(ToHitResult::impossible("unit cannot jump onto a target"));
    }
    if engaged.attacker.movement.kind != MoveKind::Jumped {
        return Ok(ToHitResult::impossible("death from above requires a jump"));
    }
    let legs_sound = engaged.attacker.crits.left_leg.usable()
        && engaged.attacker.crits.right_leg.usable();
    if !legs_sound {
        return Ok(ToHitResult::impossible("legs too damaged to land the attack"));
    }

    let tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill")
        .with_hit_table(HitTable::Punch);
    Ok(common_modifiers(state, &engaged, tohit))
}

/// Damage to the landing target
pub fn damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let attacker = state.unit(ctx.attacker)?;
    Ok((attacker.tonnage * 3).div_ceil(10))
}

/// The attacker's legs absorb the landing whether it connects or not
pub fn landing_damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let attacker = state.unit(ctx.attacker)?;
    Ok(attacker.tonnage.div_ceil(5))
}

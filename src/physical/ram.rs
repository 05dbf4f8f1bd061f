//! Ram attacks
//!
//! The vehicle counterpart of a charge: hull against hull, momentum
//! deciding the damage on both sides.

use crate::attack::result::ToHitResult;
use crate::board::hex::Arc;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, engage};
use crate::physical::PhysicalContext;
use crate::unit::{MoveKind, UnitKind};

const RAM_OFFSET: i32 = -2;

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !matches!(
        engaged.attacker.kind,
        UnitKind::Tank | UnitKind::Hover | UnitKind::Dropship
    ) {
        return Ok(ToHitResult::impossible("unit cannot ram"));
    }
    if engaged.attacker.movement.kind == MoveKind::Stationary
        || engaged.attacker.movement.hexes == 0
    {
        return Ok(ToHitResult::impossible("ram requires movement"));
    }
    if engaged.target_arc != Arc::Front {
        return Ok(ToHitResult::impossible("ram must end head on"));
    }

    let tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill")
        .with_modifier(RAM_OFFSET, "ram");
    Ok(common_modifiers(state, &engaged, tohit))
}

pub fn damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let attacker = state.unit(ctx.attacker)?;
    Ok((attacker.tonnage * attacker.movement.hexes).div_ceil(10))
}

/// The rammer's own hull takes a share scaled by the target's bulk
pub fn recoil_damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let target = state.unit(ctx.target)?;
    Ok(target.tonnage.div_ceil(10))
}

//! Charge attacks
//!
//! Momentum weaponized: damage scales with hexes crossed, and the
//! attacker takes a share of the impact.

use crate::attack::result::ToHitResult;
use crate::board::hex::Arc;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, engage};
use crate::physical::PhysicalContext;
use crate::unit::{MoveKind, UnitKind};

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !matches!(engaged.attacker.kind, UnitKind::Walker | UnitKind::Tank) {
        return Ok(ToHitResult::impossible("unit cannot charge"));
    }
    match engaged.attacker.movement.kind {
        MoveKind::Walked | MoveKind::Ran => {}
        MoveKind::Stationary => {
            return Ok(ToHitResult::impossible("charge requires movement"));
        }
        MoveKind::Jumped => {
            return Ok(ToHitResult::impossible(
                "jumping ends in a death from above, not a charge",
            ));
        }
    }
    if engaged.attacker.movement.hexes == 0 {
        return Ok(ToHitResult::impossible("charge requires movement"));
    }
    if engaged.target_arc != Arc::Front {
        return Ok(ToHitResult::impossible("charge must end facing the target"));
    }
    if state.map.structure_at(engaged.target.position).is_some()
        && !state.options.charge_into_buildings
    {
        return Ok(ToHitResult::impossible("target is inside a building"));
    }

    let tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill");
    Ok(common_modifiers(state, &engaged, tohit))
}

/// Damage to the rammed target: tonnage times hexes crossed, a tenth
pub fn damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let attacker = state.unit(ctx.attacker)?;
    Ok((attacker.tonnage * attacker.movement.hexes).div_ceil(10))
}

/// The attacker absorbs a share of the collision on a connected charge
pub fn recoil_damage(state: &GameState, ctx: &PhysicalContext) -> Result<u32> {
    let target = state.unit(ctx.target)?;
    Ok(target.tonnage.div_ceil(10))
}

//! Push attacks
//!
//! Two open palms; no damage, but the target is shoved a hex back.

use crate::attack::result::ToHitResult;
use crate::board::hex::Arc;
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::physical::common::{common_modifiers, elevation_delta, engage};
use crate::physical::PhysicalContext;
use crate::unit::{LimbSide, Location, UnitKind};

const PUSH_OFFSET: i32 = -1;

pub fn evaluate(state: &GameState, ctx: &PhysicalContext) -> Result<ToHitResult> {
    let engaged = match engage(state, ctx.attacker, ctx.target)? {
        Ok(engaged) => engaged,
        Err(impossible) => return Ok(impossible),
    };

    if !engaged.attacker.kind.has_arms() {
        return Ok(ToHitResult::impossible("unit has no arms"));
    }
    for limb in [LimbSide::Left, LimbSide::Right] {
        let arm = engaged.attacker.crits.arm(limb);
        if arm.blown_off || arm.shoulder_hit {
            return Ok(ToHitResult::impossible("both sound arms needed to push"));
        }
    }
    if engaged
        .attacker
        .mounts
        .iter()
        .any(|m| m.location.is_arm() && m.fired_this_turn)
    {
        return Ok(ToHitResult::impossible("arm weapons fired this turn"));
    }
    if engaged.target.kind != UnitKind::Walker {
        return Ok(ToHitResult::impossible("only another walker can be pushed"));
    }
    if engaged.target_arc != Arc::Front {
        return Ok(ToHitResult::impossible("push only works straight ahead"));
    }
    if elevation_delta(state, &engaged) != 0 {
        return Ok(ToHitResult::impossible("target on different footing"));
    }

    let tohit = ToHitResult::new(engaged.attacker.crew.piloting, "piloting skill")
        .with_modifier(PUSH_OFFSET, "push");
    Ok(common_modifiers(state, &engaged, tohit))
}

/// Hex the target is shoved into on a connected push
pub fn displacement(state: &GameState, ctx: &PhysicalContext) -> Result<crate::board::hex::HexCoord> {
    let attacker = state.unit(ctx.attacker)?;
    let target = state.unit(ctx.target)?;
    let away = crate::board::hex::HexCoord::new(
        target.position.q + (target.position.q - attacker.position.q),
        target.position.r + (target.position.r - attacker.position.r),
    );
    Ok(away)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::result::ToHitOutcome;
    use crate::board::hex::HexCoord;
    use crate::board::map::Map;
    use crate::catalog::Catalog;
    use crate::core::options::RuleOptions;
    use crate::core::types::{Side, UnitId};
    use crate::unit::{Mount, Unit};

    fn duel() -> (GameState, UnitId, UnitId) {
        let mut state = GameState::new(Map::new(20, 20), Catalog::standard(), RuleOptions::default());
        let attacker = Unit::new(Side(0), "Shover", UnitKind::Walker, 50);
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(1, 0);
        let a = state.add_unit(attacker);
        let t = state.add_unit(target);
        (state, a, t)
    }

    fn push_ctx(a: UnitId, t: UnitId) -> PhysicalContext {
        PhysicalContext {
            attacker: a,
            target: t,
            limb: None,
        }
    }

    #[test]
    fn test_push_number() {
        let (state, a, t) = duel();
        let tohit = evaluate(&state, &push_ctx(a, t)).unwrap();
        assert_eq!(tohit.value(), 4); // piloting 5 - 1
    }

    #[test]
    fn test_push_needs_both_arms() {
        let (mut state, a, t) = duel();
        state.unit_mut(a).unwrap().crits.left_arm.blown_off = true;
        let tohit = evaluate(&state, &push_ctx(a, t)).unwrap();
        assert!(matches!(tohit.outcome(), ToHitOutcome::Impossible(_)));
    }

    #[test]
    fn test_push_blocked_by_fired_arm_weapons() {
        let (mut state, a, t) = duel();
        {
            let unit = state.unit_mut(a).unwrap();
            unit.mounts.push(Mount::new("Medium Laser", Location::LeftArm));
            unit.mounts[0].fired_this_turn = true;
        }
        let tohit = evaluate(&state, &push_ctx(a, t)).unwrap();
        assert!(matches!(tohit.outcome(), ToHitOutcome::Impossible(_)));
    }

    #[test]
    fn test_displacement_is_directly_away() {
        let (state, a, t) = duel();
        let hex = displacement(&state, &push_ctx(a, t)).unwrap();
        assert_eq!(hex, HexCoord::new(2, 0));
    }

    #[test]
    fn test_cannot_push_a_tank() {
        let (mut state, a, t) = duel();
        state.unit_mut(t).unwrap().kind = UnitKind::Tank;
        let tohit = evaluate(&state, &push_ctx(a, t)).unwrap();
        assert!(matches!(tohit.outcome(), ToHitOutcome::Impossible(_)));
    }
}

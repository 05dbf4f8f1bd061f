//! Attacker-condition to-hit modifiers
//!
//! Movement, heat, prone fire, critical damage to sensors and the firing
//! limb, spotting duty, and divided attention on secondary targets.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::result::ToHitResult;
use crate::board::hex::Arc;
use crate::game::state::GameState;
use crate::unit::{CrewAbility, Location, MoveKind, Unit};

/// Modifier for how the attacker moved this turn
pub fn own_movement_modifier(unit: &Unit) -> i32 {
    match unit.movement.kind {
        MoveKind::Stationary => 0,
        MoveKind::Walked => ATTACKER_WALKED,
        MoveKind::Ran => ATTACKER_RAN,
        MoveKind::Jumped => ATTACKER_JUMPED,
    }
}

/// Modifier from running heat, highest matching threshold
pub fn heat_modifier(heat: i32) -> i32 {
    for (threshold, modifier) in HEAT_MOD_STEPS {
        if heat >= threshold {
            return modifier;
        }
    }
    0
}

pub fn compile(state: &GameState, ctx: &AttackContext, mut tohit: ToHitResult) -> ToHitResult {
    let Ok(attacker) = state.unit(ctx.attacker) else {
        return tohit;
    };

    tohit = tohit.with_nonzero(own_movement_modifier(attacker), "attacker movement");

    if attacker.kind.tracks_heat() {
        tohit = tohit.with_nonzero(heat_modifier(attacker.heat), "attacker heat");
    }

    let mount_location = attacker.mount(ctx.mount).map(|m| m.location);

    if attacker.status.prone {
        // Legality of prone fire was settled during validation;
        // only the penalty lands here.
        tohit = tohit.with_modifier(ATTACKER_PRONE, "firing while prone");
    }

    let sensors = attacker.crits.sensor_hits.min(SENSOR_HITS_COUNTED_MAX);
    tohit = tohit.with_nonzero(
        sensors as i32 * SENSOR_HIT_EACH,
        "sensor damage",
    );

    // Damage to the arm carrying the weapon
    if let Some(location) = mount_location {
        let arm = match location {
            Location::LeftArm => Some(&attacker.crits.left_arm),
            Location::RightArm => Some(&attacker.crits.right_arm),
            _ => None,
        };
        if let Some(arm) = arm {
            if arm.shoulder_hit {
                tohit = tohit.with_modifier(SHOULDER_HIT, "shoulder hit");
            } else {
                let actuators = arm.upper_actuator_hit as i32 + arm.lower_actuator_hit as i32;
                tohit = tohit.with_nonzero(
                    actuators * ARM_ACTUATOR_HIT_EACH,
                    "arm actuator damage",
                );
            }
        }
    }

    if attacker.status.spotting && !attacker.crew.has_ability(CrewAbility::ForwardObserver) {
        tohit = tohit.with_modifier(SPOTTING_FOR_INDIRECT, "spotting for indirect fire");
    }

    if ctx.strafing {
        tohit = tohit.with_modifier(STRAFING_RUN, "strafing run");
    }

    if ctx.secondary_target {
        let arc = target_arc_from_attacker(state, ctx, attacker);
        let delta = if arc == Arc::Front {
            SECONDARY_TARGET_FRONT
        } else {
            SECONDARY_TARGET_OTHER
        };
        tohit = tohit.with_modifier(delta, "secondary target");
    }

    tohit
}

fn target_arc_from_attacker(state: &GameState, ctx: &AttackContext, attacker: &Unit) -> Arc {
    let position = match ctx.target {
        crate::attack::context::AttackTarget::Unit(id) => {
            state.unit(id).map(|u| u.position).unwrap_or(attacker.position)
        }
        crate::attack::context::AttackTarget::Hex(hex) => hex,
        crate::attack::context::AttackTarget::Structure(id) => state
            .map
            .structure(id)
            .and_then(|s| s.hexes.first().copied())
            .unwrap_or(attacker.position),
    };
    Arc::of(attacker.position, attacker.facing, position)
}

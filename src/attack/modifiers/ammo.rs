//! Ammunition-specific to-hit modifiers
//!
//! Munition variants adjust the number after the weapon chain has run.
//! The precision cap is computed against the target-movement modifier
//! actually present, never against a notional one.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::modifiers::target;
use crate::attack::result::ToHitResult;
use crate::catalog::{AmmoDef, Munition};
use crate::game::state::GameState;

pub fn compile(
    state: &GameState,
    ctx: &AttackContext,
    ammo: &AmmoDef,
    mut tohit: ToHitResult,
) -> ToHitResult {
    let target = ctx.target_unit().and_then(|id| state.unit(id).ok());

    match ammo.munition {
        Munition::Standard | Munition::Swarm | Munition::Smoke | Munition::Homing => {}

        Munition::ArmorPiercing => {
            tohit = tohit.with_modifier(ARMOR_PIERCING, "armor-piercing ammunition");
        }

        Munition::Precision => {
            if let Some(target) = target {
                let movement = target::movement_modifier(target);
                let reduction = movement.min(PRECISION_REDUCTION_CAP);
                tohit = tohit.with_nonzero(-reduction, "precision ammunition");
            }
        }

        Munition::Flechette => {
            if let Some(target) = target {
                if !target.kind.is_infantry() {
                    tohit = tohit.with_modifier(FLECHETTE_VS_ARMOR, "flechette vs armor");
                }
            }
        }

        Munition::HeatSeeking => {
            if let Some(target) = target {
                if target.kind.tracks_heat() && target.heat >= HEAT_SEEKING_THRESHOLD {
                    tohit = tohit.with_modifier(HEAT_SEEKING_HOT, "heat-seeking vs hot target");
                } else if target.status.shutdown || !target.kind.tracks_heat() {
                    tohit = tohit.with_modifier(HEAT_SEEKING_COLD, "heat-seeking vs cold target");
                }
            }
        }

        Munition::SemiGuided => {
            if let Some(target) = target {
                if target.status.tagged_this_turn(state.turn) {
                    let movement = target::movement_modifier(target);
                    tohit = tohit.with_nonzero(-movement, "semi-guided vs designated target");
                }
            }
        }
    }

    tohit
}

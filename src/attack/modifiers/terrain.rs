//! Terrain and line-of-sight to-hit modifiers
//!
//! Consumes the precomputed `LosEffects`; never walks the map itself.

use crate::attack::context::AttackContext;
use crate::attack::modifiers::constants::*;
use crate::attack::result::{HitTable, ToHitResult};
use crate::board::los::{Cover, LosEffects};
use crate::board::terrain::Terrain;
use crate::game::state::GameState;

pub fn compile(
    state: &GameState,
    ctx: &AttackContext,
    los: &LosEffects,
    mut tohit: ToHitResult,
) -> ToHitResult {
    tohit = tohit.with_nonzero(
        los.intervening_light_woods as i32,
        "intervening light woods",
    );
    tohit = tohit.with_nonzero(
        los.intervening_heavy_woods as i32 * 2,
        "intervening heavy woods",
    );
    tohit = tohit.with_nonzero(los.intervening_smoke as i32 * 2, "intervening smoke");

    // Target hex terrain; building cover governs instead when the target
    // shelters inside a structure.
    if let Some(target_id) = ctx.target_unit() {
        if let Ok(target) = state.unit(target_id) {
            let hex = state.map.hex(target.position);
            if los.target_structure.is_none() {
                tohit = tohit.with_nonzero(
                    hex.terrain.target_hex_fire_mod(),
                    match hex.terrain {
                        Terrain::ShallowWater => "target partly submerged",
                        _ => "target in woods",
                    },
                );
            }

            if target.status.hull_down {
                tohit = tohit
                    .with_modifier(HULL_DOWN, "target hull down")
                    .with_hit_table(HitTable::UpperHalf);
            }
        }
    }

    if los.cover == Cover::Partial {
        tohit = tohit
            .with_modifier(PARTIAL_COVER, "partial cover")
            .with_cover(Cover::Partial)
            .with_hit_table(HitTable::UpperHalf);
    }

    if let Ok(attacker) = state.unit(ctx.attacker) {
        if state.map.hex(attacker.position).terrain == Terrain::ShallowWater {
            tohit = tohit.with_modifier(WATER_PARTIAL_ATTACKER, "firing from water");
        }
    }

    tohit
}

//! To-hit orchestrator
//!
//! Sequences the modifier compilers in the rule-mandated order:
//! validate, impossible checks, automatic checks, special-weapon tracks,
//! base skill, artillery track, then the generic accumulation chain.
//! Several rule families produce a complete result of their own; the
//! `SpecialResolution` tracker records that the remaining generic stages
//! must be skipped.

use crate::attack::context::{ArtilleryFire, AttackContext, AttackTarget};
use crate::attack::modifiers::{
    ammo as ammo_mods, artillery as artillery_mods, attacker as attacker_mods, environment,
    special, target as target_mods, terrain as terrain_mods, weapon as weapon_mods,
};
use crate::attack::result::ToHitResult;
use crate::board::hex::HexCoord;
use crate::board::los::{LineOfSight, LosEffects, MapLos};
use crate::catalog::{AmmoDef, Munition, WeaponDef};
use crate::core::error::Result;
use crate::game::state::GameState;
use crate::unit::Unit;

/// Signals that a compiler already produced a complete, final result and
/// the remaining generic stages must not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialResolution {
    Pending,
    Complete,
}

/// References resolved during validation, reused by every later stage
struct Prepared<'a> {
    attacker: &'a Unit,
    weapon: &'a WeaponDef,
    ammo: Option<&'a AmmoDef>,
    target_unit: Option<&'a Unit>,
    target_pos: HexCoord,
}

/// Evaluate a declared attack to a target number or sentinel outcome.
///
/// A missing attacker id is a caller error and surfaces as `Err`; every
/// rules-level illegality becomes an `Impossible` result instead.
pub fn evaluate_attack(state: &GameState, ctx: &AttackContext) -> Result<ToHitResult> {
    // An attacker the game state has never heard of cannot be converted
    // into a rules outcome without inventing combat state.
    let attacker = state.unit(ctx.attacker)?;

    let prepared = match prepare(state, ctx, attacker) {
        Ok(prepared) => prepared,
        Err(impossible) => {
            tracing::debug!(outcome = %impossible.describe(), "attack rejected in validation");
            return Ok(impossible);
        }
    };

    let los = MapLos.effects(&state.map, prepared.attacker.position, prepared.target_pos);

    let mut tracker = SpecialResolution::Pending;
    let mut tohit = check_automatic(state, ctx, &prepared, &los, &mut tracker);

    if tracker == SpecialResolution::Pending {
        if let Some(impossible) = check_impossible(ctx, &prepared, &los) {
            tracker = SpecialResolution::Complete;
            tohit = impossible;
        }
    }

    if tracker == SpecialResolution::Pending {
        if let Some(result) = special_tracks(state, ctx, &prepared, &mut tracker) {
            tohit = result;
        }
    }

    if tracker == SpecialResolution::Pending {
        if let Some(fire) = ctx.artillery {
            tohit = artillery_mods::compile(state, ctx, fire, prepared.weapon);
            tracker = SpecialResolution::Complete;
        }
    }

    if tracker == SpecialResolution::Pending {
        tohit = generic_chain(state, ctx, &prepared, &los);
    }

    tracing::debug!(
        attacker = %prepared.attacker.name,
        weapon = %prepared.weapon.name,
        outcome = %tohit.describe(),
        "attack evaluated"
    );
    Ok(tohit)
}

/// Resolve references and reject structurally or legally broken
/// declarations. Returns the impossible result as the error arm.
fn prepare<'a>(
    state: &'a GameState,
    ctx: &AttackContext,
    attacker: &'a Unit,
) -> std::result::Result<Prepared<'a>, ToHitResult> {
    if attacker.status.destroyed {
        return Err(ToHitResult::impossible("attacker destroyed"));
    }
    if attacker.status.shutdown {
        return Err(ToHitResult::impossible("attacker shut down"));
    }
    if !attacker.crew.conscious {
        return Err(ToHitResult::impossible("crew unconscious"));
    }

    let Some(mount) = attacker.mount(ctx.mount) else {
        tracing::warn!(unit = %attacker.name, mount = ctx.mount, "attack declared for missing mount");
        return Err(ToHitResult::impossible("no weapon in that mount"));
    };
    let weapon = match state.catalog.weapon(&mount.weapon) {
        Ok(weapon) => weapon,
        Err(err) => {
            tracing::warn!(unit = %attacker.name, error = %err, "weapon missing from catalog");
            return Err(ToHitResult::impossible("weapon not in the catalog"));
        }
    };

    if mount.destroyed {
        return Err(ToHitResult::impossible("weapon destroyed"));
    }
    if mount.jammed {
        return Err(ToHitResult::impossible("weapon jammed"));
    }
    // Ordnance already in the air is exempt from the once-a-turn rule
    if mount.fired_this_turn && ctx.swarm_origin.is_none() {
        return Err(ToHitResult::impossible("weapon already fired this turn"));
    }

    if attacker.status.prone && !mount.location.is_arm() {
        return Err(ToHitResult::impossible(
            "only arm weapons can fire while prone",
        ));
    }

    if ctx.called_shot.is_some() && ctx.aimed_shot.is_some() {
        return Err(ToHitResult::impossible(
            "called shot cannot be combined with an aimed shot",
        ));
    }
    if ctx.called_shot.is_some() && !state.options.called_shots {
        return Err(ToHitResult::impossible("called shots are not in play"));
    }
    if ctx.aimed_shot.is_some() && !attacker.has_working_targeting_computer() {
        return Err(ToHitResult::impossible(
            "aimed shots need a working targeting computer",
        ));
    }

    let ammo = if weapon.needs_ammo {
        let Some(bin_index) = ctx.ammo_bin else {
            return Err(ToHitResult::impossible("no ammunition selected"));
        };
        let Some(bin) = attacker.ammo_bin(bin_index) else {
            tracing::warn!(unit = %attacker.name, bin = bin_index, "attack declared for missing ammo bin");
            return Err(ToHitResult::impossible("no ammunition selected"));
        };
        if bin.rounds == 0 {
            return Err(ToHitResult::impossible("out of ammunition"));
        }
        match state.catalog.ammo(&bin.ammo) {
            Ok(ammo) => Some(ammo),
            Err(err) => {
                tracing::warn!(unit = %attacker.name, error = %err, "ammunition missing from catalog");
                return Err(ToHitResult::impossible("ammunition not in the catalog"));
            }
        }
    } else {
        None
    };

    let (target_unit, target_pos) = match ctx.target {
        AttackTarget::Unit(id) => {
            let Ok(target) = state.unit(id) else {
                tracing::warn!(target = ?id, "attack declared against unit not in play");
                return Err(ToHitResult::impossible("target not in play"));
            };
            if target.status.destroyed {
                return Err(ToHitResult::impossible("target already destroyed"));
            }
            if !attacker.side.is_enemy(target.side) && !state.options.friendly_fire {
                return Err(ToHitResult::impossible("friendly target"));
            }
            (Some(target), target.position)
        }
        AttackTarget::Structure(id) => {
            let Some(structure) = state.map.structure(id) else {
                tracing::warn!(target = ?id, "attack declared against unknown structure");
                return Err(ToHitResult::impossible("structure not on the map"));
            };
            if structure.collapsed() {
                return Err(ToHitResult::impossible("structure already collapsed"));
            }
            let pos = structure
                .hexes
                .iter()
                .copied()
                .min_by_key(|h| (attacker.position.distance(h), h.q, h.r))
                .unwrap_or(attacker.position);
            (None, pos)
        }
        AttackTarget::Hex(hex) => {
            let smoke_round = ammo.map(|a| a.munition == Munition::Smoke).unwrap_or(false);
            if !(weapon.flags.area_effect || weapon.flags.designator || smoke_round) {
                return Err(ToHitResult::impossible("weapon cannot attack a map hex"));
            }
            (None, hex)
        }
    };

    Ok(Prepared {
        attacker,
        weapon,
        ammo,
        target_unit,
        target_pos,
    })
}

/// Rule-mandated automatic successes; the earliest one wins
fn check_automatic(
    state: &GameState,
    ctx: &AttackContext,
    prepared: &Prepared<'_>,
    los: &LosEffects,
    tracker: &mut SpecialResolution,
) -> ToHitResult {
    if matches!(ctx.target, AttackTarget::Structure(_)) && los.distance <= 1 {
        *tracker = SpecialResolution::Complete;
        return ToHitResult::new(0, "automatic").mark_auto_success("point blank against structure");
    }

    if prepared.target_unit.is_some() && los.same_structure {
        *tracker = SpecialResolution::Complete;
        return ToHitResult::new(0, "automatic")
            .mark_auto_success("attacker and target share the building");
    }

    if matches!(
        ctx.artillery,
        Some(ArtilleryFire::Indirect) | Some(ArtilleryFire::Homing)
    ) && state.is_zeroed_in(prepared.attacker.side, prepared.target_pos)
    {
        *tracker = SpecialResolution::Complete;
        return ToHitResult::new(0, "automatic")
            .mark_auto_success("fire already walked onto the target hex");
    }

    ToHitResult::new(0, "pending")
}

/// Geometry-level impossibilities: range and obstruction.
///
/// Fixed-rating and infantry-special weapons skip these; their tracks
/// carry their own legality rules.
fn check_impossible(
    ctx: &AttackContext,
    prepared: &Prepared<'_>,
    los: &LosEffects,
) -> Option<ToHitResult> {
    if special::is_special_track(prepared.weapon) {
        return None;
    }

    if prepared.weapon.bracket(los.distance) == crate::catalog::RangeBracket::OutOfRange {
        return Some(ToHitResult::impossible("beyond maximum range"));
    }

    let sees_for_itself = !ctx.indirect && ctx.artillery.is_none();
    if sees_for_itself && los.blocked {
        return Some(ToHitResult::impossible("no line of sight to target"));
    }

    if ctx.indirect && ctx.artillery.is_none() {
        if !prepared.weapon.flags.indirect_capable {
            return Some(ToHitResult::impossible("weapon cannot fire indirectly"));
        }
        if ctx.spotter.is_none() {
            return Some(ToHitResult::impossible("indirect fire requires a spotter"));
        }
    }

    None
}

/// Weapon families that replace the whole calculation
fn special_tracks(
    state: &GameState,
    ctx: &AttackContext,
    prepared: &Prepared<'_>,
    tracker: &mut SpecialResolution,
) -> Option<ToHitResult> {
    if prepared.weapon.flags.swarm_attack || prepared.weapon.flags.leg_attack {
        *tracker = SpecialResolution::Complete;
        return Some(special::infantry_special(state, ctx, prepared.weapon));
    }

    if let Some(fixed) = special::fixed_rating(prepared.weapon) {
        *tracker = SpecialResolution::Complete;
        return Some(fixed);
    }

    None
}

/// The generic accumulation chain, in rule order: environment, attacker
/// condition, target condition, terrain, weapon, ammunition.
fn generic_chain(
    state: &GameState,
    ctx: &AttackContext,
    prepared: &Prepared<'_>,
    los: &LosEffects,
) -> ToHitResult {
    let gunnery = prepared
        .attacker
        .crew
        .gunnery_for(prepared.weapon.class, &state.options);

    let mut tohit = ToHitResult::new(gunnery, "gunnery skill");
    tohit = environment::compile(state, ctx, prepared.weapon, tohit);
    tohit = attacker_mods::compile(state, ctx, tohit);

    if ctx.swarm_origin.is_some() {
        // Swarm secondary-target exchange: this context already carries
        // the substituted target, so the target and terrain stages below
        // price the new target while everything accumulated above came
        // from the attacker's side and stands.
        tracing::debug!(target = ?ctx.target, "pricing swarm secondary target");
    }
    tohit = target_mods::compile(state, ctx, prepared.weapon, los, tohit);
    tohit = terrain_mods::compile(state, ctx, los, tohit);

    tohit = weapon_mods::compile(state, ctx, prepared.weapon, los, tohit);
    if let Some(ammo) = prepared.ammo {
        tohit = ammo_mods::compile(state, ctx, ammo, tohit);
    }

    tohit
}

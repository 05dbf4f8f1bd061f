//! Attack resolution handler
//!
//! Takes a to-hit result and an externally supplied roll, determines the
//! number of sub-hits, routes each to its destination, and applies side
//! effects through the game state's own mutators. Leftover swarm
//! ordnance is retargeted through an explicit work queue; resolution
//! never recurses into itself.

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::attack::context::{AttackContext, AttackTarget};
use crate::attack::orchestrator::evaluate_attack;
use crate::attack::result::{HitTable, ToHitOutcome, ToHitResult};
use crate::catalog::{Munition, WeaponDef};
use crate::core::error::Result;
use crate::core::types::UnitId;
use crate::game::state::GameState;
use crate::resolve::cluster;
use crate::resolve::damage::{apply_structure_damage, apply_unit_damage, DamageOutcome};
use crate::resolve::dice::Dice;
use crate::resolve::location::{roll_location, LocationRoll};
use crate::unit::{Location, UnitKind};

/// Eligible secondary targets must stand this close to the original
const SWARM_RETARGET_RANGE: u32 = 2;

/// One attack waiting in the resolution queue.
///
/// The first item carries the evaluation and roll the caller already
/// made; synthesized secondaries evaluate and roll inside the loop.
#[derive(Debug, Clone)]
struct PendingAttack {
    ctx: AttackContext,
    tohit: Option<ToHitResult>,
    roll: Option<u32>,
}

/// Resolve a successful (or failed) to-hit roll into damage outcomes.
///
/// Mutates unit and map state: heat, ammunition, fired flags, armor,
/// structure integrity, designator marks, and artillery zero-in records.
pub fn resolve_hits(
    state: &mut GameState,
    ctx: &AttackContext,
    tohit: &ToHitResult,
    roll: u32,
    dice: &mut dyn Dice,
) -> Result<Vec<DamageOutcome>> {
    let mut outcomes = Vec::new();
    let mut queue: VecDeque<PendingAttack> = VecDeque::new();
    queue.push_back(PendingAttack {
        ctx: ctx.clone(),
        tohit: Some(tohit.clone()),
        roll: Some(roll),
    });

    // Units this salvo has already gone after, the declared target included
    let mut salvo_seen: AHashSet<UnitId> = ctx.target_unit().into_iter().collect();

    while let Some(item) = queue.pop_front() {
        let tohit = match item.tohit {
            Some(tohit) => tohit,
            None => evaluate_attack(state, &item.ctx)?,
        };
        let roll = match item.roll {
            Some(roll) => roll,
            // A roll already bound to the context takes precedence
            None => item.ctx.bound_roll.unwrap_or_else(|| dice.two_d6()),
        };
        if let Some(next) = resolve_one(state, &item.ctx, &tohit, roll, dice, &mut outcomes, &mut salvo_seen)? {
            queue.push_back(next);
        }
    }

    Ok(outcomes)
}

fn resolve_one(
    state: &mut GameState,
    ctx: &AttackContext,
    tohit: &ToHitResult,
    roll: u32,
    dice: &mut dyn Dice,
    outcomes: &mut Vec<DamageOutcome>,
    salvo_seen: &mut AHashSet<UnitId>,
) -> Result<Option<PendingAttack>> {
    // Impossible attacks were never made; nothing is spent, nothing retries
    if let ToHitOutcome::Impossible(reason) = tohit.outcome() {
        outcomes.push(DamageOutcome::NotResolved {
            reason: reason.clone(),
        });
        return Ok(None);
    }

    let (weapon, munition) = {
        let attacker = state.unit(ctx.attacker)?;
        let Some(mount) = attacker.mount(ctx.mount) else {
            outcomes.push(DamageOutcome::NotResolved {
                reason: "weapon mount vanished mid-resolution".into(),
            });
            return Ok(None);
        };
        let Ok(weapon) = state.catalog.weapon(&mount.weapon) else {
            outcomes.push(DamageOutcome::NotResolved {
                reason: "weapon vanished from the catalog".into(),
            });
            return Ok(None);
        };
        let munition = ctx
            .ammo_bin
            .and_then(|i| attacker.ammo_bin(i))
            .and_then(|bin| state.catalog.ammo(&bin.ammo).ok())
            .map(|a| a.munition);
        (weapon.clone(), munition)
    };

    // A synthesized secondary spends ordnance already in the air
    let fresh_salvo = ctx.swarm_origin.is_none();
    if fresh_salvo {
        charge_attack_costs(state, ctx, &weapon)?;
    }

    let hit = tohit.succeeds_on(roll);
    tracing::debug!(
        roll,
        hit,
        weapon = %weapon.name,
        "attack roll resolved"
    );

    if !hit {
        outcomes.push(DamageOutcome::Miss);
        // The whole swarm flies on to a fresh target
        if munition == Some(Munition::Swarm) {
            let salvo = ctx.salvo_override.or(weapon.rack_size).unwrap_or(0);
            return Ok(next_swarm_attack(state, ctx, salvo, salvo_seen));
        }
        return Ok(None);
    }

    match ctx.target {
        AttackTarget::Unit(target_id) => {
            resolve_unit_hit(state, ctx, tohit, roll, dice, &weapon, munition, target_id, outcomes, salvo_seen)
        }
        AttackTarget::Structure(structure_id) => {
            let damage = weapon.damage * weapon.rack_size.unwrap_or(1);
            outcomes.push(apply_structure_damage(state, structure_id, damage));
            Ok(None)
        }
        AttackTarget::Hex(hex) => {
            resolve_hex_hit(state, ctx, dice, &weapon, munition, hex, outcomes)?;
            Ok(None)
        }
    }
}

/// Heat, ammunition, and the fired flag for a freshly launched attack
fn charge_attack_costs(state: &mut GameState, ctx: &AttackContext, weapon: &WeaponDef) -> Result<()> {
    let pay_heat = !ctx.heat_paid;
    let unit = state.unit_mut(ctx.attacker)?;
    if pay_heat && unit.kind.tracks_heat() {
        unit.heat += weapon.heat as i32;
    }
    if let Some(mount) = unit.mounts.get_mut(ctx.mount) {
        mount.fired_this_turn = true;
    }
    if let Some(bin) = ctx.ammo_bin.and_then(|i| unit.ammo.get_mut(i)) {
        bin.rounds = bin.rounds.saturating_sub(1);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn resolve_unit_hit(
    state: &mut GameState,
    ctx: &AttackContext,
    tohit: &ToHitResult,
    roll: u32,
    dice: &mut dyn Dice,
    weapon: &WeaponDef,
    munition: Option<Munition>,
    target_id: UnitId,
    outcomes: &mut Vec<DamageOutcome>,
    salvo_seen: &mut AHashSet<UnitId>,
) -> Result<Option<PendingAttack>> {
    if weapon.flags.designator {
        let turn = state.turn;
        state.unit_mut(target_id)?.status.tagged_on = Some(turn);
        outcomes.push(DamageOutcome::TargetDesignated { unit: target_id });
        return Ok(None);
    }

    let exact_roll = tohit.needs_roll() && roll as i32 == tohit.value();

    // Sub-hit count for cluster weapons
    let (hits, salvo) = match weapon.rack_size {
        Some(rack) => {
            let salvo = ctx.salvo_override.unwrap_or(rack);
            let shift = {
                let attacker = state.unit(ctx.attacker)?;
                let target = state.unit(target_id).ok();
                cluster::cluster_modifier(attacker, target, munition, &state.options, exact_roll)
            };
            let adjusted = dice.two_d6() as i32 + shift;
            (cluster::cluster_hits(salvo, adjusted), salvo)
        }
        None => (1, 1),
    };

    let target_kind = state.unit(target_id)?.kind;
    let packets = damage_packets(weapon, hits);
    let aim = ctx.aim_location().filter(|_| target_kind == UnitKind::Walker);

    let mut killed = false;
    for damage in packets {
        let location = match aim {
            // A deliberate aim connects on a near-average roll
            Some(location) if (6..=8).contains(&dice.two_d6()) => LocationRoll::Struck(location),
            _ => {
                let table_roll = match tohit.hit_table {
                    HitTable::Punch | HitTable::Kick => dice.d6(),
                    _ => dice.two_d6(),
                };
                roll_location(target_kind, tohit.hit_table, tohit.side, table_roll)
            }
        };

        match location {
            LocationRoll::AbsorbedByCover => {
                outcomes.push(DamageOutcome::AbsorbedByCover { damage });
            }
            LocationRoll::Struck(location) => {
                let outcome = apply_unit_damage(state, target_id, location, damage);
                if matches!(outcome, DamageOutcome::UnitHit { destroyed: true, .. }) {
                    killed = true;
                }
                outcomes.push(outcome);
            }
        }
        if killed {
            break;
        }
    }

    if killed {
        state.unit_mut(ctx.attacker)?.kills += 1;
    }

    // A connected swarm attack leaves the squad clinging to the hull
    if weapon.flags.swarm_attack && !killed {
        state.unit_mut(ctx.attacker)?.status.swarming = Some(target_id);
    }

    // Unexpended swarm missiles press on to a new target
    if munition == Some(Munition::Swarm) && hits < salvo {
        return Ok(next_swarm_attack(state, ctx, salvo - hits, salvo_seen));
    }
    Ok(None)
}

/// Split a salvo's hits into location-roll packets.
///
/// Light per-projectile damage is grouped five points at a time; heavier
/// projectiles roll location individually.
fn damage_packets(weapon: &WeaponDef, hits: u32) -> Vec<u32> {
    if weapon.damage == 0 {
        return Vec::new();
    }
    if weapon.is_cluster() && weapon.damage == 1 {
        let mut packets = Vec::new();
        let mut remaining = hits;
        while remaining > 0 {
            let chunk = remaining.min(5);
            packets.push(chunk);
            remaining -= chunk;
        }
        packets
    } else {
        (0..hits).map(|_| weapon.damage).collect()
    }
}

fn resolve_hex_hit(
    state: &mut GameState,
    ctx: &AttackContext,
    dice: &mut dyn Dice,
    weapon: &WeaponDef,
    munition: Option<Munition>,
    hex: crate::board::hex::HexCoord,
    outcomes: &mut Vec<DamageOutcome>,
) -> Result<()> {
    if munition == Some(Munition::Smoke) {
        state.map.set_smoke(hex, true);
        outcomes.push(DamageOutcome::SmokeLaid { hex });
        return Ok(());
    }

    if !weapon.flags.area_effect {
        outcomes.push(DamageOutcome::Miss);
        return Ok(());
    }

    // A hit registers the hex for follow-up fire missions
    if ctx.artillery.is_some() {
        let side = state.unit(ctx.attacker)?.side;
        state.record_zero_in(side, hex);
    }

    // Everyone in the hex takes the blast
    for unit_id in state.units_at(hex) {
        let kind = state.unit(unit_id)?.kind;
        let location = match roll_location(kind, HitTable::FullBody, crate::board::hex::Arc::Front, dice.two_d6())
        {
            LocationRoll::Struck(location) => location,
            LocationRoll::AbsorbedByCover => Location::Body,
        };
        let outcome = apply_unit_damage(state, unit_id, location, weapon.damage);
        let killed = matches!(outcome, DamageOutcome::UnitHit { destroyed: true, .. });
        outcomes.push(outcome);
        if killed {
            state.unit_mut(ctx.attacker)?.kills += 1;
        }
    }

    if let Some(structure_id) = state.map.structure_at(hex).map(|s| s.id) {
        outcomes.push(apply_structure_damage(state, structure_id, weapon.damage));
    }

    if state.map.hex(hex).terrain.flammable() {
        state.map.ignite(hex);
        outcomes.push(DamageOutcome::TerrainIgnited { hex });
    }

    Ok(())
}

/// Pick the next target for leftover swarm ordnance and queue the attack.
///
/// Nearest live enemy within range of the original target that the salvo
/// has not gone after yet; ties break on unit id for determinism.
fn next_swarm_attack(
    state: &GameState,
    ctx: &AttackContext,
    leftover: u32,
    salvo_seen: &mut AHashSet<UnitId>,
) -> Option<PendingAttack> {
    if leftover == 0 {
        return None;
    }
    let original_id = ctx.target_unit()?;
    let origin_pos = state.unit(original_id).ok()?.position;
    let attacker_side = state.unit(ctx.attacker).ok()?.side;

    let next = state
        .units()
        .filter(|u| {
            u.side.is_enemy(attacker_side)
                && !u.status.destroyed
                && !salvo_seen.contains(&u.id)
                && u.position.distance(&origin_pos) <= SWARM_RETARGET_RANGE
        })
        .min_by_key(|u| (u.position.distance(&origin_pos), u.id))?;

    salvo_seen.insert(next.id);
    tracing::debug!(leftover, target = %next.name, "swarm ordnance seeking new target");
    Some(PendingAttack {
        ctx: ctx.swarm_retarget(original_id, next.id, leftover),
        tohit: None,
        roll: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::HexCoord;
    use crate::board::map::Map;
    use crate::catalog::Catalog;
    use crate::core::options::RuleOptions;
    use crate::core::types::Side;
    use crate::resolve::dice::SeededDice;
    use crate::unit::{AmmoBin, Mount, Unit};

    fn state_with_laser_duel() -> (GameState, AttackContext) {
        let mut state = GameState::new(Map::new(40, 40), Catalog::standard(), RuleOptions::default());
        let mut attacker = Unit::new(Side(0), "Gunner", UnitKind::Walker, 50);
        attacker.mounts.push(Mount::new("Medium Laser", Location::RightArm));
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(3, 0);
        let attacker_id = state.add_unit(attacker);
        let target_id = state.add_unit(target);
        let ctx = AttackContext::weapon_attack(attacker_id, AttackTarget::Unit(target_id), 0);
        (state, ctx)
    }

    #[test]
    fn test_miss_spends_heat_and_marks_fired() {
        let (mut state, ctx) = state_with_laser_duel();
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let mut dice = SeededDice::new(1);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 2, &mut dice).unwrap();
        assert_eq!(outcomes, vec![DamageOutcome::Miss]);
        let attacker = state.unit(ctx.attacker).unwrap();
        assert_eq!(attacker.heat, 3);
        assert!(attacker.mounts[0].fired_this_turn);
    }

    #[test]
    fn test_hit_damages_target() {
        let (mut state, ctx) = state_with_laser_duel();
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let before = state.unit(ctx.target_unit().unwrap()).unwrap().armor;
        let mut dice = SeededDice::new(1);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], DamageOutcome::UnitHit { damage: 5, .. }));
        let after = state.unit(ctx.target_unit().unwrap()).unwrap().armor;
        assert_eq!(before - after, 5);
    }

    #[test]
    fn test_impossible_attack_spends_nothing() {
        let (mut state, ctx) = state_with_laser_duel();
        let tohit = ToHitResult::impossible("no line of sight");
        let mut dice = SeededDice::new(1);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        assert!(matches!(outcomes[0], DamageOutcome::NotResolved { .. }));
        let attacker = state.unit(ctx.attacker).unwrap();
        assert_eq!(attacker.heat, 0);
        assert!(!attacker.mounts[0].fired_this_turn);
    }

    #[test]
    fn test_kill_is_credited() {
        let (mut state, ctx) = state_with_laser_duel();
        state.unit_mut(ctx.target_unit().unwrap()).unwrap().armor = 3;
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let mut dice = SeededDice::new(1);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        assert!(matches!(outcomes[0], DamageOutcome::UnitHit { destroyed: true, .. }));
        assert_eq!(state.unit(ctx.attacker).unwrap().kills, 1);
    }

    #[test]
    fn test_cluster_ammo_decrements_once() {
        let (mut state, mut ctx) = state_with_laser_duel();
        {
            let attacker = state.unit_mut(ctx.attacker).unwrap();
            attacker.mounts[0] = Mount::new("SRM-6", Location::RightArm);
            attacker.ammo.push(AmmoBin::new("SRM Ammo", 15));
        }
        ctx.ammo_bin = Some(0);
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let mut dice = SeededDice::new(3);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        assert!(outcomes.len() >= 2, "SRM salvo lands several sub-hits");
        assert_eq!(state.unit(ctx.attacker).unwrap().ammo[0].rounds, 14);
    }

    #[test]
    fn test_designator_marks_instead_of_damaging() {
        let (mut state, ctx) = state_with_laser_duel();
        state.unit_mut(ctx.attacker).unwrap().mounts[0] = Mount::new("Laser Designator", Location::RightArm);
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let mut dice = SeededDice::new(1);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        let target_id = ctx.target_unit().unwrap();
        assert_eq!(outcomes, vec![DamageOutcome::TargetDesignated { unit: target_id }]);
        assert!(state.unit(target_id).unwrap().status.tagged_this_turn(state.turn));
    }

    #[test]
    fn test_swarm_miss_retargets_through_queue() {
        let (mut state, mut ctx) = state_with_laser_duel();
        {
            let attacker = state.unit_mut(ctx.attacker).unwrap();
            attacker.mounts[0] = Mount::new("LRM-15", Location::RightArm);
            attacker.ammo.push(AmmoBin::new("LRM Swarm Ammo", 8));
            // Pull back out of the launcher's minimum range
            attacker.position = HexCoord::new(-7, 0);
        }
        // A second enemy stands next to the original target
        let mut bystander = Unit::new(Side(1), "Bystander", UnitKind::Walker, 50);
        bystander.position = HexCoord::new(4, 0);
        let bystander_id = state.add_unit(bystander);

        ctx.ammo_bin = Some(0);
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        assert!(tohit.needs_roll());

        let mut dice = SeededDice::new(5);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 2, &mut dice).unwrap();

        // First outcome is the declared miss; the salvo then went after
        // the bystander through the queue, one way or the other.
        assert_eq!(outcomes[0], DamageOutcome::Miss);
        assert!(outcomes.len() >= 2);
        let touched_bystander = outcomes.iter().any(|o| {
            matches!(o, DamageOutcome::UnitHit { unit, .. } if *unit == bystander_id)
        }) || outcomes[1..].contains(&DamageOutcome::Miss);
        assert!(touched_bystander);

        // Heat charged exactly once for the whole salvo
        assert_eq!(state.unit(ctx.attacker).unwrap().heat, 5);
        assert_eq!(state.unit(ctx.attacker).unwrap().ammo[0].rounds, 7);
    }

    #[test]
    fn test_artillery_hit_records_zero_in() {
        let mut state = GameState::new(Map::new(60, 60), Catalog::standard(), RuleOptions::default());
        let mut battery = Unit::new(Side(0), "Battery", UnitKind::Tank, 60);
        battery.mounts.push(Mount::new("Sniper Cannon", Location::Body));
        battery.ammo.push(AmmoBin::new("Sniper Shells", 10));
        let battery_id = state.add_unit(battery);
        let hex = HexCoord::new(15, 3);
        let ctx = AttackContext::weapon_attack(battery_id, AttackTarget::Hex(hex), 0)
            .with_ammo(0)
            .as_artillery(crate::attack::context::ArtilleryFire::Indirect);
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let mut dice = SeededDice::new(1);
        resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        assert!(state.is_zeroed_in(Side(0), hex));
    }

    #[test]
    fn test_smoke_round_lays_smoke() {
        let mut state = GameState::new(Map::new(60, 60), Catalog::standard(), RuleOptions::default());
        let mut battery = Unit::new(Side(0), "Battery", UnitKind::Tank, 60);
        battery.mounts.push(Mount::new("Sniper Cannon", Location::Body));
        battery.ammo.push(AmmoBin::new("Sniper Smoke Shells", 10));
        let battery_id = state.add_unit(battery);
        let hex = HexCoord::new(10, 0);
        let ctx = AttackContext::weapon_attack(battery_id, AttackTarget::Hex(hex), 0)
            .with_ammo(0)
            .as_artillery(crate::attack::context::ArtilleryFire::Direct);
        let tohit = evaluate_attack(&state, &ctx).unwrap();
        let mut dice = SeededDice::new(1);
        let outcomes = resolve_hits(&mut state, &ctx, &tohit, 12, &mut dice).unwrap();
        assert!(outcomes.contains(&DamageOutcome::SmokeLaid { hex }));
        assert!(state.map.hex(hex).smoke);
    }
}

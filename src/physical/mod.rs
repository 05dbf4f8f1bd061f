//! Physical attack variants
//!
//! Each variant is a self-contained precondition checklist followed by
//! the shared modifier stage. Any failed precondition returns an
//! impossible result immediately; check order decides only which reason
//! is reported.

pub mod charge;
pub mod common;
pub mod dfa;
pub mod grapple;
pub mod kick;
pub mod punch;
pub mod push;
pub mod ram;
pub mod trip;

use serde::{Deserialize, Serialize};

use crate::attack::result::{HitTable, ToHitOutcome, ToHitResult};
use crate::core::error::Result;
use crate::core::types::UnitId;
use crate::game::state::GameState;
use crate::resolve::damage::{apply_unit_damage, DamageOutcome};
use crate::resolve::dice::Dice;
use crate::resolve::location::{roll_location, LocationRoll};
use crate::unit::{LimbSide, Location};

/// The eight physical attack variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalKind {
    Punch,
    Kick,
    Charge,
    DeathFromAbove,
    Push,
    Grapple,
    Trip,
    Ram,
}

/// Declaration of a physical attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalContext {
    pub attacker: UnitId,
    pub target: UnitId,
    /// Limb delivering the blow, where the variant cares
    pub limb: Option<LimbSide>,
}

impl PhysicalContext {
    pub fn new(attacker: UnitId, target: UnitId) -> Self {
        Self {
            attacker,
            target,
            limb: None,
        }
    }

    pub fn with_limb(mut self, limb: LimbSide) -> Self {
        self.limb = Some(limb);
        self
    }
}

/// Evaluate any physical attack variant to a target number or sentinel
pub fn evaluate_physical(
    state: &GameState,
    kind: PhysicalKind,
    ctx: &PhysicalContext,
) -> Result<ToHitResult> {
    match kind {
        PhysicalKind::Punch => punch::evaluate(state, ctx),
        PhysicalKind::Kick => kick::evaluate(state, ctx),
        PhysicalKind::Charge => charge::evaluate(state, ctx),
        PhysicalKind::DeathFromAbove => dfa::evaluate(state, ctx),
        PhysicalKind::Push => push::evaluate(state, ctx),
        PhysicalKind::Grapple => grapple::evaluate(state, ctx),
        PhysicalKind::Trip => trip::evaluate(state, ctx),
        PhysicalKind::Ram => ram::evaluate(state, ctx),
    }
}

/// Damage dealt to the target on a connected attack
pub fn physical_damage(
    state: &GameState,
    kind: PhysicalKind,
    ctx: &PhysicalContext,
) -> Result<u32> {
    match kind {
        PhysicalKind::Punch => punch::damage(state, ctx),
        PhysicalKind::Kick => kick::damage(state, ctx),
        PhysicalKind::Charge => charge::damage(state, ctx),
        PhysicalKind::DeathFromAbove => dfa::damage(state, ctx),
        PhysicalKind::Ram => ram::damage(state, ctx),
        PhysicalKind::Push | PhysicalKind::Grapple | PhysicalKind::Trip => Ok(0),
    }
}

/// Resolve a physical attack roll into outcomes and state changes
pub fn resolve_physical(
    state: &mut GameState,
    kind: PhysicalKind,
    ctx: &PhysicalContext,
    tohit: &ToHitResult,
    roll: u32,
    dice: &mut dyn Dice,
) -> Result<Vec<DamageOutcome>> {
    let mut outcomes = Vec::new();

    if let ToHitOutcome::Impossible(reason) = tohit.outcome() {
        outcomes.push(DamageOutcome::NotResolved {
            reason: reason.clone(),
        });
        return Ok(outcomes);
    }

    let hit = tohit.succeeds_on(roll);

    if !hit {
        outcomes.push(DamageOutcome::Miss);
        // A missed landing still has to land somewhere
        if kind == PhysicalKind::DeathFromAbove {
            let landing = dfa::landing_damage(state, ctx)?;
            state.unit_mut(ctx.attacker)?.status.prone = true;
            outcomes.push(self_leg_damage(state, ctx.attacker, landing, dice));
        }
        return Ok(outcomes);
    }

    match kind {
        PhysicalKind::Push => {
            let to = push::displacement(state, ctx)?;
            state.unit_mut(ctx.target)?.position = to;
            outcomes.push(DamageOutcome::TargetDisplaced {
                unit: ctx.target,
                to,
            });
        }
        PhysicalKind::Trip => {
            state.unit_mut(ctx.target)?.status.prone = true;
            outcomes.push(DamageOutcome::TargetKnockedDown { unit: ctx.target });
        }
        PhysicalKind::Grapple => {
            state.unit_mut(ctx.attacker)?.status.grappled_with = Some(ctx.target);
            state.unit_mut(ctx.target)?.status.grappled_with = Some(ctx.attacker);
            outcomes.push(DamageOutcome::GrappleLocked {
                attacker: ctx.attacker,
                target: ctx.target,
            });
        }
        _ => {
            let damage = physical_damage(state, kind, ctx)?;
            let target_kind = state.unit(ctx.target)?.kind;
            let table_roll = match tohit.hit_table {
                HitTable::Punch | HitTable::Kick => dice.d6(),
                _ => dice.two_d6(),
            };
            let location =
                match roll_location(target_kind, tohit.hit_table, tohit.side, table_roll) {
                    LocationRoll::Struck(location) => location,
                    LocationRoll::AbsorbedByCover => Location::Body,
                };
            let outcome = apply_unit_damage(state, ctx.target, location, damage);
            let killed = matches!(outcome, DamageOutcome::UnitHit { destroyed: true, .. });
            outcomes.push(outcome);
            if killed {
                state.unit_mut(ctx.attacker)?.kills += 1;
            }

            // Collisions and landings cost the attacker too
            match kind {
                PhysicalKind::Charge => {
                    let recoil = charge::recoil_damage(state, ctx)?;
                    outcomes.push(apply_unit_damage(
                        state,
                        ctx.attacker,
                        Location::CenterTorso,
                        recoil,
                    ));
                }
                PhysicalKind::Ram => {
                    let recoil = ram::recoil_damage(state, ctx)?;
                    outcomes.push(apply_unit_damage(state, ctx.attacker, Location::Body, recoil));
                }
                PhysicalKind::DeathFromAbove => {
                    let landing = dfa::landing_damage(state, ctx)?;
                    outcomes.push(self_leg_damage(state, ctx.attacker, landing, dice));
                }
                _ => {}
            }
        }
    }

    Ok(outcomes)
}

fn self_leg_damage(
    state: &mut GameState,
    unit: UnitId,
    damage: u32,
    dice: &mut dyn Dice,
) -> DamageOutcome {
    let leg = if dice.d6() <= 3 {
        Location::RightLeg
    } else {
        Location::LeftLeg
    };
    apply_unit_damage(state, unit, leg, damage)
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
    use crate::unit::{MovementRecord, Unit, UnitKind};

    fn duel() -> (GameState, PhysicalContext) {
        let mut state = GameState::new(Map::new(20, 20), Catalog::standard(), RuleOptions::default());
        let attacker = Unit::new(Side(0), "Brawler", UnitKind::Walker, 50);
        let mut target = Unit::new(Side(1), "Mark", UnitKind::Walker, 50);
        target.position = HexCoord::new(1, 0);
        let a = state.add_unit(attacker);
        let t = state.add_unit(target);
        (state, PhysicalContext::new(a, t).with_limb(LimbSide::Right))
    }

    #[test]
    fn test_kick_resolves_to_leg_damage() {
        let (mut state, ctx) = duel();
        let tohit = evaluate_physical(&state, PhysicalKind::Kick, &ctx).unwrap();
        let mut dice = SeededDice::new(2);
        let outcomes =
            resolve_physical(&mut state, PhysicalKind::Kick, &ctx, &tohit, 12, &mut dice).unwrap();
        match &outcomes[0] {
            DamageOutcome::UnitHit { location, damage, .. } => {
                assert!(location.is_leg());
                assert_eq!(*damage, 10);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_trip_knocks_down_without_damage() {
        let (mut state, ctx) = duel();
        let tohit = evaluate_physical(&state, PhysicalKind::Trip, &ctx).unwrap();
        let mut dice = SeededDice::new(2);
        let outcomes =
            resolve_physical(&mut state, PhysicalKind::Trip, &ctx, &tohit, 12, &mut dice).unwrap();
        assert_eq!(outcomes, vec![DamageOutcome::TargetKnockedDown { unit: ctx.target }]);
        assert!(state.unit(ctx.target).unwrap().status.prone);
    }

    #[test]
    fn test_grapple_locks_both_units() {
        let (mut state, ctx) = duel();
        let tohit = evaluate_physical(&state, PhysicalKind::Grapple, &ctx).unwrap();
        let mut dice = SeededDice::new(2);
        resolve_physical(&mut state, PhysicalKind::Grapple, &ctx, &tohit, 12, &mut dice).unwrap();
        assert_eq!(
            state.unit(ctx.attacker).unwrap().status.grappled_with,
            Some(ctx.target)
        );
        assert_eq!(
            state.unit(ctx.target).unwrap().status.grappled_with,
            Some(ctx.attacker)
        );
    }

    #[test]
    fn test_missed_dfa_floors_the_attacker() {
        let (mut state, ctx) = duel();
        state.unit_mut(ctx.attacker).unwrap().movement = MovementRecord::jumped(3);
        let tohit = evaluate_physical(&state, PhysicalKind::DeathFromAbove, &ctx).unwrap();
        let mut dice = SeededDice::new(2);
        let outcomes = resolve_physical(
            &mut state,
            PhysicalKind::DeathFromAbove,
            &ctx,
            &tohit,
            2,
            &mut dice,
        )
        .unwrap();
        assert_eq!(outcomes[0], DamageOutcome::Miss);
        assert!(state.unit(ctx.attacker).unwrap().status.prone);
        assert!(matches!(outcomes[1], DamageOutcome::UnitHit { .. }));
    }

    #[test]
    fn test_charge_recoil_hits_the_attacker_too() {
        let (mut state, ctx) = duel();
        state.unit_mut(ctx.attacker).unwrap().movement = MovementRecord::ran(4);
        let tohit = evaluate_physical(&state, PhysicalKind::Charge, &ctx).unwrap();
        let mut dice = SeededDice::new(2);
        let outcomes =
            resolve_physical(&mut state, PhysicalKind::Charge, &ctx, &tohit, 12, &mut dice)
                .unwrap();
        assert!(outcomes.len() >= 2);
        assert!(matches!(
            outcomes[1],
            DamageOutcome::UnitHit { unit, .. } if unit == ctx.attacker
        ));
    }

    #[test]
    fn test_impossible_physical_attack_reports_reason() {
        let (mut state, ctx) = duel();
        state.unit_mut(ctx.attacker).unwrap().status.prone = true;
        let tohit = evaluate_physical(&state, PhysicalKind::Punch, &ctx).unwrap();
        let mut dice = SeededDice::new(2);
        let outcomes =
            resolve_physical(&mut state, PhysicalKind::Punch, &ctx, &tohit, 12, &mut dice).unwrap();
        assert!(matches!(outcomes[0], DamageOutcome::NotResolved { .. }));
    }
}

//! Game state consumed and mutated by the rules engine
//!
//! Evaluation reads this state; only the resolution handler mutates it,
//! through the accessors here.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::board::map::Map;
use crate::catalog::Catalog;
use crate::core::error::{EngineError, Result};
use crate::core::options::RuleOptions;
use crate::core::types::{Side, Turn, UnitId};
use crate::game::environment::FieldConditions;
use crate::game::phase::TurnPhase;
use crate::unit::Unit;

/// Everything the engine needs to evaluate and resolve attacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub map: Map,
    pub catalog: Catalog,
    pub options: RuleOptions,
    pub conditions: FieldConditions,
    pub phase: TurnPhase,
    pub turn: Turn,
    units: AHashMap<UnitId, Unit>,
    /// Hexes each side's artillery has walked fire onto
    zeroed_in: AHashSet<(Side, HexCoord)>,
}

impl GameState {
    pub fn new(map: Map, catalog: Catalog, options: RuleOptions) -> Self {
        Self {
            map,
            catalog,
            options,
            conditions: FieldConditions::default(),
            phase: TurnPhase::WeaponAttack,
            turn: 1,
            units: AHashMap::new(),
            zeroed_in: AHashSet::new(),
        }
    }

    pub fn add_unit(&mut self, unit: Unit) -> UnitId {
        let id = unit.id;
        self.units.insert(id, unit);
        id
    }

    /// Look up a unit; a missing id is a caller error, not a rules outcome
    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(&id).ok_or(EngineError::UnitNotFound(id))
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit> {
        self.units.get_mut(&id).ok_or(EngineError::UnitNotFound(id))
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Live units standing in a hex
    pub fn units_at(&self, coord: HexCoord) -> Vec<UnitId> {
        let mut ids: Vec<UnitId> = self
            .units
            .values()
            .filter(|u| u.position == coord && !u.status.destroyed)
            .map(|u| u.id)
            .collect();
        // Deterministic ordering for area-effect resolution
        ids.sort();
        ids
    }

    pub fn record_zero_in(&mut self, side: Side, hex: HexCoord) {
        self.zeroed_in.insert((side, hex));
    }

    pub fn is_zeroed_in(&self, side: Side, hex: HexCoord) -> bool {
        self.zeroed_in.contains(&(side, hex))
    }

    /// Clear per-turn flags at the end of an attack phase
    pub fn end_turn(&mut self) {
        self.turn += 1;
        for unit in self.units.values_mut() {
            for mount in &mut unit.mounts {
                mount.fired_this_turn = false;
            }
            unit.status.spotting = false;
            unit.movement = crate::unit::MovementRecord::stationary();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitKind;

    fn state() -> GameState {
        GameState::new(Map::new(20, 20), Catalog::standard(), RuleOptions::default())
    }

    #[test]
    fn test_missing_unit_is_an_error() {
        let state = state();
        assert!(state.unit(UnitId::new()).is_err());
    }

    #[test]
    fn test_zero_in_is_per_side() {
        let mut state = state();
        let hex = HexCoord::new(4, 4);
        state.record_zero_in(Side(0), hex);
        assert!(state.is_zeroed_in(Side(0), hex));
        assert!(!state.is_zeroed_in(Side(1), hex));
    }

    #[test]
    fn test_units_at_skips_destroyed() {
        let mut state = state();
        let hex = HexCoord::new(2, 2);
        let mut alive = Unit::new(Side(0), "Alive", UnitKind::Tank, 40);
        alive.position = hex;
        let mut dead = Unit::new(Side(1), "Dead", UnitKind::Tank, 40);
        dead.position = hex;
        dead.status.destroyed = true;
        let alive_id = state.add_unit(alive);
        state.add_unit(dead);
        assert_eq!(state.units_at(hex), vec![alive_id]);
    }

    #[test]
    fn test_end_turn_clears_fired_flags() {
        let mut state = state();
        let mut unit = Unit::new(Side(0), "Gunner", UnitKind::Walker, 50);
        unit.mounts.push(crate::unit::Mount::new(
            "Medium Laser",
            crate::unit::Location::RightArm,
        ));
        unit.mounts[0].fired_this_turn = true;
        let id = state.add_unit(unit);
        state.end_turn();
        assert!(!state.unit(id).unwrap().mounts[0].fired_this_turn);
    }
}

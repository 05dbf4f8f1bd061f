//! Ironhex - deterministic attack-resolution rules engine for hex-based
//! armored wargames
//!
//! The engine evaluates declared attacks to a target number (or a
//! sentinel outcome), then resolves successful rolls into damage.
//! Everything is synchronous and deterministic: identical state and
//! context always produce identical results.

pub mod attack;
pub mod board;
pub mod catalog;
pub mod core;
pub mod game;
pub mod physical;
pub mod resolve;
pub mod unit;

// Re-exports for convenient access
pub use attack::{
    evaluate_attack, ArtilleryFire, AttackContext, AttackTarget, HitTable, Modifier,
    SpecialResolution, ToHitOutcome, ToHitResult,
};
pub use board::{Arc, Cover, Facing, HexCoord, LineOfSight, LosEffects, Map, MapLos, Terrain};
pub use catalog::{AmmoDef, Catalog, Munition, WeaponClass, WeaponDef};
pub use crate::core::{EngineError, Result, RuleOptions, Side, UnitId};
pub use game::{FieldConditions, GameState, TurnPhase};
pub use physical::{
    evaluate_physical, physical_damage, resolve_physical, PhysicalContext, PhysicalKind,
};
pub use resolve::{resolve_hits, DamageOutcome, Dice, SeededDice};
pub use unit::{Crew, CrewAbility, Location, MovementRecord, Unit, UnitKind};

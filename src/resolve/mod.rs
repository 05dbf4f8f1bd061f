//! Attack resolution: cluster counts, hit locations, damage routing

pub mod cluster;
pub mod damage;
pub mod dice;
pub mod handler;
pub mod location;

pub use cluster::{cluster_hits, cluster_modifier};
pub use damage::{apply_structure_damage, apply_unit_damage, DamageOutcome};
pub use dice::{Dice, SeededDice};
pub use handler::resolve_hits;
pub use location::{roll_location, LocationRoll};

//! Ammunition reference data
//!
//! Munition variants change to-hit math, cluster behavior, and follow-on
//! effects without changing the launcher.

use serde::{Deserialize, Serialize};

/// Munition family loaded in an ammo bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Munition {
    #[default]
    Standard,
    /// +1 to hit, improved critical effects on penetration
    ArmorPiercing,
    /// -2 to hit moving targets, capped by the movement modifier present
    Precision,
    /// +1 vs armored targets, shreds unarmored infantry
    Flechette,
    /// Homes on hot targets: -2 vs running heat, +1 vs cold ones
    HeatSeeking,
    /// Follows a designator mark; ignores target movement when marked
    SemiGuided,
    /// Independently-targeting submunitions; leftovers seek new targets
    Swarm,
    /// Artillery round that homes on a designator mark
    Homing,
    /// Lays a smoke screen in the target hex instead of damaging
    Smoke,
}

/// Immutable ammunition definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoDef {
    pub name: String,
    pub munition: Munition,
    /// Shots per full bin
    pub shots: u32,
}

impl AmmoDef {
    pub fn new(name: &str, munition: Munition, shots: u32) -> Self {
        Self {
            name: name.into(),
            munition,
            shots,
        }
    }

    pub fn standard(name: &str, shots: u32) -> Self {
        Self::new(name, Munition::Standard, shots)
    }
}

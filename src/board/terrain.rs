//! Map terrain types and their fire effects
//!
//! Terrain contributes intervening and target-hex to-hit modifiers and
//! obstruction points toward a blocked line of sight.

use serde::{Deserialize, Serialize};

/// Primary terrain type for a map hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Terrain {
    #[default]
    Open,           // No fire effect
    Rough,          // No fire effect, slows movement
    LightWoods,     // +1 to fire through or into
    HeavyWoods,     // +2 to fire through or into
    ShallowWater,   // Depth 1, partial submersion
    DeepWater,      // Depth 2+, submerged targets
    Road,           // No fire effect
    Rubble,         // No fire effect
}

impl Terrain {
    /// Obstruction points toward line-of-sight blockage.
    ///
    /// Accumulated along the intervening hexes; three or more points
    /// block the line completely.
    pub fn obstruction_points(&self) -> u32 {
        match self {
            Terrain::LightWoods => 1,
            Terrain::HeavyWoods => 2,
            _ => 0,
        }
    }

    /// To-hit modifier for each intervening hex of this terrain
    pub fn intervening_fire_mod(&self) -> i32 {
        match self {
            Terrain::LightWoods => 1,
            Terrain::HeavyWoods => 2,
            _ => 0,
        }
    }

    /// To-hit modifier when the target stands in this terrain
    pub fn target_hex_fire_mod(&self) -> i32 {
        match self {
            Terrain::LightWoods => 1,
            Terrain::HeavyWoods => 2,
            Terrain::ShallowWater => 1, // Partial submersion
            _ => 0,
        }
    }

    /// Can woods here be cleared or ignited by area-effect fire?
    pub fn flammable(&self) -> bool {
        matches!(self, Terrain::LightWoods | Terrain::HeavyWoods)
    }
}

/// One hex of the map: base terrain plus overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Hex {
    pub terrain: Terrain,
    pub elevation: i32,
    /// Drifting smoke overlay, +2 per intervening hex
    pub smoke: bool,
    pub on_fire: bool,
}

impl Hex {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn of(terrain: Terrain) -> Self {
        Self {
            terrain,
            ..Self::default()
        }
    }

    /// Total obstruction points including overlays
    pub fn obstruction_points(&self) -> u32 {
        // Smoke obscures like light woods
        self.terrain.obstruction_points() + if self.smoke { 1 } else { 0 }
    }
}

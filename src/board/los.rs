//! Line-of-sight effects between two map locations
//!
//! Computed once per attack evaluation and consumed by several modifier
//! compilers. The service sits behind a trait so tests can substitute a
//! fixed-effects stub for compiler-level unit tests.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::board::map::Map;
use crate::core::types::StructureId;

/// Intervening terrain obstruction at or beyond this many points blocks
/// the line completely.
pub const OBSTRUCTION_BLOCK_THRESHOLD: u32 = 3;

/// Cover category granted to the target by intervening elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cover {
    #[default]
    None,
    /// Lower half of the target is protected by a crest or wall
    Partial,
}

/// Derived, read-only line-of-sight data for one attack evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LosEffects {
    pub distance: u32,
    /// Line completely obstructed; direct fire is impossible
    pub blocked: bool,
    pub intervening_light_woods: u32,
    pub intervening_heavy_woods: u32,
    pub intervening_smoke: u32,
    pub cover: Cover,
    pub attacker_structure: Option<StructureId>,
    pub target_structure: Option<StructureId>,
    /// Both endpoints stand inside the same structure
    pub same_structure: bool,
    /// Target elevation minus attacker elevation
    pub elevation_delta: i32,
}

impl LosEffects {
    /// Sum of intervening woods and smoke to-hit modifiers
    pub fn intervening_fire_mod(&self) -> i32 {
        (self.intervening_light_woods + self.intervening_heavy_woods * 2) as i32
            + (self.intervening_smoke * 2) as i32
    }
}

/// Line-of-sight service seam.
///
/// Production uses `MapLos`; compiler tests may provide canned effects.
pub trait LineOfSight {
    fn effects(&self, map: &Map, from: HexCoord, to: HexCoord) -> LosEffects;
}

/// Map-walking line-of-sight implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct MapLos;

impl LineOfSight for MapLos {
    fn effects(&self, map: &Map, from: HexCoord, to: HexCoord) -> LosEffects {
        let mut effects = LosEffects {
            distance: from.distance(&to),
            ..LosEffects::default()
        };

        let from_hex = map.hex(from);
        let to_hex = map.hex(to);
        effects.elevation_delta = to_hex.elevation - from_hex.elevation;

        effects.attacker_structure = map.structure_at(from).map(|s| s.id);
        effects.target_structure = map.structure_at(to).map(|s| s.id);
        effects.same_structure = match (effects.attacker_structure, effects.target_structure) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        let line = from.line_to(&to);
        let mut obstruction = 0u32;
        // Endpoints do not obstruct their own line
        for coord in line.iter().skip(1).take(line.len().saturating_sub(2)) {
            let hex = map.hex(*coord);
            obstruction += hex.obstruction_points();

            match hex.terrain.intervening_fire_mod() {
                1 => effects.intervening_light_woods += 1,
                2 => effects.intervening_heavy_woods += 1,
                _ => {}
            }
            if hex.smoke {
                effects.intervening_smoke += 1;
            }

            // Terrain higher than both endpoints blocks the line; a crest
            // one level above the target and adjacent to it grants cover.
            let over_both =
                hex.elevation > from_hex.elevation && hex.elevation > to_hex.elevation;
            if over_both {
                effects.blocked = true;
            } else if hex.elevation == to_hex.elevation + 1 && coord.adjacent(&to) {
                effects.cover = Cover::Partial;
            }
        }

        if obstruction >= OBSTRUCTION_BLOCK_THRESHOLD {
            effects.blocked = true;
        }

        effects
    }
}

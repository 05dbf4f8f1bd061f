//! Hex map with terrain and structures
//!
//! Structures (buildings, fuel tanks, gun emplacements) occupy one or more
//! hexes, absorb damage for units inside them, and are auto-hit targets at
//! point-blank range.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::board::terrain::{Hex, Terrain};
use crate::core::types::StructureId;

/// Kind of map structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Building,
    FuelTank,
    GunEmplacement,
}

/// Construction class, sets damage absorption and collapse threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionClass {
    Light,
    Medium,
    Heavy,
    Hardened,
}

impl ConstructionClass {
    /// Damage absorbed per hit for units sheltering inside
    pub fn absorption(&self) -> u32 {
        match self {
            ConstructionClass::Light => 2,
            ConstructionClass::Medium => 4,
            ConstructionClass::Heavy => 8,
            ConstructionClass::Hardened => 12,
        }
    }

    /// Starting construction factor
    pub fn construction_factor(&self) -> u32 {
        match self {
            ConstructionClass::Light => 15,
            ConstructionClass::Medium => 40,
            ConstructionClass::Heavy => 90,
            ConstructionClass::Hardened => 120,
        }
    }
}

/// A structure on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    pub kind: StructureKind,
    pub class: ConstructionClass,
    pub hexes: Vec<HexCoord>,
    /// Remaining construction factor; zero means collapsed
    pub integrity: u32,
}

impl Structure {
    pub fn new(kind: StructureKind, class: ConstructionClass, hexes: Vec<HexCoord>) -> Self {
        Self {
            id: StructureId::new(),
            kind,
            class,
            hexes,
            integrity: class.construction_factor(),
        }
    }

    pub fn collapsed(&self) -> bool {
        self.integrity == 0
    }
}

/// Game map: hexes plus structures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Map {
    pub width: u32,
    pub height: u32,
    hexes: AHashMap<HexCoord, Hex>,
    structures: AHashMap<StructureId, Structure>,
    structure_index: AHashMap<HexCoord, StructureId>,
}

impl Map {
    /// Create a map of the given size; unset hexes read as clear ground
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn hex(&self, coord: HexCoord) -> Hex {
        self.hexes.get(&coord).copied().unwrap_or_default()
    }

    pub fn set_terrain(&mut self, coord: HexCoord, terrain: Terrain) {
        self.hexes.entry(coord).or_default().terrain = terrain;
    }

    pub fn set_elevation(&mut self, coord: HexCoord, elevation: i32) {
        self.hexes.entry(coord).or_default().elevation = elevation;
    }

    pub fn set_smoke(&mut self, coord: HexCoord, smoke: bool) {
        self.hexes.entry(coord).or_default().smoke = smoke;
    }

    pub fn ignite(&mut self, coord: HexCoord) {
        let hex = self.hexes.entry(coord).or_default();
        if hex.terrain.flammable() {
            hex.on_fire = true;
        }
    }

    /// Register a structure, indexing every hex it occupies
    pub fn add_structure(&mut self, structure: Structure) -> StructureId {
        let id = structure.id;
        for coord in &structure.hexes {
            self.structure_index.insert(*coord, id);
        }
        self.structures.insert(id, structure);
        id
    }

    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(&id)
    }

    pub fn structure_mut(&mut self, id: StructureId) -> Option<&mut Structure> {
        self.structures.get_mut(&id)
    }

    /// Structure standing on a hex, if any and not collapsed
    pub fn structure_at(&self, coord: HexCoord) -> Option<&Structure> {
        self.structure_index
            .get(&coord)
            .and_then(|id| self.structures.get(id))
            .filter(|s| !s.collapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_hex_reads_as_open() {
        let map = Map::new(10, 10);
        let hex = map.hex(HexCoord::new(3, 3));
        assert_eq!(hex.terrain, Terrain::Open);
        assert_eq!(hex.elevation, 0);
    }

    #[test]
    fn test_structure_index_covers_all_hexes() {
        let mut map = Map::new(10, 10);
        let hexes = vec![HexCoord::new(1, 1), HexCoord::new(2, 1)];
        let id = map.add_structure(Structure::new(
            StructureKind::Building,
            ConstructionClass::Medium,
            hexes.clone(),
        ));
        for coord in hexes {
            assert_eq!(map.structure_at(coord).unwrap().id, id);
        }
        assert!(map.structure_at(HexCoord::new(5, 5)).is_none());
    }

    #[test]
    fn test_collapsed_structure_not_reported() {
        let mut map = Map::new(10, 10);
        let id = map.add_structure(Structure::new(
            StructureKind::FuelTank,
            ConstructionClass::Light,
            vec![HexCoord::new(4, 4)],
        ));
        map.structure_mut(id).unwrap().integrity = 0;
        assert!(map.structure_at(HexCoord::new(4, 4)).is_none());
    }

    #[test]
    fn test_ignite_only_flammable() {
        let mut map = Map::new(10, 10);
        map.set_terrain(HexCoord::new(0, 0), Terrain::LightWoods);
        map.ignite(HexCoord::new(0, 0));
        map.ignite(HexCoord::new(1, 0));
        assert!(map.hex(HexCoord::new(0, 0)).on_fire);
        assert!(!map.hex(HexCoord::new(1, 0)).on_fire);
    }

    #[test]
    fn test_absorption_by_class() {
        assert_eq!(ConstructionClass::Light.absorption(), 2);
        assert_eq!(ConstructionClass::Hardened.absorption(), 12);
    }
}

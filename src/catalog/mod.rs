//! Immutable reference catalog of weapons and ammunition
//!
//! Loaded once per game and consumed read-only by the rules engine.
//! Unit sheets reference catalog entries by name.

pub mod ammo;
pub mod weapon;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub use ammo::{AmmoDef, Munition};
pub use weapon::{BracketTier, RangeBracket, WeaponClass, WeaponDef, WeaponFlags};

use crate::core::error::{EngineError, Result};

/// Keyed lookup over the reference data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    weapons: AHashMap<String, WeaponDef>,
    ammo: AHashMap<String, AmmoDef>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog with the stock weapon and ammunition entries registered
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        for weapon in [
            WeaponDef::medium_laser(),
            WeaponDef::large_pulse_laser(),
            WeaponDef::autocannon_10(),
            WeaponDef::anti_air_gun(),
            WeaponDef::lrm_15(),
            WeaponDef::srm_6(),
            WeaponDef::sniper_cannon(),
            WeaponDef::laser_designator(),
            WeaponDef::capital_laser_bay(),
            WeaponDef::swarm_attack(),
            WeaponDef::leg_attack(),
            WeaponDef::bomb_rack(),
        ] {
            catalog.register_weapon(weapon);
        }
        for ammo in [
            AmmoDef::standard("AC/10 Ammo", 10),
            AmmoDef::standard("Flak Ammo", 20),
            AmmoDef::standard("LRM Ammo", 8),
            AmmoDef::new("LRM Swarm Ammo", Munition::Swarm, 8),
            AmmoDef::new("LRM Semi-Guided Ammo", Munition::SemiGuided, 8),
            AmmoDef::standard("SRM Ammo", 15),
            AmmoDef::new("SRM Precision Ammo", Munition::Precision, 15),
            AmmoDef::new("AC Armor-Piercing Ammo", Munition::ArmorPiercing, 10),
            AmmoDef::new("AC Flechette Ammo", Munition::Flechette, 10),
            AmmoDef::new("SRM Heat-Seeking Ammo", Munition::HeatSeeking, 15),
            AmmoDef::standard("Sniper Shells", 10),
            AmmoDef::new("Sniper Homing Shells", Munition::Homing, 10),
            AmmoDef::new("Sniper Smoke Shells", Munition::Smoke, 10),
            AmmoDef::standard("Bombs", 4),
        ] {
            catalog.register_ammo(ammo);
        }
        catalog
    }

    pub fn register_weapon(&mut self, def: WeaponDef) {
        self.weapons.insert(def.name.clone(), def);
    }

    pub fn register_ammo(&mut self, def: AmmoDef) {
        self.ammo.insert(def.name.clone(), def);
    }

    pub fn weapon(&self, name: &str) -> Result<&WeaponDef> {
        self.weapons
            .get(name)
            .ok_or_else(|| EngineError::UnknownWeapon(name.into()))
    }

    pub fn ammo(&self, name: &str) -> Result<&AmmoDef> {
        self.ammo
            .get(name)
            .ok_or_else(|| EngineError::UnknownAmmo(name.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_lookup() {
        let catalog = Catalog::standard();
        assert!(catalog.weapon("Medium Laser").is_ok());
        assert!(catalog.ammo("LRM Swarm Ammo").is_ok());
    }

    #[test]
    fn test_unknown_weapon_is_error() {
        let catalog = Catalog::standard();
        assert!(catalog.weapon("Death Ray").is_err());
    }
}

//! Weapon reference data
//!
//! Weapon definitions are immutable catalog entries. Stats follow the
//! tabletop sheet: range brackets in hexes, damage per hit, heat generated
//! on firing, and the special flags the to-hit compilers key on.

use serde::{Deserialize, Serialize};

/// Broad class of weapon, used for specialized gunnery tracks and for
/// environment rules (low gravity penalizes unguided projectiles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    Energy,
    Ballistic,
    Missile,
    Artillery,
}

/// Range bracket of an attack at a given distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeBracket {
    Short,
    Medium,
    Long,
    OutOfRange,
}

/// Bracketing fire mode tier (capital-weapon bays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketTier {
    Eighty,
    Sixty,
    Forty,
}

impl BracketTier {
    /// To-hit bonus for giving up part of the bay's output
    pub fn fire_mod(&self) -> i32 {
        match self {
            BracketTier::Eighty => -1,
            BracketTier::Sixty => -2,
            BracketTier::Forty => -3,
        }
    }
}

/// Special behavior flags on a weapon definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponFlags {
    /// Pulse delivery, -2 to hit
    pub pulse: bool,
    /// Tuned for airborne targets, -2 vs flying units when fired flak
    pub flak: bool,
    /// Capital scale, +5 vs non-capital targets
    pub capital: bool,
    /// May be fired without line of sight through a spotter
    pub indirect_capable: bool,
    /// Damages every unit and structure in the target hex
    pub area_effect: bool,
    /// Laser designator; deals no damage, marks the target for
    /// semi-guided munitions
    pub designator: bool,
    /// Supports bracketing fire tiers
    pub bracketing: bool,
    /// Infantry swarm attack: clamber onto a walker and strike weak points
    pub swarm_attack: bool,
    /// Infantry leg attack: concentrated strikes on a walker's legs
    pub leg_attack: bool,
}

/// Immutable weapon definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDef {
    pub name: String,
    pub class: WeaponClass,
    /// Damage per hit (per missile for cluster weapons)
    pub damage: u32,
    pub heat: u32,
    pub min_range: u32,
    pub short_range: u32,
    pub medium_range: u32,
    pub long_range: u32,
    /// Number of projectiles per salvo for cluster weapons
    pub rack_size: Option<u32>,
    /// Requires an ammunition bin to fire
    pub needs_ammo: bool,
    /// Replaces the entire to-hit calculation with a flat number
    pub fixed_to_hit: Option<i32>,
    pub flags: WeaponFlags,
}

impl WeaponDef {
    /// Range bracket for a given distance in hexes
    pub fn bracket(&self, distance: u32) -> RangeBracket {
        if distance <= self.short_range {
            RangeBracket::Short
        } else if distance <= self.medium_range {
            RangeBracket::Medium
        } else if distance <= self.long_range {
            RangeBracket::Long
        } else {
            RangeBracket::OutOfRange
        }
    }

    /// Hexes inside minimum range, zero if unaffected
    pub fn min_range_shortfall(&self, distance: u32) -> u32 {
        if distance < self.min_range {
            self.min_range - distance + 1
        } else if distance == self.min_range && self.min_range > 0 {
            1
        } else {
            0
        }
    }

    pub fn is_cluster(&self) -> bool {
        self.rack_size.is_some()
    }

    // --- Catalog entries ---

    pub fn medium_laser() -> Self {
        Self {
            name: "Medium Laser".into(),
            class: WeaponClass::Energy,
            damage: 5,
            heat: 3,
            min_range: 0,
            short_range: 3,
            medium_range: 6,
            long_range: 9,
            rack_size: None,
            needs_ammo: false,
            fixed_to_hit: None,
            flags: WeaponFlags::default(),
        }
    }

    pub fn large_pulse_laser() -> Self {
        Self {
            name: "Large Pulse Laser".into(),
            class: WeaponClass::Energy,
            damage: 9,
            heat: 10,
            min_range: 0,
            short_range: 3,
            medium_range: 7,
            long_range: 10,
            rack_size: None,
            needs_ammo: false,
            fixed_to_hit: None,
            flags: WeaponFlags {
                pulse: true,
                ..WeaponFlags::default()
            },
        }
    }

    pub fn autocannon_10() -> Self {
        Self {
            name: "Autocannon/10".into(),
            class: WeaponClass::Ballistic,
            damage: 10,
            heat: 3,
            min_range: 0,
            short_range: 5,
            medium_range: 10,
            long_range: 15,
            rack_size: None,
            needs_ammo: true,
            fixed_to_hit: None,
            flags: WeaponFlags::default(),
        }
    }

    pub fn anti_air_gun() -> Self {
        Self {
            name: "Anti-Air Gun".into(),
            class: WeaponClass::Ballistic,
            damage: 5,
            heat: 1,
            min_range: 0,
            short_range: 6,
            medium_range: 12,
            long_range: 18,
            rack_size: None,
            needs_ammo: true,
            fixed_to_hit: None,
            flags: WeaponFlags {
                flak: true,
                ..WeaponFlags::default()
            },
        }
    }

    pub fn lrm_15() -> Self {
        Self {
            name: "LRM-15".into(),
            class: WeaponClass::Missile,
            damage: 1,
            heat: 5,
            min_range: 6,
            short_range: 7,
            medium_range: 14,
            long_range: 21,
            rack_size: Some(15),
            needs_ammo: true,
            fixed_to_hit: None,
            flags: WeaponFlags {
                indirect_capable: true,
                ..WeaponFlags::default()
            },
        }
    }

    pub fn srm_6() -> Self {
        Self {
            name: "SRM-6".into(),
            class: WeaponClass::Missile,
            damage: 2,
            heat: 4,
            min_range: 0,
            short_range: 3,
            medium_range: 6,
            long_range: 9,
            rack_size: Some(6),
            needs_ammo: true,
            fixed_to_hit: None,
            flags: WeaponFlags::default(),
        }
    }

    pub fn sniper_cannon() -> Self {
        Self {
            name: "Sniper Cannon".into(),
            class: WeaponClass::Artillery,
            damage: 20,
            heat: 10,
            min_range: 0,
            short_range: 17,
            medium_range: 12 * 17,
            long_range: 18 * 17,
            rack_size: None,
            needs_ammo: true,
            fixed_to_hit: None,
            flags: WeaponFlags {
                indirect_capable: true,
                area_effect: true,
                ..WeaponFlags::default()
            },
        }
    }

    pub fn laser_designator() -> Self {
        Self {
            name: "Laser Designator".into(),
            class: WeaponClass::Energy,
            damage: 0,
            heat: 0,
            min_range: 0,
            short_range: 5,
            medium_range: 9,
            long_range: 15,
            rack_size: None,
            needs_ammo: false,
            fixed_to_hit: None,
            flags: WeaponFlags {
                designator: true,
                ..WeaponFlags::default()
            },
        }
    }

    pub fn capital_laser_bay() -> Self {
        Self {
            name: "Capital Laser Bay".into(),
            class: WeaponClass::Energy,
            damage: 30,
            heat: 24,
            min_range: 0,
            short_range: 12,
            medium_range: 24,
            long_range: 40,
            rack_size: None,
            needs_ammo: false,
            fixed_to_hit: None,
            flags: WeaponFlags {
                capital: true,
                bracketing: true,
                ..WeaponFlags::default()
            },
        }
    }

    /// Anti-armor infantry swarming attack; resolved on its own track
    pub fn swarm_attack() -> Self {
        Self {
            name: "Swarm Attack".into(),
            class: WeaponClass::Ballistic,
            damage: 5,
            heat: 0,
            min_range: 0,
            short_range: 1,
            medium_range: 1,
            long_range: 1,
            rack_size: None,
            needs_ammo: false,
            fixed_to_hit: None,
            flags: WeaponFlags {
                swarm_attack: true,
                ..WeaponFlags::default()
            },
        }
    }

    /// Anti-armor infantry leg attack; resolved on its own track
    pub fn leg_attack() -> Self {
        Self {
            name: "Leg Attack".into(),
            class: WeaponClass::Ballistic,
            damage: 10,
            heat: 0,
            min_range: 0,
            short_range: 1,
            medium_range: 1,
            long_range: 1,
            rack_size: None,
            needs_ammo: false,
            fixed_to_hit: None,
            flags: WeaponFlags {
                leg_attack: true,
                ..WeaponFlags::default()
            },
        }
    }

    /// Aerospace bomb release over a ground hex; flat to-hit number
    pub fn bomb_rack() -> Self {
        Self {
            name: "Bomb Rack".into(),
            class: WeaponClass::Ballistic,
            damage: 10,
            heat: 0,
            min_range: 0,
            short_range: 0,
            medium_range: 0,
            long_range: 0,
            rack_size: None,
            needs_ammo: true,
            fixed_to_hit: Some(5),
            flags: WeaponFlags {
                area_effect: true,
                ..WeaponFlags::default()
            },
        }
    }
}

//! Combat units: kind, crew, condition, mounted equipment
//!
//! The engine reads unit state during evaluation and mutates it only
//! through the resolution handler.

pub mod crew;
pub mod kind;
pub mod movement;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::board::hex::{Facing, HexCoord};
use crate::core::types::{Side, UnitId};

pub use crew::{Crew, CrewAbility};
pub use kind::UnitKind;
pub use movement::{MoveKind, MovementRecord};
pub use status::Status;

/// Equipment and hit location on a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    /// Undifferentiated hull for vehicles and infantry
    Body,
    Turret,
}

impl Location {
    pub fn is_arm(&self) -> bool {
        matches!(self, Location::LeftArm | Location::RightArm)
    }

    pub fn is_leg(&self) -> bool {
        matches!(self, Location::LeftLeg | Location::RightLeg)
    }
}

/// Which of the two arms or legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimbSide {
    Left,
    Right,
}

/// Actuator and structure damage to one arm
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArmState {
    pub blown_off: bool,
    pub shoulder_hit: bool,
    pub upper_actuator_hit: bool,
    pub lower_actuator_hit: bool,
    pub hand_destroyed: bool,
}

impl ArmState {
    /// Arm can still deliver or support a physical attack
    pub fn usable(&self) -> bool {
        !self.blown_off
    }
}

/// Actuator and structure damage to one leg
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LegState {
    pub blown_off: bool,
    pub hip_hit: bool,
    pub upper_actuator_hit: bool,
    pub lower_actuator_hit: bool,
    pub foot_destroyed: bool,
}

impl LegState {
    pub fn usable(&self) -> bool {
        !self.blown_off && !self.hip_hit
    }
}

/// Critical damage relevant to attack math
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CriticalState {
    pub sensor_hits: u8,
    pub left_arm: ArmState,
    pub right_arm: ArmState,
    pub left_leg: LegState,
    pub right_leg: LegState,
    pub targeting_computer_destroyed: bool,
}

impl CriticalState {
    pub fn arm(&self, side: LimbSide) -> &ArmState {
        match side {
            LimbSide::Left => &self.left_arm,
            LimbSide::Right => &self.right_arm,
        }
    }

    pub fn leg(&self, side: LimbSide) -> &LegState {
        match side {
            LimbSide::Left => &self.left_leg,
            LimbSide::Right => &self.right_leg,
        }
    }
}

/// A weapon mounted on a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mount {
    /// Catalog weapon name
    pub weapon: String,
    pub location: Location,
    pub destroyed: bool,
    pub jammed: bool,
    pub fired_this_turn: bool,
}

impl Mount {
    pub fn new(weapon: &str, location: Location) -> Self {
        Self {
            weapon: weapon.into(),
            location,
            destroyed: false,
            jammed: false,
            fired_this_turn: false,
        }
    }

    pub fn operable(&self) -> bool {
        !self.destroyed && !self.jammed
    }
}

/// An ammunition bin carried by a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoBin {
    /// Catalog ammo name
    pub ammo: String,
    pub rounds: u32,
}

impl AmmoBin {
    pub fn new(ammo: &str, rounds: u32) -> Self {
        Self {
            ammo: ammo.into(),
            rounds,
        }
    }
}

/// A combat unit on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub side: Side,
    pub name: String,
    pub kind: UnitKind,
    pub tonnage: u32,
    pub crew: Crew,

    pub position: HexCoord,
    pub facing: Facing,

    pub heat: i32,
    pub movement: MovementRecord,
    pub status: Status,
    pub crits: CriticalState,

    pub mounts: Vec<Mount>,
    pub ammo: Vec<AmmoBin>,
    pub targeting_computer: bool,

    /// Anti-missile system covering incoming salvos
    pub ams_active: bool,
    /// Artemis-style fire control on missile racks
    pub missile_fcs: bool,

    pub armor: i32,
    pub kills: u32,
}

impl Unit {
    pub fn new(side: Side, name: &str, kind: UnitKind, tonnage: u32) -> Self {
        Self {
            id: UnitId::new(),
            side,
            name: name.into(),
            kind,
            tonnage,
            crew: Crew::regular(),
            position: HexCoord::default(),
            facing: Facing::default(),
            heat: 0,
            movement: MovementRecord::stationary(),
            status: Status::default(),
            crits: CriticalState::default(),
            mounts: Vec::new(),
            ammo: Vec::new(),
            targeting_computer: false,
            ams_active: false,
            missile_fcs: false,
            armor: 40,
            kills: 0,
        }
    }

    pub fn mount(&self, index: usize) -> Option<&Mount> {
        self.mounts.get(index)
    }

    pub fn ammo_bin(&self, index: usize) -> Option<&AmmoBin> {
        self.ammo.get(index)
    }

    /// First bin with rounds remaining for the given catalog ammo name
    pub fn find_ammo(&self, ammo: &str) -> Option<usize> {
        self.ammo
            .iter()
            .position(|b| b.ammo == ammo && b.rounds > 0)
    }

    pub fn has_working_targeting_computer(&self) -> bool {
        self.targeting_computer && !self.crits.targeting_computer_destroyed
    }

    /// Can the unit attack at all this phase?
    pub fn can_attack(&self) -> bool {
        !self.status.destroyed
            && !self.status.shutdown
            && self.crew.conscious
    }
}

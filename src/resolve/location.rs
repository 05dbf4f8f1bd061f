//! Hit location tables
//!
//! Walker frames roll on the full-body 2d6 table for the side the attack
//! arrives from; punches, kicks, and swarming infantry use their own
//! tables. Other unit kinds take hits on the hull.

use crate::attack::result::HitTable;
use crate::board::hex::Arc;
use crate::unit::{Location, UnitKind};

/// Where a sub-hit lands, or that cover swallowed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRoll {
    Struck(Location),
    /// The rolled location is shielded by intervening cover
    AbsorbedByCover,
}

/// Full-body 2d6 table for the front and rear arcs
fn full_body_front(roll: u32) -> Location {
    match roll {
        2 => Location::CenterTorso,
        3 | 4 => Location::RightArm,
        5 => Location::RightLeg,
        6 => Location::RightTorso,
        7 => Location::CenterTorso,
        8 => Location::LeftTorso,
        9 => Location::LeftLeg,
        10 | 11 => Location::LeftArm,
        _ => Location::Head,
    }
}

/// Full-body 2d6 table for the left side arc
fn full_body_left(roll: u32) -> Location {
    match roll {
        2 => Location::LeftTorso,
        3 => Location::LeftLeg,
        4 | 5 => Location::LeftArm,
        6 => Location::LeftLeg,
        7 => Location::LeftTorso,
        8 => Location::CenterTorso,
        9 => Location::RightTorso,
        10 => Location::RightArm,
        11 => Location::RightLeg,
        _ => Location::Head,
    }
}

/// Full-body 2d6 table for the right side arc
fn full_body_right(roll: u32) -> Location {
    match roll {
        2 => Location::RightTorso,
        3 => Location::RightLeg,
        4 | 5 => Location::RightArm,
        6 => Location::RightLeg,
        7 => Location::RightTorso,
        8 => Location::CenterTorso,
        9 => Location::LeftTorso,
        10 => Location::LeftArm,
        11 => Location::LeftLeg,
        _ => Location::Head,
    }
}

/// Punch 1d6 table, attacks land on the upper body
fn punch_table(side: Arc, roll: u32) -> Location {
    match side {
        Arc::Front | Arc::Rear => match roll {
            1 => Location::LeftArm,
            2 => Location::LeftTorso,
            3 => Location::CenterTorso,
            4 => Location::RightTorso,
            5 => Location::RightArm,
            _ => Location::Head,
        },
        Arc::LeftSide => match roll {
            1 | 2 => Location::LeftTorso,
            3 => Location::CenterTorso,
            4 => Location::LeftArm,
            5 => Location::LeftArm,
            _ => Location::Head,
        },
        Arc::RightSide => match roll {
            1 | 2 => Location::RightTorso,
            3 => Location::CenterTorso,
            4 => Location::RightArm,
            5 => Location::RightArm,
            _ => Location::Head,
        },
    }
}

/// Kick 1d6 table, attacks land on the legs
fn kick_table(side: Arc, roll: u32) -> Location {
    match side {
        Arc::LeftSide => Location::LeftLeg,
        Arc::RightSide => Location::RightLeg,
        Arc::Front | Arc::Rear => {
            if roll <= 3 {
                Location::RightLeg
            } else {
                Location::LeftLeg
            }
        }
    }
}

/// Swarming infantry strike hatches and intakes
fn swarm_table(roll: u32) -> Location {
    match roll {
        2 | 12 => Location::Head,
        3 | 4 => Location::RightTorso,
        10 | 11 => Location::LeftTorso,
        _ => Location::CenterTorso,
    }
}

/// Resolve one sub-hit location.
///
/// `roll` is 2d6 for the full-body and swarm tables, 1d6 for punch and
/// kick. Non-walker targets always take the hit on the hull.
pub fn roll_location(kind: UnitKind, table: HitTable, side: Arc, roll: u32) -> LocationRoll {
    if kind != UnitKind::Walker {
        return LocationRoll::Struck(Location::Body);
    }

    let location = match table {
        HitTable::FullBody => match side {
            Arc::Front | Arc::Rear => full_body_front(roll),
            Arc::LeftSide => full_body_left(roll),
            Arc::RightSide => full_body_right(roll),
        },
        HitTable::UpperHalf => {
            let rolled = match side {
                Arc::Front | Arc::Rear => full_body_front(roll),
                Arc::LeftSide => full_body_left(roll),
                Arc::RightSide => full_body_right(roll),
            };
            if rolled.is_leg() {
                return LocationRoll::AbsorbedByCover;
            }
            rolled
        }
        HitTable::Punch => punch_table(side, roll),
        HitTable::Kick => kick_table(side, roll),
        HitTable::Swarm => swarm_table(roll),
    };

    LocationRoll::Struck(location)
}

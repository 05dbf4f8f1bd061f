//! Cluster hits table
//!
//! A cluster weapon's single attack lands a variable number of
//! projectiles, read from a table keyed by rack size and an adjusted
//! 2d6 roll. Counter-measures and fire control shift the roll before
//! the lookup; the shifted roll always clamps back into table range.

use crate::catalog::Munition;
use crate::core::options::RuleOptions;
use crate::unit::Unit;

/// Shift applied to the cluster roll before the table lookup
pub const AMS_CLUSTER_MOD: i32 = -4;
pub const MISSILE_FCS_CLUSTER_MOD: i32 = 2;
pub const NARC_CLUSTER_MOD: i32 = 2;
pub const GLANCING_CLUSTER_MOD: i32 = -4;

/// Number of projectiles that land for a rack size and adjusted roll.
///
/// Rack sizes between table rows use the next lower row, matching how
/// the rulebook resolves off-table racks.
pub fn cluster_hits(rack: u32, adjusted_roll: i32) -> u32 {
    let roll = adjusted_roll.clamp(2, 12) as usize - 2;

    // Rows indexed by roll 2..=12
    let row: [u32; 11] = match rack {
        0 | 1 => return rack,
        2..=3 => [1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2],
        4 => [1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4],
        5 => [1, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5],
        6..=9 => [2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6],
        10..=14 => [3, 3, 4, 6, 6, 6, 6, 8, 8, 10, 10],
        15..=19 => [5, 5, 6, 9, 9, 9, 9, 12, 12, 15, 15],
        _ => [6, 6, 9, 12, 12, 12, 12, 16, 16, 20, 20],
    };

    // Never report more hits than projectiles in the salvo
    row[roll].min(rack)
}

/// Accumulated shift on the cluster roll for one salvo.
///
/// `exact_roll` is true when the attack roll equalled the target number
/// exactly, which the glancing-blows option punishes.
pub fn cluster_modifier(
    attacker: &Unit,
    target: Option<&Unit>,
    munition: Option<Munition>,
    options: &RuleOptions,
    exact_roll: bool,
) -> i32 {
    let mut modifier = 0;

    if let Some(target) = target {
        if target.ams_active {
            modifier += AMS_CLUSTER_MOD;
        }
        if target.status.narc_marked && munition == Some(Munition::Standard) {
            modifier += NARC_CLUSTER_MOD;
        }
    }

    // Fire control only guides standard loads
    if attacker.missile_fcs && munition == Some(Munition::Standard) {
        modifier += MISSILE_FCS_CLUSTER_MOD;
    }

    if options.glancing_blows && exact_roll {
        modifier += GLANCING_CLUSTER_MOD;
    }

    modifier
}

//! Rule options with documented defaults
//!
//! Optional tabletop rules are collected here and injected through
//! `GameState` so individual compilers never consult hidden globals.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::Result;

/// Named rule toggles and tunables for a game.
///
/// Defaults match the base rulebook; scenario files may override any field
/// from a TOML table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Allow attacks against friendly units.
    ///
    /// When off, declaring an attack on a same-side target is flatly
    /// impossible rather than merely inadvisable.
    pub friendly_fire: bool,

    /// Enable the called-shot aiming rule.
    pub called_shots: bool,

    /// To-hit penalty for a called shot.
    ///
    /// The base rulebook uses +3; the expanded rules use +4.
    pub called_shot_penalty: i32,

    /// Enable glancing blows: a roll exactly equal to the target number
    /// resolves with a reduced cluster column.
    pub glancing_blows: bool,

    /// Use per-weapon-class gunnery tracks instead of a single gunnery
    /// skill. A crew's specialty class fires at -1, all others at +1.
    pub specialized_gunnery: bool,

    /// Allow charge attacks to be declared against targets standing
    /// inside buildings.
    pub charge_into_buildings: bool,

    /// Searchlights negate one point of darkness penalty.
    pub searchlights: bool,

    /// Gravity of the battlefield in g. Below 0.8 penalizes ballistic
    /// and missile fire.
    pub gravity: f32,

    /// Battlefield-wide electromagnetic interference.
    pub emi: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            friendly_fire: false,
            called_shots: true,
            called_shot_penalty: 3,
            glancing_blows: false,
            specialized_gunnery: false,
            charge_into_buildings: false,
            searchlights: true,
            gravity: 1.0,
            emi: false,
        }
    }
}

impl RuleOptions {
    /// Load options from a TOML file, filling unspecified fields from
    /// the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Low-gravity fields penalize unguided ballistic and missile fire.
    pub fn low_gravity(&self) -> bool {
        self.gravity < 0.8
    }
}

//! Crew skills and special abilities

use serde::{Deserialize, Serialize};

use crate::catalog::WeaponClass;
use crate::core::options::RuleOptions;

/// Special abilities a crew may have earned.
///
/// Abilities unlock rule exceptions rather than stacking flat bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewAbility {
    /// -1 on called and aimed shots
    Sharpshooter,
    /// Spotting for indirect fire costs no penalty on own attacks
    ForwardObserver,
    /// Evading grants +3 against incoming fire instead of +2
    EvasionExpert,
    /// -1 on all artillery attacks
    ObliqueArtilleryman,
}

/// Skills and state of a unit's crew
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    /// Weapon attack skill; lower is better, 4 is a line regular
    pub gunnery: i32,
    /// Piloting skill, the base for physical attacks
    pub piloting: i32,
    /// Anti-armor infantry training for swarm and leg attacks
    pub anti_armor: i32,
    pub conscious: bool,
    /// Weapon class this crew trained on, for specialized gunnery tracks
    pub specialty: Option<WeaponClass>,
    pub abilities: Vec<CrewAbility>,
}

impl Crew {
    pub fn regular() -> Self {
        Self {
            gunnery: 4,
            piloting: 5,
            anti_armor: 5,
            conscious: true,
            specialty: None,
            abilities: Vec::new(),
        }
    }

    pub fn with_skills(gunnery: i32, piloting: i32) -> Self {
        Self {
            gunnery,
            piloting,
            ..Self::regular()
        }
    }

    pub fn has_ability(&self, ability: CrewAbility) -> bool {
        self.abilities.contains(&ability)
    }

    /// Effective gunnery for a weapon class.
    ///
    /// Under specialized tracks a crew fires its specialty at -1 and
    /// everything else at +1; otherwise the flat gunnery skill applies.
    pub fn gunnery_for(&self, class: WeaponClass, options: &RuleOptions) -> i32 {
        match (options.specialized_gunnery, self.specialty) {
            (true, Some(spec)) if spec == class => self.gunnery - 1,
            (true, Some(_)) => self.gunnery + 1,
            _ => self.gunnery,
        }
    }
}

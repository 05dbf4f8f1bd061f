//! Battlefield-wide environmental conditions

use serde::{Deserialize, Serialize};

/// Ambient light level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Light {
    #[default]
    Day,
    Dusk,       // +1
    Night,      // +2
    PitchBlack, // +3
}

impl Light {
    pub fn fire_mod(&self) -> i32 {
        match self {
            Light::Day => 0,
            Light::Dusk => 1,
            Light::Night => 2,
            Light::PitchBlack => 3,
        }
    }
}

/// Precipitation intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Clear,
    LightPrecipitation, // +1
    HeavyPrecipitation, // +2
}

impl Weather {
    pub fn fire_mod(&self) -> i32 {
        match self {
            Weather::Clear => 0,
            Weather::LightPrecipitation => 1,
            Weather::HeavyPrecipitation => 2,
        }
    }
}

/// Wind strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Wind {
    #[default]
    Calm,
    Strong, // +1
    Storm,  // +2
}

impl Wind {
    pub fn fire_mod(&self) -> i32 {
        match self {
            Wind::Calm => 0,
            Wind::Strong => 1,
            Wind::Storm => 2,
        }
    }
}

/// Conditions applying to the whole battlefield
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FieldConditions {
    pub light: Light,
    pub weather: Weather,
    pub wind: Wind,
    pub fog: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_mods_ascend() {
        assert!(Light::PitchBlack.fire_mod() > Light::Night.fire_mod());
        assert!(Light::Night.fire_mod() > Light::Dusk.fire_mod());
        assert_eq!(Light::Day.fire_mod(), 0);
    }
}

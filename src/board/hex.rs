//! Hex coordinate system for game maps (axial coordinates)
//!
//! Uses axial coordinates (q, r) for neighbor and line calculation.
//! Firing arcs are derived from facing and the attacker-target vector.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Is `other` in one of the six adjacent hexes (or the same hex)?
    pub fn adjacent(&self, other: &Self) -> bool {
        self.distance(other) <= 1
    }

    /// Get all 6 neighboring hex coordinates
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),
            HexCoord::new(self.q + 1, self.r - 1),
            HexCoord::new(self.q, self.r - 1),
            HexCoord::new(self.q - 1, self.r),
            HexCoord::new(self.q - 1, self.r + 1),
            HexCoord::new(self.q, self.r + 1),
        ]
    }

    /// Hex coordinates in a line from self to other (inclusive)
    pub fn line_to(&self, other: &Self) -> Vec<HexCoord> {
        let n = self.distance(other) as i32;
        if n == 0 {
            return vec![*self];
        }

        let mut results = Vec::with_capacity((n + 1) as usize);
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let q = self.q as f32 + (other.q - self.q) as f32 * t;
            let r = self.r as f32 + (other.r - self.r) as f32 * t;
            results.push(Self::round(q, r));
        }
        results
    }

    /// Round floating point hex to nearest integer hex
    fn round(q: f32, r: f32) -> Self {
        let s = -q - r;
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }

        Self::new(rq as i32, rr as i32)
    }

    /// Angle in radians from self toward other (flat-top pixel projection)
    fn bearing(&self, other: &Self) -> f32 {
        let dx = (other.q - self.q) as f32 + (other.r - self.r) as f32 / 2.0;
        let dy = (other.r - self.r) as f32 * 0.866_025_4;
        dy.atan2(dx)
    }
}

/// Unit facing, one of the six hex directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    #[default]
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Facing {
    /// Hex offset for one step in this direction
    pub fn offset(&self) -> HexCoord {
        match self {
            Facing::East => HexCoord::new(1, 0),
            Facing::NorthEast => HexCoord::new(1, -1),
            Facing::NorthWest => HexCoord::new(0, -1),
            Facing::West => HexCoord::new(-1, 0),
            Facing::SouthWest => HexCoord::new(-1, 1),
            Facing::SouthEast => HexCoord::new(0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Facing::East => Facing::West,
            Facing::NorthEast => Facing::SouthWest,
            Facing::NorthWest => Facing::SouthEast,
            Facing::West => Facing::East,
            Facing::SouthWest => Facing::NorthEast,
            Facing::SouthEast => Facing::NorthWest,
        }
    }

    /// Facing direction as an angle in radians (flat-top projection)
    fn angle(&self) -> f32 {
        use std::f32::consts::FRAC_PI_3;
        match self {
            Facing::East => 0.0,
            Facing::NorthEast => -FRAC_PI_3,
            Facing::NorthWest => -2.0 * FRAC_PI_3,
            Facing::West => std::f32::consts::PI,
            Facing::SouthWest => 2.0 * FRAC_PI_3,
            Facing::SouthEast => FRAC_PI_3,
        }
    }
}

/// Relative arc of an observed hex from a facing unit.
///
/// Determines which hit-location side table applies and whether a
/// secondary target sits in the forward field of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arc {
    Front,
    LeftSide,
    RightSide,
    Rear,
}

impl Arc {
    /// Arc of `to` as seen from a unit at `from` facing `facing`.
    ///
    /// Front covers the forward 120 degrees, each side 60, rear the rest.
    /// A hex on top of the observer counts as front.
    pub fn of(from: HexCoord, facing: Facing, to: HexCoord) -> Arc {
        if from == to {
            return Arc::Front;
        }
        let mut rel = from.bearing(&to) - facing.angle();
        while rel > std::f32::consts::PI {
            rel -= 2.0 * std::f32::consts::PI;
        }
        while rel < -std::f32::consts::PI {
            rel += 2.0 * std::f32::consts::PI;
        }
        let deg = rel.to_degrees();
        if deg.abs() <= 60.0 {
            Arc::Front
        } else if deg.abs() >= 120.0 {
            Arc::Rear
        } else if deg > 0.0 {
            // Positive bearing is clockwise in screen coordinates
            Arc::RightSide
        } else {
            Arc::LeftSide
        }
    }
}

//! Map geometry, terrain, and line-of-sight effects

pub mod hex;
pub mod los;
pub mod map;
pub mod terrain;

pub use hex::{Arc, Facing, HexCoord};
pub use los::{Cover, LineOfSight, LosEffects, MapLos};
pub use map::{ConstructionClass, Map, Structure, StructureKind};
pub use terrain::{Hex, Terrain};

//! To-hit evaluation: context, result, modifier compilers, orchestrator

pub mod context;
pub mod modifiers;
pub mod orchestrator;
pub mod result;

pub use context::{ArtilleryFire, AttackContext, AttackTarget};
pub use orchestrator::{evaluate_attack, SpecialResolution};
pub use result::{HitTable, Modifier, ToHitOutcome, ToHitResult};

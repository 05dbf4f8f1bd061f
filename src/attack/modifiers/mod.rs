//! Modifier compilers, one per rulebook category
//!
//! Each compiler is a pure function of the attack context and the running
//! result; the orchestrator owns their order, which is rule-significant.

pub mod ammo;
pub mod artillery;
pub mod attacker;
pub mod constants;
pub mod environment;
pub mod special;
pub mod target;
pub mod terrain;
pub mod weapon;

//! Game state, phases, and battlefield conditions

pub mod environment;
pub mod phase;
pub mod state;

pub use environment::{FieldConditions, Light, Weather, Wind};
pub use phase::TurnPhase;
pub use state::GameState;

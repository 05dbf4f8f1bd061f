//! Core types, errors, and rule options

pub mod error;
pub mod options;
pub mod types;

pub use error::{EngineError, Result};
pub use options::RuleOptions;
pub use types::{Side, StructureId, Turn, UnitId};

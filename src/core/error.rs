use thiserror::Error;

use crate::core::types::{StructureId, UnitId};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unit not found: {0:?}")]
    UnitNotFound(UnitId),

    #[error("Structure not found: {0:?}")]
    StructureNotFound(StructureId),

    #[error("Unknown weapon in catalog: {0}")]
    UnknownWeapon(String),

    #[error("Unknown ammunition in catalog: {0}")]
    UnknownAmmo(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Options parse error: {0}")]
    OptionsParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

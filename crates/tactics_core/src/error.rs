use thiserror::Error;

use crate::engine::tuning::TuningError;

#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("Unknown formation: {0}")]
    UnknownFormation(String),

    #[error("Unknown competition: {0}")]
    UnknownCompetition(String),

    #[error("Unknown opponent strength: {0}")]
    UnknownStrength(String),

    #[error("Unknown style of play: {0}")]
    UnknownStyle(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),
}

impl TacticsError {
    /// Stable machine-readable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            TacticsError::UnknownFormation(_) => "E_UNKNOWN_FORMATION",
            TacticsError::UnknownCompetition(_) => "E_UNKNOWN_COMPETITION",
            TacticsError::UnknownStrength(_) => "E_UNKNOWN_STRENGTH",
            TacticsError::UnknownStyle(_) => "E_UNKNOWN_STYLE",
            TacticsError::UnsupportedSchemaVersion { .. } => "E_SCHEMA_VERSION",
            TacticsError::Validation(_) => "E_VALIDATION",
            TacticsError::Json(_) => "E_JSON",
            TacticsError::Tuning(_) => "E_TUNING",
        }
    }

    /// True when the caller can fix the problem by correcting its input
    pub fn is_input_error(&self) -> bool {
        match self {
            TacticsError::Tuning(_) => false,
            TacticsError::Json(e) => e.is_data() || e.is_syntax() || e.is_eof(),
            _ => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, TacticsError>;

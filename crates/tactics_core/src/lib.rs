//! # tactics_core - Tactical Counter Scoring Engine
//!
//! Deterministic calculator that turns two team profiles and a match context
//! into a tactical recommendation: style of play, formation, outcome
//! probabilities, a player-role sheet, alternative formations and a handful
//! of descriptive indices.
//!
//! ## Features
//! - Pure, stateless evaluation (same input = same result)
//! - Tunable numeric constants loaded from JSON or YAML
//! - Formation-meta counter presets for the quick-counter form
//! - JSON API with schema export for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod tactics;

// Re-export main API functions
pub use api::{
    counter_preset_json, evaluate_batch_json, evaluate_json, request_schema_json,
    response_schema_json, EvaluationRequest, EvaluationResponse, PresetRequest, ResultView,
};
pub use error::{Result, TacticsError};

// Re-export engine
pub use engine::{evaluate, CalculationResult, EngineTuning, ResultPreview, TacticsCalculator};

// Re-export input models
pub use models::{Competition, Formation, MatchContext, TeamProfile};

// Re-export tactics system
pub use tactics::{
    compute_opp_preset, AlternativeFormation, CounterPreset, PlayerRoleAssignment, Strength,
    StyleOfPlay, StyleProfile,
};

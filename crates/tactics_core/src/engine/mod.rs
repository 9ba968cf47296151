//! Scoring engine: tuning constants, outcome model, indices and the
//! calculator entry point.

pub mod briefing;
pub mod calculator;
pub mod indices;
pub mod probability;
pub mod tuning;

pub use calculator::{evaluate, CalculationResult, ResultPreview, TacticsCalculator};
pub use indices::{AttackingWidth, ConfidenceLevel, DefensiveShape};
pub use probability::OutcomeProbabilities;
pub use tuning::{EngineTuning, TuningError};

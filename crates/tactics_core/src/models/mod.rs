// crates/tactics_core/src/models/mod.rs
// Input models: team profiles, match context and the formation catalogue

pub mod context;
pub mod formation;
pub mod team;

pub use context::{Competition, MatchContext, COMPETITIONS};
pub use formation::{Formation, FORMATIONS};
pub use team::{TeamProfile, RATING_MAX, RATING_MIN};

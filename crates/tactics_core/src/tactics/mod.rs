// crates/tactics_core/src/tactics/mod.rs
// Style of play, rule cascades, role sheet, alternatives and formation-meta presets

pub mod alternatives;
pub mod formation_meta;
pub mod player_roles;
pub mod rules;
pub mod style_of_play;

// Re-export main types
pub use alternatives::{build_alternatives, AlternativeFormation, FormationType};
pub use player_roles::{build_player_roles, PlayerRoleAssignment, PositionSlot, RolePriority};
pub use rules::{derive_formation, derive_style_key, FormationDecision};
pub use style_of_play::{StyleOfPlay, StyleProfile, STYLES};

// Formation meta presets
pub use formation_meta::{
    compute_opp_preset, CounterPreset, FormationMeta, Marking, Strength, Tackling, FORMATION_META,
};

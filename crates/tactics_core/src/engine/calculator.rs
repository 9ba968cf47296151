//! Tactics Scoring Calculator
//!
//! Pure function of two team profiles and a match context. Each call builds
//! its result from scratch; nothing is cached between calls, so one
//! calculator can be shared freely across threads.

use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;

use crate::engine::briefing::{detailed_tactics, tactical_brief};
use crate::engine::indices::{
    attacking_width, confidence_level, defensive_shape, key_matchup, pressure_index,
    transition_score, Advantages, AttackingWidth, ConfidenceLevel, DefensiveShape,
};
use crate::engine::probability::{adjusted_rating_diff, outcome_probabilities};
use crate::engine::tuning::{EngineTuning, TuningError};
use crate::models::{Formation, MatchContext, TeamProfile};
use crate::tactics::alternatives::{build_alternatives, AlternativeFormation};
use crate::tactics::player_roles::{build_player_roles, PlayerRoleAssignment};
use crate::tactics::rules::{derive_formation, derive_style_key};
use crate::tactics::style_of_play::StyleOfPlay;

/// Full output of one evaluation
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct CalculationResult {
    pub recommended_formation: Formation,
    pub formation_changed: bool,
    pub style_of_play: StyleOfPlay,
    pub win_probability: u8,
    pub draw_probability: u8,
    pub loss_probability: u8,
    pub tactical_brief: String,
    pub detailed_tactics: String,
    pub player_roles: Vec<PlayerRoleAssignment>,
    pub alternative_formations: Vec<AlternativeFormation>,
    pub pressure_index: u8,
    pub transition_score: u8,
    pub defensive_shape: DefensiveShape,
    pub attacking_width: AttackingWidth,
    pub key_matchup: String,
    pub confidence_level: ConfidenceLevel,
}

/// The always-visible subset of a result
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ResultPreview {
    pub recommended_formation: Formation,
    pub formation_changed: bool,
    pub style_of_play: StyleOfPlay,
}

impl CalculationResult {
    pub fn preview(&self) -> ResultPreview {
        ResultPreview {
            recommended_formation: self.recommended_formation,
            formation_changed: self.formation_changed,
            style_of_play: self.style_of_play,
        }
    }

    /// Sum of win, draw and loss; may differ from 100
    pub fn probability_total(&self) -> u16 {
        u16::from(self.win_probability) + u16::from(self.draw_probability) + u16::from(self.loss_probability)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TacticsCalculator {
    tuning: EngineTuning,
}

impl TacticsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with alternative constants; the tuning is validated first
    pub fn with_tuning(tuning: EngineTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self { tuning })
    }

    pub fn tuning(&self) -> &EngineTuning {
        &self.tuning
    }

    pub fn evaluate(
        &self,
        my_team: &TeamProfile,
        opponent_team: &TeamProfile,
        context: &MatchContext,
    ) -> CalculationResult {
        let tuning = &self.tuning;
        let rating_diff = my_team.overall() - opponent_team.overall();

        // Step 1-2: priority cascades
        let style = derive_style_key(my_team, opponent_team, context);
        let decision = derive_formation(my_team, opponent_team, style);
        let formation = decision.formation;

        // Step 3: venue/stakes adjusted outcome estimate
        let adjusted_diff = adjusted_rating_diff(my_team, opponent_team, context, &tuning.probability);
        let outcome = outcome_probabilities(adjusted_diff, &tuning.probability);

        // Step 4-5
        let player_roles = build_player_roles(formation, style);
        let alternative_formations =
            build_alternatives(formation, style, rating_diff, &tuning.alternatives);

        // Step 6
        let advantages = Advantages::new(my_team, opponent_team);

        debug!(
            style = style.key(),
            formation = %formation,
            changed = decision.changed,
            rating_diff,
            adjusted_diff,
            win = outcome.win,
            draw = outcome.draw,
            loss = outcome.loss,
            "evaluation complete"
        );

        CalculationResult {
            recommended_formation: formation,
            formation_changed: decision.changed,
            style_of_play: style,
            win_probability: outcome.win,
            draw_probability: outcome.draw,
            loss_probability: outcome.loss,
            tactical_brief: tactical_brief(style, formation),
            detailed_tactics: detailed_tactics(context, advantages.defense, outcome.win),
            player_roles,
            alternative_formations,
            pressure_index: pressure_index(advantages.attack, context.use_high_press, &tuning.indices),
            transition_score: transition_score(rating_diff, &tuning.indices),
            defensive_shape: defensive_shape(advantages.defense),
            attacking_width: attacking_width(style),
            key_matchup: key_matchup(my_team, opponent_team),
            confidence_level: confidence_level(adjusted_diff, &tuning.indices),
        }
    }
}

/// Evaluate with the canonical tuning
pub fn evaluate(my_team: &TeamProfile, opponent_team: &TeamProfile, context: &MatchContext) -> CalculationResult {
    TacticsCalculator::default().evaluate(my_team, opponent_team, context)
}

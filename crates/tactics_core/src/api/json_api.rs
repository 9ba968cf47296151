//! JSON API for tactical evaluation
//!
//! String-in, string-out entry points for embedding the calculator behind a
//! web handler or calling it from the CLI. Requests are validated here (schema
//! version, rating ranges) since the calculator itself accepts any input.

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use super::tuning_env::shared_calculator;
use crate::engine::{CalculationResult, ResultPreview, TacticsCalculator};
use crate::error::{Result, TacticsError};
use crate::models::{MatchContext, TeamProfile};
use crate::tactics::formation_meta::{compute_opp_preset, CounterPreset, Strength};
use crate::tactics::style_of_play::StyleProfile;

/// Request/response schema version this build understands
pub const SCHEMA_VERSION: u8 = 1;

/// How much of the result the caller may see
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResultView {
    #[default]
    Full,
    /// Recommended formation and style of play only
    Preview,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct EvaluationRequest {
    pub schema_version: u8,
    #[validate]
    pub my_team: TeamProfile,
    #[validate]
    pub opponent_team: TeamProfile,
    #[serde(default)]
    pub context: MatchContext,
    #[serde(default)]
    pub view: ResultView,
}

impl EvaluationRequest {
    pub fn new(my_team: TeamProfile, opponent_team: TeamProfile, context: MatchContext) -> Self {
        Self { schema_version: SCHEMA_VERSION, my_team, opponent_team, context, view: ResultView::Full }
    }

    pub fn with_view(mut self, view: ResultView) -> Self {
        self.view = view;
        self
    }

    fn check(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(TacticsError::UnsupportedSchemaVersion {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        self.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum EvaluationBody {
    Full { result: CalculationResult },
    Preview { preview: ResultPreview },
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct EvaluationResponse {
    pub schema_version: u8,
    pub style_profile: StyleProfile,
    #[serde(flatten)]
    pub body: EvaluationBody,
}

impl EvaluationResponse {
    /// The preview is available whichever view was requested
    pub fn preview(&self) -> ResultPreview {
        match &self.body {
            EvaluationBody::Full { result } => result.preview(),
            EvaluationBody::Preview { preview } => *preview,
        }
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match &self.body {
            EvaluationBody::Full { result } => Some(result),
            EvaluationBody::Preview { .. } => None,
        }
    }
}

/// Validate and evaluate one typed request
pub fn evaluate_request(
    calculator: &TacticsCalculator,
    request: &EvaluationRequest,
) -> Result<EvaluationResponse> {
    if let Err(e) = request.check() {
        warn!(code = e.code(), error = %e, "evaluation request rejected");
        return Err(e);
    }

    let result = calculator.evaluate(&request.my_team, &request.opponent_team, &request.context);
    let style_profile = *result.style_of_play.profile();
    let body = match request.view {
        ResultView::Full => EvaluationBody::Full { result },
        ResultView::Preview => EvaluationBody::Preview { preview: result.preview() },
    };

    Ok(EvaluationResponse { schema_version: SCHEMA_VERSION, style_profile, body })
}

/// Main entry point - evaluates a JSON request with the tuning from the
/// environment, loaded once per process
pub fn evaluate_json(request_json: &str) -> Result<String> {
    evaluate_json_with(shared_calculator()?, request_json)
}

pub fn evaluate_json_with(calculator: &TacticsCalculator, request_json: &str) -> Result<String> {
    let request: EvaluationRequest = serde_json::from_str(request_json)?;
    info!(
        my_formation = %request.my_team.formation,
        opponent_formation = %request.opponent_team.formation,
        view = ?request.view,
        "evaluate_json"
    );

    let response = evaluate_request(calculator, &request)?;
    let preview = response.preview();
    info!(
        formation = %preview.recommended_formation,
        style = preview.style_of_play.key(),
        "evaluate_json done"
    );
    Ok(serde_json::to_string(&response)?)
}

/// Evaluates a JSON array of requests in parallel.
///
/// Responses come back in request order. The first invalid request fails
/// the whole batch.
pub fn evaluate_batch_json(requests_json: &str) -> Result<String> {
    evaluate_batch_json_with(shared_calculator()?, requests_json)
}

pub fn evaluate_batch_json_with(calculator: &TacticsCalculator, requests_json: &str) -> Result<String> {
    let requests: Vec<EvaluationRequest> = serde_json::from_str(requests_json)?;
    info!(count = requests.len(), "evaluate_batch_json");

    let responses = requests
        .par_iter()
        .map(|request| evaluate_request(calculator, request))
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::to_string(&responses)?)
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PresetRequest {
    pub opponent_formation: String,
    pub strength: Strength,
}

pub fn counter_preset(request: &PresetRequest) -> Result<CounterPreset> {
    compute_opp_preset(&request.opponent_formation, request.strength)
}

pub fn counter_preset_json(request_json: &str) -> Result<String> {
    let request: PresetRequest = serde_json::from_str(request_json)?;
    info!(opponent = %request.opponent_formation, strength = %request.strength, "counter_preset_json");
    let preset = counter_preset(&request)?;
    Ok(serde_json::to_string(&preset)?)
}

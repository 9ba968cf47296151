//! Tactics CLI Library
//!
//! Request loading, calculator construction and the command bodies behind
//! `tactics-cli`. Every command returns its output as a string so main only
//! has to print it.

pub mod render;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::io::Read;
use std::path::Path;

use tactics_core::api::{
    self, evaluate_request, request_schema_json, response_schema_json, EvaluationRequest,
    EvaluationResponse, ResultView,
};
use tactics_core::engine::EngineTuning;
use tactics_core::models::{Competition, MatchContext, TeamProfile, FORMATIONS};
use tactics_core::tactics::formation_meta::{compute_opp_preset, Strength, FORMATION_META};
use tactics_core::tactics::style_of_play::STYLES;
use tactics_core::TacticsCalculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    Request,
    Response,
}

/// Read a request body from a file, or from stdin when `source` is `-`
pub fn read_request(source: &str) -> Result<String> {
    if source == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }

    fs::read_to_string(source).with_context(|| format!("Failed to read request file: {source}"))
}

/// Calculator from `--tuning`, falling back to `TACTICS_TUNING_PATH`
pub fn load_calculator(tuning: Option<&Path>) -> Result<TacticsCalculator> {
    let tuning = match tuning {
        Some(path) => EngineTuning::load(path)
            .with_context(|| format!("Failed to load tuning: {}", path.display()))?,
        None => api::tuning_from_env().context("Failed to load tuning from environment")?,
    };
    tracing::debug!(name = %tuning.name, hash = %tuning.config_hash(), "engine tuning ready");

    Ok(TacticsCalculator::with_tuning(tuning)?)
}

/// Team and context flags of the `quick` command, already parsed
#[derive(Debug, Clone)]
pub struct QuickInput {
    pub my_team: TeamProfile,
    pub opponent_team: TeamProfile,
    pub context: MatchContext,
    pub view: ResultView,
}

impl QuickInput {
    pub fn into_request(self) -> EvaluationRequest {
        EvaluationRequest::new(self.my_team, self.opponent_team, self.context).with_view(self.view)
    }
}

pub fn run_evaluate(calculator: &TacticsCalculator, request_json: &str, format: OutputFormat) -> Result<String> {
    let request: EvaluationRequest =
        serde_json::from_str(request_json).context("Request is not a valid evaluation request")?;
    let response = evaluate_request(calculator, &request)?;
    render_response(&response, format)
}

pub fn run_quick(calculator: &TacticsCalculator, input: QuickInput, format: OutputFormat) -> Result<String> {
    let response = evaluate_request(calculator, &input.into_request())?;
    render_response(&response, format)
}

fn render_response(response: &EvaluationResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text => Ok(render::response(response)),
    }
}

pub fn run_preset(opponent: &str, strength: Strength, format: OutputFormat) -> Result<String> {
    let preset = compute_opp_preset(opponent, strength)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&preset)?),
        OutputFormat::Text => Ok(render::preset(&preset)),
    }
}

pub fn run_styles(format: OutputFormat) -> Result<String> {
    let profiles: Vec<_> = STYLES.iter().map(|s| s.profile()).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&profiles)?),
        OutputFormat::Text => Ok(render::styles(&profiles)),
    }
}

pub fn run_formations(meta: bool, format: OutputFormat) -> Result<String> {
    match (meta, format) {
        (false, OutputFormat::Json) => Ok(serde_json::to_string_pretty(&FORMATIONS)?),
        (false, OutputFormat::Text) => Ok(render::formations(&FORMATIONS)),
        (true, OutputFormat::Json) => Ok(serde_json::to_string_pretty(&FORMATION_META)?),
        (true, OutputFormat::Text) => Ok(render::formation_meta(&FORMATION_META)),
    }
}

pub fn run_schema(kind: SchemaKind) -> Result<String> {
    let schema = match kind {
        SchemaKind::Request => request_schema_json()?,
        SchemaKind::Response => response_schema_json()?,
    };
    Ok(schema)
}

/// Default match context for `quick`
pub fn default_context(is_home: bool, competition: Competition) -> MatchContext {
    if is_home {
        MatchContext::home(competition)
    } else {
        MatchContext::away(competition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tactics_core::models::Formation;
    use tempfile::NamedTempFile;

    const REQUEST: &str = r#"{
        "schema_version": 1,
        "my_team": {"formation": "4-3-3", "overall_rating": 60, "attack_rating": 62, "midfield_rating": 60, "defense_rating": 58},
        "opponent_team": {"formation": "4-4-2", "overall_rating": 75, "attack_rating": 78, "midfield_rating": 74, "defense_rating": 72},
        "context": {"is_home": true, "competition": "League Match"}
    }"#;

    #[test]
    fn test_read_request_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(REQUEST.as_bytes()).unwrap();
        let body = read_request(file.path().to_str().unwrap()).unwrap();
        assert!(body.contains("schema_version"));
    }

    #[test]
    fn test_read_request_missing_file() {
        let err = read_request("/nonexistent/request.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read request file"));
    }

    #[test]
    fn test_evaluate_text_and_json() {
        let calculator = TacticsCalculator::new();

        let text = run_evaluate(&calculator, REQUEST, OutputFormat::Text).unwrap();
        assert!(text.contains("Counter Attack"));
        assert!(text.contains("5-3-2"));

        let json = run_evaluate(&calculator, REQUEST, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["result"]["recommended_formation"], "5-3-2");
        assert_eq!(v["result"]["formation_changed"], true);
    }

    #[test]
    fn test_quick_preview() {
        let input = QuickInput {
            my_team: TeamProfile::new(Formation::FourThreeThree, 80, 85, 78, 75),
            opponent_team: TeamProfile::new(Formation::FourFourTwo, 70, 68, 65, 66),
            context: default_context(true, Competition::League).with_high_press(true),
            view: ResultView::Preview,
        };
        let out = run_quick(&TacticsCalculator::new(), input, OutputFormat::Text).unwrap();
        assert!(out.contains("Shoot on Sight"));
        assert!(!out.contains("Win"));
    }

    #[test]
    fn test_quick_rejects_out_of_range() {
        let input = QuickInput {
            my_team: TeamProfile::new(Formation::FourThreeThree, 20, 85, 78, 75),
            opponent_team: TeamProfile::default(),
            context: MatchContext::default(),
            view: ResultView::Full,
        };
        assert!(run_quick(&TacticsCalculator::new(), input, OutputFormat::Json).is_err());
    }

    #[test]
    fn test_load_calculator_from_tuning_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"name": "flat", "probability": {"home_bonus": 0}}"#).unwrap();
        let calculator = load_calculator(Some(file.path())).unwrap();
        assert_eq!(calculator.tuning().name, "flat");
        assert_eq!(calculator.tuning().probability.home_bonus, 0);
        assert_eq!(calculator.tuning().probability.away_bonus, -4);
    }

    #[test]
    fn test_preset_and_listings() {
        let out = run_preset("433A", Strength::Equal, OutputFormat::Text).unwrap();
        assert!(out.contains("532"));
        assert!(run_preset("999", Strength::Equal, OutputFormat::Text).is_err());

        assert_eq!(run_styles(OutputFormat::Text).unwrap().lines().count(), 5);
        assert_eq!(run_formations(false, OutputFormat::Text).unwrap().lines().count(), 15);
        assert_eq!(run_formations(true, OutputFormat::Text).unwrap().lines().count(), 19);

        let schema: serde_json::Value = serde_json::from_str(&run_schema(SchemaKind::Request).unwrap()).unwrap();
        assert_eq!(schema["title"], "EvaluationRequest");
    }
}

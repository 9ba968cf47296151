//! # Engine Tuning
//!
//! Numeric constants of the probability model, the alternative-formation
//! scorer and the derived indices, grouped so a revision with different
//! constants can be loaded from a file instead of patched in code.
//!
//! ```rust,ignore
//! let tuning = EngineTuning::load("tuning/cup_revision.yaml")?;
//! let calculator = TacticsCalculator::with_tuning(tuning)?;
//! ```
//!
//! The rule-cascade thresholds are not part of the tuning; they define the
//! behaviour rather than scale it. `EngineTuning::default()` is the canonical
//! revision.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

// ========== Bounds ==========

/// Inclusive clamp range for a percentage-like score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp then round half away from zero. Bounds are validated to lie in
    /// `[0, 100]`, so the result always fits a `u8`.
    pub fn clamp_round(&self, value: f64) -> u8 {
        value.clamp(self.min, self.max).round() as u8
    }

    fn validate(&self, field: &str) -> Result<(), TuningError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(TuningError::Validation(format!("{field} bounds must be finite")));
        }
        if self.min > self.max {
            return Err(TuningError::Validation(format!(
                "{field} min must not exceed max, got {}..{}",
                self.min, self.max
            )));
        }
        if self.min < 0.0 || self.max > 100.0 {
            return Err(TuningError::Validation(format!(
                "{field} bounds must lie in 0-100, got {}..{}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

// ========== Probability Parameters ==========

/// Win/draw/loss model constants
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProbabilityParams {
    /// Rating swing for playing at home (default: +6)
    pub home_bonus: i32,
    /// Rating swing for playing away (default: -4)
    pub away_bonus: i32,
    /// Extra swing in Champions League and Playoff Final (default: +2)
    pub high_stakes_bonus: i32,
    pub win_base: f64,
    pub win_slope: f64,
    pub win_bounds: Bounds,
    pub loss_base: f64,
    pub loss_slope: f64,
    pub loss_bounds: Bounds,
    /// Draw is what remains of this total after win and loss
    pub draw_total: f64,
    pub draw_bounds: Bounds,
}

impl Default for ProbabilityParams {
    fn default() -> Self {
        Self {
            home_bonus: 6,
            away_bonus: -4,
            high_stakes_bonus: 2,
            win_base: 38.0,
            win_slope: 1.8,
            win_bounds: Bounds::new(12.0, 88.0),
            loss_base: 38.0,
            loss_slope: 1.4,
            loss_bounds: Bounds::new(8.0, 75.0),
            draw_total: 100.0,
            draw_bounds: Bounds::new(8.0, 45.0),
        }
    }
}

// ========== Alternative Formation Parameters ==========

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AlternativeParams {
    pub base: f64,
    pub slope: f64,
    pub bounds: Bounds,
    /// How many alternatives to return at most (default: 4)
    pub max_alternatives: usize,
}

impl Default for AlternativeParams {
    fn default() -> Self {
        Self { base: 50.0, slope: 1.2, bounds: Bounds::new(22.0, 82.0), max_alternatives: 4 }
    }
}

// ========== Index Parameters ==========

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct IndexParams {
    pub pressure_base: f64,
    pub pressure_slope: f64,
    pub high_press_bonus: f64,
    pub pressure_bounds: Bounds,
    pub transition_base: f64,
    pub transition_slope: f64,
    pub transition_bounds: Bounds,
    /// |adjusted diff| at or above this is High confidence (default: 10)
    pub confidence_high: i32,
    /// |adjusted diff| at or above this is Medium confidence (default: 5)
    pub confidence_medium: i32,
}

impl Default for IndexParams {
    fn default() -> Self {
        Self {
            pressure_base: 50.0,
            pressure_slope: 2.5,
            high_press_bonus: 12.0,
            pressure_bounds: Bounds::new(20.0, 99.0),
            transition_base: 50.0,
            transition_slope: 1.5,
            transition_bounds: Bounds::new(20.0, 99.0),
            confidence_high: 10,
            confidence_medium: 5,
        }
    }
}

// ========== EngineTuning ==========

/// Largest venue or competition swing a tuning may apply, in rating points
pub const MAX_RATING_BONUS: i32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EngineTuning {
    /// Identifier of the revision these constants come from
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub probability: ProbabilityParams,
    #[serde(default)]
    pub alternatives: AlternativeParams,
    #[serde(default)]
    pub indices: IndexParams,
}

fn default_name() -> String {
    "canonical".to_string()
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            name: default_name(),
            probability: ProbabilityParams::default(),
            alternatives: AlternativeParams::default(),
            indices: IndexParams::default(),
        }
    }
}

impl EngineTuning {
    /// Load from a YAML (`.yaml`/`.yml`) or JSON file and validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: EngineTuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, TuningError> {
        let tuning: EngineTuning =
            serde_yaml::from_str(yaml).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.probability;
        for (field, value) in [
            ("probability.home_bonus", p.home_bonus),
            ("probability.away_bonus", p.away_bonus),
            ("probability.high_stakes_bonus", p.high_stakes_bonus),
        ] {
            if value.unsigned_abs() > MAX_RATING_BONUS.unsigned_abs() {
                return Err(TuningError::Validation(format!(
                    "{field} must be within ±{MAX_RATING_BONUS}, got {value}"
                )));
            }
        }
        p.win_bounds.validate("probability.win_bounds")?;
        p.loss_bounds.validate("probability.loss_bounds")?;
        p.draw_bounds.validate("probability.draw_bounds")?;
        for (field, value) in [
            ("probability.win_base", p.win_base),
            ("probability.win_slope", p.win_slope),
            ("probability.loss_base", p.loss_base),
            ("probability.loss_slope", p.loss_slope),
            ("probability.draw_total", p.draw_total),
        ] {
            if !value.is_finite() {
                return Err(TuningError::Validation(format!("{field} must be finite")));
            }
        }

        let a = &self.alternatives;
        a.bounds.validate("alternatives.bounds")?;
        if !(a.base.is_finite() && a.slope.is_finite()) {
            return Err(TuningError::Validation("alternatives base/slope must be finite".into()));
        }

        let i = &self.indices;
        i.pressure_bounds.validate("indices.pressure_bounds")?;
        i.transition_bounds.validate("indices.transition_bounds")?;
        for (field, value) in [
            ("indices.pressure_base", i.pressure_base),
            ("indices.pressure_slope", i.pressure_slope),
            ("indices.high_press_bonus", i.high_press_bonus),
            ("indices.transition_base", i.transition_base),
            ("indices.transition_slope", i.transition_slope),
        ] {
            if !value.is_finite() {
                return Err(TuningError::Validation(format!("{field} must be finite")));
            }
        }
        if i.confidence_medium < 0 || i.confidence_medium > i.confidence_high {
            return Err(TuningError::Validation(format!(
                "confidence thresholds must satisfy 0 <= medium <= high, got medium={} high={}",
                i.confidence_medium, i.confidence_high
            )));
        }

        Ok(())
    }

    /// Hash of all parameters, for determinism checks across runs
    pub fn config_hash(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        // f64 is not Hash; the canonical JSON text is stable for a given value
        serde_json::to_string(self).unwrap_or_default().hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

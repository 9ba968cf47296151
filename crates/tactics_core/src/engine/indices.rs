//! Derived indices and labels shown alongside the recommendation

use schemars::JsonSchema;
use serde::Serialize;

use crate::engine::tuning::IndexParams;
use crate::models::TeamProfile;
use crate::tactics::style_of_play::StyleOfPlay;

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum DefensiveShape {
    #[serde(rename = "High Defensive Line")]
    HighLine,
    #[serde(rename = "Mid-Block")]
    MidBlock,
    #[serde(rename = "Deep Defensive Block")]
    DeepBlock,
}

impl DefensiveShape {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighLine => "High Defensive Line",
            Self::MidBlock => "Mid-Block",
            Self::DeepBlock => "Deep Defensive Block",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum AttackingWidth {
    #[serde(rename = "Maximum Width")]
    Maximum,
    #[serde(rename = "Narrow / Direct")]
    NarrowDirect,
    #[serde(rename = "Standard Width")]
    Standard,
}

impl AttackingWidth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Maximum => "Maximum Width",
            Self::NarrowDirect => "Narrow / Direct",
            Self::Standard => "Standard Width",
        }
    }
}

/// Head-to-head line comparisons between the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advantages {
    /// my attack - opponent defense
    pub attack: i32,
    /// my defense - opponent attack
    pub defense: i32,
}

impl Advantages {
    pub fn new(my: &TeamProfile, opp: &TeamProfile) -> Self {
        Self { attack: my.attack() - opp.defense(), defense: my.defense() - opp.attack() }
    }
}

pub fn pressure_index(attack_advantage: i32, high_press: bool, params: &IndexParams) -> u8 {
    let bonus = if high_press { params.high_press_bonus } else { 0.0 };
    params
        .pressure_bounds
        .clamp_round(params.pressure_base + f64::from(attack_advantage) * params.pressure_slope + bonus)
}

/// Transition score from the plain overall difference (no venue adjustment)
pub fn transition_score(rating_diff: i32, params: &IndexParams) -> u8 {
    params
        .transition_bounds
        .clamp_round(params.transition_base + f64::from(rating_diff) * params.transition_slope)
}

/// Confidence from the venue- and stakes-adjusted difference
pub fn confidence_level(adjusted_diff: i32, params: &IndexParams) -> ConfidenceLevel {
    let magnitude = adjusted_diff.saturating_abs();
    if magnitude >= params.confidence_high {
        ConfidenceLevel::High
    } else if magnitude >= params.confidence_medium {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

pub fn defensive_shape(defense_advantage: i32) -> DefensiveShape {
    if defense_advantage >= 8 {
        DefensiveShape::HighLine
    } else if defense_advantage >= 2 {
        DefensiveShape::MidBlock
    } else {
        DefensiveShape::DeepBlock
    }
}

pub fn attacking_width(style: StyleOfPlay) -> AttackingWidth {
    match style {
        StyleOfPlay::Wing => AttackingWidth::Maximum,
        StyleOfPlay::Counter => AttackingWidth::NarrowDirect,
        _ => AttackingWidth::Standard,
    }
}

pub fn key_matchup(my: &TeamProfile, opp: &TeamProfile) -> String {
    let battleground = if my.attack() >= opp.defense() {
        "attack vs their defence"
    } else {
        "midfield vs their midfield"
    };
    format!("Your {battleground} is the decisive battleground. Win this duel to control the game.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Formation;

    fn params() -> IndexParams {
        IndexParams::default()
    }

    #[test]
    fn test_pressure_index() {
        assert_eq!(pressure_index(0, false, &params()), 50);
        assert_eq!(pressure_index(0, true, &params()), 62);
        assert_eq!(pressure_index(19, true, &params()), 99);
        assert_eq!(pressure_index(-3, false, &params()), 43); // 42.5 rounds up
        assert_eq!(pressure_index(-40, false, &params()), 20);
    }

    #[test]
    fn test_transition_score() {
        assert_eq!(transition_score(10, &params()), 65);
        assert_eq!(transition_score(-15, &params()), 28);
        assert_eq!(transition_score(40, &params()), 99);
        assert_eq!(transition_score(-40, &params()), 20);
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(confidence_level(10, &params()), ConfidenceLevel::High);
        assert_eq!(confidence_level(-10, &params()), ConfidenceLevel::High);
        assert_eq!(confidence_level(9, &params()), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(-5, &params()), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(4, &params()), ConfidenceLevel::Low);
    }

    #[test]
    fn test_defensive_shape() {
        assert_eq!(defensive_shape(8), DefensiveShape::HighLine);
        assert_eq!(defensive_shape(7), DefensiveShape::MidBlock);
        assert_eq!(defensive_shape(2), DefensiveShape::MidBlock);
        assert_eq!(defensive_shape(1), DefensiveShape::DeepBlock);
    }

    #[test]
    fn test_attacking_width() {
        assert_eq!(attacking_width(StyleOfPlay::Wing), AttackingWidth::Maximum);
        assert_eq!(attacking_width(StyleOfPlay::Counter), AttackingWidth::NarrowDirect);
        assert_eq!(attacking_width(StyleOfPlay::LongBall), AttackingWidth::Standard);
    }

    #[test]
    fn test_key_matchup() {
        let my = TeamProfile::new(Formation::FourFourTwo, 70, 70, 70, 70);
        let opp = TeamProfile::new(Formation::FourFourTwo, 70, 70, 70, 70);
        assert!(key_matchup(&my, &opp).contains("attack vs their defence"));

        let opp = TeamProfile::new(Formation::FourFourTwo, 70, 70, 70, 71);
        assert!(key_matchup(&my, &opp).contains("midfield vs their midfield"));
    }

    #[test]
    fn test_labels_match_serde() {
        for shape in [DefensiveShape::HighLine, DefensiveShape::MidBlock, DefensiveShape::DeepBlock] {
            assert_eq!(serde_json::to_string(&shape).unwrap(), format!("\"{}\"", shape.label()));
        }
    }
}

//! Alternative formations
//!
//! Ranks a fixed pool of six formations against the recommended one. Every
//! candidate starts from the same linear score on the rating difference and
//! picks up a bonus when it suits the chosen style of play.

use schemars::JsonSchema;
use serde::Serialize;

use crate::engine::tuning::AlternativeParams;
use crate::models::Formation;
use crate::tactics::style_of_play::StyleOfPlay;

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum FormationType {
    Attacking,
    Balanced,
    Defensive,
    Hybrid,
    Compact,
    Classic,
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct AlternativeFormation {
    pub formation: Formation,
    pub formation_type: FormationType,
    pub win_probability: u8,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
}

struct Candidate {
    formation: Formation,
    formation_type: FormationType,
    strengths: &'static str,
    weaknesses: &'static str,
}

/// Candidate pool; the order is the tie-break order
const POOL: [Candidate; 6] = [
    Candidate {
        formation: Formation::FourThreeThree,
        formation_type: FormationType::Attacking,
        strengths: "Wide overloads, pressing high, quick transitions",
        weaknesses: "Exposed if losing midfield battle",
    },
    Candidate {
        formation: Formation::FourTwoThreeOne,
        formation_type: FormationType::Balanced,
        strengths: "Double pivot protection, creative number 10",
        weaknesses: "Lone striker can be isolated",
    },
    Candidate {
        formation: Formation::FiveThreeTwo,
        formation_type: FormationType::Defensive,
        strengths: "Three centre-backs, wing-backs track runners",
        weaknesses: "Limited attacking width without the ball",
    },
    Candidate {
        formation: Formation::ThreeFiveTwo,
        formation_type: FormationType::Hybrid,
        strengths: "Midfield dominance, two strikers, wing-backs",
        weaknesses: "Exposed wide if wing-backs caught upfield",
    },
    Candidate {
        formation: Formation::FourFiveOne,
        formation_type: FormationType::Compact,
        strengths: "Midfield overload, solid defensive block",
        weaknesses: "Lone striker isolated, limited on counter",
    },
    Candidate {
        formation: Formation::FourFourTwo,
        formation_type: FormationType::Classic,
        strengths: "Pressing in pairs, wide midfield cover",
        weaknesses: "Can lose midfield to three-man units",
    },
];

/// Bonus a candidate earns for suiting the style of play
pub fn style_affinity(style: StyleOfPlay, formation: Formation) -> f64 {
    use Formation::*;

    match (style, formation) {
        (StyleOfPlay::Counter, FiveThreeTwo | FourFiveOne) => 8.0,
        (StyleOfPlay::Wing, FourThreeThree) => 10.0,
        (StyleOfPlay::Passing, FourTwoThreeOne | ThreeFiveTwo) => 7.0,
        (StyleOfPlay::Shoot, FourThreeThree) => 10.0,
        (StyleOfPlay::LongBall, FourFourTwo) => 8.0,
        _ => 0.0,
    }
}

/// Rank the pool, excluding `recommended`, best first.
///
/// `rating_diff` is the plain overall difference. The sort is stable, so
/// equal scores keep pool order.
pub fn build_alternatives(
    recommended: Formation,
    style: StyleOfPlay,
    rating_diff: i32,
    params: &AlternativeParams,
) -> Vec<AlternativeFormation> {
    let base = params.base + f64::from(rating_diff) * params.slope;

    let mut alternatives: Vec<AlternativeFormation> = POOL
        .iter()
        .filter(|c| c.formation != recommended)
        .map(|c| AlternativeFormation {
            formation: c.formation,
            formation_type: c.formation_type,
            win_probability: params.bounds.clamp_round(base + style_affinity(style, c.formation)),
            strengths: c.strengths,
            weaknesses: c.weaknesses,
        })
        .collect();

    alternatives.sort_by(|a, b| b.win_probability.cmp(&a.win_probability));
    alternatives.truncate(params.max_alternatives);
    alternatives
}

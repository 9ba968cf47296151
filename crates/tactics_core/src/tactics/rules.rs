//! Priority Rule Cascades
//!
//! Style-of-play classification and formation recommendation are both
//! strict priority cascades: an ordered table of `(condition, result)` rows
//! evaluated top to bottom, first match wins. Row order is part of the
//! behaviour.

use tracing::debug;

use crate::models::{Formation, MatchContext, TeamProfile};
use crate::tactics::style_of_play::StyleOfPlay;

// ============================================================================
// Style of play
// ============================================================================

/// Derived comparisons the style cascade reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSignals {
    /// my overall - opponent overall (no venue or competition adjustment)
    pub rating_diff: i32,
    /// my attack - my defense
    pub attack_dominance: i32,
    /// my midfield - opponent midfield
    pub mid_dominance: i32,
    pub my_attack: i32,
    pub is_home: bool,
    pub high_press: bool,
    pub long_ball: bool,
    pub wingers: bool,
}

impl StyleSignals {
    pub fn new(my: &TeamProfile, opp: &TeamProfile, ctx: &MatchContext) -> Self {
        Self {
            rating_diff: my.overall() - opp.overall(),
            attack_dominance: my.attack() - my.defense(),
            mid_dominance: my.midfield() - opp.midfield(),
            my_attack: my.attack(),
            is_home: ctx.is_home,
            high_press: ctx.use_high_press,
            long_ball: ctx.use_long_ball,
            wingers: ctx.prioritize_wingers,
        }
    }
}

/// One row of the style cascade
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub name: &'static str,
    pub condition: fn(&StyleSignals) -> bool,
    pub style: StyleOfPlay,
}

fn long_ball_requested(s: &StyleSignals) -> bool {
    s.long_ball
}

fn heavy_underdog_without_press(s: &StyleSignals) -> bool {
    s.rating_diff < -7 && !s.high_press
}

fn pressing_with_attack_edge(s: &StyleSignals) -> bool {
    s.high_press && s.attack_dominance >= 0
}

fn wingers_requested(s: &StyleSignals) -> bool {
    s.wingers
}

fn attack_heavy_squad(s: &StyleSignals) -> bool {
    s.attack_dominance > 8
}

fn midfield_control(s: &StyleSignals) -> bool {
    s.mid_dominance >= 5
}

fn elite_attack_favourite(s: &StyleSignals) -> bool {
    s.my_attack >= 82 && s.rating_diff > 0
}

fn away_underdog(s: &StyleSignals) -> bool {
    s.rating_diff < -4 && !s.is_home
}

pub const STYLE_RULES: [StyleRule; 8] = [
    StyleRule { name: "long_ball_requested", condition: long_ball_requested, style: StyleOfPlay::LongBall },
    StyleRule { name: "heavy_underdog_without_press", condition: heavy_underdog_without_press, style: StyleOfPlay::Counter },
    StyleRule { name: "pressing_with_attack_edge", condition: pressing_with_attack_edge, style: StyleOfPlay::Shoot },
    StyleRule { name: "wingers_requested", condition: wingers_requested, style: StyleOfPlay::Wing },
    StyleRule { name: "attack_heavy_squad", condition: attack_heavy_squad, style: StyleOfPlay::Shoot },
    StyleRule { name: "midfield_control", condition: midfield_control, style: StyleOfPlay::Passing },
    StyleRule { name: "elite_attack_favourite", condition: elite_attack_favourite, style: StyleOfPlay::Wing },
    StyleRule { name: "away_underdog", condition: away_underdog, style: StyleOfPlay::Counter },
];

/// Style used when no row of the cascade matches
pub const DEFAULT_STYLE: StyleOfPlay = StyleOfPlay::Passing;

/// First style rule whose condition holds, if any
pub fn match_style_rule(signals: &StyleSignals) -> Option<&'static StyleRule> {
    STYLE_RULES.iter().find(|rule| (rule.condition)(signals))
}

pub fn derive_style_key(my: &TeamProfile, opp: &TeamProfile, ctx: &MatchContext) -> StyleOfPlay {
    let signals = StyleSignals::new(my, opp, ctx);
    match match_style_rule(&signals) {
        Some(rule) => {
            debug!(rule = rule.name, style = rule.style.key(), "style rule matched");
            rule.style
        }
        None => {
            debug!(style = DEFAULT_STYLE.key(), "no style rule matched, using default");
            DEFAULT_STYLE
        }
    }
}

// ============================================================================
// Formation recommendation
// ============================================================================

/// Formations already compact enough that the "outgunned" override skips them
pub const DEFENSIVE_SET: [Formation; 4] = [
    Formation::FourFiveOne,
    Formation::FiveThreeTwo,
    Formation::FiveFourOne,
    Formation::ThreeFiveTwo,
];

/// Formations that already provide natural width for wing play
pub const WIDE_SET: [Formation; 3] =
    [Formation::FourThreeThree, Formation::ThreeFourThree, Formation::FourTwoThreeOne];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationSignals {
    pub my_formation: Formation,
    pub opp_attack: i32,
    pub rating_diff: i32,
    pub style: StyleOfPlay,
}

/// One row of the formation override cascade
#[derive(Debug, Clone, Copy)]
pub struct FormationOverride {
    pub name: &'static str,
    pub condition: fn(&FormationSignals) -> bool,
    pub formation: Formation,
}

fn outgunned_by_elite_attack(s: &FormationSignals) -> bool {
    s.opp_attack >= 82 && s.rating_diff < -5 && !DEFENSIVE_SET.contains(&s.my_formation)
}

fn counter_needs_back_five(s: &FormationSignals) -> bool {
    s.style == StyleOfPlay::Counter && !s.my_formation.is_back_five()
}

fn wing_play_needs_width(s: &FormationSignals) -> bool {
    s.style == StyleOfPlay::Wing && !WIDE_SET.contains(&s.my_formation)
}

pub const FORMATION_OVERRIDES: [FormationOverride; 3] = [
    FormationOverride {
        name: "outgunned_by_elite_attack",
        condition: outgunned_by_elite_attack,
        formation: Formation::FourFiveOne,
    },
    FormationOverride {
        name: "counter_needs_back_five",
        condition: counter_needs_back_five,
        formation: Formation::FiveThreeTwo,
    },
    FormationOverride {
        name: "wing_play_needs_width",
        condition: wing_play_needs_width,
        formation: Formation::FourThreeThree,
    },
];

/// Outcome of the formation cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationDecision {
    pub formation: Formation,
    /// Output differs from the input formation (display only)
    pub changed: bool,
    /// Name of the override that fired
    pub rule: Option<&'static str>,
}

pub fn derive_formation(my: &TeamProfile, opp: &TeamProfile, style: StyleOfPlay) -> FormationDecision {
    let signals = FormationSignals {
        my_formation: my.formation,
        opp_attack: opp.attack(),
        rating_diff: my.overall() - opp.overall(),
        style,
    };

    match FORMATION_OVERRIDES.iter().find(|o| (o.condition)(&signals)) {
        Some(o) => {
            debug!(rule = o.name, from = %my.formation, to = %o.formation, "formation override");
            FormationDecision {
                formation: o.formation,
                changed: o.formation != my.formation,
                rule: Some(o.name),
            }
        }
        None => FormationDecision { formation: my.formation, changed: false, rule: None },
    }
}

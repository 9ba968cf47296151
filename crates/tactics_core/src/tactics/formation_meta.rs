//! Formation Meta Presets
//!
//! A second, smaller calculator keyed by the 19-entry formation catalogue of
//! the quick-counter form: given only the opponent's formation code and how
//! strong they are relative to us, it looks up the opponent's metadata and
//! adjusts a counter setup (formation, style of play, sliders, marking,
//! offside trap, tackling).
//!
//! Counter formations move along a fixed defensive-to-attacking ladder. The
//! opponent's type picks the starting rung; every strength step moves one
//! rung.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TacticsError;
use crate::tactics::style_of_play::StyleOfPlay;

// ============================================================================
// Catalogue
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum MetaKind {
    Defensive,
    Balanced,
    Attacking,
}

/// Whether the wide players hug the touchline (A variants) or tuck in
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum RoleShape {
    Wide,
    Narrow,
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub struct FormationMeta {
    pub code: &'static str,
    pub shape: &'static str,
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
    /// Forwards minus defenders; negative is a deep block
    pub depth: i8,
    pub kind: MetaKind,
    pub role_shape: RoleShape,
}

const fn meta(
    code: &'static str,
    shape: &'static str,
    lines: (u8, u8, u8),
    kind: MetaKind,
    role_shape: RoleShape,
) -> FormationMeta {
    FormationMeta {
        code,
        shape,
        defenders: lines.0,
        midfielders: lines.1,
        forwards: lines.2,
        depth: lines.2 as i8 - lines.0 as i8,
        kind,
        role_shape,
    }
}

use MetaKind::{Attacking, Balanced, Defensive};
use RoleShape::{Narrow, Wide};

pub const FORMATION_META: [FormationMeta; 19] = [
    meta("532", "5-3-2", (5, 3, 2), Defensive, Narrow),
    meta("631A", "6-3-1", (6, 3, 1), Defensive, Narrow),
    meta("541A", "5-4-1", (5, 4, 1), Defensive, Wide),
    meta("541B", "5-4-1", (5, 4, 1), Defensive, Narrow),
    meta("5311", "5-3-1-1", (5, 4, 1), Defensive, Narrow),
    meta("442B", "4-4-2", (4, 4, 2), Balanced, Narrow),
    meta("442A", "4-4-2", (4, 4, 2), Balanced, Wide),
    meta("451", "4-5-1", (4, 5, 1), Defensive, Wide),
    meta("523A", "5-2-3", (5, 2, 3), Balanced, Wide),
    meta("523B", "5-2-3", (5, 2, 3), Balanced, Narrow),
    meta("4231", "4-2-3-1", (4, 5, 1), Balanced, Wide),
    meta("334A", "3-3-4", (3, 3, 4), Attacking, Wide),
    meta("334B", "3-3-4", (3, 3, 4), Attacking, Narrow),
    meta("433A", "4-3-3", (4, 3, 3), Attacking, Wide),
    meta("433B", "4-3-3", (4, 3, 3), Attacking, Narrow),
    meta("343A", "3-4-3", (3, 4, 3), Attacking, Wide),
    meta("343B", "3-4-3", (3, 4, 3), Attacking, Narrow),
    meta("3322", "3-3-2-2", (3, 5, 2), Attacking, Narrow),
    meta("424", "4-2-4", (4, 2, 4), Attacking, Wide),
];

/// Counter formations from most defensive to most attacking
pub const COUNTER_LADDER: [&str; 9] =
    ["631A", "541A", "532", "451", "4231", "442A", "433A", "343A", "424"];

pub fn lookup(code: &str) -> Result<&'static FormationMeta, TacticsError> {
    let wanted = code.trim();
    FORMATION_META
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| TacticsError::UnknownFormation(code.to_string()))
}

// ============================================================================
// Opponent strength
// ============================================================================

/// Opponent strength relative to our side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    MuchWeaker,
    Weaker,
    Equal,
    Stronger,
    MuchStronger,
}

pub const STRENGTHS: [Strength; 5] =
    [Strength::MuchWeaker, Strength::Weaker, Strength::Equal, Strength::Stronger, Strength::MuchStronger];

impl Strength {
    pub fn key(&self) -> &'static str {
        match self {
            Self::MuchWeaker => "much-weaker",
            Self::Weaker => "weaker",
            Self::Equal => "equal",
            Self::Stronger => "stronger",
            Self::MuchStronger => "much-stronger",
        }
    }

    /// Steps from parity, positive when the opponent is stronger
    pub fn offset(&self) -> i32 {
        match self {
            Self::MuchWeaker => -2,
            Self::Weaker => -1,
            Self::Equal => 0,
            Self::Stronger => 1,
            Self::MuchStronger => 2,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Strength {
    type Err = TacticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        STRENGTHS
            .iter()
            .copied()
            .find(|st| st.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TacticsError::UnknownStrength(s.to_string()))
    }
}

// ============================================================================
// Preset
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum Marking {
    Zonal,
    ManToMan,
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub enum Tackling {
    Careful,
    Normal,
    Aggressive,
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub struct CounterPreset {
    pub opponent_formation: &'static str,
    pub strength: Strength,
    pub counter_formation: &'static str,
    pub counter_shape: &'static str,
    pub style_of_play: StyleOfPlay,
    /// Slider values, 0-100
    pub pressing: u8,
    pub style: u8,
    pub tempo: u8,
    pub marking: Marking,
    pub offside_trap: bool,
    pub tackling: Tackling,
}

/// Starting rung and slider bases (pressing, style, tempo) per opponent type
fn base_for(kind: MetaKind) -> (usize, (i32, i32, i32)) {
    match kind {
        MetaKind::Attacking => (2, (35, 30, 70)),
        MetaKind::Balanced => (4, (50, 50, 50)),
        MetaKind::Defensive => (6, (65, 70, 55)),
    }
}

const PRESSING_STEP: i32 = 8;
const STYLE_STEP: i32 = 10;
const TEMPO_STEP: i32 = 5;

fn slider(base: i32, step: i32, steps: i32) -> u8 {
    (base + step * steps).clamp(0, 100) as u8
}

pub fn compute_opp_preset(opponent_code: &str, strength: Strength) -> Result<CounterPreset, TacticsError> {
    let opponent = lookup(opponent_code)?;
    let (base_rung, (pressing, style, tempo)) = base_for(opponent.kind);

    // weaker opponents push us up the ladder
    let steps = -strength.offset();
    let rung = (base_rung as i32 + steps).clamp(0, COUNTER_LADDER.len() as i32 - 1) as usize;
    let counter = lookup(COUNTER_LADDER[rung])?;

    let pressing = slider(pressing, PRESSING_STEP, steps);
    let style = slider(style, STYLE_STEP, steps);
    let tempo = slider(tempo, TEMPO_STEP, steps);

    let style_of_play = match (counter.kind, opponent.role_shape) {
        (MetaKind::Defensive, _) => StyleOfPlay::Counter,
        (MetaKind::Balanced, _) => StyleOfPlay::Passing,
        (MetaKind::Attacking, RoleShape::Narrow) => StyleOfPlay::Wing,
        (MetaKind::Attacking, RoleShape::Wide) => StyleOfPlay::Shoot,
    };

    let few_forwards = opponent.forwards <= 2;
    let marking = if few_forwards { Marking::ManToMan } else { Marking::Zonal };
    let tackling = match counter.kind {
        MetaKind::Attacking => Tackling::Careful,
        MetaKind::Balanced => Tackling::Normal,
        MetaKind::Defensive => Tackling::Aggressive,
    };

    Ok(CounterPreset {
        opponent_formation: opponent.code,
        strength,
        counter_formation: counter.code,
        counter_shape: counter.shape,
        style_of_play,
        pressing,
        style,
        tempo,
        marking,
        offside_trap: few_forwards && pressing >= 60,
        tackling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        assert_eq!(FORMATION_META.len(), 19);
        let codes: std::collections::HashSet<_> = FORMATION_META.iter().map(|m| m.code).collect();
        assert_eq!(codes.len(), 19);
        for m in FORMATION_META {
            assert_eq!(m.defenders + m.midfielders + m.forwards, 10, "{}", m.code);
            assert_eq!(m.depth, m.forwards as i8 - m.defenders as i8, "{}", m.code);
        }
    }

    #[test]
    fn test_catalogue_json_carries_depth() {
        let v = serde_json::to_value(lookup("334A").unwrap()).unwrap();
        assert_eq!(v["depth"], 1);
        assert_eq!(v["kind"], "Attacking");
    }

    #[test]
    fn test_ladder_entries_exist() {
        for code in COUNTER_LADDER {
            assert!(lookup(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("433a").unwrap().shape, "4-3-3");
        assert_eq!(lookup("631A").unwrap().depth, -5);
        assert_eq!(lookup("424").unwrap().depth, 0);
        assert!(matches!(lookup("999"), Err(TacticsError::UnknownFormation(_))));
    }

    #[test]
    fn test_strength_parse() {
        assert_eq!("much-stronger".parse::<Strength>().unwrap(), Strength::MuchStronger);
        assert_eq!(serde_json::to_string(&Strength::MuchWeaker).unwrap(), "\"much-weaker\"");
        assert!(matches!("tiny".parse::<Strength>(), Err(TacticsError::UnknownStrength(_))));
    }

    #[test]
    fn test_equal_attacking_opponent() {
        let preset = compute_opp_preset("433A", Strength::Equal).unwrap();
        assert_eq!(preset.counter_formation, "532");
        assert_eq!(preset.style_of_play, StyleOfPlay::Counter);
        assert_eq!((preset.pressing, preset.style, preset.tempo), (35, 30, 70));
        assert_eq!(preset.marking, Marking::Zonal);
        assert!(!preset.offside_trap);
        assert_eq!(preset.tackling, Tackling::Aggressive);
    }

    #[test]
    fn test_much_weaker_defensive_opponent() {
        let preset = compute_opp_preset("541B", Strength::MuchWeaker).unwrap();
        assert_eq!(preset.counter_formation, "424");
        assert_eq!(preset.style_of_play, StyleOfPlay::Wing);
        assert_eq!((preset.pressing, preset.style, preset.tempo), (81, 90, 65));
        assert_eq!(preset.marking, Marking::ManToMan);
        assert!(preset.offside_trap);
        assert_eq!(preset.tackling, Tackling::Careful);
    }

    #[test]
    fn test_much_stronger_attacking_opponent_clamps_ladder() {
        let preset = compute_opp_preset("334A", Strength::MuchStronger).unwrap();
        assert_eq!(preset.counter_formation, "631A");
        assert_eq!(preset.style_of_play, StyleOfPlay::Counter);
        assert_eq!((preset.pressing, preset.style, preset.tempo), (19, 10, 60));
    }

    #[test]
    fn test_balanced_opponent_weaker() {
        let preset = compute_opp_preset("4231", Strength::Weaker).unwrap();
        assert_eq!(preset.counter_formation, "442A");
        assert_eq!(preset.style_of_play, StyleOfPlay::Passing);
        assert_eq!(preset.tackling, Tackling::Normal);
    }

    #[test]
    fn test_total_over_catalogue() {
        for m in FORMATION_META {
            for strength in STRENGTHS {
                let preset = compute_opp_preset(m.code, strength).unwrap();
                assert!(preset.pressing <= 100 && preset.style <= 100 && preset.tempo <= 100);
                assert!(COUNTER_LADDER.contains(&preset.counter_formation));
            }
        }
    }
}

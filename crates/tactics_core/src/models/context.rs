//! Match context - venue, competition and the manager's tactical toggles

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TacticsError;

/// Competition the match is played in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
pub enum Competition {
    #[default]
    #[serde(rename = "League Match")]
    League,
    #[serde(rename = "Cup Match")]
    Cup,
    #[serde(rename = "Champions League")]
    ChampionsLeague,
    #[serde(rename = "Europa League")]
    EuropaLeague,
    #[serde(rename = "Conference League")]
    ConferenceLeague,
    #[serde(rename = "Playoff Final")]
    PlayoffFinal,
    #[serde(rename = "Friendly")]
    Friendly,
}

pub const COMPETITIONS: [Competition; 7] = [
    Competition::League,
    Competition::Cup,
    Competition::ChampionsLeague,
    Competition::EuropaLeague,
    Competition::ConferenceLeague,
    Competition::PlayoffFinal,
    Competition::Friendly,
];

impl Competition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::League => "League Match",
            Self::Cup => "Cup Match",
            Self::ChampionsLeague => "Champions League",
            Self::EuropaLeague => "Europa League",
            Self::ConferenceLeague => "Conference League",
            Self::PlayoffFinal => "Playoff Final",
            Self::Friendly => "Friendly",
        }
    }

    /// The two competitions that earn the stakes bonus
    pub fn is_high_stakes(&self) -> bool {
        matches!(self, Self::ChampionsLeague | Self::PlayoffFinal)
    }

    pub fn all() -> &'static [Competition] {
        &COMPETITIONS
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Competition {
    type Err = TacticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        COMPETITIONS
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TacticsError::UnknownCompetition(s.to_string()))
    }
}

/// Per-evaluation match context.
///
/// The four toggles are independent and may all be on at once; the style
/// cascade decides which one wins.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct MatchContext {
    pub is_home: bool,
    #[serde(default)]
    pub competition: Competition,
    #[serde(default)]
    pub use_high_press: bool,
    #[serde(default)]
    pub use_long_ball: bool,
    #[serde(default)]
    pub prioritize_wingers: bool,
    #[serde(default)]
    pub use_offside_trap: bool,
}

impl MatchContext {
    pub fn home(competition: Competition) -> Self {
        Self { is_home: true, competition, ..Default::default() }
    }

    pub fn away(competition: Competition) -> Self {
        Self { is_home: false, competition, ..Default::default() }
    }

    pub fn with_high_press(mut self, on: bool) -> Self {
        self.use_high_press = on;
        self
    }

    pub fn with_long_ball(mut self, on: bool) -> Self {
        self.use_long_ball = on;
        self
    }

    pub fn with_wingers(mut self, on: bool) -> Self {
        self.prioritize_wingers = on;
        self
    }

    pub fn with_offside_trap(mut self, on: bool) -> Self {
        self.use_offside_trap = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_stakes() {
        let high: Vec<_> = COMPETITIONS.iter().filter(|c| c.is_high_stakes()).collect();
        assert_eq!(high, vec![&Competition::ChampionsLeague, &Competition::PlayoffFinal]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("champions league".parse::<Competition>().unwrap(), Competition::ChampionsLeague);
        assert_eq!("Friendly".parse::<Competition>().unwrap(), Competition::Friendly);
        assert!("Testimonial".parse::<Competition>().is_err());
    }

    #[test]
    fn test_context_defaults_from_json() {
        let ctx: MatchContext = serde_json::from_str(r#"{"is_home": true}"#).unwrap();
        assert!(ctx.is_home);
        assert_eq!(ctx.competition, Competition::League);
        assert!(!ctx.use_high_press && !ctx.use_long_ball);
        assert!(!ctx.prioritize_wingers && !ctx.use_offside_trap);
    }

    #[test]
    fn test_builder_flags() {
        let ctx = MatchContext::away(Competition::Cup).with_high_press(true).with_wingers(true);
        assert!(!ctx.is_home);
        assert!(ctx.use_high_press && ctx.prioritize_wingers);
        assert!(!ctx.use_long_ball);
    }
}

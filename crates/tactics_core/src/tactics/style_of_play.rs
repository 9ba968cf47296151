//! Style of Play
//!
//! The five styles a calculation can recommend, together with the static
//! display metadata each one carries. The metadata is constant data keyed by
//! the enum and never changes at runtime.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TacticsError;

/// Recommended style of play
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StyleOfPlay {
    /// Press high and shoot early
    Shoot,
    /// Attack the flanks
    Wing,
    /// Patient possession
    Passing,
    /// Bypass midfield to a target striker
    #[serde(rename = "longball")]
    LongBall,
    /// Sit deep and break quickly
    Counter,
}

/// Display metadata for a style of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct StyleProfile {
    pub key: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Hex colour used by result cards
    pub colour: &'static str,
}

// ============================================================================
// Style Profiles
// ============================================================================

pub const SHOOT_ON_SIGHT: StyleProfile = StyleProfile {
    key: "shoot",
    label: "Shoot on Sight",
    short_label: "Shoot on Sight",
    icon: "🎯",
    description: "High pressing, aggressive forward runs, and shooting early whenever in range. \
                  Win the ball high up the pitch and convert immediately. Best when your attack \
                  significantly outrates the opposition defence.",
    colour: "#e63c1e",
};

pub const WING_PLAY: StyleProfile = StyleProfile {
    key: "wing",
    label: "Wing Play",
    short_label: "Wing Play",
    icon: "💨",
    description: "Exploit the flanks at pace with wide forwards and overlapping full-backs. \
                  Deliver early crosses from deep and cut-backs from the byline. Most effective \
                  when you have quick, technical wide players.",
    colour: "#0088cc",
};

pub const PASSING_GAME: StyleProfile = StyleProfile {
    key: "passing",
    label: "Passing Game",
    short_label: "Passing Game",
    icon: "🎭",
    description: "Patient possession football with quick one-twos through midfield triangles. \
                  Maintain shape, recirculate and wait for defensive gaps to open. Demands a \
                  technically gifted midfield.",
    colour: "#00a850",
};

pub const LONG_BALL: StyleProfile = StyleProfile {
    key: "longball",
    label: "Long Ball",
    short_label: "Long Ball",
    icon: "🏹",
    description: "Bypass midfield with precise long passes targeted at a dominant striker. \
                  Win second balls in the attacking half and exploit loose defensive shape. \
                  Effective against high defensive lines.",
    colour: "#cc7700",
};

pub const COUNTER_ATTACK: StyleProfile = StyleProfile {
    key: "counter",
    label: "Counter Attack",
    short_label: "Counter Attack",
    icon: "⚡",
    description: "Compact, disciplined defensive block sitting deep. When possession is won, \
                  transition instantly with direct passes behind an exposed opponent backline. \
                  Maximum effect against attacking-minded opponents.",
    colour: "#7a2dcc",
};

pub const STYLES: [StyleOfPlay; 5] = [
    StyleOfPlay::Shoot,
    StyleOfPlay::Wing,
    StyleOfPlay::Passing,
    StyleOfPlay::LongBall,
    StyleOfPlay::Counter,
];

impl StyleOfPlay {
    pub fn profile(&self) -> &'static StyleProfile {
        match self {
            Self::Shoot => &SHOOT_ON_SIGHT,
            Self::Wing => &WING_PLAY,
            Self::Passing => &PASSING_GAME,
            Self::LongBall => &LONG_BALL,
            Self::Counter => &COUNTER_ATTACK,
        }
    }

    pub fn key(&self) -> &'static str {
        self.profile().key
    }

    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Find a style by key ("longball") or label ("Long Ball")
    pub fn find(name: &str) -> Option<StyleOfPlay> {
        let name = name.trim();
        STYLES
            .iter()
            .copied()
            .find(|s| s.key() == name || s.label().eq_ignore_ascii_case(name))
    }

    pub fn all() -> &'static [StyleOfPlay] {
        &STYLES
    }
}

impl fmt::Display for StyleOfPlay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StyleOfPlay {
    type Err = TacticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s).ok_or_else(|| TacticsError::UnknownStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_count() {
        assert_eq!(STYLES.len(), 5);
    }

    #[test]
    fn test_profile_keys_match_serde() {
        for style in StyleOfPlay::all() {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.key()));
        }
    }

    #[test]
    fn test_profiles_are_static() {
        let first = StyleOfPlay::Counter.profile();
        let second = StyleOfPlay::Counter.profile();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.colour, "#7a2dcc");
    }

    #[test]
    fn test_unique_colours_and_labels() {
        let colours: std::collections::HashSet<_> = STYLES.iter().map(|s| s.profile().colour).collect();
        let labels: std::collections::HashSet<_> = STYLES.iter().map(|s| s.label()).collect();
        assert_eq!(colours.len(), 5);
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_find_by_key_or_label() {
        assert_eq!(StyleOfPlay::find("longball"), Some(StyleOfPlay::LongBall));
        assert_eq!(StyleOfPlay::find("Wing Play"), Some(StyleOfPlay::Wing));
        assert_eq!(StyleOfPlay::find("passing game"), Some(StyleOfPlay::Passing));
        assert_eq!(StyleOfPlay::find("tiki-taka"), None);
    }

    #[test]
    fn test_parse_unknown_style() {
        assert_eq!("counter".parse::<StyleOfPlay>().unwrap(), StyleOfPlay::Counter);
        let err = "tiki-taka".parse::<StyleOfPlay>().unwrap_err();
        assert!(matches!(err, TacticsError::UnknownStyle(ref s) if s == "tiki-taka"));
        assert_eq!(err.code(), "E_UNKNOWN_STYLE");
    }
}

//! Formation catalogue
//!
//! The fixed set of formations a team profile can declare. Formations are
//! serialized as their display label ("4-3-3") so JSON requests read the same
//! way a manager would write them.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TacticsError;

/// A formation from the supported catalogue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    FourFourTwo,
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "4-2-3-1")]
    FourTwoThreeOne,
    #[serde(rename = "4-5-1")]
    FourFiveOne,
    #[serde(rename = "4-1-4-1")]
    FourOneFourOne,
    #[serde(rename = "4-4-1-1")]
    FourFourOneOne,
    #[serde(rename = "4-3-2-1")]
    FourThreeTwoOne,
    #[serde(rename = "3-5-2")]
    ThreeFiveTwo,
    #[serde(rename = "3-4-3")]
    ThreeFourThree,
    #[serde(rename = "3-4-2-1")]
    ThreeFourTwoOne,
    #[serde(rename = "5-3-2")]
    FiveThreeTwo,
    #[serde(rename = "5-4-1")]
    FiveFourOne,
    #[serde(rename = "5-2-3")]
    FiveTwoThree,
    #[serde(rename = "4-2-2-2")]
    FourTwoTwoTwo,
    #[serde(rename = "4-6-0")]
    FourSixZero,
}

/// Catalogue order, as presented by the input form
pub const FORMATIONS: [Formation; 15] = [
    Formation::FourFourTwo,
    Formation::FourThreeThree,
    Formation::FourTwoThreeOne,
    Formation::FourFiveOne,
    Formation::FourOneFourOne,
    Formation::FourFourOneOne,
    Formation::FourThreeTwoOne,
    Formation::ThreeFiveTwo,
    Formation::ThreeFourThree,
    Formation::ThreeFourTwoOne,
    Formation::FiveThreeTwo,
    Formation::FiveFourOne,
    Formation::FiveTwoThree,
    Formation::FourTwoTwoTwo,
    Formation::FourSixZero,
];

impl Formation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FourFourTwo => "4-4-2",
            Self::FourThreeThree => "4-3-3",
            Self::FourTwoThreeOne => "4-2-3-1",
            Self::FourFiveOne => "4-5-1",
            Self::FourOneFourOne => "4-1-4-1",
            Self::FourFourOneOne => "4-4-1-1",
            Self::FourThreeTwoOne => "4-3-2-1",
            Self::ThreeFiveTwo => "3-5-2",
            Self::ThreeFourThree => "3-4-3",
            Self::ThreeFourTwoOne => "3-4-2-1",
            Self::FiveThreeTwo => "5-3-2",
            Self::FiveFourOne => "5-4-1",
            Self::FiveTwoThree => "5-2-3",
            Self::FourTwoTwoTwo => "4-2-2-2",
            Self::FourSixZero => "4-6-0",
        }
    }

    /// Number of players in the back line (first digit of the label)
    pub fn defenders(&self) -> u8 {
        self.label().as_bytes()[0] - b'0'
    }

    /// Formations whose label starts with "5"
    pub fn is_back_five(&self) -> bool {
        self.defenders() == 5
    }

    pub fn all() -> &'static [Formation] {
        &FORMATIONS
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Formation {
    type Err = TacticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FORMATIONS
            .iter()
            .copied()
            .find(|f| f.label() == wanted)
            .ok_or_else(|| TacticsError::UnknownFormation(s.to_string()))
    }
}

//! Team profile - one side's attributes for a single evaluation

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::formation::Formation;

/// Lowest rating the input surface accepts
pub const RATING_MIN: u8 = 40;
/// Highest rating the input surface accepts
pub const RATING_MAX: u8 = 99;

/// One side's formation and ratings.
///
/// Ratings are independent sliders; nothing ties them to each other. The
/// `[40, 99]` range is checked by [`Validate`] at the input surface only,
/// the calculator computes with whatever it is given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate, PartialEq, Eq)]
pub struct TeamProfile {
    pub formation: Formation,
    #[validate(range(min = 40, max = 99))]
    pub overall_rating: u8,
    #[validate(range(min = 40, max = 99))]
    pub attack_rating: u8,
    #[validate(range(min = 40, max = 99))]
    pub midfield_rating: u8,
    #[validate(range(min = 40, max = 99))]
    pub defense_rating: u8,
}

impl TeamProfile {
    pub fn new(formation: Formation, overall: u8, attack: u8, midfield: u8, defense: u8) -> Self {
        Self {
            formation,
            overall_rating: overall,
            attack_rating: attack,
            midfield_rating: midfield,
            defense_rating: defense,
        }
    }

    /// Copy with every rating clamped into the accepted range
    pub fn clamped(&self) -> Self {
        let clamp = |r: u8| r.clamp(RATING_MIN, RATING_MAX);
        Self {
            formation: self.formation,
            overall_rating: clamp(self.overall_rating),
            attack_rating: clamp(self.attack_rating),
            midfield_rating: clamp(self.midfield_rating),
            defense_rating: clamp(self.defense_rating),
        }
    }

    pub(crate) fn overall(&self) -> i32 {
        i32::from(self.overall_rating)
    }

    pub(crate) fn attack(&self) -> i32 {
        i32::from(self.attack_rating)
    }

    pub(crate) fn midfield(&self) -> i32 {
        i32::from(self.midfield_rating)
    }

    pub(crate) fn defense(&self) -> i32 {
        i32::from(self.defense_rating)
    }
}

impl Default for TeamProfile {
    fn default() -> Self {
        Self::new(Formation::FourFourTwo, 70, 70, 70, 70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        let team = TeamProfile::new(Formation::FourThreeThree, 40, 99, 40, 99);
        assert!(team.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let team = TeamProfile::new(Formation::FourThreeThree, 39, 70, 70, 100);
        let errors = team.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("overall_rating"));
        assert!(fields.contains_key("defense_rating"));
        assert!(!fields.contains_key("attack_rating"));
    }

    #[test]
    fn test_clamped() {
        let team = TeamProfile::new(Formation::FiveThreeTwo, 10, 120, 60, 99).clamped();
        assert_eq!(team.overall_rating, RATING_MIN);
        assert_eq!(team.attack_rating, RATING_MAX);
        assert_eq!(team.midfield_rating, 60);
        assert!(team.validate().is_ok());
    }
}

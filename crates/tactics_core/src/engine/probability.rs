//! Win/draw/loss estimate
//!
//! Each value is clamped independently, so the triple does not always sum to
//! 100. That drift is the established output of the model and is kept as is.

use schemars::JsonSchema;
use serde::Serialize;

use crate::engine::tuning::ProbabilityParams;
use crate::models::{MatchContext, TeamProfile};

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub struct OutcomeProbabilities {
    pub win: u8,
    pub draw: u8,
    pub loss: u8,
}

impl OutcomeProbabilities {
    /// Sum of the three values; not guaranteed to be 100
    pub fn total(&self) -> u16 {
        u16::from(self.win) + u16::from(self.draw) + u16::from(self.loss)
    }
}

/// Overall rating difference adjusted for venue and competition stakes
pub fn adjusted_rating_diff(
    my: &TeamProfile,
    opp: &TeamProfile,
    ctx: &MatchContext,
    params: &ProbabilityParams,
) -> i32 {
    let venue = if ctx.is_home { params.home_bonus } else { params.away_bonus };
    let competition_bonus = if ctx.competition.is_high_stakes() { params.high_stakes_bonus } else { 0 };
    (my.overall() - opp.overall()).saturating_add(venue).saturating_add(competition_bonus)
}

pub fn outcome_probabilities(adjusted_diff: i32, params: &ProbabilityParams) -> OutcomeProbabilities {
    let diff = f64::from(adjusted_diff);
    let win = params.win_bounds.clamp_round(params.win_base + diff * params.win_slope);
    let loss = params.loss_bounds.clamp_round(params.loss_base - diff * params.loss_slope);
    let draw = params
        .draw_bounds
        .clamp_round(params.draw_total - f64::from(win) - f64::from(loss));
    OutcomeProbabilities { win, draw, loss }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Competition, Formation};

    fn params() -> ProbabilityParams {
        ProbabilityParams::default()
    }

    #[test]
    fn test_even_match_sums_to_100() {
        let p = outcome_probabilities(0, &params());
        assert_eq!(p, OutcomeProbabilities { win: 38, draw: 24, loss: 38 });
        assert_eq!(p.total(), 100);
    }

    #[test]
    fn test_home_favourite() {
        let p = outcome_probabilities(16, &params());
        assert_eq!(p, OutcomeProbabilities { win: 67, draw: 17, loss: 16 });
    }

    #[test]
    fn test_drift_above_100_is_preserved() {
        // win and loss both pinned, draw floor pushes the total past 100
        let p = outcome_probabilities(36, &params());
        assert_eq!(p, OutcomeProbabilities { win: 88, draw: 8, loss: 8 });
        assert_eq!(p.total(), 104);
    }

    #[test]
    fn test_heavy_underdog() {
        let p = outcome_probabilities(-19, &params());
        assert_eq!(p, OutcomeProbabilities { win: 12, draw: 23, loss: 65 });
    }

    #[test]
    fn test_adjusted_diff() {
        let my = TeamProfile::new(Formation::FourFourTwo, 75, 70, 70, 70);
        let opp = TeamProfile::new(Formation::FourFourTwo, 70, 70, 70, 70);
        let p = params();

        assert_eq!(adjusted_rating_diff(&my, &opp, &MatchContext::home(Competition::League), &p), 11);
        assert_eq!(adjusted_rating_diff(&my, &opp, &MatchContext::away(Competition::League), &p), 1);
        assert_eq!(adjusted_rating_diff(&my, &opp, &MatchContext::home(Competition::PlayoffFinal), &p), 13);
        assert_eq!(adjusted_rating_diff(&my, &opp, &MatchContext::away(Competition::ChampionsLeague), &p), 3);
        assert_eq!(adjusted_rating_diff(&my, &opp, &MatchContext::away(Competition::EuropaLeague), &p), 1);
    }

    #[test]
    fn test_adjusted_diff_saturates() {
        let my = TeamProfile::new(Formation::FourFourTwo, 90, 70, 70, 70);
        let opp = TeamProfile::new(Formation::FourFourTwo, 70, 70, 70, 70);
        let mut p = params();
        p.home_bonus = i32::MAX;
        p.high_stakes_bonus = i32::MAX;

        let ctx = MatchContext::home(Competition::ChampionsLeague);
        let diff = adjusted_rating_diff(&my, &opp, &ctx, &p);
        assert_eq!(diff, i32::MAX);
        assert_eq!(outcome_probabilities(diff, &p), OutcomeProbabilities { win: 88, draw: 8, loss: 8 });
    }
}

//! End-to-end evaluation scenarios

use tactics_core::engine::{AttackingWidth, ConfidenceLevel, DefensiveShape};
use tactics_core::models::{Competition, Formation, MatchContext, TeamProfile};
use tactics_core::tactics::style_of_play::STYLES;
use tactics_core::{evaluate, StyleOfPlay};

#[test]
fn test_pressing_favourite_shoots_on_sight() {
    let my = TeamProfile::new(Formation::FourThreeThree, 80, 85, 78, 75);
    let opp = TeamProfile::new(Formation::FourFourTwo, 70, 68, 65, 66);
    let ctx = MatchContext::home(Competition::League).with_high_press(true);

    let result = evaluate(&my, &opp, &ctx);

    // press row sits above the attack-heavy row
    assert_eq!(result.style_of_play, StyleOfPlay::Shoot);
    assert_eq!(result.recommended_formation, Formation::FourThreeThree);
    assert!(!result.formation_changed);
    assert_eq!(result.win_probability, 67);
    assert_eq!(result.draw_probability, 17);
    assert_eq!(result.loss_probability, 16);
    assert_eq!(result.pressure_index, 99);
    assert_eq!(result.transition_score, 65);
    assert_eq!(result.confidence_level, ConfidenceLevel::High);
    assert_eq!(result.defensive_shape, DefensiveShape::MidBlock);
    assert_eq!(result.attacking_width, AttackingWidth::Standard);
}

#[test]
fn test_heavy_underdog_switches_to_back_five() {
    let my = TeamProfile::new(Formation::FourThreeThree, 60, 62, 60, 58);
    let opp = TeamProfile::new(Formation::FourFourTwo, 75, 78, 74, 72);
    let ctx = MatchContext::home(Competition::League);

    let result = evaluate(&my, &opp, &ctx);

    assert_eq!(result.style_of_play, StyleOfPlay::Counter);
    assert_eq!(result.recommended_formation, Formation::FiveThreeTwo);
    assert!(result.formation_changed);
    assert_eq!(result.attacking_width, AttackingWidth::NarrowDirect);
    assert_eq!(result.defensive_shape, DefensiveShape::DeepBlock);
    assert!(result.alternative_formations.iter().all(|a| a.formation != Formation::FiveThreeTwo));
}

#[test]
fn test_long_ball_wins_over_attack_heavy_squad() {
    let my = TeamProfile::new(Formation::FourFourTwo, 75, 88, 70, 70);
    let opp = TeamProfile::new(Formation::FourFourTwo, 72, 70, 70, 70);
    let ctx = MatchContext::home(Competition::Cup).with_long_ball(true);

    assert_eq!(evaluate(&my, &opp, &ctx).style_of_play, StyleOfPlay::LongBall);
    // without the request the attack-heavy row fires
    let ctx = MatchContext::home(Competition::Cup);
    assert_eq!(evaluate(&my, &opp, &ctx).style_of_play, StyleOfPlay::Shoot);
}

#[test]
fn test_probability_drift_is_preserved() {
    let my = TeamProfile::new(Formation::FourThreeThree, 99, 99, 99, 99);
    let opp = TeamProfile::new(Formation::FourFourTwo, 63, 60, 60, 60);
    let ctx = MatchContext::home(Competition::League);

    let result = evaluate(&my, &opp, &ctx);

    assert_eq!(
        (result.win_probability, result.draw_probability, result.loss_probability),
        (88, 8, 8)
    );
    assert_eq!(result.probability_total(), 104);
}

#[test]
fn test_high_stakes_bonus_applies_to_probabilities_only() {
    let my = TeamProfile::new(Formation::FourFourTwo, 72, 70, 70, 70);
    let opp = TeamProfile::new(Formation::FourFourTwo, 70, 70, 70, 70);

    let league = evaluate(&my, &opp, &MatchContext::away(Competition::League));
    let final_ = evaluate(&my, &opp, &MatchContext::away(Competition::ChampionsLeague));

    // adjusted diff -2 vs 0
    assert_eq!(league.win_probability, 34);
    assert_eq!(final_.win_probability, 38);
    assert_eq!(league.transition_score, final_.transition_score);
    assert_eq!(league.style_of_play, final_.style_of_play);
}

#[test]
fn test_style_metadata_is_static() {
    for style in STYLES {
        let a = style.profile();
        let b = style.profile();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.key, style.key());
    }
}

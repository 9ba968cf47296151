//! Plain-text rendering for terminal output

use std::fmt::Write;

use tactics_core::api::{EvaluationBody, EvaluationResponse};
use tactics_core::models::Formation;
use tactics_core::tactics::formation_meta::FormationMeta;
use tactics_core::{CalculationResult, CounterPreset, StyleProfile};

pub fn response(response: &EvaluationResponse) -> String {
    let style = &response.style_profile;
    let mut out = String::new();

    match &response.body {
        EvaluationBody::Preview { preview } => {
            let _ = writeln!(out, "{} {}", style.icon, style.label);
            let _ = writeln!(
                out,
                "Formation: {}{}",
                preview.recommended_formation,
                if preview.formation_changed { " (changed)" } else { "" }
            );
            out.push_str("Full breakdown hidden in preview view\n");
        }
        EvaluationBody::Full { result } => full_result(&mut out, style, result),
    }

    out
}

fn full_result(out: &mut String, style: &StyleProfile, r: &CalculationResult) {
    let _ = writeln!(out, "{} {}", style.icon, style.label);
    let _ = writeln!(
        out,
        "Formation: {}{}",
        r.recommended_formation,
        if r.formation_changed { " (changed)" } else { "" }
    );
    let _ = writeln!(
        out,
        "Win {}% / Draw {}% / Loss {}%   confidence {:?}",
        r.win_probability, r.draw_probability, r.loss_probability, r.confidence_level
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", r.tactical_brief);
    let _ = writeln!(out, "{}", r.detailed_tactics);
    let _ = writeln!(out);

    out.push_str("Player roles\n");
    for role in &r.player_roles {
        let _ = writeln!(out, "  {:<12} {:<28} {}", role.position.label(), role.role, role.instruction);
    }

    if !r.alternative_formations.is_empty() {
        out.push_str("\nAlternatives\n");
        for alt in &r.alternative_formations {
            let _ = writeln!(
                out,
                "  {:<7} {:<10} {:>3}%  + {}  - {}",
                alt.formation.label(),
                format!("{:?}", alt.formation_type),
                alt.win_probability,
                alt.strengths,
                alt.weaknesses
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Pressure index:   {}", r.pressure_index);
    let _ = writeln!(out, "Transition score: {}", r.transition_score);
    let _ = writeln!(out, "Defensive shape:  {}", r.defensive_shape.label());
    let _ = writeln!(out, "Attacking width:  {}", r.attacking_width.label());
    let _ = writeln!(out, "Key matchup:      {}", r.key_matchup);
}

pub fn preset(p: &CounterPreset) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Opponent {} ({})", p.opponent_formation, p.strength);
    let _ = writeln!(out, "Counter formation: {} ({})", p.counter_formation, p.counter_shape);
    let _ = writeln!(out, "Style of play:     {}", p.style_of_play.label());
    let _ = writeln!(out, "Pressing {} / Style {} / Tempo {}", p.pressing, p.style, p.tempo);
    let _ = writeln!(
        out,
        "Marking {:?}, tackling {:?}, offside trap {}",
        p.marking,
        p.tackling,
        if p.offside_trap { "on" } else { "off" }
    );
    out
}

pub fn styles(profiles: &[&StyleProfile]) -> String {
    profiles
        .iter()
        .map(|p| format!("{:<8} {} {}\n", p.key, p.icon, p.label))
        .collect()
}

pub fn formations(list: &[Formation]) -> String {
    list.iter().map(|f| format!("{}\n", f.label())).collect()
}

pub fn formation_meta(list: &[FormationMeta]) -> String {
    list.iter()
        .map(|m| format!("{:<5} {:<8} {:>+3} {:?} {:?}\n", m.code, m.shape, m.depth, m.kind, m.role_shape))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::tactics::formation_meta::{compute_opp_preset, Strength, FORMATION_META};

    #[test]
    fn test_preset_text() {
        let p = compute_opp_preset("541B", Strength::MuchWeaker).unwrap();
        let text = preset(&p);
        assert!(text.contains("Counter formation: 424 (4-2-4)"));
        assert!(text.contains("Pressing 81 / Style 90 / Tempo 65"));
        assert!(text.contains("offside trap on"));
    }

    #[test]
    fn test_formation_meta_lines_show_depth() {
        let text = formation_meta(&FORMATION_META[1..2]);
        assert_eq!(text, "631A  6-3-1     -5 Defensive Narrow\n");
    }

    #[test]
    fn test_formation_lines() {
        assert_eq!(formations(&[Formation::FourFourTwo, Formation::FiveThreeTwo]), "4-4-2\n5-3-2\n");
    }
}

//! Briefing text: the headline paragraph and the detailed instructions

use crate::models::{Formation, MatchContext};
use crate::tactics::style_of_play::StyleOfPlay;

pub fn tactical_brief(style: StyleOfPlay, formation: Formation) -> String {
    match style {
        StyleOfPlay::Counter => format!(
            "Sit in a defensive {formation} shape and absorb their pressure. Transition instantly \
             when possession is won; your pace advantage on the break is the key weapon."
        ),
        StyleOfPlay::Shoot => format!(
            "Your attacking quality is superior. Set a compact {formation} and press high, forcing \
             mistakes in dangerous areas. Shoot on every realistic opportunity and don't overplay."
        ),
        StyleOfPlay::Wing => format!(
            "Overload the wide channels in a {formation}. Full-backs and wide forwards must pin back \
             their wide defenders, forcing overlapping and crossing opportunities from deep."
        ),
        StyleOfPlay::LongBall => format!(
            "Use the {formation} to compress their midfield. Hit accurate long balls early to your \
             target striker, win second balls in the attacking third and build from there."
        ),
        StyleOfPlay::Passing => format!(
            "Dominate possession with patient {formation} build-up. Circulate through midfield \
             triangles and create progressive gaps with movement until the opening appears."
        ),
    }
}

/// Defensive line instruction from the defense advantage
pub fn defensive_line_instruction(defense_advantage: i32) -> &'static str {
    if defense_advantage >= 5 {
        "push a high line"
    } else if defense_advantage <= -5 {
        "drop deep, deny space in behind"
    } else {
        "maintain a mid-block"
    }
}

pub fn set_piece_focus(win_probability: u8) -> &'static str {
    if win_probability >= 60 {
        "Short corners to exploit their loose shape"
    } else {
        "Zonal marking on set pieces, counter quickly after clearances"
    }
}

/// The only output the offside-trap toggle affects
pub fn detailed_tactics(ctx: &MatchContext, defense_advantage: i32, win_probability: u8) -> String {
    let mut text = String::new();
    if ctx.use_high_press {
        text.push_str("Apply a high press immediately after losing possession. ");
    }
    if ctx.use_offside_trap {
        text.push_str("Use an aggressive offside trap on opponent throw-ins and corners. ");
    }
    text.push_str(&format!(
        "Defensive shape: {}. Set piece focus: {}.",
        defensive_line_instruction(defense_advantage),
        set_piece_focus(win_probability)
    ));
    text
}
